// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compositing blend modes and their destructive-blend classification.

/// Blend mode for compositing an element over the destination.
///
/// The variants through [`Modulate`](Self::Modulate) are expressible as
/// fixed-function pipeline blend state; the remaining "advanced" modes
/// require sampling the destination. [`LAST_PIPELINE_MODE`](Self::LAST_PIPELINE_MODE)
/// and [`LAST_ADVANCED_MODE`](Self::LAST_ADVANCED_MODE) delimit the two
/// ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Both source and destination are cleared.
    Clear,
    /// The source replaces the destination.
    Source,
    /// The destination is kept unchanged.
    Destination,
    /// Standard source-over alpha compositing.
    #[default]
    SourceOver,
    /// The destination is composited over the source.
    DestinationOver,
    /// The source, only where the destination is present.
    SourceIn,
    /// The destination, only where the source is present.
    DestinationIn,
    /// The source, only where the destination is absent.
    SourceOut,
    /// The destination, only where the source is absent.
    DestinationOut,
    /// The source over the destination, masked by the destination.
    SourceAtop,
    /// The destination over the source, masked by the source.
    DestinationAtop,
    /// Source or destination, where exactly one is present.
    Xor,
    /// Component-wise saturating addition.
    Plus,
    /// Component-wise multiplication including alpha.
    Modulate,
    /// Inverse multiply: lightens the destination.
    Screen,
    /// Multiply or screen, depending on the destination.
    Overlay,
    /// The darker of source and destination per component.
    Darken,
    /// The lighter of source and destination per component.
    Lighten,
    /// Brightens the destination to reflect the source.
    ColorDodge,
    /// Darkens the destination to reflect the source.
    ColorBurn,
    /// Multiply or screen, depending on the source.
    HardLight,
    /// Softly darkens or lightens depending on the source.
    SoftLight,
    /// Absolute component-wise difference.
    Difference,
    /// Like difference, with lower contrast.
    Exclusion,
    /// Component-wise multiplication of color, compositing alpha.
    Multiply,
    /// The source's hue with the destination's saturation and luminosity.
    Hue,
    /// The source's saturation with the destination's hue and luminosity.
    Saturation,
    /// The source's hue and saturation with the destination's luminosity.
    Color,
    /// The source's luminosity with the destination's hue and saturation.
    Luminosity,
}

impl BlendMode {
    /// The last mode expressible as fixed-function pipeline blend state.
    pub const LAST_PIPELINE_MODE: Self = Self::Modulate;

    /// The last advanced (destination-sampling) mode.
    pub const LAST_ADVANCED_MODE: Self = Self::Luminosity;

    /// Returns `true` if this mode is "destructive", meaning that even a
    /// fully transparent source can change the destination.
    ///
    /// Render-target allocations can only be shrinkwrapped to drawn
    /// coverage when every contributing element blends non-destructively;
    /// a destructive element touches its whole transformed region no matter
    /// how transparent its content is.
    #[must_use]
    pub const fn is_destructive(self) -> bool {
        matches!(
            self,
            Self::Clear
                | Self::Source
                | Self::SourceIn
                | Self::DestinationIn
                | Self::SourceOut
                | Self::DestinationOut
                | Self::DestinationAtop
                | Self::Xor
                | Self::Modulate
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BlendMode; 29] = [
        BlendMode::Clear,
        BlendMode::Source,
        BlendMode::Destination,
        BlendMode::SourceOver,
        BlendMode::DestinationOver,
        BlendMode::SourceIn,
        BlendMode::DestinationIn,
        BlendMode::SourceOut,
        BlendMode::DestinationOut,
        BlendMode::SourceAtop,
        BlendMode::DestinationAtop,
        BlendMode::Xor,
        BlendMode::Plus,
        BlendMode::Modulate,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Multiply,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    #[test]
    fn default_is_source_over() {
        assert_eq!(BlendMode::default(), BlendMode::SourceOver);
    }

    #[test]
    fn destructive_set_is_exact() {
        let destructive = [
            BlendMode::Clear,
            BlendMode::Source,
            BlendMode::SourceIn,
            BlendMode::DestinationIn,
            BlendMode::SourceOut,
            BlendMode::DestinationOut,
            BlendMode::DestinationAtop,
            BlendMode::Xor,
            BlendMode::Modulate,
        ];
        for mode in ALL {
            assert_eq!(
                mode.is_destructive(),
                destructive.contains(&mode),
                "misclassified {mode:?}"
            );
        }
    }

    #[test]
    fn range_delimiters() {
        assert_eq!(BlendMode::LAST_PIPELINE_MODE, BlendMode::Modulate);
        assert_eq!(BlendMode::LAST_ADVANCED_MODE, BlendMode::Luminosity);
    }
}
