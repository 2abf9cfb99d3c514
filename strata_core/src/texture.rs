// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Texture descriptions and texture-backed content.
//!
//! Textures themselves are backend-managed; this crate sees them as opaque
//! keys plus the metadata coverage and opacity logic needs. The one concrete
//! [`Content`] the core owns, [`TextureContent`], draws such a texture as a
//! quad and exists so snapshots can be turned back into draw-list elements.

use kurbo::Rect;

use crate::content::Content;
use crate::element::Element;
use crate::geometry::PixelSize;
use crate::pass::{DrawCommand, RenderContext, RenderPass};

/// An opaque handle to a backend-managed resource.
///
/// Keys are assigned by the rendering backend and passed through without
/// interpretation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(pub u64);

impl core::fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ResourceKey({})", self.0)
    }
}

/// Description of a backend-managed texture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    /// Backend resource key.
    pub key: ResourceKey,
    /// Texture dimensions in texels.
    pub size: PixelSize,
    /// Whether every texel is fully opaque (known at allocation time, e.g.
    /// from the pixel format).
    pub opaque: bool,
}

/// Minification/magnification filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Nearest-texel sampling.
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Linear,
}

/// How sampling behaves outside a texture's bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileMode {
    /// Replicate the edge texel.
    #[default]
    Clamp,
    /// Repeat the texture.
    Repeat,
    /// Repeat, alternating mirrored copies.
    Mirror,
    /// Transparent black outside the bounds.
    Decal,
}

/// Sampling parameters carried alongside a texture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SamplerDescriptor {
    /// Filter when minifying.
    pub min_filter: Filter,
    /// Filter when magnifying.
    pub mag_filter: Filter,
    /// Tiling along the horizontal axis.
    pub tile_mode_x: TileMode,
    /// Tiling along the vertical axis.
    pub tile_mode_y: TileMode,
}

/// Content that draws a texture region as a quad.
///
/// `destination` is the local-space rectangle the quad occupies; `source`
/// is the texel region sampled into it. Opacity is the product of the
/// content's own opacity and any inherited factor baked in through
/// [`Content::set_inherited_opacity`].
#[derive(Clone, Debug)]
pub struct TextureContent {
    texture: TextureHandle,
    destination: Rect,
    source: Rect,
    sampler: SamplerDescriptor,
    opacity: f32,
    inherited_opacity: f32,
    coverage_hint: Option<Rect>,
}

impl TextureContent {
    /// Creates a content drawing the full `texture` into `destination`.
    #[must_use]
    pub fn new(texture: TextureHandle, destination: Rect) -> Self {
        Self {
            texture,
            destination,
            source: texture.size.to_rect(),
            sampler: SamplerDescriptor::default(),
            opacity: 1.0,
            inherited_opacity: 1.0,
            coverage_hint: None,
        }
    }

    /// Sets the texel region sampled into the destination quad.
    pub fn set_source(&mut self, source: Rect) {
        self.source = source;
    }

    /// Sets the sampling parameters.
    pub fn set_sampler(&mut self, sampler: SamplerDescriptor) {
        self.sampler = sampler;
    }

    /// Sets the content's own opacity.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Returns the opacity actually applied when drawing: the content's own
    /// opacity multiplied by the inherited factor.
    #[must_use]
    pub fn total_opacity(&self) -> f32 {
        self.opacity * self.inherited_opacity
    }
}

impl Content for TextureContent {
    fn coverage(&self, element: &Element) -> Option<Rect> {
        if self.total_opacity() == 0.0 {
            return None;
        }
        Some(element.transform().map_rect(self.destination))
    }

    fn is_opaque(&self) -> bool {
        self.total_opacity() >= 1.0 && self.texture.opaque
    }

    fn can_inherit_opacity(&self, _element: &Element) -> bool {
        true
    }

    fn set_inherited_opacity(&mut self, alpha: f32) {
        self.inherited_opacity = alpha;
    }

    fn coverage_hint(&self) -> Option<Rect> {
        self.coverage_hint
    }

    fn set_coverage_hint(&mut self, hint: Rect) {
        self.coverage_hint = Some(hint);
    }

    fn render(
        &self,
        _ctx: &mut dyn RenderContext,
        element: &Element,
        pass: &mut dyn RenderPass,
    ) -> bool {
        // Nothing to sample or nothing visible: a successful no-op.
        if self.destination.area() == 0.0 || self.source.area() == 0.0 {
            return true;
        }
        if self.total_opacity() == 0.0 {
            return true;
        }
        pass.submit(DrawCommand {
            texture: self.texture,
            source: self.source,
            destination: self.destination,
            sampler: self.sampler,
            transform: *element.transform(),
            opacity: self.total_opacity(),
            blend_mode: element.blend_mode(),
            clip_depth: element.clip_depth(),
            shader_clip_depth: element.shader_clip_depth(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::any::Any;

    use crate::blend::BlendMode;
    use crate::transform::Transform3d;

    use super::*;

    struct NullContext;

    impl RenderContext for NullContext {
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct RecordingPass {
        size: PixelSize,
        commands: Vec<DrawCommand>,
        accept: bool,
    }

    impl RecordingPass {
        fn new(size: PixelSize) -> Self {
            Self {
                size,
                commands: Vec::new(),
                accept: true,
            }
        }
    }

    impl RenderPass for RecordingPass {
        fn render_target_size(&self) -> PixelSize {
            self.size
        }

        fn submit(&mut self, command: DrawCommand) -> bool {
            self.commands.push(command);
            self.accept
        }
    }

    fn handle(opaque: bool) -> TextureHandle {
        TextureHandle {
            key: ResourceKey(7),
            size: PixelSize::new(64, 32),
            opaque,
        }
    }

    #[test]
    fn new_samples_the_full_texture() {
        let content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 64.0, 32.0));
        assert_eq!(content.source, Rect::new(0.0, 0.0, 64.0, 32.0));
        assert_eq!(content.total_opacity(), 1.0);
    }

    #[test]
    fn coverage_maps_destination_through_element_transform() {
        let content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut element = Element::new();
        element.set_transform(Transform3d::from_translation(5.0, 5.0));
        assert_eq!(
            content.coverage(&element),
            Some(Rect::new(5.0, 5.0, 15.0, 15.0))
        );
    }

    #[test]
    fn coverage_is_absent_when_fully_transparent() {
        let mut content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 10.0, 10.0));
        content.set_opacity(0.0);
        assert!(content.coverage(&Element::new()).is_none());
    }

    #[test]
    fn opacity_requires_opaque_texture_and_full_alpha() {
        let mut content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 4.0, 4.0));
        assert!(content.is_opaque());
        content.set_inherited_opacity(0.5);
        assert!(!content.is_opaque());

        let content = TextureContent::new(handle(false), Rect::new(0.0, 0.0, 4.0, 4.0));
        assert!(!content.is_opaque());
    }

    #[test]
    fn render_submits_element_state() {
        let mut content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 10.0, 10.0));
        content.set_opacity(0.5);
        content.set_inherited_opacity(0.5);

        let mut element = Element::new();
        element.set_blend_mode(BlendMode::Plus);
        element.set_clip_depth(3);
        element.set_new_clip_depth(4);

        let mut pass = RecordingPass::new(PixelSize::new(100, 100));
        assert!(content.render(&mut NullContext, &element, &mut pass));

        assert_eq!(pass.commands.len(), 1);
        let cmd = &pass.commands[0];
        assert_eq!(cmd.blend_mode, BlendMode::Plus);
        assert_eq!(cmd.clip_depth, 3);
        assert_eq!(cmd.shader_clip_depth, element.shader_clip_depth());
        assert_eq!(cmd.opacity, 0.25);
    }

    #[test]
    fn render_of_empty_region_is_a_successful_noop() {
        let content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 0.0, 10.0));
        let mut pass = RecordingPass::new(PixelSize::new(100, 100));
        assert!(content.render(&mut NullContext, &Element::new(), &mut pass));
        assert!(pass.commands.is_empty());
    }

    #[test]
    fn render_propagates_pass_rejection() {
        let content = TextureContent::new(handle(true), Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut pass = RecordingPass::new(PixelSize::new(100, 100));
        pass.accept = false;
        assert!(!content.render(&mut NullContext, &Element::new(), &mut pass));
    }
}
