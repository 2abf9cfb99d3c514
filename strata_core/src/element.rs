// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawable unit of a flattened draw list.
//!
//! An [`Element`] is what a compositor actually submits to a render pass:
//! a transform, a shared content payload, a blend mode, and the stencil
//! clip depths that flatten nested clip scopes into a linear comparison.
//! Elements are plain values — moving one is cheap, and duplication only
//! happens through the explicit [`Clone`] implementation, which shares the
//! content payload rather than deep-copying it.
//!
//! # Clip depths
//!
//! `clip_depth` is the nesting level this element renders *within*: how many
//! ancestor clips must have passed for its fragments to survive.
//! `new_clip_depth` is the level the element *establishes* when it is used
//! as a clip. A fresh element sits at depth 0 and would establish depth 1,
//! so it is valid both as ordinary content and as a first-level clip without
//! configuration. [`shader_clip_depth`](Element::shader_clip_depth) encodes
//! `new_clip_depth` into the normalized depth range for the GPU-side test.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use kurbo::Rect;

use crate::blend::BlendMode;
use crate::capture::Capture;
use crate::color::Color;
use crate::content::{ClipCoverage, SharedContent};
use crate::geometry::PixelSize;
use crate::pass::{RenderContext, RenderPass};
use crate::snapshot::Snapshot;
use crate::texture::TextureContent;
use crate::transform::Transform3d;

/// Depth-buffer distance between adjacent clip levels.
///
/// Exactly `1 / 2^18`: small enough that 2^18 nested clip levels stay
/// distinguishable in the normalized `[0, 1]` depth range, and fixed so
/// depth-test behavior is identical across implementations. Not a tunable.
const DEPTH_EPSILON: f32 = 1.0 / (1_u32 << 18) as f32;

/// A drawable unit: transform, shared content, blend mode, and clip depths.
pub struct Element {
    transform: Transform3d,
    content: Option<SharedContent>,
    blend_mode: BlendMode,
    clip_depth: u32,
    new_clip_depth: u32,
    capture: Capture,
}

impl Default for Element {
    fn default() -> Self {
        Self::new()
    }
}

impl Element {
    /// Creates an element with an identity transform, no content,
    /// source-over blending, and top-level clip depths.
    #[must_use]
    pub fn new() -> Self {
        Self {
            transform: Transform3d::IDENTITY,
            content: None,
            blend_mode: BlendMode::SourceOver,
            clip_depth: 0,
            new_clip_depth: 1,
            capture: Capture::disabled(),
        }
    }

    /// Creates an element that re-draws an offscreen-rendered snapshot.
    ///
    /// `None` in, `None` out: an absent snapshot produces no element, which
    /// is not an error. Otherwise the element carries a
    /// [`TextureContent`] spanning the snapshot texture's full rectangle
    /// with the snapshot's sampler and opacity, and the snapshot's
    /// transform.
    #[must_use]
    pub fn from_snapshot(
        snapshot: Option<&Snapshot>,
        blend_mode: BlendMode,
        clip_depth: u32,
    ) -> Option<Self> {
        let snapshot = snapshot?;

        let texture_rect = snapshot.texture.size.to_rect();
        let mut content = TextureContent::new(snapshot.texture, texture_rect);
        content.set_sampler(snapshot.sampler);
        content.set_opacity(snapshot.opacity);

        let mut element = Self::new();
        element.set_blend_mode(blend_mode);
        element.set_clip_depth(clip_depth);
        element.set_transform(snapshot.transform);
        element.set_content(Some(Rc::new(RefCell::new(content))));
        Some(element)
    }

    /// Returns the local-to-global transform.
    #[must_use]
    pub fn transform(&self) -> &Transform3d {
        &self.transform
    }

    /// Sets the local-to-global transform.
    pub fn set_transform(&mut self, transform: Transform3d) {
        self.transform = transform;
    }

    /// Returns the content payload, if any.
    #[must_use]
    pub fn content(&self) -> Option<&SharedContent> {
        self.content.as_ref()
    }

    /// Sets or clears the content payload.
    ///
    /// Contents are shared: several elements may reference one payload, and
    /// in-place mutations (inherited opacity, coverage hints) are visible
    /// through all of them.
    pub fn set_content(&mut self, content: Option<SharedContent>) {
        self.content = content;
    }

    /// Returns the blend mode.
    #[must_use]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Sets the blend mode.
    pub fn set_blend_mode(&mut self, blend_mode: BlendMode) {
        self.blend_mode = blend_mode;
    }

    /// Returns the clip level this element renders within.
    #[must_use]
    pub fn clip_depth(&self) -> u32 {
        self.clip_depth
    }

    /// Sets the clip level this element renders within.
    pub fn set_clip_depth(&mut self, clip_depth: u32) {
        self.clip_depth = clip_depth;
    }

    /// Adds `n` to the clip level, for flattening nested clip scopes as a
    /// compositor descends a clip hierarchy.
    pub fn increment_clip_depth(&mut self, n: u32) {
        self.clip_depth += n;
    }

    /// Returns the clip level this element establishes when used as a clip.
    #[must_use]
    pub fn new_clip_depth(&self) -> u32 {
        self.new_clip_depth
    }

    /// Sets the clip level this element establishes when used as a clip.
    pub fn set_new_clip_depth(&mut self, new_clip_depth: u32) {
        self.new_clip_depth = new_clip_depth;
    }

    /// Returns the established clip level encoded as a depth-buffer value:
    /// `new_clip_depth / 2^18`, clamped to `[0, 1]`.
    ///
    /// Monotonic in `new_clip_depth`, so deeper clip levels always write
    /// larger depth values.
    #[must_use]
    pub fn shader_clip_depth(&self) -> f32 {
        (self.new_clip_depth as f32 * DEPTH_EPSILON).clamp(0.0, 1.0)
    }

    /// Returns the screen-space region this element can affect, or `None`
    /// for an element with no content.
    ///
    /// Compositors use this for render-target sizing and damage tracking.
    #[must_use]
    pub fn coverage(&self) -> Option<Rect> {
        self.content.as_ref()?.borrow().coverage(self)
    }

    /// Returns this element's effect on the ambient clip coverage.
    ///
    /// An element with no content reports no change and no coverage.
    #[must_use]
    pub fn clip_coverage(&self, current_clip_coverage: Option<Rect>) -> ClipCoverage {
        match &self.content {
            Some(content) => content.borrow().clip_coverage(self, current_clip_coverage),
            None => ClipCoverage::default(),
        }
    }

    /// Returns whether this element needs to be drawn given the ambient
    /// clip coverage.
    ///
    /// With the `content-culling` feature the decision is delegated to the
    /// content (an element without content renders trivially and reports
    /// `true`); without it, every element renders.
    #[must_use]
    pub fn should_render(&self, clip_coverage: Option<Rect>) -> bool {
        #[cfg(feature = "content-culling")]
        {
            match &self.content {
                Some(content) => content.borrow().should_render(self, clip_coverage),
                None => true,
            }
        }
        #[cfg(not(feature = "content-culling"))]
        {
            let _ = clip_coverage;
            true
        }
    }

    /// Returns whether an ancestor's alpha can be folded into this
    /// element's own draw instead of compositing a separate layer.
    ///
    /// True only with a content present, a blend mode where the fold is
    /// color-correct — source-over always (transparency mixes linearly), or
    /// plain source with a fully opaque content (otherwise the destination
    /// would wrongly show through the source's alpha) — and a content that
    /// supports inheritance.
    #[must_use]
    pub fn can_inherit_opacity(&self) -> bool {
        let Some(content) = &self.content else {
            return false;
        };
        let content = content.borrow();
        if !(self.blend_mode == BlendMode::SourceOver
            || (self.blend_mode == BlendMode::Source && content.is_opaque()))
        {
            return false;
        }
        content.can_inherit_opacity(self)
    }

    /// Folds an inherited alpha factor into the content's draw state.
    ///
    /// Returns `false` — leaving the element and content untouched — when
    /// [`can_inherit_opacity`](Self::can_inherit_opacity) does not hold;
    /// the optimization simply does not apply. Otherwise the
    /// source-with-opaque-content case is rewritten to source-over (now
    /// equivalent, and simpler downstream) and the content is mutated in
    /// place. The mutation is visible to every element sharing the content.
    pub fn set_inherited_opacity(&mut self, alpha: f32) -> bool {
        if !self.can_inherit_opacity() {
            return false;
        }
        let Some(content) = self.content.clone() else {
            return false;
        };
        if self.blend_mode == BlendMode::Source && content.borrow().is_opaque() {
            self.blend_mode = BlendMode::SourceOver;
        }
        content.borrow_mut().set_inherited_opacity(alpha);
        true
    }

    /// If drawing this element is equivalent to clearing the whole target
    /// to one color, returns that color.
    #[must_use]
    pub fn as_background_color(&self, target_size: PixelSize) -> Option<Color> {
        self.content
            .as_ref()?
            .borrow()
            .as_background_color(self, target_size)
    }

    /// Returns the scale at which content drawn under this element's
    /// transform should rasterize text.
    #[must_use]
    pub fn derive_text_scale(&self) -> f64 {
        self.transform.max_basis_length_xy()
    }

    /// Draws this element into `pass`.
    ///
    /// An element with no content succeeds trivially. If the content has no
    /// coverage hint yet, one spanning the pass's full render target is
    /// installed first, so contents that size internal allocations from the
    /// hint get a usable default without every caller setting one.
    pub fn render(&self, ctx: &mut dyn RenderContext, pass: &mut dyn RenderPass) -> bool {
        let Some(content) = &self.content else {
            return true;
        };

        {
            let mut content = content.borrow_mut();
            if content.coverage_hint().is_none() {
                content.set_coverage_hint(pass.render_target_size().to_rect());
            }
        }

        let content = content.borrow();
        content.render(ctx, self, pass)
    }

    /// Returns the attached debug capture.
    #[must_use]
    pub fn capture(&self) -> &Capture {
        &self.capture
    }

    /// Attaches a debug capture. Never consulted by rendering.
    pub fn set_capture(&mut self, capture: Capture) {
        self.capture = capture;
    }
}

impl Clone for Element {
    /// Explicitly duplicates this element.
    ///
    /// The copy gets independent transform, blend, and depth state, but
    /// *shares* the content payload — in-place content mutations remain
    /// visible through both elements. Deep-copy the content first when that
    /// entanglement is unwanted.
    fn clone(&self) -> Self {
        Self {
            transform: self.transform,
            content: self.content.clone(),
            blend_mode: self.blend_mode,
            clip_depth: self.clip_depth,
            new_clip_depth: self.new_clip_depth,
            capture: self.capture.clone(),
        }
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("transform", &self.transform)
            .field("blend_mode", &self.blend_mode)
            .field("clip_depth", &self.clip_depth)
            .field("new_clip_depth", &self.new_clip_depth)
            .field("has_content", &self.content.is_some())
            .finish_non_exhaustive()
    }
}
