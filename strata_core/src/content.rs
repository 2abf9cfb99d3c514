// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability contract element payloads satisfy.
//!
//! Concrete content kinds (texture-backed, procedural/filter, shader) live
//! outside this crate behind the single [`Content`] trait; the one exception
//! is [`TextureContent`](crate::texture::TextureContent), which the core owns
//! because snapshot construction needs it.
//!
//! Contents are held by elements through [`SharedContent`]: reference-counted
//! shared ownership with interior mutability. Sharing one content across
//! elements is how cached offscreen results back many draws, but it entangles
//! the sharers — a mutation such as
//! [`set_inherited_opacity`](Content::set_inherited_opacity) or the lazy
//! coverage-hint install during [`Element::render`](crate::element::Element::render)
//! is visible through every referencing element. Mutate-then-share, or
//! clone-before-mutate.

use alloc::rc::Rc;
use core::cell::RefCell;

use kurbo::Rect;

use crate::color::Color;
use crate::element::Element;
use crate::geometry::PixelSize;
use crate::pass::{RenderContext, RenderPass};

/// Shared-ownership handle to a content payload.
///
/// Single-threaded by design; the compositing thread owns all elements and
/// their contents (no internal locking anywhere in this crate).
pub type SharedContent = Rc<RefCell<dyn Content>>;

/// How a content changes the ambient clip state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipChange {
    /// The content leaves the clip state alone (ordinary drawing).
    #[default]
    NoChange,
    /// The content establishes a new, narrower clip level.
    Appends,
    /// The content restores the clip level of an enclosing scope.
    Restores,
}

/// A content's effect on clip coverage, as propagated down a draw list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClipCoverage {
    /// How the clip state changes.
    pub change: ClipChange,
    /// The clip region after this content, if known.
    pub coverage: Option<Rect>,
}

/// The polymorphic payload an [`Element`] draws.
///
/// Every query receives the element so implementations can factor in its
/// transform and blend state. Defaulted methods encode the behavior of a
/// plain, non-clipping content that neither supports opacity inheritance nor
/// uses coverage hints; implementations override what they support.
pub trait Content {
    /// Returns the screen-space rectangle this content can affect when drawn
    /// by `element`, or `None` if it draws nothing.
    fn coverage(&self, element: &Element) -> Option<Rect>;

    /// Returns this content's effect on the ambient clip coverage.
    ///
    /// Non-clip contents pass the current coverage through unchanged.
    fn clip_coverage(&self, element: &Element, current: Option<Rect>) -> ClipCoverage {
        let _ = element;
        ClipCoverage {
            change: ClipChange::NoChange,
            coverage: current,
        }
    }

    /// Returns `true` if this content covers its whole coverage rectangle
    /// with fully opaque pixels.
    fn is_opaque(&self) -> bool {
        false
    }

    /// Returns `true` if an ancestor's alpha can be folded into this
    /// content's own draw instead of compositing a separate layer.
    fn can_inherit_opacity(&self, element: &Element) -> bool {
        let _ = element;
        false
    }

    /// Bakes an inherited alpha factor into this content's draw state.
    ///
    /// Only called after [`can_inherit_opacity`](Self::can_inherit_opacity)
    /// returned `true`; contents reporting support must override this.
    fn set_inherited_opacity(&mut self, alpha: f32) {
        let _ = alpha;
    }

    /// Returns the coverage hint, if one has been set.
    ///
    /// The hint bounds the screen-space region the content needs to consider
    /// when sizing internal allocations (procedural and filter contents).
    fn coverage_hint(&self) -> Option<Rect> {
        None
    }

    /// Sets the coverage hint. Contents that size nothing from it may
    /// ignore it.
    fn set_coverage_hint(&mut self, hint: Rect) {
        let _ = hint;
    }

    /// Returns `true` if drawing `element` can affect anything inside
    /// `clip_coverage`.
    ///
    /// The default rejects elements with no ambient clip coverage and those
    /// whose coverage does not overlap it.
    fn should_render(&self, element: &Element, clip_coverage: Option<Rect>) -> bool {
        let Some(clip) = clip_coverage else {
            return false;
        };
        match self.coverage(element) {
            Some(coverage) => coverage.intersect(clip).area() > 0.0,
            None => false,
        }
    }

    /// Draws this content for `element` into `pass`.
    ///
    /// Returns `false` if the renderer rejected the submission; the caller
    /// decides whether to abort the frame.
    fn render(
        &self,
        ctx: &mut dyn RenderContext,
        element: &Element,
        pass: &mut dyn RenderPass,
    ) -> bool;

    /// If this content drawn by `element` is equivalent to clearing the
    /// whole `target_size` region to a single color, returns that color.
    ///
    /// Lets a compositor replace a full-target draw with a cheap clear.
    fn as_background_color(&self, element: &Element, target_size: PixelSize) -> Option<Color> {
        let _ = (element, target_size);
        None
    }
}
