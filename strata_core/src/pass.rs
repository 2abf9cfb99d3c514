// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The consumed render-pass contract.
//!
//! Rendering backends live outside this crate. An element only needs two
//! things from the pass it draws into: the render target's dimensions (for
//! the lazy coverage-hint default) and a place to submit draw commands.
//! Both are expressed as traits so frame loops and tests can supply
//! recording fakes.
//!
//! [`Element::render`](crate::element::Element::render) is synchronous: it
//! enqueues work into the caller-owned context/pass and returns without
//! waiting on GPU completion.

use core::any::Any;

use kurbo::Rect;

use crate::blend::BlendMode;
use crate::geometry::PixelSize;
use crate::texture::{SamplerDescriptor, TextureHandle};
use crate::transform::Transform3d;

/// Renderer-level services passed through to content implementations.
///
/// The element core never interprets this value; it forwards it verbatim to
/// [`Content::render`](crate::content::Content::render). Content
/// implementations recover the renderer's concrete type through
/// [`as_any_mut`](Self::as_any_mut).
pub trait RenderContext {
    /// Returns `self` as `&mut dyn Any` for downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// One textured-quad submission to a render pass.
///
/// `clip_depth` is the stencil reference the fragment must satisfy;
/// `shader_clip_depth` is the depth-buffer value written so that content
/// whose required clip level has not been established is rejected by the
/// depth test.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    /// The texture to sample.
    pub texture: TextureHandle,
    /// Texel region of the texture to sample.
    pub source: Rect,
    /// Local-space quad to draw.
    pub destination: Rect,
    /// Sampling parameters.
    pub sampler: SamplerDescriptor,
    /// Local-to-target transform.
    pub transform: Transform3d,
    /// Combined opacity applied to sampled colors.
    pub opacity: f32,
    /// Compositing operator.
    pub blend_mode: BlendMode,
    /// Stencil clip level this draw renders within.
    pub clip_depth: u32,
    /// Normalized depth value for clip rejection, in `[0, 1]`.
    pub shader_clip_depth: f32,
}

/// A render pass accepting draw submissions for one target.
pub trait RenderPass {
    /// Returns the dimensions of the render target.
    fn render_target_size(&self) -> PixelSize;

    /// Submits one draw command.
    ///
    /// Returns `false` if the pass rejected the command (e.g. command
    /// encoding failed); the frame is then considered failed upstream.
    fn submit(&mut self, command: DrawCommand) -> bool;
}
