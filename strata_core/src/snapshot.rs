// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offscreen-rendered intermediates.

use crate::texture::{SamplerDescriptor, TextureHandle};
use crate::transform::Transform3d;

/// A previously rendered offscreen result, reusable as element content.
///
/// Snapshots are produced by an external offscreen pipeline (subpass
/// rendering, caches). [`Element::from_snapshot`](crate::element::Element::from_snapshot)
/// is the sole bridge from a snapshot back into the draw list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    /// The rendered texture.
    pub texture: TextureHandle,
    /// How the texture should be sampled when re-drawn.
    pub sampler: SamplerDescriptor,
    /// Opacity the offscreen result carries.
    pub opacity: f32,
    /// Transform that places the texture in global coordinates.
    pub transform: Transform3d,
}
