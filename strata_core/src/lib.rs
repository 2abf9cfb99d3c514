// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawable-element core for retained-mode 2D rendering.
//!
//! `strata_core` provides the value type at the heart of a flattened,
//! scene-graph-free draw list: the [`Element`](element::Element). An element
//! bundles a local-to-global transform, a shared polymorphic content payload,
//! a compositing blend mode, and the stencil clip depths that make nested
//! clipping correct without z-fighting. It is `no_std` compatible (with
//! `alloc`).
//!
//! # Architecture
//!
//! An external compositor constructs elements (directly or from offscreen
//! [`Snapshot`](snapshot::Snapshot)s), interrogates them while flattening a
//! scene, and dispatches each one into a render pass once per frame:
//!
//! ```text
//!   Compositor
//!       │  build / from_snapshot()
//!       ▼
//!   Element ──► coverage() / clip_coverage() ──► target sizing, damage
//!       │                                        tracking, clip narrowing
//!       │  can_inherit_opacity() / set_inherited_opacity()
//!       │       └─► collapses "extra alpha layer" passes into the
//!       │           content's own draw
//!       ▼
//!   Element::render(ctx, pass) ──► Content::render ──► RenderPass::submit
//! ```
//!
//! **[`element`]** — The drawable unit and its clip/blend/opacity logic.
//!
//! **[`content`]** — The capability contract content payloads satisfy, held
//! by shared ownership so cached contents can back many elements.
//!
//! **[`blend`]** — Compositing operators and the destructive-blend
//! classification that gates render-target shrinkwrapping.
//!
//! **[`pass`]** — The consumed render-pass contract: target dimensions and
//! draw-command submission.
//!
//! **[`snapshot`]** / **[`texture`]** — The bridge from offscreen-rendered
//! intermediates back into the draw list.
//!
//! **[`transform`]** — Column-major 4×4 transform with the mapping queries
//! coverage computation needs.
//!
//! **[`capture`]** — Out-of-band debug recording carried by elements without
//! participating in rendering semantics.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `content-culling` (disabled by default): Lets contents reject elements
//!   that cannot affect the current clip coverage in
//!   [`Element::should_render`](element::Element::should_render). Disabled
//!   builds always render.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod blend;
pub mod capture;
pub mod color;
pub mod content;
pub mod element;
pub mod geometry;
pub mod pass;
pub mod snapshot;
pub mod texture;
pub mod transform;
