// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for strata draw-list diagnostics.
//!
//! This crate renders [`Element`](strata_core::element::Element) state and
//! attached [`Capture`](strata_core::capture::Capture) recordings for
//! development and post-mortem analysis:
//!
//! - [`pretty`] — human-readable one-line-per-fact output.
//! - [`json`] — a JSON dump of a draw list, suitable for golden files and
//!   bug reports.

pub mod json;
pub mod pretty;
