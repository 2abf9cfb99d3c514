// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Out-of-band debug recording attached to elements.
//!
//! A [`Capture`] is a side channel for introspection tooling: rendering
//! never reads it, and it is excluded from any notion of element equality.
//! The default capture is disabled and costs one `Option` pointer; an
//! enabled capture records labelled properties into a shared node.
//!
//! Cloning a capture (or an element carrying one) shares the recording —
//! both handles observe each other's [`record`](Capture::record) calls.
//! Same-thread only, like everything else in this crate.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::{Ref, RefCell};

use kurbo::Rect;

/// A recorded property value.
#[derive(Clone, Debug, PartialEq)]
pub enum CaptureValue {
    /// A scalar quantity.
    Scalar(f64),
    /// A boolean flag.
    Flag(bool),
    /// A rectangle.
    Rect(Rect),
    /// Free-form text.
    Text(String),
}

/// A named, recorded property.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptureProperty {
    /// Property name.
    pub name: String,
    /// Property value.
    pub value: CaptureValue,
}

/// The shared recording behind an enabled capture.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptureNode {
    /// Label identifying what is being captured.
    pub label: String,
    /// Recorded properties, in recording order.
    pub properties: Vec<CaptureProperty>,
}

/// Debug recording handle carried by an element.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    node: Option<Rc<RefCell<CaptureNode>>>,
}

impl Capture {
    /// Creates a disabled capture that records nothing.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { node: None }
    }

    /// Creates an enabled capture with the given label.
    #[must_use]
    pub fn enabled(label: &str) -> Self {
        Self {
            node: Some(Rc::new(RefCell::new(CaptureNode {
                label: String::from(label),
                properties: Vec::new(),
            }))),
        }
    }

    /// Returns `true` if this capture records properties.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.node.is_some()
    }

    /// Records a property. No-op when disabled.
    ///
    /// Takes `&self`: the recording is shared state, and read-only element
    /// paths (queries, render dispatch) may want to record without mutable
    /// access to the element.
    pub fn record(&self, name: &str, value: CaptureValue) {
        if let Some(node) = &self.node {
            node.borrow_mut().properties.push(CaptureProperty {
                name: String::from(name),
                value,
            });
        }
    }

    /// Returns a borrow of the recording, if enabled.
    #[must_use]
    pub fn node(&self) -> Option<Ref<'_, CaptureNode>> {
        self.node.as_ref().map(|node| node.borrow())
    }
}
