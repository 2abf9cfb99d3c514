// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON draw-list export.
//!
//! [`export`] writes a JSON array with one object per element: blend and
//! clip state, transform columns, computed coverage, and any capture
//! recording. The output is stable enough for golden-file comparisons in
//! renderer test suites.

use std::io::{self, Write};

use serde_json::{Value, json};

use strata_core::capture::CaptureValue;
use strata_core::element::Element;

/// Exports a draw list as pretty-printed JSON.
pub fn export(elements: &[Element], writer: &mut dyn Write) -> io::Result<()> {
    let records: Vec<Value> = elements.iter().map(element_record).collect();
    serde_json::to_writer_pretty(writer, &records)?;
    Ok(())
}

fn element_record(element: &Element) -> Value {
    let coverage = element
        .coverage()
        .map(|r| json!([r.x0, r.y0, r.x1, r.y1]));
    let capture = element.capture().node().map(|node| {
        json!({
            "label": node.label.as_str(),
            "properties": node
                .properties
                .iter()
                .map(|p| json!({ "name": p.name.as_str(), "value": value_record(&p.value) }))
                .collect::<Vec<Value>>(),
        })
    });
    json!({
        "blend_mode": format!("{:?}", element.blend_mode()),
        "clip_depth": element.clip_depth(),
        "new_clip_depth": element.new_clip_depth(),
        "shader_clip_depth": element.shader_clip_depth(),
        "transform": element.transform().cols,
        "coverage": coverage,
        "capture": capture,
    })
}

fn value_record(value: &CaptureValue) -> Value {
    match value {
        CaptureValue::Scalar(s) => json!(s),
        CaptureValue::Flag(b) => json!(b),
        CaptureValue::Rect(r) => json!([r.x0, r.y0, r.x1, r.y1]),
        CaptureValue::Text(t) => json!(t.as_str()),
    }
}
