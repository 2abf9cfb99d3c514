// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable element and capture output.
//!
//! [`write_element`] writes one `[element]` line with the drawable state,
//! followed by one `[capture]` line per recorded property when the
//! element's capture is enabled. [`write_capture`] dumps a bare capture.

use std::io::{self, Write};

use strata_core::capture::{Capture, CaptureValue};
use strata_core::element::Element;

/// Writes a one-line summary of `element`, plus its capture recording.
pub fn write_element(writer: &mut dyn Write, element: &Element) -> io::Result<()> {
    let coverage = match element.coverage() {
        Some(r) => format!("({:.1},{:.1})-({:.1},{:.1})", r.x0, r.y0, r.x1, r.y1),
        None => String::from("none"),
    };
    writeln!(
        writer,
        "[element] blend={:?} clip_depth={} new_clip_depth={} content={} coverage={}",
        element.blend_mode(),
        element.clip_depth(),
        element.new_clip_depth(),
        if element.content().is_some() {
            "yes"
        } else {
            "no"
        },
        coverage,
    )?;
    write_capture(writer, element.capture())
}

/// Writes one `[capture]` line per recorded property. Disabled captures
/// write nothing.
pub fn write_capture(writer: &mut dyn Write, capture: &Capture) -> io::Result<()> {
    let Some(node) = capture.node() else {
        return Ok(());
    };
    for property in &node.properties {
        writeln!(
            writer,
            "[capture] {}: {}={}",
            node.label,
            property.name,
            format_value(&property.value),
        )?;
    }
    Ok(())
}

fn format_value(value: &CaptureValue) -> String {
    match value {
        CaptureValue::Scalar(s) => format!("{s}"),
        CaptureValue::Flag(b) => format!("{b}"),
        CaptureValue::Rect(r) => {
            format!("({:.1},{:.1})-({:.1},{:.1})", r.x0, r.y0, r.x1, r.y1)
        }
        CaptureValue::Text(t) => t.clone(),
    }
}

#[cfg(test)]
mod tests {
    use strata_core::blend::BlendMode;

    use super::*;

    #[test]
    fn element_line_shows_drawable_state() {
        let mut element = Element::new();
        element.set_blend_mode(BlendMode::Plus);
        element.set_clip_depth(2);

        let mut out = Vec::new();
        write_element(&mut out, &element).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[element]"), "got: {text}");
        assert!(text.contains("blend=Plus"), "got: {text}");
        assert!(text.contains("clip_depth=2"), "got: {text}");
        assert!(text.contains("content=no"), "got: {text}");
        assert!(text.contains("coverage=none"), "got: {text}");
    }

    #[test]
    fn capture_lines_follow_the_element() {
        let mut element = Element::new();
        element.set_capture(Capture::enabled("backdrop"));
        element
            .capture()
            .record("opacity", CaptureValue::Scalar(0.5));
        element.capture().record("culled", CaptureValue::Flag(false));

        let mut out = Vec::new();
        write_element(&mut out, &element).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("[capture] backdrop: opacity=0.5"), "got: {text}");
        assert!(text.contains("[capture] backdrop: culled=false"), "got: {text}");
    }

    #[test]
    fn disabled_capture_writes_nothing() {
        let mut out = Vec::new();
        write_capture(&mut out, &Capture::disabled()).unwrap();
        assert!(out.is_empty());
    }
}
