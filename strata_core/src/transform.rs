// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal column-major 4×4 transform.
//!
//! Elements carry a full 4×4 matrix rather than a 2D affine so that
//! perspective-projected content keeps correct coverage bounds. This type
//! covers the subset of operations the element core actually needs
//! (identity, composition, point/rect mapping, basis length) without pulling
//! in a full linear-algebra crate.

use core::ops::Mul;
use kurbo::{Point, Rect};
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// A column-major 4×4 transform stored as `[[f64; 4]; 4]`.
///
/// Each inner array is one *column* of the matrix, matching the memory
/// layout used by GPU APIs. Maps local coordinates to global coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform3d {
    /// Four columns, each a 4-element array `[x, y, z, w]`.
    pub cols: [[f64; 4]; 4],
}

impl Transform3d {
    /// The 4×4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Creates a transform from a column-major 2-D array.
    #[inline]
    #[must_use]
    pub const fn from_cols_array_2d(cols: [[f64; 4]; 4]) -> Self {
        Self { cols }
    }

    /// Creates a 2D translation transform.
    #[inline]
    #[must_use]
    pub const fn from_translation(x: f64, y: f64) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, 0.0, 1.0],
            ],
        }
    }

    /// Creates a non-uniform 2D scale transform.
    #[inline]
    #[must_use]
    pub const fn from_scale(sx: f64, sy: f64) -> Self {
        Self {
            cols: [
                [sx, 0.0, 0.0, 0.0],
                [0.0, sy, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a rotation in the drawing plane (radians, counter-clockwise).
    #[inline]
    #[must_use]
    pub fn from_rotation(radians: f64) -> Self {
        #[cfg(feature = "std")]
        let (s, c) = radians.sin_cos();
        #[cfg(not(feature = "std"))]
        let (s, c) = (radians.sin(), radians.cos());
        Self {
            cols: [
                [c, s, 0.0, 0.0],
                [-s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Maps a point in the drawing plane through this transform.
    ///
    /// Applies the perspective divide when the transform is projective
    /// (`w` ≠ 1). Points on the `w = 0` plane are returned undivided.
    #[must_use]
    pub fn map_point(&self, p: Point) -> Point {
        let c = &self.cols;
        let x = c[0][0] * p.x + c[1][0] * p.y + c[3][0];
        let y = c[0][1] * p.x + c[1][1] * p.y + c[3][1];
        let w = c[0][3] * p.x + c[1][3] * p.y + c[3][3];
        if w == 1.0 || w == 0.0 {
            Point::new(x, y)
        } else {
            Point::new(x / w, y / w)
        }
    }

    /// Maps a rectangle through this transform, returning the axis-aligned
    /// bounding box of its four mapped corners.
    #[must_use]
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let corners = [
            self.map_point(Point::new(rect.x0, rect.y0)),
            self.map_point(Point::new(rect.x1, rect.y0)),
            self.map_point(Point::new(rect.x0, rect.y1)),
            self.map_point(Point::new(rect.x1, rect.y1)),
        ];
        let mut out = Rect::new(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
        for p in &corners[1..] {
            out.x0 = out.x0.min(p.x);
            out.y0 = out.y0.min(p.y);
            out.x1 = out.x1.max(p.x);
            out.y1 = out.y1.max(p.y);
        }
        out
    }

    /// Returns the larger of the X and Y basis vector lengths in the drawing
    /// plane: the maximum scale factor this transform applies to content.
    ///
    /// Used to pick a glyph atlas scale for text rendered under this
    /// transform.
    #[must_use]
    pub fn max_basis_length_xy(&self) -> f64 {
        let c = &self.cols;
        let x_sq = c[0][0] * c[0][0] + c[0][1] * c[0][1];
        let y_sq = c[1][0] * c[1][0] + c[1][1] * c[1][1];
        x_sq.max(y_sq).sqrt()
    }
}

impl Default for Transform3d {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Transform3d {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let a = &self.cols;
        let b = &rhs.cols;
        let mut out = [[0.0_f64; 4]; 4];
        let mut j = 0;
        while j < 4 {
            let mut i = 0;
            while i < 4 {
                out[j][i] =
                    a[0][i] * b[j][0] + a[1][i] * b[j][1] + a[2][i] * b[j][2] + a[3][i] * b[j][3];
                i += 1;
            }
            j += 1;
        }
        Self { cols: out }
    }
}
