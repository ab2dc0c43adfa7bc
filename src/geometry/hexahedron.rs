// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

/// Convex solid with eight vertices `a` to `h`.
///
/// Vertices `a`, `b`, `c`, `d` form one face and `e`, `f`, `g`, `h` the
/// opposite one; the full face table lives in
/// [`HexahedronFace`](crate::intersection::hexahedron_faces::HexahedronFace).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexahedron<T: Scalar> {
    pub a: Point3<T>,
    pub b: Point3<T>,
    pub c: Point3<T>,
    pub d: Point3<T>,
    pub e: Point3<T>,
    pub f: Point3<T>,
    pub g: Point3<T>,
    pub h: Point3<T>,
}

impl<T: Scalar> Hexahedron<T> {
    pub fn from_vertices(v: [Point3<T>; 8]) -> Self {
        let [a, b, c, d, e, f, g, h] = v;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        }
    }

    pub fn vertices(&self) -> [Point3<T>; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h,
        ]
    }

    /// Axis-aligned box from two opposite corners, `a` and `g`.
    pub fn from_corners(a: &Point3<T>, g: &Point3<T>) -> Self {
        let (ax, ay, az) = (a[0], a[1], a[2]);
        let (gx, gy, gz) = (g[0], g[1], g[2]);
        Self::from_vertices([
            Point3::new(ax, ay, az),
            Point3::new(ax, ay, gz),
            Point3::new(gx, ay, gz),
            Point3::new(gx, ay, az),
            Point3::new(ax, gy, az),
            Point3::new(gx, gy, az),
            Point3::new(gx, gy, gz),
            Point3::new(ax, gy, gz),
        ])
    }

    /// Axis-aligned box centred on `center` with the given edge lengths.
    pub fn from_center_and_lengths(center: &Point3<T>, lx: T, ly: T, lz: T) -> Self {
        let (hx, hy, hz) = (lx * T::half(), ly * T::half(), lz * T::half());
        let (cx, cy, cz) = (center[0], center[1], center[2]);
        Self::from_vertices([
            Point3::new(cx - hx, cy + hy, cz + hz),
            Point3::new(cx - hx, cy + hy, cz - hz),
            Point3::new(cx + hx, cy + hy, cz - hz),
            Point3::new(cx + hx, cy + hy, cz + hz),
            Point3::new(cx - hx, cy - hy, cz + hz),
            Point3::new(cx + hx, cy - hy, cz + hz),
            Point3::new(cx + hx, cy - hy, cz - hz),
            Point3::new(cx - hx, cy - hy, cz - hz),
        ])
    }

    /// Cube of side 1 centred on the origin.
    pub fn unit_cube() -> Self {
        Self::from_center_and_lengths(&Point3::origin(), T::one(), T::one(), T::one())
    }
}
