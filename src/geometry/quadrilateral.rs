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

use crate::{
    error::{GeometryError, Result},
    geometry::{plane::Plane, point::Point, segment::Segment, triangle::Triangle},
    numeric::scalar::Scalar,
};

/// Four consecutive vertices `a`, `b`, `c`, `d`.
///
/// Containment and intersection queries assume a convex quadrilateral;
/// other shapes give unspecified (but non-panicking) answers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadrilateral<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
    pub c: Point<T, N>,
    pub d: Point<T, N>,
}

impl<T: Scalar, const N: usize> Quadrilateral<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>, d: &Point<T, N>) -> Self {
        Self {
            a: *a,
            b: *b,
            c: *c,
            d: *d,
        }
    }

    pub fn vertices(&self) -> [Point<T, N>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Edges AB, BC, CD and DA.
    pub fn edges(&self) -> [Segment<T, N>; 4] {
        [
            Segment::new(&self.a, &self.b),
            Segment::new(&self.b, &self.c),
            Segment::new(&self.c, &self.d),
            Segment::new(&self.d, &self.a),
        ]
    }

    /// Split along the A-C diagonal: triangles ABC and ACD.
    pub fn split(&self) -> [Triangle<T, N>; 2] {
        [
            Triangle::new(&self.a, &self.b, &self.c),
            Triangle::new(&self.a, &self.c, &self.d),
        ]
    }
}

impl<T: Scalar> Quadrilateral<T, 2> {
    /// Axis-aligned square of side 1 centred on the origin.
    pub fn unit_square() -> Self {
        let h = T::half();
        Self::new(
            &Point::<T, 2>::new(h, h),
            &Point::<T, 2>::new(-h, h),
            &Point::<T, 2>::new(-h, -h),
            &Point::<T, 2>::new(h, -h),
        )
    }
}

impl<T: Scalar> Quadrilateral<T, 3> {
    /// Supporting plane, from ABC or, when those are collinear, from ACD.
    pub fn plane(&self) -> Result<Plane<T, 3>> {
        Plane::from_points(&self.a, &self.b, &self.c)
            .or_else(|_| Plane::from_points(&self.a, &self.c, &self.d))
            .map_err(|_| GeometryError::DegenerateQuadrilateral)
    }
}

pub type Quadrilateral2<T> = Quadrilateral<T, 2>;
pub type Quadrilateral3<T> = Quadrilateral<T, 3>;
