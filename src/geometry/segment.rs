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
    geometry::{
        point::Point,
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
    operations::Zero,
};

/// Closed line segment from `a` to `b`. `a == b` is a valid, degenerate
/// segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>) -> Self {
        Self { a: *a, b: *b }
    }

    pub fn zero() -> Self {
        Self::new(&Point::zero(), &Point::zero())
    }

    /// Segment from the origin to the unit point on the first axis.
    pub fn unit_line() -> Self {
        let mut b = Point::zero();
        b[0] = T::one();
        Self::new(&Point::zero(), &b)
    }

    pub fn direction(&self) -> Vector<T, N> {
        self.b - self.a
    }

    pub fn squared_length(&self) -> T {
        self.direction().norm_squared()
    }

    pub fn length(&self) -> T {
        self.direction().norm()
    }

    pub fn is_degenerate(&self) -> bool {
        self.length().is_zero()
    }

    pub fn center(&self) -> Point<T, N> {
        self.a.midpoint(&self.b)
    }

    /// Point at factor `t`, `a` for 0 and `b` for 1.
    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.a.lerp(&self.b, t)
    }

    pub fn reversed(&self) -> Self {
        Self::new(&self.b, &self.a)
    }
}

pub type Segment2<T> = Segment<T, 2>;
pub type Segment3<T> = Segment<T, 3>;
