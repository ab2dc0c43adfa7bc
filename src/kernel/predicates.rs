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
        plane::Plane,
        point::{Point, Point2},
        segment::Segment,
    },
    kernel::orientation::orient2d,
    numeric::scalar::Scalar,
};

/// Same-side test against the line through `l1` and `l2`.
///
/// Boundary inclusive: if either point lies on the line the answer is
/// `true`.
pub fn points_same_side_of_line<T: Scalar>(
    p1: &Point2<T>,
    p2: &Point2<T>,
    l1: &Point2<T>,
    l2: &Point2<T>,
) -> bool {
    let o1 = orient2d(p1, l1, l2);
    let o2 = orient2d(p2, l1, l2);
    if o1.is_zero() || o2.is_zero() {
        return true;
    }
    o1.is_negative() == o2.is_negative()
}

/// Same-side test against a plane, boundary inclusive.
pub fn points_same_side_of_plane<T: Scalar, const N: usize>(
    p1: &Point<T, N>,
    p2: &Point<T, N>,
    plane: &Plane<T, N>,
) -> bool {
    let d1 = plane.signed_distance(p1);
    let d2 = plane.signed_distance(p2);
    if d1.is_zero() || d2.is_zero() {
        return true;
    }
    d1.is_negative() == d2.is_negative()
}

pub fn are_equal<T: Scalar, const N: usize>(p1: &Point<T, N>, p2: &Point<T, N>) -> bool {
    p1 == p2
}

/// True if the three points lie on one line, within tolerance relative to
/// the spread of the points.
pub fn are_collinear<T: Scalar, const N: usize>(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> bool {
    (*b - *a).is_parallel_to(&(*c - *a))
}

/// True if `p` lies on the closed segment, within tolerance.
pub fn is_point_on_segment<T: Scalar, const N: usize>(p: &Point<T, N>, seg: &Segment<T, N>) -> bool {
    seg.min_distance_to_point(p).is_zero()
}
