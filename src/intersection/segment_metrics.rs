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
    geometry::{point::Point, segment::Segment, vector::VectorOps},
    numeric::scalar::Scalar,
};

/// Fixed point for [`Segment::lengthened`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthenAnchor {
    Center,
    A,
    B,
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    /// Factors `(s, t)` in `[0, 1]` of the closest points `self.point_at(s)`
    /// and `other.point_at(t)`.
    pub fn closest_factors(&self, other: &Self) -> (T, T) {
        let zero = T::zero();
        let one = T::one();

        let v1 = self.direction();
        let v2 = other.direction();
        let tails = self.a - other.a;
        let l1 = v1.norm_squared();
        let l2 = v2.norm_squared();

        match (self.is_degenerate(), other.is_degenerate()) {
            (true, true) => return (zero, zero),
            (true, false) => {
                log::trace!("closest points: first segment is degenerate");
                return (zero, (v2.dot(&tails) / l2).clamp_to(zero, one));
            }
            (false, true) => {
                log::trace!("closest points: second segment is degenerate");
                return (((-v1.dot(&tails)) / l1).clamp_to(zero, one), zero);
            }
            (false, false) => {}
        }

        let v1v2 = v1.dot(&v2);
        let v1t = v1.dot(&tails);
        let v2t = v2.dot(&tails);

        let sin = v1.sin_to(&v2);
        let s = if sin.is_zero() {
            // Parallel: any factor works for the first segment.
            zero
        } else {
            // l1 * l2 - v1v2^2 without the cancellation.
            let denom = l1 * l2 * sin * sin;
            ((v1v2 * v2t - v1t * l2) / denom).clamp_to(zero, one)
        };

        let t = (s * v1v2 + v2t) / l2;
        if t.is_negative() {
            (((-v1t) / l1).clamp_to(zero, one), zero)
        } else if t.approx_gt(&one) {
            (((v1v2 - v1t) / l1).clamp_to(zero, one), one)
        } else {
            (s, t)
        }
    }

    /// Closest pair of points, the first on `self` and the second on `other`.
    pub fn closest_points(&self, other: &Self) -> (Point<T, N>, Point<T, N>) {
        let (s, t) = self.closest_factors(other);
        (self.point_at(s), other.point_at(t))
    }

    pub fn min_distance(&self, other: &Self) -> T {
        let (p, q) = self.closest_points(other);
        p.distance_to(&q)
    }

    pub fn closest_point_to(&self, p: &Point<T, N>) -> Point<T, N> {
        if self.is_degenerate() {
            return self.b;
        }
        let v = self.direction();
        let t = ((*p - self.a).dot(&v) / v.norm_squared()).clamp_to(T::zero(), T::one());
        self.point_at(t)
    }

    pub fn min_distance_to_point(&self, p: &Point<T, N>) -> T {
        self.closest_point_to(p).distance_to(p)
    }

    /// Zero when `p` lies on the segment, otherwise the distance to the
    /// farther endpoint.
    pub fn max_distance_to_point(&self, p: &Point<T, N>) -> T {
        if self.min_distance_to_point(p).is_zero() {
            return T::zero();
        }
        self.a.distance_to(p).max(self.b.distance_to(p))
    }

    /// Farthest points of two segments are always endpoints, so only the
    /// endpoints of `other` need to be tried.
    pub fn max_distance(&self, other: &Self) -> T {
        self.max_distance_to_point(&other.a)
            .max(self.max_distance_to_point(&other.b))
    }

    /// Scales the segment by `factor` keeping `anchor` fixed.
    ///
    /// `0` collapses it onto the anchor and `1` leaves it unchanged; a
    /// negative factor flips it through the anchor.
    pub fn lengthened(&self, factor: T, anchor: LengthenAnchor) -> Self {
        match anchor {
            LengthenAnchor::Center => {
                let c = self.center();
                Self::new(&(c + (self.a - c) * factor), &(c + (self.b - c) * factor))
            }
            LengthenAnchor::A => Self::new(&self.a, &(self.a + self.direction() * factor)),
            LengthenAnchor::B => Self::new(&(self.b - self.direction() * factor), &self.b),
        }
    }
}
