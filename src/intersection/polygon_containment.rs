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
    geometry::{
        point::{Point, Point2},
        quadrilateral::Quadrilateral,
        segment::Segment,
        triangle::Triangle,
        util::barycentric_coords,
        vector::VectorOps,
    },
    kernel::predicates::points_same_side_of_line,
    numeric::scalar::Scalar,
};

/// How a self-intersecting ("bow-tie") quadrilateral answers convexity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossedQuadPolicy {
    /// Crossed quadrilaterals report convex and none of their angles is
    /// treated as reflex.
    #[default]
    Convex,
    /// Only the diagonals decide; a crossed quadrilateral is concave.
    Concave,
}

impl<T: Scalar, const N: usize> Triangle<T, N> {
    /// Closed containment test: edges and vertices are inside, points off
    /// the supporting plane are not.
    pub fn contains_point(&self, p: &Point<T, N>) -> Result<bool> {
        let Some((u, v, w)) = barycentric_coords(p, &self.a, &self.b, &self.c) else {
            log::debug!("containment query on a degenerate triangle");
            return Err(GeometryError::DegenerateTriangle);
        };
        if !(u.is_positive_or_zero() && v.is_positive_or_zero() && w.is_positive_or_zero()) {
            return Ok(false);
        }
        let rebuilt = self.a + (self.b - self.a) * v + (self.c - self.a) * w;
        Ok(rebuilt == *p)
    }
}

impl<T: Scalar, const N: usize> Quadrilateral<T, N> {
    /// Union of the two halves split along A-C. A degenerate half is
    /// skipped, both degenerate is an error.
    pub fn contains_point(&self, p: &Point<T, N>) -> Result<bool> {
        let mut usable = false;
        for half in self.split() {
            match half.contains_point(p) {
                Ok(true) => return Ok(true),
                Ok(false) => usable = true,
                Err(_) => {}
            }
        }
        if usable {
            Ok(false)
        } else {
            log::debug!("containment query on a degenerate quadrilateral");
            Err(GeometryError::DegenerateQuadrilateral)
        }
    }
}

impl<T: Scalar> Quadrilateral<T, 2> {
    /// True when two opposite edges cross each other.
    pub fn is_crossed(&self) -> bool {
        let (a, b, c, d) = (&self.a, &self.b, &self.c, &self.d);
        let ad_bc = !points_same_side_of_line(a, d, b, c) && !points_same_side_of_line(c, b, a, d);
        let ab_dc = !points_same_side_of_line(a, b, d, c) && !points_same_side_of_line(c, d, a, b);
        ad_bc || ab_dc
    }

    pub fn is_convex(&self) -> bool {
        self.is_convex_with(CrossedQuadPolicy::default())
    }

    /// Convex when the diagonals meet; crossed shapes follow `policy`.
    pub fn is_convex_with(&self, policy: CrossedQuadPolicy) -> bool {
        if self.is_crossed() {
            return match policy {
                CrossedQuadPolicy::Convex => true,
                CrossedQuadPolicy::Concave => false,
            };
        }
        Segment::new(&self.a, &self.c).intersects(&Segment::new(&self.b, &self.d))
    }

    pub fn is_concave(&self) -> bool {
        !self.is_convex()
    }

    /// Interior angle at A, in radians.
    pub fn angle_a(&self) -> T {
        self.interior_angle(&self.a, &self.d, &self.b, &self.c)
    }

    pub fn angle_b(&self) -> T {
        self.interior_angle(&self.b, &self.a, &self.c, &self.d)
    }

    pub fn angle_c(&self) -> T {
        self.interior_angle(&self.c, &self.b, &self.d, &self.a)
    }

    pub fn angle_d(&self) -> T {
        self.interior_angle(&self.d, &self.c, &self.a, &self.b)
    }

    pub fn angles(&self) -> [T; 4] {
        [self.angle_a(), self.angle_b(), self.angle_c(), self.angle_d()]
    }

    /// Angle at `v` between its neighbours `prev` and `next`; `opposite` is
    /// the vertex across the diagonal.
    fn interior_angle(&self, v: &Point2<T>, prev: &Point2<T>, next: &Point2<T>, opposite: &Point2<T>) -> T {
        let angle = (*prev - *v).angle_to(&(*next - *v));
        if self.is_reflex_at(v, prev, next, opposite) {
            T::two() * T::pi() - angle
        } else {
            angle
        }
    }

    /// A concave quadrilateral has its reflex vertex on the same side of
    /// the neighbours' diagonal as the opposite vertex, and closer to it.
    fn is_reflex_at(&self, v: &Point2<T>, prev: &Point2<T>, next: &Point2<T>, opposite: &Point2<T>) -> bool {
        if self.is_convex() || !points_same_side_of_line(opposite, v, prev, next) {
            return false;
        }
        let diagonal = Segment::new(prev, next);
        diagonal
            .min_distance_to_point(v)
            .approx_lt(&diagonal.min_distance_to_point(opposite))
    }

    /// Edge crossing, or one quadrilateral holding the other's vertex A.
    pub fn intersects_quadrilateral(&self, other: &Self) -> Result<bool> {
        let crossing = self
            .edges()
            .iter()
            .any(|e| other.edges().iter().any(|f| e.intersects(f)));
        if crossing {
            return Ok(true);
        }
        Ok(self.contains_point(&other.a)? || other.contains_point(&self.a)?)
    }
}
