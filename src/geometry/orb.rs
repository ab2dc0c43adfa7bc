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
        vector::VectorOps,
    },
    intersection::result::IntersectionResult,
    numeric::scalar::Scalar,
    operations::Zero,
};

/// Circle in 2D, sphere in 3D.
#[derive(Debug, Clone, Copy)]
pub struct Orb<T: Scalar, const N: usize> {
    pub center: Point<T, N>,
    pub radius: T,
}

impl<T: Scalar, const N: usize> Orb<T, N> {
    pub fn new(center: &Point<T, N>, radius: T) -> Self {
        Self {
            center: *center,
            radius,
        }
    }

    pub fn unit() -> Self {
        Self::new(&Point::zero(), T::one())
    }

    /// Closed-ball test: points on the boundary are contained.
    pub fn contains_point(&self, p: &Point<T, N>) -> bool {
        self.center.distance_to(p).approx_le(&self.radius)
    }

    pub fn intersects_orb(&self, other: &Self) -> bool {
        self.center
            .distance_to(&other.center)
            .approx_le(&(self.radius + other.radius))
    }

    /// Same radius, centre dropped orthogonally onto `plane`. A degenerate
    /// plane leaves the orb where it is.
    pub fn project_onto_plane(&self, plane: &Plane<T, N>) -> Self {
        Self::new(&plane.project_point(&self.center), self.radius)
    }
}

impl<T: Scalar> Orb<T, 2> {
    /// Crossing points of two circles. A circle lying inside the other, or
    /// on top of it, gives `Infinite`.
    pub fn circle_intersection_points(&self, other: &Self) -> IntersectionResult<Point2<T>> {
        let between = other.center - self.center;
        let dist = between.norm();
        let (r1, r2) = (self.radius, other.radius);

        if dist.approx_gt(&(r1 + r2)) {
            return IntersectionResult::None;
        }
        if dist.is_zero() || dist.approx_lt(&(r1 - r2).abs()) {
            return IntersectionResult::Infinite;
        }

        // Distance from self.center to the chord, along `between`.
        let along = (dist * dist + r1 * r1 - r2 * r2) / (T::two() * dist);
        let half_chord = (r1 * r1 - along * along).max(T::zero()).sqrt();
        let foot = self.center + between * (along / dist);
        if half_chord.is_zero() {
            return IntersectionResult::One(foot);
        }
        let offset = between.perp() * (half_chord / dist);
        IntersectionResult::pair(foot + offset, foot - offset)
    }
}

impl<T: Scalar, const N: usize> PartialEq for Orb<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius.approx_eq(&other.radius)
    }
}

pub type Circle<T> = Orb<T, 2>;
pub type Sphere<T> = Orb<T, 3>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector3;
    use crate::intersection::result::IntersectionKind;

    fn circle(x: f64, y: f64, r: f64) -> Circle<f64> {
        Circle::new(&Point2::new(x, y), r)
    }

    #[test]
    fn closed_ball() {
        let orb = Orb::<f64, 3>::unit();
        assert!(orb.contains_point(&Point::from([1.0, 0.0, 0.0])));
        assert!(!orb.contains_point(&Point::from([1.0, 0.1, 0.0])));
        assert!(orb.intersects_orb(&Orb::new(&Point::from([2.0, 0.0, 0.0]), 1.0)));
        assert!(!orb.intersects_orb(&Orb::new(&Point::from([2.5, 0.0, 0.0]), 1.0)));
    }

    #[test]
    fn sphere_projected_onto_planes() {
        let sphere = Sphere::<f64>::new(&Point::from([1.0, 2.0, 3.0]), 0.5);
        let flat = sphere.project_onto_plane(&Plane::xy());
        assert_eq!(flat.center, Point::from([1.0, 2.0, 0.0]));
        assert_eq!(flat.radius, 0.5);

        let tilted = Plane::from_point_normal(&Point::from([0.0, 0.0, 0.0]), &Vector3::new(1.0, 1.0, 0.0));
        let moved = sphere.project_onto_plane(&tilted);
        assert!(tilted.contains_point(&moved.center));
        assert_eq!(moved.center, Point::from([-0.5, 0.5, 3.0]));

        assert_eq!(sphere.project_onto_plane(&Plane::zero()), sphere);
    }

    #[test]
    fn crossing_circles() {
        let c1 = circle(0.0, 0.0, 5.0);
        let c2 = circle(8.0, 0.0, 5.0);
        let IntersectionResult::Two(p, q) = c1.circle_intersection_points(&c2) else {
            panic!("expected two crossings");
        };
        assert_eq!(p[0], 4.0);
        assert_eq!(q[0], 4.0);
        assert!((p[1].abs() - 3.0).abs() < 1e-12);
        assert!((p[1] + q[1]).abs() < 1e-12);
    }

    #[test]
    fn tangent_nested_and_apart() {
        let c = circle(0.0, 0.0, 1.0);
        assert_eq!(
            c.circle_intersection_points(&circle(2.0, 0.0, 1.0)),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
        assert_eq!(
            c.circle_intersection_points(&circle(0.5, 0.0, 0.5)),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
        assert_eq!(c.circle_intersection_points(&c).kind(), IntersectionKind::Infinite);
        assert_eq!(
            c.circle_intersection_points(&circle(0.1, 0.0, 0.2)),
            IntersectionResult::Infinite
        );
        assert!(c.circle_intersection_points(&circle(3.0, 0.0, 1.0)).is_none());
    }
}
