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
        orb::Orb,
        point::{Point, Point2},
        quadrilateral::Quadrilateral,
        segment::Segment,
        triangle::Triangle,
        vector::{Vector, VectorOps},
    },
    intersection::result::IntersectionResult,
    numeric::scalar::Scalar,
};

/// Roots of `|origin + t * unit_dir - center| = radius` in ascending order.
pub(crate) enum OrbRoots<T> {
    None,
    Tangent(T),
    Secant(T, T),
}

pub(crate) fn line_orb_roots<T: Scalar, const N: usize>(
    origin: &Point<T, N>,
    unit_dir: &Vector<T, N>,
    orb: &Orb<T, N>,
) -> OrbRoots<T> {
    let oc = *origin - orb.center;
    let b = oc.dot(unit_dir);
    // Distance from the center to the line, compared linearly with the radius.
    let gap = (oc.norm_squared() - b * b).max(T::zero()).sqrt();

    if gap.approx_gt(&orb.radius) {
        OrbRoots::None
    } else if gap.approx_eq(&orb.radius) {
        OrbRoots::Tangent(-b)
    } else {
        let half_chord = (orb.radius * orb.radius - gap * gap).sqrt();
        OrbRoots::Secant(-b - half_chord, -b + half_chord)
    }
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_distance(other).is_zero()
    }

    /// Intersection with another segment. Any overlap of collinear segments
    /// longer than the tolerance is `Infinite`.
    pub fn intersection_point(&self, other: &Self) -> IntersectionResult<Point<T, N>> {
        if self.is_degenerate() || other.is_degenerate() {
            log::trace!("segment intersection: degenerate input");
            return self.closest_points_meet(other);
        }

        if !self.direction().is_parallel_to(&other.direction()) {
            return self.closest_points_meet(other);
        }
        if !self.min_distance(other).is_zero() {
            return IntersectionResult::None;
        }
        if !(self.line_holds(&other.a) && self.line_holds(&other.b)) {
            log::trace!("segment intersection: parallel but not collinear");
            return self.closest_points_meet(other);
        }
        self.collinear_overlap(other)
    }

    /// `p` lies on the infinite line through the segment.
    fn line_holds(&self, p: &Point<T, N>) -> bool {
        let v = self.direction();
        let t = (*p - self.a).dot(&v) / v.norm_squared();
        self.a + v * t == *p
    }

    fn closest_points_meet(&self, other: &Self) -> IntersectionResult<Point<T, N>> {
        let (p, q) = self.closest_points(other);
        if p == q {
            IntersectionResult::One(p)
        } else {
            IntersectionResult::None
        }
    }

    /// Both segments lie on the same line: project `other` onto the
    /// parametrisation of `self` and intersect the intervals.
    fn collinear_overlap(&self, other: &Self) -> IntersectionResult<Point<T, N>> {
        let (lo, hi) = self.overlap_factors(other);
        let overlap = (hi - lo) * self.length();
        log::trace!("collinear segments: overlap length {:?}", overlap);

        if overlap.is_positive() {
            IntersectionResult::Infinite
        } else if overlap.is_zero() {
            IntersectionResult::One(self.point_at(lo))
        } else {
            IntersectionResult::None
        }
    }

    /// Factors on `self` of the shared stretch of two collinear segments.
    /// `lo > hi` when they do not overlap.
    fn overlap_factors(&self, other: &Self) -> (T, T) {
        let v = self.direction();
        let len2 = v.norm_squared();
        let t_a = (other.a - self.a).dot(&v) / len2;
        let t_b = (other.b - self.a).dot(&v) / len2;
        let (lo, hi) = if t_a.approx_le(&t_b) {
            (t_a, t_b)
        } else {
            (t_b, t_a)
        };
        (lo.max(T::zero()), hi.min(T::one()))
    }

    /// Where the segment meets the boundary of a polygon given by its
    /// edges. An edge run along by the segment adds both ends of the shared
    /// stretch.
    fn boundary_hits(&self, edges: &[Self]) -> Vec<Point<T, N>> {
        let mut hits = Vec::with_capacity(edges.len() * 2);
        for edge in edges {
            match self.intersection_point(edge) {
                IntersectionResult::One(p) => hits.push(p),
                IntersectionResult::Two(p, q) => hits.extend([p, q]),
                IntersectionResult::Infinite => {
                    let (lo, hi) = self.overlap_factors(edge);
                    hits.extend([self.point_at(lo), self.point_at(hi)]);
                }
                IntersectionResult::None => {}
            }
        }
        hits
    }

    /// Boundary crossings of a polygon, nearest `a` first. A segment lying
    /// strictly inside gives `Infinite`.
    fn polygon_hits(&self, a_inside: bool, edges: &[Self]) -> IntersectionResult<Point<T, N>> {
        if self.is_degenerate() {
            return if a_inside {
                IntersectionResult::One(self.a)
            } else {
                IntersectionResult::None
            };
        }
        let hits = self.boundary_hits(edges);
        if hits.is_empty() && a_inside {
            return IntersectionResult::Infinite;
        }
        IntersectionResult::nearest_two(&self.a, hits)
    }

    pub fn intersects_orb(&self, orb: &Orb<T, N>) -> bool {
        self.min_distance_to_point(&orb.center)
            .approx_le(&orb.radius)
    }

    /// Boundary crossings with an orb, ordered from `a`.
    ///
    /// A segment lying entirely inside the orb gives `Infinite`; a
    /// degenerate segment gives `One` when it is inside or on the orb.
    pub fn orb_intersection_points(&self, orb: &Orb<T, N>) -> IntersectionResult<Point<T, N>> {
        if self.is_degenerate() {
            return if orb.contains_point(&self.a) {
                IntersectionResult::One(self.a)
            } else {
                IntersectionResult::None
            };
        }

        let len = self.length();
        let unit = self.direction() / len;
        let in_range = |t: &T| t.is_positive_or_zero() && t.approx_le(&len);
        let at = |t: T| self.a + unit * t;

        let hits: Vec<T> = match line_orb_roots(&self.a, &unit, orb) {
            OrbRoots::None => Vec::new(),
            OrbRoots::Tangent(t) => vec![t],
            OrbRoots::Secant(t1, t2) => vec![t1, t2],
        }
        .into_iter()
        .filter(in_range)
        .collect();

        match hits.as_slice() {
            [] if orb.contains_point(&self.a) => IntersectionResult::Infinite,
            [] => IntersectionResult::None,
            [t] => IntersectionResult::One(at(*t)),
            [t1, t2, ..] => IntersectionResult::pair(at(*t1), at(*t2)),
        }
    }
}

impl<T: Scalar> Segment<T, 3> {
    pub fn intersects_triangle(&self, triangle: &Triangle<T, 3>) -> Result<bool> {
        let plane = triangle
            .plane()
            .map_err(|_| GeometryError::DegenerateTriangle)?;
        match self.plane_intersection_point(&plane)? {
            IntersectionResult::None => Ok(false),
            IntersectionResult::One(p) | IntersectionResult::Two(p, _) => triangle.contains_point(&p),
            IntersectionResult::Infinite => {
                if triangle.edges().iter().any(|e| self.intersects(e)) {
                    return Ok(true);
                }
                triangle.contains_point(&self.a)
            }
        }
    }

    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral<T, 3>) -> Result<bool> {
        let plane = quad.plane()?;
        match self.plane_intersection_point(&plane)? {
            IntersectionResult::None => Ok(false),
            IntersectionResult::One(p) | IntersectionResult::Two(p, _) => quad.contains_point(&p),
            IntersectionResult::Infinite => {
                if quad.edges().iter().any(|e| self.intersects(e)) {
                    return Ok(true);
                }
                quad.contains_point(&self.a)
            }
        }
    }
}

impl<T: Scalar> Segment<T, 2> {
    pub fn intersects_triangle(&self, triangle: &Triangle<T, 2>) -> Result<bool> {
        Ok(self.triangle_intersection_points(triangle)?.intersects())
    }

    /// Points where the segment meets the triangle's boundary, nearest `a`
    /// first.
    pub fn triangle_intersection_points(&self, triangle: &Triangle<T, 2>) -> Result<IntersectionResult<Point2<T>>> {
        let inside = triangle.contains_point(&self.a)?;
        Ok(self.polygon_hits(inside, &triangle.edges()))
    }

    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral<T, 2>) -> Result<bool> {
        Ok(self.quadrilateral_intersection_points(quad)?.intersects())
    }

    /// Same as [`Segment::triangle_intersection_points`]. For a concave
    /// quadrilateral only the two crossings nearest `a` are kept.
    pub fn quadrilateral_intersection_points(&self, quad: &Quadrilateral<T, 2>) -> Result<IntersectionResult<Point2<T>>> {
        let inside = quad.contains_point(&self.a)?;
        Ok(self.polygon_hits(inside, &quad.edges()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point2, Point3, Segment2, Segment3};
    use crate::intersection::result::IntersectionKind;

    fn seg2(a: [f64; 2], b: [f64; 2]) -> Segment2<f64> {
        Segment2::new(&Point2::from(a), &Point2::from(b))
    }

    #[test]
    fn crossing_segments() {
        let s1 = seg2([0.0, 0.0], [2.0, 0.0]);
        let s2 = seg2([1.0, -1.0], [1.0, 1.0]);
        assert_eq!(
            s1.intersection_point(&s2),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
        assert!(s1.intersects(&s2));
    }

    #[test]
    fn collinear_cases() {
        let s = seg2([0.0, 0.0], [2.0, 0.0]);
        assert_eq!(
            s.intersection_point(&seg2([2.0, 0.0], [3.0, 0.0])),
            IntersectionResult::One(Point2::new(2.0, 0.0))
        );
        assert_eq!(
            s.intersection_point(&seg2([3.0, 0.0], [-1.0, 0.0])).kind(),
            IntersectionKind::Infinite
        );
        assert_eq!(
            s.intersection_point(&seg2([0.0, 0.0], [-1.0, 0.0])),
            IntersectionResult::One(Point2::new(0.0, 0.0))
        );
        assert!(s.intersection_point(&seg2([2.5, 0.0], [3.0, 0.0])).is_none());
    }

    #[test]
    fn short_segment_is_not_a_point() {
        let short = seg2([0.0, 0.0], [4e-6, 0.0]);
        let cross = seg2([2e-6, -1.0], [2e-6, 1.0]);
        assert!(!short.is_degenerate());
        assert_eq!(
            short.intersection_point(&cross),
            IntersectionResult::One(Point2::new(2e-6, 0.0))
        );
        assert!(short.intersects(&cross));
        assert!(cross.intersects(&short));
    }

    #[test]
    fn shallow_crossing() {
        let s1 = seg2([0.0, 0.0], [2.0, 0.0]);
        let s2 = seg2([0.0, -5e-6], [2.0, 5e-6]);
        assert_eq!(
            s1.intersection_point(&s2),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
        assert_eq!(
            s2.intersection_point(&s1),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
    }

    #[test]
    fn nearly_parallel_touching_is_not_an_overlap() {
        let s1 = seg2([0.0, 0.0], [2.0, 0.0]);
        let s2 = seg2([1.0, 0.0], [1e6 + 1.0, 5e-5]);
        assert_eq!(
            s1.intersection_point(&s2),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
    }

    #[test]
    fn parallel_apart() {
        let s1 = seg2([0.0, 0.0], [2.0, 0.0]);
        let s2 = seg2([0.0, 1.0], [2.0, 1.0]);
        assert!(s1.intersection_point(&s2).is_none());
    }

    #[test]
    fn degenerate_segment_on_segment() {
        let s = seg2([0.0, 0.0], [2.0, 2.0]);
        let p = seg2([1.0, 1.0], [1.0, 1.0]);
        assert_eq!(
            s.intersection_point(&p),
            IntersectionResult::One(Point2::new(1.0, 1.0))
        );
        assert!(p.intersection_point(&seg2([5.0, 1.0], [5.0, 1.0])).is_none());
    }

    #[test]
    fn segment_through_sphere() {
        let orb = Orb::new(&Point3::new(0.0, 0.0, 0.0), 1.0);
        let s = Segment3::new(&Point3::new(-2.0, 0.0, 0.0), &Point3::new(2.0, 0.0, 0.0));
        assert_eq!(
            s.orb_intersection_points(&orb),
            IntersectionResult::Two(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0))
        );
        assert!(s.intersects_orb(&orb));

        let inside = Segment3::new(&Point3::new(-0.5, 0.0, 0.0), &Point3::new(0.5, 0.0, 0.0));
        assert_eq!(inside.orb_intersection_points(&orb), IntersectionResult::Infinite);

        let exiting = Segment3::new(&Point3::new(0.0, 0.0, 0.0), &Point3::new(0.0, 3.0, 0.0));
        assert_eq!(
            exiting.orb_intersection_points(&orb),
            IntersectionResult::One(Point3::new(0.0, 1.0, 0.0))
        );

        let tangent = Segment3::new(&Point3::new(-2.0, 1.0, 0.0), &Point3::new(2.0, 1.0, 0.0));
        assert_eq!(
            tangent.orb_intersection_points(&orb),
            IntersectionResult::One(Point3::new(0.0, 1.0, 0.0))
        );
    }

    #[test]
    fn segment_across_flat_shapes() {
        let tri = Triangle::new(&Point2::new(0.0, 0.0), &Point2::new(4.0, 0.0), &Point2::new(0.0, 4.0));
        assert_eq!(
            seg2([-1.0, 1.0], [5.0, 1.0]).triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Two(Point2::new(0.0, 1.0), Point2::new(3.0, 1.0))
        );
        assert_eq!(
            seg2([5.0, 1.0], [-1.0, 1.0]).triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Two(Point2::new(3.0, 1.0), Point2::new(0.0, 1.0))
        );
        assert_eq!(
            seg2([1.0, 1.0], [1.0, 5.0]).triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::One(Point2::new(1.0, 3.0))
        );
        assert_eq!(
            seg2([1.0, 1.0], [2.0, 1.0]).triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Infinite
        );
        assert_eq!(
            seg2([-1.0, 0.0], [5.0, 0.0]).triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Two(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0))
        );
        assert!(!seg2([5.0, 5.0], [6.0, 6.0]).intersects_triangle(&tri).unwrap());

        let flat = Triangle::new(&Point2::new(0.0, 0.0), &Point2::new(1.0, 0.0), &Point2::new(2.0, 0.0));
        assert_eq!(
            seg2([0.0, -1.0], [0.0, 1.0]).triangle_intersection_points(&flat),
            Err(GeometryError::DegenerateTriangle)
        );

        let square = Quadrilateral::new(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
        );
        assert_eq!(
            seg2([-1.0, 1.0], [3.0, 1.0]).quadrilateral_intersection_points(&square).unwrap(),
            IntersectionResult::Two(Point2::new(0.0, 1.0), Point2::new(2.0, 1.0))
        );
        assert_eq!(
            seg2([1.0, 1.0], [1.0, 1.0]).quadrilateral_intersection_points(&square).unwrap(),
            IntersectionResult::One(Point2::new(1.0, 1.0))
        );
        assert!(seg2([1.0, 1.0], [1.5, 1.5]).intersects_quadrilateral(&square).unwrap());
        assert!(!seg2([3.0, 0.0], [3.0, 2.0]).intersects_quadrilateral(&square).unwrap());
    }

    #[test]
    fn segment_through_faces() {
        let tri = Triangle::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(4.0, 0.0, 0.0),
            &Point3::new(0.0, 4.0, 0.0),
        );
        let piercing = Segment3::new(&Point3::new(1.0, 1.0, -1.0), &Point3::new(1.0, 1.0, 1.0));
        let missing = Segment3::new(&Point3::new(3.0, 3.0, -1.0), &Point3::new(3.0, 3.0, 1.0));
        let short = Segment3::new(&Point3::new(1.0, 1.0, 1.0), &Point3::new(1.0, 1.0, 2.0));
        let coplanar = Segment3::new(&Point3::new(-1.0, 1.0, 0.0), &Point3::new(5.0, 1.0, 0.0));
        assert!(piercing.intersects_triangle(&tri).unwrap());
        assert!(!missing.intersects_triangle(&tri).unwrap());
        assert!(!short.intersects_triangle(&tri).unwrap());
        assert!(coplanar.intersects_triangle(&tri).unwrap());

        let quad = Quadrilateral::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(2.0, 2.0, 0.0),
            &Point3::new(0.0, 2.0, 0.0),
        );
        assert!(missing.intersects_quadrilateral(&quad).is_ok_and(|hit| !hit));
        assert!(piercing.intersects_quadrilateral(&quad).unwrap());

        let flat = Triangle::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        );
        assert_eq!(
            piercing.intersects_triangle(&flat),
            Err(GeometryError::DegenerateTriangle)
        );
    }
}
