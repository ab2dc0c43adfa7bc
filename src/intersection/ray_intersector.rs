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
        plane::Plane,
        point::{Point, Point2},
        quadrilateral::Quadrilateral,
        ray::Ray,
        segment::Segment,
        triangle::Triangle,
        vector::{Vector, VectorOps},
    },
    intersection::{
        result::IntersectionResult,
        segment_intersector::{OrbRoots, line_orb_roots},
    },
    numeric::scalar::Scalar,
};

/// Parameters `(t1, t2)` of the closest points of two non-parallel lines
/// `o1 + t1 * d1` and `o2 + t2 * d2`, or `None` when they are parallel.
fn line_line_params<T: Scalar, const N: usize>(
    o1: &Point<T, N>,
    d1: &Vector<T, N>,
    o2: &Point<T, N>,
    d2: &Vector<T, N>,
) -> Option<(T, T)> {
    let sin = d1.sin_to(d2);
    if sin.is_zero() {
        return None;
    }

    let a = d1.dot(d1);
    let b = d1.dot(d2);
    let c = d2.dot(d2);
    let denom = a * c * sin * sin;

    let w = *o2 - *o1;
    let wd1 = w.dot(d1);
    let wd2 = w.dot(d2);
    Some(((wd1 * c - wd2 * b) / denom, (wd1 * b - wd2 * a) / denom))
}

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn contains_point(&self, p: &Point<T, N>) -> Result<bool> {
        self.require_direction()?;
        Ok(self.holds(p))
    }

    fn holds(&self, p: &Point<T, N>) -> bool {
        let t = (*p - self.origin).dot(&self.direction) / self.direction.norm_squared();
        t.is_positive_or_zero() && self.point_at(t) == *p
    }

    pub fn intersects_orb(&self, orb: &Orb<T, N>) -> Result<bool> {
        Ok(self.orb_intersection_points(orb)?.intersects())
    }

    /// Boundary crossings with an orb, nearest first. Requires a unit
    /// direction.
    pub fn orb_intersection_points(&self, orb: &Orb<T, N>) -> Result<IntersectionResult<Point<T, N>>> {
        self.require_unit_direction()?;

        let hits: Vec<T> = match line_orb_roots(&self.origin, &self.direction, orb) {
            OrbRoots::None => Vec::new(),
            OrbRoots::Tangent(t) => vec![t],
            OrbRoots::Secant(t1, t2) => vec![t1, t2],
        }
        .into_iter()
        .filter(|t| t.is_positive_or_zero())
        .collect();

        Ok(match hits.as_slice() {
            [] => IntersectionResult::None,
            [t] => IntersectionResult::One(self.point_at(*t)),
            [t1, t2, ..] => IntersectionResult::pair(self.point_at(*t1), self.point_at(*t2)),
        })
    }

    pub fn intersects_ray(&self, other: &Self) -> Result<bool> {
        Ok(self.ray_intersection_point(other)?.intersects())
    }

    /// Collinear rays report the ends of their shared part: `Two` when
    /// they face each other (this origin first), `One` when one origin
    /// lies on the other ray, `Infinite` when they start together and
    /// run the same way.
    pub fn ray_intersection_point(&self, other: &Self) -> Result<IntersectionResult<Point<T, N>>> {
        self.require_direction()?;
        other.require_direction()?;

        let Some((t1, t2)) = line_line_params(&self.origin, &self.direction, &other.origin, &other.direction)
        else {
            log::trace!("ray intersection: parallel directions");
            return Ok(self.parallel_ray_overlap(other));
        };
        if !(t1.is_positive_or_zero() && t2.is_positive_or_zero()) {
            return Ok(IntersectionResult::None);
        }

        let p = self.point_at(t1);
        Ok(if p == other.point_at(t2) {
            IntersectionResult::One(p)
        } else {
            IntersectionResult::None
        })
    }

    fn parallel_ray_overlap(&self, other: &Self) -> IntersectionResult<Point<T, N>> {
        if self.origin == other.origin {
            return if self.direction.dot(&other.direction).is_negative() {
                IntersectionResult::One(self.origin)
            } else {
                IntersectionResult::Infinite
            };
        }
        match (other.holds(&self.origin), self.holds(&other.origin)) {
            (true, true) => IntersectionResult::Two(self.origin, other.origin),
            (true, false) => IntersectionResult::One(self.origin),
            (false, true) => IntersectionResult::One(other.origin),
            (false, false) => IntersectionResult::None,
        }
    }

    pub fn intersects_segment(&self, segment: &Segment<T, N>) -> Result<bool> {
        Ok(self.segment_intersection_point(segment)?.intersects())
    }

    /// Collinear overlap is reported by its ends, the one nearer the
    /// origin first.
    pub fn segment_intersection_point(&self, segment: &Segment<T, N>) -> Result<IntersectionResult<Point<T, N>>> {
        self.require_direction()?;

        if segment.is_degenerate() {
            return Ok(if self.holds(&segment.a) {
                IntersectionResult::One(segment.a)
            } else {
                IntersectionResult::None
            });
        }

        let Some((t1, t2)) = line_line_params(&self.origin, &self.direction, &segment.a, &segment.direction())
        else {
            log::trace!("ray/segment intersection: parallel directions");
            return Ok(self.parallel_segment_overlap(segment));
        };
        if !(t1.is_positive_or_zero() && t2.is_positive_or_zero() && t2.approx_le(&T::one())) {
            return Ok(IntersectionResult::None);
        }

        let p = self.point_at(t1);
        Ok(if p == segment.point_at(t2) {
            IntersectionResult::One(p)
        } else {
            IntersectionResult::None
        })
    }

    fn parallel_segment_overlap(&self, segment: &Segment<T, N>) -> IntersectionResult<Point<T, N>> {
        match (self.holds(&segment.a), self.holds(&segment.b)) {
            (true, true) => {
                let (near, far) = if self.origin.distance_to(&segment.a)
                    .approx_le(&self.origin.distance_to(&segment.b))
                {
                    (segment.a, segment.b)
                } else {
                    (segment.b, segment.a)
                };
                IntersectionResult::pair(near, far)
            }
            (true, false) => IntersectionResult::pair(self.origin, segment.a),
            (false, true) => IntersectionResult::pair(self.origin, segment.b),
            (false, false) => IntersectionResult::None,
        }
    }

    /// Hits of a ray lying in the plane of a polygon: the origin when it is
    /// inside, plus every edge crossing.
    fn in_plane_polygon_hits(
        &self,
        origin_inside: bool,
        edges: &[Segment<T, N>],
    ) -> Result<IntersectionResult<Point<T, N>>> {
        let mut candidates = Vec::with_capacity(edges.len() + 1);
        if origin_inside {
            candidates.push(self.origin);
        }
        for edge in edges {
            match self.segment_intersection_point(edge)? {
                IntersectionResult::One(p) => candidates.push(p),
                IntersectionResult::Two(p, q) => candidates.extend([p, q]),
                IntersectionResult::None | IntersectionResult::Infinite => {}
            }
        }
        Ok(IntersectionResult::nearest_two(&self.origin, candidates))
    }

    /// Direction mirrored by a surface of unit normal `normal`.
    pub fn reflected_direction(&self, normal: &Vector<T, N>) -> Vector<T, N> {
        self.direction - *normal * (T::two() * self.direction.dot(normal))
    }

    /// Bounces the ray off a plane (a line in 2D). A ray that misses or
    /// runs along the plane is returned unchanged.
    pub fn reflection_on_plane(&self, plane: &Plane<T, N>) -> Result<Self> {
        self.require_unit_direction()?;
        match self.plane_intersection_point(plane)? {
            IntersectionResult::One(hit) | IntersectionResult::Two(hit, _) => {
                let normal = plane.normal.normalized();
                Ok(Self::new(&hit, &self.reflected_direction(&normal)))
            }
            IntersectionResult::None | IntersectionResult::Infinite => Ok(*self),
        }
    }
}

impl<T: Scalar> Ray<T, 2> {
    pub fn intersects_triangle(&self, triangle: &Triangle<T, 2>) -> Result<bool> {
        Ok(self.triangle_intersection_points(triangle)?.intersects())
    }

    /// Entry and exit points, or the origin and the exit when the ray
    /// starts inside.
    pub fn triangle_intersection_points(&self, triangle: &Triangle<T, 2>) -> Result<IntersectionResult<Point2<T>>> {
        self.require_direction()?;
        let inside = triangle.contains_point(&self.origin)?;
        self.in_plane_polygon_hits(inside, &triangle.edges())
    }

    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral<T, 2>) -> Result<bool> {
        Ok(self.quadrilateral_intersection_points(quad)?.intersects())
    }

    pub fn quadrilateral_intersection_points(&self, quad: &Quadrilateral<T, 2>) -> Result<IntersectionResult<Point2<T>>> {
        self.require_direction()?;
        let inside = quad.contains_point(&self.origin)?;
        self.in_plane_polygon_hits(inside, &quad.edges())
    }

    /// Bounces a unit ray off a mirror segment. A ray running along the
    /// mirror or missing it is returned unchanged.
    pub fn reflection(&self, mirror: &Segment<T, 2>) -> Result<Self> {
        self.require_unit_direction()?;
        if mirror.is_degenerate() {
            log::debug!("reflection on a zero-length mirror");
            return Err(GeometryError::DegenerateSegment);
        }

        let along = mirror.direction().normalized();
        if along == self.direction || along == -self.direction {
            return Ok(*self);
        }
        match self.segment_intersection_point(mirror)? {
            IntersectionResult::One(hit) => Ok(Self::new(&hit, &self.reflected_direction(&along.perp()))),
            IntersectionResult::None | IntersectionResult::Two(_, _) | IntersectionResult::Infinite => Ok(*self),
        }
    }
}

impl<T: Scalar> Ray<T, 3> {
    pub fn intersects_triangle(&self, triangle: &Triangle<T, 3>) -> Result<bool> {
        Ok(self.triangle_intersection_points(triangle)?.intersects())
    }

    /// Single piercing point, or the in-plane hits when the ray lies in
    /// the triangle's plane.
    pub fn triangle_intersection_points(&self, triangle: &Triangle<T, 3>) -> Result<IntersectionResult<Point<T, 3>>> {
        self.require_direction()?;
        let plane = triangle
            .plane()
            .map_err(|_| GeometryError::DegenerateTriangle)?;

        match self.plane_intersection_point(&plane)? {
            IntersectionResult::None => Ok(IntersectionResult::None),
            IntersectionResult::One(p) | IntersectionResult::Two(p, _) => Ok(if triangle.contains_point(&p)? {
                IntersectionResult::One(p)
            } else {
                IntersectionResult::None
            }),
            IntersectionResult::Infinite => {
                let inside = triangle.contains_point(&self.origin)?;
                self.in_plane_polygon_hits(inside, &triangle.edges())
            }
        }
    }

    pub fn intersects_quadrilateral(&self, quad: &Quadrilateral<T, 3>) -> Result<bool> {
        Ok(self.quadrilateral_intersection_points(quad)?.intersects())
    }

    pub fn quadrilateral_intersection_points(&self, quad: &Quadrilateral<T, 3>) -> Result<IntersectionResult<Point<T, 3>>> {
        self.require_direction()?;
        let plane = quad.plane()?;

        match self.plane_intersection_point(&plane)? {
            IntersectionResult::None => Ok(IntersectionResult::None),
            IntersectionResult::One(p) | IntersectionResult::Two(p, _) => Ok(if quad.contains_point(&p)? {
                IntersectionResult::One(p)
            } else {
                IntersectionResult::None
            }),
            IntersectionResult::Infinite => {
                let inside = quad.contains_point(&self.origin)?;
                self.in_plane_polygon_hits(inside, &quad.edges())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point3, Ray2, Ray3, Segment2, Vector2, Vector3};
    use crate::intersection::result::IntersectionKind;

    fn ray2(o: [f64; 2], d: [f64; 2]) -> Ray2<f64> {
        Ray2::new(&Point2::from(o), &Vector2::new(d[0], d[1]))
    }

    fn seg2(a: [f64; 2], b: [f64; 2]) -> Segment2<f64> {
        Segment2::new(&Point2::from(a), &Point2::from(b))
    }

    #[test]
    fn point_on_ray() {
        let r = ray2([1.0, 1.0], [1.0, 0.0]);
        assert!(r.contains_point(&Point2::new(1.0, 1.0)).unwrap());
        assert!(r.contains_point(&Point2::new(7.5, 1.0)).unwrap());
        assert!(!r.contains_point(&Point2::new(0.5, 1.0)).unwrap());
        assert!(!r.contains_point(&Point2::new(3.0, 1.5)).unwrap());
        assert_eq!(
            Ray2::<f64>::zero().contains_point(&Point2::new(0.0, 0.0)),
            Err(GeometryError::ZeroDirection)
        );
    }

    #[test]
    fn rays_crossing() {
        let r1 = ray2([0.0, 0.0], [1.0, 1.0]);
        let r2 = ray2([2.0, 0.0], [-1.0, 1.0]);
        assert_eq!(
            r1.ray_intersection_point(&r2).unwrap(),
            IntersectionResult::One(Point2::new(1.0, 1.0))
        );
        assert!(!r1.reversed().intersects_ray(&r2).unwrap());
    }

    #[test]
    fn shallow_crossings() {
        let r = ray2([0.0, 0.0], [1.0, 0.0]);
        assert_eq!(
            r.ray_intersection_point(&ray2([0.0, -5e-6], [2.0, 1e-5])).unwrap(),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
        assert_eq!(
            r.segment_intersection_point(&seg2([0.0, -5e-6], [2.0, 5e-6])).unwrap(),
            IntersectionResult::One(Point2::new(1.0, 0.0))
        );
        assert_eq!(
            r.segment_intersection_point(&seg2([3.0, -2e-6], [3.0 + 1e-6, 2e-6])).unwrap(),
            IntersectionResult::One(Point2::new(3.0 + 5e-7, 0.0))
        );
    }

    #[test]
    fn skew_rays_in_space_miss() {
        let r1 = Ray3::new(&Point3::new(0.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        let r2 = Ray3::new(&Point3::new(1.0, -1.0, 1.0), &Vector3::new(0.0, 1.0, 0.0));
        assert!(r1.ray_intersection_point(&r2).unwrap().is_none());
    }

    #[test]
    fn collinear_rays() {
        let r = ray2([0.0, 0.0], [1.0, 0.0]);
        assert_eq!(r.ray_intersection_point(&r).unwrap(), IntersectionResult::Infinite);
        assert_eq!(
            r.ray_intersection_point(&r.reversed()).unwrap(),
            IntersectionResult::One(Point2::new(0.0, 0.0))
        );
        assert_eq!(
            r.ray_intersection_point(&ray2([3.0, 0.0], [-1.0, 0.0])).unwrap(),
            IntersectionResult::Two(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0))
        );
        assert_eq!(
            r.ray_intersection_point(&ray2([3.0, 0.0], [1.0, 0.0])).unwrap(),
            IntersectionResult::One(Point2::new(3.0, 0.0))
        );
        assert!(r.ray_intersection_point(&ray2([-3.0, 0.0], [-1.0, 0.0])).unwrap().is_none());
        assert!(r.ray_intersection_point(&ray2([0.0, 1.0], [1.0, 0.0])).unwrap().is_none());
    }

    #[test]
    fn ray_against_segments() {
        let r = ray2([0.0, 0.0], [1.0, 0.0]);
        assert_eq!(
            r.segment_intersection_point(&seg2([2.0, -1.0], [2.0, 1.0])).unwrap(),
            IntersectionResult::One(Point2::new(2.0, 0.0))
        );
        assert!(r.segment_intersection_point(&seg2([-2.0, -1.0], [-2.0, 1.0])).unwrap().is_none());
        assert!(r.segment_intersection_point(&seg2([2.0, 0.5], [2.0, 1.0])).unwrap().is_none());

        assert_eq!(
            r.segment_intersection_point(&seg2([5.0, 0.0], [2.0, 0.0])).unwrap(),
            IntersectionResult::Two(Point2::new(2.0, 0.0), Point2::new(5.0, 0.0))
        );
        assert_eq!(
            r.segment_intersection_point(&seg2([-1.0, 0.0], [2.0, 0.0])).unwrap(),
            IntersectionResult::Two(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0))
        );
        assert_eq!(
            r.segment_intersection_point(&seg2([-1.0, 0.0], [0.0, 0.0])).unwrap(),
            IntersectionResult::One(Point2::new(0.0, 0.0))
        );
        assert_eq!(
            r.segment_intersection_point(&seg2([4.0, 0.0], [4.0, 0.0])).unwrap(),
            IntersectionResult::One(Point2::new(4.0, 0.0))
        );
    }

    #[test]
    fn ray_through_sphere() {
        let orb = Orb::new(&Point3::new(5.0, 0.0, 0.0), 1.0);
        let r = Ray3::new(&Point3::new(0.0, 0.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(
            r.orb_intersection_points(&orb).unwrap(),
            IntersectionResult::Two(Point3::new(4.0, 0.0, 0.0), Point3::new(6.0, 0.0, 0.0))
        );
        assert!(!r.reversed().intersects_orb(&orb).unwrap());

        let from_inside = Ray3::new(&Point3::new(5.0, 0.0, 0.0), &Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(
            from_inside.orb_intersection_points(&orb).unwrap(),
            IntersectionResult::One(Point3::new(5.0, 0.0, 1.0))
        );

        let grazing = Ray3::new(&Point3::new(0.0, 1.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(grazing.orb_intersection_points(&orb).unwrap().kind(), IntersectionKind::One);

        let long = Ray3::new(&Point3::new(0.0, 0.0, 0.0), &Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(
            long.orb_intersection_points(&orb),
            Err(GeometryError::NotNormalized { length: 2.0 })
        );
    }

    #[test]
    fn ray_across_flat_shapes() {
        let tri = Triangle::new(&Point2::new(0.0, 0.0), &Point2::new(4.0, 0.0), &Point2::new(0.0, 4.0));
        let across = ray2([-1.0, 1.0], [1.0, 0.0]);
        assert_eq!(
            across.triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Two(Point2::new(0.0, 1.0), Point2::new(3.0, 1.0))
        );
        let from_inside = ray2([1.0, 1.0], [1.0, 0.0]);
        assert_eq!(
            from_inside.triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Two(Point2::new(1.0, 1.0), Point2::new(3.0, 1.0))
        );
        let heading_away = ray2([-1.0, 0.0], [-1.0, 0.0]);
        assert!(!heading_away.intersects_triangle(&tri).unwrap());

        let square = Quadrilateral::<f64, 2>::unit_square();
        let diagonal = ray2([-1.0, -1.0], [1.0, 1.0]);
        assert_eq!(
            diagonal.quadrilateral_intersection_points(&square).unwrap(),
            IntersectionResult::Two(Point2::new(-0.5, -0.5), Point2::new(0.5, 0.5))
        );
    }

    #[test]
    fn ray_through_faces_in_space() {
        let tri = Triangle::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(4.0, 0.0, 0.0),
            &Point3::new(0.0, 4.0, 0.0),
        );
        let down = Ray3::new(&Point3::new(1.0, 1.0, 5.0), &Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(
            down.triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::One(Point3::new(1.0, 1.0, 0.0))
        );
        let beside = Ray3::new(&Point3::new(3.0, 3.0, 5.0), &Vector3::new(0.0, 0.0, -1.0));
        assert!(!beside.intersects_triangle(&tri).unwrap());

        let in_plane = Ray3::new(&Point3::new(-1.0, 1.0, 0.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(
            in_plane.triangle_intersection_points(&tri).unwrap(),
            IntersectionResult::Two(Point3::new(0.0, 1.0, 0.0), Point3::new(3.0, 1.0, 0.0))
        );

        let quad = Quadrilateral::new(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(0.0, 2.0, 0.0),
            &Point3::new(0.0, 2.0, 2.0),
            &Point3::new(0.0, 0.0, 2.0),
        );
        let sideways = Ray3::new(&Point3::new(-3.0, 1.0, 1.0), &Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(
            sideways.quadrilateral_intersection_points(&quad).unwrap(),
            IntersectionResult::One(Point3::new(0.0, 1.0, 1.0))
        );
    }

    #[test]
    fn reflection_off_mirrors() {
        let r = ray2([0.0, 1.0], [1.0, 0.0]);
        let mirror = seg2([2.0, 0.0], [2.0, 2.0]);
        let bounced = r.reflection(&mirror).unwrap();
        assert_eq!(bounced.origin, Point2::new(2.0, 1.0));
        assert_eq!(bounced.direction, Vector2::new(-1.0, 0.0));

        let diag = 0.5_f64.sqrt();
        let slanted = Ray2::new(&Point2::new(0.0, 1.0), &Vector2::new(diag, -diag));
        let floor = seg2([-5.0, 0.0], [5.0, 0.0]);
        let bounced = slanted.reflection(&floor).unwrap();
        assert_eq!(bounced.origin, Point2::new(1.0, 0.0));
        assert_eq!(bounced.direction, Vector2::new(diag, diag));

        let along = seg2([0.0, 1.0], [5.0, 1.0]);
        assert_eq!(r.reflection(&along).unwrap(), r);
        let behind = seg2([-2.0, 0.0], [-2.0, 2.0]);
        assert_eq!(r.reflection(&behind).unwrap(), r);

        assert_eq!(
            r.reflection(&seg2([1.0, 1.0], [1.0, 1.0])),
            Err(GeometryError::DegenerateSegment)
        );
    }

    #[test]
    fn reflection_off_a_plane() {
        let xy = Plane::<f64, 3>::xy();
        let diag = 0.5_f64.sqrt();
        let r = Ray3::new(&Point3::new(-1.0, 0.0, 1.0), &Vector3::new(diag, 0.0, -diag));
        let bounced = r.reflection_on_plane(&xy).unwrap();
        assert_eq!(bounced.origin, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounced.direction, Vector3::new(diag, 0.0, diag));

        let away = r.reversed();
        assert_eq!(away.reflection_on_plane(&xy).unwrap(), away);
    }
}
