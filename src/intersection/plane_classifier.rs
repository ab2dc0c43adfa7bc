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
        hexahedron::Hexahedron,
        orb::Orb,
        plane::Plane,
        point::{Point, Point3},
        quadrilateral::Quadrilateral,
        ray::Ray,
        segment::Segment,
        triangle::Triangle,
        vector::{Vector, VectorOps},
    },
    intersection::result::IntersectionResult,
    numeric::scalar::Scalar,
};

/// Position of a primitive with respect to the two half-spaces of a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceRelation {
    Contained,
    PositiveSide,
    NegativeSide,
    BothSides,
}

impl SpaceRelation {
    /// Classifies a set of signed distances. Distances within tolerance of
    /// zero belong to the plane and side with either half-space.
    pub fn from_distances<T: Scalar>(distances: &[T]) -> Self {
        if distances.iter().all(|d| d.is_zero()) {
            SpaceRelation::Contained
        } else if distances.iter().all(|d| d.is_positive_or_zero()) {
            SpaceRelation::PositiveSide
        } else if distances.iter().all(|d| d.is_negative_or_zero()) {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::BothSides
        }
    }
}

pub trait SpaceRelationTo<T: Scalar, const N: usize> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation;
}

impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Point<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        SpaceRelation::from_distances(&[plane.signed_distance(self)])
    }
}

impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Segment<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        SpaceRelation::from_distances(&[plane.signed_distance(&self.a), plane.signed_distance(&self.b)])
    }
}

impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Triangle<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        SpaceRelation::from_distances(&self.vertices().map(|v| plane.signed_distance(&v)))
    }
}

impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Quadrilateral<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        SpaceRelation::from_distances(&self.vertices().map(|v| plane.signed_distance(&v)))
    }
}

impl<T: Scalar> SpaceRelationTo<T, 3> for Hexahedron<T> {
    fn space_relation(&self, plane: &Plane<T, 3>) -> SpaceRelation {
        SpaceRelation::from_distances(&self.vertices().map(|v| plane.signed_distance(&v)))
    }
}

/// An orb cut by the plane, or whose centre lies on it, is on both sides.
impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Orb<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        let dist = plane.signed_distance(&self.center);
        if dist.is_zero() || dist.abs().approx_lt(&self.radius) {
            SpaceRelation::BothSides
        } else if dist.is_negative() {
            SpaceRelation::NegativeSide
        } else {
            SpaceRelation::PositiveSide
        }
    }
}

/// Classified from the origin and the point `origin + direction`: a
/// ray heading towards the plane eventually reaches the other side.
impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Ray<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        let d_origin = plane.signed_distance(&self.origin);
        let d_ahead = plane.signed_distance(&self.point_at(T::one()));

        if d_origin.is_zero() {
            if d_ahead.is_zero() {
                SpaceRelation::Contained
            } else if d_ahead.is_negative() {
                SpaceRelation::NegativeSide
            } else {
                SpaceRelation::PositiveSide
            }
        } else if d_origin.is_negative() {
            if d_ahead.approx_le(&d_origin) {
                SpaceRelation::NegativeSide
            } else {
                SpaceRelation::BothSides
            }
        } else if d_ahead.approx_ge(&d_origin) {
            SpaceRelation::PositiveSide
        } else {
            SpaceRelation::BothSides
        }
    }
}

/// Parallel planes lie on one side of each other (or coincide); any other
/// pair crosses.
impl<T: Scalar, const N: usize> SpaceRelationTo<T, N> for Plane<T, N> {
    fn space_relation(&self, plane: &Plane<T, N>) -> SpaceRelation {
        if self.is_degenerate() || plane.is_degenerate() {
            return SpaceRelation::BothSides;
        }
        if !self.normal.is_parallel_to(&plane.normal) {
            return SpaceRelation::BothSides;
        }
        let on_self = Point::origin() - self.normal * (self.d / self.normal.norm_squared());
        SpaceRelation::from_distances(&[plane.signed_distance(&on_self)])
    }
}

/// Hit of the line `origin + t * dir` with `plane`, keeping parameters
/// accepted by `in_range`.
fn linear_plane_hit<T: Scalar, const N: usize>(
    origin: &Point<T, N>,
    dir: &Vector<T, N>,
    plane: &Plane<T, N>,
    in_range: impl Fn(&T) -> bool,
) -> IntersectionResult<Point<T, N>> {
    let len = plane.normal.norm();
    let num = -plane.evaluate(origin) / len;
    let den = dir.dot(&plane.normal) / len;

    if den.is_zero() {
        return if num.is_zero() {
            IntersectionResult::Infinite
        } else {
            IntersectionResult::None
        };
    }
    if num.is_zero() {
        return IntersectionResult::One(*origin);
    }

    let t = num / den;
    if in_range(&t) {
        IntersectionResult::One(*origin + *dir * t)
    } else {
        IntersectionResult::None
    }
}

fn require_plane<T: Scalar, const N: usize>(plane: &Plane<T, N>) -> Result<()> {
    if plane.is_degenerate() {
        log::debug!("rejecting query against a plane with a null normal");
        return Err(GeometryError::DegeneratePlane);
    }
    Ok(())
}

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn intersects_plane(&self, plane: &Plane<T, N>) -> Result<bool> {
        Ok(self.plane_intersection_point(plane)?.intersects())
    }

    /// `Infinite` when the ray lies on the plane.
    pub fn plane_intersection_point(&self, plane: &Plane<T, N>) -> Result<IntersectionResult<Point<T, N>>> {
        self.require_direction()?;
        require_plane(plane)?;
        Ok(linear_plane_hit(&self.origin, &self.direction, plane, |t| {
            t.is_positive_or_zero()
        }))
    }
}

impl<T: Scalar, const N: usize> Segment<T, N> {
    pub fn intersects_plane(&self, plane: &Plane<T, N>) -> Result<bool> {
        require_plane(plane)?;
        let da = plane.signed_distance(&self.a);
        let db = plane.signed_distance(&self.b);
        Ok(da.sign() * db.sign() <= 0)
    }

    /// `Infinite` when the segment lies on the plane.
    pub fn plane_intersection_point(&self, plane: &Plane<T, N>) -> Result<IntersectionResult<Point<T, N>>> {
        require_plane(plane)?;
        if self.is_degenerate() {
            return Ok(if plane.contains_point(&self.a) {
                IntersectionResult::One(self.a)
            } else {
                IntersectionResult::None
            });
        }
        Ok(linear_plane_hit(&self.a, &self.direction(), plane, |t| {
            t.is_positive_or_zero() && t.approx_le(&T::one())
        }))
    }

    pub fn project_onto_plane(&self, plane: &Plane<T, N>) -> Self {
        Self::new(&plane.project_point(&self.a), &plane.project_point(&self.b))
    }

    pub fn min_distance_to_plane(&self, plane: &Plane<T, N>) -> T {
        let da = plane.signed_distance(&self.a);
        let db = plane.signed_distance(&self.b);
        if da.sign() * db.sign() <= 0 {
            return T::zero();
        }
        da.abs().min(db.abs())
    }

    pub fn max_distance_to_plane(&self, plane: &Plane<T, N>) -> T {
        plane
            .distance(&self.a)
            .max(plane.distance(&self.b))
    }
}

fn det3<T: Scalar>(m: [[T; 3]; 3]) -> T {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1]) - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Row rank by Gaussian elimination with partial pivoting.
fn rank<T: Scalar, const C: usize>(mut rows: [[T; C]; 3]) -> usize {
    let mut rank = 0;
    for col in 0..C {
        if rank == 3 {
            break;
        }
        let mut pivot = rank;
        for r in rank + 1..3 {
            if rows[r][col].abs().approx_gt(&rows[pivot][col].abs()) {
                pivot = r;
            }
        }
        if rows[pivot][col].is_zero() {
            continue;
        }
        rows.swap(rank, pivot);
        for r in rank + 1..3 {
            let k = rows[r][col] / rows[rank][col];
            for c in col..C {
                let v = rows[rank][c];
                rows[r][c] -= k * v;
            }
        }
        rank += 1;
    }
    rank
}

impl<T: Scalar> Plane<T, 3> {
    /// Common points of three planes: `One` for a single point, `Infinite`
    /// when they share a line or coincide, `None` otherwise.
    pub fn three_plane_intersection(&self, p2: &Self, p3: &Self) -> Result<IntersectionResult<Point3<T>>> {
        for p in [self, p2, p3] {
            require_plane(p)?;
        }
        let aug = [self, p2, p3].map(|p| {
            let q = p.normalized();
            [q.a(), q.b(), q.c(), -q.d]
        });
        let m = aug.map(|r| [r[0], r[1], r[2]]);
        let det = det3(m);

        if !det.is_zero() {
            let column = |k: usize| {
                let mut mk = m;
                for (row, r) in mk.iter_mut().zip(aug.iter()) {
                    row[k] = r[3];
                }
                det3(mk) / det
            };
            return Ok(IntersectionResult::One(Point3::new(column(0), column(1), column(2))));
        }

        if rank(m) == rank(aug) {
            Ok(IntersectionResult::Infinite)
        } else {
            Ok(IntersectionResult::None)
        }
    }
}
