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
        plane::Plane,
        point::Point,
        segment::Segment,
        vector::{Cross3, Vector, VectorOps},
    },
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T: Scalar, const N: usize> {
    pub a: Point<T, N>,
    pub b: Point<T, N>,
    pub c: Point<T, N>,
}

impl<T: Scalar, const N: usize> Triangle<T, N> {
    pub fn new(a: &Point<T, N>, b: &Point<T, N>, c: &Point<T, N>) -> Self {
        Self {
            a: *a,
            b: *b,
            c: *c,
        }
    }

    pub fn vertices(&self) -> [Point<T, N>; 3] {
        [self.a, self.b, self.c]
    }

    /// Edges AB, BC and CA.
    pub fn edges(&self) -> [Segment<T, N>; 3] {
        [
            Segment::new(&self.a, &self.b),
            Segment::new(&self.b, &self.c),
            Segment::new(&self.c, &self.a),
        ]
    }

    pub fn area(&self) -> T {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.norm() * ac.norm() * ab.sin_to(&ac) * T::half()
    }

    /// The vertices are collinear within tolerance, coincident ones
    /// included.
    pub fn is_degenerate(&self) -> bool {
        (self.b - self.a).is_parallel_to(&(self.c - self.a))
    }

    fn require_proper(&self) -> Result<()> {
        if self.is_degenerate() {
            log::debug!("triangle centre requested on collinear vertices");
            return Err(GeometryError::DegenerateTriangle);
        }
        Ok(())
    }

    pub fn centroid(&self) -> Point<T, N> {
        let third = T::one() / T::from_f64(3.0);
        self.a + ((self.b - self.a) + (self.c - self.a)) * third
    }

    /// Interior angle at `a`, in radians.
    pub fn angle_a(&self) -> T {
        (self.b - self.a).angle_to(&(self.c - self.a))
    }

    pub fn angle_b(&self) -> T {
        (self.a - self.b).angle_to(&(self.c - self.b))
    }

    pub fn angle_c(&self) -> T {
        (self.a - self.c).angle_to(&(self.b - self.c))
    }

    pub fn angle_sum(&self) -> T {
        self.angle_a() + self.angle_b() + self.angle_c()
    }

    /// Centre of the inscribed circle: the vertices weighted by the length
    /// of the opposite side.
    pub fn incenter(&self) -> Result<Point<T, N>> {
        self.require_proper()?;
        let la = self.b.distance_to(&self.c);
        let lb = self.c.distance_to(&self.a);
        let lc = self.a.distance_to(&self.b);
        let perimeter = la + lb + lc;
        Ok(self.a + ((self.b - self.a) * lb + (self.c - self.a) * lc) / perimeter)
    }

    /// Centre of the circumscribed circle, in the plane of the triangle.
    pub fn circumcenter(&self) -> Result<Point<T, N>> {
        self.require_proper()?;
        let u = self.b - self.a;
        let v = self.c - self.a;
        let (uu, uv, vv) = (u.dot(&u), u.dot(&v), v.dot(&v));
        // Solves u.(o - a) = |u|^2 / 2 and v.(o - a) = |v|^2 / 2 for
        // o - a = s * u + t * v.
        let sin = u.sin_to(&v);
        let twice_det = T::two() * uu * vv * sin * sin;
        let s = vv * (uu - uv) / twice_det;
        let t = uu * (vv - uv) / twice_det;
        Ok(self.a + u * s + v * t)
    }

    /// Meeting point of the altitudes, `a + b + c - 2 * circumcenter`.
    pub fn orthocenter(&self) -> Result<Point<T, N>> {
        let o = self.circumcenter()?;
        Ok(o + (self.a - o) + (self.b - o) + (self.c - o))
    }
}

impl<T: Scalar> Triangle<T, 3> {
    /// Unnormalized normal `(b - a) x (c - a)`.
    pub fn normal(&self) -> Vector<T, 3> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    pub fn plane(&self) -> Result<Plane<T, 3>> {
        Plane::from_points(&self.a, &self.b, &self.c)
    }
}

pub type Triangle2<T> = Triangle<T, 2>;
pub type Triangle3<T> = Triangle<T, 3>;
