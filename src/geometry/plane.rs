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
        point::Point,
        vector::{Cross3, Vector, Vector3, VectorOps},
    },
    kernel::predicates::are_collinear,
    numeric::scalar::Scalar,
    operations::Zero,
};

/// Hyperplane `normal · x + d = 0`.
///
/// Distances are reported in metric units whatever the length of `normal`;
/// a plane with a null normal is the degenerate "zero plane".
#[derive(Clone, Copy, Debug)]
pub struct Plane<T: Scalar, const N: usize> {
    pub normal: Vector<T, N>,
    pub d: T,
}

impl<T: Scalar, const N: usize> Plane<T, N> {
    pub fn new(normal: Vector<T, N>, d: T) -> Self {
        Plane { normal, d }
    }

    pub fn from_point_normal(p: &Point<T, N>, normal: &Vector<T, N>) -> Self {
        Plane::new(*normal, -normal.dot(&p.as_vector()))
    }

    pub fn zero() -> Self {
        Plane::new(Vector::zero(), T::zero())
    }

    pub fn is_degenerate(&self) -> bool {
        self.normal.is_zero()
    }

    pub fn normalized(&self) -> Self {
        let len = self.normal.norm();
        if len.is_zero() {
            return *self;
        }
        Plane::new(self.normal / len, self.d / len)
    }

    /// Same plane with the half-spaces swapped.
    pub fn flipped(&self) -> Self {
        Plane::new(-self.normal, -self.d)
    }

    /// Raw value of the implicit equation at `p`.
    pub fn evaluate(&self, p: &Point<T, N>) -> T {
        self.normal.dot(&p.as_vector()) + self.d
    }

    pub fn signed_distance(&self, p: &Point<T, N>) -> T {
        let len = self.normal.norm();
        if len.is_zero() {
            return self.d;
        }
        self.evaluate(p) / len
    }

    pub fn distance(&self, p: &Point<T, N>) -> T {
        self.signed_distance(p).abs()
    }

    pub fn contains_point(&self, p: &Point<T, N>) -> bool {
        !self.is_degenerate() && self.signed_distance(p).is_zero()
    }

    pub fn project_point(&self, p: &Point<T, N>) -> Point<T, N> {
        if self.is_degenerate() {
            return *p;
        }
        *p - self.normal.normalized() * self.signed_distance(p)
    }

    /// Dot product of the normals.
    pub fn dot(&self, other: &Self) -> T {
        self.normal.dot(&other.normal)
    }

    /// Angle between the normals, in radians.
    pub fn angle(&self, other: &Self) -> T {
        self.normal.angle_to(&other.normal)
    }
}

impl<T: Scalar> Plane<T, 3> {
    pub fn from_coefficients(a: T, b: T, c: T, d: T) -> Self {
        Plane::new(Vector3::new(a, b, c), d)
    }

    /// Plane through three points, normal `(p2 - p1) x (p3 - p1)`.
    pub fn from_points(p1: &Point<T, 3>, p2: &Point<T, 3>, p3: &Point<T, 3>) -> Result<Self> {
        if are_collinear(p1, p2, p3) {
            return Err(GeometryError::DegeneratePlane);
        }
        let normal = (*p2 - *p1).cross(&(*p3 - *p1));
        Ok(Plane::from_point_normal(p1, &normal))
    }

    pub fn a(&self) -> T {
        self.normal[0]
    }

    pub fn b(&self) -> T {
        self.normal[1]
    }

    pub fn c(&self) -> T {
        self.normal[2]
    }

    /// The `z = 0` plane.
    pub fn xy() -> Self {
        Plane::from_coefficients(T::zero(), T::zero(), T::one(), T::zero())
    }

    /// The `y = 0` plane.
    pub fn zx() -> Self {
        Plane::from_coefficients(T::zero(), T::one(), T::zero(), T::zero())
    }

    /// The `x = 0` plane.
    pub fn yz() -> Self {
        Plane::from_coefficients(T::one(), T::zero(), T::zero(), T::zero())
    }
}

impl<T: Scalar, const N: usize> PartialEq for Plane<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && self.d.approx_eq(&other.d)
    }
}

pub type Plane3<T> = Plane<T, 3>;
