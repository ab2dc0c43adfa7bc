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

use std::{
    array,
    ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub},
};

use crate::{
    geometry::point::Point,
    numeric::scalar::Scalar,
    operations::Zero,
};

#[derive(Clone, Copy, Debug)]
pub struct Vector<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait VectorOps<T: Scalar>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm_squared(&self) -> T;
    fn norm(&self) -> T;
    /// Unit vector in the same direction. A null vector is returned as is;
    /// callers check `is_zero` first where that matters.
    fn normalized(&self) -> Self;
    fn scale(&self, k: T) -> Self;
    fn angle_to(&self, other: &Self) -> T;
}

/// Cross product, only available in three dimensions.
pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Vector<T, 3>;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn from_vals<V>(vals: [V; N]) -> Self
    where
        V: Into<T>,
    {
        Vector {
            coords: vals.map(|v| v.into()),
        }
    }

    pub fn as_point(&self) -> Point<T, N> {
        Point::from(self.coords)
    }

    /// True if `self` has unit length within tolerance.
    pub fn is_unit(&self) -> bool {
        self.norm().approx_eq(&T::one())
    }

    /// Sine of the angle between two vectors, zero if either is null.
    ///
    /// Built from the 2x2 minors of the coordinates so parallel inputs give
    /// a sine at rounding level rather than the square root of it.
    pub fn sin_to(&self, other: &Self) -> T {
        let (n1, n2) = (self.norm(), other.norm());
        if n1.is_zero() || n2.is_zero() {
            return T::zero();
        }
        let mut wedge = T::zero();
        for i in 0..N {
            for j in (i + 1)..N {
                let minor = self.coords[i] * other.coords[j] - self.coords[j] * other.coords[i];
                wedge += minor * minor;
            }
        }
        wedge.sqrt() / n1 / n2
    }

    /// Parallel or antiparallel within tolerance. A null vector is parallel
    /// to everything.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.sin_to(other).is_zero()
    }
}

impl<T: Scalar> Vector<T, 2> {
    pub fn new(x: T, y: T) -> Self {
        Vector { coords: [x, y] }
    }

    /// Counter-clockwise perpendicular.
    pub fn perp(&self) -> Self {
        Vector2::new(-self.coords[1], self.coords[0])
    }

    /// Z component of the 3D cross product of the embedded vectors.
    pub fn perp_dot(&self, other: &Self) -> T {
        self.coords[0] * other.coords[1] - self.coords[1] * other.coords[0]
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector { coords: [x, y, z] }
    }
}

impl<T: Scalar, const N: usize> VectorOps<T> for Vector<T, N> {
    fn dot(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
    }

    fn norm_squared(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        if n.is_zero() {
            return *self;
        }
        *self / n
    }

    fn scale(&self, k: T) -> Self {
        *self * k
    }

    fn angle_to(&self, other: &Self) -> T {
        let (n1, n2) = (self.norm(), other.norm());
        if n1.is_zero() || n2.is_zero() {
            return T::zero();
        }
        (self.dot(other) / n1 / n2).acos()
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    fn cross(&self, other: &Vector<T, 3>) -> Vector<T, 3> {
        let [ax, ay, az] = self.coords;
        let [bx, by, bz] = other.coords;
        Vector3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Self) -> Self::Output {
        Vector {
            coords: array::from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector {
            coords: array::from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        Vector {
            coords: self.coords.map(|c| -c),
        }
    }
}

impl<T: Scalar, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn mul(self, k: T) -> Self::Output {
        Vector {
            coords: self.coords.map(|c| c * k),
        }
    }
}

impl<T: Scalar, const N: usize> Div<T> for Vector<T, N> {
    type Output = Vector<T, N>;
    fn div(self, k: T) -> Self::Output {
        Vector {
            coords: self.coords.map(|c| c / k),
        }
    }
}

impl<T: Scalar, const N: usize> Zero for Vector<T, N> {
    fn zero() -> Self {
        Vector {
            coords: array::from_fn(|_| T::zero()),
        }
    }

    fn is_zero(&self) -> bool {
        self.coords.iter().all(|c| c.is_zero())
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(coords: [T; N]) -> Self {
        Vector { coords }
    }
}

impl<T: Scalar, const N: usize> PartialEq for Vector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.approx_eq(b))
    }
}

pub type Vector2<T> = Vector<T, 2>;
pub type Vector3<T> = Vector<T, 3>;
