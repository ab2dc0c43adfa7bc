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
        vector::{Vector, VectorOps},
    },
    numeric::scalar::Scalar,
    operations::Zero,
};

/// Half-line `origin + t * direction`, `t >= 0`.
///
/// Metric queries (orb intersection, reflection) expect a unit direction.
/// The null direction is reserved for [`Ray::zero`] and rejected by every
/// query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray<T: Scalar, const N: usize> {
    pub origin: Point<T, N>,
    pub direction: Vector<T, N>,
}

impl<T: Scalar, const N: usize> Ray<T, N> {
    pub fn new(origin: &Point<T, N>, direction: &Vector<T, N>) -> Self {
        Self {
            origin: *origin,
            direction: *direction,
        }
    }

    /// Ray through `origin` towards `target`, with a normalized direction.
    pub fn through(origin: &Point<T, N>, target: &Point<T, N>) -> Self {
        Self::new(origin, &(*target - *origin).normalized())
    }

    pub fn zero() -> Self {
        Self::new(&Point::zero(), &Vector::zero())
    }

    /// Ray from the origin along the first axis.
    pub fn unit_ray() -> Self {
        let mut direction = Vector::zero();
        direction[0] = T::one();
        Self::new(&Point::zero(), &direction)
    }

    pub fn point_at(&self, t: T) -> Point<T, N> {
        self.origin + self.direction * t
    }

    pub fn reversed(&self) -> Self {
        Self::new(&self.origin, &-self.direction)
    }

    pub fn normalized(&self) -> Self {
        Self::new(&self.origin, &self.direction.normalized())
    }

    pub(crate) fn require_direction(&self) -> Result<()> {
        if self.direction.is_zero() {
            log::debug!("rejecting query on a ray with a null direction");
            return Err(GeometryError::ZeroDirection);
        }
        Ok(())
    }

    pub(crate) fn require_unit_direction(&self) -> Result<()> {
        self.require_direction()?;
        if !self.direction.is_unit() {
            let length = self.direction.norm().to_f64();
            log::debug!("rejecting metric query on a ray of direction length {length}");
            return Err(GeometryError::NotNormalized { length });
        }
        Ok(())
    }
}

pub type Ray2<T> = Ray<T, 2>;
pub type Ray3<T> = Ray<T, 3>;
