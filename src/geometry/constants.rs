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

//! Process-wide canonical shapes in `f64`.
//!
//! Each constant is built on first access and never mutated afterwards.
//! The generic constructors (`Segment::unit_line`, `Hexahedron::unit_cube`,
//! ...) give the same shapes for other scalar types.

use once_cell::sync::Lazy;

use crate::geometry::{
    hexahedron::Hexahedron,
    orb::Orb,
    plane::Plane,
    quadrilateral::Quadrilateral,
    ray::Ray,
    segment::Segment,
};

pub static ZERO_SEGMENT_2: Lazy<Segment<f64, 2>> = Lazy::new(Segment::zero);
pub static ZERO_SEGMENT_3: Lazy<Segment<f64, 3>> = Lazy::new(Segment::zero);
pub static UNIT_LINE_2: Lazy<Segment<f64, 2>> = Lazy::new(Segment::unit_line);
pub static UNIT_LINE_3: Lazy<Segment<f64, 3>> = Lazy::new(Segment::unit_line);

pub static ZERO_RAY_2: Lazy<Ray<f64, 2>> = Lazy::new(Ray::zero);
pub static ZERO_RAY_3: Lazy<Ray<f64, 3>> = Lazy::new(Ray::zero);
pub static UNIT_RAY_2: Lazy<Ray<f64, 2>> = Lazy::new(Ray::unit_ray);
pub static UNIT_RAY_3: Lazy<Ray<f64, 3>> = Lazy::new(Ray::unit_ray);

pub static ZERO_PLANE: Lazy<Plane<f64, 3>> = Lazy::new(Plane::zero);
pub static PLANE_XY: Lazy<Plane<f64, 3>> = Lazy::new(Plane::xy);
pub static PLANE_ZX: Lazy<Plane<f64, 3>> = Lazy::new(Plane::zx);
pub static PLANE_YZ: Lazy<Plane<f64, 3>> = Lazy::new(Plane::yz);

pub static UNIT_SQUARE: Lazy<Quadrilateral<f64, 2>> = Lazy::new(Quadrilateral::unit_square);
pub static UNIT_CUBE: Lazy<Hexahedron<f64>> = Lazy::new(Hexahedron::unit_cube);
pub static UNIT_CIRCLE: Lazy<Orb<f64, 2>> = Lazy::new(Orb::unit);
pub static UNIT_SPHERE: Lazy<Orb<f64, 3>> = Lazy::new(Orb::unit);
