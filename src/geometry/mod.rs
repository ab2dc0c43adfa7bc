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

pub mod constants;
pub mod hexahedron;
pub mod orb;
pub mod plane;
pub mod point;
pub mod quadrilateral;
pub mod ray;
pub mod segment;
pub mod triangle;
pub mod util;
pub mod vector;

pub use hexahedron::Hexahedron;
pub use orb::{Circle, Orb, Sphere};
pub use plane::{Plane, Plane3};
pub use point::{Point, Point2, Point3};
pub use quadrilateral::{Quadrilateral, Quadrilateral2, Quadrilateral3};
pub use ray::{Ray, Ray2, Ray3};
pub use segment::{Segment, Segment2, Segment3};
pub use triangle::{Triangle, Triangle2, Triangle3};
pub use vector::{Cross3, Vector, Vector2, Vector3, VectorOps};
