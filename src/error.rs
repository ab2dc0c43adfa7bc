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

/// Contract violations. Geometric "misses" are never reported through this
/// type; they are ordinary `IntersectionResult::None` or `false` values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A ray query was made with a null direction.
    #[error("ray direction must not be null")]
    ZeroDirection,

    /// A metric ray query was made with a non-unit direction.
    #[error("ray direction must be normalized, got length {length}")]
    NotNormalized { length: f64 },

    /// The three vertices of a triangle are collinear.
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,

    /// Neither diagonal split of a quadrilateral yields a proper triangle.
    #[error("quadrilateral has no non-degenerate triangle split")]
    DegenerateQuadrilateral,

    /// A segment used as a mirror or axis has zero length.
    #[error("segment has zero length")]
    DegenerateSegment,

    /// A plane was built from collinear points or has a null normal.
    #[error("plane normal is null")]
    DegeneratePlane,
}

pub type Result<T> = std::result::Result<T, GeometryError>;
