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

use crate::{geometry::point::Point, numeric::scalar::Scalar};

/// Outcome of an intersection query.
///
/// For `Two`, the first point is the one nearest the query's reference point
/// (a segment's `a`, a ray's origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionResult<P> {
    None,
    One(P),
    Two(P, P),
    Infinite,
}

/// How many points an [`IntersectionResult`] carries.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    None = 0,
    One = 1,
    Two = 2,
    Infinite = 3,
}

impl<P> IntersectionResult<P> {
    pub fn kind(&self) -> IntersectionKind {
        match self {
            IntersectionResult::None => IntersectionKind::None,
            IntersectionResult::One(_) => IntersectionKind::One,
            IntersectionResult::Two(_, _) => IntersectionKind::Two,
            IntersectionResult::Infinite => IntersectionKind::Infinite,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, IntersectionResult::None)
    }

    pub fn intersects(&self) -> bool {
        !self.is_none()
    }

    pub fn first(&self) -> Option<&P> {
        match self {
            IntersectionResult::One(p) | IntersectionResult::Two(p, _) => Some(p),
            IntersectionResult::None | IntersectionResult::Infinite => None,
        }
    }

    pub fn second(&self) -> Option<&P> {
        match self {
            IntersectionResult::Two(_, q) => Some(q),
            _ => None,
        }
    }

    pub fn map<Q, F: FnMut(P) -> Q>(self, mut f: F) -> IntersectionResult<Q> {
        match self {
            IntersectionResult::None => IntersectionResult::None,
            IntersectionResult::One(p) => IntersectionResult::One(f(p)),
            IntersectionResult::Two(p, q) => {
                let p = f(p);
                IntersectionResult::Two(p, f(q))
            }
            IntersectionResult::Infinite => IntersectionResult::Infinite,
        }
    }
}

impl<T: Scalar, const N: usize> IntersectionResult<Point<T, N>> {
    /// `Two(p, q)`, or `One(p)` when the points coincide.
    pub fn pair(p: Point<T, N>, q: Point<T, N>) -> Self {
        if p == q {
            IntersectionResult::One(p)
        } else {
            IntersectionResult::Two(p, q)
        }
    }

    /// Collapses candidate hit points: duplicates are merged and at most the
    /// two points nearest `reference` are kept, nearest first.
    pub fn nearest_two<I>(reference: &Point<T, N>, candidates: I) -> Self
    where
        I: IntoIterator<Item = Point<T, N>>,
    {
        let mut distinct: Vec<Point<T, N>> = Vec::new();
        for p in candidates {
            if !distinct.iter().any(|q| *q == p) {
                distinct.push(p);
            }
        }

        let Some(first) = take_nearest(reference, &mut distinct) else {
            return IntersectionResult::None;
        };
        match take_nearest(reference, &mut distinct) {
            Some(second) => IntersectionResult::Two(first, second),
            None => IntersectionResult::One(first),
        }
    }
}

fn take_nearest<T: Scalar, const N: usize>(
    reference: &Point<T, N>,
    points: &mut Vec<Point<T, N>>,
) -> Option<Point<T, N>> {
    let mut best: Option<(usize, T)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = reference.distance_to(p);
        match best {
            Some((_, best_d)) if !d.approx_lt(&best_d) => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| points.swap_remove(i))
}
