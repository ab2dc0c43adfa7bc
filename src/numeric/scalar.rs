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

use crate::operations::{Abs, One, Sign, Sqrt, Trig, Zero};

use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// Numeric capability set every primitive is generic over.
///
/// All comparisons made by the geometry code go through the `approx_*`
/// helpers or the [`Sign`] queries, which are tolerance based.
pub trait Scalar:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Neg<Output = Self>
    + PartialOrd
    + Abs
    + Sqrt
    + Trig
    + Zero
    + Sign
    + One
    + Send
    + Sync
    + 'static
{
    fn tolerance() -> Self;
    fn from_f64(value: f64) -> Self;
    fn to_f64(&self) -> f64;

    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn half() -> Self {
        Self::one() / Self::two()
    }

    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).is_zero()
    }

    fn approx_ne(&self, other: &Self) -> bool {
        !self.approx_eq(other)
    }

    fn approx_gt(&self, other: &Self) -> bool {
        (*self - *other).is_positive()
    }

    fn approx_lt(&self, other: &Self) -> bool {
        (*self - *other).is_negative()
    }

    fn approx_ge(&self, other: &Self) -> bool {
        (*self - *other).is_positive_or_zero()
    }

    fn approx_le(&self, other: &Self) -> bool {
        (*self - *other).is_negative_or_zero()
    }

    /// Returns -1, 0, or +1.
    fn sign(&self) -> i8 {
        if self.is_positive() {
            1
        } else if self.is_negative() {
            -1
        } else {
            0
        }
    }

    fn min(self, other: Self) -> Self {
        if other.approx_lt(&self) { other } else { self }
    }

    fn max(self, other: Self) -> Self {
        if other.approx_gt(&self) { other } else { self }
    }

    /// Clamps into `[lo, hi]`, leaving values within tolerance of a bound
    /// untouched.
    fn clamp_to(self, lo: Self, hi: Self) -> Self {
        if self.approx_gt(&hi) {
            hi
        } else if self.approx_lt(&lo) {
            lo
        } else {
            self
        }
    }
}
