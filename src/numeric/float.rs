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

use num_traits::{AsPrimitive, Float, FloatConst};

use crate::{
    geometry::util::{EPS, EPS_F32},
    numeric::scalar::Scalar,
    operations::{Abs, One, Sign, Sqrt, Trig, Zero},
};

macro_rules! impl_float_scalar {
    ($t:ty, $eps:expr) => {
        impl Zero for $t {
            fn zero() -> Self {
                0.0
            }

            fn is_zero(&self) -> bool {
                Float::abs(*self) < $eps
            }
        }

        impl Sign for $t {
            fn is_positive(&self) -> bool {
                *self > $eps
            }

            fn is_negative(&self) -> bool {
                *self < -$eps
            }

            fn is_positive_or_zero(&self) -> bool {
                *self >= -$eps
            }

            fn is_negative_or_zero(&self) -> bool {
                *self <= $eps
            }
        }

        impl One for $t {
            fn one() -> Self {
                1.0
            }
        }

        impl Abs for $t {
            fn abs(&self) -> Self {
                Float::abs(*self)
            }
        }

        impl Sqrt for $t {
            fn sqrt(&self) -> Self {
                Float::sqrt(*self)
            }
        }

        impl Trig for $t {
            fn pi() -> Self {
                <$t as FloatConst>::PI()
            }

            fn sin(&self) -> Self {
                Float::sin(*self)
            }

            fn cos(&self) -> Self {
                Float::cos(*self)
            }

            // Clamped so rounding noise on unit dot products stays in domain.
            fn acos(&self) -> Self {
                Float::acos(num_traits::clamp(*self, -1.0, 1.0))
            }
        }

        impl Scalar for $t {
            fn tolerance() -> Self {
                $eps
            }

            fn from_f64(value: f64) -> Self {
                value.as_()
            }

            fn to_f64(&self) -> f64 {
                (*self).as_()
            }
        }
    };
}

impl_float_scalar!(f64, EPS);
impl_float_scalar!(f32, EPS_F32);
