// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Complex Kinds
//!
//! `Complex128` pairs two `Real128` components. `Complex` pairs two `Real`
//! components that always share one precision: the constructor and
//! `set_prec` round both parts to the same bit count, so a `Complex` never
//! mixes precisions between its real and imaginary part.

use crate::{precision::Precision, real::Real, real128::Real128};
use std::{fmt::Display, ops::Neg};

/// A complex number with quadruple precision components.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex128 {
    re: Real128,
    im: Real128,
}

impl Complex128 {
    #[inline]
    pub const fn new(re: Real128, im: Real128) -> Self {
        Self { re, im }
    }

    #[inline]
    pub const fn re(&self) -> Real128 {
        self.re
    }

    #[inline]
    pub const fn im(&self) -> Real128 {
        self.im
    }

    /// Returns `true` if either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    #[inline]
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl From<Real128> for Complex128 {
    #[inline]
    fn from(re: Real128) -> Self {
        Self::new(re, Real128::ZERO)
    }
}

impl Neg for Complex128 {
    type Output = Complex128;

    #[inline]
    fn neg(self) -> Complex128 {
        Self::new(-self.re, -self.im)
    }
}

impl Display for Complex128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

/// A complex number with arbitrary-precision components sharing a single
/// precision.
#[derive(Debug, Clone, PartialEq)]
pub struct Complex {
    re: Real,
    im: Real,
}

impl Complex {
    /// Builds a complex value from two parts. Both parts are rounded to
    /// `prec`.
    pub fn new(re: Real, im: Real, prec: Precision) -> Self {
        Self {
            re: re.with_prec(prec),
            im: im.with_prec(prec),
        }
    }

    #[inline]
    pub fn re(&self) -> &Real {
        &self.re
    }

    #[inline]
    pub fn im(&self) -> &Real {
        &self.im
    }

    #[inline]
    pub fn prec(&self) -> Precision {
        self.re.prec()
    }

    pub fn set_prec(&mut self, prec: Precision) {
        self.re.set_prec(prec);
        self.im.set_prec(prec);
    }

    #[inline]
    pub fn into_parts(self) -> (Real, Real) {
        (self.re, self.im)
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    pub fn conj(&self) -> Self {
        Self {
            re: self.re.clone(),
            im: -&self.im,
        }
    }
}

impl From<Real> for Complex {
    fn from(re: Real) -> Self {
        let prec = re.prec();
        Self {
            re,
            im: Real::zero(prec),
        }
    }
}

impl From<Complex128> for Complex {
    fn from(value: Complex128) -> Self {
        Self {
            re: Real::from_real128(value.re()),
            im: Real::from_real128(value.im()),
        }
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}
