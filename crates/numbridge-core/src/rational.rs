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

//! # Exact Rational
//!
//! `Rational` wraps `num_rational::BigRational` and is always kept in
//! canonical form: the denominator is positive (its sign folded into the
//! numerator) and the fraction is reduced to lowest terms. Two rationals are
//! therefore equal exactly when their canonical numerators and denominators
//! are, whatever literals they were built from:
//!
//! ```rust
//! use numbridge_core::Rational;
//!
//! assert_eq!(Rational::new(3, -4).unwrap(), Rational::new(-6, 8).unwrap());
//! ```

use crate::{error::ArithmeticError, integer::Integer};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// An exact rational number in canonical form.
#[repr(transparent)]
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates the rational `num / den` in canonical form.
    ///
    /// Fails with `ArithmeticError::DivisionByZero` if `den` is zero.
    pub fn new<N, D>(num: N, den: D) -> Result<Self, ArithmeticError>
    where
        N: Into<Integer>,
        D: Into<Integer>,
    {
        let den: Integer = den.into();
        if den.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let num: Integer = num.into();
        Ok(Self(BigRational::new(num.into_bigint(), den.into_bigint())))
    }

    /// Creates the rational `value / 1`.
    #[inline]
    pub fn from_integer(value: Integer) -> Self {
        Self(BigRational::from_integer(value.into_bigint()))
    }

    /// The canonical numerator (carries the sign).
    #[inline]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numer().clone())
    }

    /// The canonical denominator (always positive).
    #[inline]
    pub fn denominator(&self) -> Integer {
        Integer::from(self.0.denom().clone())
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if self.0.is_negative() {
            -1
        } else {
            1
        }
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn as_big_rational(&self) -> &BigRational {
        &self.0
    }
}

impl std::fmt::Debug for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rational({}/{})", self.0.numer(), self.0.denom())
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}

impl From<Integer> for Rational {
    #[inline]
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<BigRational> for Rational {
    #[inline]
    fn from(value: BigRational) -> Self {
        // `Ratio` values built through its public API are already canonical.
        Self(value)
    }
}

impl From<i64> for Rational {
    #[inline]
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }
}

macro_rules! impl_binary_op {
    ($trait_name:ident, $method:ident) => {
        impl $trait_name for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                Rational(self.0.$method(rhs.0))
            }
        }

        impl<'a> $trait_name<&'a Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &'a Rational) -> Rational {
                Rational((&self.0).$method(&rhs.0))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
// Panics on a zero divisor.
impl_binary_op!(Div, div);

impl Neg for Rational {
    type Output = Rational;

    #[inline]
    fn neg(self) -> Rational {
        Rational(-self.0)
    }
}

impl Zero for Rational {
    #[inline]
    fn zero() -> Self {
        Self(BigRational::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    #[inline]
    fn one() -> Self {
        Self(BigRational::one())
    }
}
