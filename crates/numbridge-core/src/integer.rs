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

//! # Arbitrary-Precision Integer
//!
//! `Integer` wraps `num_bigint::BigInt`. It is exact and unbounded; sign and
//! magnitude survive every conversion unchanged and zero maps to zero. The
//! narrowing accessor `to_native` is the only way to obtain a primitive
//! integer and reports values that do not fit instead of truncating them.
//!
//! ```rust
//! use numbridge_core::Integer;
//!
//! let n: Integer = "123213123211233232321312321321".parse::<num_bigint::BigInt>().unwrap().into();
//! assert_eq!(n.to_native::<i64>(), None);
//! assert_eq!(Integer::from(-1).to_native::<i8>(), Some(-1));
//! ```

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, PrimInt, Signed, ToPrimitive, Zero};
use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Rem, Sub},
};

/// An exact, arbitrary-precision signed integer.
#[repr(transparent)]
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    /// Creates an integer from its sign and magnitude. A zero magnitude
    /// yields zero regardless of `negative`.
    pub fn from_sign_magnitude(negative: bool, magnitude: BigUint) -> Self {
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Self(BigInt::from_biguint(sign, magnitude))
    }

    /// Creates an integer from any primitive integer.
    pub fn from_native<T>(value: T) -> Self
    where
        T: PrimInt,
    {
        let big = value
            .to_i128()
            .map(BigInt::from)
            .or_else(|| value.to_u128().map(BigInt::from))
            .unwrap_or_default();
        Self(big)
    }

    /// Converts to a primitive integer, returning `None` if the value does
    /// not fit.
    pub fn to_native<T>(&self) -> Option<T>
    where
        T: PrimInt,
    {
        if self.0.is_negative() {
            self.0.to_i128().and_then(<T as num_traits::NumCast>::from)
        } else {
            self.0.to_u128().and_then(<T as num_traits::NumCast>::from)
        }
    }

    /// Returns `-1`, `0` or `1` according to the sign.
    #[inline]
    pub fn signum(&self) -> i8 {
        match self.0.sign() {
            Sign::Minus => -1,
            Sign::NoSign => 0,
            Sign::Plus => 1,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the absolute value.
    #[inline]
    pub fn magnitude(&self) -> &BigUint {
        self.0.magnitude()
    }

    /// Returns the number of bits of the absolute value (zero for zero).
    #[inline]
    pub fn nbits(&self) -> u64 {
        self.0.bits()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    #[inline]
    pub fn into_bigint(self) -> BigInt {
        self.0
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<BigInt> for Integer {
    #[inline]
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<Integer> for BigInt {
    #[inline]
    fn from(value: Integer) -> Self {
        value.0
    }
}

impl From<BigUint> for Integer {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self(BigInt::from(value))
    }
}

macro_rules! impl_from_primitive {
    ($t:ty) => {
        impl From<$t> for Integer {
            #[inline]
            fn from(value: $t) -> Self {
                Self(BigInt::from(value))
            }
        }
    };
}

impl_from_primitive!(i8);
impl_from_primitive!(u8);
impl_from_primitive!(i16);
impl_from_primitive!(u16);
impl_from_primitive!(i32);
impl_from_primitive!(u32);
impl_from_primitive!(i64);
impl_from_primitive!(u64);
impl_from_primitive!(i128);
impl_from_primitive!(u128);
impl_from_primitive!(isize);
impl_from_primitive!(usize);

macro_rules! impl_binary_op {
    ($trait_name:ident, $method:ident) => {
        impl $trait_name for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0.$method(rhs.0))
            }
        }

        impl<'a> $trait_name<&'a Integer> for &'a Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &'a Integer) -> Integer {
                Integer((&self.0).$method(&rhs.0))
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
// Panic on a zero divisor, like the primitives; see `TryDivVal`.
impl_binary_op!(Div, div);
impl_binary_op!(Rem, rem);

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        Integer(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        Integer(-&self.0)
    }
}

impl Zero for Integer {
    #[inline]
    fn zero() -> Self {
        Self(BigInt::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    #[inline]
    fn one() -> Self {
        Self(BigInt::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn big(s: &str) -> Integer {
        Integer::from(s.parse::<BigInt>().unwrap())
    }

    #[test]
    fn test_zero_and_sign() {
        assert!(Integer::default().is_zero());
        assert_eq!(Integer::default().signum(), 0);
        assert_eq!(Integer::from(-5).signum(), -1);
        assert_eq!(Integer::from(5u8).signum(), 1);
    }

    #[test]
    fn test_sign_magnitude() {
        let n = Integer::from_sign_magnitude(true, BigUint::from(17u32));
        assert_eq!(n, Integer::from(-17));
        assert_eq!(n.magnitude(), &BigUint::from(17u32));
        // Negative zero collapses to zero.
        let z = Integer::from_sign_magnitude(true, BigUint::zero());
        assert!(z.is_zero());
        assert!(!z.is_negative());
    }

    #[test]
    fn test_to_native_range() {
        assert_eq!(Integer::from(127).to_native::<i8>(), Some(127i8));
        assert_eq!(Integer::from(128).to_native::<i8>(), None);
        assert_eq!(Integer::from(-1).to_native::<u32>(), None);
        assert_eq!(Integer::from(u128::MAX).to_native::<u128>(), Some(u128::MAX));
        assert_eq!(Integer::from(i128::MIN).to_native::<i128>(), Some(i128::MIN));
        assert_eq!(big("123213123211233232321312321321").to_native::<i64>(), None);
    }

    #[test]
    fn test_from_native_extremes() {
        assert_eq!(Integer::from_native(u128::MAX), Integer::from(u128::MAX));
        assert_eq!(Integer::from_native(i64::MIN), Integer::from(i64::MIN));
        assert_eq!(Integer::from_native(0u8), Integer::zero());
    }

    #[test]
    fn test_nbits() {
        assert_eq!(Integer::zero().nbits(), 0);
        assert_eq!(Integer::from(-1).nbits(), 1);
        assert_eq!(Integer::from(255).nbits(), 8);
        assert_eq!(Integer::from(256).nbits(), 9);
    }

    #[test]
    fn test_arithmetic() {
        let a = big("123213123211233232321312321321");
        let b = Integer::from(-39);
        assert_eq!(&(&a + &b) - &b, a);
        assert_eq!((&a * &b) / b.clone(), a);
        assert_eq!(-(-a.clone()), a);
        assert_eq!(Integer::from(7) % Integer::from(3), Integer::one());
    }

    #[test]
    #[should_panic]
    fn test_div_by_zero_panics() {
        let _ = Integer::one() / Integer::zero();
    }

    #[test]
    fn test_native_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..1000 {
            let v: i64 = rng.gen();
            assert_eq!(Integer::from_native(v).to_native::<i64>(), Some(v));
            let u: u128 = rng.gen();
            assert_eq!(Integer::from_native(u).to_native::<u128>(), Some(u));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Integer::from(-42).to_string(), "-42");
        assert_eq!(format!("{:?}", Integer::from(3)), "Integer(3)");
    }
}
