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

//! # Arbitrary-Precision Real
//!
//! `Real` is a binary floating point value with an explicit precision. A
//! finite value is `±significand * 2^exponent` where the significand is odd
//! (normalized) and has at most `prec` bits. Exponents are unbounded `i64`s,
//! so there is no underflow folding: `2^-16495` is as representable as
//! `2^16495`. Besides finite values there are signed zeros, signed
//! infinities and NaN; all of them carry a precision too.
//!
//! Precision only ever decreases through rounding. `set_prec` to a lower
//! precision rounds half-to-even; raising the precision keeps the value
//! unchanged. Equality and ordering compare values and ignore precision.

use crate::{
    integer::Integer,
    precision::{round_half_even, Precision},
    real128::Real128,
};
use num_bigint::BigUint;
use num_traits::Zero;
use std::{cmp::Ordering, fmt::Display, num::FpCategory, ops::Neg};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Class {
    Zero,
    Finite { significand: BigUint, exponent: i64 },
    Infinite,
    Nan,
}

/// An arbitrary-precision binary floating point value.
#[derive(Clone)]
pub struct Real {
    prec: Precision,
    negative: bool,
    class: Class,
}

impl Real {
    /// `+0` with the given precision.
    #[inline]
    pub fn zero(prec: Precision) -> Self {
        Self {
            prec,
            negative: false,
            class: Class::Zero,
        }
    }

    #[inline]
    pub fn nan(prec: Precision) -> Self {
        Self {
            prec,
            negative: false,
            class: Class::Nan,
        }
    }

    #[inline]
    pub fn infinity(negative: bool, prec: Precision) -> Self {
        Self {
            prec,
            negative,
            class: Class::Infinite,
        }
    }

    /// Builds `±significand * 2^exponent`, rounded half-to-even to `prec`
    /// bits.
    pub fn from_parts(
        negative: bool,
        significand: &BigUint,
        exponent: i64,
        prec: Precision,
    ) -> Self {
        if significand.is_zero() {
            return Self {
                prec,
                negative,
                class: Class::Zero,
            };
        }
        let (significand, exponent) = round_half_even(significand, exponent, prec);
        Self {
            prec,
            negative,
            class: Class::Finite {
                significand,
                exponent,
            },
        }
    }

    /// Converts an integer, rounding to `prec` bits.
    pub fn from_integer(value: &Integer, prec: Precision) -> Self {
        Self::from_parts(value.is_negative(), value.magnitude(), 0, prec)
    }

    /// Converts a `Real128` exactly; the result has a precision of 113 bits.
    pub fn from_real128(value: Real128) -> Self {
        let prec = Precision::REAL128;
        match value.to_parts() {
            Some((negative, significand, exponent)) => {
                Self::from_parts(negative, &significand, exponent, prec)
            }
            None if value.is_nan() => Self::nan(prec),
            None => Self::infinity(value.is_sign_negative(), prec),
        }
    }

    /// Converts an `f64` exactly; the result has a precision of 53 bits.
    pub fn from_f64(value: f64) -> Self {
        Self::from_real128(Real128::from(value)).with_prec(Precision::DOUBLE)
    }

    #[inline]
    pub fn prec(&self) -> Precision {
        self.prec
    }

    /// Changes the precision, rounding the value if the new precision is
    /// lower than the number of significand bits.
    pub fn set_prec(&mut self, prec: Precision) {
        if let Class::Finite {
            significand,
            exponent,
        } = &self.class
        {
            if significand.bits() > prec.get() {
                let (significand, exponent) = round_half_even(significand, *exponent, prec);
                self.class = Class::Finite {
                    significand,
                    exponent,
                };
            }
        }
        self.prec = prec;
    }

    /// Consuming variant of `set_prec`.
    #[inline]
    pub fn with_prec(mut self, prec: Precision) -> Self {
        self.set_prec(prec);
        self
    }

    /// Decomposes a finite value into `(negative, significand, exponent)`.
    /// Zero yields a zero significand. Returns `None` for infinities and NaN.
    pub fn to_parts(&self) -> Option<(bool, BigUint, i64)> {
        match &self.class {
            Class::Zero => Some((self.negative, BigUint::zero(), 0)),
            Class::Finite {
                significand,
                exponent,
            } => Some((self.negative, significand.clone(), *exponent)),
            Class::Infinite | Class::Nan => None,
        }
    }

    pub fn classify(&self) -> FpCategory {
        match self.class {
            Class::Zero => FpCategory::Zero,
            Class::Finite { .. } => FpCategory::Normal,
            Class::Infinite => FpCategory::Infinite,
            Class::Nan => FpCategory::Nan,
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.class, Class::Nan)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self.class, Class::Infinite)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self.class, Class::Zero | Class::Finite { .. })
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.class, Class::Zero)
    }

    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    // Compares |self| and |other| for finite values.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (&self.class, &other.class) {
            (Class::Zero, Class::Zero) => Ordering::Equal,
            (Class::Zero, _) => Ordering::Less,
            (_, Class::Zero) => Ordering::Greater,
            (
                Class::Finite {
                    significand: sa,
                    exponent: ea,
                },
                Class::Finite {
                    significand: sb,
                    exponent: eb,
                },
            ) => {
                let lead_a = *ea as i128 + sa.bits() as i128;
                let lead_b = *eb as i128 + sb.bits() as i128;
                if lead_a != lead_b {
                    return lead_a.cmp(&lead_b);
                }
                // Same leading bit, so the exponents differ by less than the
                // significand width.
                match ea.cmp(eb) {
                    Ordering::Equal => sa.cmp(sb),
                    Ordering::Greater => (sa << (ea - eb) as u64).cmp(sb),
                    Ordering::Less => sa.cmp(&(sb << (eb - ea) as u64)),
                }
            }
            _ => Ordering::Equal,
        }
    }
}

impl Neg for Real {
    type Output = Real;

    #[inline]
    fn neg(mut self) -> Real {
        self.negative = !self.negative;
        self
    }
}

impl Neg for &Real {
    type Output = Real;

    #[inline]
    fn neg(self) -> Real {
        -self.clone()
    }
}

impl PartialEq for Real {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Real {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        if self.is_zero() && other.is_zero() {
            return Some(Ordering::Equal);
        }
        let sign_a = if self.is_zero() { 0 } else if self.negative { -1 } else { 1 };
        let sign_b = if other.is_zero() { 0 } else if other.negative { -1 } else { 1 };
        if sign_a != sign_b {
            return Some(sign_a.cmp(&sign_b));
        }
        let magnitude = match (self.is_infinite(), other.is_infinite()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
        };
        Some(if sign_a < 0 { magnitude.reverse() } else { magnitude })
    }
}

impl std::fmt::Debug for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Real(prec={}, {})", self.prec, self)
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match &self.class {
            Class::Nan => write!(f, "nan"),
            Class::Infinite => write!(f, "{}inf", sign),
            Class::Zero => write!(f, "{}0", sign),
            Class::Finite {
                significand,
                exponent,
            } => {
                let frac_bits = significand.bits() - 1;
                let lead = *exponent as i128 + frac_bits as i128;
                if frac_bits == 0 {
                    return write!(f, "{}0x1p{:+}", sign, lead);
                }
                let pad = (4 - frac_bits % 4) % 4;
                let frac = (significand - (BigUint::from(1u32) << frac_bits)) << pad;
                let width = ((frac_bits + pad) / 4) as usize;
                let digits = format!("{:0>width$}", frac.to_str_radix(16), width = width);
                write!(f, "{}0x1.{}p{:+}", sign, digits.trim_end_matches('0'), lead)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn prec(bits: u64) -> Precision {
        Precision::new(bits).unwrap()
    }

    fn pow2(exp: i64, p: u64) -> Real {
        Real::from_parts(false, &BigUint::one(), exp, prec(p))
    }

    #[test]
    fn test_no_underflow_folding() {
        let tiny = pow2(-16495, 53);
        assert!(!tiny.is_zero());
        let (neg, sig, exp) = tiny.to_parts().unwrap();
        assert!(!neg);
        assert_eq!(sig, BigUint::one());
        assert_eq!(exp, -16495);
        assert!(pow2(-1_000_000, 2) > Real::zero(prec(2)));
    }

    #[test]
    fn test_from_parts_rounds_to_precision() {
        // 0b1011 at 3 bits: tie, kept odd -> 0b1100.
        let v = Real::from_parts(false, &BigUint::from(0b1011u32), 0, prec(3));
        assert_eq!(v, Real::from_integer(&Integer::from(12), prec(53)));
    }

    #[test]
    fn test_set_prec_rounds_down_only() {
        let mut v = Real::from_integer(&Integer::from(0b1011_0111), prec(8));
        v.set_prec(prec(4));
        assert_eq!(v.prec(), prec(4));
        assert_eq!(v, Real::from_integer(&Integer::from(0b1011_0000), prec(4)));

        let mut w = Real::from_integer(&Integer::from(5), prec(3));
        w.set_prec(prec(300));
        assert_eq!(w.prec(), prec(300));
        assert_eq!(w, Real::from_integer(&Integer::from(5), prec(3)));
    }

    #[test]
    fn test_equality_ignores_precision_and_zero_sign() {
        assert_eq!(pow2(3, 10), pow2(3, 1000));
        assert_eq!(Real::zero(prec(5)), -Real::zero(prec(9)));
        assert_ne!(Real::nan(prec(5)), Real::nan(prec(5)));
    }

    #[test]
    fn test_ordering() {
        let one = Real::from_integer(&Integer::from(1), prec(53));
        let two = Real::from_integer(&Integer::from(2), prec(53));
        let three = Real::from_integer(&Integer::from(3), prec(53));
        assert!(one < two);
        assert!(-&two < -&one);
        assert!(two < three);
        assert!(Real::infinity(true, prec(2)) < -&three);
        assert!(Real::infinity(false, prec(2)) > three);
        assert_eq!(Real::nan(prec(2)).partial_cmp(&one), None);
        // Same leading bit, different exponents: 1.5 < 1.75.
        let a = Real::from_parts(false, &BigUint::from(3u32), -1, prec(53));
        let b = Real::from_parts(false, &BigUint::from(7u32), -2, prec(53));
        assert!(a < b);
    }

    #[test]
    fn test_extreme_exponents() {
        let huge = Real::from_parts(false, &BigUint::from(3u32), i64::MAX - 1, prec(53));
        let tiny = Real::from_parts(false, &BigUint::from(3u32), i64::MIN, prec(53));
        assert!(tiny < huge);
        assert!(-&huge < -&tiny);
        assert!(pow2(i64::MAX, 2) < huge);
        assert_eq!(format!("{}", huge), format!("0x1.8p+{}", i64::MAX));
        assert_eq!(format!("{}", pow2(i64::MAX, 2)), format!("0x1p+{}", i64::MAX));
    }

    #[test]
    fn test_from_real128_and_f64() {
        let r = Real::from_real128(Real128::from(-1.5));
        assert_eq!(r.prec(), Precision::REAL128);
        assert_eq!(r, -Real::from_parts(false, &BigUint::from(3u32), -1, prec(2)));
        assert!(Real::from_real128(Real128::NAN).is_nan());
        assert!(Real::from_real128(Real128::NEG_INFINITY).is_sign_negative());
        let d = Real::from_f64(1.1);
        assert_eq!(d.prec(), Precision::DOUBLE);
        assert_eq!(d, Real::from_real128(Real128::from(1.1)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Real::from_integer(&Integer::from(3), prec(53)).to_string(), "0x1.8p+1");
        assert_eq!(pow2(-16495, 53).to_string(), "0x1p-16495");
        assert_eq!(Real::infinity(true, prec(1)).to_string(), "-inf");
        let v = Real::from_integer(&Integer::from(0b1_0000_0001), prec(53));
        assert_eq!(v.to_string(), "0x1.01p+8");
    }
}
