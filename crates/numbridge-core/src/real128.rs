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

//! # Quadruple Precision
//!
//! `Real128` is an IEEE 754 binary128 value kept as its raw bit pattern: one
//! sign bit, fifteen exponent bits (bias 16383) and a 112-bit fraction with an
//! implicit leading one, for a 113-bit significand.
//!
//! Values are only ever built through `from_parts`, which applies the rules
//! of this kind:
//!
//! - The significand is rounded half-to-even to 113 bits.
//! - Results below the smallest normal (`2^-16382`) flush to a zero of the
//!   same sign. Subnormals are never produced.
//! - A value whose leading bit already lies above the largest exponent
//!   overflows to a signed infinity. A value that only crosses the top of the
//!   range through the rounding carry is clamped to `±Real128::MAX` instead.
//!
//! ```rust
//! use num_bigint::BigUint;
//! use numbridge_core::Real128;
//!
//! let one = BigUint::from(1u32);
//! assert_eq!(Real128::from_parts(false, &one, -16382), Real128::MIN_POSITIVE);
//! assert!(Real128::from_parts(true, &one, -16495).is_zero());
//! assert!(Real128::from_parts(true, &one, -16495).is_sign_negative());
//! ```

use crate::precision::{normalize, round_half_even, Precision};
use num_bigint::BigUint;
use num_traits::Zero;
use std::{cmp::Ordering, fmt::Display, num::FpCategory, ops::Neg};

/// Unbiased exponent of the smallest normal value.
pub const REAL128_MIN_EXP: i64 = -16382;
/// Unbiased exponent of the largest finite value.
pub const REAL128_MAX_EXP: i64 = 16383;

const EXP_BIAS: i64 = 16383;
const FRAC_BITS: u32 = 112;
const SIGN_MASK: u128 = 1 << 127;
const EXP_MASK: u128 = 0x7fff << FRAC_BITS;
const FRAC_MASK: u128 = (1 << FRAC_BITS) - 1;
const IMPLICIT_BIT: u128 = 1 << FRAC_BITS;

/// A quadruple precision floating point value.
#[repr(transparent)]
#[derive(Clone, Copy, Default)]
pub struct Real128 {
    bits: u128,
}

impl Real128 {
    pub const ZERO: Real128 = Real128 { bits: 0 };
    pub const NEG_ZERO: Real128 = Real128 { bits: SIGN_MASK };
    pub const ONE: Real128 = Real128 {
        bits: (EXP_BIAS as u128) << FRAC_BITS,
    };
    pub const INFINITY: Real128 = Real128 { bits: EXP_MASK };
    pub const NEG_INFINITY: Real128 = Real128 {
        bits: SIGN_MASK | EXP_MASK,
    };
    /// The quiet NaN.
    pub const NAN: Real128 = Real128 {
        bits: EXP_MASK | (1 << (FRAC_BITS - 1)),
    };
    /// The largest finite value, `(2 - 2^-112) * 2^16383`.
    pub const MAX: Real128 = Real128 {
        bits: (0x7ffe << FRAC_BITS) | FRAC_MASK,
    };
    /// The smallest positive normal value, `2^-16382`.
    pub const MIN_POSITIVE: Real128 = Real128 { bits: IMPLICIT_BIT };

    #[inline(always)]
    pub const fn from_bits(bits: u128) -> Self {
        Self { bits }
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u128 {
        self.bits
    }

    /// Builds `±significand * 2^exponent` under the rounding, underflow and
    /// overflow rules of this kind.
    pub fn from_parts(negative: bool, significand: &BigUint, exponent: i64) -> Self {
        let sign = if negative { SIGN_MASK } else { 0 };
        if significand.is_zero() {
            return Self::from_bits(sign);
        }

        let lead = exponent as i128 + significand.bits() as i128 - 1;
        if lead > REAL128_MAX_EXP as i128 {
            return Self::from_bits(sign | EXP_MASK);
        }
        // Rounding raises the leading bit by at most one.
        if lead < REAL128_MIN_EXP as i128 - 1 {
            return Self::from_bits(sign);
        }

        let (rounded, exp) = round_half_even(significand, exponent, Precision::REAL128);
        let lead = exp + rounded.bits() as i64 - 1;
        if lead < REAL128_MIN_EXP {
            return Self::from_bits(sign);
        }
        if lead > REAL128_MAX_EXP {
            return Self::from_bits(sign | Self::MAX.bits);
        }

        let sig = small_to_u128(&rounded);
        let sig = sig << (FRAC_BITS + 1 - rounded.bits() as u32);
        let biased = (lead + EXP_BIAS) as u128;
        Self::from_bits(sign | (biased << FRAC_BITS) | (sig & FRAC_MASK))
    }

    /// Decomposes a finite value into `(negative, significand, exponent)` with
    /// an odd (or zero) significand. Returns `None` for infinities and NaN.
    pub fn to_parts(self) -> Option<(bool, BigUint, i64)> {
        let negative = self.is_sign_negative();
        let biased = ((self.bits & EXP_MASK) >> FRAC_BITS) as i64;
        let frac = self.bits & FRAC_MASK;
        match biased {
            0x7fff => None,
            0 if frac == 0 => Some((negative, BigUint::zero(), 0)),
            0 => {
                let (sig, exp) = normalize(
                    BigUint::from(frac),
                    REAL128_MIN_EXP - FRAC_BITS as i64,
                );
                Some((negative, sig, exp))
            }
            _ => {
                let (sig, exp) = normalize(
                    BigUint::from(frac | IMPLICIT_BIT),
                    biased - EXP_BIAS - FRAC_BITS as i64,
                );
                Some((negative, sig, exp))
            }
        }
    }

    pub fn classify(self) -> FpCategory {
        let exp = self.bits & EXP_MASK;
        let frac = self.bits & FRAC_MASK;
        match (exp, frac) {
            (0, 0) => FpCategory::Zero,
            (0, _) => FpCategory::Subnormal,
            (EXP_MASK, 0) => FpCategory::Infinite,
            (EXP_MASK, _) => FpCategory::Nan,
            _ => FpCategory::Normal,
        }
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.classify() == FpCategory::Nan
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.classify() == FpCategory::Infinite
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.bits & EXP_MASK != EXP_MASK
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.classify() == FpCategory::Zero
    }

    /// Returns `true` if the sign bit is set (including `-0` and negative NaN).
    #[inline]
    pub fn is_sign_negative(self) -> bool {
        self.bits & SIGN_MASK != 0
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::from_bits(self.bits & !SIGN_MASK)
    }

    // Maps non-NaN values onto a totally ordered integer line; both zeros map
    // to 0.
    #[inline]
    fn ordered_key(self) -> i128 {
        let magnitude = (self.bits & !SIGN_MASK) as i128;
        if self.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

// The rounded significand has at most 113 bits.
fn small_to_u128(value: &BigUint) -> u128 {
    value
        .iter_u64_digits()
        .take(2)
        .enumerate()
        .fold(0u128, |acc, (i, d)| acc | ((d as u128) << (64 * i)))
}

impl Neg for Real128 {
    type Output = Real128;

    #[inline]
    fn neg(self) -> Real128 {
        Real128::from_bits(self.bits ^ SIGN_MASK)
    }
}

impl PartialEq for Real128 {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.ordered_key() == other.ordered_key()
    }
}

impl PartialOrd for Real128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_nan() || other.is_nan() {
            return None;
        }
        Some(self.ordered_key().cmp(&other.ordered_key()))
    }
}

impl From<f64> for Real128 {
    /// Exact: every binary64 value, subnormals included, is a normal binary128
    /// value.
    fn from(value: f64) -> Self {
        let negative = value.is_sign_negative();
        if value.is_nan() {
            return Self::NAN;
        }
        if value.is_infinite() {
            return if negative {
                Self::NEG_INFINITY
            } else {
                Self::INFINITY
            };
        }
        let bits = value.to_bits();
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let frac = bits & ((1u64 << 52) - 1);
        let (sig, exp) = if biased == 0 {
            (frac, -1074)
        } else {
            (frac | (1u64 << 52), biased - 1075)
        };
        Self::from_parts(negative, &BigUint::from(sig), exp)
    }
}

impl From<i64> for Real128 {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, &BigUint::from(value.unsigned_abs()), 0)
    }
}

impl std::fmt::Debug for Real128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Real128({})", self)
    }
}

/// Formats finite non-zero values as exact hexadecimal floating point
/// (`0x1.8p+1` is `3`).
impl Display for Real128 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_sign_negative() { "-" } else { "" };
        match self.classify() {
            FpCategory::Nan => write!(f, "nan"),
            FpCategory::Infinite => write!(f, "{}inf", sign),
            FpCategory::Zero => write!(f, "{}0", sign),
            FpCategory::Subnormal => {
                let frac = self.bits & FRAC_MASK;
                write!(f, "{}0x0.{:028x}p{:+}", sign, frac, REAL128_MIN_EXP)
            }
            FpCategory::Normal => {
                let biased = ((self.bits & EXP_MASK) >> FRAC_BITS) as i64;
                let frac = self.bits & FRAC_MASK;
                let exp = biased - EXP_BIAS;
                if frac == 0 {
                    write!(f, "{}0x1p{:+}", sign, exp)
                } else {
                    let digits = format!("{:028x}", frac);
                    write!(f, "{}0x1.{}p{:+}", sign, digits.trim_end_matches('0'), exp)
                }
            }
        }
    }
}
