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

//! # Precision
//!
//! A validated bit count (`Precision`) and the round-half-even primitive that
//! every floating kind uses to drop low-order significand bits.
//!
//! Precision values are always within `[PREC_MIN, PREC_MAX]`, so a function
//! taking a `Precision` never has to re-validate it, and an optional explicit
//! target precision is spelled `Option<Precision>`.
//!
//! ```rust
//! use numbridge_core::precision::Precision;
//!
//! assert!(Precision::new(0).is_none());
//! let p = Precision::new(113).unwrap();
//! assert_eq!(p, Precision::REAL128);
//! ```

use num_bigint::BigUint;
use num_integer::Integer as _;
use num_traits::{One, Zero};
use std::{cmp::Ordering, fmt::Display};

/// The smallest valid precision, in bits.
pub const PREC_MIN: u64 = 1;

/// The largest valid precision, in bits.
///
/// Kept well below the largest representable exponent so that exponent
/// arithmetic on significands of this width cannot overflow.
pub const PREC_MAX: u64 = (i64::MAX as u64 - 256) / 128;

/// The number of significand bits of the quadruple precision kind.
pub const REAL128_SIG_DIGITS: u64 = 113;

/// A number of significand bits, always within `[PREC_MIN, PREC_MAX]`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precision(u64);

impl Precision {
    /// The precision of `Real128` and `Complex128`.
    pub const REAL128: Precision = Precision(REAL128_SIG_DIGITS);

    /// The precision of the host's machine float (IEEE binary64).
    pub const DOUBLE: Precision = Precision(53);

    /// Creates a precision, returning `None` if `bits` is out of range.
    #[inline]
    pub const fn new(bits: u64) -> Option<Self> {
        if bits >= PREC_MIN && bits <= PREC_MAX {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Returns the number of bits.
    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Precision> for u64 {
    #[inline]
    fn from(p: Precision) -> Self {
        p.0
    }
}

impl TryFrom<u64> for Precision {
    type Error = u64;

    /// Fails with the rejected bit count.
    #[inline]
    fn try_from(bits: u64) -> Result<Self, Self::Error> {
        Self::new(bits).ok_or(bits)
    }
}

/// Strips trailing zero bits from `significand`, moving them into the
/// exponent. Zero is returned as `(0, 0)`. The exponent saturates at
/// `i64::MAX`.
pub fn normalize(mut significand: BigUint, mut exponent: i64) -> (BigUint, i64) {
    match significand.trailing_zeros() {
        None => (BigUint::zero(), 0),
        Some(0) => (significand, exponent),
        Some(tz) => {
            significand >>= tz;
            exponent = exponent.saturating_add(tz as i64);
            (significand, exponent)
        }
    }
}

/// Rounds `significand * 2^exponent` to at most `bits` significant bits,
/// breaking ties to even, and returns the normalized result.
///
/// The result never has more than `bits` significant bits: a carry out of the
/// top bit produces a power of two, which normalizes to a single bit.
/// Like `normalize`, the returned exponent saturates at `i64::MAX`.
pub fn round_half_even(significand: &BigUint, exponent: i64, bits: Precision) -> (BigUint, i64) {
    let len = significand.bits();
    if len <= bits.get() {
        return normalize(significand.clone(), exponent);
    }

    let shift = len - bits.get();
    let mut kept = significand >> shift;
    let dropped = significand - (&kept << shift);
    let half = BigUint::one() << (shift - 1);

    let round_up = match dropped.cmp(&half) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => kept.is_odd(),
    };
    if round_up {
        kept += 1u32;
    }

    normalize(kept, exponent.saturating_add(shift as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prec(bits: u64) -> Precision {
        Precision::new(bits).unwrap()
    }

    #[test]
    fn test_precision_bounds() {
        assert!(Precision::new(0).is_none());
        assert!(Precision::new(PREC_MIN).is_some());
        assert!(Precision::new(PREC_MAX).is_some());
        assert!(Precision::new(PREC_MAX + 1).is_none());
        assert_eq!(Precision::try_from(0), Err(0));
        assert_eq!(u64::from(prec(53)), 53);
    }

    #[test]
    fn test_precision_ordering() {
        assert!(prec(30) < prec(53));
        assert!(Precision::REAL128 > Precision::DOUBLE);
        assert_eq!(Precision::REAL128.get(), REAL128_SIG_DIGITS);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(BigUint::from(12u32), 0),
            (BigUint::from(3u32), 2)
        );
        assert_eq!(normalize(BigUint::zero(), 17), (BigUint::zero(), 0));
        assert_eq!(
            normalize(BigUint::from(5u32), -3),
            (BigUint::from(5u32), -3)
        );
    }

    #[test]
    fn test_round_exact_when_short() {
        let (m, e) = round_half_even(&BigUint::from(0b1011u32), 0, prec(4));
        assert_eq!((m, e), (BigUint::from(0b1011u32), 0));
    }

    #[test]
    fn test_round_down() {
        // 0b10110 -> 3 bits: 0b101|10 -> dropped 0b10 == half, kept odd -> up.
        let (m, e) = round_half_even(&BigUint::from(0b10110u32), 0, prec(3));
        assert_eq!((m, e), (BigUint::from(0b11u32), 3));

        // 0b10001 -> 3 bits: 0b100|01 -> below half -> down.
        let (m, e) = round_half_even(&BigUint::from(0b10001u32), 0, prec(3));
        assert_eq!((m, e), (BigUint::one(), 4));
    }

    #[test]
    fn test_round_tie_to_even() {
        // 0b1001 -> 3 bits: 0b100|1, tie, kept even -> stays.
        let (m, e) = round_half_even(&BigUint::from(0b1001u32), 0, prec(3));
        assert_eq!((m, e), (BigUint::one(), 3));
        // 0b1011 -> 3 bits: 0b101|1, tie, kept odd -> up to 0b110.
        let (m, e) = round_half_even(&BigUint::from(0b1011u32), 0, prec(3));
        assert_eq!((m, e), (BigUint::from(0b11u32), 2));
    }

    #[test]
    fn test_round_carry_out_of_top_bit() {
        // 0b1111 -> 3 bits: 0b111|1 tie, kept odd -> 0b1000 -> 1 * 2^4.
        let (m, e) = round_half_even(&BigUint::from(0b1111u32), -2, prec(3));
        assert_eq!((m, e), (BigUint::one(), 2));
    }

    #[test]
    fn test_exponent_saturates() {
        assert_eq!(
            normalize(BigUint::from(8u32), i64::MAX - 1),
            (BigUint::one(), i64::MAX)
        );
        let (m, e) = round_half_even(&BigUint::from(0b1111u32), i64::MAX, prec(2));
        assert_eq!((m, e), (BigUint::one(), i64::MAX));
    }

    #[test]
    fn test_round_never_exceeds_precision() {
        let sig = (BigUint::one() << 500u32) - 1u32;
        for bits in [1u64, 2, 53, 113, 499] {
            let (m, _) = round_half_even(&sig, 0, prec(bits));
            assert!(m.bits() <= bits);
        }
    }
}
