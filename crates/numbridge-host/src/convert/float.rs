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

//! Floating point converters.
//!
//! Both converters accept only the host's multiprecision float (`mpf`); the
//! host's machine float is a different category. Signed infinities and NaN
//! convert as they are. Finite values follow the precision rules of their
//! kind:
//!
//! - `Real128Converter` needs a working precision of exactly 113 bits, in
//!   both directions. Values below `2^-16382` become a signed zero and an
//!   oversized significand rounds to a finite value whenever the magnitude
//!   itself is in range.
//! - `RealConverter` produces a `Real` with the working precision, or with
//!   an explicit lower target. Converting back requires a host precision at
//!   least as large as the value's.

use super::Converter;
use crate::{
    negotiate::{require_capacity, require_exact, target_precision},
    value::{HostValue, Mpf},
};
use numbridge_core::{ConversionError, NumericKind, Precision, Real, Real128};

#[inline]
pub(crate) fn expect_mpf(value: &HostValue) -> Result<&Mpf, ConversionError> {
    match value {
        HostValue::Mpf(m) => Ok(m),
        other => Err(ConversionError::category("mpf", other.type_name())),
    }
}

pub(crate) fn mpf_to_real128(value: &Mpf, wp: Precision) -> Result<Real128, ConversionError> {
    require_exact(NumericKind::Real128, wp)?;
    Ok(match value.to_parts() {
        Some((negative, significand, exponent)) => {
            Real128::from_parts(negative, &significand, exponent)
        }
        None if value.is_nan() => Real128::NAN,
        None if value.is_sign_negative() => Real128::NEG_INFINITY,
        None => Real128::INFINITY,
    })
}

pub(crate) fn real128_to_mpf(value: Real128, wp: Precision) -> Result<Mpf, ConversionError> {
    match value.to_parts() {
        Some((negative, significand, exponent)) => {
            require_exact(NumericKind::Real128, wp)?;
            Ok(Mpf::from_parts(negative, significand, exponent))
        }
        None if value.is_nan() => Ok(Mpf::nan()),
        None if value.is_sign_negative() => Ok(Mpf::neg_inf()),
        None => Ok(Mpf::inf()),
    }
}

pub(crate) fn mpf_to_real(value: &Mpf, prec: Precision) -> Real {
    match value.to_parts() {
        Some((negative, significand, exponent)) => {
            Real::from_parts(negative, &significand, exponent, prec)
        }
        None if value.is_nan() => Real::nan(prec),
        None => Real::infinity(value.is_sign_negative(), prec),
    }
}

pub(crate) fn real_to_mpf(value: &Real, wp: Precision) -> Result<Mpf, ConversionError> {
    match value.to_parts() {
        Some((negative, significand, exponent)) => {
            require_capacity(value.prec(), wp)?;
            Ok(Mpf::from_parts(negative, significand, exponent))
        }
        None if value.is_nan() => Ok(Mpf::nan()),
        None if value.is_sign_negative() => Ok(Mpf::neg_inf()),
        None => Ok(Mpf::inf()),
    }
}

/// Converts host `mpf` objects to the quadruple precision `Real128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Real128Converter;

impl Converter for Real128Converter {
    type Output = Real128;

    #[inline]
    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Real128, ConversionError> {
        mpf_to_real128(expect_mpf(value)?, wp)
    }

    #[inline]
    fn to_host(&self, value: &Real128, wp: Precision) -> Result<HostValue, ConversionError> {
        Ok(HostValue::Mpf(real128_to_mpf(*value, wp)?))
    }
}

/// Converts host `mpf` objects to the arbitrary-precision `Real`.
///
/// Without a target the output precision equals the working precision. With
/// a target `t`, the output has precision `t`, provided `t` does not exceed
/// the working precision; otherwise the conversion fails with
/// `PrecisionInsufficient`, for special values too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RealConverter {
    target: Option<Precision>,
}

impl RealConverter {
    #[inline]
    pub const fn new(target: Option<Precision>) -> Self {
        Self { target }
    }

    /// A converter that produces values with exactly `prec` bits.
    #[inline]
    pub const fn with_target(prec: Precision) -> Self {
        Self { target: Some(prec) }
    }

    #[inline]
    pub const fn target(&self) -> Option<Precision> {
        self.target
    }
}

impl Converter for RealConverter {
    type Output = Real;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Real, ConversionError> {
        let mpf = expect_mpf(value)?;
        let prec = target_precision(self.target, wp)?;
        Ok(mpf_to_real(mpf, prec))
    }

    #[inline]
    fn to_host(&self, value: &Real, wp: Precision) -> Result<HostValue, ConversionError> {
        Ok(HostValue::Mpf(real_to_mpf(value, wp)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::{BigInt, BigUint};
    use numbridge_core::{PrecisionError, TypeMismatchError};

    fn prec(bits: u64) -> Precision {
        Precision::new(bits).unwrap()
    }

    fn mpf(value: Mpf) -> HostValue {
        HostValue::Mpf(value)
    }

    #[test]
    fn test_real128_precision_gate() {
        let v = mpf(Mpf::from_f64(1.5));
        for bits in [53, 112, 114, 2000] {
            let err = Real128Converter.to_core(&v, prec(bits)).unwrap_err();
            assert_eq!(
                err,
                ConversionError::TypeMismatch(TypeMismatchError::PrecisionMismatch {
                    kind: NumericKind::Real128,
                    required: Precision::REAL128,
                    working: prec(bits),
                })
            );
        }
        assert_eq!(Real128Converter.to_core(&v, prec(113)).unwrap(), Real128::from(1.5));
    }

    #[test]
    fn test_real128_gate_applies_to_specials_on_the_way_in() {
        assert!(Real128Converter.to_core(&mpf(Mpf::nan()), prec(53)).is_err());
        let inf = Real128Converter.to_core(&mpf(Mpf::neg_inf()), prec(113)).unwrap();
        assert_eq!(inf, Real128::NEG_INFINITY);
        assert_eq!(-inf, Real128::INFINITY);
        assert!(Real128Converter.to_core(&mpf(Mpf::nan()), prec(113)).unwrap().is_nan());
    }

    #[test]
    fn test_real128_rejects_machine_float() {
        let err = Real128Converter.to_core(&HostValue::Float(1.5), prec(113)).unwrap_err();
        assert_eq!(err, ConversionError::category("mpf", "float"));
    }

    #[test]
    fn test_real128_underflow_boundary() {
        let wp = Precision::REAL128;
        let min = Real128Converter.to_core(&mpf(Mpf::pow2(-16382)), wp).unwrap();
        assert_eq!(min, Real128::MIN_POSITIVE);
        let neg_min = Real128Converter.to_core(&mpf(Mpf::pow2(-16382).negated()), wp).unwrap();
        assert_eq!(neg_min, -Real128::MIN_POSITIVE);

        let tiny = Real128Converter.to_core(&mpf(Mpf::pow2(-16495)), wp).unwrap();
        assert!(tiny.is_zero());
        assert!(!tiny.is_sign_negative());
        let neg_tiny = Real128Converter.to_core(&mpf(Mpf::pow2(-16495).negated()), wp).unwrap();
        assert!(neg_tiny.is_zero());
        assert!(neg_tiny.is_sign_negative());
    }

    #[test]
    fn test_real128_extreme_exponents() {
        let wp = Precision::REAL128;
        let huge = mpf(Mpf::from_parts(false, BigUint::from(3u32), i64::MAX));
        assert_eq!(Real128Converter.to_core(&huge, wp).unwrap(), Real128::INFINITY);
        let neg_huge = mpf(Mpf::from_parts(true, BigUint::from(3u32), i64::MAX));
        assert_eq!(Real128Converter.to_core(&neg_huge, wp).unwrap(), Real128::NEG_INFINITY);
        let tiny = Real128Converter.to_core(&mpf(Mpf::pow2(i64::MIN)), wp).unwrap();
        assert!(tiny.is_zero());
        assert!(!tiny.is_sign_negative());
    }

    #[test]
    fn test_real128_reverse() {
        let wp = Precision::REAL128;
        let host = Real128Converter.to_host(&Real128::from(-0.375), wp).unwrap();
        assert_eq!(host, mpf(Mpf::from_f64(-0.375)));
        assert!(Real128Converter.to_host(&Real128::ONE, prec(53)).unwrap_err().is_type_mismatch());
        // Specials need no matching precision.
        assert_eq!(
            Real128Converter.to_host(&Real128::NEG_INFINITY, prec(53)).unwrap(),
            mpf(Mpf::neg_inf())
        );
        assert!(Real128Converter.to_host(&Real128::NAN, prec(53)).is_ok());
        assert_eq!(
            Real128Converter.to_host(&Real128::INFINITY, prec(2000)).unwrap(),
            mpf(Mpf::inf())
        );
    }

    #[test]
    fn test_real_default_takes_working_precision() {
        let v = mpf(Mpf::from_ratio(&BigInt::from(1), &BigInt::from(3), prec(200)).unwrap());
        let r = RealConverter::default().to_core(&v, prec(200)).unwrap();
        assert_eq!(r.prec(), prec(200));
        assert_eq!(RealConverter::default().to_host(&r, prec(200)).unwrap(), v);
    }

    #[test]
    fn test_real_explicit_target() {
        let v = mpf(Mpf::from_ratio(&BigInt::from(1), &BigInt::from(3), prec(100)).unwrap());
        let r = RealConverter::with_target(prec(30)).to_core(&v, prec(100)).unwrap();
        assert_eq!(r.prec(), prec(30));
        let (_, sig, _) = r.to_parts().unwrap();
        assert!(sig.bits() <= 30);

        let err = RealConverter::with_target(prec(300)).to_core(&v, prec(100)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::PrecisionInsufficient(PrecisionError {
                requested: prec(300),
                available: prec(100),
            })
        );
        // Specials still respect the gate.
        let inf = mpf(Mpf::inf());
        assert!(RealConverter::with_target(prec(300)).to_core(&inf, prec(100)).is_err());
        assert!(RealConverter::with_target(prec(30))
            .to_core(&inf, prec(100))
            .unwrap()
            .is_infinite());
    }

    #[test]
    fn test_real_no_underflow_folding() {
        let v = mpf(Mpf::pow2(-16495));
        let r = RealConverter::default().to_core(&v, prec(53)).unwrap();
        assert_eq!(r.to_parts(), Some((false, BigUint::from(1u32), -16495)));
    }

    #[test]
    fn test_real_reverse_requires_capacity() {
        let r = Real::from_parts(false, &BigUint::from(3u32), -1, prec(100));
        let err = RealConverter::default().to_host(&r, prec(53)).unwrap_err();
        assert!(err.is_precision_insufficient());
        assert_eq!(
            RealConverter::default().to_host(&r, prec(100)).unwrap(),
            mpf(Mpf::from_f64(1.5))
        );
        assert!(RealConverter::default().to_host(&Real::nan(prec(100)), prec(53)).is_ok());
    }
}
