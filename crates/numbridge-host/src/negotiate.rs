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

//! # Precision Negotiation
//!
//! The three precision gates every floating conversion passes through.
//!
//! - Fixed-width kinds accept a working precision only if it equals their
//!   intrinsic significand width. Lower and higher precisions are both
//!   rejected as a `TypeMismatch`.
//! - Arbitrary-width kinds take the working precision by default. An
//!   explicit target may lower it but never raise it.
//! - Going back to the host, an arbitrary-width value may not be handed to a
//!   host whose working precision would round it.

use numbridge_core::{ConversionError, NumericKind, Precision, PrecisionError, TypeMismatchError};

/// Requires `working` to equal the intrinsic precision of `kind`. Kinds
/// without an intrinsic precision always pass.
#[inline]
pub fn require_exact(kind: NumericKind, working: Precision) -> Result<(), ConversionError> {
    match kind.intrinsic_precision() {
        Some(required) if required != working => Err(TypeMismatchError::PrecisionMismatch {
            kind,
            required,
            working,
        }
        .into()),
        _ => Ok(()),
    }
}

/// Resolves the output precision of an arbitrary-width conversion.
#[inline]
pub fn target_precision(
    target: Option<Precision>,
    working: Precision,
) -> Result<Precision, ConversionError> {
    match target {
        None => Ok(working),
        Some(requested) if requested <= working => Ok(requested),
        Some(requested) => Err(PrecisionError {
            requested,
            available: working,
        }
        .into()),
    }
}

/// Requires the host's working precision to hold `value_prec` bits.
#[inline]
pub fn require_capacity(value_prec: Precision, working: Precision) -> Result<(), ConversionError> {
    if value_prec > working {
        return Err(PrecisionError {
            requested: value_prec,
            available: working,
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prec(bits: u64) -> Precision {
        Precision::new(bits).unwrap()
    }

    #[test]
    fn test_require_exact_gate() {
        assert!(require_exact(NumericKind::Real128, prec(53)).unwrap_err().is_type_mismatch());
        assert!(require_exact(NumericKind::Real128, prec(113)).is_ok());
        assert!(require_exact(NumericKind::Real128, prec(2000)).unwrap_err().is_type_mismatch());
        assert!(require_exact(NumericKind::Complex128, prec(112)).is_err());
        assert!(require_exact(NumericKind::Real, prec(7)).is_ok());
    }

    #[test]
    fn test_target_precision() {
        assert_eq!(target_precision(None, prec(200)), Ok(prec(200)));
        assert_eq!(target_precision(Some(prec(30)), prec(200)), Ok(prec(30)));
        assert_eq!(target_precision(Some(prec(200)), prec(200)), Ok(prec(200)));
        let err = target_precision(Some(prec(300)), prec(200)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::PrecisionInsufficient(PrecisionError {
                requested: prec(300),
                available: prec(200),
            })
        );
    }

    #[test]
    fn test_require_capacity() {
        assert!(require_capacity(prec(53), prec(53)).is_ok());
        assert!(require_capacity(prec(53), prec(113)).is_ok());
        assert!(require_capacity(prec(113), prec(53)).unwrap_err().is_precision_insufficient());
    }
}
