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

//! Rational converter.
//!
//! A host fraction is accepted with whatever numerator and denominator it was
//! built from; the core value is canonical (reduced, positive denominator),
//! so `3/-4` and `-6/8` convert to equal values. A zero denominator is an
//! `ArithmeticError`.

use super::Converter;
use crate::value::HostValue;
use numbridge_core::{ConversionError, Integer, Precision, Rational};

#[inline]
pub(crate) fn rational_to_host(value: &Rational) -> HostValue {
    HostValue::Fraction {
        numerator: value.numerator().into_bigint(),
        denominator: value.denominator().into_bigint(),
    }
}

/// Converts host `Fraction` objects to `Rational`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RationalConverter;

impl Converter for RationalConverter {
    type Output = Rational;

    fn to_core(&self, value: &HostValue, _wp: Precision) -> Result<Rational, ConversionError> {
        match value {
            HostValue::Fraction {
                numerator,
                denominator,
            } => Ok(Rational::new(
                Integer::from(numerator.clone()),
                Integer::from(denominator.clone()),
            )?),
            other => Err(ConversionError::category("Fraction", other.type_name())),
        }
    }

    #[inline]
    fn to_host(&self, value: &Rational, _wp: Precision) -> Result<HostValue, ConversionError> {
        Ok(rational_to_host(value))
    }
}
