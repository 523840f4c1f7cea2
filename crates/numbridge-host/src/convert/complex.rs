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

//! Complex converters.
//!
//! A host `mpc` is converted component-wise under the precision rules of the
//! matching real kind. Both components are converted before a value is
//! built, so a failure in either one fails the whole value.

use super::{
    float::{mpf_to_real, mpf_to_real128, real128_to_mpf, real_to_mpf},
    Converter,
};
use crate::{
    negotiate::target_precision,
    value::{HostValue, Mpc},
};
use numbridge_core::{Complex, Complex128, ConversionError, Precision};

#[inline]
fn expect_mpc(value: &HostValue) -> Result<&Mpc, ConversionError> {
    match value {
        HostValue::Mpc(m) => Ok(m),
        other => Err(ConversionError::category("mpc", other.type_name())),
    }
}

/// Converts host `mpc` objects to `Complex128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complex128Converter;

impl Converter for Complex128Converter {
    type Output = Complex128;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Complex128, ConversionError> {
        let mpc = expect_mpc(value)?;
        let re = mpf_to_real128(&mpc.re, wp)?;
        let im = mpf_to_real128(&mpc.im, wp)?;
        Ok(Complex128::new(re, im))
    }

    fn to_host(&self, value: &Complex128, wp: Precision) -> Result<HostValue, ConversionError> {
        let re = real128_to_mpf(value.re(), wp)?;
        let im = real128_to_mpf(value.im(), wp)?;
        Ok(HostValue::Mpc(Mpc::new(re, im)))
    }
}

/// Converts host `mpc` objects to `Complex`, with the same target precision
/// rules as `RealConverter`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexConverter {
    target: Option<Precision>,
}

impl ComplexConverter {
    #[inline]
    pub const fn new(target: Option<Precision>) -> Self {
        Self { target }
    }

    #[inline]
    pub const fn with_target(prec: Precision) -> Self {
        Self { target: Some(prec) }
    }

    #[inline]
    pub const fn target(&self) -> Option<Precision> {
        self.target
    }
}

impl Converter for ComplexConverter {
    type Output = Complex;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Complex, ConversionError> {
        let mpc = expect_mpc(value)?;
        let prec = target_precision(self.target, wp)?;
        Ok(Complex::new(mpf_to_real(&mpc.re, prec), mpf_to_real(&mpc.im, prec), prec))
    }

    fn to_host(&self, value: &Complex, wp: Precision) -> Result<HostValue, ConversionError> {
        let re = real_to_mpf(value.re(), wp)?;
        let im = real_to_mpf(value.im(), wp)?;
        Ok(HostValue::Mpc(Mpc::new(re, im)))
    }
}
