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

//! # Host Context
//!
//! `HostContext` owns the host's ambient working precision. It is the only
//! place in the workspace where an ambient precision exists: every converter
//! takes the precision as an argument, and the context merely forwards
//! `self.prec()` to them.
//!
//! `workprec` is the scoped override. It sets a precision for the duration
//! of a closure and restores the previous one when the closure returns,
//! whatever it returns.

use crate::{
    convert::{self, Converter},
    dispatch::Dispatcher,
    value::{HostValue, Mpf},
};
use num_bigint::BigInt;
use numbridge_core::{
    Complex, Complex128, ConversionError, NumericValue, Precision, Real, Real128,
};

/// The host's working precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    prec: Precision,
}

impl Default for HostContext {
    fn default() -> Self {
        Self {
            prec: Precision::DOUBLE,
        }
    }
}

impl HostContext {
    /// A context with the host's default precision of 53 bits.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_prec(prec: Precision) -> Self {
        Self { prec }
    }

    #[inline]
    pub fn prec(&self) -> Precision {
        self.prec
    }

    #[inline]
    pub fn set_prec(&mut self, prec: Precision) {
        self.prec = prec;
    }

    /// Runs `f` with the working precision set to `prec`, then restores the
    /// previous precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numbridge_core::Precision;
    /// use numbridge_host::HostContext;
    ///
    /// let mut ctx = HostContext::new();
    /// let inner = ctx.workprec(Precision::REAL128, |ctx| ctx.prec());
    /// assert_eq!(inner, Precision::REAL128);
    /// assert_eq!(ctx.prec(), Precision::DOUBLE);
    /// ```
    pub fn workprec<F, R>(&mut self, prec: Precision, f: F) -> R
    where
        F: FnOnce(&mut Self) -> R,
    {
        let previous = std::mem::replace(&mut self.prec, prec);
        let result = f(self);
        self.prec = previous;
        result
    }

    /// An `mpf` holding `value` rounded to the working precision.
    #[inline]
    pub fn mpf_from_integer(&self, value: &BigInt) -> Mpf {
        Mpf::from_integer(value).round(self.prec)
    }

    /// An `mpf` holding `value` rounded to the working precision.
    #[inline]
    pub fn mpf_from_f64(&self, value: f64) -> Mpf {
        Mpf::from_f64(value).round(self.prec)
    }

    /// An `mpf` holding `numerator / denominator` rounded to the working
    /// precision, or `None` for a zero denominator.
    #[inline]
    pub fn mpf_from_ratio(&self, numerator: &BigInt, denominator: &BigInt) -> Option<Mpf> {
        Mpf::from_ratio(numerator, denominator, self.prec)
    }

    #[inline]
    pub fn to_core_fixed_float(&self, value: &HostValue) -> Result<Real128, ConversionError> {
        convert::to_core_fixed_float(value, self.prec)
    }

    #[inline]
    pub fn to_core_arbitrary_float(
        &self,
        value: &HostValue,
        target: Option<Precision>,
    ) -> Result<Real, ConversionError> {
        convert::to_core_arbitrary_float(value, self.prec, target)
    }

    #[inline]
    pub fn to_core_fixed_complex(&self, value: &HostValue) -> Result<Complex128, ConversionError> {
        convert::to_core_fixed_complex(value, self.prec)
    }

    #[inline]
    pub fn to_core_arbitrary_complex(
        &self,
        value: &HostValue,
        target: Option<Precision>,
    ) -> Result<Complex, ConversionError> {
        convert::to_core_arbitrary_complex(value, self.prec, target)
    }

    #[inline]
    pub fn to_host_fixed_float(&self, value: Real128) -> Result<HostValue, ConversionError> {
        convert::to_host_fixed_float(value, self.prec)
    }

    #[inline]
    pub fn to_host_arbitrary_float(&self, value: &Real) -> Result<HostValue, ConversionError> {
        convert::to_host_arbitrary_float(value, self.prec)
    }

    #[inline]
    pub fn to_host_fixed_complex(&self, value: Complex128) -> Result<HostValue, ConversionError> {
        convert::to_host_fixed_complex(value, self.prec)
    }

    #[inline]
    pub fn to_host_arbitrary_complex(&self, value: &Complex) -> Result<HostValue, ConversionError> {
        convert::to_host_arbitrary_complex(value, self.prec)
    }

    /// Converts `value` with any converter under the working precision.
    #[inline]
    pub fn to_core<C: Converter>(
        &self,
        converter: C,
        value: &HostValue,
    ) -> Result<C::Output, ConversionError> {
        converter.to_core(value, self.prec)
    }

    /// Converts `value` back to the host with any converter under the working
    /// precision.
    #[inline]
    pub fn to_host<C: Converter>(
        &self,
        converter: C,
        value: &C::Output,
    ) -> Result<HostValue, ConversionError> {
        converter.to_host(value, self.prec)
    }

    #[inline]
    pub fn dispatch_overload(
        &self,
        dispatcher: &Dispatcher,
        value: &HostValue,
    ) -> Result<NumericValue, ConversionError> {
        dispatcher.dispatch_overload(value, self.prec)
    }
}
