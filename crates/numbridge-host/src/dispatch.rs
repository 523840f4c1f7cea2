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

//! # Overload Dispatch
//!
//! A `Dispatcher` holds an ordered list of candidate kinds and converts a
//! host value with the first candidate that accepts it. The order is fixed
//! when the dispatcher is built and never depends on the input. Kinds whose
//! capability is missing are dropped at build time, so the same input can
//! route to a different kind depending on which kinds are available.
//!
//! ## Fall-through rules
//!
//! - A `TypeMismatch` from a candidate moves on to the next candidate. This
//!   covers both a wrong dynamic category and a fixed-width precision gate.
//! - Any other error (`PrecisionInsufficient`, `ArithmeticError`) is
//!   returned immediately.
//! - If every candidate mismatches, the result is a `TypeMismatch` naming
//!   the candidates that were tried.
//!
//! The default priority is `Integer, Rational, Real128, Real, Complex128,
//! Complex`: within each family the fixed-width kind comes first.

use crate::{
    convert::{
        Complex128Converter, ComplexConverter, Converter, IntegerConverter, MappingConverter,
        RationalConverter, Real128Converter, RealConverter, SequenceConverter, StrConverter,
    },
    value::HostValue,
};
use log::debug;
use numbridge_core::{
    Capabilities, ConversionError, NumericKind, NumericValue, Precision, TypeMismatchError,
};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Converts host values to one fixed kind, wrapped in a `NumericValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindConverter {
    kind: NumericKind,
    target: Option<Precision>,
}

impl KindConverter {
    /// `target` applies to the arbitrary-width kinds only.
    #[inline]
    pub const fn new(kind: NumericKind, target: Option<Precision>) -> Self {
        Self { kind, target }
    }

    #[inline]
    pub const fn kind(&self) -> NumericKind {
        self.kind
    }
}

impl Converter for KindConverter {
    type Output = NumericValue;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<NumericValue, ConversionError> {
        Ok(match self.kind {
            NumericKind::Integer => IntegerConverter.to_core(value, wp)?.into(),
            NumericKind::Rational => RationalConverter.to_core(value, wp)?.into(),
            NumericKind::Real128 => Real128Converter.to_core(value, wp)?.into(),
            NumericKind::Real => RealConverter::new(self.target).to_core(value, wp)?.into(),
            NumericKind::Complex128 => Complex128Converter.to_core(value, wp)?.into(),
            NumericKind::Complex => ComplexConverter::new(self.target).to_core(value, wp)?.into(),
        })
    }

    fn to_host(&self, value: &NumericValue, wp: Precision) -> Result<HostValue, ConversionError> {
        if value.kind() != self.kind {
            return Err(ConversionError::category(self.kind.name(), value.kind().name()));
        }
        numeric_value_to_host(value, wp)
    }
}

/// Converts any `NumericValue` back to the host with the converter of its
/// own kind.
pub fn numeric_value_to_host(
    value: &NumericValue,
    wp: Precision,
) -> Result<HostValue, ConversionError> {
    match value {
        NumericValue::Integer(v) => IntegerConverter.to_host(v, wp),
        NumericValue::Rational(v) => RationalConverter.to_host(v, wp),
        NumericValue::Real128(v) => Real128Converter.to_host(v, wp),
        NumericValue::Real(v) => RealConverter::default().to_host(v, wp),
        NumericValue::Complex128(v) => Complex128Converter.to_host(v, wp),
        NumericValue::Complex(v) => ComplexConverter::default().to_host(v, wp),
    }
}

/// An ordered set of candidate kinds.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    candidates: SmallVec<NumericKind, 6>,
    target: Option<Precision>,
}

impl Default for Dispatcher {
    /// The default priority over the capabilities detected at build time.
    fn default() -> Self {
        DispatcherBuilder::new(Capabilities::detect())
            .with_default_order()
            .build()
    }
}

impl Dispatcher {
    #[inline]
    pub fn builder(capabilities: Capabilities) -> DispatcherBuilder {
        DispatcherBuilder::new(capabilities)
    }

    /// The candidates, in the order they are tried.
    #[inline]
    pub fn candidates(&self) -> &[NumericKind] {
        &self.candidates
    }

    /// The explicit target precision passed to the arbitrary-width kinds.
    #[inline]
    pub fn target(&self) -> Option<Precision> {
        self.target
    }

    /// Runs `attempt` for every candidate in order and returns the first
    /// success, following the fall-through rules.
    fn first_accepting<T, F>(
        &self,
        value: &HostValue,
        mut attempt: F,
    ) -> Result<(NumericKind, T), ConversionError>
    where
        F: FnMut(KindConverter) -> Result<T, ConversionError>,
    {
        let mut tried = Vec::with_capacity(self.candidates.len());
        for &kind in &self.candidates {
            match attempt(KindConverter::new(kind, self.target)) {
                Ok(out) => {
                    debug!("dispatched value of type '{}' to {}", value.type_name(), kind);
                    return Ok((kind, out));
                }
                Err(e) if e.is_type_mismatch() => {
                    debug!("{} rejected value of type '{}': {}", kind, value.type_name(), e);
                    tried.push(kind);
                }
                Err(e) => {
                    debug!("{} failed on value of type '{}': {}", kind, value.type_name(), e);
                    return Err(e);
                }
            }
        }
        Err(TypeMismatchError::NoMatchingOverload {
            found: value.type_name(),
            tried,
        }
        .into())
    }

    /// Converts a scalar host value with the first accepting candidate.
    pub fn dispatch_overload(
        &self,
        value: &HostValue,
        wp: Precision,
    ) -> Result<NumericValue, ConversionError> {
        self.first_accepting(value, |conv| conv.to_core(value, wp))
            .map(|(_, out)| out)
    }

    /// Converts a host list with the first candidate that accepts every
    /// element. All elements share the chosen kind.
    pub fn dispatch_sequence(
        &self,
        value: &HostValue,
        wp: Precision,
    ) -> Result<(NumericKind, Vec<NumericValue>), ConversionError> {
        self.first_accepting(value, |conv| SequenceConverter::new(conv).to_core(value, wp))
    }

    /// Converts a host dict with string keys with the first candidate that
    /// accepts every value.
    pub fn dispatch_mapping(
        &self,
        value: &HostValue,
        wp: Precision,
    ) -> Result<(NumericKind, FxHashMap<String, NumericValue>), ConversionError> {
        self.first_accepting(value, |conv| {
            MappingConverter::new(StrConverter, conv).to_core(value, wp)
        })
    }
}

/// Builds a `Dispatcher` from a capability snapshot.
///
/// # Examples
///
/// ```rust
/// use numbridge_core::{Capabilities, NumericKind};
/// use numbridge_host::DispatcherBuilder;
///
/// let dispatcher = DispatcherBuilder::new(Capabilities::exact_only())
///     .candidate(NumericKind::Real128)
///     .candidate(NumericKind::Integer)
///     .build();
/// assert_eq!(dispatcher.candidates(), &[NumericKind::Integer]);
/// ```
#[derive(Debug, Clone)]
pub struct DispatcherBuilder {
    capabilities: Capabilities,
    candidates: SmallVec<NumericKind, 6>,
    target: Option<Precision>,
}

impl DispatcherBuilder {
    #[inline]
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            candidates: SmallVec::new(),
            target: None,
        }
    }

    /// Appends `kind` to the priority list. Unavailable kinds and kinds that
    /// are already listed are skipped.
    pub fn candidate(mut self, kind: NumericKind) -> Self {
        if !self.capabilities.supports(kind) {
            debug!("skipping overload candidate {}: not available in {}", kind, self.capabilities);
            return self;
        }
        if self.candidates.contains(&kind) {
            debug!("skipping overload candidate {}: already registered", kind);
            return self;
        }
        self.candidates.push(kind);
        self
    }

    /// Appends every kind in `kinds`, in order.
    pub fn candidates<I>(self, kinds: I) -> Self
    where
        I: IntoIterator<Item = NumericKind>,
    {
        kinds.into_iter().fold(self, |builder, kind| builder.candidate(kind))
    }

    /// Appends the default priority list.
    #[inline]
    pub fn with_default_order(self) -> Self {
        self.candidates(NumericKind::ALL)
    }

    /// Sets the explicit target precision for the arbitrary-width kinds.
    #[inline]
    pub fn with_target_precision(mut self, target: Precision) -> Self {
        self.target = Some(target);
        self
    }

    #[inline]
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            candidates: self.candidates,
            target: self.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Mpc, Mpf};
    use numbridge_core::{Integer, Real128};

    fn prec(bits: u64) -> Precision {
        Precision::new(bits).unwrap()
    }

    fn full() -> Dispatcher {
        DispatcherBuilder::new(Capabilities::all()).with_default_order().build()
    }

    #[test]
    fn test_default_order() {
        assert_eq!(full().candidates(), &NumericKind::ALL[..]);
        let exact = DispatcherBuilder::new(Capabilities::exact_only())
            .with_default_order()
            .build();
        assert_eq!(exact.candidates(), &[NumericKind::Integer, NumericKind::Rational]);
    }

    #[test]
    fn test_duplicates_are_skipped() {
        let d = DispatcherBuilder::new(Capabilities::all())
            .candidate(NumericKind::Real)
            .candidate(NumericKind::Real)
            .build();
        assert_eq!(d.candidates(), &[NumericKind::Real]);
    }

    #[test]
    fn test_fixed_width_first() {
        let v = HostValue::Mpf(Mpf::from_f64(0.5));
        let out = full().dispatch_overload(&v, Precision::REAL128).unwrap();
        assert_eq!(out, NumericValue::Real128(Real128::from(0.5)));
    }

    #[test]
    fn test_falls_through_to_arbitrary_width() {
        let v = HostValue::Mpf(Mpf::from_f64(0.5));
        let out = full().dispatch_overload(&v, prec(2000)).unwrap();
        assert_eq!(out.kind(), NumericKind::Real);
        assert_eq!(out.precision(), Some(prec(2000)));
    }

    #[test]
    fn test_fixed_only_mismatch() {
        let caps = Capabilities::exact_only().with_fixed_float128(true);
        let d = DispatcherBuilder::new(caps).with_default_order().build();
        let v = HostValue::Mpf(Mpf::from_f64(0.5));
        let err = d.dispatch_overload(&v, prec(2000)).unwrap_err();
        assert_eq!(
            err,
            ConversionError::TypeMismatch(TypeMismatchError::NoMatchingOverload {
                found: "mpf",
                tried: vec![
                    NumericKind::Integer,
                    NumericKind::Rational,
                    NumericKind::Real128,
                    NumericKind::Complex128,
                ],
            })
        );
    }

    #[test]
    fn test_non_mismatch_errors_stop_dispatch() {
        let d = DispatcherBuilder::new(Capabilities::all())
            .with_default_order()
            .with_target_precision(prec(300))
            .build();
        let v = HostValue::Mpf(Mpf::from_f64(0.5));
        let err = d.dispatch_overload(&v, prec(100)).unwrap_err();
        assert!(err.is_precision_insufficient());

        let zero_den = HostValue::fraction(1, 0);
        assert!(full().dispatch_overload(&zero_den, prec(53)).unwrap_err().is_arithmetic());
    }

    #[test]
    fn test_complex_routes() {
        let v = HostValue::Mpc(Mpc::new(Mpf::from_f64(1.0), Mpf::from_f64(-1.0)));
        assert_eq!(
            full().dispatch_overload(&v, Precision::REAL128).unwrap().kind(),
            NumericKind::Complex128
        );
        assert_eq!(
            full().dispatch_overload(&v, prec(64)).unwrap().kind(),
            NumericKind::Complex
        );
    }

    #[test]
    fn test_dispatch_sequence_picks_one_kind() {
        let ints = HostValue::List(vec![HostValue::int(1), HostValue::int(2)]);
        let (kind, values) = full().dispatch_sequence(&ints, prec(53)).unwrap();
        assert_eq!(kind, NumericKind::Integer);
        assert_eq!(
            values,
            vec![NumericValue::from(Integer::from(1)), NumericValue::from(Integer::from(2))]
        );

        let mixed = HostValue::List(vec![HostValue::int(1), HostValue::Mpf(Mpf::from_f64(2.0))]);
        assert!(full().dispatch_sequence(&mixed, prec(53)).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_dispatch_mapping() {
        let v = HostValue::Dict(vec![(HostValue::str("x"), HostValue::Mpf(Mpf::from_f64(1.5)))]);
        let (kind, map) = full().dispatch_mapping(&v, prec(60)).unwrap();
        assert_eq!(kind, NumericKind::Real);
        assert_eq!(map["x"].precision(), Some(prec(60)));
    }

    #[test]
    fn test_kind_converter_round_trip() {
        let conv = KindConverter::new(NumericKind::Rational, None);
        let host = HostValue::fraction(-6, 8);
        let core = conv.to_core(&host, prec(53)).unwrap();
        assert_eq!(conv.to_host(&core, prec(53)).unwrap(), HostValue::fraction(-3, 4));
        let wrong = NumericValue::from(Integer::from(1));
        assert!(conv.to_host(&wrong, prec(53)).unwrap_err().is_type_mismatch());
    }
}
