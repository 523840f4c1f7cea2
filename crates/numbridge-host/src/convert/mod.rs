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

//! # Converters
//!
//! One converter per numeric kind, each able to go both ways between a
//! `HostValue` and its core type. Converters hold at most immutable
//! configuration (an explicit target precision or the converters of their
//! elements), so they are `Send + Sync` and may be shared freely.
//!
//! ## Modules
//!
//! - `integer`: Arbitrary-precision and native integers.
//! - `rational`: Exact fractions, canonicalized on the way in.
//! - `float`: The fixed-width `Real128` and the arbitrary-width `Real`.
//! - `complex`: The complex counterparts of the floating kinds.
//! - `container`: Sequences, mappings and string keys.
//!
//! The working precision is always an explicit argument. Converters never
//! consult ambient state.

pub mod complex;
pub mod container;
pub mod float;
pub mod integer;
pub mod rational;

pub use complex::{Complex128Converter, ComplexConverter};
pub use container::{MappingConverter, SequenceConverter, StrConverter};
pub use float::{Real128Converter, RealConverter};
pub use integer::{IntegerConverter, NativeIntConverter};
pub use rational::RationalConverter;

use crate::value::HostValue;
use numbridge_core::{
    Complex, Complex128, ConversionError, Integer, Precision, Rational, Real, Real128,
};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A bidirectional conversion between host values and one core type.
pub trait Converter {
    /// The core type this converter produces.
    type Output;

    /// Converts a host value under the working precision `wp`.
    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Self::Output, ConversionError>;

    /// Converts a core value back to the host under the working precision
    /// `wp`.
    fn to_host(&self, value: &Self::Output, wp: Precision) -> Result<HostValue, ConversionError>;
}

impl<C> Converter for &C
where
    C: Converter + ?Sized,
{
    type Output = C::Output;

    #[inline]
    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Self::Output, ConversionError> {
        (**self).to_core(value, wp)
    }

    #[inline]
    fn to_host(&self, value: &Self::Output, wp: Precision) -> Result<HostValue, ConversionError> {
        (**self).to_host(value, wp)
    }
}

#[inline]
pub fn to_core_integer(value: &HostValue) -> Result<Integer, ConversionError> {
    IntegerConverter.to_core(value, Precision::DOUBLE)
}

#[inline]
pub fn to_core_rational(value: &HostValue) -> Result<Rational, ConversionError> {
    RationalConverter.to_core(value, Precision::DOUBLE)
}

#[inline]
pub fn to_core_fixed_float(value: &HostValue, wp: Precision) -> Result<Real128, ConversionError> {
    Real128Converter.to_core(value, wp)
}

#[inline]
pub fn to_core_arbitrary_float(
    value: &HostValue,
    wp: Precision,
    target: Option<Precision>,
) -> Result<Real, ConversionError> {
    RealConverter::new(target).to_core(value, wp)
}

#[inline]
pub fn to_core_fixed_complex(
    value: &HostValue,
    wp: Precision,
) -> Result<Complex128, ConversionError> {
    Complex128Converter.to_core(value, wp)
}

#[inline]
pub fn to_core_arbitrary_complex(
    value: &HostValue,
    wp: Precision,
    target: Option<Precision>,
) -> Result<Complex, ConversionError> {
    ComplexConverter::new(target).to_core(value, wp)
}

#[inline]
pub fn to_host_integer(value: &Integer) -> HostValue {
    integer::integer_to_host(value)
}

#[inline]
pub fn to_host_rational(value: &Rational) -> HostValue {
    rational::rational_to_host(value)
}

#[inline]
pub fn to_host_fixed_float(value: Real128, wp: Precision) -> Result<HostValue, ConversionError> {
    Real128Converter.to_host(&value, wp)
}

#[inline]
pub fn to_host_arbitrary_float(value: &Real, wp: Precision) -> Result<HostValue, ConversionError> {
    RealConverter::default().to_host(value, wp)
}

#[inline]
pub fn to_host_fixed_complex(
    value: Complex128,
    wp: Precision,
) -> Result<HostValue, ConversionError> {
    Complex128Converter.to_host(&value, wp)
}

#[inline]
pub fn to_host_arbitrary_complex(
    value: &Complex,
    wp: Precision,
) -> Result<HostValue, ConversionError> {
    ComplexConverter::default().to_host(value, wp)
}

/// Converts every element of a host list with `element`. Fails with the
/// first element error; no partial result is returned.
#[inline]
pub fn convert_sequence<C>(
    value: &HostValue,
    element: C,
    wp: Precision,
) -> Result<Vec<C::Output>, ConversionError>
where
    C: Converter,
{
    SequenceConverter::new(element).to_core(value, wp)
}

/// Converts every entry of a host dict, keys with `key` and values with
/// `value_converter`. Fails with the first entry error in host order.
#[inline]
pub fn convert_mapping<K, V>(
    value: &HostValue,
    key: K,
    value_converter: V,
    wp: Precision,
) -> Result<FxHashMap<K::Output, V::Output>, ConversionError>
where
    K: Converter,
    K::Output: Eq + Hash,
    V: Converter,
{
    MappingConverter::new(key, value_converter).to_core(value, wp)
}
