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

//! Integer converters.
//!
//! `IntegerConverter` is exact and unbounded. `NativeIntConverter<T>`
//! additionally requires the value to fit `T`; an out-of-range value is a
//! `TypeMismatch`, as it is for any other value the type cannot hold.

use super::Converter;
use crate::value::HostValue;
use num_traits::PrimInt;
use numbridge_core::{ConversionError, Integer, Precision, TypeMismatchError};
use std::marker::PhantomData;

#[inline]
pub(crate) fn integer_to_host(value: &Integer) -> HostValue {
    HostValue::Int(value.as_bigint().clone())
}

/// Converts host `int` objects to `Integer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerConverter;

impl Converter for IntegerConverter {
    type Output = Integer;

    fn to_core(&self, value: &HostValue, _wp: Precision) -> Result<Integer, ConversionError> {
        match value {
            HostValue::Int(v) => Ok(Integer::from(v.clone())),
            other => Err(ConversionError::category("int", other.type_name())),
        }
    }

    #[inline]
    fn to_host(&self, value: &Integer, _wp: Precision) -> Result<HostValue, ConversionError> {
        Ok(integer_to_host(value))
    }
}

/// Converts host `int` objects to the primitive integer `T`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeIntConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> NativeIntConverter<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Converter for NativeIntConverter<T>
where
    T: PrimInt,
{
    type Output = T;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<T, ConversionError> {
        IntegerConverter
            .to_core(value, wp)?
            .to_native::<T>()
            .ok_or_else(|| {
                TypeMismatchError::OutOfRange {
                    type_name: std::any::type_name::<T>(),
                }
                .into()
            })
    }

    #[inline]
    fn to_host(&self, value: &T, _wp: Precision) -> Result<HostValue, ConversionError> {
        Ok(integer_to_host(&Integer::from_native(*value)))
    }
}
