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

//! Container converters.
//!
//! `SequenceConverter` and `MappingConverter` apply one element converter to
//! every element. Conversion is atomic: the first failing element aborts the
//! whole conversion and its error is returned unchanged. Containers nest,
//! since a container converter is itself a `Converter`.

use super::Converter;
use crate::value::HostValue;
use log::trace;
use numbridge_core::{ConversionError, Precision};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Converts host `str` objects to `String`; used for mapping keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrConverter;

impl Converter for StrConverter {
    type Output = String;

    fn to_core(&self, value: &HostValue, _wp: Precision) -> Result<String, ConversionError> {
        match value {
            HostValue::Str(s) => Ok(s.clone()),
            other => Err(ConversionError::category("str", other.type_name())),
        }
    }

    #[inline]
    fn to_host(&self, value: &String, _wp: Precision) -> Result<HostValue, ConversionError> {
        Ok(HostValue::Str(value.clone()))
    }
}

/// Converts a host `list` into a `Vec` of one element kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceConverter<C> {
    element: C,
}

impl<C> SequenceConverter<C> {
    #[inline]
    pub fn new(element: C) -> Self {
        Self { element }
    }

    #[inline]
    pub fn element(&self) -> &C {
        &self.element
    }
}

impl<C> Converter for SequenceConverter<C>
where
    C: Converter,
{
    type Output = Vec<C::Output>;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Self::Output, ConversionError> {
        let items = match value {
            HostValue::List(items) => items,
            other => return Err(ConversionError::category("list", other.type_name())),
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                trace!("converting sequence element {} of type '{}'", index, item.type_name());
                self.element.to_core(item, wp)
            })
            .collect()
    }

    fn to_host(&self, value: &Self::Output, wp: Precision) -> Result<HostValue, ConversionError> {
        value
            .iter()
            .map(|item| self.element.to_host(item, wp))
            .collect::<Result<Vec<_>, _>>()
            .map(HostValue::List)
    }
}

/// Converts a host `dict` into an `FxHashMap`. For every entry the key is
/// converted before the value; the first failure in host order wins. If two
/// host keys convert to the same core key, the later entry is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingConverter<K, V> {
    key: K,
    value: V,
}

impl<K, V> MappingConverter<K, V> {
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

impl<K, V> Converter for MappingConverter<K, V>
where
    K: Converter,
    K::Output: Eq + Hash,
    V: Converter,
{
    type Output = FxHashMap<K::Output, V::Output>;

    fn to_core(&self, value: &HostValue, wp: Precision) -> Result<Self::Output, ConversionError> {
        let entries = match value {
            HostValue::Dict(entries) => entries,
            other => return Err(ConversionError::category("dict", other.type_name())),
        };
        let mut map = FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
        for (index, (key, item)) in entries.iter().enumerate() {
            trace!("converting mapping entry {} with key {}", index, key);
            let key = self.key.to_core(key, wp)?;
            let item = self.value.to_core(item, wp)?;
            map.insert(key, item);
        }
        Ok(map)
    }

    fn to_host(&self, value: &Self::Output, wp: Precision) -> Result<HostValue, ConversionError> {
        let mut entries = Vec::with_capacity(value.len());
        for (key, item) in value {
            entries.push((self.key.to_host(key, wp)?, self.value.to_host(item, wp)?));
        }
        Ok(HostValue::Dict(entries))
    }
}
