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

//! # Host Values
//!
//! The host runtime's dynamic objects as the bridge sees them. A `HostValue`
//! carries a type tag and the raw data of the object; it never carries a
//! working precision, which lives in the `HostContext` instead.
//!
//! `Mpf` mirrors the host's multiprecision float: a sign and either a
//! significand/exponent pair, a zero, an infinity or NaN. The value itself
//! has no precision; it was rounded to whatever working precision was in
//! effect when it was created.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer as _;
use num_traits::{One, Signed, Zero};
use numbridge_core::precision::{normalize, round_half_even, Precision};
use std::{cmp::Ordering, fmt::Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum MpfClass {
    Zero,
    Finite { significand: BigUint, exponent: i64 },
    Infinite,
    Nan,
}

/// The host's multiprecision float.
#[derive(Debug, Clone)]
pub struct Mpf {
    negative: bool,
    class: MpfClass,
}

impl Mpf {
    #[inline]
    pub fn zero() -> Self {
        Self {
            negative: false,
            class: MpfClass::Zero,
        }
    }

    #[inline]
    pub fn inf() -> Self {
        Self {
            negative: false,
            class: MpfClass::Infinite,
        }
    }

    #[inline]
    pub fn neg_inf() -> Self {
        Self {
            negative: true,
            class: MpfClass::Infinite,
        }
    }

    #[inline]
    pub fn nan() -> Self {
        Self {
            negative: false,
            class: MpfClass::Nan,
        }
    }

    /// Builds `±significand * 2^exponent` exactly.
    pub fn from_parts(negative: bool, significand: BigUint, exponent: i64) -> Self {
        if significand.is_zero() {
            return Self {
                negative,
                class: MpfClass::Zero,
            };
        }
        let (significand, exponent) = normalize(significand, exponent);
        Self {
            negative,
            class: MpfClass::Finite {
                significand,
                exponent,
            },
        }
    }

    /// `2^exponent`.
    #[inline]
    pub fn pow2(exponent: i64) -> Self {
        Self::from_parts(false, BigUint::one(), exponent)
    }

    /// The exact value of an integer.
    pub fn from_integer(value: &BigInt) -> Self {
        Self::from_parts(value.is_negative(), value.magnitude().clone(), 0)
    }

    /// The exact value of a machine float.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::nan();
        }
        if value.is_infinite() {
            return if value < 0.0 { Self::neg_inf() } else { Self::inf() };
        }
        let bits = value.to_bits();
        let negative = bits >> 63 == 1;
        let biased = ((bits >> 52) & 0x7ff) as i64;
        let fraction = bits & ((1u64 << 52) - 1);
        let (significand, exponent) = if biased == 0 {
            (fraction, -1074)
        } else {
            (fraction | (1u64 << 52), biased - 1075)
        };
        Self::from_parts(negative, BigUint::from(significand), exponent)
    }

    /// `numerator / denominator` rounded half-to-even to `prec` bits.
    /// Returns `None` if the denominator is zero.
    pub fn from_ratio(numerator: &BigInt, denominator: &BigInt, prec: Precision) -> Option<Self> {
        if denominator.is_zero() {
            return None;
        }
        let negative = numerator.is_negative() != denominator.is_negative();
        let num = numerator.magnitude();
        let den = denominator.magnitude();
        if num.is_zero() {
            return Some(Self::zero());
        }
        // Scale so the quotient has at least prec + 2 bits, then fold the
        // remainder into a sticky bit.
        let shift = (prec.get() + 2 + den.bits()).saturating_sub(num.bits());
        let (quotient, remainder) = (num << shift).div_rem(den);
        let sticky = if remainder.is_zero() { 0u32 } else { 1u32 };
        let significand = (quotient << 1u32) + BigUint::from(sticky);
        let exponent = -(shift as i64) - 1;
        let (significand, exponent) = round_half_even(&significand, exponent, prec);
        Some(Self::from_parts(negative, significand, exponent))
    }

    /// Rounds this value half-to-even to `prec` bits.
    pub fn round(&self, prec: Precision) -> Self {
        match &self.class {
            MpfClass::Finite {
                significand,
                exponent,
            } => {
                let (significand, exponent) = round_half_even(significand, *exponent, prec);
                Self::from_parts(self.negative, significand, exponent)
            }
            _ => self.clone(),
        }
    }

    /// Decomposes a finite value into `(negative, significand, exponent)`;
    /// zero has a zero significand. `None` for infinities and NaN.
    pub fn to_parts(&self) -> Option<(bool, BigUint, i64)> {
        match &self.class {
            MpfClass::Zero => Some((self.negative, BigUint::zero(), 0)),
            MpfClass::Finite {
                significand,
                exponent,
            } => Some((self.negative, significand.clone(), *exponent)),
            MpfClass::Infinite | MpfClass::Nan => None,
        }
    }

    /// The number of significand bits, `0` for zero and the specials.
    pub fn bits(&self) -> u64 {
        match &self.class {
            MpfClass::Finite { significand, .. } => significand.bits(),
            _ => 0,
        }
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self.class, MpfClass::Nan)
    }

    #[inline]
    pub fn is_inf(&self) -> bool {
        matches!(self.class, MpfClass::Infinite)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self.class, MpfClass::Zero)
    }

    #[inline]
    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub fn negated(&self) -> Self {
        Self {
            negative: !self.negative,
            class: self.class.clone(),
        }
    }
}

impl PartialEq for Mpf {
    fn eq(&self, other: &Self) -> bool {
        match (&self.class, &other.class) {
            (MpfClass::Nan, _) | (_, MpfClass::Nan) => false,
            (MpfClass::Zero, MpfClass::Zero) => true,
            (a, b) => self.negative == other.negative && a == b,
        }
    }
}

impl Display for Mpf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        match &self.class {
            MpfClass::Nan => write!(f, "mpf('nan')"),
            MpfClass::Infinite => write!(f, "mpf('{}inf')", sign),
            MpfClass::Zero => write!(f, "mpf('{}0.0')", sign),
            MpfClass::Finite {
                significand,
                exponent,
            } => write!(f, "mpf(({}, {}, {}))", u8::from(self.negative), significand, exponent),
        }
    }
}

/// The host's multiprecision complex: a pair of `Mpf`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mpc {
    pub re: Mpf,
    pub im: Mpf,
}

impl Mpc {
    #[inline]
    pub fn new(re: Mpf, im: Mpf) -> Self {
        Self { re, im }
    }
}

impl Display for Mpc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mpc(real={}, imag={})", self.re, self.im)
    }
}

/// A dynamically typed host object.
///
/// Equality follows the host's value semantics: fractions compare by value
/// and dicts compare without regard to entry order.
#[derive(Debug, Clone)]
pub enum HostValue {
    None,
    Int(BigInt),
    /// The host's machine float. Multiprecision converters never accept it.
    Float(f64),
    /// An exact fraction exactly as the host built it, not yet reduced.
    Fraction {
        numerator: BigInt,
        denominator: BigInt,
    },
    Mpf(Mpf),
    Mpc(Mpc),
    Str(String),
    List(Vec<HostValue>),
    /// Key/value pairs in host iteration order.
    Dict(Vec<(HostValue, HostValue)>),
}

impl HostValue {
    /// The host's name for the dynamic category of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::None => "NoneType",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::Fraction { .. } => "Fraction",
            HostValue::Mpf(_) => "mpf",
            HostValue::Mpc(_) => "mpc",
            HostValue::Str(_) => "str",
            HostValue::List(_) => "list",
            HostValue::Dict(_) => "dict",
        }
    }

    #[inline]
    pub fn int<T: Into<BigInt>>(value: T) -> Self {
        HostValue::Int(value.into())
    }

    #[inline]
    pub fn fraction<N: Into<BigInt>, D: Into<BigInt>>(numerator: N, denominator: D) -> Self {
        HostValue::Fraction {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    #[inline]
    pub fn str<S: Into<String>>(value: S) -> Self {
        HostValue::Str(value.into())
    }
}

impl From<Mpf> for HostValue {
    #[inline]
    fn from(value: Mpf) -> Self {
        HostValue::Mpf(value)
    }
}

impl From<Mpc> for HostValue {
    #[inline]
    fn from(value: Mpc) -> Self {
        HostValue::Mpc(value)
    }
}

impl From<Vec<HostValue>> for HostValue {
    #[inline]
    fn from(value: Vec<HostValue>) -> Self {
        HostValue::List(value)
    }
}

// Every entry of `a` has a key in `b` mapping to an equal value.
fn dict_entries_within(a: &[(HostValue, HostValue)], b: &[(HostValue, HostValue)]) -> bool {
    a.iter().all(|(k, v)| b.iter().any(|(bk, bv)| bk == k && bv == v))
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HostValue::None, HostValue::None) => true,
            (HostValue::Int(a), HostValue::Int(b)) => a == b,
            (HostValue::Float(a), HostValue::Float(b)) => a == b,
            (
                HostValue::Fraction {
                    numerator: na,
                    denominator: da,
                },
                HostValue::Fraction {
                    numerator: nb,
                    denominator: db,
                },
            ) => {
                if da.is_zero() || db.is_zero() {
                    na == nb && da == db
                } else {
                    na * db == nb * da
                }
            }
            (HostValue::Mpf(a), HostValue::Mpf(b)) => a == b,
            (HostValue::Mpc(a), HostValue::Mpc(b)) => a == b,
            (HostValue::Str(a), HostValue::Str(b)) => a == b,
            (HostValue::List(a), HostValue::List(b)) => a == b,
            (HostValue::Dict(a), HostValue::Dict(b)) => {
                a.len() == b.len() && dict_entries_within(a, b) && dict_entries_within(b, a)
            }
            _ => false,
        }
    }
}

impl Display for HostValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HostValue::None => write!(f, "None"),
            HostValue::Int(v) => write!(f, "{}", v),
            HostValue::Float(v) => write!(f, "{:?}", v),
            HostValue::Fraction {
                numerator,
                denominator,
            } => write!(f, "Fraction({}, {})", numerator, denominator),
            HostValue::Mpf(v) => write!(f, "{}", v),
            HostValue::Mpc(v) => write!(f, "{}", v),
            HostValue::Str(v) => write!(f, "{:?}", v),
            HostValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            HostValue::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Orders two finite or infinite `Mpf` values; `None` if either is NaN.
fn mpf_cmp(a: &Mpf, b: &Mpf) -> Option<Ordering> {
    if a.is_nan() || b.is_nan() {
        return None;
    }
    let key = |m: &Mpf| -> (i8, Option<(BigUint, i64)>) {
        match m.to_parts() {
            None => (if m.negative { -2 } else { 2 }, None),
            Some((_, s, _)) if s.is_zero() => (0, None),
            Some((neg, s, e)) => (if neg { -1 } else { 1 }, Some((s, e))),
        }
    };
    let (ka, va) = key(a);
    let (kb, vb) = key(b);
    if ka != kb || ka.abs() != 1 {
        return Some(ka.cmp(&kb));
    }
    let ((sa, ea), (sb, eb)) = (va?, vb?);
    let lead_a = ea as i128 + sa.bits() as i128;
    let lead_b = eb as i128 + sb.bits() as i128;
    let magnitude = if lead_a != lead_b {
        lead_a.cmp(&lead_b)
    } else {
        // Equal leading bits bound the shift by the significand width.
        match ea.cmp(&eb) {
            Ordering::Equal => sa.cmp(&sb),
            Ordering::Greater => (sa << (ea - eb) as u64).cmp(&sb),
            Ordering::Less => sa.cmp(&(sb << (eb - ea) as u64)),
        }
    };
    Some(if ka < 0 { magnitude.reverse() } else { magnitude })
}

impl PartialOrd for Mpf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        mpf_cmp(self, other)
    }
}
