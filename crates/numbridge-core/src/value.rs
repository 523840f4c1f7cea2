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

//! # Numeric Values
//!
//! `NumericKind` names each compiled numeric kind and `NumericValue` is the
//! tagged union produced by overload dispatch when the caller does not fix
//! the kind statically.

use crate::{
    complex::{Complex, Complex128},
    integer::Integer,
    precision::Precision,
    rational::Rational,
    real::Real,
    real128::Real128,
};
use std::fmt::Display;

/// The numeric kinds known to the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    Integer,
    Rational,
    Real128,
    Real,
    Complex128,
    Complex,
}

impl NumericKind {
    /// All kinds, in the default dispatch priority.
    pub const ALL: [NumericKind; 6] = [
        NumericKind::Integer,
        NumericKind::Rational,
        NumericKind::Real128,
        NumericKind::Real,
        NumericKind::Complex128,
        NumericKind::Complex,
    ];

    /// The significand width of a fixed-width kind, `None` for every other
    /// kind.
    #[inline]
    pub const fn intrinsic_precision(&self) -> Option<Precision> {
        match self {
            NumericKind::Real128 | NumericKind::Complex128 => Some(Precision::REAL128),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_fixed_width(&self) -> bool {
        self.intrinsic_precision().is_some()
    }

    #[inline]
    pub const fn is_complex(&self) -> bool {
        matches!(self, NumericKind::Complex128 | NumericKind::Complex)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            NumericKind::Integer => "integer",
            NumericKind::Rational => "rational",
            NumericKind::Real128 => "real128",
            NumericKind::Real => "real",
            NumericKind::Complex128 => "complex128",
            NumericKind::Complex => "complex",
        }
    }
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A value of any numeric kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Integer(Integer),
    Rational(Rational),
    Real128(Real128),
    Real(Real),
    Complex128(Complex128),
    Complex(Complex),
}

impl NumericValue {
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::Integer(_) => NumericKind::Integer,
            NumericValue::Rational(_) => NumericKind::Rational,
            NumericValue::Real128(_) => NumericKind::Real128,
            NumericValue::Real(_) => NumericKind::Real,
            NumericValue::Complex128(_) => NumericKind::Complex128,
            NumericValue::Complex(_) => NumericKind::Complex,
        }
    }

    /// The precision carried by a floating value: 113 for the fixed-width
    /// kinds, the value's own precision for the arbitrary ones, `None` for
    /// the exact kinds.
    pub fn precision(&self) -> Option<Precision> {
        match self {
            NumericValue::Integer(_) | NumericValue::Rational(_) => None,
            NumericValue::Real128(_) | NumericValue::Complex128(_) => Some(Precision::REAL128),
            NumericValue::Real(r) => Some(r.prec()),
            NumericValue::Complex(c) => Some(c.prec()),
        }
    }

    pub fn as_integer(&self) -> Option<&Integer> {
        match self {
            NumericValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            NumericValue::Rational(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_real128(&self) -> Option<Real128> {
        match self {
            NumericValue::Real128(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<&Real> {
        match self {
            NumericValue::Real(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_complex128(&self) -> Option<Complex128> {
        match self {
            NumericValue::Complex128(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&Complex> {
        match self {
            NumericValue::Complex(v) => Some(v),
            _ => None,
        }
    }
}

macro_rules! numeric_value_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for NumericValue {
                #[inline]
                fn from(value: $variant) -> Self {
                    NumericValue::$variant(value)
                }
            }
        )*
    };
}

numeric_value_from!(Integer, Rational, Real128, Real, Complex128, Complex);

impl Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::Integer(v) => write!(f, "{}", v),
            NumericValue::Rational(v) => write!(f, "{}", v),
            NumericValue::Real128(v) => write!(f, "{}", v),
            NumericValue::Real(v) => write!(f, "{}", v),
            NumericValue::Complex128(v) => write!(f, "{}", v),
            NumericValue::Complex(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let names: Vec<String> = NumericKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(
            names,
            ["integer", "rational", "real128", "real", "complex128", "complex"]
        );
    }

    #[test]
    fn test_fixed_width_kinds() {
        assert!(NumericKind::Real128.is_fixed_width());
        assert!(NumericKind::Complex128.is_fixed_width());
        assert!(!NumericKind::Real.is_fixed_width());
        assert_eq!(NumericKind::Real128.intrinsic_precision(), Some(Precision::REAL128));
        assert!(NumericKind::Complex.is_complex());
        assert!(!NumericKind::Real.is_complex());
    }

    #[test]
    fn test_value_kind_and_precision() {
        let v = NumericValue::from(Integer::from(7));
        assert_eq!(v.kind(), NumericKind::Integer);
        assert_eq!(v.precision(), None);
        assert_eq!(v.as_integer(), Some(&Integer::from(7)));
        assert!(v.as_real().is_none());

        let r = NumericValue::from(Real::from_f64(0.5));
        assert_eq!(r.kind(), NumericKind::Real);
        assert_eq!(r.precision(), Some(Precision::DOUBLE));

        let q = NumericValue::from(Real128::ONE);
        assert_eq!(q.precision(), Some(Precision::REAL128));
        assert_eq!(q.as_real128(), Some(Real128::ONE));
    }
}
