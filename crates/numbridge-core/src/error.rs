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

//! Error types for conversions and arithmetic on converted values.
//!
//! Three kinds of failure are kept distinct end to end because callers branch
//! on them:
//!
//! - `TypeMismatch`: the host value belongs to the wrong dynamic category, or
//!   a fixed-width kind's required precision differs from the working
//!   precision.
//! - `PrecisionInsufficient`: an explicitly requested precision exceeds the
//!   precision the input actually carries.
//! - `Arithmetic`: a domain error raised while computing on converted values.
//!
//! No conversion recovers locally. Whatever fails first is returned to the
//! caller as-is, and no container or complex value is left half-converted.

use crate::{precision::Precision, value::NumericKind};
use std::fmt::Display;

/// A `Copy` tag identifying which of the three error kinds occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    PrecisionInsufficient,
    Arithmetic,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch => write!(f, "TypeMismatch"),
            Self::PrecisionInsufficient => write!(f, "PrecisionInsufficient"),
            Self::Arithmetic => write!(f, "ArithmeticError"),
        }
    }
}

/// Why a value could not be interpreted as the requested kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMismatchError {
    /// The host value's dynamic category is not accepted by the converter.
    Category {
        /// The category the converter accepts (e.g. "int", "mpf").
        expected: &'static str,
        /// The category of the value that was offered.
        found: &'static str,
    },
    /// A fixed-width kind requires the working precision to match exactly.
    PrecisionMismatch {
        kind: NumericKind,
        required: Precision,
        working: Precision,
    },
    /// The integer does not fit the native integer type.
    OutOfRange {
        /// The name of the native type (e.g. "i64").
        type_name: &'static str,
    },
    /// No overload candidate accepted the value.
    NoMatchingOverload {
        found: &'static str,
        tried: Vec<NumericKind>,
    },
}

impl Display for TypeMismatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category { expected, found } => {
                write!(f, "expected a value of type '{}', found '{}'", expected, found)
            }
            Self::PrecisionMismatch {
                kind,
                required,
                working,
            } => write!(
                f,
                "{} requires a working precision of exactly {} bits, but the current working precision is {} bits",
                kind, required, working
            ),
            Self::OutOfRange { type_name } => {
                write!(f, "integer value does not fit into type {}", type_name)
            }
            Self::NoMatchingOverload { found, tried } => {
                write!(f, "no overload accepts a value of type '{}' (tried: ", found)?;
                for (i, kind) in tried.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", kind)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::error::Error for TypeMismatchError {}

/// An explicitly requested precision is larger than the precision available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecisionError {
    /// The precision that was asked for.
    pub requested: Precision,
    /// The precision the input actually carries.
    pub available: Precision,
}

impl Display for PrecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "requested precision of {} bits exceeds the available precision of {} bits; the conversion would fabricate {} bits",
            self.requested,
            self.available,
            self.requested.get().saturating_sub(self.available.get())
        )
    }
}

impl std::error::Error for PrecisionError {}

/// A domain error raised while computing on converted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticError {
    DivisionByZero,
}

impl Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// The error type for every conversion in the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    TypeMismatch(TypeMismatchError),
    PrecisionInsufficient(PrecisionError),
    Arithmetic(ArithmeticError),
}

impl ConversionError {
    /// Shorthand for a category mismatch.
    #[inline]
    pub fn category(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch(TypeMismatchError::Category { expected, found })
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch(_) => ErrorKind::TypeMismatch,
            Self::PrecisionInsufficient(_) => ErrorKind::PrecisionInsufficient,
            Self::Arithmetic(_) => ErrorKind::Arithmetic,
        }
    }

    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch(_))
    }

    #[inline]
    pub fn is_precision_insufficient(&self) -> bool {
        matches!(self, Self::PrecisionInsufficient(_))
    }

    #[inline]
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Arithmetic(_))
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch(e) => write!(f, "Type mismatch: {}", e),
            Self::PrecisionInsufficient(e) => write!(f, "Insufficient precision: {}", e),
            Self::Arithmetic(e) => write!(f, "Arithmetic error: {}", e),
        }
    }
}

impl std::error::Error for ConversionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TypeMismatch(e) => Some(e),
            Self::PrecisionInsufficient(e) => Some(e),
            Self::Arithmetic(e) => Some(e),
        }
    }
}

impl From<TypeMismatchError> for ConversionError {
    fn from(e: TypeMismatchError) -> Self {
        Self::TypeMismatch(e)
    }
}

impl From<PrecisionError> for ConversionError {
    fn from(e: PrecisionError) -> Self {
        Self::PrecisionInsufficient(e)
    }
}

impl From<ArithmeticError> for ConversionError {
    fn from(e: ArithmeticError) -> Self {
        Self::Arithmetic(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prec(bits: u64) -> Precision {
        Precision::new(bits).unwrap()
    }

    #[test]
    fn test_kind_is_preserved() {
        let e = ConversionError::category("int", "float");
        assert_eq!(e.kind(), ErrorKind::TypeMismatch);
        assert!(e.is_type_mismatch());

        let e: ConversionError = PrecisionError {
            requested: prec(300),
            available: prec(53),
        }
        .into();
        assert_eq!(e.kind(), ErrorKind::PrecisionInsufficient);
        assert!(e.is_precision_insufficient());

        let e: ConversionError = ArithmeticError::DivisionByZero.into();
        assert_eq!(e.kind(), ErrorKind::Arithmetic);
        assert!(e.is_arithmetic());
    }

    #[test]
    fn test_display_category() {
        let e = ConversionError::category("int", "float");
        assert_eq!(
            e.to_string(),
            "Type mismatch: expected a value of type 'int', found 'float'"
        );
    }

    #[test]
    fn test_display_precision_mismatch() {
        let e = TypeMismatchError::PrecisionMismatch {
            kind: NumericKind::Real128,
            required: Precision::REAL128,
            working: prec(53),
        };
        assert_eq!(
            e.to_string(),
            "real128 requires a working precision of exactly 113 bits, but the current working precision is 53 bits"
        );
    }

    #[test]
    fn test_display_no_matching_overload() {
        let e = TypeMismatchError::NoMatchingOverload {
            found: "mpf",
            tried: vec![NumericKind::Integer, NumericKind::Real128],
        };
        assert_eq!(
            e.to_string(),
            "no overload accepts a value of type 'mpf' (tried: integer, real128)"
        );
    }

    #[test]
    fn test_display_precision_error() {
        let e = PrecisionError {
            requested: prec(300),
            available: prec(53),
        };
        assert!(e.to_string().contains("247 bits"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error;
        let e: ConversionError = ArithmeticError::DivisionByZero.into();
        let src = e.source().expect("source must be set");
        assert_eq!(src.to_string(), "division by zero");
    }
}
