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

//! # Numbridge Core
//!
//! Strongly typed numeric kinds and the precision rules that govern them.
//! This crate is the compiled side of the numbridge bridge: it knows nothing
//! about host objects, only about values whose kind and precision are fixed
//! by their Rust type or carried explicitly alongside them.
//!
//! ## Modules
//!
//! - `capabilities`: Build-time flags for the optional kinds (`Real128`,
//!   `Real`, `Complex`) exposed as side-effect-free boolean queries.
//! - `error`: `ConversionError` and its detail types (`TypeMismatchError`,
//!   `PrecisionError`, `ArithmeticError`), plus the `ErrorKind` tag callers
//!   branch on.
//! - `precision`: The validated `Precision` bit count and the
//!   round-half-even primitive shared by every floating kind.
//! - `num`: Checked arithmetic traits returning `Result` instead of panicking.
//! - `integer`, `rational`: Exact kinds backed by `num-bigint`/`num-rational`.
//! - `real128`: Quadruple precision (113-bit significand) with abrupt
//!   underflow and a finite-clamping rounding guard.
//! - `real`: Arbitrary-precision binary floating point with an explicit
//!   per-value precision.
//! - `complex`: `Complex128` and `Complex`, the pairs of the floating kinds.
//! - `value`: `NumericKind` and `NumericValue`, the tagged union over all of
//!   the above.
//!
//! ## Purpose
//!
//! Every value produced here is immutable once built and owns all of its
//! data, so values may be freely moved across threads. Nothing in this crate
//! holds mutable global state.

pub mod capabilities;
pub mod complex;
pub mod error;
pub mod integer;
pub mod num;
pub mod precision;
pub mod rational;
pub mod real;
pub mod real128;
pub mod value;

pub use capabilities::{
    has_arbitrary_complex, has_arbitrary_float, has_fixed_float128, Capabilities,
};
pub use complex::{Complex, Complex128};
pub use error::{ArithmeticError, ConversionError, ErrorKind, PrecisionError, TypeMismatchError};
pub use integer::Integer;
pub use precision::Precision;
pub use rational::Rational;
pub use real::Real;
pub use real128::Real128;
pub use value::{NumericKind, NumericValue};
