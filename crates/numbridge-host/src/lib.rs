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

//! # Numbridge Host
//!
//! The host side of the numbridge bridge: a model of the host runtime's
//! dynamic numeric objects and the converters that turn them into the typed
//! kinds of `numbridge-core` and back.
//!
//! ## Modules
//!
//! - `value`: `HostValue`, the tagged host object, with the host's
//!   multiprecision float `Mpf` and complex `Mpc`.
//! - `context`: `HostContext`, the host's ambient working precision and its
//!   scoped `workprec` override.
//! - `negotiate`: The precision gates for fixed-width and arbitrary-width
//!   kinds.
//! - `convert`: The `Converter` trait, one converter per kind and the
//!   container converters.
//! - `dispatch`: `Dispatcher`, ordered overload resolution across the
//!   available kinds.
//! - `diagnostics`: A deterministic arithmetic error for exercising error
//!   paths.
//!
//! ## Highlights
//!
//! Every conversion is a pure function of the input value, the working
//! precision and an optional explicit target precision. Failures are one of
//! `TypeMismatch`, `PrecisionInsufficient` or `Arithmetic` and are returned
//! to the caller as they occur; containers and complex values are never
//! partially converted.

pub mod context;
pub mod convert;
pub mod diagnostics;
pub mod dispatch;
pub mod negotiate;
pub mod value;

pub use context::HostContext;
pub use convert::{
    convert_mapping, convert_sequence, to_core_arbitrary_complex, to_core_arbitrary_float,
    to_core_fixed_complex, to_core_fixed_float, to_core_integer, to_core_rational,
    to_host_arbitrary_complex, to_host_arbitrary_float, to_host_fixed_complex, to_host_fixed_float,
    to_host_integer, to_host_rational, Converter,
};
pub use diagnostics::trigger_division_by_zero;
pub use dispatch::{Dispatcher, DispatcherBuilder, KindConverter};
pub use value::{HostValue, Mpc, Mpf};
