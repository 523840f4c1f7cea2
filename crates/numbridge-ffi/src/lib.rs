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

//! # Numbridge FFI
//!
//! C-compatible bindings for the parts of numbridge that make sense across a
//! C boundary: the capability queries, the overload priority list and the
//! error-path diagnostic.
//!
//! ## Modules
//!
//! - `error`: `FfiErrorCode`, the `#[repr(C)]` mirror of the three error
//!   kinds, and its static names.
//! - `dispatch`: An opaque `Dispatcher` handle and accessors for its
//!   candidate list.
//!
//! Passing `NULL` where a handle is expected aborts with a panic rather than
//! causing undefined behavior. Every `_new` call must be paired with the
//! matching `_free` call.

pub mod dispatch;
pub mod error;

use crate::error::FfiErrorCode;

/// Returns `true` if the quadruple precision kinds are compiled in.
#[no_mangle]
pub extern "C" fn numbridge_has_fixed_float128() -> bool {
    numbridge_core::has_fixed_float128()
}

/// Returns `true` if the arbitrary-precision float kind is compiled in.
#[no_mangle]
pub extern "C" fn numbridge_has_arbitrary_float() -> bool {
    numbridge_core::has_arbitrary_float()
}

/// Returns `true` if the arbitrary-precision complex kind is compiled in.
#[no_mangle]
pub extern "C" fn numbridge_has_arbitrary_complex() -> bool {
    numbridge_core::has_arbitrary_complex()
}

/// Runs the division-by-zero diagnostic. Always returns
/// `FfiErrorCode::Arithmetic`.
#[no_mangle]
pub extern "C" fn numbridge_trigger_division_by_zero() -> FfiErrorCode {
    match numbridge_host::trigger_division_by_zero() {
        Ok(_) => FfiErrorCode::Ok,
        Err(e) => FfiErrorCode::from(&e),
    }
}
