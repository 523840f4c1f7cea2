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

use libc::c_char;
use numbridge_core::{ConversionError, ErrorKind};

/// The error kinds as plain integers.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    TypeMismatch = 1,
    PrecisionInsufficient = 2,
    Arithmetic = 3,
}

impl FfiErrorCode {
    /// The NUL-terminated name of this code.
    fn name(self) -> &'static [u8] {
        match self {
            FfiErrorCode::Ok => b"Ok\0",
            FfiErrorCode::TypeMismatch => b"TypeMismatch\0",
            FfiErrorCode::PrecisionInsufficient => b"PrecisionInsufficient\0",
            FfiErrorCode::Arithmetic => b"ArithmeticError\0",
        }
    }
}

impl From<ErrorKind> for FfiErrorCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::TypeMismatch => FfiErrorCode::TypeMismatch,
            ErrorKind::PrecisionInsufficient => FfiErrorCode::PrecisionInsufficient,
            ErrorKind::Arithmetic => FfiErrorCode::Arithmetic,
        }
    }
}

impl From<&ConversionError> for FfiErrorCode {
    #[inline]
    fn from(error: &ConversionError) -> Self {
        FfiErrorCode::from(error.kind())
    }
}

/// Returns the static, NUL-terminated name of `code`. The returned pointer
/// is valid for the lifetime of the program and must not be freed.
#[no_mangle]
pub extern "C" fn numbridge_error_code_name(code: FfiErrorCode) -> *const c_char {
    code.name().as_ptr() as *const c_char
}
