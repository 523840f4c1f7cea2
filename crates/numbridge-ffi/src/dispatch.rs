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
use numbridge_core::{Capabilities, NumericKind};
use numbridge_host::{Dispatcher, DispatcherBuilder};

/// Creates a dispatcher with the default priority list over the given
/// capabilities. Free it with `numbridge_dispatcher_free`.
#[no_mangle]
pub extern "C" fn numbridge_dispatcher_new(
    fixed_float128: bool,
    arbitrary_float: bool,
    arbitrary_complex: bool,
) -> *mut Dispatcher {
    let capabilities = Capabilities::exact_only()
        .with_fixed_float128(fixed_float128)
        .with_arbitrary_float(arbitrary_float)
        .with_arbitrary_complex(arbitrary_complex);
    let dispatcher = DispatcherBuilder::new(capabilities)
        .with_default_order()
        .build();
    Box::into_raw(Box::new(dispatcher))
}

/// Creates a dispatcher over the capabilities compiled into this library.
#[no_mangle]
pub extern "C" fn numbridge_dispatcher_default() -> *mut Dispatcher {
    Box::into_raw(Box::new(Dispatcher::default()))
}

/// Frees a dispatcher created by this library. `NULL` is ignored.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by numbridge.
#[no_mangle]
pub unsafe extern "C" fn numbridge_dispatcher_free(ptr: *mut Dispatcher) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the number of candidate kinds.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by numbridge.
#[no_mangle]
pub unsafe extern "C" fn numbridge_dispatcher_num_candidates(ptr: *const Dispatcher) -> usize {
    assert!(
        !ptr.is_null(),
        "called `numbridge_dispatcher_num_candidates` with null pointer"
    );

    let dispatcher = &*ptr;
    dispatcher.candidates().len()
}

/// Returns the static, NUL-terminated name of the candidate at `index`, in
/// priority order.
///
/// # Panics
///
/// This function will panic if called with a null pointer or if `index` is
/// out of bounds.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by numbridge.
#[no_mangle]
pub unsafe extern "C" fn numbridge_dispatcher_candidate_name(
    ptr: *const Dispatcher,
    index: usize,
) -> *const c_char {
    assert!(
        !ptr.is_null(),
        "called `numbridge_dispatcher_candidate_name` with null pointer"
    );

    let dispatcher = &*ptr;
    let candidates = dispatcher.candidates();
    assert!(
        index < candidates.len(),
        "called `numbridge_dispatcher_candidate_name` with index out of bounds: the len is {} but the index is {}",
        candidates.len(),
        index
    );
    kind_name(candidates[index]).as_ptr() as *const c_char
}

fn kind_name(kind: NumericKind) -> &'static [u8] {
    match kind {
        NumericKind::Integer => b"integer\0",
        NumericKind::Rational => b"rational\0",
        NumericKind::Real128 => b"real128\0",
        NumericKind::Real => b"real\0",
        NumericKind::Complex128 => b"complex128\0",
        NumericKind::Complex => b"complex\0",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_candidate_names() {
        let ptr = numbridge_dispatcher_new(true, true, false);
        unsafe {
            assert_eq!(numbridge_dispatcher_num_candidates(ptr), 5);
            let names: Vec<&str> = (0..5)
                .map(|i| {
                    CStr::from_ptr(numbridge_dispatcher_candidate_name(ptr, i))
                        .to_str()
                        .unwrap()
                })
                .collect();
            assert_eq!(names, ["integer", "rational", "real128", "real", "complex128"]);
            numbridge_dispatcher_free(ptr);
        }
    }

    #[test]
    fn test_exact_only() {
        let ptr = numbridge_dispatcher_new(false, false, false);
        unsafe {
            assert_eq!(numbridge_dispatcher_num_candidates(ptr), 2);
            numbridge_dispatcher_free(ptr);
        }
    }

    #[test]
    fn test_kind_names_match_display() {
        for kind in NumericKind::ALL {
            let name = CStr::from_bytes_with_nul(kind_name(kind)).unwrap();
            assert_eq!(name.to_str().unwrap(), kind.to_string());
        }
    }

    #[test]
    fn test_free_null_is_noop() {
        unsafe { numbridge_dispatcher_free(std::ptr::null_mut()) };
    }
}
