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

//! Error-path helpers.

use numbridge_core::{num::ops::checked_arithmetic::TryDivVal, ConversionError, Integer};
use num_traits::{One, Zero};

/// Divides one by zero through the checked arithmetic path. Always returns
/// `ConversionError::Arithmetic`.
pub fn trigger_division_by_zero() -> Result<Integer, ConversionError> {
    Ok(Integer::one().try_div_val(Integer::zero())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use numbridge_core::{ArithmeticError, ErrorKind};

    #[test]
    fn test_always_arithmetic() {
        for _ in 0..3 {
            let err = trigger_division_by_zero().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Arithmetic);
            assert_eq!(err, ConversionError::Arithmetic(ArithmeticError::DivisionByZero));
        }
    }
}
