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

use crate::{error::ArithmeticError, integer::Integer};
use num_traits::Zero;

/// A trait for types that support fallible division by value.
///
/// # Examples
///
/// ```rust
/// # use numbridge_core::num::ops::checked_arithmetic::TryDivVal;
/// # use numbridge_core::{ArithmeticError, Integer};
/// let a = Integer::from(7);
/// assert_eq!(a.clone().try_div_val(Integer::from(2)), Ok(Integer::from(3)));
/// assert_eq!(a.try_div_val(Integer::from(0)), Err(ArithmeticError::DivisionByZero));
/// ```
pub trait TryDivVal: Sized {
    /// Divides by `v`, failing with `ArithmeticError::DivisionByZero` if `v`
    /// is zero.
    fn try_div_val(self, v: Self) -> Result<Self, ArithmeticError>;
}

impl TryDivVal for Integer {
    #[inline]
    fn try_div_val(self, v: Integer) -> Result<Integer, ArithmeticError> {
        if v.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(self / v)
    }
}
