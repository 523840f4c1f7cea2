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

//! # Capability Registry
//!
//! Boolean queries describing which optional numeric kinds this build
//! supports. The answers are fixed when the crate is compiled (through the
//! `quadmath`, `mpfr` and `mpc` Cargo features) and never change at runtime,
//! so they can be read from any thread without synchronization.
//!
//! Callers consult these before reaching for a kind-specific converter. The
//! overload dispatcher takes a `Capabilities` snapshot and skips every kind
//! whose flag is off.
//!
//! ```rust
//! use numbridge_core::capabilities::{has_fixed_float128, Capabilities};
//!
//! let caps = Capabilities::detect();
//! assert_eq!(caps.fixed_float128(), has_fixed_float128());
//! ```

use crate::value::NumericKind;

/// Returns `true` if the quadruple precision kinds (`Real128`, `Complex128`)
/// are available.
#[inline]
pub const fn has_fixed_float128() -> bool {
    cfg!(feature = "quadmath")
}

/// Returns `true` if the arbitrary-precision real kind (`Real`) is available.
#[inline]
pub const fn has_arbitrary_float() -> bool {
    cfg!(feature = "mpfr")
}

/// Returns `true` if the arbitrary-precision complex kind (`Complex`) is
/// available.
#[inline]
pub const fn has_arbitrary_complex() -> bool {
    cfg!(feature = "mpc")
}

/// A snapshot of the capability flags.
///
/// `Capabilities::detect()` mirrors the build; the explicit constructors let
/// embedders (and tests) describe a narrower set, e.g. a build where only the
/// fixed-width kind is linked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities {
    fixed_float128: bool,
    arbitrary_float: bool,
    arbitrary_complex: bool,
}

impl Capabilities {
    /// The capabilities of the current build.
    #[inline]
    pub const fn detect() -> Self {
        Self {
            fixed_float128: has_fixed_float128(),
            arbitrary_float: has_arbitrary_float(),
            arbitrary_complex: has_arbitrary_complex(),
        }
    }

    /// Only the exact kinds (`Integer`, `Rational`) are available.
    #[inline]
    pub const fn exact_only() -> Self {
        Self {
            fixed_float128: false,
            arbitrary_float: false,
            arbitrary_complex: false,
        }
    }

    /// Every optional kind is available.
    #[inline]
    pub const fn all() -> Self {
        Self {
            fixed_float128: true,
            arbitrary_float: true,
            arbitrary_complex: true,
        }
    }

    /// Sets whether the fixed-width `Real128` and `Complex128` kinds are
    /// available.
    #[inline]
    pub const fn with_fixed_float128(mut self, enabled: bool) -> Self {
        self.fixed_float128 = enabled;
        self
    }

    /// Sets whether the arbitrary-precision `Real` kind is available.
    #[inline]
    pub const fn with_arbitrary_float(mut self, enabled: bool) -> Self {
        self.arbitrary_float = enabled;
        self
    }

    /// Sets whether the arbitrary-precision `Complex` kind is available.
    #[inline]
    pub const fn with_arbitrary_complex(mut self, enabled: bool) -> Self {
        self.arbitrary_complex = enabled;
        self
    }

    /// Whether `Real128` and `Complex128` values can be produced.
    #[inline]
    pub const fn fixed_float128(&self) -> bool {
        self.fixed_float128
    }

    /// Whether `Real` values can be produced.
    #[inline]
    pub const fn arbitrary_float(&self) -> bool {
        self.arbitrary_float
    }

    /// Whether `Complex` values can be produced.
    #[inline]
    pub const fn arbitrary_complex(&self) -> bool {
        self.arbitrary_complex
    }

    /// Returns `true` if values of `kind` can be produced under these
    /// capabilities.
    pub const fn supports(&self, kind: NumericKind) -> bool {
        match kind {
            NumericKind::Integer | NumericKind::Rational => true,
            NumericKind::Real128 | NumericKind::Complex128 => self.fixed_float128,
            NumericKind::Real => self.arbitrary_float,
            NumericKind::Complex => self.arbitrary_complex,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

impl std::fmt::Display for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Capabilities(real128: {}, real: {}, complex: {})",
            self.fixed_float128, self.arbitrary_float, self.arbitrary_complex
        )
    }
}
