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

use num_bigint::{BigInt, BigUint};
use numbridge_core::{
    Capabilities, ConversionError, ErrorKind, Integer, NumericKind, NumericValue, Precision,
    Rational, Real, Real128, TypeMismatchError,
};
use numbridge_host::{
    convert::{IntegerConverter, RationalConverter},
    convert_sequence, to_core_arbitrary_float, to_core_fixed_float, to_core_integer,
    to_core_rational, to_host_integer, to_host_rational, trigger_division_by_zero,
    DispatcherBuilder, HostContext, HostValue, Mpf,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn prec(bits: u64) -> Precision {
    Precision::new(bits).unwrap()
}

#[test]
fn test_integer_and_rational_round_trip() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let n: i128 = rng.gen();
        let host = HostValue::int(n);
        assert_eq!(to_host_integer(&to_core_integer(&host).unwrap()), host);

        let num: i64 = rng.gen();
        let den: i64 = rng.gen_range(1..i64::MAX);
        let fraction = HostValue::fraction(num, den);
        let core = to_core_rational(&fraction).unwrap();
        assert_eq!(to_host_rational(&core), fraction);
        assert_eq!(core, Rational::new(Integer::from(num), Integer::from(den)).unwrap());
    }
}

#[test]
fn test_real128_precision_gate() {
    let mut ctx = HostContext::new();
    let value = HostValue::Mpf(ctx.mpf_from_f64(1.25));
    for (bits, ok) in [(53, false), (113, true), (2000, false)] {
        let result = ctx.workprec(prec(bits), |ctx| ctx.to_core_fixed_float(&value));
        assert_eq!(result.is_ok(), ok, "working precision {}", bits);
        if let Err(e) = result {
            assert_eq!(e.kind(), ErrorKind::TypeMismatch);
        }
    }
}

#[test]
fn test_arbitrary_float_target_precision() {
    let mut ctx = HostContext::new();
    ctx.workprec(prec(100), |ctx| {
        let third = HostValue::Mpf(ctx.mpf_from_ratio(&BigInt::from(1), &BigInt::from(3)).unwrap());

        let low = ctx.to_core_arbitrary_float(&third, Some(prec(30))).unwrap();
        assert_eq!(low.prec(), prec(30));

        let err = ctx.to_core_arbitrary_float(&third, Some(prec(300))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PrecisionInsufficient);

        let exact = ctx.to_core_arbitrary_float(&third, None).unwrap();
        assert_eq!(exact.prec(), prec(100));
        assert_eq!(ctx.to_host_arbitrary_float(&exact).unwrap(), third);
    });
}

#[test]
fn test_underflow_asymmetry() {
    let wp = Precision::REAL128;
    let min_normal = HostValue::Mpf(Mpf::pow2(-16382));
    assert_eq!(to_core_fixed_float(&min_normal, wp).unwrap(), Real128::MIN_POSITIVE);

    let below = HostValue::Mpf(Mpf::pow2(-16495).negated());
    let flushed = to_core_fixed_float(&below, wp).unwrap();
    assert!(flushed.is_zero());
    assert!(flushed.is_sign_negative());

    let kept = to_core_arbitrary_float(&below, wp, None).unwrap();
    assert_eq!(
        kept,
        -Real::from_parts(false, &num_bigint::BigUint::from(1u32), -16495, prec(1))
    );
}

#[test]
fn test_rounding_to_finite() {
    let mut ctx = HostContext::new();
    let wide = ctx.workprec(prec(40000), |ctx| {
        ctx.mpf_from_ratio(&BigInt::from(11), &BigInt::from(10)).unwrap()
    });
    assert!(wide.bits() > 113);
    let value = HostValue::Mpf(wide);
    let q = ctx
        .workprec(Precision::REAL128, |ctx| ctx.to_core_fixed_float(&value))
        .unwrap();
    assert!(q.is_finite());
    assert!(q > Real128::ONE && q < Real128::from(1.2));

    let direct = Mpf::from_ratio(&BigInt::from(11), &BigInt::from(10), Precision::REAL128).unwrap();
    let (negative, significand, exponent) = direct.to_parts().unwrap();
    assert_eq!(q, Real128::from_parts(negative, &significand, exponent));
}

#[test]
fn test_overload_fallback() {
    let value = HostValue::Mpf(Mpf::from_f64(2.5));
    let both = DispatcherBuilder::new(Capabilities::all()).with_default_order().build();
    let mut ctx = HostContext::new();
    let out = ctx
        .workprec(prec(2000), |ctx| ctx.dispatch_overload(&both, &value))
        .unwrap();
    assert_eq!(out.kind(), NumericKind::Real);
    assert_eq!(out.as_real().unwrap(), &Real::from_f64(2.5));

    let fixed_only = DispatcherBuilder::new(Capabilities::exact_only().with_fixed_float128(true))
        .with_default_order()
        .build();
    let err = ctx
        .workprec(prec(2000), |ctx| ctx.dispatch_overload(&fixed_only, &value))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert!(matches!(
        err,
        ConversionError::TypeMismatch(TypeMismatchError::NoMatchingOverload { found: "mpf", .. })
    ));

    let at_113 = ctx
        .workprec(Precision::REAL128, |ctx| ctx.dispatch_overload(&both, &value))
        .unwrap();
    assert_eq!(at_113, NumericValue::Real128(Real128::from(2.5)));

    // Below the binary128 normal range: the fixed converter flushes to zero
    // at 113 bits, while at 2000 bits the arbitrary converter keeps it.
    let tiny = HostValue::Mpf(Mpf::pow2(-16495));
    let flushed = ctx
        .workprec(Precision::REAL128, |ctx| ctx.dispatch_overload(&both, &tiny))
        .unwrap();
    assert_eq!(flushed.kind(), NumericKind::Real128);
    assert!(flushed.as_real128().unwrap().is_zero());
    let kept = ctx
        .workprec(prec(2000), |ctx| ctx.dispatch_overload(&both, &tiny))
        .unwrap();
    assert_eq!(kept.kind(), NumericKind::Real);
    let kept = kept.as_real().unwrap();
    assert!(!kept.is_zero());
    assert_eq!(kept, &Real::from_parts(false, &BigUint::from(1u32), -16495, prec(53)));
}

#[test]
fn test_sequence_atomicity() {
    let list = HostValue::List(vec![HostValue::int(1), HostValue::str("two"), HostValue::int(3)]);
    let err = convert_sequence(&list, IntegerConverter, Precision::DOUBLE).unwrap_err();
    assert_eq!(err, ConversionError::category("int", "str"));

    let good = HostValue::List(vec![HostValue::int(1), HostValue::int(2), HostValue::int(3)]);
    let out = convert_sequence(&good, IntegerConverter, Precision::DOUBLE).unwrap();
    assert_eq!(out, vec![Integer::from(1), Integer::from(2), Integer::from(3)]);
    let reversed = convert_sequence(
        &HostValue::List(vec![HostValue::int(3), HostValue::int(2), HostValue::int(1)]),
        IntegerConverter,
        Precision::DOUBLE,
    )
    .unwrap();
    assert_ne!(out, reversed);
}

#[test]
fn test_rational_canonicalization() {
    let a = to_core_rational(&HostValue::fraction(3, -4)).unwrap();
    let b = to_core_rational(&HostValue::fraction(-6, 8)).unwrap();
    assert_eq!(a, b);

    let list = HostValue::List(vec![HostValue::fraction(3, -4), HostValue::fraction(-6, 8)]);
    let both = convert_sequence(&list, RationalConverter, Precision::DOUBLE).unwrap();
    assert_eq!(both[0], both[1]);
}

#[test]
fn test_division_by_zero_is_arithmetic() {
    for _ in 0..5 {
        assert_eq!(trigger_division_by_zero().unwrap_err().kind(), ErrorKind::Arithmetic);
    }
}

#[test]
fn test_rounding_carry_at_top_clamps() {
    let all_ones = (num_bigint::BigUint::from(1u32) << 40000u32) - 1u32;
    let value = HostValue::Mpf(Mpf::from_parts(true, all_ones, 16383 - 39999));
    let q = to_core_fixed_float(&value, Precision::REAL128).unwrap();
    assert_eq!(q, -Real128::MAX);
}
