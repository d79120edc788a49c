use crate::{eval, Error, Span};

use super::pow;

fn assert(expected: i64, input: &str) {
    match eval(input) {
        Ok(val) => assert_eq!(expected, val, "input `{input}`"),
        Err(e) => panic!("input `{input}`: {e:?}"),
    }
}

fn assert_err(expected: Error, input: &str) {
    match eval(input) {
        Ok(val) => panic!("input `{input}`: expected {expected:?} found {val}"),
        Err(e) => assert_eq!(expected, e, "input `{input}`"),
    }
}

#[test]
fn truncating_division() {
    assert(4, "12 / 3");
    assert(2, "7 / 3");
    assert(-2, "-7 / 3");
    assert(-2, "7 / -3");
}

#[test]
fn divide_by_zero() {
    assert_err(Error::DivideByZero(Span::pos(0), Span::of(4, 9)), "1 / (2-2)");
}

#[test]
fn factorial() {
    assert(1, "0!");
    assert(1, "1!");
    assert(6, "3!");
    assert(8 * 7 * 6 * 5 * 4 * 3 * 2, "8!");
    assert(2_432_902_008_176_640_000, "20!");
}

#[test]
fn factorial_overflow() {
    assert_err(Error::Overflow(Span::of(0, 3)), "21!");
}

#[test]
fn factorial_negative() {
    assert_err(Error::NegativeFactorial(Span::of(0, 5)), "(-3)!");
    // the sign applies after the factorial
    assert(-6, "-3!");
}

#[test]
fn power() {
    assert(1, "0^0");
    assert(1, "7^0");
    assert(64, "4^3");
    assert(-8, "(-2)^3");
    assert(16, "(-2)^4");
    assert(1 << 62, "2^62");
    assert(262144, "4^3^2");
}

#[test]
fn power_overflow() {
    assert_err(Error::Overflow(Span::of(0, 4)), "2^63");
    assert_err(Error::Overflow(Span::of(0, 12)), "3037000500^2");
}

#[test]
fn negative_exponent() {
    assert_err(Error::NegativeExponent(Span::of(2, 4)), "2^-1");
}

#[test]
fn squaring_stops_before_overflow() {
    assert_eq!(Some(3_037_000_499), pow(3_037_000_499, 1));
    assert_eq!(Some(i64::MAX), pow(i64::MAX, 1));
    assert_eq!(Some(i64::MIN), pow(-2, 63));
    assert_eq!(None, pow(2, 63));
}

#[test]
fn arithmetic_overflow() {
    assert_err(Error::Overflow(Span::of(0, 23)), "9223372036854775807 + 1");
    assert_err(Error::Overflow(Span::of(0, 28)), "-9223372036854775807 - 1 - 1");
    assert(i64::MIN, "-9223372036854775807 - 1");
    assert_err(Error::Overflow(Span::of(0, 31)), "(-9223372036854775807 - 1) / -1");
}
