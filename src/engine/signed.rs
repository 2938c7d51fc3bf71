// ============================================================================
// Sign-Aware Integer Engine
// Composes the digit primitives into signed arithmetic
// ============================================================================
//
// Magnitudes at this layer are canonical big-endian digit sequences paired
// with an explicit sign. The value zero is always Positive; every operation
// that could produce a signed zero normalizes it away.

use super::digits::{self, Digits, DECIMAL_BASE};
use super::errors::{NumericError, NumericResult};
use super::multiply;
use smallvec::smallvec;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a magnitude. Zero is canonically `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    pub fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }

    /// The opposite sign.
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product: equal signs give a positive result.
    #[inline]
    pub fn combined(self, other: Self) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Force the canonical `Positive` sign onto a zero magnitude.
fn normalized(sign: Sign, digits: Digits) -> (Sign, Digits) {
    if digits::is_zero(&digits) {
        (Sign::Positive, digits)
    } else {
        (sign, digits)
    }
}

/// Signed addition. Matching signs add magnitudes and keep the sign;
/// opposite signs subtract magnitudes, and the result takes the sign of
/// whichever operand had the larger magnitude.
pub fn add(lhs_sign: Sign, lhs: &[u8], rhs_sign: Sign, rhs: &[u8], base: u8) -> (Sign, Digits) {
    if lhs_sign == rhs_sign {
        return normalized(lhs_sign, digits::add(lhs, rhs, base));
    }
    match digits::compare(lhs, rhs) {
        Ordering::Equal => (Sign::Positive, smallvec![0]),
        Ordering::Greater => normalized(lhs_sign, digits::sub(lhs, rhs, base)),
        Ordering::Less => normalized(rhs_sign, digits::sub(lhs, rhs, base)),
    }
}

/// Signed subtraction: flip the subtrahend's sign and add.
pub fn subtract(lhs_sign: Sign, lhs: &[u8], rhs_sign: Sign, rhs: &[u8], base: u8) -> (Sign, Digits) {
    add(lhs_sign, lhs, rhs_sign.flipped(), rhs, base)
}

/// Three-way signed comparison: a differing sign decides immediately
/// (negative sorts less); equal signs defer to magnitude order, reversed
/// when both operands are negative.
pub fn compare(lhs_sign: Sign, lhs: &[u8], rhs_sign: Sign, rhs: &[u8]) -> Ordering {
    match (lhs_sign, rhs_sign) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        (Sign::Positive, Sign::Positive) => digits::compare(lhs, rhs),
        (Sign::Negative, Sign::Negative) => digits::compare(lhs, rhs).reverse(),
    }
}

/// Signed multiplication over decimal magnitudes.
pub fn multiply(lhs_sign: Sign, lhs: &[u8], rhs_sign: Sign, rhs: &[u8]) -> (Sign, Digits) {
    normalized(lhs_sign.combined(rhs_sign), multiply::karatsuba(lhs, rhs))
}

/// Exponentiation by repeated multiplication. Exponent zero yields one;
/// exponent one, or a base of zero or positive one, returns the base
/// unchanged. Negative one is not a fixed point: its powers alternate
/// through the multiplication loop.
pub fn power(sign: Sign, base_digits: &[u8], exponent: u32) -> (Sign, Digits) {
    if exponent == 0 {
        return (Sign::Positive, smallvec![1]);
    }
    let base_value = Digits::from_slice(base_digits);
    if exponent == 1
        || digits::is_zero(&base_value)
        || (sign == Sign::Positive && base_value[..] == [1])
    {
        return (sign, base_value);
    }

    let mut result_sign = sign;
    let mut result = base_value;
    for _ in 1..exponent {
        let (next_sign, next) = multiply(result_sign, &result, sign, base_digits);
        result_sign = next_sign;
        result = next;
    }
    (result_sign, result)
}

/// Divide a decimal magnitude by two with a single digit sweep, carrying a
/// 0/1 remainder into the next digit.
pub(crate) fn halve_digits(value: &[u8]) -> (Digits, u8) {
    let mut quotient: Digits = smallvec![0; value.len()];
    let mut remainder = 0;
    for (slot, &digit) in quotient.iter_mut().zip(value) {
        let current = remainder * DECIMAL_BASE + digit;
        *slot = current / 2;
        remainder = current % 2;
    }
    (digits::trim(quotient), remainder)
}

/// Halve a signed decimal value, yielding `(quotient, remainder)` with
/// `value = 2*quotient + remainder` and the remainder signed to match the
/// input.
pub fn halve_with_remainder(sign: Sign, value: &[u8]) -> ((Sign, Digits), i8) {
    let (quotient, remainder) = halve_digits(value);
    let signed_remainder = if sign.is_negative() {
        -(remainder as i8)
    } else {
        remainder as i8
    };
    (normalized(sign, quotient), signed_remainder)
}

/// Truncating long division with remainder over decimal values. Brings the
/// dividend down one digit at a time; each quotient digit falls out of at
/// most nine subtractions of the divisor. The quotient takes the product
/// sign, the remainder the dividend's sign.
pub fn divide(
    lhs_sign: Sign,
    lhs: &[u8],
    rhs_sign: Sign,
    rhs: &[u8],
) -> NumericResult<((Sign, Digits), (Sign, Digits))> {
    if digits::is_zero(rhs) {
        return Err(NumericError::DivisionByZero);
    }
    tracing::debug!(dividend_len = lhs.len(), divisor_len = rhs.len(), "long division");

    let mut quotient: Digits = smallvec![0; lhs.len()];
    let mut remainder: Digits = smallvec![0];
    for (slot, &digit) in quotient.iter_mut().zip(lhs) {
        let mut current = digits::shift(&remainder, 1, false);
        if let Some(last) = current.last_mut() {
            *last = digit;
        }
        let mut current = digits::trim(current);

        let mut quotient_digit = 0;
        while digits::compare(&current, rhs) != Ordering::Less {
            current = digits::sub(&current, rhs, DECIMAL_BASE);
            quotient_digit += 1;
        }
        *slot = quotient_digit;
        remainder = current;
    }

    let quotient = normalized(lhs_sign.combined(rhs_sign), digits::trim(quotient));
    let remainder = normalized(lhs_sign, remainder);
    Ok((quotient, remainder))
}
