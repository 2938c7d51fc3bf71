// ============================================================================
// Bit Big Integer
// Base-2 wrapper exposing arithmetic shift operators
// ============================================================================

use super::big_int::BigInt;
use crate::engine::bits;
use crate::engine::digits::{self, BINARY_BASE, DECIMAL_BASE};
use crate::engine::errors::NumericError;
use crate::engine::signed::{self, Sign};
use crate::engine::Digits;
use smallvec::smallvec;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Shl, Shr, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arbitrary-precision signed integer expressed positionally in base 2.
///
/// Numerically equivalent to [`BigInt`]; the base-2 digit sequence makes
/// arithmetic shifting a structural operation. Shifts follow fixed-width
/// two's-complement semantics extended to unbounded width: `>>` floors
/// toward negative infinity and saturates negative values at `-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BigIntBits {
    sign: Sign,
    bits: Digits,
}

impl BigIntBits {
    fn from_parts(sign: Sign, bits: Digits) -> Self {
        let bits = digits::trim(bits);
        let sign = if digits::is_zero(&bits) { Sign::Positive } else { sign };
        Self { sign, bits }
    }

    /// The canonical big-endian bit sequence.
    #[inline]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&BigInt> for BigIntBits {
    /// Decimal to binary by repeated halving; each halving contributes one
    /// bit, least significant first.
    fn from(value: &BigInt) -> Self {
        let mut bits = Digits::new();
        let mut quotient = Digits::from_slice(value.digits());
        while !digits::is_zero(&quotient) {
            let (halved, remainder) = signed::halve_digits(&quotient);
            bits.push(remainder);
            quotient = halved;
        }
        if bits.is_empty() {
            bits.push(0);
        }
        bits.reverse();
        Self::from_parts(value.sign(), bits)
    }
}

impl From<BigInt> for BigIntBits {
    fn from(value: BigInt) -> Self {
        Self::from(&value)
    }
}

impl From<&BigIntBits> for BigInt {
    /// Binary to decimal by a double-and-add sweep over the bits, most
    /// significant first.
    fn from(value: &BigIntBits) -> Self {
        let mut accumulated: Digits = smallvec![0];
        for &bit in value.bits.iter() {
            accumulated = digits::add(&accumulated, &accumulated, DECIMAL_BASE);
            if bit == 1 {
                accumulated = digits::add(&accumulated, &[1], DECIMAL_BASE);
            }
        }
        BigInt::from_parts(value.sign, accumulated)
    }
}

impl From<BigIntBits> for BigInt {
    fn from(value: BigIntBits) -> Self {
        Self::from(&value)
    }
}

impl FromStr for BigIntBits {
    type Err = NumericError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse::<BigInt>().map(Self::from)
    }
}

impl fmt::Display for BigIntBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BigInt::from(self), f)
    }
}

// ============================================================================
// Ordering
// ============================================================================

impl PartialOrd for BigIntBits {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigIntBits {
    fn cmp(&self, other: &Self) -> Ordering {
        signed::compare(self.sign, &self.bits, other.sign, &other.bits)
    }
}

// ============================================================================
// Operators
// ============================================================================

impl Shl<u32> for &BigIntBits {
    type Output = BigIntBits;

    fn shl(self, count: u32) -> BigIntBits {
        let (sign, bits) = bits::shift_left(self.sign, &self.bits, count as usize);
        BigIntBits::from_parts(sign, bits)
    }
}

impl Shr<u32> for &BigIntBits {
    type Output = BigIntBits;

    fn shr(self, count: u32) -> BigIntBits {
        let (sign, bits) = bits::shift_right(self.sign, &self.bits, count as usize);
        BigIntBits::from_parts(sign, bits)
    }
}

impl Add for &BigIntBits {
    type Output = BigIntBits;

    fn add(self, rhs: &BigIntBits) -> BigIntBits {
        let (sign, bits) = signed::add(self.sign, &self.bits, rhs.sign, &rhs.bits, BINARY_BASE);
        BigIntBits::from_parts(sign, bits)
    }
}

impl Sub for &BigIntBits {
    type Output = BigIntBits;

    fn sub(self, rhs: &BigIntBits) -> BigIntBits {
        let (sign, bits) = signed::subtract(self.sign, &self.bits, rhs.sign, &rhs.bits, BINARY_BASE);
        BigIntBits::from_parts(sign, bits)
    }
}

impl Mul for &BigIntBits {
    type Output = BigIntBits;

    /// Multiplication routes through the decimal representation, where the
    /// Karatsuba engine lives.
    fn mul(self, rhs: &BigIntBits) -> BigIntBits {
        BigIntBits::from(&(&BigInt::from(self) * &BigInt::from(rhs)))
    }
}

macro_rules! impl_owned_ops {
    ($($trait:ident :: $method:ident),*) => {$(
        impl $trait for BigIntBits {
            type Output = BigIntBits;

            fn $method(self, rhs: BigIntBits) -> BigIntBits {
                $trait::$method(&self, &rhs)
            }
        }
    )*};
}

impl_owned_ops!(Add::add, Sub::sub, Mul::mul);

impl Shl<u32> for BigIntBits {
    type Output = BigIntBits;

    fn shl(self, count: u32) -> BigIntBits {
        &self << count
    }
}

impl Shr<u32> for BigIntBits {
    type Output = BigIntBits;

    fn shr(self, count: u32) -> BigIntBits {
        &self >> count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn bits_of(value: i64) -> BigIntBits {
        BigIntBits::from(BigInt::from(value))
    }

    #[test]
    fn test_conversion_round_trips() {
        for text in ["0", "1", "6", "255", "-1", "-6", "-255", "1234567890123456789"] {
            let value: BigInt = text.parse().expect("valid decimal text");
            assert_eq!(BigInt::from(BigIntBits::from(&value)), value, "{}", text);
        }
    }

    #[test]
    fn test_bit_patterns() {
        assert_eq!(bits_of(6).bits(), [1, 1, 0]);
        assert_eq!(bits_of(1).bits(), [1]);
        assert_eq!(bits_of(0).bits(), [0]);
        assert_eq!(bits_of(-5).bits(), [1, 0, 1]);
        assert!(bits_of(-5).is_negative());
        assert!(!bits_of(0).is_negative());
    }

    #[test]
    fn test_shift_scenarios() {
        assert_eq!(bits_of(6) >> 1, bits_of(3));
        assert_eq!(bits_of(1) << 3, bits_of(8));
        for count in [1u32, 7, 100] {
            assert_eq!(bits_of(-1) >> count, bits_of(-1), "-1 >> {}", count);
        }
    }

    #[test]
    fn test_addition_and_subtraction_in_base_two() {
        assert_eq!(&bits_of(5) + &bits_of(3), bits_of(8));
        assert_eq!(&bits_of(5) + &bits_of(-3), bits_of(2));
        assert_eq!(&bits_of(3) - &bits_of(5), bits_of(-2));
        assert_eq!(&bits_of(-5) - &bits_of(-5), bits_of(0));
    }

    #[test]
    fn test_multiplication() {
        assert_eq!(&bits_of(12) * &bits_of(-34), bits_of(-408));
        assert_eq!(bits_of(0) * bits_of(99), bits_of(0));
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(bits_of(-10) < bits_of(-2));
        assert!(bits_of(-2) < bits_of(0));
        assert!(bits_of(0) < bits_of(9));
        assert_eq!(bits_of(-120).to_string(), "-120");
        assert_eq!("42".parse::<BigIntBits>().expect("valid").to_string(), "42");
    }

    quickcheck! {
        fn prop_round_trip_preserves_value(value: i64) -> bool {
            let decimal = BigInt::from(value);
            BigInt::from(BigIntBits::from(&decimal)) == decimal
        }

        fn prop_shifts_match_native(value: i32, count: u8) -> bool {
            let count = (count % 24) as u32;
            let value = value as i64;
            bits_of(value) >> count == bits_of(value >> count)
                && bits_of(value) << count == bits_of(value << count)
        }

        fn prop_base_two_addition_matches_native(a: i32, b: i32) -> bool {
            &bits_of(a as i64) + &bits_of(b as i64) == bits_of(a as i64 + b as i64)
        }
    }
}
