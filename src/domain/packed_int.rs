// ============================================================================
// Packed Big Integer
// Storage-optimized wrapper: two decimal digits per byte
// ============================================================================

use super::big_int::BigInt;
use crate::engine::errors::NumericError;
use crate::engine::pack;
use crate::engine::signed::{self, Sign};
use crate::engine::Digits;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Arbitrary-precision signed integer stored nibble-packed.
///
/// Numerically identical to [`BigInt`], at roughly half the storage
/// footprint. Purely a layout change: all arithmetic goes through the
/// unpacked representation, but comparisons work directly on the packed
/// bytes, which order like magnitudes for canonical values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackedBigInt {
    sign: Sign,
    packed: Digits,
}

impl PackedBigInt {
    /// The nibble-packed storage bytes, most significant first.
    #[inline]
    pub fn packed_bytes(&self) -> &[u8] {
        &self.packed
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }
}

impl From<&BigInt> for PackedBigInt {
    fn from(value: &BigInt) -> Self {
        Self { sign: value.sign(), packed: pack::pack(value.digits()) }
    }
}

impl From<BigInt> for PackedBigInt {
    fn from(value: BigInt) -> Self {
        Self::from(&value)
    }
}

impl From<&PackedBigInt> for BigInt {
    fn from(value: &PackedBigInt) -> Self {
        BigInt::from_parts(value.sign, pack::unpack(&value.packed))
    }
}

impl From<PackedBigInt> for BigInt {
    fn from(value: PackedBigInt) -> Self {
        Self::from(&value)
    }
}

impl FromStr for PackedBigInt {
    type Err = NumericError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.parse::<BigInt>().map(Self::from)
    }
}

impl fmt::Display for PackedBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BigInt::from(self), f)
    }
}

impl PartialOrd for PackedBigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PackedBigInt {
    /// Packed bytes of canonical values compare like digit sequences, so no
    /// unpacking is needed.
    fn cmp(&self, other: &Self) -> Ordering {
        signed::compare(self.sign, &self.packed, other.sign, &other.packed)
    }
}
