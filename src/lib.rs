// ============================================================================
// Big Numbers Library
// Arbitrary-precision signed integer arithmetic with pluggable representations
// ============================================================================

//! # Big Numbers
//!
//! Exact signed integer arithmetic over unbounded magnitudes.
//!
//! ## Features
//!
//! - **Immutable value types** - every operation returns a fresh value
//! - **Karatsuba multiplication** with a schoolbook baseline for small operands
//! - **Three interchangeable representations**: decimal digits ([`BigInt`]),
//!   nibble-packed decimal storage ([`PackedBigInt`]), and base-2 digits with
//!   arithmetic shift operators ([`BigIntBits`])
//! - **Truncating division with remainder**, exponentiation, halving
//! - **Exact conversions** from every native integer width
//!
//! [`BigInt`]: domain::BigInt
//! [`PackedBigInt`]: domain::PackedBigInt
//! [`BigIntBits`]: domain::BigIntBits
//!
//! ## Example
//!
//! ```rust
//! use big_numbers::prelude::*;
//!
//! let a: BigInt = "1234567890123456789".parse().unwrap();
//! let b: BigInt = "9876543210987654321".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "11111111101111111110");
//!
//! // Shift through the base-2 representation
//! let six = BigIntBits::from(BigInt::from(6));
//! assert_eq!(BigInt::from(&six >> 1), BigInt::from(3));
//!
//! // Pack for storage, unpack losslessly
//! let packed = PackedBigInt::from(&a);
//! assert_eq!(BigInt::from(&packed), a);
//! ```

pub mod domain;
pub mod engine;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{BigInt, BigIntBits, PackedBigInt, Sign};
    pub use crate::engine::{NumericError, NumericResult};
}
