// ============================================================================
// Domain Values Module
// The wrapper value types consumers hold and pass around
// ============================================================================

pub mod big_int;
pub mod bit_int;
pub mod packed_int;

pub use big_int::BigInt;
pub use bit_int::BigIntBits;
pub use packed_int::PackedBigInt;

// Re-export the sign type the wrappers expose
pub use crate::engine::signed::Sign;
