// ============================================================================
// Magnitude Multiplication
// Schoolbook baseline and recursive Karatsuba divide-and-conquer
// ============================================================================

use super::digits::{self, Digits, DECIMAL_BASE};
use smallvec::smallvec;

/// Below this operand length the split/recombine bookkeeping costs more than
/// the quadratic loop it saves, so the recursion bottoms out on the
/// schoolbook path.
const KARATSUBA_CUTOFF: usize = 8;

/// Schoolbook multiplication: accumulate partial digit products with carry
/// propagation. Quadratic, but exact for any operand pair; also serves as
/// the cross-check oracle for the Karatsuba path.
pub fn long_multiplication(a: &[u8], b: &[u8]) -> Digits {
    // little-endian scratch accumulator; a product never exceeds the
    // combined operand length
    let mut accumulator = vec![0u32; a.len() + b.len()];

    for (i, &x) in a.iter().rev().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (j, &y) in b.iter().rev().enumerate() {
            let total = accumulator[i + j] + x as u32 * y as u32 + carry;
            accumulator[i + j] = total % DECIMAL_BASE as u32;
            carry = total / DECIMAL_BASE as u32;
        }
        let mut position = i + b.len();
        while carry > 0 {
            let total = accumulator[position] + carry;
            accumulator[position] = total % DECIMAL_BASE as u32;
            carry = total / DECIMAL_BASE as u32;
            position += 1;
        }
    }

    let product: Digits = accumulator.iter().rev().map(|&d| d as u8).collect();
    digits::trim(product)
}

/// Karatsuba multiplication over unsigned base-10 magnitudes. The sign is
/// combined separately by the caller.
pub fn karatsuba(a: &[u8], b: &[u8]) -> Digits {
    tracing::trace!(lhs_len = a.len(), rhs_len = b.len(), "karatsuba multiply");

    let common_len = a.len().max(b.len());
    let x = left_pad(a, common_len);
    let y = left_pad(b, common_len);
    karatsuba_padded(&x, &y)
}

fn left_pad(digits: &[u8], len: usize) -> Digits {
    let mut padded: Digits = smallvec![0; len - digits.len()];
    padded.extend_from_slice(digits);
    padded
}

/// Recursive step over equal-length operands. Splitting at m = ceil(len/2)
/// gives x = x1 * 10^m + x2, so
///
///   x * y = (x1*y1) * 10^(2m) + ((x1+x2)*(y1+y2) - x1*y1 - x2*y2) * 10^m + x2*y2
///
/// which trades four half-length products for three.
fn karatsuba_padded(x: &[u8], y: &[u8]) -> Digits {
    debug_assert_eq!(x.len(), y.len());

    let len = x.len();
    if len <= KARATSUBA_CUTOFF {
        return long_multiplication(x, y);
    }

    let m = len / 2 + len % 2;
    let split = len - m;
    let (x1, x2) = x.split_at(split);
    let (y1, y2) = y.split_at(split);

    let high = karatsuba_padded(x1, y1);
    let low = karatsuba_padded(x2, y2);

    let x_sum = digits::add(x1, x2, DECIMAL_BASE);
    let y_sum = digits::add(y1, y2, DECIMAL_BASE);
    let sum_len = x_sum.len().max(y_sum.len());
    let cross = karatsuba_padded(&left_pad(&x_sum, sum_len), &left_pad(&y_sum, sum_len));
    let middle = digits::sub(&cross, &digits::add(&high, &low, DECIMAL_BASE), DECIMAL_BASE);

    let recombined = digits::add(
        &digits::shift(&high, 2 * m as isize, false),
        &digits::shift(&middle, m as isize, false),
        DECIMAL_BASE,
    );
    digits::add(&recombined, &low, DECIMAL_BASE)
}
