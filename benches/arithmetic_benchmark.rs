// ============================================================================
// Arithmetic Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Multiplication - Karatsuba vs the schoolbook baseline across sizes
// 2. Addition - carry-propagation cost as magnitudes grow
// 3. Division - long division with remainder
// 4. Packing - nibble codec round-trip
// ============================================================================

use big_numbers::engine::multiply;
use big_numbers::engine::pack;
use big_numbers::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

/// Deterministic pseudo-random decimal operand of the requested digit count.
fn operand(digit_count: usize, seed: u64) -> BigInt {
    let mut state = seed | 1;
    let text: String = (0..digit_count)
        .map(|position| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let digit = (state >> 33) % 10;
            // keep the leading digit nonzero so the operand has full width
            if position == 0 {
                (b'1' + (digit % 9) as u8) as char
            } else {
                (b'0' + digit as u8) as char
            }
        })
        .collect();
    text.parse().expect("generated decimal text")
}

// ============================================================================
// Multiplication Benchmarks
// Karatsuba against the quadratic baseline it replaces
// ============================================================================

fn benchmark_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiplication");

    for digit_count in [8, 64, 256, 1024].iter() {
        let a = operand(*digit_count, 0x5eed);
        let b = operand(*digit_count, 0xcafe);

        group.bench_with_input(
            BenchmarkId::new("Karatsuba", digit_count),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(multiply::karatsuba(a.digits(), b.digits())));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Schoolbook", digit_count),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(multiply::long_multiplication(a.digits(), b.digits())));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Addition Benchmarks
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    for digit_count in [16, 256, 4096].iter() {
        let a = operand(*digit_count, 0xa11ce);
        let b = operand(*digit_count, 0xb0b);

        group.bench_with_input(
            BenchmarkId::from_parameter(digit_count),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(*a + *b));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Division Benchmarks
// ============================================================================

fn benchmark_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("division");

    for digit_count in [16, 64, 256].iter() {
        let dividend = operand(*digit_count, 0xd1);
        let divisor = operand(*digit_count / 2, 0xd2);

        group.bench_with_input(
            BenchmarkId::from_parameter(digit_count),
            &(&dividend, &divisor),
            |bench, (dividend, divisor)| {
                bench.iter(|| {
                    black_box(dividend.checked_div_rem(divisor).expect("nonzero divisor"))
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Packing Benchmarks
// ============================================================================

fn benchmark_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("packing");

    for digit_count in [16, 256, 4096].iter() {
        let value = operand(*digit_count, 0x9ac4);

        group.bench_with_input(
            BenchmarkId::from_parameter(digit_count),
            &value,
            |bench, value| {
                bench.iter(|| {
                    let packed = pack::pack(value.digits());
                    black_box(pack::unpack(&packed))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_multiplication,
    benchmark_addition,
    benchmark_division,
    benchmark_packing
);
criterion_main!(benches);
