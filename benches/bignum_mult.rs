use ecc_core::bignum::mult;
use ecc_core::ecc::SECP384R1;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

pub fn bench_mult(c: &mut Criterion) {
    let a = SECP384R1.p;
    let mut out = [0u32; 24];

    c.bench_function("bignum mult 12 limbs (secp384r1 field width)", |b| {
        b.iter(|| mult(black_box(a), black_box(a), black_box(&mut out)))
    });
}

criterion_group!(benches, bench_mult);
criterion_main!(benches);
