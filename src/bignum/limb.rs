//! Word-level primitives shared by the bignum engine.
//!
//! These are the only operations in the crate that reason about a single
//! limb's carry arithmetic; everything above this module is built out of
//! them.

use super::{Limb, WideLimb};

/// Adds two limbs and an incoming carry, returning `(sum, carry_out)`.
#[inline(always)]
pub(crate) fn add_with_carry(a: Limb, b: Limb, carry_in: Limb) -> (Limb, Limb) {
    let wide = a as WideLimb + b as WideLimb + carry_in as WideLimb;
    (wide as Limb, (wide >> 32) as Limb)
}

/// Subtracts `b` and an incoming borrow from `a`, returning `(diff, borrow_out)`.
#[inline(always)]
pub(crate) fn sub_with_borrow(a: Limb, b: Limb, borrow_in: Limb) -> (Limb, Limb) {
    let wide = (a as WideLimb)
        .wrapping_sub(b as WideLimb)
        .wrapping_sub(borrow_in as WideLimb);
    let borrow_out = (wide >> 63) as Limb & 1;
    (wide as Limb, borrow_out)
}

/// Multiplies two limbs and adds an accumulator and a carry-in, returning
/// `(low, high)` such that `low + high*2^32 == a*b + add + carry_in`.
#[inline(always)]
pub(crate) fn mul_wide(a: Limb, b: Limb, add: Limb, carry_in: Limb) -> (Limb, Limb) {
    let wide = a as WideLimb * b as WideLimb + add as WideLimb + carry_in as WideLimb;
    (wide as Limb, (wide >> 32) as Limb)
}
