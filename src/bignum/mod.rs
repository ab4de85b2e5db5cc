//! Arbitrary-precision arithmetic on little-endian `u32` limb slices.
//!
//! Every operation takes explicit-length slices and validates the lengths
//! its contract names before touching the limbs; none of the functions in
//! this module allocate.

mod core;
mod limb;
mod modular;

pub use self::core::{
    BignumError, add, compare, compare_len_diff, div, get_msb_set, inc, is_null, leftshift,
    modulo, msb_set_in_word, mult, negate, rightshift, set_bit, square, sub,
};
pub use modular::ModCtx;

/// Unit of bignum storage: an unsigned 32-bit word.
pub type Limb = u32;

/// Carry-aware intermediate: an unsigned 64-bit word.
pub type WideLimb = u64;
