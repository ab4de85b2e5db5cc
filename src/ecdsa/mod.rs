//! ECDSA signature verification built on [`crate::ecc`] point arithmetic.
//!
//! Only verification is in scope: signing is a straightforward application
//! of the same scalar arithmetic and is left to callers (or a future
//! extension of this module), matching the layering described for the
//! rest of this crate.

mod verify;

pub use verify::{verify, EcdsaError};
