//! Cryptographic core: big-integer arithmetic, elliptic-curve point
//! arithmetic, and ECDSA signature verification.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. All
//! components are explicit in their semantics and suitable for use as the
//! software backend of a larger cryptographic stack, including one with a
//! hardware accelerator underneath.
//!
//! # Module overview
//!
//! - `bignum`
//!   Fixed-width, sign-magnitude-free unsigned integer arithmetic over
//!   little-endian `u32` limb slices: comparison, addition, subtraction,
//!   multiplication, division, shifts, and modular arithmetic scoped by a
//!   borrowed modulus (`ModCtx`).
//!
//! - `ecc`
//!   Elliptic-curve point arithmetic on short Weierstrass curves in
//!   Jacobian coordinates, scalar multiplication via a co-Z ladder, and
//!   key pair generation. Ships the NIST P-256/P-384/P-521 curve
//!   parameters and accepts user-supplied curves of the same shape.
//!
//! - `ecdsa`
//!   ECDSA signature verification using a windowed double scalar
//!   multiplication (Shamir's trick) over the curves in `ecc`.
//!
//! - `ops`
//!   The dispatch abstraction: capability traits implemented by the
//!   software backend, so a hardware backend can override any subset of
//!   operations without changing call sites above this layer.
//!
//! - `rng`
//!   A ChaCha20-based deterministic random bit generator, seeded from the
//!   operating system, used by key generation and by this crate's own
//!   tests. Exposed behind the [`rng::RngSource`] contract so callers can
//!   substitute a different source.
//!
//! - `os`
//!   Platform-specific entropy gathering used only by `rng`.
//!
//! # Design goals
//!
//! - No heap allocation in the arithmetic core.
//! - No panics on input-dependent failure paths; errors are returned, not
//!   raised.
//! - Disjoint-buffer aliasing rules enforced by the type system wherever
//!   the underlying algorithm requires it, and permitted explicitly where
//!   it doesn't (e.g. in-place addition).

pub mod bignum;
pub mod ecc;
pub mod ecdsa;
pub mod ops;
pub mod rng;

mod os;
