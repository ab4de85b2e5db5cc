//! Dispatch abstraction over the bignum, ECC, and ECDSA layers.
//!
//! The reference design routes every operation through a struct of
//! function pointers (`Ops`) so a hardware accelerator can override any
//! subset of primitives without consumers linking against the software
//! implementation directly. This crate expresses that as three capability
//! traits — [`BignumOps`], [`EccOps`], [`EcdsaOps`] — each with every slot
//! given a default implementation that reports [`bignum::BignumError::ErrApiEntry`]
//! (or the equivalent variant on the other two error types). [`SoftwareBackend`]
//! overrides every slot by delegating to the free functions in [`crate::bignum`],
//! [`crate::ecc`], and [`crate::ecdsa`]; a hardware backend implements the
//! traits directly and only needs to override the operations it actually
//! accelerates.
//!
//! [`Ctx`] bundles trait objects for all three capability sets behind a
//! single handle, mirroring the reference design's single `Ctx` parameter
//! threaded through every call. `ecc` and `ecdsa`'s public functions take a
//! `Ctx` and call `ctx.bignum()`/`ctx.ecc()` rather than the free functions
//! in those modules directly — including for calls between two functions of
//! the same layer (e.g. `mult_coz` doubling via `ctx.ecc().double_jacobian`)
//! — so swapping in a hardware `Ctx` changes every call site at once, down
//! to the last field operation.

use crate::bignum::{self, BignumError, ModCtx};
use crate::ecc::{self, AffinePoint, Curve, EccError, JacobianPoint, KeygenError};
use crate::ecdsa::{self, EcdsaError};
use crate::rng::RngSource;

/// L0/L1 capability set: limb primitives and the bignum engine.
///
/// Every method defaults to [`BignumError::ErrApiEntry`] so a backend that
/// only accelerates, say, `mod_mult` does not need to stub out the rest —
/// callers see a well-defined error rather than a missing symbol.
pub trait BignumOps {
    fn compare(&self, a: &[u32], b: &[u32]) -> Result<i32, BignumError> {
        let _ = (a, b);
        Err(BignumError::ErrApiEntry)
    }

    fn compare_len_diff(&self, a: &[u32], b: &[u32]) -> Result<i32, BignumError> {
        let _ = (a, b);
        Err(BignumError::ErrApiEntry)
    }

    fn is_null(&self, a: &[u32]) -> Result<bool, BignumError> {
        let _ = a;
        Err(BignumError::ErrApiEntry)
    }

    fn msb_set_in_word(&self, w: u64) -> Result<u32, BignumError> {
        let _ = w;
        Err(BignumError::ErrApiEntry)
    }

    fn get_msb_set(&self, a: &[u32]) -> Result<u32, BignumError> {
        let _ = a;
        Err(BignumError::ErrApiEntry)
    }

    fn add(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<u32, BignumError> {
        let _ = (a, b, out);
        Err(BignumError::ErrApiEntry)
    }

    fn sub(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<u32, BignumError> {
        let _ = (a, b, out);
        Err(BignumError::ErrApiEntry)
    }

    fn inc(&self, a: &mut [u32]) -> Result<u32, BignumError> {
        let _ = &a;
        Err(BignumError::ErrApiEntry)
    }

    fn negate(&self, a: &mut [u32]) -> Result<u32, BignumError> {
        let _ = &a;
        Err(BignumError::ErrApiEntry)
    }

    fn leftshift(&self, input: &[u32], out: &mut [u32], shift: usize) -> Result<(), BignumError> {
        let _ = (input, out, shift);
        Err(BignumError::ErrApiEntry)
    }

    fn rightshift(&self, input: &[u32], out: &mut [u32], shift: usize) -> Result<(), BignumError> {
        let _ = (input, out, shift);
        Err(BignumError::ErrApiEntry)
    }

    fn set_bit(&self, a: &mut [u32], bit_index: usize) -> Result<(), BignumError> {
        let _ = (&a, bit_index);
        Err(BignumError::ErrApiEntry)
    }

    fn mult(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (a, b, out);
        Err(BignumError::ErrApiEntry)
    }

    fn square(&self, a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (a, out);
        Err(BignumError::ErrApiEntry)
    }

    fn div(
        &self,
        dividend: &[u32],
        divisor: &[u32],
        quotient: Option<&mut [u32]>,
        remainder: Option<&mut [u32]>,
    ) -> Result<(), BignumError> {
        let _ = (dividend, divisor, quotient, remainder);
        Err(BignumError::ErrApiEntry)
    }

    fn modulo(&self, a: &[u32], m: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (a, m, out);
        Err(BignumError::ErrApiEntry)
    }

    fn mod_add(&self, m: &[u32], a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (m, a, b, out);
        Err(BignumError::ErrApiEntry)
    }

    fn mod_sub(&self, m: &[u32], a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (m, a, b, out);
        Err(BignumError::ErrApiEntry)
    }

    fn mod_neg(&self, m: &[u32], a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (m, a, out);
        Err(BignumError::ErrApiEntry)
    }

    fn mod_mult(&self, m: &[u32], a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (m, a, b, out);
        Err(BignumError::ErrApiEntry)
    }

    fn mod_square(&self, m: &[u32], a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (m, a, out);
        Err(BignumError::ErrApiEntry)
    }

    fn mod_inv(&self, m: &[u32], a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        let _ = (m, a, out);
        Err(BignumError::ErrApiEntry)
    }
}

/// L2 capability set: curve point arithmetic and key generation.
///
/// Every method here takes the same [`Ctx`] the caller was given, so a
/// backend's own implementation (or the free functions it might delegate
/// to) keeps routing field arithmetic through `ctx.bignum()` rather than
/// hardwiring the software engine.
pub trait EccOps {
    fn affine_to_jacobian(&self, curve: &Curve, p: &AffinePoint) -> Result<JacobianPoint, EccError> {
        let _ = (curve, p);
        Err(EccError::ErrApiEntry)
    }

    fn jacobian_to_affine(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        p: &JacobianPoint,
    ) -> Result<AffinePoint, EccError> {
        let _ = (ctx, curve, p);
        Err(EccError::ErrApiEntry)
    }

    fn double_jacobian(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        p: &JacobianPoint,
    ) -> Result<JacobianPoint, EccError> {
        let _ = (ctx, curve, p);
        Err(EccError::ErrApiEntry)
    }

    fn add_jacobian(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        p1: &JacobianPoint,
        p2: &JacobianPoint,
    ) -> Result<JacobianPoint, EccError> {
        let _ = (ctx, curve, p1, p2);
        Err(EccError::ErrApiEntry)
    }

    fn mult_coz(&self, ctx: Ctx<'_>, curve: &Curve, k: &[u32]) -> Result<JacobianPoint, EccError> {
        let _ = (ctx, curve, k);
        Err(EccError::ErrApiEntry)
    }

    fn point_on_curve(&self, ctx: Ctx<'_>, curve: &Curve, p: &AffinePoint) -> Result<(), EccError> {
        let _ = (ctx, curve, p);
        Err(EccError::ErrApiEntry)
    }

    fn pubkey_generation(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        priv_key: &[u32],
    ) -> Result<AffinePoint, EccError> {
        let _ = (ctx, curve, priv_key);
        Err(EccError::ErrApiEntry)
    }

    fn keypair_generation(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        rng: &mut dyn RngSource,
    ) -> Result<([u32; ecc::MAX_CURVE_LIMBS], AffinePoint), KeygenError> {
        let _ = (ctx, curve, rng);
        Err(KeygenError::Ecc(EccError::ErrApiEntry))
    }
}

/// L3 capability set: ECDSA signature verification.
pub trait EcdsaOps {
    fn verify(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        q: &AffinePoint,
        r: &[u8],
        s: &[u8],
        hash: &[u8],
    ) -> Result<(), EcdsaError> {
        let _ = (ctx, curve, q, r, s, hash);
        Err(EcdsaError::ErrApiEntry)
    }
}

/// The pure-software backend: every slot delegates to the free functions
/// in [`crate::bignum`], [`crate::ecc`], and [`crate::ecdsa`]. Holds no
/// state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareBackend;

impl BignumOps for SoftwareBackend {
    fn compare(&self, a: &[u32], b: &[u32]) -> Result<i32, BignumError> {
        bignum::compare(a, b)
    }

    fn compare_len_diff(&self, a: &[u32], b: &[u32]) -> Result<i32, BignumError> {
        Ok(bignum::compare_len_diff(a, b))
    }

    fn is_null(&self, a: &[u32]) -> Result<bool, BignumError> {
        Ok(bignum::is_null(a))
    }

    fn msb_set_in_word(&self, w: u64) -> Result<u32, BignumError> {
        Ok(bignum::msb_set_in_word(w))
    }

    fn get_msb_set(&self, a: &[u32]) -> Result<u32, BignumError> {
        Ok(bignum::get_msb_set(a))
    }

    fn add(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<u32, BignumError> {
        bignum::add(a, b, out)
    }

    fn sub(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<u32, BignumError> {
        bignum::sub(a, b, out)
    }

    fn inc(&self, a: &mut [u32]) -> Result<u32, BignumError> {
        Ok(bignum::inc(a))
    }

    fn negate(&self, a: &mut [u32]) -> Result<u32, BignumError> {
        Ok(bignum::negate(a))
    }

    fn leftshift(&self, input: &[u32], out: &mut [u32], shift: usize) -> Result<(), BignumError> {
        bignum::leftshift(input, out, shift)
    }

    fn rightshift(&self, input: &[u32], out: &mut [u32], shift: usize) -> Result<(), BignumError> {
        bignum::rightshift(input, out, shift)
    }

    fn set_bit(&self, a: &mut [u32], bit_index: usize) -> Result<(), BignumError> {
        bignum::set_bit(a, bit_index)
    }

    fn mult(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        bignum::mult(a, b, out)
    }

    fn square(&self, a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        bignum::square(a, out)
    }

    fn div(
        &self,
        dividend: &[u32],
        divisor: &[u32],
        quotient: Option<&mut [u32]>,
        remainder: Option<&mut [u32]>,
    ) -> Result<(), BignumError> {
        bignum::div(dividend, divisor, quotient, remainder)
    }

    fn modulo(&self, a: &[u32], m: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        bignum::modulo(a, m, out)
    }

    fn mod_add(&self, m: &[u32], a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        ModCtx::set_modulus(m)?.mod_add(a, b, out)
    }

    fn mod_sub(&self, m: &[u32], a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        ModCtx::set_modulus(m)?.mod_sub(a, b, out)
    }

    fn mod_neg(&self, m: &[u32], a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        ModCtx::set_modulus(m)?.mod_neg(a, out)
    }

    fn mod_mult(&self, m: &[u32], a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        ModCtx::set_modulus(m)?.mod_mult(a, b, out)
    }

    fn mod_square(&self, m: &[u32], a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        ModCtx::set_modulus(m)?.mod_square(a, out)
    }

    fn mod_inv(&self, m: &[u32], a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        ModCtx::set_modulus(m)?.mod_inv(a, out)
    }
}

impl EccOps for SoftwareBackend {
    fn affine_to_jacobian(&self, curve: &Curve, p: &AffinePoint) -> Result<JacobianPoint, EccError> {
        Ok(ecc::affine_to_jacobian(curve, p))
    }

    fn jacobian_to_affine(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        p: &JacobianPoint,
    ) -> Result<AffinePoint, EccError> {
        ecc::jacobian_to_affine(ctx, curve, p)
    }

    fn double_jacobian(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        p: &JacobianPoint,
    ) -> Result<JacobianPoint, EccError> {
        ecc::double_jacobian(ctx, curve, p)
    }

    fn add_jacobian(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        p1: &JacobianPoint,
        p2: &JacobianPoint,
    ) -> Result<JacobianPoint, EccError> {
        ecc::add_jacobian(ctx, curve, p1, p2)
    }

    fn mult_coz(&self, ctx: Ctx<'_>, curve: &Curve, k: &[u32]) -> Result<JacobianPoint, EccError> {
        ecc::mult_coz(ctx, curve, k)
    }

    fn point_on_curve(&self, ctx: Ctx<'_>, curve: &Curve, p: &AffinePoint) -> Result<(), EccError> {
        ecc::point_on_curve(ctx, curve, p)
    }

    fn pubkey_generation(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        priv_key: &[u32],
    ) -> Result<AffinePoint, EccError> {
        ecc::pubkey_generation(ctx, curve, priv_key)
    }

    fn keypair_generation(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        rng: &mut dyn RngSource,
    ) -> Result<([u32; ecc::MAX_CURVE_LIMBS], AffinePoint), KeygenError> {
        ecc::keypair_generation(ctx, curve, rng)
    }
}

impl EcdsaOps for SoftwareBackend {
    fn verify(
        &self,
        ctx: Ctx<'_>,
        curve: &Curve,
        q: &AffinePoint,
        r: &[u8],
        s: &[u8],
        hash: &[u8],
    ) -> Result<(), EcdsaError> {
        ecdsa::verify(ctx, curve, q, r, s, hash)
    }
}

/// Backend handle threaded through every operation, bundling the three
/// capability traits behind dynamic dispatch so a hardware backend can be
/// substituted at runtime without recompiling call sites.
///
/// Built once (typically as `Ctx::software()`) and treated as read-only
/// thereafter, per the "no global mutable state" design note: nothing in
/// this crate mutates a `Ctx` after construction.
#[derive(Clone, Copy)]
pub struct Ctx<'a> {
    bignum: &'a dyn BignumOps,
    ecc: &'a dyn EccOps,
    ecdsa: &'a dyn EcdsaOps,
}

impl<'a> Ctx<'a> {
    /// Builds a context from three independently-chosen backends, so a
    /// hardware accelerator can override, e.g., only `ecc` while the
    /// software implementation still serves `bignum` and `ecdsa`.
    pub fn new(bignum: &'a dyn BignumOps, ecc: &'a dyn EccOps, ecdsa: &'a dyn EcdsaOps) -> Self {
        Self { bignum, ecc, ecdsa }
    }

    /// A context backed entirely by the pure-software implementation.
    pub fn software(backend: &'a SoftwareBackend) -> Self {
        Self::new(backend, backend, backend)
    }

    pub fn bignum(&self) -> &'a dyn BignumOps {
        self.bignum
    }

    pub fn ecc(&self) -> &'a dyn EccOps {
        self.ecc
    }

    pub fn ecdsa(&self) -> &'a dyn EcdsaOps {
        self.ecdsa
    }
}
