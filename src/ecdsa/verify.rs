//! ECDSA signature verification.

use crate::bignum::{self, BignumError};
use crate::ecc::curve::{Curve, MAX_CURVE_LIMBS};
use crate::ecc::{self, AffinePoint, EccError, JacobianPoint};
use crate::ops::Ctx;

/// Failure modes of signature verification. Every variant means "do not
/// accept this signature" — none of them distinguish why for the caller,
/// matching the all-failures-reject posture the verifier is specified to
/// have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaError {
    InvalidLength,
    RangeCheckFailed,
    Internal,
    /// The dispatch slot for this operation was not populated by the
    /// active backend.
    ErrApiEntry,
}

impl From<EccError> for EcdsaError {
    fn from(e: EccError) -> Self {
        match e {
            EccError::ErrApiEntry => EcdsaError::ErrApiEntry,
            _ => EcdsaError::Internal,
        }
    }
}

impl From<BignumError> for EcdsaError {
    fn from(e: BignumError) -> Self {
        match e {
            BignumError::ErrApiEntry => EcdsaError::ErrApiEntry,
            _ => EcdsaError::Internal,
        }
    }
}

/// Truncates or zero-pads a big-endian hash into `curve.wsize()` limbs,
/// keeping the high-order `curve.bsize()` bytes when the hash is longer.
/// Reuses `ecc`'s signed-arithmetic big-endian decoder rather than a second,
/// divergent copy of the same conversion.
fn hash_to_limbs(curve: &Curve, hash: &[u8]) -> [u32; MAX_CURVE_LIMBS] {
    if hash.len() > curve.bsize() {
        ecc::be_bytes_to_limbs_raw(curve.wsize(), &hash[..curve.bsize()])
    } else {
        ecc::be_bytes_to_limbs_raw(curve.wsize(), hash)
    }
}

fn bit(k: &[u32], i: usize) -> u32 {
    (k[i / 32] >> (i % 32)) & 1
}

/// Builds the 16-entry table `ip_jq[j*4 + i] = i*G + j*Q` for `i, j` in
/// `0..=3`, via doubling/adding chains from `G` and `Q`.
fn build_window_table(
    ctx: Ctx<'_>,
    curve: &Curve,
    g: &JacobianPoint,
    q: &JacobianPoint,
) -> Result<[JacobianPoint; 16], EcdsaError> {
    let mut table = [JacobianPoint::infinity(curve); 16];

    // i*G for i in 0..=3
    let mut ig = [JacobianPoint::infinity(curve); 4];
    ig[1] = *g;
    ig[2] = ctx.ecc().double_jacobian(ctx, curve, g)?;
    ig[3] = ctx.ecc().add_jacobian(ctx, curve, &ig[2], g)?;

    // j*Q for j in 0..=3
    let mut jq = [JacobianPoint::infinity(curve); 4];
    jq[1] = *q;
    jq[2] = ctx.ecc().double_jacobian(ctx, curve, q)?;
    jq[3] = ctx.ecc().add_jacobian(ctx, curve, &jq[2], q)?;

    for j in 0..4 {
        for i in 0..4 {
            table[j * 4 + i] = ctx.ecc().add_jacobian(ctx, curve, &ig[i], &jq[j])?;
        }
    }
    Ok(table)
}

/// Verifies `(r, s)` over `hash` against public key `q_aff` on `curve`.
///
/// `r` and `s` are big-endian, `curve.bsize()`-byte signature components;
/// `hash` is the big-endian message digest (any length — longer digests
/// are truncated to the curve's high-order bytes, shorter ones zero-padded).
pub fn verify(
    ctx: Ctx<'_>,
    curve: &Curve,
    q_aff: &AffinePoint,
    r_bytes: &[u8],
    s_bytes: &[u8],
    hash: &[u8],
) -> Result<(), EcdsaError> {
    let n_wsize = curve.wsize();
    if r_bytes.len() != curve.bsize() || s_bytes.len() != curve.bsize() {
        return Err(EcdsaError::InvalidLength);
    }

    let r = ecc::be_bytes_to_limbs_raw(n_wsize, r_bytes);
    let s = ecc::be_bytes_to_limbs_raw(n_wsize, s_bytes);
    let e = hash_to_limbs(curve, hash);

    let r = &r[..n_wsize];
    let s = &s[..n_wsize];
    let e = &e[..n_wsize];

    let bignum_ops = ctx.bignum();

    if bignum_ops.is_null(r)? || bignum_ops.compare_len_diff(r, curve.n)? >= 0 {
        return Err(EcdsaError::RangeCheckFailed);
    }
    if bignum_ops.is_null(s)? || bignum_ops.compare_len_diff(s, curve.n)? >= 0 {
        return Err(EcdsaError::RangeCheckFailed);
    }

    let mut z_buf = [0u32; MAX_CURVE_LIMBS];
    let z = &mut z_buf[..n_wsize];
    bignum_ops.mod_inv(curve.n, s, z)?;

    let mut u1_buf = [0u32; MAX_CURVE_LIMBS];
    let u1 = &mut u1_buf[..n_wsize];
    bignum_ops.mod_mult(curve.n, e, z, u1)?;
    let mut u2_buf = [0u32; MAX_CURVE_LIMBS];
    let u2 = &mut u2_buf[..n_wsize];
    bignum_ops.mod_mult(curve.n, r, z, u2)?;

    let g = ctx
        .ecc()
        .affine_to_jacobian(curve, &AffinePoint::from_coords(curve, curve.gx, curve.gy)?)?;
    let q = ctx.ecc().affine_to_jacobian(curve, q_aff)?;
    let table = build_window_table(ctx, curve, &g, &q)?;

    let nbits = curve.bitsize();
    let windows = nbits / 2;

    let mut acc = JacobianPoint::infinity(curve);
    for i in (0..windows).rev() {
        acc = ctx.ecc().double_jacobian(ctx, curve, &acc)?;
        acc = ctx.ecc().double_jacobian(ctx, curve, &acc)?;

        let ki = bit(u1, 2 * i) | (bit(u1, 2 * i + 1) << 1);
        let li = bit(u2, 2 * i) | (bit(u2, 2 * i + 1) << 1);
        let idx = (ki | (li << 2)) as usize;

        if idx != 0 {
            acc = ctx.ecc().add_jacobian(ctx, curve, &acc, &table[idx])?;
        }
    }

    let acc_aff = ctx
        .ecc()
        .jacobian_to_affine(ctx, curve, &acc)
        .map_err(|_| EcdsaError::RangeCheckFailed)?;

    let mut v_buf = [0u32; MAX_CURVE_LIMBS];
    let v = &mut v_buf[..n_wsize];
    bignum_ops.modulo(acc_aff.x(curve), curve.n, v)?;

    if bignum_ops.compare(v, r)? == 0 {
        Ok(())
    } else {
        Err(EcdsaError::RangeCheckFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bignum::ModCtx;
    use crate::ecc::curve::SECP256R1;
    use crate::ecc::keypair_generation;
    use crate::ops::SoftwareBackend;
    use crate::rng::SoftwareRng;

    fn sign(ctx: Ctx<'_>, curve: &Curve, priv_key: &[u32], hash: &[u8]) -> ([u8; 32], [u8; 32]) {
        // Minimal deterministic-k signer for test purposes only: not the
        // crate's verification surface, just enough to produce a valid
        // (r, s) pair to exercise `verify` against.
        let n_wsize = curve.wsize();
        let order_ctx = ModCtx::set_modulus(curve.n).unwrap();
        let e_raw = hash_to_limbs(curve, hash);
        let mut e = vec![0u32; n_wsize];
        bignum::modulo(&e_raw[..n_wsize], curve.n, &mut e).unwrap();

        let mut k = [0u32; MAX_CURVE_LIMBS];
        k[0] = 0xABCD_1234;
        k[1] = 0x1;
        let k = &k[..n_wsize];

        let r_point = crate::ecc::mult_coz(ctx, curve, k).unwrap();
        let r_aff = crate::ecc::jacobian_to_affine(ctx, curve, &r_point).unwrap();
        let mut r = vec![0u32; n_wsize];
        bignum::modulo(r_aff.x(curve), curve.n, &mut r).unwrap();

        let mut k_inv = vec![0u32; n_wsize];
        order_ctx.mod_inv(k, &mut k_inv).unwrap();

        let mut r_priv = vec![0u32; n_wsize];
        order_ctx.mod_mult(&r, priv_key, &mut r_priv).unwrap();
        let mut e_plus_r_priv = vec![0u32; n_wsize];
        order_ctx.mod_add(&e, &r_priv, &mut e_plus_r_priv).unwrap();
        let mut s = vec![0u32; n_wsize];
        order_ctx.mod_mult(&e_plus_r_priv, &k_inv, &mut s).unwrap();

        let mut r_bytes = [0u8; 32];
        let mut s_bytes = [0u8; 32];
        crate::ecc::limbs_to_be_bytes(curve, &r, &mut r_bytes).unwrap();
        crate::ecc::limbs_to_be_bytes(curve, &s, &mut s_bytes).unwrap();
        (r_bytes, s_bytes)
    }

    #[test]
    fn verify_accepts_a_genuine_signature() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let mut rng = SoftwareRng::from_seed([3u8; 32]);
        let (priv_key, pubkey) = keypair_generation(ctx, &SECP256R1, &mut rng).unwrap();
        let hash = [0x11u8; 32];

        let (r, s) = sign(ctx, &SECP256R1, &priv_key[..SECP256R1.wsize()], &hash);
        verify(ctx, &SECP256R1, &pubkey, &r, &s, &hash).unwrap();
    }

    #[test]
    fn verify_rejects_a_flipped_hash_bit() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let mut rng = SoftwareRng::from_seed([4u8; 32]);
        let (priv_key, pubkey) = keypair_generation(ctx, &SECP256R1, &mut rng).unwrap();
        let hash = [0x22u8; 32];

        let (r, s) = sign(ctx, &SECP256R1, &priv_key[..SECP256R1.wsize()], &hash);
        let mut bad_hash = hash;
        bad_hash[0] ^= 0x01;

        assert_eq!(
            verify(ctx, &SECP256R1, &pubkey, &r, &s, &bad_hash),
            Err(EcdsaError::RangeCheckFailed)
        );
    }

    #[test]
    fn verify_rejects_zero_signature_components() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let mut rng = SoftwareRng::from_seed([5u8; 32]);
        let (_priv, pubkey) = keypair_generation(ctx, &SECP256R1, &mut rng).unwrap();
        let zero = [0u8; 32];
        let one = {
            let mut b = [0u8; 32];
            b[31] = 1;
            b
        };
        assert_eq!(
            verify(ctx, &SECP256R1, &pubkey, &zero, &one, &[0u8; 32]),
            Err(EcdsaError::RangeCheckFailed)
        );
    }

    #[test]
    fn hash_longer_than_curve_is_truncated_to_high_order_bytes() {
        let long_hash = [0x33u8; 64];
        let short = hash_to_limbs(&SECP256R1, &long_hash);
        let truncated = hash_to_limbs(&SECP256R1, &long_hash[..32]);
        assert_eq!(short[..SECP256R1.wsize()], truncated[..SECP256R1.wsize()]);
    }
}
