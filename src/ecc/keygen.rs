//! Key pair generation: a random scalar paired with its public point.

use crate::rng::{RngError, RngSource};
use crate::ops::Ctx;

use super::curve::{Curve, MAX_CURVE_LIMBS};
use super::point::{jacobian_to_affine, point_on_curve, AffinePoint, EccError};

/// Failure modes specific to key generation, layered over [`EccError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeygenError {
    Ecc(EccError),
    Rng(RngError),
}

impl From<EccError> for KeygenError {
    fn from(e: EccError) -> Self {
        KeygenError::Ecc(e)
    }
}

impl From<RngError> for KeygenError {
    fn from(e: RngError) -> Self {
        KeygenError::Rng(e)
    }
}

/// Derives the public point `Q = priv · G` and verifies it lands on the
/// curve before returning it.
pub fn pubkey_generation(
    ctx: Ctx<'_>,
    curve: &Curve,
    priv_key: &[u32],
) -> Result<AffinePoint, EccError> {
    let q = ctx.ecc().mult_coz(ctx, curve, priv_key)?;
    let q_aff = jacobian_to_affine(ctx, curve, &q)?;
    point_on_curve(ctx, curve, &q_aff)?;
    Ok(q_aff)
}

/// Masks off bits above `curve.bitsize()` in a freshly-filled scalar
/// buffer, so an RNG word whose high bits run past the field width doesn't
/// push the candidate permanently out of range.
fn truncate_to_bitsize(curve: &Curve, limbs: &mut [u32]) {
    let total_bits = curve.wsize() * 32;
    if curve.bitsize() >= total_bits {
        return;
    }
    for bit in curve.bitsize()..total_bits {
        limbs[bit / 32] &= !(1 << (bit % 32));
    }
}

/// Draws a private scalar in `(0, n)` from `rng` and derives its public
/// key. Retries until a candidate lands in range, per the rejection
/// sampling the curve order demands.
pub fn keypair_generation(
    ctx: Ctx<'_>,
    curve: &Curve,
    rng: &mut dyn RngSource,
) -> Result<([u32; MAX_CURVE_LIMBS], AffinePoint), KeygenError> {
    let n = curve.wsize();
    let mut priv_limbs = [0u32; MAX_CURVE_LIMBS];

    loop {
        let mut bytes = [0u8; MAX_CURVE_LIMBS * 4];
        rng.fill(&mut bytes[..n * 4])?;
        for i in 0..n {
            priv_limbs[i] = u32::from_le_bytes([
                bytes[4 * i],
                bytes[4 * i + 1],
                bytes[4 * i + 2],
                bytes[4 * i + 3],
            ]);
        }
        truncate_to_bitsize(curve, &mut priv_limbs[..n]);

        if ctx.bignum().is_null(&priv_limbs[..n])? {
            continue;
        }
        if ctx.bignum().compare_len_diff(&priv_limbs[..n], curve.n)? >= 0 {
            continue;
        }

        let pubkey = pubkey_generation(ctx, curve, &priv_limbs[..n])?;
        return Ok((priv_limbs, pubkey));
    }
}

/// Reads big-endian wire bytes into a little-endian limb array of
/// `wsize` limbs, zero-extending or truncating the top limb when `bytes`
/// is not a multiple of 4 — as is the case for every curve whose field
/// width isn't a multiple of 32 bits (e.g. secp521r1's 66-byte wire
/// encoding against 17 limbs of 4 bytes each). Signed arithmetic avoids an
/// unsigned-subtraction underflow on that top, partially-populated limb.
pub(crate) fn be_bytes_to_limbs_raw(wsize: usize, bytes: &[u8]) -> [u32; MAX_CURVE_LIMBS] {
    let mut out = [0u32; MAX_CURVE_LIMBS];
    for (i, limb) in out.iter_mut().enumerate().take(wsize) {
        let hi = bytes.len() as isize - 1 - (4 * i) as isize;
        let mut word = [0u8; 4];
        for (j, b) in word.iter_mut().enumerate() {
            let pos = hi - (3 - j) as isize;
            if pos >= 0 {
                *b = bytes[pos as usize];
            }
        }
        *limb = u32::from_be_bytes(word);
    }
    out
}

/// Writes a little-endian `wsize`-limb array out as `bytes.len()` bytes of
/// big-endian wire encoding, dropping the high bytes of the top limb that
/// fall outside `bytes` (the mirror image of [`be_bytes_to_limbs_raw`]).
pub(crate) fn limbs_to_be_bytes_raw(limbs: &[u32], bytes: &mut [u8]) {
    for (i, limb) in limbs.iter().enumerate() {
        let be = limb.to_be_bytes();
        let hi = bytes.len() as isize - 1 - (4 * i) as isize;
        for (j, b) in be.iter().enumerate() {
            let pos = hi - (3 - j) as isize;
            if pos >= 0 {
                bytes[pos as usize] = *b;
            }
        }
    }
}

/// Writes a little-endian limb array out as big-endian wire bytes.
pub fn limbs_to_be_bytes(curve: &Curve, limbs: &[u32], out: &mut [u8]) -> Result<(), EccError> {
    if limbs.len() != curve.wsize() || out.len() != curve.bsize() {
        return Err(EccError::InvalidLength);
    }
    limbs_to_be_bytes_raw(limbs, out);
    Ok(())
}

/// Reads big-endian wire bytes into a little-endian limb array.
pub fn be_bytes_to_limbs(curve: &Curve, bytes: &[u8], out: &mut [u32]) -> Result<(), EccError> {
    if bytes.len() != curve.bsize() || out.len() != curve.wsize() {
        return Err(EccError::InvalidLength);
    }
    let limbs = be_bytes_to_limbs_raw(curve.wsize(), bytes);
    out.copy_from_slice(&limbs[..curve.wsize()]);
    Ok(())
}
