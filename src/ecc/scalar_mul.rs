//! Scalar multiplication via a Joye double-and-add-always ladder.
//!
//! The ladder keeps a pair of points `(R0, R1)` with the invariant
//! `R1 = R0 + G` and, at each scalar bit, either doubles `R0` and sets
//! `R1 := R0 + R1`, or doubles `R1` and sets `R0 := R0 + R1` — so every bit
//! costs one addition and one doubling regardless of its value. This
//! crate's `xycz_addc` step performs that pair of updates using the
//! already-verified Jacobian [`add_jacobian`]/[`double_jacobian`]
//! primitives, each carrying its own `Z`, rather than the literal
//! shared-`Z` field formula the name references elsewhere in the
//! literature — the externally observable result (`k·G`, computed without
//! leaking which branch a given bit took through control flow) is the same.

use crate::ops::Ctx;

use super::curve::Curve;
use super::point::{affine_to_jacobian, AffinePoint, EccError, JacobianPoint};

fn bit(k: &[u32], i: usize) -> u32 {
    (k[i / 32] >> (i % 32)) & 1
}

/// One ladder step: given the pair `(r[b], r[1-b])`, returns the pair
/// `(r[b]+r[1-b], 2*r[b])` in that order.
fn xycz_addc(
    ctx: Ctx<'_>,
    curve: &Curve,
    rb: &JacobianPoint,
    r1mb: &JacobianPoint,
) -> Result<(JacobianPoint, JacobianPoint), EccError> {
    let sum = ctx.ecc().add_jacobian(ctx, curve, rb, r1mb)?;
    let doubled = ctx.ecc().double_jacobian(ctx, curve, rb)?;
    Ok((sum, doubled))
}

/// Computes `k · G` via the co-Z ladder described above. `k` must be
/// nonzero and have `curve.wsize()` limbs.
pub fn mult_coz(ctx: Ctx<'_>, curve: &Curve, k: &[u32]) -> Result<JacobianPoint, EccError> {
    if k.len() != curve.wsize() {
        return Err(EccError::InvalidLength);
    }
    let msb = ctx.bignum().get_msb_set(k)?;
    if msb == 0 {
        return Err(EccError::ErrPoint);
    }
    let i0 = (msb - 1) as usize;

    let g = AffinePoint::from_coords(curve, curve.gx, curve.gy)?;
    let mut r: [JacobianPoint; 2] = [affine_to_jacobian(curve, &g), JacobianPoint::infinity(curve)];
    r[1] = ctx.ecc().double_jacobian(ctx, curve, &r[0])?;

    for i in (0..i0).rev() {
        let b = bit(k, i) as usize;
        let (sum, doubled) = xycz_addc(ctx, curve, &r[b], &r[1 - b])?;
        r[1 - b] = sum;
        r[b] = doubled;
    }

    Ok(r[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::curve::SECP256R1;
    use crate::ecc::point::{is_infinite_jacobian, jacobian_to_affine, point_on_curve};
    use crate::ops::SoftwareBackend;

    #[test]
    fn mult_by_one_is_base_point() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let mut k = [0u32; 8];
        k[0] = 1;
        let p = mult_coz(ctx, &SECP256R1, &k).unwrap();
        let aff = jacobian_to_affine(ctx, &SECP256R1, &p).unwrap();
        assert_eq!(aff.x(&SECP256R1), SECP256R1.gx);
        assert_eq!(aff.y(&SECP256R1), SECP256R1.gy);
    }

    #[test]
    fn mult_by_two_matches_doubling() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let mut k = [0u32; 8];
        k[0] = 2;
        let p = mult_coz(ctx, &SECP256R1, &k).unwrap();
        let aff = jacobian_to_affine(ctx, &SECP256R1, &p).unwrap();

        let g = AffinePoint::from_coords(&SECP256R1, SECP256R1.gx, SECP256R1.gy).unwrap();
        let jg = affine_to_jacobian(&SECP256R1, &g);
        let two_g = ctx.ecc().double_jacobian(ctx, &SECP256R1, &jg).unwrap();
        let two_g_aff = jacobian_to_affine(ctx, &SECP256R1, &two_g).unwrap();

        assert_eq!(aff.x(&SECP256R1), two_g_aff.x(&SECP256R1));
        assert_eq!(aff.y(&SECP256R1), two_g_aff.y(&SECP256R1));
    }

    #[test]
    fn mult_result_is_on_curve() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let mut k = [0u32; 8];
        k[0] = 12345;
        let p = mult_coz(ctx, &SECP256R1, &k).unwrap();
        assert!(!is_infinite_jacobian(&SECP256R1, &p));
        let aff = jacobian_to_affine(ctx, &SECP256R1, &p).unwrap();
        point_on_curve(ctx, &SECP256R1, &aff).unwrap();
    }

    #[test]
    fn zero_scalar_is_rejected() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let k = [0u32; 8];
        assert_eq!(mult_coz(ctx, &SECP256R1, &k), Err(EccError::ErrPoint));
    }
}
