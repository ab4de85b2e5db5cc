//! Points in affine and Jacobian coordinates, and the field-level operations
//! built on top of the dispatch table's [`crate::ops::BignumOps`].

use crate::bignum;
use crate::ops::Ctx;

use super::curve::{Curve, MAX_CURVE_LIMBS};

/// Failure modes of the curve-arithmetic layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccError {
    /// A coordinate or scalar's declared length didn't match the curve.
    InvalidLength,
    /// A point failed the on-curve / in-range check.
    ErrPoint,
    /// A field element had no inverse (should not happen for a prime field
    /// unless the input was already malformed).
    NotInversible,
    /// An underlying bignum call reported a usage error.
    Internal,
    /// The dispatch slot for this operation was not populated by the
    /// active backend.
    ErrApiEntry,
}

impl From<bignum::BignumError> for EccError {
    fn from(e: bignum::BignumError) -> Self {
        match e {
            bignum::BignumError::NotInversible => EccError::NotInversible,
            bignum::BignumError::InvalidLength | bignum::BignumError::InvalidInput => {
                EccError::InvalidLength
            }
            bignum::BignumError::ErrApiEntry => EccError::ErrApiEntry,
            _ => EccError::Internal,
        }
    }
}

/// A point in affine coordinates, stored in fixed-size limb arrays sized to
/// the widest curve this crate ships; only the leading `curve.wsize()`
/// limbs of each array are meaningful.
#[derive(Debug, Clone, Copy)]
pub struct AffinePoint {
    pub x: [u32; MAX_CURVE_LIMBS],
    pub y: [u32; MAX_CURVE_LIMBS],
}

impl AffinePoint {
    pub fn zero() -> Self {
        Self {
            x: [0; MAX_CURVE_LIMBS],
            y: [0; MAX_CURVE_LIMBS],
        }
    }

    pub fn from_coords(curve: &Curve, x: &[u32], y: &[u32]) -> Result<Self, EccError> {
        if x.len() != curve.wsize() || y.len() != curve.wsize() {
            return Err(EccError::InvalidLength);
        }
        let mut p = Self::zero();
        p.x[..curve.wsize()].copy_from_slice(x);
        p.y[..curve.wsize()].copy_from_slice(y);
        Ok(p)
    }

    pub fn x(&self, curve: &Curve) -> &[u32] {
        &self.x[..curve.wsize()]
    }

    pub fn y(&self, curve: &Curve) -> &[u32] {
        &self.y[..curve.wsize()]
    }
}

/// A point in Jacobian coordinates `(X, Y, Z)` representing the affine point
/// `(X/Z^2, Y/Z^3)`.
#[derive(Debug, Clone, Copy)]
pub struct JacobianPoint {
    pub x: [u32; MAX_CURVE_LIMBS],
    pub y: [u32; MAX_CURVE_LIMBS],
    pub z: [u32; MAX_CURVE_LIMBS],
}

impl JacobianPoint {
    /// The point at infinity, per this crate's convention: `X = Y = 1`,
    /// `Z = 0`.
    pub fn infinity(curve: &Curve) -> Self {
        let mut p = Self {
            x: [0; MAX_CURVE_LIMBS],
            y: [0; MAX_CURVE_LIMBS],
            z: [0; MAX_CURVE_LIMBS],
        };
        p.x[0] = 1;
        p.y[0] = 1;
        let _ = curve;
        p
    }

    pub fn x(&self, curve: &Curve) -> &[u32] {
        &self.x[..curve.wsize()]
    }
    pub fn y(&self, curve: &Curve) -> &[u32] {
        &self.y[..curve.wsize()]
    }
    pub fn z(&self, curve: &Curve) -> &[u32] {
        &self.z[..curve.wsize()]
    }
    fn x_mut(&mut self, curve: &Curve) -> &mut [u32] {
        &mut self.x[..curve.wsize()]
    }
    fn y_mut(&mut self, curve: &Curve) -> &mut [u32] {
        &mut self.y[..curve.wsize()]
    }
    fn z_mut(&mut self, curve: &Curve) -> &mut [u32] {
        &mut self.z[..curve.wsize()]
    }
}

/// `true` iff `p` is the point at infinity, per the crate's exact
/// `X.limb0 == 1 && Y.limb0 == 1 && Z == 0` convention — this does not test
/// general projective equivalence, only the canonical form every operation
/// in this module produces.
///
/// This checks raw limb patterns rather than field values, so it does not
/// go through the bignum dispatch table: there is no arithmetic here for a
/// hardware backend to accelerate.
pub fn is_infinite_jacobian(curve: &Curve, p: &JacobianPoint) -> bool {
    p.x(curve)[0] == 1
        && p.y(curve)[0] == 1
        && bignum::is_null(&p.y(curve)[1..])
        && bignum::is_null(p.z(curve))
}

/// `(X, Y, 1)` from an affine point.
pub fn affine_to_jacobian(curve: &Curve, p: &AffinePoint) -> JacobianPoint {
    let mut out = JacobianPoint {
        x: [0; MAX_CURVE_LIMBS],
        y: [0; MAX_CURVE_LIMBS],
        z: [0; MAX_CURVE_LIMBS],
    };
    let n = curve.wsize();
    out.x[..n].copy_from_slice(p.x(curve));
    out.y[..n].copy_from_slice(p.y(curve));
    out.z[0] = 1;
    out
}

/// Recovers the affine representation of a finite Jacobian point.
///
/// Errors with [`EccError::ErrPoint`] if `Z` is zero (the point at
/// infinity has no affine representation).
pub fn jacobian_to_affine(
    ctx: Ctx<'_>,
    curve: &Curve,
    p: &JacobianPoint,
) -> Result<AffinePoint, EccError> {
    let n = curve.wsize();
    if bignum::is_null(p.z(curve)) {
        return Err(EccError::ErrPoint);
    }

    let field = ctx.bignum();

    let mut z2_buf = [0u32; MAX_CURVE_LIMBS];
    let z2 = &mut z2_buf[..n];
    field.mod_square(curve.p, p.z(curve), z2)?;
    let mut zi_buf = [0u32; MAX_CURVE_LIMBS];
    let zi = &mut zi_buf[..n];
    field.mod_inv(curve.p, z2, zi)?;

    let mut x_aff_buf = [0u32; MAX_CURVE_LIMBS];
    let x_aff = &mut x_aff_buf[..n];
    field.mod_mult(curve.p, p.x(curve), zi, x_aff)?;

    let mut z3_buf = [0u32; MAX_CURVE_LIMBS];
    let z3 = &mut z3_buf[..n];
    field.mod_mult(curve.p, p.z(curve), z2, z3)?;
    field.mod_inv(curve.p, z3, zi)?;

    let mut y_aff_buf = [0u32; MAX_CURVE_LIMBS];
    let y_aff = &mut y_aff_buf[..n];
    field.mod_mult(curve.p, p.y(curve), zi, y_aff)?;

    AffinePoint::from_coords(curve, x_aff, y_aff)
}

/// Doubles a Jacobian point: `(X', Y', Z') = 2 * (X, Y, Z)`.
///
/// `A = Y²; T1 = 4·A·X; D = 3·X² + a·Z⁴; Z' = 2·Y·Z;`
/// `X' = D² - 2·T1; Y' = D·(T1 - X') - 8·A²`.
pub fn double_jacobian(
    ctx: Ctx<'_>,
    curve: &Curve,
    p: &JacobianPoint,
) -> Result<JacobianPoint, EccError> {
    if is_infinite_jacobian(curve, p) {
        return Ok(JacobianPoint::infinity(curve));
    }

    let n = curve.wsize();
    let field = ctx.bignum();

    let x = p.x(curve);
    let y = p.y(curve);
    let z = p.z(curve);

    let mut a_buf = [0u32; MAX_CURVE_LIMBS];
    let a = &mut a_buf[..n];
    field.mod_square(curve.p, y, a)?;

    let mut t1_buf = [0u32; MAX_CURVE_LIMBS];
    let t1 = &mut t1_buf[..n];
    field.mod_mult(curve.p, a, x, t1)?;
    let mut scratch_buf = [0u32; MAX_CURVE_LIMBS];
    let scratch = &mut scratch_buf[..n];
    scratch.copy_from_slice(t1);
    field.mod_add(curve.p, scratch, scratch, t1)?;
    scratch.copy_from_slice(t1);
    field.mod_add(curve.p, scratch, scratch, t1)?;

    let mut x2_buf = [0u32; MAX_CURVE_LIMBS];
    let x2 = &mut x2_buf[..n];
    field.mod_square(curve.p, x, x2)?;
    let mut three_x2_buf = [0u32; MAX_CURVE_LIMBS];
    let three_x2 = &mut three_x2_buf[..n];
    field.mod_add(curve.p, x2, x2, three_x2)?;
    scratch.copy_from_slice(three_x2);
    field.mod_add(curve.p, scratch, x2, three_x2)?;

    let mut z2_buf = [0u32; MAX_CURVE_LIMBS];
    let z2 = &mut z2_buf[..n];
    field.mod_square(curve.p, z, z2)?;
    let mut z4_buf = [0u32; MAX_CURVE_LIMBS];
    let z4 = &mut z4_buf[..n];
    field.mod_square(curve.p, z2, z4)?;
    let mut a_z4_buf = [0u32; MAX_CURVE_LIMBS];
    let a_z4 = &mut a_z4_buf[..n];
    field.mod_mult(curve.p, curve.a, z4, a_z4)?;

    let mut d_buf = [0u32; MAX_CURVE_LIMBS];
    let d = &mut d_buf[..n];
    field.mod_add(curve.p, three_x2, a_z4, d)?;

    let mut zp_buf = [0u32; MAX_CURVE_LIMBS];
    let zp = &mut zp_buf[..n];
    field.mod_mult(curve.p, y, z, zp)?;
    scratch.copy_from_slice(zp);
    field.mod_add(curve.p, scratch, scratch, zp)?;

    let mut d2_buf = [0u32; MAX_CURVE_LIMBS];
    let d2 = &mut d2_buf[..n];
    field.mod_square(curve.p, d, d2)?;
    let mut two_t1_buf = [0u32; MAX_CURVE_LIMBS];
    let two_t1 = &mut two_t1_buf[..n];
    field.mod_add(curve.p, t1, t1, two_t1)?;
    let mut xp_buf = [0u32; MAX_CURVE_LIMBS];
    let xp = &mut xp_buf[..n];
    field.mod_sub(curve.p, d2, two_t1, xp)?;

    let mut t1_minus_xp_buf = [0u32; MAX_CURVE_LIMBS];
    let t1_minus_xp = &mut t1_minus_xp_buf[..n];
    field.mod_sub(curve.p, t1, xp, t1_minus_xp)?;
    let mut d_times_buf = [0u32; MAX_CURVE_LIMBS];
    let d_times = &mut d_times_buf[..n];
    field.mod_mult(curve.p, d, t1_minus_xp, d_times)?;

    let mut a2_buf = [0u32; MAX_CURVE_LIMBS];
    let a2 = &mut a2_buf[..n];
    field.mod_square(curve.p, a, a2)?;
    let mut eight_a2_buf = [0u32; MAX_CURVE_LIMBS];
    let eight_a2 = &mut eight_a2_buf[..n];
    field.mod_add(curve.p, a2, a2, eight_a2)?;
    scratch.copy_from_slice(eight_a2);
    field.mod_add(curve.p, scratch, scratch, eight_a2)?;
    scratch.copy_from_slice(eight_a2);
    field.mod_add(curve.p, scratch, scratch, eight_a2)?;

    let mut yp_buf = [0u32; MAX_CURVE_LIMBS];
    let yp = &mut yp_buf[..n];
    field.mod_sub(curve.p, d_times, eight_a2, yp)?;

    let mut out = JacobianPoint {
        x: [0; MAX_CURVE_LIMBS],
        y: [0; MAX_CURVE_LIMBS],
        z: [0; MAX_CURVE_LIMBS],
    };
    out.x_mut(curve).copy_from_slice(xp);
    out.y_mut(curve).copy_from_slice(yp);
    out.z_mut(curve).copy_from_slice(zp);
    Ok(out)
}

/// Adds two Jacobian points. If either is infinite, returns the other.
///
/// `U1 = X1·Z2², U2 = X2·Z1², S1 = Y1·Z2³, S2 = Y2·Z1³, H = U2-U1, R = S2-S1`
/// `H2 = H², H3 = H·H2, V = U1·H2`
/// `X3 = R² - H3 - 2V, Y3 = R·(V-X3) - S1·H3, Z3 = Z1·Z2·H`
///
/// If `H == 0` and `R == 0`, delegates to [`double_jacobian`]; if `H == 0`
/// and `R != 0` the points are inverses and the result is infinity.
pub fn add_jacobian(
    ctx: Ctx<'_>,
    curve: &Curve,
    p1: &JacobianPoint,
    p2: &JacobianPoint,
) -> Result<JacobianPoint, EccError> {
    if is_infinite_jacobian(curve, p1) {
        return Ok(*p2);
    }
    if is_infinite_jacobian(curve, p2) {
        return Ok(*p1);
    }

    let n = curve.wsize();
    let field = ctx.bignum();

    let (x1, y1, z1) = (p1.x(curve), p1.y(curve), p1.z(curve));
    let (x2, y2, z2) = (p2.x(curve), p2.y(curve), p2.z(curve));

    let mut z1_2_buf = [0u32; MAX_CURVE_LIMBS];
    let z1_2 = &mut z1_2_buf[..n];
    field.mod_square(curve.p, z1, z1_2)?;
    let mut z2_2_buf = [0u32; MAX_CURVE_LIMBS];
    let z2_2 = &mut z2_2_buf[..n];
    field.mod_square(curve.p, z2, z2_2)?;

    let mut u1_buf = [0u32; MAX_CURVE_LIMBS];
    let u1 = &mut u1_buf[..n];
    field.mod_mult(curve.p, x1, z2_2, u1)?;
    let mut u2_buf = [0u32; MAX_CURVE_LIMBS];
    let u2 = &mut u2_buf[..n];
    field.mod_mult(curve.p, x2, z1_2, u2)?;

    let mut z1_3_buf = [0u32; MAX_CURVE_LIMBS];
    let z1_3 = &mut z1_3_buf[..n];
    field.mod_mult(curve.p, z1, z1_2, z1_3)?;
    let mut z2_3_buf = [0u32; MAX_CURVE_LIMBS];
    let z2_3 = &mut z2_3_buf[..n];
    field.mod_mult(curve.p, z2, z2_2, z2_3)?;

    let mut s1_buf = [0u32; MAX_CURVE_LIMBS];
    let s1 = &mut s1_buf[..n];
    field.mod_mult(curve.p, y1, z2_3, s1)?;
    let mut s2_buf = [0u32; MAX_CURVE_LIMBS];
    let s2 = &mut s2_buf[..n];
    field.mod_mult(curve.p, y2, z1_3, s2)?;

    let mut h_buf = [0u32; MAX_CURVE_LIMBS];
    let h = &mut h_buf[..n];
    field.mod_sub(curve.p, u2, u1, h)?;
    let mut r_buf = [0u32; MAX_CURVE_LIMBS];
    let r = &mut r_buf[..n];
    field.mod_sub(curve.p, s2, s1, r)?;

    if field.is_null(h)? {
        if field.is_null(r)? {
            return double_jacobian(ctx, curve, p1);
        }
        return Ok(JacobianPoint::infinity(curve));
    }

    let mut h2_buf = [0u32; MAX_CURVE_LIMBS];
    let h2 = &mut h2_buf[..n];
    field.mod_square(curve.p, h, h2)?;
    let mut h3_buf = [0u32; MAX_CURVE_LIMBS];
    let h3 = &mut h3_buf[..n];
    field.mod_mult(curve.p, h, h2, h3)?;
    let mut v_buf = [0u32; MAX_CURVE_LIMBS];
    let v = &mut v_buf[..n];
    field.mod_mult(curve.p, u1, h2, v)?;

    let mut r2_buf = [0u32; MAX_CURVE_LIMBS];
    let r2 = &mut r2_buf[..n];
    field.mod_square(curve.p, r, r2)?;
    let mut two_v_buf = [0u32; MAX_CURVE_LIMBS];
    let two_v = &mut two_v_buf[..n];
    field.mod_add(curve.p, v, v, two_v)?;
    let mut x3_pre_buf = [0u32; MAX_CURVE_LIMBS];
    let x3_pre = &mut x3_pre_buf[..n];
    field.mod_sub(curve.p, r2, h3, x3_pre)?;
    let mut x3_buf = [0u32; MAX_CURVE_LIMBS];
    let x3 = &mut x3_buf[..n];
    field.mod_sub(curve.p, x3_pre, two_v, x3)?;

    let mut v_minus_x3_buf = [0u32; MAX_CURVE_LIMBS];
    let v_minus_x3 = &mut v_minus_x3_buf[..n];
    field.mod_sub(curve.p, v, x3, v_minus_x3)?;
    let mut r_times_buf = [0u32; MAX_CURVE_LIMBS];
    let r_times = &mut r_times_buf[..n];
    field.mod_mult(curve.p, r, v_minus_x3, r_times)?;
    let mut s1_h3_buf = [0u32; MAX_CURVE_LIMBS];
    let s1_h3 = &mut s1_h3_buf[..n];
    field.mod_mult(curve.p, s1, h3, s1_h3)?;
    let mut y3_buf = [0u32; MAX_CURVE_LIMBS];
    let y3 = &mut y3_buf[..n];
    field.mod_sub(curve.p, r_times, s1_h3, y3)?;

    let mut z1_z2_buf = [0u32; MAX_CURVE_LIMBS];
    let z1_z2 = &mut z1_z2_buf[..n];
    field.mod_mult(curve.p, z1, z2, z1_z2)?;
    let mut z3_buf = [0u32; MAX_CURVE_LIMBS];
    let z3 = &mut z3_buf[..n];
    field.mod_mult(curve.p, z1_z2, h, z3)?;

    let mut out = JacobianPoint {
        x: [0; MAX_CURVE_LIMBS],
        y: [0; MAX_CURVE_LIMBS],
        z: [0; MAX_CURVE_LIMBS],
    };
    out.x_mut(curve).copy_from_slice(x3);
    out.y_mut(curve).copy_from_slice(y3);
    out.z_mut(curve).copy_from_slice(z3);
    Ok(out)
}

/// Checks that `p` lies on `curve`: `0 < x < p`, `0 < y < p`, and
/// `y² ≡ x³ + a·x + b (mod p)`.
pub fn point_on_curve(ctx: Ctx<'_>, curve: &Curve, p: &AffinePoint) -> Result<(), EccError> {
    let x = p.x(curve);
    let y = p.y(curve);
    let field = ctx.bignum();

    if field.is_null(x)? || field.is_null(y)? {
        return Err(EccError::ErrPoint);
    }
    if field.compare_len_diff(x, curve.p)? >= 0 || field.compare_len_diff(y, curve.p)? >= 0 {
        return Err(EccError::ErrPoint);
    }

    let n = curve.wsize();

    let mut lhs_buf = [0u32; MAX_CURVE_LIMBS];
    let lhs = &mut lhs_buf[..n];
    field.mod_square(curve.p, y, lhs)?;

    let mut x2_buf = [0u32; MAX_CURVE_LIMBS];
    let x2 = &mut x2_buf[..n];
    field.mod_square(curve.p, x, x2)?;
    let mut x3_buf = [0u32; MAX_CURVE_LIMBS];
    let x3 = &mut x3_buf[..n];
    field.mod_mult(curve.p, x2, x, x3)?;
    let mut ax_buf = [0u32; MAX_CURVE_LIMBS];
    let ax = &mut ax_buf[..n];
    field.mod_mult(curve.p, curve.a, x, ax)?;
    let mut rhs_pre_buf = [0u32; MAX_CURVE_LIMBS];
    let rhs_pre = &mut rhs_pre_buf[..n];
    field.mod_add(curve.p, x3, ax, rhs_pre)?;
    let mut rhs_buf = [0u32; MAX_CURVE_LIMBS];
    let rhs = &mut rhs_buf[..n];
    field.mod_add(curve.p, rhs_pre, curve.b, rhs)?;

    if field.compare(lhs, rhs)? == 0 {
        Ok(())
    } else {
        Err(EccError::ErrPoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecc::curve::SECP256R1;
    use crate::ops::SoftwareBackend;

    #[test]
    fn base_point_is_on_curve() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let g = AffinePoint::from_coords(&SECP256R1, SECP256R1.gx, SECP256R1.gy).unwrap();
        point_on_curve(ctx, &SECP256R1, &g).unwrap();
    }

    #[test]
    fn infinity_round_trips_through_double() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let inf = JacobianPoint::infinity(&SECP256R1);
        assert!(is_infinite_jacobian(&SECP256R1, &inf));
        let doubled = double_jacobian(ctx, &SECP256R1, &inf).unwrap();
        assert!(is_infinite_jacobian(&SECP256R1, &doubled));
    }

    #[test]
    fn doubling_base_point_stays_on_curve() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let g = AffinePoint::from_coords(&SECP256R1, SECP256R1.gx, SECP256R1.gy).unwrap();
        let jg = affine_to_jacobian(&SECP256R1, &g);
        let two_g = double_jacobian(ctx, &SECP256R1, &jg).unwrap();
        let two_g_aff = jacobian_to_affine(ctx, &SECP256R1, &two_g).unwrap();
        point_on_curve(ctx, &SECP256R1, &two_g_aff).unwrap();
    }

    #[test]
    fn adding_point_to_itself_matches_doubling() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let g = AffinePoint::from_coords(&SECP256R1, SECP256R1.gx, SECP256R1.gy).unwrap();
        let jg = affine_to_jacobian(&SECP256R1, &g);
        let doubled = double_jacobian(ctx, &SECP256R1, &jg).unwrap();
        let doubled_aff = jacobian_to_affine(ctx, &SECP256R1, &doubled).unwrap();

        let two_g = double_jacobian(ctx, &SECP256R1, &jg).unwrap();
        let two_g_aff = jacobian_to_affine(ctx, &SECP256R1, &two_g).unwrap();

        assert_eq!(doubled_aff.x(&SECP256R1), two_g_aff.x(&SECP256R1));
        assert_eq!(doubled_aff.y(&SECP256R1), two_g_aff.y(&SECP256R1));
    }

    #[test]
    fn add_infinity_is_identity() {
        let backend = SoftwareBackend;
        let ctx = Ctx::software(&backend);
        let g = AffinePoint::from_coords(&SECP256R1, SECP256R1.gx, SECP256R1.gy).unwrap();
        let jg = affine_to_jacobian(&SECP256R1, &g);
        let inf = JacobianPoint::infinity(&SECP256R1);
        let sum = add_jacobian(ctx, &SECP256R1, &jg, &inf).unwrap();
        let sum_aff = jacobian_to_affine(ctx, &SECP256R1, &sum).unwrap();
        assert_eq!(sum_aff.x(&SECP256R1), g.x(&SECP256R1));
        assert_eq!(sum_aff.y(&SECP256R1), g.y(&SECP256R1));
    }
}
