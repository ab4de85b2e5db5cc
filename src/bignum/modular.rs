//! Modular arithmetic scoped to a single, borrowed modulus.

use super::core::{
    add, add_assign, compare, compare_eq_unchecked, is_null, mult, shr1_with_carry_in, sub,
    sub_assign, BignumError, MAX_BIGNUM_LIMBS,
};
use super::Limb;

/// Binds a modulus slice to subsequent modular operations.
///
/// `ModCtx` borrows the modulus rather than owning it — the caller must
/// keep the modulus buffer alive for as long as the context is in use,
/// matching a per-modulus handle built once and reused across many
/// operations.
pub struct ModCtx<'a> {
    modulus: &'a [u32],
}

impl<'a> ModCtx<'a> {
    /// Builds a context bound to `modulus`.
    pub fn set_modulus(modulus: &'a [u32]) -> Result<Self, BignumError> {
        if modulus.is_empty() {
            return Err(BignumError::InvalidInput);
        }
        if modulus.len() > MAX_BIGNUM_LIMBS {
            return Err(BignumError::InvalidLength);
        }
        if is_null(modulus) {
            return Err(BignumError::InvalidInput);
        }
        Ok(Self { modulus })
    }

    /// The modulus's declared limb count.
    pub fn limbs(&self) -> usize {
        self.modulus.len()
    }

    /// The bound modulus.
    pub fn modulus(&self) -> &[u32] {
        self.modulus
    }

    fn check_len(&self, slices: &[&[u32]]) -> Result<(), BignumError> {
        let n = self.modulus.len();
        if slices.iter().any(|s| s.len() != n) {
            return Err(BignumError::InvalidLength);
        }
        Ok(())
    }

    /// `out := (a + b) mod m`. Requires `a, b < m`.
    pub fn mod_add(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        self.check_len(&[a, b, out])?;
        let carry = add(a, b, out)?;
        if carry != 0 || compare(out, self.modulus)? >= 0 {
            sub_assign(out, self.modulus);
        }
        Ok(())
    }

    /// `out := (a - b) mod m`. Requires `a, b < m`.
    pub fn mod_sub(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        self.check_len(&[a, b, out])?;
        let borrow = sub(a, b, out)?;
        if borrow != 0 {
            add_assign(out, self.modulus);
        }
        Ok(())
    }

    /// `out := (m - a) mod m`. Zero maps to zero.
    pub fn mod_neg(&self, a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        self.check_len(&[a, out])?;
        if is_null(a) {
            out.fill(0);
            return Ok(());
        }
        sub(self.modulus, a, out)?;
        Ok(())
    }

    /// `out := (a * b) mod m`, via a full `2n`-limb product followed by
    /// reduction.
    pub fn mod_mult(&self, a: &[u32], b: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        self.check_len(&[a, out])?;
        if b.len() != self.modulus.len() {
            return Err(BignumError::InvalidLength);
        }
        let n = self.modulus.len();
        let mut product_buf = [0u32; 2 * MAX_BIGNUM_LIMBS];
        let product = &mut product_buf[..2 * n];
        mult(a, b, product)?;
        super::core::modulo(product, self.modulus, out)
    }

    /// `out := a² mod m`.
    pub fn mod_square(&self, a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        self.mod_mult(a, a, out)
    }

    /// `out := a⁻¹ mod m` via the binary extended GCD (HAC Algorithm 14.61).
    ///
    /// Requires `m` odd (`ParityError` otherwise) and `gcd(a, m) = 1`
    /// (`NotInversible` otherwise).
    pub fn mod_inv(&self, a: &[u32], out: &mut [u32]) -> Result<(), BignumError> {
        self.check_len(&[a, out])?;
        if self.modulus[0] & 1 == 0 {
            return Err(BignumError::ParityError);
        }
        if is_null(a) {
            return Err(BignumError::NotInversible);
        }

        let n = self.modulus.len();

        let mut tu_buf = [0u32; MAX_BIGNUM_LIMBS];
        let tu = &mut tu_buf[..n];
        let mut tv_buf = [0u32; MAX_BIGNUM_LIMBS];
        let tv = &mut tv_buf[..n];
        let mut g1_buf = [0u32; MAX_BIGNUM_LIMBS];
        let g1 = &mut g1_buf[..n];
        let mut g2_buf = [0u32; MAX_BIGNUM_LIMBS];
        let g2 = &mut g2_buf[..n];

        tu.copy_from_slice(a);
        tv.copy_from_slice(self.modulus);
        g1[0] = 1;

        // Maintains the invariants `tu === g1*a (mod m)` and
        // `tv === g2*a (mod m)` throughout: halving a side divides its
        // coefficient by 2 mod m (adding m first if that coefficient is
        // odd, since m is odd this always yields an even value); the
        // subtract step subtracts coefficients in step with the sides
        // they track. When `tu` reaches zero, `tv` holds `gcd(a, m)` and
        // `g2` holds the inverse.
        while !is_null(tu) {
            while tu[0] & 1 == 0 {
                halve_inplace(tu);
                halve_mod(g1, self.modulus);
            }
            while tv[0] & 1 == 0 {
                halve_inplace(tv);
                halve_mod(g2, self.modulus);
            }

            if compare_eq_unchecked(tu, tv) >= 0 {
                sub_assign(tu, tv);
                sub_mod(g1, g2, self.modulus);
            } else {
                sub_assign(tv, tu);
                sub_mod(g2, g1, self.modulus);
            }
        }

        if !is_one(tv) {
            return Err(BignumError::NotInversible);
        }

        out.copy_from_slice(g2);
        Ok(())
    }
}

/// Halves a nonnegative value known to be even, in place.
fn halve_inplace(a: &mut [u32]) {
    shr1_with_carry_in(a, 0);
}

/// `g := g * 2⁻¹ mod m`, for `g` already reduced to `[0, m)`.
fn halve_mod(g: &mut [u32], m: &[u32]) {
    if g[0] & 1 == 0 {
        shr1_with_carry_in(g, 0);
    } else {
        let carry = add_assign(g, m);
        shr1_with_carry_in(g, carry);
    }
}

/// `g1 := (g1 - g2) mod m`, for `g1, g2` already reduced to `[0, m)`.
fn sub_mod(g1: &mut [u32], g2: &[u32], m: &[u32]) {
    if compare_eq_unchecked(g1, g2) >= 0 {
        sub_assign(g1, g2);
    } else {
        add_assign(g1, m);
        sub_assign(g1, g2);
    }
}

fn is_one(a: &[u32]) -> bool {
    a[0] == 1 && a[1..].iter().all(|&limb| limb == 0)
}
