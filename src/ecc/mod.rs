//! Elliptic-curve point arithmetic and key generation over short
//! Weierstrass curves, built on the bignum engine's [`crate::bignum::ModCtx`].

pub mod curve;
mod keygen;
mod point;
mod scalar_mul;

pub use curve::{Curve, MAX_CURVE_LIMBS, SECP256R1, SECP384R1, SECP521R1};
pub use keygen::{
    be_bytes_to_limbs, keypair_generation, limbs_to_be_bytes, pubkey_generation, KeygenError,
};
pub(crate) use keygen::be_bytes_to_limbs_raw;
pub use point::{
    add_jacobian, affine_to_jacobian, double_jacobian, is_infinite_jacobian, jacobian_to_affine,
    point_on_curve, AffinePoint, EccError, JacobianPoint,
};
pub use scalar_mul::mult_coz;
