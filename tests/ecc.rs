use ecc_core::ecc::{
    add_jacobian, affine_to_jacobian, double_jacobian, is_infinite_jacobian, jacobian_to_affine,
    keypair_generation, mult_coz, point_on_curve, AffinePoint, JacobianPoint, SECP256R1,
    SECP384R1, SECP521R1,
};
use ecc_core::ops::{Ctx, SoftwareBackend};
use ecc_core::rng::SoftwareRng;

fn base_point(curve: &ecc_core::ecc::Curve) -> AffinePoint {
    AffinePoint::from_coords(curve, curve.gx, curve.gy).unwrap()
}

#[test]
fn base_points_are_on_curve_for_every_builtin_curve() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    for curve in [&SECP256R1, &SECP384R1, &SECP521R1] {
        let g = base_point(curve);
        point_on_curve(ctx, curve, &g).unwrap();
    }
}

#[test]
fn point_on_curve_rejects_zero_coordinates() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    let curve = &SECP256R1;
    let zero_x = AffinePoint::from_coords(curve, &[0u32; 8], curve.gy).unwrap();
    assert!(point_on_curve(ctx, curve, &zero_x).is_err());

    let zero_y = AffinePoint::from_coords(curve, curve.gx, &[0u32; 8]).unwrap();
    assert!(point_on_curve(ctx, curve, &zero_y).is_err());
}

#[test]
fn point_on_curve_rejects_x_at_or_above_modulus() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    let curve = &SECP256R1;
    let out_of_range = AffinePoint::from_coords(curve, curve.p, curve.gy).unwrap();
    assert!(point_on_curve(ctx, curve, &out_of_range).is_err());
}

#[test]
fn doubling_the_base_point_matches_adding_it_to_itself() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    for curve in [&SECP256R1, &SECP384R1, &SECP521R1] {
        let g = base_point(curve);
        let jg = affine_to_jacobian(curve, &g);

        let doubled = double_jacobian(ctx, curve, &jg).unwrap();
        let doubled_aff = jacobian_to_affine(ctx, curve, &doubled).unwrap();
        point_on_curve(ctx, curve, &doubled_aff).unwrap();

        let mut two_k = vec![0u32; curve.wsize()];
        two_k[0] = 2;
        let via_scalar_mul = mult_coz(ctx, curve, &two_k).unwrap();
        let via_scalar_mul_aff = jacobian_to_affine(ctx, curve, &via_scalar_mul).unwrap();

        assert_eq!(doubled_aff.x(curve), via_scalar_mul_aff.x(curve));
        assert_eq!(doubled_aff.y(curve), via_scalar_mul_aff.y(curve));
    }
}

#[test]
fn adding_infinity_is_the_identity() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    let curve = &SECP256R1;
    let g = base_point(curve);
    let jg = affine_to_jacobian(curve, &g);
    let inf = JacobianPoint::infinity(curve);
    assert!(is_infinite_jacobian(curve, &inf));

    let sum = add_jacobian(ctx, curve, &jg, &inf).unwrap();
    let sum_aff = jacobian_to_affine(ctx, curve, &sum).unwrap();
    assert_eq!(sum_aff.x(curve), g.x(curve));
    assert_eq!(sum_aff.y(curve), g.y(curve));
}

#[test]
fn scalar_mul_is_linear_in_the_scalar() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    let curve = &SECP256R1;
    let mut k1 = [0u32; 8];
    k1[0] = 7;
    let mut k2 = [0u32; 8];
    k2[0] = 11;
    let mut k_sum = [0u32; 8];
    k_sum[0] = 18;

    let p1 = jacobian_to_affine(ctx, curve, &mult_coz(ctx, curve, &k1).unwrap()).unwrap();
    let p2 = jacobian_to_affine(ctx, curve, &mult_coz(ctx, curve, &k2).unwrap()).unwrap();
    let p_sum = jacobian_to_affine(ctx, curve, &mult_coz(ctx, curve, &k_sum).unwrap()).unwrap();

    let j1 = affine_to_jacobian(curve, &p1);
    let j2 = affine_to_jacobian(curve, &p2);
    let added = add_jacobian(ctx, curve, &j1, &j2).unwrap();
    let added_aff = jacobian_to_affine(ctx, curve, &added).unwrap();

    assert_eq!(added_aff.x(curve), p_sum.x(curve));
    assert_eq!(added_aff.y(curve), p_sum.y(curve));
}

#[test]
fn keypair_generation_always_lands_on_curve() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    for (seed, curve) in [
        ([1u8; 32], &SECP256R1),
        ([2u8; 32], &SECP384R1),
        ([3u8; 32], &SECP521R1),
    ] {
        let mut rng = SoftwareRng::from_seed(seed);
        let (_priv, pubkey) = keypair_generation(ctx, curve, &mut rng).unwrap();
        point_on_curve(ctx, curve, &pubkey).unwrap();
    }
}

#[test]
fn mult_coz_rejects_the_zero_scalar() {
    let backend = SoftwareBackend;
    let ctx = Ctx::software(&backend);
    let curve = &SECP256R1;
    let zero = [0u32; 8];
    assert!(mult_coz(ctx, curve, &zero).is_err());
}
