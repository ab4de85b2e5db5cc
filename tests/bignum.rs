use ecc_core::bignum::{self, ModCtx};

#[test]
fn add_carry_scenario_from_spec() {
    let a = [0xFFFF_FFFFu32];
    let b = [0x0000_0001u32];
    let mut out = [0u32];
    let carry = bignum::add(&a, &b, &mut out).unwrap();
    assert_eq!(out, [0]);
    assert_eq!(carry, 1);
}

#[test]
fn mult_two_limb_all_ones_scenario_from_spec() {
    let a = [0xFFFF_FFFFu32, 0xFFFF_FFFF];
    let mut out = [0u32; 4];
    bignum::mult(&a, &a, &mut out).unwrap();
    assert_eq!(out, [0x0000_0001, 0x0000_0000, 0xFFFF_FFFE, 0xFFFF_FFFF]);
}

#[test]
fn mod_inverse_worked_example_from_spec() {
    let a = [0xFFFF_FFFDu32];
    let m = [0x8888_8845u32];
    let ctx = ModCtx::set_modulus(&m).unwrap();
    let mut out = [0u32];
    ctx.mod_inv(&a, &mut out).unwrap();
    assert_eq!(out, [0x5035_4995]);
}

#[test]
fn div_mod_identity_holds_for_random_operands() {
    // a = q*m + r, 0 <= r < m, checked via mult + add.
    let cases: &[(u32, u32)] = &[(1_000_003, 7), (42, 6), (999_999_937, 1_000_003), (0, 5)];

    for &(a_val, m_val) in cases {
        let a = [a_val];
        let m = [m_val];
        let mut q = [0u32];
        let mut r = [0u32];
        bignum::div(&a, &m, Some(&mut q), Some(&mut r)).unwrap();
        assert!(r[0] < m_val);

        let mut product = [0u32; 2];
        bignum::mult(&q, &m, &mut product).unwrap();
        let mut reconstructed = [0u32; 2];
        bignum::add(&product, &[r[0], 0], &mut reconstructed).unwrap();
        assert_eq!(reconstructed, [a_val, 0]);
    }
}

#[test]
fn shift_round_trip_preserves_low_bits() {
    let a = [0xDEAD_BEEFu32, 0x0BAD_F00D];
    for shift in [0usize, 1, 7, 31, 32, 33, 63] {
        let mut shifted = [0u32; 2];
        bignum::leftshift(&a, &mut shifted, shift).unwrap();
        let mut back = [0u32; 2];
        bignum::rightshift(&shifted, &mut back, shift).unwrap();

        let mask_low = if shift >= 64 { 0 } else { !0u64 >> shift };
        let a64 = (a[1] as u64) << 32 | a[0] as u64;
        let back64 = (back[1] as u64) << 32 | back[0] as u64;
        assert_eq!(a64 & mask_low, back64 & mask_low, "shift={shift}");
    }
}

#[test]
fn mod_ring_laws_hold_for_a_larger_modulus() {
    let m = [0xFFFF_FFC5u32]; // a 32-bit prime
    let ctx = ModCtx::set_modulus(&m).unwrap();
    let (a, b, c) = ([123_456_789u32], [987_654_321u32], [555_555_555u32]);

    let mut bc = [0u32];
    ctx.mod_add(&b, &c, &mut bc).unwrap();
    let mut lhs = [0u32];
    ctx.mod_add(&a, &bc, &mut lhs).unwrap();

    let mut ab = [0u32];
    ctx.mod_add(&a, &b, &mut ab).unwrap();
    let mut rhs = [0u32];
    ctx.mod_add(&ab, &c, &mut rhs).unwrap();

    assert_eq!(lhs, rhs);

    let mut a_times_b = [0u32];
    ctx.mod_mult(&a, &b, &mut a_times_b).unwrap();
    let mut a_times_c = [0u32];
    ctx.mod_mult(&a, &c, &mut a_times_c).unwrap();
    let mut distributed = [0u32];
    ctx.mod_add(&a_times_b, &a_times_c, &mut distributed).unwrap();

    let mut a_times_bc = [0u32];
    ctx.mod_mult(&a, &bc, &mut a_times_bc).unwrap();

    assert_eq!(distributed, a_times_bc);
}

#[test]
fn mod_inverse_rejects_even_modulus_and_non_coprime_input() {
    let even_m = [8u32];
    let ctx = ModCtx::set_modulus(&even_m).unwrap();
    let mut out = [0u32];
    assert_eq!(
        ctx.mod_inv(&[3], &mut out),
        Err(bignum::BignumError::ParityError)
    );

    let odd_m = [9u32];
    let ctx = ModCtx::set_modulus(&odd_m).unwrap();
    assert_eq!(
        ctx.mod_inv(&[3], &mut out),
        Err(bignum::BignumError::NotInversible)
    );
}

#[test]
fn div_by_zero_is_rejected() {
    let a = [42u32];
    let zero = [0u32];
    assert_eq!(
        bignum::div(&a, &zero, None, None),
        Err(bignum::BignumError::ZeroDivision)
    );
}

#[test]
fn compare_is_consistent_with_subtraction_borrow() {
    let a = [10u32];
    let b = [20u32];
    assert_eq!(bignum::compare(&a, &b).unwrap(), -1);

    let mut out = [0u32];
    let borrow = bignum::sub(&a, &b, &mut out).unwrap();
    assert_eq!(borrow, 1);
}
