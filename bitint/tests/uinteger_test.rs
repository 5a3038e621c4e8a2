use bitint::{ArithError, BitStorage, QuotientBits, UInteger};
use rand::{distributions::Uniform, thread_rng, Rng};

#[test]
fn test_native_agreement() {
    let mut rng = thread_rng();
    let distr = Uniform::new_inclusive(0u64, u64::MAX);

    for _ in 0..200 {
        let a = rng.sample(distr);
        let b = rng.sample(distr);
        let ua = UInteger::<64>::from(a);
        let ub = UInteger::<64>::from(b);

        // add
        assert_eq!((&ua + &ub).as_u64(), a.wrapping_add(b));
        let wide: UInteger<65> = ua.expanding_add(&ub, false);
        assert_eq!(wide.as_u128(), a as u128 + b as u128);

        // sub
        assert_eq!((&ua - &ub).as_u64(), a.wrapping_sub(b));
        assert_eq!(ua.overflowing_sub(&ub).1, a < b);

        // mul
        assert_eq!((&ua * &ub).as_u64(), a.wrapping_mul(b));
        assert_eq!(ua.karatsuba_mul(&ub).as_u64(), a.wrapping_mul(b));
        let wide: UInteger<128> = ua.expanding_mul(&ub);
        assert_eq!(wide.as_u128(), a as u128 * b as u128);

        // div
        if b != 0 {
            let (q, r) = ua.restoring_division(&ub).unwrap();
            assert_eq!(q.as_u64(), a / b);
            assert_eq!(r.as_u64(), a % b);
        }
    }
}

#[test]
fn test_expanding_add_carry_word() {
    let a = UInteger::<150>::max();
    let b = UInteger::<150>::one();
    let sum: UInteger<151> = a.expanding_add(&b, false);
    assert_eq!(sum, UInteger::<151>::one() << 150);

    let sum: UInteger<151> = a.expanding_add(&UInteger::<150>::zero(), true);
    assert!(sum.bit(150));
    assert_eq!(sum.count_ones(), 1);
}

#[test]
fn test_wide_multiplication_variants_agree() {
    let mut rng = thread_rng();
    for _ in 0..20 {
        let a: UInteger<192> = rng.gen();
        let b: UInteger<192> = rng.gen();

        let schoolbook = a.wrapping_mul(&b);
        assert_eq!(a.karatsuba_mul(&b), schoolbook);

        let mut scanned = a.clone();
        scanned *= &b;
        assert_eq!(scanned, schoolbook);

        let wide: UInteger<384> = a.expanding_mul(&b);
        assert_eq!(wide.width_cast::<192>(), schoolbook);
    }
}

#[test]
fn test_boundary_multiplication_variants_agree() {
    let mut rng = thread_rng();
    let values: [UInteger<192>; 5] = [
        UInteger::zero(),
        UInteger::one(),
        UInteger::max(),
        UInteger::all_ones(),
        rng.gen(),
    ];

    for a in &values {
        for b in &values {
            let schoolbook = a.wrapping_mul(b);
            assert_eq!(a.karatsuba_mul(b), schoolbook);

            let mut scanned = a.clone();
            scanned *= b;
            assert_eq!(scanned, schoolbook);
        }
    }

    // (2^192 - 1)^2 = 2^384 - 2^193 + 1
    let square: UInteger<384> = UInteger::<192>::max().expanding_mul(&UInteger::<192>::max());
    let expected = (UInteger::<384>::max() - (UInteger::<384>::one() << 193)) + UInteger::<384>::from(2u64);
    assert_eq!(square, expected);
    assert_eq!(UInteger::<192>::max().wrapping_mul(&UInteger::max()), UInteger::one());
}

#[test]
fn test_division_law() {
    let mut rng = thread_rng();
    for _ in 0..20 {
        let n: UInteger<150> = rng.gen();
        let d: UInteger<150> = UInteger::from_storage(&BitStorage::random(rng.gen_range(1..150), &mut rng));
        if d.is_zero() {
            continue;
        }
        let (q, r) = n.restoring_division(&d).unwrap();
        assert!(r < d);
        assert_eq!(&(&q * &d) + &r, n);
    }

    let n = UInteger::<150>::from(99u8);
    assert_eq!(n.div(&UInteger::zero()), Err(ArithError::DivisionByZero));
}

#[test]
fn test_quotient_bits_prefix() {
    let n = BitStorage::from_u64(32, 1_000_000);
    let d = BitStorage::from_u64(32, 7);
    let full = 1_000_000u64 / 7;

    let mut bits = QuotientBits::new(&n, &d).unwrap();
    assert_eq!(bits.len(), 32);
    bits.by_ref().take(20).for_each(drop);
    assert_eq!(bits.quotient().word(0), full & !0xfff);

    let (q, r) = bits.finish();
    assert_eq!(q.word(0), full);
    assert_eq!(r.word(0), 1_000_000 % 7);

    assert!(QuotientBits::new(&n, &BitStorage::zero(32)).is_err());
}

#[test]
fn test_shifts() {
    let a = UInteger::<150>::from_words(&[0, 1, 0]);
    assert_eq!(&a >> 1, UInteger::<150>::from_words(&[0, 0, 1 << 63]));

    let c = UInteger::<150>::from_words(&[12, 0, 0]);
    assert_eq!(&c >> 68, UInteger::<150>::from_words(&[0, 0, 3 << 62]));

    let b = UInteger::<150>::from_words(&[8, 8, 8]);
    assert_eq!(&b >> 3, UInteger::<150>::from_words(&[1, 1, 1]));

    let mut d = UInteger::<150>::from_words(&[1, 1, 1]);
    d <<= 3;
    assert_eq!(d, b);
}
