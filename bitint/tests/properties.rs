use bitint::{BitStorage, SInteger, UInteger};
use proptest::prelude::*;

fn uint192() -> impl Strategy<Value = UInteger<192>> {
    prop::array::uniform3(any::<u64>()).prop_map(|w| UInteger::from_words(&w))
}

fn sint100() -> impl Strategy<Value = SInteger<100>> {
    prop::array::uniform2(any::<u64>()).prop_map(|w| SInteger::from_words(&w))
}

proptest! {
    #[test]
    fn add_commutes(a in uint192(), b in uint192()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_then_sub_restores(a in uint192(), b in uint192()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn zero_and_one_are_identities(a in uint192()) {
        prop_assert_eq!(&a + &UInteger::<192>::zero(), a.clone());
        prop_assert_eq!(&a * &UInteger::<192>::one(), a.clone());
        prop_assert!((&a * &UInteger::<192>::zero()).is_zero());
    }

    #[test]
    fn mul_commutes(a in uint192(), b in uint192()) {
        prop_assert_eq!(a.wrapping_mul(&b), b.wrapping_mul(&a));
        prop_assert_eq!(a.karatsuba_mul(&b), a.wrapping_mul(&b));
    }

    #[test]
    fn expanding_mul_is_exact(a in uint192(), b in uint192()) {
        prop_assume!(!b.is_zero());
        let wide: UInteger<384> = a.expanding_mul(&b);
        let quotient = wide.div(&b.width_cast::<384>()).unwrap();
        prop_assert_eq!(quotient, a.width_cast::<384>());
    }

    #[test]
    fn division_law(a in uint192(), b in uint192()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.restoring_division(&b).unwrap();
        prop_assert!(r < b);
        prop_assert_eq!(&(&q * &b) + &r, a);
    }

    #[test]
    fn signed_division_truncates(a in sint100(), b in sint100()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.restoring_division(&b).unwrap();
        prop_assert_eq!(&(&q * &b) + &r, a.clone());
        prop_assert!(r.is_zero() || r.is_negative() == a.is_negative());
        prop_assert!(r.expanding_abs() < b.expanding_abs());
    }

    #[test]
    fn negation_is_involutive(a in sint100()) {
        prop_assert_eq!(-(-&a), a.clone());
        prop_assert!((&a + &(-&a)).is_zero());
    }

    #[test]
    fn sign_extension_preserves_value(a in sint100()) {
        let wide = a.width_cast::<300>();
        prop_assert_eq!(wide.width_cast::<100>(), a.clone());
        prop_assert_eq!(wide.is_negative(), a.is_negative());
        prop_assert_eq!(a.cmp_extended(&wide), std::cmp::Ordering::Equal);
    }

    #[test]
    fn shift_round_trip_clears_top(w in any::<u64>(), amount in 0usize..200) {
        let a = BitStorage::from_u64(150, w);
        prop_assert_eq!(a.shl(amount).shr(amount).width_cast(64), if amount >= 150 {
            BitStorage::zero(64)
        } else {
            a.width_cast(150 - amount).width_cast(64)
        });
    }
}
