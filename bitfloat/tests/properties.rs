use bitfloat::Float;
use proptest::prelude::*;

type F32 = Float<8, 23>;

fn any_float() -> impl Strategy<Value = F32> {
    any::<u32>().prop_map(|bits| F32::from(f32::from_bits(bits)))
}

proptest! {
    #[test]
    fn add_commutes(a in any_float(), b in any_float()) {
        prop_assert!(a.add(&b).bit_eq(&b.add(&a)));
    }

    #[test]
    fn mul_commutes(a in any_float(), b in any_float()) {
        prop_assert!(a.mul(&b).bit_eq(&b.mul(&a)));
    }

    #[test]
    fn zero_is_additive_identity(a in any_float()) {
        let sum = a.add(&F32::zero());
        prop_assert!(sum == a || (sum.is_nan() && a.is_nan()));
    }

    #[test]
    fn sub_is_add_of_negation(a in any_float(), b in any_float()) {
        prop_assert!(a.sub(&b).bit_eq(&a.add(&-&b)));
    }

    #[test]
    fn matches_native_single(x in any::<f32>(), y in any::<f32>()) {
        let (a, b) = (F32::from(x), F32::from(y));
        prop_assert!(a.mul(&b).equal_except_rounding(&F32::from(x * y)));
        prop_assert!(a.add(&b).equal_except_rounding(&F32::from(x + y)));
    }

    #[test]
    fn storage_round_trip(bits in any::<u32>()) {
        let f = F32::from_storage(&bitint::BitStorage::from_u64(32, bits as u64));
        prop_assert_eq!(f.to_storage().word(0), bits as u64);
    }
}
