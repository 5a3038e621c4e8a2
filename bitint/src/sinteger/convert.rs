use super::SInteger;
use crate::BitStorage;

macro_rules! impl_from_native {
    (signed: $($S:ty),*; unsigned: $($U:ty),*) => {
        $(
            impl<const W: usize> From<$S> for SInteger<W> {
                /// Converts a native signed integer, sign-extending it and
                /// keeping its value modulo `2^W`.
                #[inline]
                fn from(value: $S) -> Self {
                    let native = BitStorage::from_u128(128, value as i128 as u128);
                    Self::from_storage_unchecked(native.sign_extend(W))
                }
            }
        )*
        $(
            impl<const W: usize> From<$U> for SInteger<W> {
                /// Converts a native unsigned integer, keeping its value modulo `2^W`.
                #[inline]
                fn from(value: $U) -> Self {
                    Self::from_storage_unchecked(BitStorage::from_u128(W, value as u128))
                }
            }
        )*
    };
}

impl_from_native!(signed: i8, i16, i32, i64, i128, isize; unsigned: u8, u16, u32, u64, u128, usize);

impl<const W: usize> SInteger<W> {
    /// Returns the value as a native integer, sign-extending narrower values
    /// and keeping only the low 64 bits of wider ones.
    #[inline]
    pub fn as_i64(&self) -> i64 {
        self.bits.sign_extend(64.max(W)).word(0) as i64
    }

    /// Returns the value as a native integer, sign-extending narrower values
    /// and keeping only the low 128 bits of wider ones.
    #[inline]
    pub fn as_i128(&self) -> i128 {
        let extended = self.bits.sign_extend(128.max(W));
        ((extended.word(1) as u128) << 64 | extended.word(0) as u128) as i128
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_cast_positive() {
        let i16 = SInteger::<16>::from(400i16);
        let i150 = SInteger::<150>::from(354346546i64);

        assert_eq!(i16.width_cast::<24>().as_i64(), 400);
        assert_eq!(i150.width_cast::<200>().as_i64(), 354346546);
        assert_eq!(i150.width_cast::<200>().width_cast::<150>(), i150);

        assert_eq!(i16.width_cast::<8>(), SInteger::<8>::from(400i16 - 256));
        assert_eq!(i150.width_cast::<2>(), SInteger::<2>::from(2i8));
    }

    #[test]
    fn test_width_cast_negative() {
        let i16 = SInteger::<16>::from(-400i16);
        let i150 = SInteger::<150>::from(-354346546i64);

        assert_eq!(i16.width_cast::<24>().as_i64(), -400);
        assert_eq!(i150.width_cast::<200>().as_i64(), -354346546);
        assert_eq!(i150.width_cast::<200>().width_cast::<150>(), i150);

        assert_eq!(i16.width_cast::<8>(), SInteger::<8>::from(112i16));
        assert_eq!(i150.width_cast::<2>(), SInteger::<2>::from(2i8));
    }

    #[test]
    fn test_native_round_trip() {
        for v in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(SInteger::<64>::from(v).as_i64(), v);
            assert_eq!(SInteger::<150>::from(v).as_i128(), v as i128);
        }
        assert_eq!(SInteger::<200>::from(i128::MIN).as_i128(), i128::MIN);
        assert_eq!(SInteger::<8>::from(-1i64).as_i64(), -1);
    }
}
