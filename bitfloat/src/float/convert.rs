use bitint::{BitStorage, UInteger};

use super::{Float, Rounding};

impl<const E: usize, const M: usize> Float<E, M> {
    /// Re-encodes the value into another format, rounding to nearest.
    ///
    /// Values beyond the target's range become signed infinities, values
    /// below it subnormals or signed zeros. Every NaN becomes the target's
    /// quiet NaN with the sign kept.
    pub fn width_cast<const E2: usize, const M2: usize>(&self) -> Float<E2, M2> {
        if self.is_nan() {
            let nan = Float::<E2, M2>::nan();
            return Float::from_parts(self.sign, nan.exponent, nan.mantissa);
        }
        if self.is_inf() {
            return Float::signed_infinity(self.sign);
        }
        if self.is_zero() {
            return Float::signed_zero(self.sign);
        }
        let unpacked = self.unpack();
        Float::round_and_pack(
            unpacked.sign,
            &unpacked.significand,
            unpacked.exponent,
            Rounding::NearestEven,
        )
    }

    /// Converts an unsigned integer of any width, rounding to nearest.
    pub fn from_uinteger<const W: usize>(value: &UInteger<W>) -> Self {
        Self::round_and_pack(false, value.as_storage(), 0, Rounding::NearestEven)
    }

    /// Packs the value into `1 + E + M` bits: the sign in the most
    /// significant bit, then the exponent field, then the mantissa field.
    pub fn to_storage(&self) -> BitStorage {
        self.magnitude_bits()
            .width_cast(1 + E + M)
            .with_bit(E + M, self.sign)
    }

    /// Unpacks the layout written by [`Float::to_storage`]. Missing high bits
    /// of a narrower storage read as zero.
    pub fn from_storage(bits: &BitStorage) -> Self {
        Self::from_parts(
            bits.bit(E + M),
            UInteger::from_storage(&bits.shr(M)),
            UInteger::from_storage(bits),
        )
    }

    /// Converts to the nearest `f32`.
    pub fn to_f32(&self) -> f32 {
        let single = self.width_cast::<8, 23>();
        let bits = (single.sign as u32) << 31
            | (single.exponent.as_u64() as u32) << 23
            | single.mantissa.as_u64() as u32;
        f32::from_bits(bits)
    }

    /// Converts to the nearest `f64`.
    pub fn to_f64(&self) -> f64 {
        let double = self.width_cast::<11, 52>();
        let bits = (double.sign as u64) << 63 | double.exponent.as_u64() << 52 | double.mantissa.as_u64();
        f64::from_bits(bits)
    }
}

impl<const E: usize, const M: usize> From<f32> for Float<E, M> {
    /// Reinterprets the native bits and re-encodes them, rounding to nearest.
    fn from(value: f32) -> Self {
        let bits = value.to_bits();
        Float::<8, 23>::from_parts(
            bits >> 31 == 1,
            UInteger::from((bits >> 23) & 0xff),
            UInteger::from(bits & 0x7f_ffff),
        )
        .width_cast()
    }
}

impl<const E: usize, const M: usize> From<f64> for Float<E, M> {
    /// Reinterprets the native bits and re-encodes them, rounding to nearest.
    fn from(value: f64) -> Self {
        let bits = value.to_bits();
        Float::<11, 52>::from_parts(
            bits >> 63 == 1,
            UInteger::from((bits >> 52) & 0x7ff),
            UInteger::from(bits & 0xf_ffff_ffff_ffff),
        )
        .width_cast()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_round_trip() {
        for v in [0.0f32, -0.0, 1.0, -93.211546, f32::MAX, f32::MIN_POSITIVE, 1.0e-45] {
            let f = Float::<8, 23>::from(v);
            assert_eq!(f.to_f32().to_bits(), v.to_bits());
            let wide = Float::<11, 52>::from(v);
            assert_eq!(wide.to_f64(), v as f64);
        }
        assert!(Float::<8, 23>::from(f32::NAN).to_f32().is_nan());
        assert_eq!(Float::<5, 10>::from(f64::NEG_INFINITY).to_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_narrowing_saturates() {
        let half = Float::<5, 10>::from(1.0e10f64);
        assert!(half.is_pos_inf());
        let half = Float::<5, 10>::from(-1.0e-10f64);
        assert!(half.is_zero() && half.sign());
        let half = Float::<5, 10>::from(1.0f64 / 3.0);
        assert_eq!(half.to_f64(), 0.333251953125);
    }

    #[test]
    fn test_widen_then_narrow() {
        let f = Float::<8, 23>::from(-0.15625f32);
        let wide: Float<20, 100> = f.width_cast();
        assert_eq!(wide.width_cast::<8, 23>().to_f32(), -0.15625);
        assert_eq!(wide.unbiased_exponent(), -3);
    }

    #[test]
    fn test_from_uinteger() {
        let v = UInteger::<100>::from(1u128 << 90 | 1);
        let f = Float::<11, 52>::from_uinteger(&v);
        assert_eq!(f.to_f64(), (1u128 << 90) as f64);
        assert!(Float::<8, 23>::from_uinteger(&UInteger::<8>::zero()).bit_eq(&Float::zero()));
        assert_eq!(Float::<8, 23>::from_uinteger(&UInteger::<8>::from(200u8)).to_f32(), 200.0);
    }

    #[test]
    fn test_storage_layout() {
        let f = Float::<8, 23>::from(-2.0f32);
        let bits = f.to_storage();
        assert_eq!(bits.width(), 32);
        assert_eq!(bits.word(0), (-2.0f32).to_bits() as u64);
        assert!(Float::<8, 23>::from_storage(&bits).bit_eq(&f));
    }
}
