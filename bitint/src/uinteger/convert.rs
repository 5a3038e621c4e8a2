use super::UInteger;
use crate::BitStorage;

macro_rules! impl_from_native {
    ($($T:ty),*) => {
        $(
            impl<const W: usize> From<$T> for UInteger<W> {
                /// Converts a native unsigned integer, keeping its value modulo `2^W`.
                #[inline]
                fn from(value: $T) -> Self {
                    Self::from_storage_unchecked(BitStorage::from_u128(W, value as u128))
                }
            }
        )*
    };
}

impl_from_native!(u8, u16, u32, u64, u128, usize);

impl<const W: usize> UInteger<W> {
    /// Returns the low 64 bits as a native integer, truncating wider values.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.word(0)
    }

    /// Returns the low 128 bits as a native integer, truncating wider values.
    #[inline]
    pub fn as_u128(&self) -> u128 {
        (self.word(1) as u128) << 64 | self.word(0) as u128
    }

    /// Returns the value as a native integer if it fits into 64 bits and
    /// `u64::MAX` otherwise.
    #[inline]
    pub fn saturating_as_u64(&self) -> u64 {
        if self.bit_length() > 64 {
            u64::MAX
        } else {
            self.as_u64()
        }
    }
}
