//! Two's-complement signed integers of a fixed bit width.
//!
//! [`SInteger<W>`] shares the physical layout of [`UInteger<W>`]; only the
//! interpretation of the most significant bit differs. Addition, subtraction
//! and wrapping multiplication therefore reuse the unsigned algorithms,
//! while comparison, widening, division and shifting right honour the sign.

use num_traits::{Bounded, One, Zero};
use serde::{Deserialize, Serialize};

use crate::{BitStorage, UInteger, Word};

mod add;
mod cmp;
mod convert;
mod div;
mod mul;

/// A signed integer of exactly `W` bits in two's complement, holding a value
/// in `[-2^(W-1), 2^(W-1) - 1]`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::storage::RawInteger")]
pub struct SInteger<const W: usize> {
    bits: BitStorage,
}

impl_word_access!(SInteger);

impl<const W: usize> SInteger<W> {
    #[inline]
    pub(crate) fn from_storage_unchecked(bits: BitStorage) -> Self {
        const { assert!(W > 0, "an integer needs at least one bit") };
        debug_assert_eq!(bits.width(), W);
        Self { bits }
    }

    /// Creates a [`SInteger<W>`] from a storage of any width by reinterpreting
    /// its low `W` bits; wider storages are truncated, narrower ones
    /// zero-extended.
    #[inline]
    pub fn from_storage(bits: &BitStorage) -> Self {
        Self::from_storage_unchecked(bits.width_cast(W))
    }

    /// Creates a [`SInteger<W>`] from words given most significant first.
    #[inline]
    pub fn from_words(words: &[Word]) -> Self {
        Self::from_storage_unchecked(BitStorage::from_words(W, words))
    }

    /// Reinterprets the bits of an unsigned integer as two's complement.
    #[inline]
    pub fn from_unsigned(value: &UInteger<W>) -> Self {
        Self::from_storage_unchecked(value.as_storage().clone())
    }

    /// Reinterprets the bits as an unsigned integer.
    #[inline]
    pub fn to_unsigned(&self) -> UInteger<W> {
        UInteger::from_storage_unchecked(self.bits.clone())
    }

    /// Returns `0`.
    #[inline]
    pub fn zero() -> Self {
        Self::from_storage_unchecked(BitStorage::zero(W))
    }

    /// Returns `1`. With `W == 1` this wraps to `-1`.
    #[inline]
    pub fn one() -> Self {
        Self::from_storage_unchecked(BitStorage::one(W))
    }

    /// Returns `-1`.
    #[inline]
    pub fn minus_one() -> Self {
        Self::from_storage_unchecked(BitStorage::all_ones(W))
    }

    /// Returns the smallest representable value, `-2^(W-1)`.
    #[inline]
    pub fn min() -> Self {
        Self::from_storage_unchecked(BitStorage::zero(W).with_bit(W - 1, true))
    }

    /// Returns the largest representable value, `2^(W-1) - 1`.
    #[inline]
    pub fn max() -> Self {
        Self::from_storage_unchecked(BitStorage::all_ones(W).with_bit(W - 1, false))
    }

    /// Returns `true` if the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.bits.msb()
    }

    /// Returns `true` if the value is above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Returns `-1`, `0` or `1` depending on the sign of the value.
    #[inline]
    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Changes the width to `V`, sign-extending when widening and dropping
    /// the most significant bits when narrowing.
    #[inline]
    pub fn width_cast<const V: usize>(&self) -> SInteger<V> {
        SInteger::from_storage_unchecked(self.bits.sign_extend(V))
    }
}

impl_binary_op!(SInteger, Add, add, |a, b| a.wrapping_add(b));
impl_binary_op!(SInteger, Sub, sub, |a, b| a.wrapping_sub(b));
impl_binary_op!(SInteger, Mul, mul, |a, b| a.wrapping_mul(b));

impl<const W: usize> std::ops::Neg for &SInteger<W> {
    type Output = SInteger<W>;

    #[inline]
    fn neg(self) -> SInteger<W> {
        self.wrapping_neg()
    }
}

impl<const W: usize> std::ops::Neg for SInteger<W> {
    type Output = SInteger<W>;

    #[inline]
    fn neg(self) -> SInteger<W> {
        self.wrapping_neg()
    }
}

impl<const W: usize> std::ops::Shr<usize> for &SInteger<W> {
    type Output = SInteger<W>;

    /// Arithmetic shift, filling with the sign bit.
    #[inline]
    fn shr(self, amount: usize) -> SInteger<W> {
        SInteger::from_storage_unchecked(self.bits.sar(amount))
    }
}

impl<const W: usize> std::ops::Shr<usize> for SInteger<W> {
    type Output = SInteger<W>;

    #[inline]
    fn shr(self, amount: usize) -> SInteger<W> {
        &self >> amount
    }
}

impl<const W: usize> std::ops::ShrAssign<usize> for SInteger<W> {
    #[inline]
    fn shr_assign(&mut self, amount: usize) {
        self.bits = self.bits.sar(amount);
    }
}

impl<const W: usize> Default for SInteger<W> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const W: usize> Zero for SInteger<W> {
    #[inline]
    fn zero() -> Self {
        Self::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }
}

impl<const W: usize> One for SInteger<W> {
    #[inline]
    fn one() -> Self {
        Self::one()
    }
}

impl<const W: usize> Bounded for SInteger<W> {
    #[inline]
    fn min_value() -> Self {
        Self::min()
    }

    #[inline]
    fn max_value() -> Self {
        Self::max()
    }
}

impl<const W: usize> num_traits::WrappingAdd for SInteger<W> {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        SInteger::wrapping_add(self, v)
    }
}

impl<const W: usize> num_traits::WrappingSub for SInteger<W> {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        SInteger::wrapping_sub(self, v)
    }
}

impl<const W: usize> num_traits::WrappingMul for SInteger<W> {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        SInteger::wrapping_mul(self, v)
    }
}

impl<const W: usize> num_traits::WrappingNeg for SInteger<W> {
    #[inline]
    fn wrapping_neg(&self) -> Self {
        SInteger::wrapping_neg(self)
    }
}
