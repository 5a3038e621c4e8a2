//! Unsigned integers of a fixed bit width.
//!
//! The algorithms work on runtime-width [`BitStorage`]s so that callers
//! whose intermediate widths cannot be named as types (such as floating-point
//! mantissa arithmetic) can use them directly. [`UInteger`] wraps them with
//! the width fixed at compile time.

use num_traits::{Bounded, One, Zero};
use serde::{Deserialize, Serialize};

use crate::{BitStorage, Word};

mod add;
mod cmp;
mod convert;
mod div;
mod mul;
mod sub;

pub use add::ripple_add;
pub use div::{restoring_division, QuotientBits};
pub use mul::{karatsuba_mul, scanning_mul, schoolbook_mul, KARATSUBA_CUTOFF};
pub use sub::ripple_sub;

/// Larger of two widths, usable in const assertions.
#[inline]
pub(crate) const fn max_width(a: usize, b: usize) -> usize {
    if a > b {
        a
    } else {
        b
    }
}

/// An unsigned integer of exactly `W` bits, holding a value in `[0, 2^W)`.
///
/// All non-expanding arithmetic wraps modulo `2^W`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::storage::RawInteger")]
pub struct UInteger<const W: usize> {
    bits: BitStorage,
}

impl_word_access!(UInteger);

impl<const W: usize> UInteger<W> {
    #[inline]
    pub(crate) fn from_storage_unchecked(bits: BitStorage) -> Self {
        const { assert!(W > 0, "an integer needs at least one bit") };
        debug_assert_eq!(bits.width(), W);
        Self { bits }
    }

    /// Creates a [`UInteger<W>`] from a storage of any width, zero-extending
    /// or dropping the most significant bits as needed.
    #[inline]
    pub fn from_storage(bits: &BitStorage) -> Self {
        Self::from_storage_unchecked(bits.width_cast(W))
    }

    /// Creates a [`UInteger<W>`] from words given most significant first.
    ///
    /// Surplus leading words and bits above `W` are dropped.
    #[inline]
    pub fn from_words(words: &[Word]) -> Self {
        Self::from_storage_unchecked(BitStorage::from_words(W, words))
    }

    /// Returns `0`.
    #[inline]
    pub fn zero() -> Self {
        Self::from_storage_unchecked(BitStorage::zero(W))
    }

    /// Returns `1`.
    #[inline]
    pub fn one() -> Self {
        Self::from_storage_unchecked(BitStorage::one(W))
    }

    /// Returns the value with every bit set, `2^W - 1`.
    #[inline]
    pub fn all_ones() -> Self {
        Self::from_storage_unchecked(BitStorage::all_ones(W))
    }

    /// Returns the smallest representable value, `0`.
    #[inline]
    pub fn min() -> Self {
        Self::zero()
    }

    /// Returns the largest representable value, `2^W - 1`.
    #[inline]
    pub fn max() -> Self {
        Self::all_ones()
    }

    /// Returns the position of the highest set bit plus one.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.bits.bit_length()
    }

    /// Changes the width to `V`, zero-extending when widening and dropping
    /// the most significant bits when narrowing.
    #[inline]
    pub fn width_cast<const V: usize>(&self) -> UInteger<V> {
        UInteger::from_storage_unchecked(self.bits.width_cast(V))
    }
}

impl_binary_op!(UInteger, Add, add, |a, b| a.wrapping_add(b));
impl_binary_op!(UInteger, Sub, sub, |a, b| a.wrapping_sub(b));
impl_binary_op!(UInteger, Mul, mul, |a, b| a.wrapping_mul(b));

impl<const W: usize> std::ops::Shr<usize> for &UInteger<W> {
    type Output = UInteger<W>;

    /// Logical shift, filling with zeros.
    #[inline]
    fn shr(self, amount: usize) -> UInteger<W> {
        UInteger::from_storage_unchecked(self.bits.shr(amount))
    }
}

impl<const W: usize> std::ops::Shr<usize> for UInteger<W> {
    type Output = UInteger<W>;

    #[inline]
    fn shr(self, amount: usize) -> UInteger<W> {
        &self >> amount
    }
}

impl<const W: usize> std::ops::ShrAssign<usize> for UInteger<W> {
    #[inline]
    fn shr_assign(&mut self, amount: usize) {
        self.bits = self.bits.shr(amount);
    }
}

impl<const W: usize> Default for UInteger<W> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const W: usize> Zero for UInteger<W> {
    #[inline]
    fn zero() -> Self {
        Self::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }
}

impl<const W: usize> One for UInteger<W> {
    #[inline]
    fn one() -> Self {
        Self::one()
    }
}

impl<const W: usize> Bounded for UInteger<W> {
    #[inline]
    fn min_value() -> Self {
        Self::min()
    }

    #[inline]
    fn max_value() -> Self {
        Self::max()
    }
}

impl<const W: usize> num_traits::WrappingAdd for UInteger<W> {
    #[inline]
    fn wrapping_add(&self, v: &Self) -> Self {
        UInteger::wrapping_add(self, v)
    }
}

impl<const W: usize> num_traits::WrappingSub for UInteger<W> {
    #[inline]
    fn wrapping_sub(&self, v: &Self) -> Self {
        UInteger::wrapping_sub(self, v)
    }
}

impl<const W: usize> num_traits::WrappingMul for UInteger<W> {
    #[inline]
    fn wrapping_mul(&self, v: &Self) -> Self {
        UInteger::wrapping_mul(self, v)
    }
}
