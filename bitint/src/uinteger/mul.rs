use super::{add::ripple_add, sub::ripple_sub, UInteger};
use crate::numeric::{word_count, CarryingAdd, CarryingMul};
use crate::BitStorage;

/// Operand size, in significant bits, at or below which [`karatsuba_mul`]
/// falls back to [`schoolbook_mul`].
pub const KARATSUBA_CUTOFF: usize = 64;

/// Binary long multiplication computed at `width` bits.
///
/// For every set bit `i` of `b`, up to its highest set bit, adds `a << i`
/// to the accumulator. The result is `(a * b) mod 2^width`.
pub fn schoolbook_mul(a: &BitStorage, b: &BitStorage, width: usize) -> BitStorage {
    let shifted = a.width_cast(width);
    let mut product = BitStorage::zero(width);
    for i in 0..b.bit_length().min(width) {
        if b.bit(i) {
            product = ripple_add(&product, &shifted.shl(i), false, width);
        }
    }
    product
}

/// Divide-and-conquer (Karatsuba) multiplication computed at `width` bits.
///
/// Splits both operands at half of the longer one's significant bits and
/// combines three recursive products `z2 * 2^(2h) + z1 * 2^h + z0`, where
/// `z1 = (a_lo + a_hi)(b_lo + b_hi) - z2 - z0`. Operands of at most
/// [`KARATSUBA_CUTOFF`] significant bits are handed to [`schoolbook_mul`].
pub fn karatsuba_mul(a: &BitStorage, b: &BitStorage, width: usize) -> BitStorage {
    let n = a.bit_length().max(b.bit_length());
    if n <= KARATSUBA_CUTOFF {
        return schoolbook_mul(a, b, width);
    }

    let half = n / 2;
    let high = n - half;

    let a_lo = a.width_cast(half);
    let a_hi = a.shr(half).width_cast(high);
    let b_lo = b.width_cast(half);
    let b_hi = b.shr(half).width_cast(high);

    let z0 = karatsuba_mul(&a_lo, &b_lo, 2 * half);
    let z2 = karatsuba_mul(&a_hi, &b_hi, 2 * high);

    let a_sum = ripple_add(&a_lo, &a_hi, false, high + 1);
    let b_sum = ripple_add(&b_lo, &b_hi, false, high + 1);
    let mid_width = 2 * (high + 1);
    let z1 = karatsuba_mul(&a_sum, &b_sum, mid_width);
    let z1 = ripple_sub(&ripple_sub(&z1, &z2, mid_width), &z0, mid_width);

    let result = ripple_add(
        &z2.width_cast(width).shl(2 * half),
        &z1.width_cast(width).shl(half),
        false,
        width,
    );
    ripple_add(&result, &z0, false, width)
}

/// Word-level operand-scanning multiplication computed at `width` bits.
///
/// Each word of `a` is multiplied with every word of `b` using a carrying
/// multiply; products landing at or above word `word_count(width)` are
/// dropped.
pub fn scanning_mul(a: &BitStorage, b: &BitStorage, width: usize) -> BitStorage {
    let count = word_count(width);
    let mut product = BitStorage::zero(width);
    let out = product.words_mut();

    for (i, &x) in a.words().iter().enumerate().take(count) {
        let mut carry = 0;
        for (j, &y) in b.words().iter().enumerate() {
            let k = i + j;
            if k >= count {
                carry = 0;
                break;
            }
            let (lo, hi) = CarryingMul::carrying_mul(x, y, carry);
            let (sum, overflow) = CarryingAdd::carrying_add(out[k], lo, false);
            out[k] = sum;
            carry = hi + overflow as u64;
        }
        let k = i + b.word_count();
        if k < count {
            out[k] = carry;
        }
    }

    product.mask();
    product
}

impl<const W: usize> UInteger<W> {
    /// Multiplies two unsigned integers of possibly different widths without
    /// losing any bits. `R` must equal `W + V`.
    #[inline]
    pub fn expanding_mul<const V: usize, const R: usize>(&self, rhs: &UInteger<V>) -> UInteger<R> {
        const { assert!(R == W + V, "expanding_mul yields W + V bits") };
        UInteger::from_storage_unchecked(schoolbook_mul(self.as_storage(), rhs.as_storage(), R))
    }

    /// Computes `self * rhs` by binary long multiplication, wrapping around at `2^W`.
    #[inline]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(schoolbook_mul(self.as_storage(), rhs.as_storage(), W))
    }

    /// Computes `self * rhs` by divide-and-conquer multiplication, wrapping
    /// around at `2^W`.
    ///
    /// Always agrees bit for bit with [`UInteger::wrapping_mul`].
    #[inline]
    pub fn karatsuba_mul(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(karatsuba_mul(self.as_storage(), rhs.as_storage(), W))
    }
}

impl_assign_op!(UInteger, MulAssign, mul_assign, |lhs, rhs| {
    lhs.bits = scanning_mul(&lhs.bits, rhs.as_storage(), W);
});
