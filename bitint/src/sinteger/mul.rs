use super::SInteger;
use crate::uinteger::{karatsuba_mul, scanning_mul, schoolbook_mul};

impl<const W: usize> SInteger<W> {
    /// Multiplies two signed integers of possibly different widths without
    /// losing any bits. `R` must equal `W + V`.
    ///
    /// Both operands are sign-extended to `R` bits, where the two's-complement
    /// product modulo `2^R` is exact.
    #[inline]
    pub fn expanding_mul<const V: usize, const R: usize>(&self, rhs: &SInteger<V>) -> SInteger<R> {
        const { assert!(R == W + V, "expanding_mul yields W + V bits") };
        let a = self.bits.sign_extend(R);
        let b = rhs.as_storage().sign_extend(R);
        SInteger::from_storage_unchecked(schoolbook_mul(&a, &b, R))
    }

    /// Computes `self * rhs`, wrapping around at the boundary of the type.
    ///
    /// The low `W` bits of a two's-complement product do not depend on the
    /// signs, so this is the unsigned long multiplication.
    #[inline]
    pub fn wrapping_mul(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(schoolbook_mul(&self.bits, &rhs.bits, W))
    }

    /// Computes `self * rhs` by divide-and-conquer multiplication, wrapping
    /// around at the boundary of the type.
    #[inline]
    pub fn karatsuba_mul(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(karatsuba_mul(&self.bits, &rhs.bits, W))
    }
}

impl_assign_op!(SInteger, MulAssign, mul_assign, |lhs, rhs| {
    lhs.bits = scanning_mul(&lhs.bits, rhs.as_storage(), W);
});
