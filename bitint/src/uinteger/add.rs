use super::{max_width, UInteger};
use crate::numeric::CarryingAdd;
use crate::BitStorage;

/// Ripple-carry addition of `a`, `b` and an incoming carry, computed at
/// `width` bits.
///
/// Both operands are zero-extended (or truncated) to `width` first, so the
/// result is `(a + b + carry) mod 2^width`. Choosing a width one bit larger
/// than the wider operand makes the sum exact.
pub fn ripple_add(a: &BitStorage, b: &BitStorage, carry: bool, width: usize) -> BitStorage {
    let mut sum = BitStorage::zero(width);
    let mut carry = carry;
    for (i, word) in sum.words_mut().iter_mut().enumerate() {
        let (s, c) = CarryingAdd::carrying_add(a.word(i), b.word(i), carry);
        *word = s;
        carry = c;
    }
    sum.mask();
    sum
}

impl<const W: usize> UInteger<W> {
    /// Adds two unsigned integers of possibly different widths.
    ///
    /// The result is one bit wider than the wider operand, so no information
    /// is ever lost. `R` must equal `max(W, V) + 1`.
    #[inline]
    pub fn expanding_add<const V: usize, const R: usize>(
        &self,
        rhs: &UInteger<V>,
        carry: bool,
    ) -> UInteger<R> {
        const { assert!(R == max_width(W, V) + 1, "expanding_add yields max(W, V) + 1 bits") };
        UInteger::from_storage_unchecked(ripple_add(self.as_storage(), rhs.as_storage(), carry, R))
    }

    /// Computes `self + rhs`, wrapping around at `2^W`.
    #[inline]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        Self::from_storage_unchecked(ripple_add(self.as_storage(), rhs.as_storage(), false, W))
    }

    /// Computes `self + rhs`, returning the wrapped sum and whether a carry
    /// left the top bit.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let wide = ripple_add(self.as_storage(), rhs.as_storage(), false, W + 1);
        let overflow = wide.bit(W);
        (Self::from_storage(&wide), overflow)
    }
}

impl_assign_op!(UInteger, AddAssign, add_assign, |lhs, rhs| {
    let mut carry = false;
    for (i, word) in lhs.bits.words_mut().iter_mut().enumerate() {
        let (s, c) = CarryingAdd::carrying_add(*word, rhs.word(i), carry);
        *word = s;
        carry = c;
    }
    lhs.bits.mask();
});
