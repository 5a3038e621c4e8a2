/// Carrying add operation trait
pub trait CarryingAdd: Sized {
    /// Calculates `self + rhs + carry` and returns the wrapped sum together
    /// with the carry out of the word.
    ///
    /// Overflow is detected by comparing the partial sums against the operands,
    /// so chaining the returned carry from the least to the most significant
    /// word yields a ripple-carry addition of arbitrarily many words.
    fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool);
}

macro_rules! impl_carrying_add {
    ($($T:ty),*) => {
        $(
            impl CarryingAdd for $T {
                #[inline]
                fn carrying_add(self, rhs: Self, carry: bool) -> (Self, bool) {
                    #[cfg(feature = "nightly")]
                    {
                        <$T>::carrying_add(self, rhs, carry)
                    }

                    #[cfg(not(feature = "nightly"))]
                    {
                        let partial = self.wrapping_add(rhs);
                        let overflow = partial < self || partial < rhs;
                        let sum = partial.wrapping_add(carry as $T);
                        (sum, overflow || sum < partial)
                    }
                }
            }
        )*
    };
}

impl_carrying_add! {u64}
