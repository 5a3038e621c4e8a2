/// Carrying mul operation trait.
pub trait CarryingMul: Sized {
    /// A type twice as wide as `Self`.
    type WideT;

    /// Calculates the "full multiplication" `self * rhs + carry` without
    /// the possibility to overflow.
    ///
    /// Returns the low-order (wrapping) word and the high-order word, in that
    /// order. Feeding the high word back as `carry` chains word products into
    /// a multi-word product.
    fn carrying_mul(self, rhs: Self, carry: Self) -> (Self, Self);
}

macro_rules! impl_carrying_mul {
    ($SelfT:ty, $WideT:ty) => {
        impl CarryingMul for $SelfT {
            type WideT = $WideT;

            #[inline]
            fn carrying_mul(self, rhs: Self, carry: Self) -> (Self, Self) {
                #[cfg(feature = "nightly")]
                {
                    <$SelfT>::carrying_mul(self, rhs, carry)
                }

                #[cfg(not(feature = "nightly"))]
                {
                    let wide =
                        (self as Self::WideT) * (rhs as Self::WideT) + (carry as Self::WideT);
                    (wide as Self, (wide >> <$SelfT>::BITS) as Self)
                }
            }
        }
    };
}

impl_carrying_mul! { u64, u128 }
