/// Borrowing sub operation trait
pub trait BorrowingSub: Sized {
    /// Calculates `self - rhs - borrow` and returns the wrapped difference
    /// together with the borrow out of the word.
    fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool);
}

macro_rules! impl_borrowing_sub {
    ($($T:ty),*) => {
        $(
            impl BorrowingSub for $T {
                #[inline]
                fn borrowing_sub(self, rhs: Self, borrow: bool) -> (Self, bool) {
                    #[cfg(feature = "nightly")]
                    {
                        <$T>::borrowing_sub(self, rhs, borrow)
                    }

                    #[cfg(not(feature = "nightly"))]
                    {
                        let (a, b) = self.overflowing_sub(rhs);
                        let (c, d) = a.overflowing_sub(borrow as $T);
                        (c, b || d)
                    }
                }
            }
        )*
    };
}

impl_borrowing_sub! {u64}
