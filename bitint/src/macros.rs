/// Implements a binary operator for every owned/borrowed combination of a
/// width-generic integer type, forwarding to a body over two references.
macro_rules! impl_binary_op {
    ($T:ident, $Trait:ident, $method:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<const W: usize> std::ops::$Trait<&$T<W>> for &$T<W> {
            type Output = $T<W>;

            #[inline]
            fn $method(self, rhs: &$T<W>) -> $T<W> {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl<const W: usize> std::ops::$Trait<$T<W>> for &$T<W> {
            type Output = $T<W>;

            #[inline]
            fn $method(self, rhs: $T<W>) -> $T<W> {
                let ($a, $b) = (self, &rhs);
                $body
            }
        }

        impl<const W: usize> std::ops::$Trait<&$T<W>> for $T<W> {
            type Output = $T<W>;

            #[inline]
            fn $method(self, rhs: &$T<W>) -> $T<W> {
                let ($a, $b) = (&self, rhs);
                $body
            }
        }

        impl<const W: usize> std::ops::$Trait<$T<W>> for $T<W> {
            type Output = $T<W>;

            #[inline]
            fn $method(self, rhs: $T<W>) -> $T<W> {
                let ($a, $b) = (&self, &rhs);
                $body
            }
        }
    };
}

/// Implements a compound assignment operator for owned and borrowed
/// right-hand sides, forwarding the owned form to the borrowed one.
macro_rules! impl_assign_op {
    ($T:ident, $Trait:ident, $method:ident, |$a:ident, $b:ident| $body:block) => {
        impl<const W: usize> std::ops::$Trait<&$T<W>> for $T<W> {
            #[inline]
            fn $method(&mut self, rhs: &$T<W>) {
                let ($a, $b) = (self, rhs);
                $body
            }
        }

        impl<const W: usize> std::ops::$Trait<$T<W>> for $T<W> {
            #[inline]
            fn $method(&mut self, rhs: $T<W>) {
                std::ops::$Trait::$method(self, &rhs);
            }
        }
    };
}

/// Implements the accessors shared by every integer type that wraps a
/// [`BitStorage`](crate::BitStorage) in a field named `bits`.
macro_rules! impl_word_access {
    ($T:ident) => {
        impl<const W: usize> TryFrom<$crate::storage::RawInteger> for $T<W> {
            type Error = $crate::StorageError;

            fn try_from(raw: $crate::storage::RawInteger) -> Result<Self, $crate::StorageError> {
                match raw.bits.width() {
                    width if width == W => Ok(Self { bits: raw.bits }),
                    found => Err($crate::StorageError::WidthMismatch { expected: W, found }),
                }
            }
        }

        impl<const W: usize> $T<W> {
            /// The number of bits of this type.
            pub const WIDTH: usize = W;

            /// Returns the number of bits.
            #[inline]
            pub const fn width(&self) -> usize {
                W
            }

            /// Returns the number of words used to store the bits.
            #[inline]
            pub const fn word_count(&self) -> usize {
                $crate::numeric::word_count(W)
            }

            /// Returns the underlying storage.
            #[inline]
            pub fn as_storage(&self) -> &$crate::BitStorage {
                &self.bits
            }

            /// Consumes `self`, returning the underlying storage.
            #[inline]
            pub fn into_storage(self) -> $crate::BitStorage {
                self.bits
            }

            /// Returns the words, least significant first.
            #[inline]
            pub fn words(&self) -> &[$crate::Word] {
                self.bits.words()
            }

            /// Returns the word at `index`, zero past the last word.
            #[inline]
            pub fn word(&self, index: usize) -> $crate::Word {
                self.bits.word(index)
            }

            /// Overwrites the word at `index`, masking bits above the width.
            #[inline]
            pub fn set_word(&mut self, index: usize, value: $crate::Word) {
                self.bits.set_word(index, value);
            }

            /// Returns the bit at `index`, `false` past the width.
            #[inline]
            pub fn bit(&self, index: usize) -> bool {
                self.bits.bit(index)
            }

            /// Sets the bit at `index`; indices past the width are ignored.
            #[inline]
            pub fn set_bit(&mut self, index: usize, value: bool) {
                self.bits.set_bit(index, value);
            }

            /// Returns the most significant bit.
            #[inline]
            pub fn msb(&self) -> bool {
                self.bits.msb()
            }

            /// Returns the least significant bit.
            #[inline]
            pub fn lsb(&self) -> bool {
                self.bits.lsb()
            }

            /// Returns `true` if all bits are zero.
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.bits.is_zero()
            }

            /// Returns the number of ones.
            #[inline]
            pub fn count_ones(&self) -> usize {
                self.bits.count_ones()
            }

            /// Returns the number of leading zeros.
            #[inline]
            pub fn count_leading_zeros(&self) -> usize {
                self.bits.count_leading_zeros()
            }

            /// Returns the number of trailing zeros.
            #[inline]
            pub fn count_trailing_zeros(&self) -> usize {
                self.bits.count_trailing_zeros()
            }
        }

        impl<const W: usize> std::fmt::Debug for $T<W> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}<{}>[", stringify!($T), W)?;
                for (i, w) in self.bits.words().iter().rev().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{w:#018x}")?;
                }
                write!(f, "]")
            }
        }

        impl_binary_op!($T, BitAnd, bitand, |a, b| $T::from_storage_unchecked(&a.bits & &b.bits));
        impl_binary_op!($T, BitOr, bitor, |a, b| $T::from_storage_unchecked(&a.bits | &b.bits));
        impl_binary_op!($T, BitXor, bitxor, |a, b| $T::from_storage_unchecked(&a.bits ^ &b.bits));

        impl<const W: usize> std::ops::Not for &$T<W> {
            type Output = $T<W>;

            #[inline]
            fn not(self) -> $T<W> {
                $T::from_storage_unchecked(!&self.bits)
            }
        }

        impl<const W: usize> std::ops::Not for $T<W> {
            type Output = $T<W>;

            #[inline]
            fn not(self) -> $T<W> {
                !&self
            }
        }

        impl<const W: usize> std::ops::Shl<usize> for &$T<W> {
            type Output = $T<W>;

            #[inline]
            fn shl(self, amount: usize) -> $T<W> {
                $T::from_storage_unchecked(self.bits.shl(amount))
            }
        }

        impl<const W: usize> std::ops::Shl<usize> for $T<W> {
            type Output = $T<W>;

            #[inline]
            fn shl(self, amount: usize) -> $T<W> {
                &self << amount
            }
        }

        impl<const W: usize> std::ops::ShlAssign<usize> for $T<W> {
            #[inline]
            fn shl_assign(&mut self, amount: usize) {
                self.bits = self.bits.shl(amount);
            }
        }
    };
}
