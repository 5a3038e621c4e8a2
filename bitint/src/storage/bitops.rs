use std::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use super::BitStorage;
use crate::numeric::{Word, WORD_BITS};

impl BitStorage {
    /// Logical shift towards the most significant bit.
    ///
    /// Shifting by `width` or more yields zero.
    pub fn shl(&self, amount: usize) -> Self {
        if amount >= self.width {
            return Self::zero(self.width);
        }
        let word_shift = amount / WORD_BITS;
        let bit_shift = amount % WORD_BITS;
        let count = self.words.len();

        let mut words = vec![0; count];
        for i in word_shift..count {
            let src = i - word_shift;
            let mut w = self.words[src] << bit_shift;
            if bit_shift != 0 && src > 0 {
                w |= self.words[src - 1] >> (WORD_BITS - bit_shift);
            }
            words[i] = w;
        }

        let mut result = Self {
            width: self.width,
            words,
        };
        result.mask();
        result
    }

    /// Logical shift towards the least significant bit, filling with zeros.
    ///
    /// Shifting by `width` or more yields zero.
    pub fn shr(&self, amount: usize) -> Self {
        if amount >= self.width {
            return Self::zero(self.width);
        }
        let word_shift = amount / WORD_BITS;
        let bit_shift = amount % WORD_BITS;
        let count = self.words.len();

        let mut words = vec![0; count];
        for i in 0..count - word_shift {
            let src = i + word_shift;
            let mut w = self.words[src] >> bit_shift;
            if bit_shift != 0 && src + 1 < count {
                w |= self.words[src + 1] << (WORD_BITS - bit_shift);
            }
            words[i] = w;
        }

        Self {
            width: self.width,
            words,
        }
    }

    /// Arithmetic shift towards the least significant bit, filling with the
    /// most significant bit.
    ///
    /// Shifting by `width` or more yields all zeros or all ones.
    pub fn sar(&self, amount: usize) -> Self {
        if !self.msb() {
            return self.shr(amount);
        }
        if amount >= self.width {
            return Self::all_ones(self.width);
        }
        let fill = Self::all_ones(self.width).shl(self.width - amount);
        &self.shr(amount) | &fill
    }

    fn zip_words(&self, rhs: &Self, f: impl Fn(Word, Word) -> Word) -> Self {
        debug_assert_eq!(self.width, rhs.width);
        let mut result = Self {
            width: self.width,
            words: self
                .words
                .iter()
                .enumerate()
                .map(|(i, &w)| f(w, rhs.word(i)))
                .collect(),
        };
        result.mask();
        result
    }
}

impl Not for &BitStorage {
    type Output = BitStorage;

    #[inline]
    fn not(self) -> BitStorage {
        let mut result = BitStorage {
            width: self.width,
            words: self.words.iter().map(|w| !w).collect(),
        };
        result.mask();
        result
    }
}

impl Not for BitStorage {
    type Output = BitStorage;

    #[inline]
    fn not(self) -> BitStorage {
        !&self
    }
}

macro_rules! impl_bitwise {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl $Trait<&BitStorage> for &BitStorage {
            type Output = BitStorage;

            #[inline]
            fn $method(self, rhs: &BitStorage) -> BitStorage {
                self.zip_words(rhs, |a, b| a $op b)
            }
        }

        impl $Trait for BitStorage {
            type Output = BitStorage;

            #[inline]
            fn $method(self, rhs: BitStorage) -> BitStorage {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_bitwise!(BitAnd, bitand, &);
impl_bitwise!(BitOr, bitor, |);
impl_bitwise!(BitXor, bitxor, ^);

impl Shl<usize> for &BitStorage {
    type Output = BitStorage;

    #[inline]
    fn shl(self, amount: usize) -> BitStorage {
        BitStorage::shl(self, amount)
    }
}

impl Shr<usize> for &BitStorage {
    type Output = BitStorage;

    #[inline]
    fn shr(self, amount: usize) -> BitStorage {
        BitStorage::shr(self, amount)
    }
}
