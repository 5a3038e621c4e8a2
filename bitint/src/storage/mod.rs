//! Fixed-width word containers without any arithmetic meaning.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::numeric::{top_word_mask, word_count, Word, WORD_BITS};
use crate::StorageError;

mod bitops;

/// An ordered run of [`Word`]s holding exactly `width` significant bits.
///
/// Words are kept least significant first. Bits above `width` are always
/// zero; every constructor and every mutating method re-establishes this.
/// Deserialization goes through [`BitStorage::from_raw_parts`].
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStorage")]
pub struct BitStorage {
    width: usize,
    words: Vec<Word>,
}

/// Unvalidated serialized form of a [`BitStorage`].
#[derive(Deserialize)]
struct RawStorage {
    width: usize,
    words: Vec<Word>,
}

/// Unvalidated serialized form of an integer wrapping a [`BitStorage`].
#[derive(Deserialize)]
pub(crate) struct RawInteger {
    pub(crate) bits: BitStorage,
}

impl TryFrom<RawStorage> for BitStorage {
    type Error = StorageError;

    #[inline]
    fn try_from(raw: RawStorage) -> Result<Self, StorageError> {
        Self::from_raw_parts(raw.width, raw.words)
    }
}

impl BitStorage {
    /// Creates a [`BitStorage`] of `width` bits, all zero.
    #[inline]
    pub fn zero(width: usize) -> Self {
        debug_assert!(width > 0, "a bit storage needs at least one bit");
        Self {
            width,
            words: vec![0; word_count(width)],
        }
    }

    /// Creates a [`BitStorage`] of `width` bits, all one.
    #[inline]
    pub fn all_ones(width: usize) -> Self {
        let mut storage = Self {
            width,
            words: vec![Word::MAX; word_count(width)],
        };
        storage.mask();
        storage
    }

    /// Creates a [`BitStorage`] holding the value one.
    #[inline]
    pub fn one(width: usize) -> Self {
        Self::from_u64(width, 1)
    }

    /// Creates a [`BitStorage`] from a native word, dropping the bits that
    /// do not fit into `width`.
    #[inline]
    pub fn from_u64(width: usize, value: u64) -> Self {
        Self::from_le_words(width, [value])
    }

    /// Creates a [`BitStorage`] from a native `u128`, dropping the bits that
    /// do not fit into `width`.
    #[inline]
    pub fn from_u128(width: usize, value: u128) -> Self {
        Self::from_le_words(width, [value as Word, (value >> WORD_BITS) as Word])
    }

    /// Creates a [`BitStorage`] from words given **most significant first**.
    ///
    /// The last word of `words` becomes word `0`. Missing words are zero;
    /// surplus leading words and bits above `width` are dropped.
    pub fn from_words(width: usize, words: &[Word]) -> Self {
        Self::from_le_words(width, words.iter().rev().copied())
    }

    /// Creates a [`BitStorage`] from words given least significant first.
    pub fn from_le_words<I>(width: usize, words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let count = word_count(width);
        let mut buffer: Vec<Word> = words.into_iter().take(count).collect();
        buffer.resize(count, 0);
        let mut storage = Self {
            width,
            words: buffer,
        };
        storage.mask();
        storage
    }

    /// Rebuilds a [`BitStorage`] from its width and its words, least
    /// significant first.
    ///
    /// Fails if `width` is zero or `words` does not hold exactly the number of
    /// words the width needs. Bits above `width` are cleared.
    pub fn from_raw_parts(width: usize, words: Vec<Word>) -> Result<Self, StorageError> {
        if width == 0 {
            return Err(StorageError::ZeroWidth);
        }
        let expected = word_count(width);
        if words.len() != expected {
            return Err(StorageError::WordCount {
                width,
                expected,
                found: words.len(),
            });
        }
        let mut storage = Self { width, words };
        storage.mask();
        Ok(storage)
    }

    /// Samples a uniformly random [`BitStorage`] of `width` bits.
    pub fn random<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        Self::from_le_words(width, (0..word_count(width)).map(|_| rng.gen::<Word>()))
    }

    /// Returns the number of significant bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of words used to store the bits.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the words, least significant first.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the word at `index`, or zero if `index` is past the last word.
    #[inline]
    pub fn word(&self, index: usize) -> Word {
        self.words.get(index).copied().unwrap_or(0)
    }

    /// Overwrites the word at `index`, masking bits above the width.
    ///
    /// Indices past the last word are ignored.
    #[inline]
    pub fn set_word(&mut self, index: usize, value: Word) {
        if let Some(word) = self.words.get_mut(index) {
            *word = value;
            self.mask();
        }
    }

    /// Returns the bit at `index`; bits past the width read as zero.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        index < self.width && (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    /// Sets the bit at `index`. Indices past the width are ignored.
    #[inline]
    pub fn set_bit(&mut self, index: usize, value: bool) {
        if index >= self.width {
            return;
        }
        let mask = 1 << (index % WORD_BITS);
        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Returns a copy of `self` with the bit at `index` set to `value`.
    #[inline]
    pub fn with_bit(mut self, index: usize, value: bool) -> Self {
        self.set_bit(index, value);
        self
    }

    /// Returns the most significant bit.
    #[inline]
    pub fn msb(&self) -> bool {
        self.width > 0 && self.bit(self.width - 1)
    }

    /// Returns the least significant bit.
    #[inline]
    pub fn lsb(&self) -> bool {
        self.bit(0)
    }

    /// Returns `true` if every bit is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns `true` if every bit is one.
    #[inline]
    pub fn is_all_ones(&self) -> bool {
        *self == Self::all_ones(self.width)
    }

    /// Returns the number of ones.
    #[inline]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the number of leading zeros counted from bit `width - 1`.
    ///
    /// A zero storage has `width` leading zeros.
    pub fn count_leading_zeros(&self) -> usize {
        let unused = self.words.len() * WORD_BITS - self.width;
        for (i, &w) in self.words.iter().enumerate().rev() {
            if w != 0 {
                let above = (self.words.len() - 1 - i) * WORD_BITS;
                return above + w.leading_zeros() as usize - unused;
            }
        }
        self.width
    }

    /// Returns the number of trailing zeros; a zero storage has `width`.
    pub fn count_trailing_zeros(&self) -> usize {
        for (i, &w) in self.words.iter().enumerate() {
            if w != 0 {
                return i * WORD_BITS + w.trailing_zeros() as usize;
            }
        }
        self.width
    }

    /// Returns the position of the highest set bit plus one, zero for a zero storage.
    #[inline]
    pub fn bit_length(&self) -> usize {
        self.width - self.count_leading_zeros()
    }

    /// Returns `true` if any of the `count` least significant bits is set.
    pub fn low_bits_nonzero(&self, count: usize) -> bool {
        let count = count.min(self.width);
        let full = count / WORD_BITS;
        if self.words[..full].iter().any(|&w| w != 0) {
            return true;
        }
        let rest = count % WORD_BITS;
        rest != 0 && self.words[full] & ((1 << rest) - 1) != 0
    }

    /// Zero-extends or truncates to `width` bits.
    ///
    /// Narrowing drops the most significant bits.
    pub fn width_cast(&self, width: usize) -> Self {
        Self::from_le_words(width, self.words.iter().copied())
    }

    /// Sign-extends (or truncates) to `width` bits, treating the most
    /// significant bit as a two's-complement sign.
    pub fn sign_extend(&self, width: usize) -> Self {
        let mut result = self.width_cast(width);
        if width > self.width && self.msb() {
            for i in self.width..width {
                result.set_bit(i, true);
            }
        }
        result
    }

    /// Compares two storages as unsigned magnitudes, zero-extending the narrower one.
    pub fn cmp_unsigned(&self, other: &Self) -> Ordering {
        let count = self.words.len().max(other.words.len());
        for i in (0..count).rev() {
            match self.word(i).cmp(&other.word(i)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Compares two storages as two's-complement numbers, sign-extending the narrower one.
    pub fn cmp_signed(&self, other: &Self) -> Ordering {
        match (self.msb(), other.msb()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_unsigned(other),
            (true, true) => {
                let width = self.width.max(other.width);
                self.sign_extend(width)
                    .cmp_unsigned(&other.sign_extend(width))
            }
        }
    }

    /// Gives mutable access to the words for algorithms that rebuild a value in place.
    ///
    /// The caller must leave the bits above the width cleared, which
    /// [`BitStorage::mask`] restores.
    #[inline]
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Clears the bits above the width.
    #[inline]
    pub(crate) fn mask(&mut self) {
        if let Some(top) = self.words.last_mut() {
            *top &= top_word_mask(self.width);
        }
    }
}

impl fmt::Debug for BitStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitStorage<{}>[", self.width)?;
        for (i, w) in self.words.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{w:#018x}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masking() {
        let s = BitStorage::all_ones(70);
        assert_eq!(s.word(0), Word::MAX);
        assert_eq!(s.word(1), 0b11_1111);
        assert_eq!(s.count_ones(), 70);

        let mut s = BitStorage::zero(70);
        s.set_word(1, Word::MAX);
        assert_eq!(s.word(1), 0b11_1111);
    }

    #[test]
    fn test_from_raw_parts() {
        let s = BitStorage::from_raw_parts(5, vec![0xFF]).unwrap();
        assert_eq!(s.word(0), 0b1_1111);
        assert_eq!(s.count_ones(), 5);

        assert_eq!(
            BitStorage::from_raw_parts(200, vec![1]),
            Err(StorageError::WordCount {
                width: 200,
                expected: 4,
                found: 1
            })
        );
        assert_eq!(
            BitStorage::from_raw_parts(0, vec![]),
            Err(StorageError::ZeroWidth)
        );
    }

    #[test]
    fn test_from_words_msw_first() {
        let s = BitStorage::from_words(150, &[8, 4, 2]);
        assert_eq!(s.word(0), 2);
        assert_eq!(s.word(1), 4);
        assert_eq!(s.word(2), 8);

        let s = BitStorage::from_words(64, &[1, 2]);
        assert_eq!(s.words(), &[2]);
    }

    #[test]
    fn test_leading_trailing_zeros() {
        let s = BitStorage::from_u64(150, 1);
        assert_eq!(s.count_leading_zeros(), 149);
        assert_eq!(s.count_trailing_zeros(), 0);
        assert_eq!(s.bit_length(), 1);

        let s = BitStorage::zero(150).with_bit(149, true);
        assert_eq!(s.count_leading_zeros(), 0);
        assert_eq!(s.count_trailing_zeros(), 149);

        let s = BitStorage::zero(5);
        assert_eq!(s.count_leading_zeros(), 5);
        assert_eq!(s.count_trailing_zeros(), 5);
    }

    #[test]
    fn test_low_bits_nonzero() {
        let s = BitStorage::zero(130).with_bit(70, true);
        assert!(!s.low_bits_nonzero(70));
        assert!(s.low_bits_nonzero(71));
        assert!(s.low_bits_nonzero(500));
    }

    #[test]
    fn test_sign_extend() {
        let s = BitStorage::from_u64(4, 0b1010);
        let e = s.sign_extend(70);
        assert_eq!(e.word(0), Word::MAX - 5);
        assert_eq!(e.word(1), 0b11_1111);
        assert_eq!(e.sign_extend(4), s);
        assert_eq!(BitStorage::from_u64(4, 0b0110).sign_extend(8).word(0), 0b0110);
    }

    #[test]
    fn test_compare() {
        let a = BitStorage::from_u64(8, 0xFF);
        let b = BitStorage::from_u64(100, 0xFF);
        assert_eq!(a.cmp_unsigned(&b), Ordering::Equal);
        assert_eq!(a.cmp_signed(&b), Ordering::Less);
        assert_eq!(
            a.cmp_signed(&BitStorage::all_ones(100)),
            Ordering::Equal
        );
    }
}
