//! Word-level primitives that the multi-word algorithms are built from.

mod widening;

pub use widening::*;

/// The native unit a [`BitStorage`](crate::BitStorage) keeps its bits in.
pub type Word = u64;

/// Number of bits in one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of words needed to hold `width` bits.
#[inline]
pub const fn word_count(width: usize) -> usize {
    width.div_ceil(WORD_BITS)
}

/// Mask selecting the significant bits of the most significant word of a `width`-bit value.
#[inline]
pub const fn top_word_mask(width: usize) -> Word {
    match width % WORD_BITS {
        0 => Word::MAX,
        r => (1 << r) - 1,
    }
}
