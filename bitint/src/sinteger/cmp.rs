use std::cmp::Ordering;

use super::SInteger;

impl<const W: usize> PartialOrd for SInteger<W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const W: usize> Ord for SInteger<W> {
    /// The sign bit overrides the magnitude: any negative value is below any
    /// non-negative one. Values of equal sign order like their bit patterns.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_storage().cmp_signed(other.as_storage())
    }
}

impl<const W: usize> SInteger<W> {
    /// Compares against a signed integer of another width by sign-extending
    /// the narrower operand.
    #[inline]
    pub fn cmp_extended<const V: usize>(&self, other: &SInteger<V>) -> Ordering {
        self.as_storage().cmp_signed(other.as_storage())
    }
}
