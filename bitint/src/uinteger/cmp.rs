use std::cmp::Ordering;

use super::UInteger;

impl<const W: usize> PartialOrd for UInteger<W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const W: usize> Ord for UInteger<W> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_storage().cmp_unsigned(other.as_storage())
    }
}

impl<const W: usize> UInteger<W> {
    /// Compares against an unsigned integer of another width by zero-extending
    /// the narrower operand.
    #[inline]
    pub fn cmp_extended<const V: usize>(&self, other: &UInteger<V>) -> Ordering {
        self.as_storage().cmp_unsigned(other.as_storage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let a = UInteger::<150>::from_words(&[1, 0, 0]);
        let b = UInteger::<150>::from_words(&[0, u64::MAX, u64::MAX]);
        assert!(a > b);
        assert!(UInteger::<150>::zero() < b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_cmp_extended() {
        let small = UInteger::<8>::from(200u8);
        let large = UInteger::<100>::from(200u8);
        assert_eq!(small.cmp_extended(&large), Ordering::Equal);
        assert_eq!(small.cmp_extended(&UInteger::<100>::max()), Ordering::Less);
    }
}
