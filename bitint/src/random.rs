use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::{BitStorage, SInteger, UInteger};

impl<const W: usize> Distribution<UInteger<W>> for Standard {
    /// Samples every bit pattern of width `W` with equal probability.
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> UInteger<W> {
        UInteger::from_storage_unchecked(BitStorage::random(W, rng))
    }
}

impl<const W: usize> Distribution<SInteger<W>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SInteger<W> {
        SInteger::from_storage_unchecked(BitStorage::random(W, rng))
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    #[test]
    fn test_random_respects_width() {
        let mut rng = thread_rng();
        for _ in 0..32 {
            let a: UInteger<70> = rng.gen();
            assert!(a.word(1) < 1 << 6);
            let b: SInteger<3> = rng.gen();
            assert!(b.word(0) < 8);
        }
    }
}
