use std::cmp::Ordering;

use super::{sub::ripple_sub, UInteger};
use crate::{ArithError, BitStorage};

/// Bit-serial restoring division that yields quotient bits most significant
/// first.
///
/// Holds a double-width remainder register and the divisor pre-shifted into
/// its upper half. Every step doubles the register and, if it is not below
/// the divisor, subtracts the divisor and emits a one. Stopping early leaves
/// the quotient truncated: [`QuotientBits::quotient`] then holds the bits
/// produced so far with the rest zero.
#[derive(Clone, Debug)]
pub struct QuotientBits {
    register: BitStorage,
    divisor: BitStorage,
    quotient: BitStorage,
    numerator_width: usize,
    remaining: usize,
}

impl QuotientBits {
    /// Prepares the division of `numerator` by `denominator`.
    ///
    /// The quotient has the width of `numerator`.
    pub fn new(numerator: &BitStorage, denominator: &BitStorage) -> Result<Self, ArithError> {
        if denominator.is_zero() {
            tracing::debug!(width = numerator.width(), "division by zero");
            return Err(ArithError::DivisionByZero);
        }
        let n = numerator.width();
        let register_width = n + n.max(denominator.bit_length()) + 1;
        Ok(Self {
            register: numerator.width_cast(register_width),
            divisor: denominator.width_cast(register_width).shl(n),
            quotient: BitStorage::zero(n),
            numerator_width: n,
            remaining: n,
        })
    }

    /// Returns how many quotient bits have not been produced yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns the quotient bits produced so far; unproduced bits are zero.
    #[inline]
    pub fn quotient(&self) -> &BitStorage {
        &self.quotient
    }

    /// Returns the remainder of the division.
    ///
    /// Only meaningful once every quotient bit has been produced.
    #[inline]
    pub fn remainder(&self) -> BitStorage {
        self.register
            .shr(self.numerator_width)
            .width_cast(self.numerator_width)
    }

    /// Runs the division to completion and returns `(quotient, remainder)`.
    pub fn finish(mut self) -> (BitStorage, BitStorage) {
        self.by_ref().for_each(drop);
        let remainder = self.remainder();
        (self.quotient, remainder)
    }
}

impl Iterator for QuotientBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let doubled = self.register.shl(1);
        let bit = doubled.cmp_unsigned(&self.divisor) != Ordering::Less;
        self.register = if bit {
            ripple_sub(&doubled, &self.divisor, doubled.width())
        } else {
            doubled
        };
        self.quotient.set_bit(self.remaining, bit);
        Some(bit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for QuotientBits {}

/// Divides `numerator` by `denominator`, returning `(quotient, remainder)`
/// at the width of `numerator`.
///
/// Cheap cases are answered directly: equal operands give `(1, 0)`, a zero
/// numerator gives `(0, 0)`, a smaller numerator gives `(0, numerator)` and
/// a denominator of one gives `(numerator, 0)`. Everything else runs the
/// bit-serial restoring algorithm of [`QuotientBits`].
pub fn restoring_division(
    numerator: &BitStorage,
    denominator: &BitStorage,
) -> Result<(BitStorage, BitStorage), ArithError> {
    let n = numerator.width();
    if denominator.is_zero() {
        tracing::debug!(width = n, "division by zero");
        return Err(ArithError::DivisionByZero);
    }

    match numerator.cmp_unsigned(denominator) {
        Ordering::Equal => return Ok((BitStorage::one(n), BitStorage::zero(n))),
        _ if numerator.is_zero() => return Ok((BitStorage::zero(n), BitStorage::zero(n))),
        Ordering::Less => return Ok((BitStorage::zero(n), numerator.clone())),
        Ordering::Greater => {}
    }
    if denominator.bit_length() == 1 {
        return Ok((numerator.clone(), BitStorage::zero(n)));
    }

    Ok(QuotientBits::new(numerator, denominator)?.finish())
}

impl<const W: usize> UInteger<W> {
    /// Divides `self` by `rhs`, returning `(quotient, remainder)`.
    ///
    /// Fails with [`ArithError::DivisionByZero`] if `rhs` is zero.
    pub fn restoring_division(&self, rhs: &Self) -> Result<(Self, Self), ArithError> {
        let (quotient, remainder) = restoring_division(self.as_storage(), rhs.as_storage())?;
        Ok((
            Self::from_storage_unchecked(quotient),
            Self::from_storage_unchecked(remainder),
        ))
    }

    /// Returns the quotient of `self / rhs`.
    ///
    /// Fails with [`ArithError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn div(&self, rhs: &Self) -> Result<Self, ArithError> {
        self.restoring_division(rhs).map(|(q, _)| q)
    }

    /// Returns the remainder of `self / rhs`.
    ///
    /// Fails with [`ArithError::DivisionByZero`] if `rhs` is zero.
    #[inline]
    pub fn remainder(&self, rhs: &Self) -> Result<Self, ArithError> {
        self.restoring_division(rhs).map(|(_, r)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_division_across_word_boundary() {
        let m = UInteger::<70>::one() << 65;
        let two = UInteger::<70>::from(2u8);

        let (q, r) = m.restoring_division(&two).unwrap();
        assert_eq!(q.word(1), 1);
        assert_eq!(q.word(0), 0);
        assert!(r.is_zero());

        let (q, r) = q.restoring_division(&two).unwrap();
        assert_eq!(q.word(1), 0);
        assert_eq!(q.word(0), 1 << 63);
        assert!(r.is_zero());
    }

    #[test]
    fn test_fast_paths() {
        let seven = UInteger::<32>::from(7u8);
        let three = UInteger::<32>::from(3u8);
        let zero = UInteger::<32>::zero();
        let one = UInteger::<32>::one();

        assert_eq!(seven.restoring_division(&seven), Ok((one.clone(), zero.clone())));
        assert_eq!(zero.restoring_division(&seven), Ok((zero.clone(), zero.clone())));
        assert_eq!(three.restoring_division(&seven), Ok((zero.clone(), three.clone())));
        assert_eq!(seven.restoring_division(&one), Ok((seven.clone(), zero.clone())));
        assert_eq!(seven.restoring_division(&three), Ok((UInteger::from(2u8), one)));
        assert_eq!(seven.div(&zero), Err(ArithError::DivisionByZero));
        assert_eq!(seven.remainder(&zero), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_quotient_bits_msb_first() {
        let n = BitStorage::from_u64(8, 0b1101_0110);
        let d = BitStorage::from_u64(8, 3);
        let bits: Vec<bool> = QuotientBits::new(&n, &d).unwrap().collect();
        let expected = 0b1101_0110u64 / 3;
        let expected: Vec<bool> = (0..8).rev().map(|i| (expected >> i) & 1 == 1).collect();
        assert_eq!(bits, expected);

        let mut partial = QuotientBits::new(&n, &d).unwrap();
        partial.by_ref().take(3).for_each(drop);
        assert_eq!(partial.remaining(), 5);
        assert_eq!(partial.quotient().word(0), (0b1101_0110u64 / 3) & 0b1110_0000);
    }
}
