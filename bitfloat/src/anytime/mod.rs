//! Anytime arithmetic: operations that stop as soon as a requested number
//! of leading mantissa bits is known.
//!
//! Each operation takes a `budget`, the number of stored mantissa bits the
//! caller needs. With `budget >= M` the result is exactly that of the
//! corresponding [`Float`] operation. With a smaller budget the operands are
//! consumed most significant bit first while an interval around the exact
//! result is narrowed, and the work stops once the lower and the upper end
//! of the interval share their leading `budget + 1` significand bits. The
//! result is the exact value truncated toward zero to those bits; the
//! mantissa bits below the budget are zero.

use std::cmp::Ordering;

use bitint::uinteger::{ripple_add, ripple_sub};
use bitint::BitStorage;

use crate::float::{Division, Float, Rounding};

/// Returns `true` if `lower` and `upper` have the same bit length and agree
/// on their `bits` most significant bits.
fn leading_bits_agree(lower: &BitStorage, upper: &BitStorage, bits: usize) -> bool {
    let length = lower.bit_length();
    if length == 0 || upper.bit_length() != length {
        return false;
    }
    let shift = length.saturating_sub(bits);
    lower.shr(shift) == upper.shr(shift)
}

/// Keeps the `bits` most significant bits of `value`, clearing the rest.
fn truncate_to(value: &BitStorage, bits: usize) -> BitStorage {
    let shift = value.bit_length().saturating_sub(bits);
    value.shr(shift).shl(shift)
}

/// Computes `a + b` to at least `budget` correct mantissa bits.
pub fn anytime_add<const E: usize, const M: usize>(
    a: &Float<E, M>,
    b: &Float<E, M>,
    budget: usize,
) -> Float<E, M> {
    if budget >= M {
        return a.add(b);
    }
    if let Some(special) = a.add_special(b) {
        return special;
    }

    let (high, low) = a.align(b);
    let subtract = high.sign != low.sign;
    let (large, small, sign) = match high.significand.cmp_unsigned(&low.significand) {
        Ordering::Equal if subtract => return a.add(b),
        Ordering::Less if subtract => (&low.significand, &high.significand, low.sign),
        _ => (&high.significand, &low.significand, high.sign),
    };

    let width = large.width();
    let wanted = budget + 1;
    let mut lower = BitStorage::zero(width);
    // Truncating both addends below bit `cut` leaves each one short by less
    // than 2^cut.
    for cut in (0..width).rev() {
        let large_prefix = large.shr(cut).shl(cut);
        let small_prefix = small.shr(cut).shl(cut);
        let unit = BitStorage::one(width).shl(cut);

        let (low_end, high_end) = if subtract {
            let difference = ripple_sub(&large_prefix, &small_prefix, width);
            if cut == 0 {
                (difference.clone(), difference)
            } else if difference.cmp_unsigned(&unit) == Ordering::Less {
                continue;
            } else {
                let below = ripple_sub(&difference, &unit, width);
                let above = ripple_sub(&ripple_add(&difference, &unit, false, width), &BitStorage::one(width), width);
                (below, above)
            }
        } else {
            let sum = ripple_add(&large_prefix, &small_prefix, false, width);
            if cut == 0 {
                (sum.clone(), sum)
            } else {
                let slack = ripple_sub(&unit.shl(1), &BitStorage::one(width), width);
                let above = ripple_add(&sum, &slack, false, width);
                (sum, above)
            }
        };

        lower = low_end;
        if cut == 0 || leading_bits_agree(&lower, &high_end, wanted) {
            tracing::trace!(consumed = width - cut, budget, "anytime addition validated");
            break;
        }
    }

    Float::round_and_pack(sign, &truncate_to(&lower, wanted), high.exponent, Rounding::Truncate)
}

/// Computes `a - b` to at least `budget` correct mantissa bits.
#[inline]
pub fn anytime_sub<const E: usize, const M: usize>(
    a: &Float<E, M>,
    b: &Float<E, M>,
    budget: usize,
) -> Float<E, M> {
    anytime_add(a, &b.neg(), budget)
}

/// Computes `a * b` to at least `budget` correct mantissa bits.
///
/// Partial products are accumulated from the most significant bit of `b`'s
/// significand downwards. After the bits above position `i` are consumed the
/// exact product lies within `a * (2^i - 1)` above the accumulated sum.
pub fn anytime_mul<const E: usize, const M: usize>(
    a: &Float<E, M>,
    b: &Float<E, M>,
    budget: usize,
) -> Float<E, M> {
    if budget >= M || !a.is_finite() || !b.is_finite() || a.is_zero() || b.is_zero() {
        return a.mul(b);
    }

    let x = a.unpack();
    let y = b.unpack();
    let width = 2 * (M + 1);
    let multiplicand = x.significand.width_cast(width);
    let length = y.significand.bit_length();
    let wanted = budget + 1;

    let mut lower = BitStorage::zero(width);
    for i in (0..length).rev() {
        let shifted = multiplicand.shl(i);
        if y.significand.bit(i) {
            lower = ripple_add(&lower, &shifted, false, width);
        }
        let slack = ripple_sub(&shifted, &multiplicand, width);
        let upper = ripple_add(&lower, &slack, false, width);
        if i == 0 || leading_bits_agree(&lower, &upper, wanted) {
            tracing::trace!(consumed = length - i, budget, "anytime multiplication validated");
            break;
        }
    }

    Float::round_and_pack(
        x.sign ^ y.sign,
        &truncate_to(&lower, wanted),
        x.exponent + y.exponent,
        Rounding::Truncate,
    )
}

/// Computes `a / b` to at least `budget` correct mantissa bits.
///
/// Quotient bits come out of the restoring division most significant first
/// and never change once produced, so the division stops after `budget + 1`
/// significant bits.
pub fn anytime_div<const E: usize, const M: usize>(
    a: &Float<E, M>,
    b: &Float<E, M>,
    budget: usize,
) -> Float<E, M> {
    if budget >= M {
        return a.div(b);
    }
    let (sign, exponent, mut bits) = match a.prepare_division(b) {
        Division::Special(special) => return special,
        Division::Significands {
            sign,
            exponent,
            bits,
        } => (sign, exponent, bits),
    };

    let total = bits.len();
    let mut significant = 0;
    while significant <= budget {
        match bits.next() {
            Some(bit) => significant += (significant > 0 || bit) as usize,
            None => break,
        }
    }
    tracing::trace!(consumed = total - bits.remaining(), budget, "anytime division validated");

    Float::round_and_pack(sign, bits.quotient(), exponent, Rounding::Truncate)
}

#[cfg(test)]
mod tests {
    use super::*;

    type F32 = Float<8, 23>;

    #[test]
    fn test_leading_bits_agree() {
        let a = BitStorage::from_u64(16, 0b1011_0000);
        let b = BitStorage::from_u64(16, 0b1011_1111);
        assert!(leading_bits_agree(&a, &b, 4));
        assert!(!leading_bits_agree(&a, &b, 5));
        assert!(!leading_bits_agree(&a, &BitStorage::from_u64(16, 0b1_0000_0000), 1));
        assert_eq!(truncate_to(&b, 3).word(0), 0b1010_0000);
    }

    #[test]
    fn test_full_budget_is_exact() {
        let a = F32::from(1.0f32 / 3.0);
        let b = F32::from(-7.25f32);
        assert!(anytime_add(&a, &b, 23).bit_eq(&a.add(&b)));
        assert!(anytime_sub(&a, &b, 30).bit_eq(&a.sub(&b)));
        assert!(anytime_mul(&a, &b, 23).bit_eq(&a.mul(&b)));
        assert!(anytime_div(&a, &b, 23).bit_eq(&a.div(&b)));
    }

    #[test]
    fn test_truncated_mul() {
        // 1.5 * 1.5 = 2.25 = 0b10.01, which keeps only its leading one with a
        // budget of zero
        let x = F32::from(1.5f32);
        assert_eq!(anytime_mul(&x, &x, 0).to_f32(), 2.0);
        assert_eq!(anytime_mul(&x, &x, 3).to_f32(), 2.25);
    }

    #[test]
    fn test_truncated_div() {
        let one = F32::one();
        let three = F32::from(3.0f32);
        // 1/3 = 0b0.010101...
        assert_eq!(anytime_div(&one, &three, 0).to_f32(), 0.25);
        assert_eq!(anytime_div(&one, &three, 2).to_f32(), 0.3125);
        assert!(anytime_div(&one, &F32::zero(), 2).is_pos_inf());
        assert!(anytime_div(&one, &F32::neg_zero(), 2).is_neg_inf());
        assert!(anytime_div(&F32::zero(), &F32::zero(), 2).is_nan());
    }

    #[test]
    fn test_truncated_add() {
        let a = F32::from(1.0f32);
        let b = F32::from(0.75f32);
        assert_eq!(anytime_add(&a, &b, 0).to_f32(), 1.0);
        assert_eq!(anytime_add(&a, &b, 1).to_f32(), 1.5);
        assert_eq!(anytime_sub(&a, &b, 0).to_f32(), 0.25);
        assert!(anytime_sub(&a, &a, 4).is_zero());
        assert!(anytime_add(&F32::pos_infinity(), &F32::neg_infinity(), 4).is_nan());
    }
}
