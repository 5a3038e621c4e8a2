use bitint::uinteger::ripple_add;
use bitint::{BitStorage, UInteger};

use super::Float;

/// How a significand with more bits than the format holds is shortened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rounding {
    /// Round to nearest, ties to even. Overflow gives infinity.
    NearestEven,
    /// Drop the excess bits. Overflow still gives infinity.
    Truncate,
}

/// A finite value `(-1)^sign * significand * 2^exponent`.
#[derive(Clone, Debug)]
pub(crate) struct Unpacked {
    pub(crate) sign: bool,
    pub(crate) significand: BitStorage,
    pub(crate) exponent: i64,
}

/// Shifts `value` right by `amount >= 1` bits and rounds the result.
///
/// The result is one bit wider than `value` so a carry out of the rounding
/// increment is kept.
fn shift_right_round(value: &BitStorage, amount: usize, rounding: Rounding) -> BitStorage {
    let width = value.width() + 1;
    let truncated = value.shr(amount).width_cast(width);
    match rounding {
        Rounding::Truncate => truncated,
        Rounding::NearestEven => {
            let half = value.bit(amount - 1);
            let sticky = value.low_bits_nonzero(amount - 1);
            if half && (sticky || truncated.lsb()) {
                ripple_add(&truncated, &BitStorage::zero(width), true, width)
            } else {
                truncated
            }
        }
    }
}

/// Shifts `value` right by `amount` bits, OR-ing every bit shifted out into
/// the least significant bit of the result.
pub(crate) fn shift_right_jam(value: &BitStorage, amount: usize) -> BitStorage {
    let sticky = value.low_bits_nonzero(amount);
    let mut shifted = value.shr(amount);
    if sticky {
        shifted.set_bit(0, true);
    }
    shifted
}

impl<const E: usize, const M: usize> Float<E, M> {
    /// Rounds `(-1)^sign * significand * 2^exponent` into this format.
    ///
    /// The significand may have any width. The result is normalized when
    /// its magnitude allows it, subnormal or zero below the normal range, and
    /// infinite above it.
    pub(crate) fn round_and_pack(
        sign: bool,
        significand: &BitStorage,
        exponent: i64,
        rounding: Rounding,
    ) -> Self {
        let length = significand.bit_length();
        if length == 0 {
            return Self::signed_zero(sign);
        }

        let mantissa_bits = M as i64;
        let top = exponent + length as i64 - 1;
        // exponent of the lowest bit the format can hold at this magnitude
        let quantum = if top >= Self::min_exponent() {
            top - mantissa_bits
        } else {
            Self::min_exponent() - mantissa_bits
        };

        let shift = quantum - exponent;
        let rounded = if shift <= 0 {
            significand
                .width_cast(M + 2)
                .shl(shift.unsigned_abs() as usize)
        } else {
            let shift = shift.min(length as i64 + 1) as usize;
            shift_right_round(significand, shift, rounding).width_cast(M + 2)
        };
        let (rounded, quantum) = if rounded.bit(M + 1) {
            (rounded.shr(1), quantum + 1)
        } else {
            (rounded, quantum)
        };

        if rounded.is_zero() {
            return Self::signed_zero(sign);
        }
        let biased = if rounded.bit(M) {
            quantum + mantissa_bits + Self::bias()
        } else {
            0
        };
        if biased >= Self::all_ones_exponent() as i64 {
            return Self::signed_infinity(sign);
        }

        Self::with_exponent_field(sign, biased as u64, UInteger::from_storage(&rounded))
    }
}
