//! Floating-point values with runtime-chosen field widths.
//!
//! The exponent field uses a bias of `2^(E-1) - 1`. An all-zero exponent
//! field encodes zero and subnormals, an all-ones field encodes infinity
//! (zero mantissa) and NaN (nonzero mantissa). Quiet NaNs have the most
//! significant mantissa bit set.

use bitint::{BitStorage, UInteger};
use serde::{Deserialize, Serialize};

mod add;
mod cmp;
mod convert;
mod div;
mod mul;
mod round;

pub(crate) use div::Division;
pub(crate) use round::{Rounding, Unpacked};

/// A binary floating-point number with an `E`-bit exponent field and an
/// `M`-bit mantissa field.
///
/// `E` must lie in `2..=62` and `M` must be at least one. `Float<8, 23>` and
/// `Float<11, 52>` have the layout of the native `f32` and `f64`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Float<const E: usize, const M: usize> {
    sign: bool,
    exponent: UInteger<E>,
    mantissa: UInteger<M>,
}

impl<const E: usize, const M: usize> Float<E, M> {
    /// The width of the exponent field.
    pub const EXPONENT_WIDTH: usize = E;
    /// The width of the stored mantissa field.
    pub const MANTISSA_WIDTH: usize = M;

    /// Assembles a value from its three fields.
    #[inline]
    pub fn from_parts(sign: bool, exponent: UInteger<E>, mantissa: UInteger<M>) -> Self {
        const { assert!(E >= 2 && E <= 62, "exponent width must lie in 2..=62") };
        Self {
            sign,
            exponent,
            mantissa,
        }
    }

    #[inline]
    fn with_exponent_field(sign: bool, exponent: u64, mantissa: UInteger<M>) -> Self {
        Self::from_parts(sign, UInteger::from(exponent), mantissa)
    }

    /// Returns the exponent bias, `2^(E-1) - 1`.
    #[inline]
    pub const fn bias() -> i64 {
        (1 << (E - 1)) - 1
    }

    /// Returns the largest unbiased exponent of a finite value.
    #[inline]
    pub const fn max_exponent() -> i64 {
        Self::bias()
    }

    /// Returns the unbiased exponent of the smallest normalized value.
    #[inline]
    pub const fn min_exponent() -> i64 {
        1 - Self::bias()
    }

    #[inline]
    const fn all_ones_exponent() -> u64 {
        (1 << E) - 1
    }

    /// Returns `+0`.
    #[inline]
    pub fn zero() -> Self {
        Self::with_exponent_field(false, 0, UInteger::zero())
    }

    /// Returns `-0`.
    #[inline]
    pub fn neg_zero() -> Self {
        Self::with_exponent_field(true, 0, UInteger::zero())
    }

    #[inline]
    pub(crate) fn signed_zero(sign: bool) -> Self {
        Self::with_exponent_field(sign, 0, UInteger::zero())
    }

    /// Returns `1`.
    #[inline]
    pub fn one() -> Self {
        Self::with_exponent_field(false, Self::bias() as u64, UInteger::zero())
    }

    /// Returns positive infinity.
    #[inline]
    pub fn pos_infinity() -> Self {
        Self::signed_infinity(false)
    }

    /// Returns negative infinity.
    #[inline]
    pub fn neg_infinity() -> Self {
        Self::signed_infinity(true)
    }

    #[inline]
    pub(crate) fn signed_infinity(sign: bool) -> Self {
        Self::with_exponent_field(sign, Self::all_ones_exponent(), UInteger::zero())
    }

    /// Returns the canonical quiet NaN: all-ones exponent, only the most
    /// significant mantissa bit set.
    #[inline]
    pub fn nan() -> Self {
        Self::with_exponent_field(false, Self::all_ones_exponent(), UInteger::one() << (M - 1))
    }

    /// Returns a signalling NaN: all-ones exponent, only the least
    /// significant mantissa bit set.
    ///
    /// With `M == 1` there is no signalling pattern and this equals [`Float::nan`].
    #[inline]
    pub fn snan() -> Self {
        Self::with_exponent_field(false, Self::all_ones_exponent(), UInteger::one())
    }

    /// Returns the largest finite value.
    #[inline]
    pub fn max() -> Self {
        Self::with_exponent_field(false, Self::all_ones_exponent() - 1, UInteger::all_ones())
    }

    /// Returns the most negative finite value.
    #[inline]
    pub fn min() -> Self {
        Self::with_exponent_field(true, Self::all_ones_exponent() - 1, UInteger::all_ones())
    }

    /// Returns the smallest positive normalized value, `2^min_exponent`.
    #[inline]
    pub fn smallest_normalized() -> Self {
        Self::with_exponent_field(false, 1, UInteger::zero())
    }

    /// Returns the smallest positive subnormal value, `2^(min_exponent - M)`.
    #[inline]
    pub fn smallest_denormalized() -> Self {
        Self::with_exponent_field(false, 0, UInteger::one())
    }

    /// Returns `true` for negative values, including `-0` and NaNs with the
    /// sign bit set.
    #[inline]
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Returns the biased exponent field.
    #[inline]
    pub fn exponent(&self) -> &UInteger<E> {
        &self.exponent
    }

    /// Returns the stored mantissa field, without the implicit bit.
    #[inline]
    pub fn mantissa(&self) -> &UInteger<M> {
        &self.mantissa
    }

    #[inline]
    fn exponent_field(&self) -> u64 {
        self.exponent.as_u64()
    }

    /// Returns the `M + 1` bit significand, with the implicit leading one
    /// set for normalized values.
    pub fn full_mantissa(&self) -> BitStorage {
        self.mantissa
            .as_storage()
            .width_cast(M + 1)
            .with_bit(M, self.exponent_field() != 0)
    }

    /// Returns the exponent without bias.
    ///
    /// Zero and subnormals report [`Float::min_exponent`], the exponent their
    /// mantissa is scaled by.
    #[inline]
    pub fn unbiased_exponent(&self) -> i64 {
        match self.exponent_field() {
            0 => Self::min_exponent(),
            field => field as i64 - Self::bias(),
        }
    }

    /// Returns `true` for `+0` and `-0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.exponent.is_zero() && self.mantissa.is_zero()
    }

    /// Returns `true` for infinity and NaN, whose exponent field is all ones.
    #[inline]
    pub fn is_special(&self) -> bool {
        self.exponent_field() == Self::all_ones_exponent()
    }

    /// Returns `true` for either infinity.
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.is_special() && self.mantissa.is_zero()
    }

    /// Returns `true` for positive infinity.
    #[inline]
    pub fn is_pos_inf(&self) -> bool {
        self.is_inf() && !self.sign
    }

    /// Returns `true` for negative infinity.
    #[inline]
    pub fn is_neg_inf(&self) -> bool {
        self.is_inf() && self.sign
    }

    /// Returns `true` for any NaN, quiet or signalling.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.is_special() && !self.mantissa.is_zero()
    }

    /// Returns `true` for values that are neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_special()
    }

    /// Returns `true` if the sign bit is set and the value is not NaN.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign && !self.is_nan()
    }

    /// Returns `true` if the sign bit is clear and the value is not NaN.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.sign && !self.is_nan()
    }

    /// Returns `true` for finite values with the implicit leading one.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.is_finite() && !self.exponent.is_zero()
    }

    /// Returns `true` for nonzero values below the smallest normalized value.
    #[inline]
    pub fn is_subnormal(&self) -> bool {
        self.exponent.is_zero() && !self.mantissa.is_zero()
    }

    /// Returns the value with the sign flipped. NaNs flip their sign bit too.
    #[inline]
    pub fn neg(&self) -> Self {
        Self::from_parts(!self.sign, self.exponent.clone(), self.mantissa.clone())
    }

    /// Returns the value with the sign bit cleared.
    #[inline]
    pub fn abs(&self) -> Self {
        Self::from_parts(false, self.exponent.clone(), self.mantissa.clone())
    }

    /// Splits a finite value into sign, significand and the exponent that
    /// scales the significand's least significant bit.
    pub(crate) fn unpack(&self) -> Unpacked {
        Unpacked {
            sign: self.sign,
            significand: self.full_mantissa(),
            exponent: self.unbiased_exponent() - M as i64,
        }
    }
}

impl_float_binary_op!(Add, add, |a, b| a.add(b));
impl_float_binary_op!(Sub, sub, |a, b| a.sub(b));
impl_float_binary_op!(Mul, mul, |a, b| a.mul(b));
impl_float_binary_op!(Div, div, |a, b| a.div(b));

impl<const E: usize, const M: usize> std::ops::Neg for &Float<E, M> {
    type Output = Float<E, M>;

    #[inline]
    fn neg(self) -> Float<E, M> {
        Float::neg(self)
    }
}

impl<const E: usize, const M: usize> std::ops::Neg for Float<E, M> {
    type Output = Float<E, M>;

    #[inline]
    fn neg(self) -> Float<E, M> {
        Float::neg(&self)
    }
}

impl<const E: usize, const M: usize> Default for Float<E, M> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<const E: usize, const M: usize> num_traits::Zero for Float<E, M> {
    #[inline]
    fn zero() -> Self {
        Self::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Float::is_zero(self)
    }
}

impl<const E: usize, const M: usize> num_traits::One for Float<E, M> {
    #[inline]
    fn one() -> Self {
        Self::one()
    }
}

impl<const E: usize, const M: usize> num_traits::Bounded for Float<E, M> {
    #[inline]
    fn min_value() -> Self {
        Self::min()
    }

    #[inline]
    fn max_value() -> Self {
        Self::max()
    }
}
