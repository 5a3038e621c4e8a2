#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

//! IEEE-754-style binary floating point with arbitrary exponent and mantissa
//! widths, built on the fixed-width integers of [`bitint`].
//!
//! A [`Float<E, M>`] is a sign bit, an `E`-bit biased exponent field and an
//! `M`-bit mantissa field with an implicit leading one for normalized values.
//! Every operation is total and rounds to nearest, ties to even. The
//! [`anytime`] module offers variants of the arithmetic operations that stop
//! as soon as a requested number of leading mantissa bits is known.

#[macro_use]
mod macros;

pub mod anytime;
pub mod float;

mod random;

pub use anytime::{anytime_add, anytime_div, anytime_mul, anytime_sub};
pub use float::Float;
pub use random::FiniteFloats;
