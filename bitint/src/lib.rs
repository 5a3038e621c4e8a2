#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "nightly", feature(bigint_helper_methods))]
#![deny(missing_docs)]

//! Bit-exact unsigned and signed integers of any fixed width.
//!
//! Values are stored in a [`BitStorage`], a run of little-endian [`Word`]s
//! whose bits above the declared width are always zero. [`UInteger`] and
//! [`SInteger`] fix the width as a const parameter and give the storage an
//! unsigned or two's-complement meaning.
//!
//! Every non-expanding operation wraps modulo `2^W`. The `expanding_*`
//! family picks a result width large enough that nothing is lost. Division
//! is the only fallible operation and reports [`ArithError::DivisionByZero`].
//! Deserialized values are validated and rejected with a [`StorageError`].

#[macro_use]
mod macros;

pub mod error;
pub mod numeric;
pub mod sinteger;
pub mod storage;
pub mod uinteger;

mod random;

pub use error::{ArithError, StorageError};
pub use numeric::{Word, WORD_BITS};
pub use sinteger::SInteger;
pub use storage::BitStorage;
pub use uinteger::{QuotientBits, UInteger, KARATSUBA_CUTOFF};
