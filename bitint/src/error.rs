//! This module defines the errors that may occur during integer
//! arithmetic and when rebuilding values from raw parts.

use thiserror::Error;

/// Errors that may occur.
///
/// Overflow is never an error: non-expanding operations wrap modulo `2^W`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// Error that occurs when the denominator of a division or remainder is zero.
    #[error("Attempted division by zero")]
    DivisionByZero,
}

/// Errors that occur when a storage is rebuilt from raw parts, such as
/// during deserialization.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Error that occurs when a storage declares a width of zero bits.
    #[error("A bit storage needs at least one bit")]
    ZeroWidth,
    /// Error that occurs when the number of words does not fit the width.
    #[error("A storage of {width} bits needs {expected} words, found {found}")]
    WordCount {
        /// The declared width.
        width: usize,
        /// The number of words the width needs.
        expected: usize,
        /// The number of words supplied.
        found: usize,
    },
    /// Error that occurs when a storage's width differs from the integer width.
    #[error("Expected a storage of {expected} bits, found {found}")]
    WidthMismatch {
        /// The width of the integer type.
        expected: usize,
        /// The width of the supplied storage.
        found: usize,
    },
}
