//! Errors reported by the algebra engine.
//!
//! Every variant is a contract violation on the caller's or a field implementation's side,
//! never a transient condition; none of them are meaningfully recoverable.

use std::fmt;

/// An error produced by the algebra engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation has no applicable rule for the given operands.
    ///
    /// With the typed [`Operand`](crate::element::Operand) surface this only remains reachable
    /// for two bare scalars, which belong to no field and therefore cannot be composed into an
    /// element tree.
    OperationNotSupported {
        /// The operation that was attempted.
        op: &'static str,
    },

    /// A term or factor was requested past the reported count.
    IndexOutOfRange {
        /// The requested index.
        index: usize,

        /// The number of terms / factors actually present.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OperationNotSupported { op } => {
                write!(f, "`{}` is not supported for two plain scalars", op)
            },
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} is out of range for a node with {} entries", index, len)
            },
        }
    }
}

impl std::error::Error for Error {}
