//! Error types for array construction and element access.
//!
//! Null-pointer conditions (`SelfIsNull`, `RetParamsIsNull`) cannot occur
//! through Rust references and are only reported by the C bindings.

use std::error::Error;
use std::fmt;

/// Errors from array initialization and element access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An array was requested with zero elements.
    ZeroLength,
    /// An array was requested with a zero-byte element size.
    ZeroElementSize,
    /// `length * elem_size` does not fit in a single allocation.
    CapacityOverflow {
        /// Requested element count.
        length: usize,
        /// Requested element size in bytes.
        elem_size: usize,
    },
    /// The allocator could not satisfy the request.
    OutOfMemory {
        /// Number of bytes requested.
        requested: usize,
    },
    /// An element index at or past the end of the array.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of elements in the array.
        length: usize,
    },
    /// The caller's element buffer does not match the array's element size.
    ElementSizeMismatch {
        /// Element size the array was initialized with.
        expected: usize,
        /// Byte count supplied by the caller.
        actual: usize,
    },
}

impl ArrayError {
    /// Returns `true` if the error came from a failed or impossible allocation.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self,
            Self::CapacityOverflow { .. } | Self::OutOfMemory { .. }
        )
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "array length must be non-zero"),
            Self::ZeroElementSize => write!(f, "element size must be non-zero"),
            Self::CapacityOverflow { length, elem_size } => {
                write!(
                    f,
                    "capacity overflow: {length} elements of {elem_size} bytes"
                )
            }
            Self::OutOfMemory { requested } => {
                write!(f, "out of memory: failed to allocate {requested} bytes")
            }
            Self::IndexOutOfRange { index, length } => {
                write!(f, "index {index} out of range for length {length}")
            }
            Self::ElementSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "element size mismatch: expected {expected} bytes, got {actual}"
                )
            }
        }
    }
}

impl Error for ArrayError {}
