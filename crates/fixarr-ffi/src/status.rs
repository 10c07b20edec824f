//! C-compatible status codes.
//!
//! [`FixStatus`] is a `repr(i32)` enum whose values match the C header's
//! `status_t`. Code 3 is unassigned. Conversions from [`ArrayError`] are
//! provided.

use std::ffi::{c_char, CStr};

use fixarr_core::ArrayError;

/// C-compatible status code returned by all FFI functions.
///
/// `Ok` = 0; errors are positive, except `Panicked`. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FixStatus {
    /// Success.
    Ok = 0,
    /// The array (or slot) pointer is null.
    SelfIsNull = 1,
    /// An output pointer is null.
    RetParamsIsNull = 2,
    /// The backing block could not be allocated.
    OutOfMemory = 4,
    /// Index at or past the end, or a zero length at initialization.
    OutOfRange = 5,
    /// Caller's byte count differs from the array's element size.
    ElementSizeMismatch = 6,
    /// Any other invalid argument (zero element size, null input buffer,
    /// stale record).
    InvalidArguments = 7,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl FixStatus {
    /// Every status, in declaration order.
    pub const ALL: [FixStatus; 8] = [
        FixStatus::Ok,
        FixStatus::SelfIsNull,
        FixStatus::RetParamsIsNull,
        FixStatus::OutOfMemory,
        FixStatus::OutOfRange,
        FixStatus::ElementSizeMismatch,
        FixStatus::InvalidArguments,
        FixStatus::Panicked,
    ];

    /// Look up a status by its raw code.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| *s as i32 == code)
    }

    /// Static, human-readable description.
    pub fn message(self) -> &'static CStr {
        match self {
            FixStatus::Ok => c"ok",
            FixStatus::SelfIsNull => c"self is null",
            FixStatus::RetParamsIsNull => c"out params is missing",
            FixStatus::OutOfMemory => c"out of memory",
            FixStatus::OutOfRange => c"index out of range",
            FixStatus::ElementSizeMismatch => c"type size mismatched",
            FixStatus::InvalidArguments => c"invalid arguments",
            FixStatus::Panicked => c"panic caught at ffi boundary",
        }
    }
}

impl From<&ArrayError> for FixStatus {
    fn from(e: &ArrayError) -> Self {
        match e {
            ArrayError::ZeroLength => FixStatus::OutOfRange,
            ArrayError::ZeroElementSize => FixStatus::InvalidArguments,
            ArrayError::CapacityOverflow { .. } => FixStatus::OutOfMemory,
            ArrayError::OutOfMemory { .. } => FixStatus::OutOfMemory,
            ArrayError::IndexOutOfRange { .. } => FixStatus::OutOfRange,
            ArrayError::ElementSizeMismatch { .. } => FixStatus::ElementSizeMismatch,
        }
    }
}

/// Describe a status code as a static NUL-terminated string.
///
/// Unknown codes yield `"unrecognized status"`. The returned pointer is
/// valid for the lifetime of the process and must not be freed.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_status_message(status: i32) -> *const c_char {
    match FixStatus::from_code(status) {
        Some(s) => s.message().as_ptr(),
        None => c"unrecognized status".as_ptr(),
    }
}
