//! C FFI bindings for the fixarr fixed-size array.
//!
//! Exposes the `init`/`deinit`/`new`/`free`/`set`/`get`/`len` contract over
//! raw pointers, reporting null arguments as [`FixStatus::SelfIsNull`] and
//! [`FixStatus::RetParamsIsNull`] instead of dereferencing them. This is the
//! only fixarr crate that may contain `unsafe` code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
// Exported functions take raw pointers and check them for null themselves.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

/// Run an FFI body, converting a panic into `$fallback`.
macro_rules! ffi_guard_or {
    ($fallback:expr, $body:block) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body)) {
            Ok(result) => result,
            Err(_) => {
                log::error!("panic caught at fixarr ffi boundary");
                $fallback
            }
        }
    };
}

/// Run an FFI body returning an `i32` status, mapping a panic to
/// `FixStatus::Panicked`.
macro_rules! ffi_guard {
    ($body:block) => {
        ffi_guard_or!($crate::status::FixStatus::Panicked as i32, $body)
    };
}

/// Lock a global table, returning `$fallback` from the enclosing closure
/// if the mutex was poisoned by an earlier panic.
macro_rules! ffi_lock {
    ($mutex:expr, $fallback:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => return $fallback,
        }
    };
    ($mutex:expr) => {
        ffi_lock!($mutex, $crate::status::FixStatus::Panicked as i32)
    };
}

pub mod array;
mod handle;
pub mod status;

pub use array::FixArray;
pub use status::FixStatus;
