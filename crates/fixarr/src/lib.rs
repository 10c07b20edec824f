//! fixarr: a fixed-size, type-erased array over zero-initialised memory.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the fixarr sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use fixarr::prelude::*;
//!
//! // Embedded mode: the handle lives on the stack.
//! let mut array = RawArray::empty();
//! array.init(10, 4).unwrap();
//! array.set(2, &42i32.to_ne_bytes()).unwrap();
//!
//! let mut out = [0u8; 4];
//! array.get(2, &mut out).unwrap();
//! assert_eq!(i32::from_ne_bytes(out), 42);
//! assert_eq!(
//!     array.get(10, &mut out),
//!     Err(ArrayError::IndexOutOfRange { index: 10, length: 10 })
//! );
//! array.deinit();
//!
//! // Boxed mode: release clears the slot and tolerates a second call.
//! let mut slot = RawArray::boxed(1000, 4);
//! assert!(slot.is_some());
//! RawArray::release(&mut slot);
//! RawArray::release(&mut slot);
//! assert!(slot.is_none());
//!
//! // Typed mode: element size comes from the type.
//! let mut typed = FixedArray::<u32>::new(3).unwrap();
//! typed.set(1, 7).unwrap();
//! assert_eq!(typed.to_string(), "[0 7 0]");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `fixarr-core` | `ArrayError`, `ArrayLayout` |
//! | [`array`] | `fixarr-array` | `RawArray`, `FixedArray` |
//! | [`ffi`] | `fixarr-ffi` | C ABI functions, `FixArray`, `FixStatus` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error taxonomy and validated layouts (`fixarr-core`).
pub use fixarr_core as types;

/// Byte-oriented and typed array containers (`fixarr-array`).
///
/// [`array::RawArray`] is the type-erased handle; [`array::FixedArray`]
/// fixes the element type at compile time.
pub use fixarr_array as array;

/// C ABI surface (`fixarr-ffi`).
///
/// Pointer-based `fixarr_*` functions returning [`ffi::FixStatus`] codes.
pub use fixarr_ffi as ffi;

/// Common imports for typical fixarr usage.
pub mod prelude {
    pub use fixarr_array::{FixedArray, RawArray};
    pub use fixarr_core::{ArrayError, ArrayLayout};
    pub use fixarr_ffi::{FixArray, FixStatus};
}
