//! Fixed-size array containers over zero-initialised contiguous memory.
//!
//! # Architecture
//!
//! ```text
//! FixedArray<T: Pod>   (compile-time typed, elem_size = size_of::<T>())
//! └── RawArray         (type-erased: length × elem_size bytes)
//!     └── Block        (zeroed Box<[u8]>, fallible allocation)
//! ```
//!
//! # Ownership modes
//!
//! - **Embedded:** the caller owns a [`RawArray`] value and drives it with
//!   [`RawArray::init`] / [`RawArray::deinit`].
//! - **Boxed:** [`RawArray::boxed`] heap-allocates the handle itself;
//!   [`RawArray::release`] tears it down through an `Option<Box<_>>` slot
//!   and is a no-op on an already-released slot.
//!
//! Both modes free their memory on drop; explicit teardown is idempotent.
//!
//! # Safety
//!
//! No `unsafe`. Allocation goes through `Vec::try_reserve_exact` so an
//! oversized request surfaces as [`ArrayError::OutOfMemory`] instead of an
//! abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod block;
pub mod raw;
pub mod typed;

pub use fixarr_core::{ArrayError, ArrayLayout};
pub use raw::RawArray;
pub use typed::FixedArray;
