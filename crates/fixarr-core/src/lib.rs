//! Core types for the fixarr fixed-size array.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! error taxonomy shared by the container and its C bindings, and the
//! validated [`ArrayLayout`] describing a block of `length` elements of
//! `elem_size` bytes each.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;

pub use error::ArrayError;
pub use layout::ArrayLayout;
