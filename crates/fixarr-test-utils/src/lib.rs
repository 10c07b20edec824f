//! Test fixtures for fixarr development.
//!
//! Provides the [`Vec3`] packed-struct element used by the struct
//! simulation tests, plus helpers for moving `i32` values through
//! byte-oriented array APIs.

// `unsafe_code` is not forbidden here: `#[derive(Pod)]` expands to an `unsafe impl`.
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{i32_from_bytes, i32_to_bytes, Vec3, INT_SIZE, VEC3_SIZE};
