//! Compile-time typed view over [`RawArray`].
//!
//! [`FixedArray<T>`] fixes `elem_size` to `size_of::<T>()`, so element size
//! mismatches cannot happen. Elements are copied through `bytemuck`, which
//! restricts `T` to plain-old-data types.

use std::fmt;
use std::marker::PhantomData;

use bytemuck::Pod;
use fixarr_core::ArrayError;

use crate::raw::RawArray;

/// A fixed-size array of `T`, zero-initialised at construction.
pub struct FixedArray<T> {
    raw: RawArray,
    _elem: PhantomData<T>,
}

impl<T: Pod> FixedArray<T> {
    /// Allocate `length` zeroed elements.
    ///
    /// Fails with `ZeroLength` for an empty request and with
    /// `ZeroElementSize` if `T` is zero-sized.
    pub fn new(length: usize) -> Result<Self, ArrayError> {
        let raw = RawArray::new(length, std::mem::size_of::<T>())?;
        Ok(Self {
            raw,
            _elem: PhantomData,
        })
    }

    /// Read the element at `index`.
    pub fn get(&self, index: usize) -> Result<T, ArrayError> {
        let mut value = T::zeroed();
        self.raw.get(index, bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.raw.set(index, bytemuck::bytes_of(&value))
    }

    /// Number of elements. Zero once freed.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Release the backing memory early. Safe to call more than once.
    pub fn free(&mut self) {
        self.raw.deinit();
    }

    /// Returns `true` once [`FixedArray::free`] has run.
    pub fn is_freed(&self) -> bool {
        !self.raw.is_initialized()
    }

    /// The underlying type-erased array.
    pub fn as_raw(&self) -> &RawArray {
        &self.raw
    }
}

impl<T: Pod + fmt::Display> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for index in 0..self.len() {
            if index > 0 {
                f.write_str(" ")?;
            }
            let value = self.get(index).map_err(|_| fmt::Error)?;
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("elem", &std::any::type_name::<T>())
            .field("length", &self.raw.len())
            .finish()
    }
}
