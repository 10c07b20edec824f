//! Validated array geometry.

use crate::error::ArrayError;

/// Shape of an array's backing block: `length` elements of `elem_size` bytes.
///
/// Only [`ArrayLayout::new`] builds one, so both fields are non-zero and
/// their product fits in a single allocation (at most `isize::MAX` bytes).
///
/// ```compile_fail
/// use fixarr_core::ArrayLayout;
///
/// let layout = ArrayLayout { length: usize::MAX, elem_size: 2 };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArrayLayout {
    length: usize,
    elem_size: usize,
}

impl ArrayLayout {
    /// Largest block, in bytes, a single array may occupy.
    pub const MAX_BYTES: usize = isize::MAX as usize;

    /// Validate and build a layout.
    ///
    /// Checks run in order: zero length, zero element size, then overflow
    /// of the total byte count.
    pub fn new(length: usize, elem_size: usize) -> Result<Self, ArrayError> {
        if length == 0 {
            return Err(ArrayError::ZeroLength);
        }
        if elem_size == 0 {
            return Err(ArrayError::ZeroElementSize);
        }
        match length.checked_mul(elem_size) {
            Some(bytes) if bytes <= Self::MAX_BYTES => Ok(Self { length, elem_size }),
            _ => Err(ArrayError::CapacityOverflow { length, elem_size }),
        }
    }

    /// Layout for `length` elements of type `T`.
    pub fn for_type<T>(length: usize) -> Result<Self, ArrayError> {
        Self::new(length, std::mem::size_of::<T>())
    }

    /// Number of elements.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Size of one element in bytes.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Total size of the backing block in bytes.
    pub fn byte_len(&self) -> usize {
        self.length * self.elem_size
    }

    /// Byte offset of element `index`, or `None` if it is out of range.
    pub fn offset_of(&self, index: usize) -> Option<usize> {
        (index < self.length).then(|| index * self.elem_size)
    }
}
