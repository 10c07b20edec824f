//! Zero-initialised backing storage for one array.

use fixarr_core::ArrayError;

/// A contiguous, zero-filled byte block of fixed size.
///
/// Allocated once at array initialization and never resized.
pub(crate) struct Block {
    data: Box<[u8]>,
}

impl Block {
    /// Allocate `len` zeroed bytes.
    ///
    /// Returns `ArrayError::OutOfMemory` instead of aborting when the
    /// allocator refuses the request.
    pub(crate) fn zeroed(len: usize) -> Result<Self, ArrayError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ArrayError::OutOfMemory { requested: len })?;
        data.resize(len, 0u8);
        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Shared view of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the block.
    pub(crate) fn slice(&self, offset: usize, len: usize) -> &[u8] {
        &self.data[offset..offset + len]
    }

    /// Mutable view of `len` bytes starting at `offset`.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` exceeds the block.
    pub(crate) fn slice_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.data[offset..offset + len]
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_block_is_all_zero() {
        let block = Block::zeroed(64).unwrap();
        assert_eq!(block.len(), 64);
        assert!(block.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn slice_reads_written_bytes() {
        let mut block = Block::zeroed(16).unwrap();
        block.slice_mut(4, 4).copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(block.slice(4, 4), &[1, 2, 3, 4]);
        assert_eq!(block.slice(0, 4), &[0, 0, 0, 0]);
        assert_eq!(block.slice(8, 4), &[0, 0, 0, 0]);
    }

    #[test]
    fn impossible_allocation_returns_error_not_abort() {
        let result = Block::zeroed(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::OutOfMemory {
                requested: usize::MAX
            })
        ));
    }
}
