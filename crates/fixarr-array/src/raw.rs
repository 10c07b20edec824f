//! Type-erased fixed-size array handle.
//!
//! [`RawArray`] stores `length` elements of `elem_size` bytes each in one
//! zero-filled block. Element access copies whole elements in and out of
//! caller buffers whose byte length must equal `elem_size`.

use std::fmt;

use fixarr_core::{ArrayError, ArrayLayout};

use crate::block::Block;

/// A fixed-size, byte-addressable element store.
///
/// The handle has two states: empty (no block, `len() == 0`) and
/// initialized. [`RawArray::default`] and [`RawArray::empty`] produce the
/// empty state; [`RawArray::init`] moves to initialized and
/// [`RawArray::deinit`] moves back. The block is freed on drop.
pub struct RawArray {
    /// Backing storage. `None` when empty.
    head: Option<Block>,
    length: usize,
    elem_size: usize,
}

impl RawArray {
    /// An uninitialized handle with no backing memory.
    pub const fn empty() -> Self {
        Self {
            head: None,
            length: 0,
            elem_size: 0,
        }
    }

    /// Build an initialized handle by value (embedded mode).
    pub fn new(length: usize, elem_size: usize) -> Result<Self, ArrayError> {
        let mut array = Self::empty();
        array.init(length, elem_size)?;
        Ok(array)
    }

    /// Allocate a zero-filled block of `length * elem_size` bytes.
    ///
    /// A zero `length` or `elem_size` is rejected and leaves the handle
    /// untouched. An allocation failure leaves the handle empty. If the
    /// handle was already initialized, its old block is replaced only once
    /// the new one has been allocated.
    pub fn init(&mut self, length: usize, elem_size: usize) -> Result<(), ArrayError> {
        let layout = match ArrayLayout::new(length, elem_size) {
            Ok(layout) => layout,
            Err(e) => {
                log::debug!("rejected array init ({length} x {elem_size} bytes): {e}");
                if e.is_allocation_failure() {
                    self.deinit();
                }
                return Err(e);
            }
        };
        let block = match Block::zeroed(layout.byte_len()) {
            Ok(block) => block,
            Err(e) => {
                log::debug!("array allocation failed: {e}");
                self.deinit();
                return Err(e);
            }
        };
        self.head = Some(block);
        self.length = layout.length();
        self.elem_size = layout.elem_size();
        log::trace!(
            "initialized array of {} x {} bytes",
            self.length,
            self.elem_size
        );
        Ok(())
    }

    /// Free the backing block and reset to the empty state.
    ///
    /// Idempotent: calling it on an empty handle does nothing.
    pub fn deinit(&mut self) {
        if self.head.take().is_some() {
            log::trace!(
                "released array of {} x {} bytes",
                self.length,
                self.elem_size
            );
        }
        self.length = 0;
        self.elem_size = 0;
    }

    /// Heap-allocate and initialize a handle (boxed mode).
    ///
    /// Returns `None` for a zero-length request or when allocation fails.
    /// Use [`RawArray::try_boxed`] to learn why.
    pub fn boxed(length: usize, elem_size: usize) -> Option<Box<Self>> {
        Self::try_boxed(length, elem_size).ok()
    }

    /// Like [`RawArray::boxed`], but reports the failure reason.
    pub fn try_boxed(length: usize, elem_size: usize) -> Result<Box<Self>, ArrayError> {
        let mut array = Box::new(Self::empty());
        array.init(length, elem_size)?;
        Ok(array)
    }

    /// Tear down a boxed handle and clear the caller's slot.
    ///
    /// Releasing an already-empty slot is a no-op.
    pub fn release(slot: &mut Option<Box<Self>>) {
        if let Some(mut array) = slot.take() {
            array.deinit();
        }
    }

    /// Copy `value` into the element at `index`.
    ///
    /// Fails with `IndexOutOfRange` if `index >= len()`, then with
    /// `ElementSizeMismatch` if `value.len() != elem_size()`. Nothing is
    /// written on failure.
    pub fn set(&mut self, index: usize, value: &[u8]) -> Result<(), ArrayError> {
        let (offset, size) = self.locate(index, value.len())?;
        let block = self.head.as_mut().ok_or(ArrayError::IndexOutOfRange {
            index,
            length: 0,
        })?;
        block.slice_mut(offset, size).copy_from_slice(value);
        Ok(())
    }

    /// Copy the element at `index` into `out`.
    ///
    /// Same validation order as [`RawArray::set`]. The array is never
    /// modified.
    pub fn get(&self, index: usize, out: &mut [u8]) -> Result<(), ArrayError> {
        let (offset, size) = self.locate(index, out.len())?;
        let block = self.head.as_ref().ok_or(ArrayError::IndexOutOfRange {
            index,
            length: 0,
        })?;
        out.copy_from_slice(block.slice(offset, size));
        Ok(())
    }

    /// Number of elements. Zero when empty.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the handle holds no elements.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Size of one element in bytes. Zero when empty.
    pub fn elem_size(&self) -> usize {
        self.elem_size
    }

    /// Returns `true` if a backing block is allocated.
    pub fn is_initialized(&self) -> bool {
        self.head.is_some()
    }

    /// The validated layout, or `None` when empty.
    pub fn layout(&self) -> Option<ArrayLayout> {
        self.head.as_ref()?;
        ArrayLayout::new(self.length, self.elem_size).ok()
    }

    /// The whole backing block. Empty when uninitialized.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.head {
            Some(block) => block.as_bytes(),
            None => &[],
        }
    }

    /// Resolve `index` to a byte offset, checking bounds before size.
    fn locate(&self, index: usize, size: usize) -> Result<(usize, usize), ArrayError> {
        if index >= self.length {
            return Err(ArrayError::IndexOutOfRange {
                index,
                length: self.length,
            });
        }
        if size != self.elem_size {
            return Err(ArrayError::ElementSizeMismatch {
                expected: self.elem_size,
                actual: size,
            });
        }
        Ok((index * self.elem_size, size))
    }
}

impl Default for RawArray {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for RawArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("length", &self.length)
            .field("elem_size", &self.elem_size)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const INT: usize = std::mem::size_of::<i32>();

    fn read_i32(array: &RawArray, index: usize) -> Result<i32, ArrayError> {
        let mut buf = [0u8; INT];
        array.get(index, &mut buf)?;
        Ok(i32::from_ne_bytes(buf))
    }

    #[test]
    fn init_and_deinit() {
        let mut arr = RawArray::empty();
        arr.init(10, INT).unwrap();
        assert!(arr.is_initialized());
        assert_eq!(arr.len(), 10);
        assert_eq!(arr.elem_size(), INT);
        assert_eq!(arr.as_bytes().len(), 40);

        arr.deinit();
        assert!(!arr.is_initialized());
        assert_eq!(arr.len(), 0);
        assert_eq!(arr.elem_size(), 0);
        assert!(arr.as_bytes().is_empty());
    }

    #[test]
    fn fresh_array_reads_zero() {
        let arr = RawArray::new(10, INT).unwrap();
        for i in 0..10 {
            assert_eq!(read_i32(&arr, i), Ok(0));
        }
    }

    #[test]
    fn zero_length_init_is_out_of_range() {
        let mut arr = RawArray::empty();
        assert_eq!(arr.init(0, INT), Err(ArrayError::ZeroLength));
        assert!(!arr.is_initialized());
    }

    #[test]
    fn zero_elem_size_init_rejected() {
        let mut arr = RawArray::empty();
        assert_eq!(arr.init(10, 0), Err(ArrayError::ZeroElementSize));
        assert!(!arr.is_initialized());
    }

    #[test]
    fn rejected_reinit_keeps_existing_block() {
        let mut arr = RawArray::new(3, INT).unwrap();
        arr.set(1, &7i32.to_ne_bytes()).unwrap();
        assert_eq!(arr.init(0, INT), Err(ArrayError::ZeroLength));
        assert_eq!(arr.len(), 3);
        assert_eq!(read_i32(&arr, 1), Ok(7));
    }

    #[test]
    fn failed_allocation_leaves_handle_empty() {
        let mut arr = RawArray::new(3, INT).unwrap();
        let result = arr.init(usize::MAX, 2);
        assert!(matches!(result, Err(ArrayError::CapacityOverflow { .. })));
        assert!(!arr.is_initialized());
        assert_eq!(arr.len(), 0);
    }

    #[test]
    fn reinit_replaces_with_zeroed_block() {
        let mut arr = RawArray::new(3, INT).unwrap();
        arr.set(0, &9i32.to_ne_bytes()).unwrap();
        arr.init(5, 8).unwrap();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.elem_size(), 8);
        assert!(arr.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn double_deinit_is_noop() {
        let mut arr = RawArray::new(4, INT).unwrap();
        arr.deinit();
        arr.deinit();
        assert_eq!(arr.len(), 0);
        assert!(arr.layout().is_none());
    }

    #[test]
    fn set_and_get() {
        let mut arr = RawArray::new(5, INT).unwrap();
        arr.set(2, &42i32.to_ne_bytes()).unwrap();
        assert_eq!(read_i32(&arr, 2), Ok(42));
        assert_eq!(read_i32(&arr, 1), Ok(0));
        assert_eq!(read_i32(&arr, 3), Ok(0));
    }

    #[test]
    fn bounds_checked_on_get_and_set() {
        let mut arr = RawArray::new(3, INT).unwrap();
        let err = ArrayError::IndexOutOfRange {
            index: 3,
            length: 3,
        };
        assert_eq!(arr.set(3, &1i32.to_ne_bytes()), Err(err.clone()));
        assert_eq!(read_i32(&arr, 3), Err(err));
    }

    #[test]
    fn bounds_checked_before_size() {
        let mut arr = RawArray::new(3, INT).unwrap();
        assert!(matches!(
            arr.set(5, &[0u8; 2]),
            Err(ArrayError::IndexOutOfRange { .. })
        ));
        let mut out = [0u8; 2];
        assert!(matches!(
            arr.get(5, &mut out),
            Err(ArrayError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn size_mismatch_rejected_without_write() {
        let mut arr = RawArray::new(3, INT).unwrap();
        assert_eq!(
            arr.set(0, &[0xFF; 8]),
            Err(ArrayError::ElementSizeMismatch {
                expected: 4,
                actual: 8
            })
        );
        assert!(arr.as_bytes().iter().all(|&b| b == 0));

        let mut out = [0xAAu8; 2];
        assert_eq!(
            arr.get(0, &mut out),
            Err(ArrayError::ElementSizeMismatch {
                expected: 4,
                actual: 2
            })
        );
        assert_eq!(out, [0xAA, 0xAA]);
    }

    #[test]
    fn access_on_empty_handle_is_out_of_range() {
        let mut arr = RawArray::empty();
        let mut out = [0u8; INT];
        assert_eq!(
            arr.get(0, &mut out),
            Err(ArrayError::IndexOutOfRange {
                index: 0,
                length: 0
            })
        );
        assert!(matches!(
            arr.set(0, &out),
            Err(ArrayError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn len_reports_element_count() {
        let arr = RawArray::new(7, INT).unwrap();
        assert_eq!(arr.len(), 7);
        assert!(!arr.is_empty());
        let layout = arr.layout().unwrap();
        assert_eq!(layout.length(), 7);
        assert_eq!(layout.elem_size(), INT);
        assert_eq!(layout.byte_len(), arr.as_bytes().len());
    }

    #[test]
    fn boxed_and_release() {
        let mut slot = RawArray::boxed(5, INT);
        {
            let arr = slot.as_mut().unwrap();
            assert_eq!(arr.len(), 5);
            assert_eq!(arr.elem_size(), INT);
            arr.set(0, &99i32.to_ne_bytes()).unwrap();
            assert_eq!(read_i32(arr, 0), Ok(99));
        }
        RawArray::release(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn boxed_zero_length_is_none() {
        assert!(RawArray::boxed(0, INT).is_none());
        assert_eq!(RawArray::try_boxed(0, INT).unwrap_err(), ArrayError::ZeroLength);
    }

    #[test]
    fn try_boxed_reports_allocation_failure() {
        let err = RawArray::try_boxed(usize::MAX / 2, 2).unwrap_err();
        assert!(err.is_allocation_failure());
        assert!(RawArray::boxed(usize::MAX / 2, 2).is_none());
    }

    #[test]
    fn double_release_is_noop() {
        let mut slot = RawArray::boxed(3, INT);
        assert!(slot.is_some());
        RawArray::release(&mut slot);
        assert!(slot.is_none());
        RawArray::release(&mut slot);
        assert!(slot.is_none());
    }

    #[test]
    fn debug_hides_contents() {
        let arr = RawArray::new(2, 3).unwrap();
        assert_eq!(
            format!("{arr:?}"),
            "RawArray { length: 2, elem_size: 3, initialized: true }"
        );
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn every_element_starts_zeroed(length in 1usize..128, elem_size in 1usize..32) {
            let arr = RawArray::new(length, elem_size).unwrap();
            let mut out = vec![0xFFu8; elem_size];
            for i in 0..length {
                arr.get(i, &mut out).unwrap();
                prop_assert!(out.iter().all(|&b| b == 0));
            }
        }

        #[test]
        fn set_then_get_returns_value(
            length in 1usize..64,
            value in proptest::collection::vec(any::<u8>(), 1..24),
            index in 0usize..64,
        ) {
            let index = index % length;
            let mut arr = RawArray::new(length, value.len()).unwrap();
            arr.set(index, &value).unwrap();
            let mut out = vec![0u8; value.len()];
            arr.get(index, &mut out).unwrap();
            prop_assert_eq!(out, value);
        }

        #[test]
        fn set_touches_only_its_slot(
            length in 2usize..32,
            elem_size in 1usize..16,
            index in 0usize..32,
        ) {
            let index = index % length;
            let mut arr = RawArray::new(length, elem_size).unwrap();
            arr.set(index, &vec![0xABu8; elem_size]).unwrap();
            let bytes = arr.as_bytes();
            let start = index * elem_size;
            for (i, &b) in bytes.iter().enumerate() {
                let inside = i >= start && i < start + elem_size;
                prop_assert_eq!(b, if inside { 0xAB } else { 0 });
            }
        }

        #[test]
        fn indices_at_or_past_len_are_out_of_range(
            length in 1usize..64,
            past in 0usize..64,
        ) {
            let mut arr = RawArray::new(length, 4).unwrap();
            let index = length + past;
            let expected = ArrayError::IndexOutOfRange { index, length };
            prop_assert_eq!(arr.set(index, &[1, 2, 3, 4]), Err(expected.clone()));
            let mut out = [0u8; 4];
            prop_assert_eq!(arr.get(index, &mut out), Err(expected));
            prop_assert!(arr.as_bytes().iter().all(|&b| b == 0));
        }

        #[test]
        fn wrong_size_is_mismatch_for_valid_index(
            length in 1usize..32,
            elem_size in 1usize..16,
            other in 0usize..32,
            index in 0usize..32,
        ) {
            prop_assume!(other != elem_size);
            let index = index % length;
            let mut arr = RawArray::new(length, elem_size).unwrap();
            let expected = ArrayError::ElementSizeMismatch { expected: elem_size, actual: other };
            prop_assert_eq!(arr.set(index, &vec![1u8; other]), Err(expected.clone()));
            let mut out = vec![0u8; other];
            prop_assert_eq!(arr.get(index, &mut out), Err(expected));
        }
    }
}
