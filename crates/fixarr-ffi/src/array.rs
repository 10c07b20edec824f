//! Array lifecycle and element access over C pointers.
//!
//! A [`FixArray`] record is caller-owned storage (embedded mode) or a heap
//! record from [`fixarr_new`] (boxed mode). Its backing memory lives in a
//! global handle table; the record carries the handle plus cached
//! `length`/`elem_size` for C readers.
//!
//! The table lock only guards registry lookups. Concurrent access to the
//! same record from several threads still needs external locking.

use std::ffi::c_void;
use std::ptr;
use std::sync::Mutex;

use fixarr_array::RawArray;

use crate::handle::{HandleTable, NULL_HANDLE};
use crate::status::FixStatus;

static ARRAYS: Mutex<HandleTable<RawArray>> = Mutex::new(HandleTable::new());

/// C-side array record.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixArray {
    /// Opaque handle of the backing block. `0` when empty.
    pub head: u64,
    /// Number of elements. `0` when empty.
    pub length: usize,
    /// Size of one element in bytes. `0` when empty.
    pub elem_size: usize,
}

impl FixArray {
    /// The empty (uninitialized or torn-down) record.
    pub const EMPTY: Self = Self {
        head: NULL_HANDLE,
        length: 0,
        elem_size: 0,
    };

    /// Returns `true` if no backing block is attached.
    pub fn is_empty(&self) -> bool {
        self.head == NULL_HANDLE
    }
}

/// Move `array` into the table and describe it as a record.
///
/// Returns `None` if the table lock is poisoned.
fn register(array: RawArray, length: usize, elem_size: usize) -> Option<FixArray> {
    let head = ARRAYS.lock().ok()?.insert(array);
    Some(FixArray {
        head,
        length,
        elem_size,
    })
}

/// Drop the record's block (if still live) and reset it to empty.
fn release_record(record: &mut FixArray) -> FixStatus {
    if record.head != NULL_HANDLE {
        let Ok(mut table) = ARRAYS.lock() else {
            return FixStatus::Panicked;
        };
        if table.remove(record.head).is_none() {
            log::debug!("ignoring stale fixarr handle {:#x} on release", record.head);
        }
    }
    *record = FixArray::EMPTY;
    FixStatus::Ok
}

/// Initialize caller-owned storage with `length` zeroed elements of
/// `elem_size` bytes.
///
/// `array` may point to uninitialized memory; it is only written.
/// Returns `SelfIsNull`, `OutOfRange` (zero length), `InvalidArguments`
/// (zero element size), or `OutOfMemory`. On `OutOfMemory` the record is
/// set to the empty state; on the other errors it is not touched.
/// Initializing a live record without `fixarr_deinit` leaks its block.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_init(array: *mut FixArray, length: usize, elem_size: usize) -> i32 {
    ffi_guard!({
        if array.is_null() {
            return FixStatus::SelfIsNull as i32;
        }
        let raw = match RawArray::new(length, elem_size) {
            Ok(raw) => raw,
            Err(e) => {
                if e.is_allocation_failure() {
                    // SAFETY: array is non-null and points to writable storage
                    // per caller contract; write() never reads the old value.
                    unsafe { array.write(FixArray::EMPTY) };
                }
                return FixStatus::from(&e) as i32;
            }
        };
        let Some(record) = register(raw, length, elem_size) else {
            return FixStatus::Panicked as i32;
        };
        // SAFETY: as above.
        unsafe { array.write(record) };
        FixStatus::Ok as i32
    })
}

/// Release the record's memory and reset it to the empty state.
///
/// Idempotent: an empty record, or one whose block was already released
/// through a copy, is reset without error.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_deinit(array: *mut FixArray) -> i32 {
    ffi_guard!({
        if array.is_null() {
            return FixStatus::SelfIsNull as i32;
        }
        // SAFETY: array is non-null and points to a record previously
        // written by fixarr_init or fixarr_deinit.
        let record = unsafe { &mut *array };
        release_record(record) as i32
    })
}

/// Allocate a heap record with `length` zeroed elements.
///
/// Returns null for a zero length, a zero element size, or any
/// allocation failure. Free the result with [`fixarr_free`].
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_new(length: usize, elem_size: usize) -> *mut FixArray {
    ffi_guard_or!(ptr::null_mut(), {
        let raw = match RawArray::new(length, elem_size) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("fixarr_new({length}, {elem_size}) returned null: {e}");
                return ptr::null_mut();
            }
        };
        match register(raw, length, elem_size) {
            Some(record) => Box::into_raw(Box::new(record)),
            None => ptr::null_mut(),
        }
    })
}

/// Free a record from [`fixarr_new`] and null out the caller's pointer.
///
/// Returns `SelfIsNull` if `slot` itself is null. A slot that already
/// holds null is a no-op, so freeing twice is safe.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_free(slot: *mut *mut FixArray) -> i32 {
    ffi_guard!({
        if slot.is_null() {
            return FixStatus::SelfIsNull as i32;
        }
        // SAFETY: slot is non-null and points to a readable pointer.
        let array = unsafe { *slot };
        if array.is_null() {
            return FixStatus::Ok as i32;
        }
        // SAFETY: a non-null *slot was produced by fixarr_new via
        // Box::into_raw and has not been freed (freeing nulls the slot).
        let mut record = unsafe { Box::from_raw(array) };
        let status = release_record(&mut record);
        // SAFETY: slot is valid for writes per caller contract.
        unsafe { *slot = ptr::null_mut() };
        status as i32
    })
}

/// Copy `value_size` bytes from `value_in` into element `index`.
///
/// Checks, in order: `SelfIsNull`, `OutOfRange`, `ElementSizeMismatch`,
/// then `InvalidArguments` for a null `value_in` or a stale record.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_set(
    array: *const FixArray,
    index: usize,
    value_in: *const c_void,
    value_size: usize,
) -> i32 {
    ffi_guard!({
        if array.is_null() {
            return FixStatus::SelfIsNull as i32;
        }
        // SAFETY: array is non-null and points to an initialized record.
        let record = unsafe { *array };
        if let Err(status) = check_access(&record, index, value_size) {
            return status as i32;
        }
        if value_in.is_null() {
            return FixStatus::InvalidArguments as i32;
        }
        // SAFETY: value_in is non-null and the caller guarantees it points to
        // value_size readable bytes.
        let value = unsafe { std::slice::from_raw_parts(value_in.cast::<u8>(), value_size) };

        let mut table = ffi_lock!(ARRAYS);
        let Some(raw) = table.get_mut(record.head) else {
            log::debug!("fixarr_set on stale handle {:#x}", record.head);
            return FixStatus::InvalidArguments as i32;
        };
        match raw.set(index, value) {
            Ok(()) => FixStatus::Ok as i32,
            Err(e) => FixStatus::from(&e) as i32,
        }
    })
}

/// Copy element `index` into `value_out`, which must hold `value_size`
/// bytes.
///
/// Checks, in order: `SelfIsNull`, `RetParamsIsNull`, `OutOfRange`,
/// `ElementSizeMismatch`, then `InvalidArguments` for a stale record.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_get(
    array: *const FixArray,
    index: usize,
    value_out: *mut c_void,
    value_size: usize,
) -> i32 {
    ffi_guard!({
        if array.is_null() {
            return FixStatus::SelfIsNull as i32;
        }
        if value_out.is_null() {
            return FixStatus::RetParamsIsNull as i32;
        }
        // SAFETY: array is non-null and points to an initialized record.
        let record = unsafe { *array };
        if let Err(status) = check_access(&record, index, value_size) {
            return status as i32;
        }
        // SAFETY: value_out is non-null and the caller guarantees it points to
        // value_size writable bytes.
        let out = unsafe { std::slice::from_raw_parts_mut(value_out.cast::<u8>(), value_size) };

        let table = ffi_lock!(ARRAYS);
        let Some(raw) = table.get(record.head) else {
            log::debug!("fixarr_get on stale handle {:#x}", record.head);
            return FixStatus::InvalidArguments as i32;
        };
        match raw.get(index, out) {
            Ok(()) => FixStatus::Ok as i32,
            Err(e) => FixStatus::from(&e) as i32,
        }
    })
}

/// Write the element count of `array` to `length_out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn fixarr_len(array: *const FixArray, length_out: *mut usize) -> i32 {
    ffi_guard!({
        if array.is_null() {
            return FixStatus::SelfIsNull as i32;
        }
        if length_out.is_null() {
            return FixStatus::RetParamsIsNull as i32;
        }
        // SAFETY: both pointers are non-null and valid per caller contract.
        unsafe { *length_out = (*array).length };
        FixStatus::Ok as i32
    })
}

/// Bounds before size, matching the core array's validation order.
fn check_access(record: &FixArray, index: usize, size: usize) -> Result<(), FixStatus> {
    if index >= record.length {
        return Err(FixStatus::OutOfRange);
    }
    if size != record.elem_size {
        return Err(FixStatus::ElementSizeMismatch);
    }
    Ok(())
}
