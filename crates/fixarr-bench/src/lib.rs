//! Benchmark profiles for the fixarr fixed-size array.
//!
//! - [`SMALL_LEN`] / [`LARGE_LEN`]: element counts used across benches
//! - [`filled_int_array`]: a `RawArray` of `i32` with `a[i] = i`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fixarr_array::{ArrayError, RawArray};

/// Element count for the small (cache-resident) profile.
pub const SMALL_LEN: usize = 1_000;

/// Element count for the large profile: 4MB of `i32`.
pub const LARGE_LEN: usize = 1_000_000;

/// Build a `length`-element `i32` array holding `a[i] = i`.
pub fn filled_int_array(length: usize) -> Result<RawArray, ArrayError> {
    let mut array = RawArray::new(length, std::mem::size_of::<i32>())?;
    for i in 0..length {
        array.set(i, &(i as i32).to_ne_bytes())?;
    }
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_array_holds_indices() {
        let array = filled_int_array(16).unwrap();
        let mut buf = [0u8; 4];
        array.get(15, &mut buf).unwrap();
        assert_eq!(i32::from_ne_bytes(buf), 15);
    }
}
