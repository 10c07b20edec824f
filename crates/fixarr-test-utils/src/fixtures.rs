//! Reusable element fixtures.

use bytemuck::{Pod, Zeroable};

/// Byte size of an `i32` element.
pub const INT_SIZE: usize = std::mem::size_of::<i32>();

/// Byte size of a [`Vec3`] element.
pub const VEC3_SIZE: usize = std::mem::size_of::<Vec3>();

/// Three packed integers; a non-primitive element with no padding.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Vec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vec3 {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Native-endian byte image, as stored in a type-erased array.
    pub fn to_bytes(self) -> [u8; VEC3_SIZE] {
        let mut out = [0u8; VEC3_SIZE];
        out.copy_from_slice(bytemuck::bytes_of(&self));
        out
    }

    /// Rebuild from a native-endian byte image.
    pub fn from_bytes(bytes: &[u8; VEC3_SIZE]) -> Self {
        bytemuck::pod_read_unaligned(bytes)
    }
}

pub fn i32_to_bytes(value: i32) -> [u8; INT_SIZE] {
    value.to_ne_bytes()
}

pub fn i32_from_bytes(bytes: [u8; INT_SIZE]) -> i32 {
    i32::from_ne_bytes(bytes)
}
