//! The value-type bound for array elements.

use bytemuck::Pod;

/// A value type that can live in any Strata memory space.
///
/// Elements are plain old data: every bit pattern is valid and the all-zero
/// pattern is a valid value, so a zero-filled allocation is a valid array and
/// a byte-for-byte copy between spaces never needs reinterpretation.
///
/// Blanket-implemented for every `bytemuck::Pod` type that is `Send + Sync`.
pub trait Element: Pod + Send + Sync {}

impl<T: Pod + Send + Sync> Element for T {}

/// Size of one `T` in bytes.
pub fn element_size<T: Element>() -> usize {
    std::mem::size_of::<T>()
}
