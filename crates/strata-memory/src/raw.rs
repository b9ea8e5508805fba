//! Low-level storage primitive for buffers.
//!
//! All buffer storage is a boxed slice of [`Line`]s: 64-byte, 64-byte-aligned
//! blocks. The alignment makes any `Element` view of a buffer's bytes valid,
//! and the line size matches the granule the device pool reserves.
//!
//! The two `unsafe impl`s below are the only `unsafe` in the workspace.

#![allow(unsafe_code)]

use bytemuck::{Pod, Zeroable};

/// Bytes per storage line.
pub(crate) const LINE_BYTES: usize = 64;

/// One aligned block of buffer storage.
#[derive(Clone, Copy)]
#[repr(C, align(64))]
pub(crate) struct Line(pub(crate) [u8; LINE_BYTES]);

// SAFETY: `Line` is `repr(C)` around a single `[u8; 64]` with alignment 64,
// so it has no padding and the all-zero bit pattern is a valid value.
unsafe impl Zeroable for Line {}

// SAFETY: every bit pattern of `[u8; 64]` is valid, the type is `Copy`,
// `'static`, contains no pointers, and has no padding (size == 64 == align).
unsafe impl Pod for Line {}

/// Number of lines needed to hold `size_bytes`.
pub(crate) fn lines_for(size_bytes: usize) -> usize {
    size_bytes.div_ceil(LINE_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_no_padding() {
        assert_eq!(std::mem::size_of::<Line>(), LINE_BYTES);
        assert_eq!(std::mem::align_of::<Line>(), LINE_BYTES);
    }

    #[test]
    fn lines_round_up() {
        assert_eq!(lines_for(0), 0);
        assert_eq!(lines_for(1), 1);
        assert_eq!(lines_for(64), 1);
        assert_eq!(lines_for(65), 2);
        assert_eq!(lines_for(4000), 63);
    }
}
