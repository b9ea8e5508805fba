//! Deterministic data patterns.
//!
//! Patterns never contain a run of zeros longer than one element, so a
//! buffer that was filled from one is easy to tell apart from a freshly
//! zero-initialised buffer.

/// `len` bytes cycling through `1..=251`.
pub fn pattern_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 + 1).collect()
}

/// `len` values `1.0, 2.0, 3.0, ...`.
pub fn ramp_f32(len: usize) -> Vec<f32> {
    (1..=len).map(|i| i as f32).collect()
}

/// `len` values `1, 2, 3, ...` with wrap-around.
pub fn ramp_u32(len: usize) -> Vec<u32> {
    (0..len).map(|i| (i as u32).wrapping_add(1)).collect()
}
