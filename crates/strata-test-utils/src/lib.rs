//! Test utilities and fixtures for Strata development.
//!
//! Provides ready-made [`DeviceMemory`] instances and deterministic data
//! patterns (see [`fixtures`]) for tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{pattern_bytes, ramp_f32, ramp_u32};

use strata_memory::{DeviceConfig, DeviceMemory};

/// Name given to devices built by this crate.
pub const TEST_DEVICE_NAME: &str = "test-device";

/// A device with default (1 GiB) pools.
pub fn device() -> DeviceMemory {
    DeviceMemory::new(DeviceConfig::new(TEST_DEVICE_NAME))
        .expect("default test device config is valid")
}

/// A device whose device and host-mapped pools both hold `capacity` bytes.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn small_device(capacity: usize) -> DeviceMemory {
    DeviceMemory::new(
        DeviceConfig::new(TEST_DEVICE_NAME)
            .with_device_capacity(capacity)
            .with_host_capacity(capacity),
    )
    .expect("small test device needs a non-zero capacity")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_device_limits_both_pools() {
        let mem = small_device(256);
        assert_eq!(mem.config().device_capacity, 256);
        assert_eq!(mem.config().host_capacity, 256);
        assert_eq!(mem.name(), TEST_DEVICE_NAME);
    }

    #[test]
    #[should_panic(expected = "non-zero capacity")]
    fn small_device_rejects_zero() {
        small_device(0);
    }
}
