//! Benchmark profiles and utilities for Strata.
//!
//! - [`TransferProfile`]: element counts exercised by the transfer benches
//! - [`bench_device`]: a device whose pools fit a profile's working set
//! - [`mirrored_pair`]: a filled host mirror with its device twin

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strata_array::{create, create_from, deep_copy, Array, ArrayError};
use strata_memory::{Device, DeviceConfig, DeviceMemory, HostMirror, MemoryError};

/// Element counts for one benchmark group.
#[derive(Clone, Copy, Debug)]
pub struct TransferProfile {
    /// Short name used as the criterion parameter.
    pub name: &'static str,
    /// Number of `f32` elements per array.
    pub count: usize,
}

impl TransferProfile {
    /// Bytes moved by one full-array transfer.
    pub fn bytes(&self) -> usize {
        self.count * std::mem::size_of::<f32>()
    }
}

/// Small, medium and large working sets (16 KiB, 4 MiB, 64 MiB).
pub const PROFILES: [TransferProfile; 3] = [
    TransferProfile {
        name: "4k",
        count: 4 * 1024,
    },
    TransferProfile {
        name: "1m",
        count: 1024 * 1024,
    },
    TransferProfile {
        name: "16m",
        count: 16 * 1024 * 1024,
    },
];

/// A device with room for four arrays of `profile` in each pool.
pub fn bench_device(profile: TransferProfile) -> Result<DeviceMemory, MemoryError> {
    let capacity = profile.bytes().max(1) * 4;
    DeviceMemory::new(
        DeviceConfig::new("bench")
            .with_device_capacity(capacity)
            .with_host_capacity(capacity),
    )
}

/// A host mirror holding `0.0, 1.0, ...` and a device array with the same
/// contents.
pub fn mirrored_pair(
    memory: &DeviceMemory,
    profile: TransferProfile,
) -> Result<(Array<f32, HostMirror>, Array<f32, Device>), ArrayError> {
    let mut host: Array<f32, HostMirror> = create(memory, "bench-host", profile.count)?;
    for (i, v) in host.values_mut().iter_mut().enumerate() {
        *v = i as f32;
    }
    let mut dev: Array<f32, Device> = create_from(&host)?;
    deep_copy(&mut dev, &host)?;
    Ok((host, dev))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrored_pair_fits_its_device() {
        let profile = PROFILES[0];
        let mem = bench_device(profile).unwrap();
        let (host, dev) = mirrored_pair(&mem, profile).unwrap();
        assert_eq!(host.len(), profile.count);
        assert_eq!(dev.size_bytes(), profile.bytes());
        assert_eq!(host.values()[10], 10.0);
    }

    #[test]
    fn profiles_are_ascending() {
        assert!(PROFILES.windows(2).all(|w| w[0].count < w[1].count));
    }
}
