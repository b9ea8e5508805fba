//! Device memory configuration parameters.

use crate::space::SpaceKind;

/// Configuration for one simulated accelerator's memory pools.
///
/// Controls the diagnostic name and the capacity of the device pool and the
/// host-mapped (pinned) pool. Validated by
/// [`DeviceMemory::new`](crate::DeviceMemory::new); immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Human-readable device name, used in diagnostics and memory reports.
    ///
    /// Must be non-empty.
    pub name: String,

    /// Capacity of the device pool in bytes.
    ///
    /// Default: 1 GiB. Must be non-zero.
    pub device_capacity: usize,

    /// Capacity of the host-mapped pool in bytes.
    ///
    /// Default: 1 GiB. Must be non-zero. Host-mapped memory is page-locked
    /// on real hardware, so it is budgeted separately from device memory.
    pub host_capacity: usize,
}

impl DeviceConfig {
    /// Default device pool capacity: 1 GiB.
    pub const DEFAULT_DEVICE_CAPACITY: usize = 1 << 30;

    /// Default host-mapped pool capacity: 1 GiB.
    pub const DEFAULT_HOST_CAPACITY: usize = 1 << 30;

    /// Default device name.
    pub const DEFAULT_NAME: &'static str = "device0";

    /// Create a config with the given name and default capacities.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            device_capacity: Self::DEFAULT_DEVICE_CAPACITY,
            host_capacity: Self::DEFAULT_HOST_CAPACITY,
        }
    }

    /// Set the device pool capacity in bytes.
    pub fn with_device_capacity(mut self, bytes: usize) -> Self {
        self.device_capacity = bytes;
        self
    }

    /// Set the host-mapped pool capacity in bytes.
    pub fn with_host_capacity(mut self, bytes: usize) -> Self {
        self.host_capacity = bytes;
        self
    }

    /// Capacity of the pool backing `space`.
    pub fn capacity(&self, space: SpaceKind) -> usize {
        match space {
            SpaceKind::Device => self.device_capacity,
            SpaceKind::HostMapped => self.host_capacity,
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}
