//! Strongly-typed identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`DeviceId`] allocation.
static DEVICE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a device memory manager.
///
/// Allocated from a monotonic atomic counter via [`DeviceId::next`]. Two
/// managers always have different IDs, even if they were built from the same
/// configuration, so a buffer can be checked against the manager asked to
/// copy it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(u64);

impl DeviceId {
    /// Allocate a fresh, unique device ID. Thread-safe.
    pub fn next() -> Self {
        Self(DEVICE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one live allocation within a device's registry.
///
/// IDs are assigned sequentially per device and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AllocationId(pub u64);

impl fmt::Display for AllocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for AllocationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
