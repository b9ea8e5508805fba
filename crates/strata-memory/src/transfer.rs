//! Directional copy primitives.
//!
//! Three blocking, whole-region, byte-for-byte copies, one per direction.
//! Each names the space of its destination and source in its signature; the
//! compiler picks the direction, not a runtime flag. All three:
//!
//! - succeed without touching memory when `size_bytes == 0`;
//! - reject a size larger than either buffer before moving any byte;
//! - reject buffers owned by a different device.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use strata_core::Layout;

use crate::buffer::Buffer;
use crate::error::MemoryError;
use crate::manager::DeviceMemory;
use crate::space::{Device, HostMapped, MemorySpace};

/// Direction of a transfer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Device memory to device memory.
    DeviceToDevice,
    /// Host-mapped memory to device memory (upload).
    HostToDevice,
    /// Device memory to host-mapped memory (download).
    DeviceToHost,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceToDevice => write!(f, "device-to-device"),
            Self::HostToDevice => write!(f, "host-to-device"),
            Self::DeviceToHost => write!(f, "device-to-host"),
        }
    }
}

/// Point-in-time copy of a device's transfer counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// Completed device-to-device calls.
    pub device_to_device_calls: u64,
    /// Bytes moved device-to-device.
    pub device_to_device_bytes: u64,
    /// Completed host-to-device calls.
    pub host_to_device_calls: u64,
    /// Bytes moved host-to-device.
    pub host_to_device_bytes: u64,
    /// Completed device-to-host calls.
    pub device_to_host_calls: u64,
    /// Bytes moved device-to-host.
    pub device_to_host_bytes: u64,
}

impl TransferStats {
    /// Completed calls in `direction`.
    pub fn calls(&self, direction: Direction) -> u64 {
        match direction {
            Direction::DeviceToDevice => self.device_to_device_calls,
            Direction::HostToDevice => self.host_to_device_calls,
            Direction::DeviceToHost => self.device_to_host_calls,
        }
    }

    /// Bytes moved in `direction`.
    pub fn bytes(&self, direction: Direction) -> u64 {
        match direction {
            Direction::DeviceToDevice => self.device_to_device_bytes,
            Direction::HostToDevice => self.host_to_device_bytes,
            Direction::DeviceToHost => self.device_to_host_bytes,
        }
    }

    /// Bytes moved in all directions.
    pub fn total_bytes(&self) -> u64 {
        self.device_to_device_bytes + self.host_to_device_bytes + self.device_to_host_bytes
    }
}

#[derive(Default)]
struct Counter {
    calls: AtomicU64,
    bytes: AtomicU64,
}

impl Counter {
    fn record(&self, bytes: usize) {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.bytes.fetch_add(bytes as u64, Ordering::Relaxed);
    }
}

/// Live transfer counters, one pair per direction.
#[derive(Default)]
pub(crate) struct TransferCounters {
    device_to_device: Counter,
    host_to_device: Counter,
    device_to_host: Counter,
}

impl TransferCounters {
    fn counter(&self, direction: Direction) -> &Counter {
        match direction {
            Direction::DeviceToDevice => &self.device_to_device,
            Direction::HostToDevice => &self.host_to_device,
            Direction::DeviceToHost => &self.device_to_host,
        }
    }

    pub(crate) fn snapshot(&self) -> TransferStats {
        let load = |c: &Counter| {
            (
                c.calls.load(Ordering::Relaxed),
                c.bytes.load(Ordering::Relaxed),
            )
        };
        let (d2d_calls, d2d_bytes) = load(&self.device_to_device);
        let (h2d_calls, h2d_bytes) = load(&self.host_to_device);
        let (d2h_calls, d2h_bytes) = load(&self.device_to_host);
        TransferStats {
            device_to_device_calls: d2d_calls,
            device_to_device_bytes: d2d_bytes,
            host_to_device_calls: h2d_calls,
            host_to_device_bytes: h2d_bytes,
            device_to_host_calls: d2h_calls,
            device_to_host_bytes: d2h_bytes,
        }
    }
}

impl DeviceMemory {
    /// Copy `size_bytes` from one device buffer to another.
    pub fn copy_to_device_from_device<L: Layout, M: Layout>(
        &self,
        dst: &mut Buffer<Device<L>>,
        src: &Buffer<Device<M>>,
        size_bytes: usize,
    ) -> Result<(), MemoryError> {
        self.copy_bytes(Direction::DeviceToDevice, dst, src, size_bytes)
    }

    /// Upload `size_bytes` from a host-mapped buffer into a device buffer.
    pub fn copy_to_device_from_host<L: Layout, M: Layout>(
        &self,
        dst: &mut Buffer<Device<L>>,
        src: &Buffer<HostMapped<Device<M>>>,
        size_bytes: usize,
    ) -> Result<(), MemoryError> {
        self.copy_bytes(Direction::HostToDevice, dst, src, size_bytes)
    }

    /// Download `size_bytes` from a device buffer into a host-mapped buffer.
    pub fn copy_to_host_from_device<L: Layout, M: Layout>(
        &self,
        dst: &mut Buffer<HostMapped<Device<L>>>,
        src: &Buffer<Device<M>>,
        size_bytes: usize,
    ) -> Result<(), MemoryError> {
        self.copy_bytes(Direction::DeviceToHost, dst, src, size_bytes)
    }

    fn copy_bytes<D: MemorySpace, S: MemorySpace>(
        &self,
        direction: Direction,
        dst: &mut Buffer<D>,
        src: &Buffer<S>,
        size_bytes: usize,
    ) -> Result<(), MemoryError> {
        if size_bytes == 0 {
            self.counters().counter(direction).record(0);
            return Ok(());
        }

        for owner in [dst.device_id(), src.device_id()] {
            if owner != self.id() {
                return Err(MemoryError::ForeignBuffer {
                    direction,
                    expected: self.id(),
                    found: owner,
                });
            }
        }
        if size_bytes > dst.len() || size_bytes > src.len() {
            return Err(MemoryError::TransferOutOfBounds {
                direction,
                requested: size_bytes,
                dst_len: dst.len(),
                src_len: src.len(),
            });
        }

        dst.bytes_mut()[..size_bytes].copy_from_slice(&src.bytes()[..size_bytes]);
        self.counters().counter(direction).record(size_bytes);
        tracing::trace!(
            device = %self.id(),
            %direction,
            dst = %dst.id(),
            src = %src.id(),
            size_bytes,
            "transfer complete"
        );
        Ok(())
    }
}
