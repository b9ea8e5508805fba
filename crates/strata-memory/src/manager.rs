//! The device memory manager.
//!
//! [`DeviceMemory`] is a cloneable handle to one simulated accelerator. It
//! owns two capacity-bounded pools (device and host-mapped), a registry of
//! live allocations keyed by [`AllocationId`], and the transfer counters
//! updated by the copy primitives in [`crate::transfer`].
//!
//! Every buffer keeps a handle to the device that allocated it, so the pools
//! outlive their last buffer and a buffer's bytes go back to the right pool
//! when it is dropped.

use std::fmt;
use std::sync::Arc;

use bytemuck::Zeroable;
use indexmap::IndexMap;
use parking_lot::Mutex;
use strata_core::{AllocationId, DeviceId};

use crate::buffer::Buffer;
use crate::config::DeviceConfig;
use crate::error::MemoryError;
use crate::raw::{lines_for, Line};
use crate::space::{MemorySpace, SpaceKind};
use crate::transfer::{TransferCounters, TransferStats};

/// One row of the allocation registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationInfo {
    /// Registry key.
    pub id: AllocationId,
    /// Pool the allocation was drawn from.
    pub space: SpaceKind,
    /// Diagnostic label supplied at allocation.
    pub label: String,
    /// Requested size in bytes.
    pub size_bytes: usize,
}

/// Mutable pool state, guarded by a single lock so the usage counters and
/// the registry never disagree.
#[derive(Default)]
struct PoolState {
    device_in_use: usize,
    host_in_use: usize,
    next_id: u64,
    live: IndexMap<AllocationId, AllocationInfo>,
}

impl PoolState {
    fn in_use(&self, space: SpaceKind) -> usize {
        match space {
            SpaceKind::Device => self.device_in_use,
            SpaceKind::HostMapped => self.host_in_use,
        }
    }

    fn in_use_mut(&mut self, space: SpaceKind) -> &mut usize {
        match space {
            SpaceKind::Device => &mut self.device_in_use,
            SpaceKind::HostMapped => &mut self.host_in_use,
        }
    }
}

struct Inner {
    id: DeviceId,
    config: DeviceConfig,
    state: Mutex<PoolState>,
    transfers: TransferCounters,
}

/// Handle to one simulated accelerator's memory.
///
/// Cheap to clone; all clones refer to the same pools. `Send + Sync`, so
/// allocation and transfers may be issued from several threads. Callers must
/// still serialize writers to a given buffer, which the `&mut` receiver of
/// every copy primitive enforces.
#[derive(Clone)]
pub struct DeviceMemory {
    inner: Arc<Inner>,
}

impl DeviceMemory {
    /// Create a device with the given configuration.
    ///
    /// Returns `Err(MemoryError::InvalidConfig)` if the name is empty or
    /// either pool has zero capacity.
    pub fn new(config: DeviceConfig) -> Result<Self, MemoryError> {
        if config.name.is_empty() {
            return Err(MemoryError::InvalidConfig {
                reason: "device name must not be empty".into(),
            });
        }
        if config.device_capacity == 0 || config.host_capacity == 0 {
            return Err(MemoryError::InvalidConfig {
                reason: format!(
                    "pool capacities must be non-zero (device {}, host {})",
                    config.device_capacity, config.host_capacity,
                ),
            });
        }

        let id = DeviceId::next();
        tracing::debug!(
            device = %id,
            name = %config.name,
            device_capacity = config.device_capacity,
            host_capacity = config.host_capacity,
            "device memory initialised"
        );
        Ok(Self {
            inner: Arc::new(Inner {
                id,
                config,
                state: Mutex::new(PoolState::default()),
                transfers: TransferCounters::default(),
            }),
        })
    }

    /// Unique ID of this device.
    pub fn id(&self) -> DeviceId {
        self.inner.id
    }

    /// Diagnostic name of this device.
    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    /// The configuration this device was built with.
    pub fn config(&self) -> &DeviceConfig {
        &self.inner.config
    }

    /// Allocate a zero-filled buffer of exactly `size_bytes` in space `S`.
    ///
    /// `label` is kept for diagnostics only; it has no effect on size or
    /// contents. A zero-byte request succeeds and yields an empty buffer.
    ///
    /// Returns `Err(MemoryError::AllocationFailed)` if `S`'s pool does not
    /// have `size_bytes` free, or the host cannot back the storage.
    pub fn allocate<S: MemorySpace>(
        &self,
        size_bytes: usize,
        label: &str,
    ) -> Result<Buffer<S>, MemoryError> {
        let space = S::KIND;
        let id = self.reserve(space, size_bytes, label)?;

        let line_count = lines_for(size_bytes);
        let mut lines = Vec::new();
        if lines.try_reserve_exact(line_count).is_err() {
            self.release(space, id, size_bytes);
            tracing::warn!(
                device = %self.id(),
                %space,
                label,
                size_bytes,
                "host could not back allocation"
            );
            return Err(MemoryError::AllocationFailed {
                space,
                label: label.to_string(),
                requested: size_bytes,
                available: 0,
            });
        }
        lines.resize(line_count, Line::zeroed());

        tracing::debug!(
            device = %self.id(),
            %space,
            allocation = %id,
            label,
            size_bytes,
            "allocated"
        );
        Ok(Buffer::new(
            lines.into_boxed_slice(),
            size_bytes,
            id,
            label.to_string(),
            self.clone(),
        ))
    }

    /// Account for `size_bytes` in `space`'s pool and register the allocation.
    fn reserve(
        &self,
        space: SpaceKind,
        size_bytes: usize,
        label: &str,
    ) -> Result<AllocationId, MemoryError> {
        let capacity = self.inner.config.capacity(space);
        let mut state = self.inner.state.lock();
        let available = capacity - state.in_use(space);
        if size_bytes > available {
            drop(state);
            tracing::warn!(
                device = %self.id(),
                %space,
                label,
                requested = size_bytes,
                available,
                "allocation failed: pool exhausted"
            );
            return Err(MemoryError::AllocationFailed {
                space,
                label: label.to_string(),
                requested: size_bytes,
                available,
            });
        }

        *state.in_use_mut(space) += size_bytes;
        let id = AllocationId(state.next_id);
        state.next_id += 1;
        state.live.insert(
            id,
            AllocationInfo {
                id,
                space,
                label: label.to_string(),
                size_bytes,
            },
        );
        Ok(id)
    }

    /// Return a buffer's bytes to its pool. Called from `Buffer::drop`.
    pub(crate) fn release(&self, space: SpaceKind, id: AllocationId, size_bytes: usize) {
        let mut state = self.inner.state.lock();
        if state.live.shift_remove(&id).is_some() {
            *state.in_use_mut(space) -= size_bytes;
        }
        drop(state);
        tracing::debug!(
            device = %self.id(),
            %space,
            allocation = %id,
            size_bytes,
            "released"
        );
    }

    /// Bytes currently allocated from `space`'s pool.
    pub fn bytes_in_use(&self, space: SpaceKind) -> usize {
        self.inner.state.lock().in_use(space)
    }

    /// Bytes still free in `space`'s pool.
    pub fn bytes_available(&self, space: SpaceKind) -> usize {
        self.inner.config.capacity(space) - self.bytes_in_use(space)
    }

    /// Bytes currently allocated from the device pool.
    pub fn device_bytes_in_use(&self) -> usize {
        self.bytes_in_use(SpaceKind::Device)
    }

    /// Bytes currently allocated from the host-mapped pool.
    pub fn host_bytes_in_use(&self) -> usize {
        self.bytes_in_use(SpaceKind::HostMapped)
    }

    /// Live allocations in allocation order.
    pub fn live_allocations(&self) -> Vec<AllocationInfo> {
        self.inner.state.lock().live.values().cloned().collect()
    }

    /// Snapshot of the transfer counters.
    pub fn transfer_stats(&self) -> TransferStats {
        self.inner.transfers.snapshot()
    }

    pub(crate) fn counters(&self) -> &TransferCounters {
        &self.inner.transfers
    }
}

impl fmt::Debug for DeviceMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceMemory")
            .field("id", &self.inner.id)
            .field("name", &self.inner.config.name)
            .finish()
    }
}

/// Memory report: one header line per pool, then one line per live
/// allocation with its label.
impl fmt::Display for DeviceMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        let config = &self.inner.config;
        writeln!(f, "device {} '{}'", self.inner.id, config.name)?;
        writeln!(
            f,
            "  device pool: {} / {} bytes",
            state.device_in_use, config.device_capacity
        )?;
        writeln!(
            f,
            "  host-mapped pool: {} / {} bytes",
            state.host_in_use, config.host_capacity
        )?;
        for info in state.live.values() {
            let label = if info.label.is_empty() {
                "<unlabeled>"
            } else {
                info.label.as_str()
            };
            writeln!(
                f,
                "  {} {} '{}' {} bytes",
                info.id, info.space, label, info.size_bytes
            )?;
        }
        Ok(())
    }
}
