//! Owned, zero-initialised buffers tagged with their memory space.
//!
//! A [`Buffer`] is the unit of storage handed out by
//! [`DeviceMemory::allocate`](crate::DeviceMemory::allocate). It is move-only,
//! exclusively owned, and returns its bytes to the pool it came from when
//! dropped. The space parameter decides what the host may do with it: only
//! host-mapped buffers expose their bytes.

use std::fmt;
use std::marker::PhantomData;

use strata_core::{AllocationId, DeviceId, Layout};

use crate::manager::DeviceMemory;
use crate::raw::{Line, LINE_BYTES};
use crate::space::{Device, HostMapped, MemorySpace};

/// Alignment in bytes guaranteed for every buffer's storage.
pub const BUFFER_ALIGN: usize = LINE_BYTES;

/// A contiguous, zero-filled allocation in the memory space `S`.
///
/// Storage is 64-byte aligned and exactly [`Buffer::len`] bytes long as far
/// as callers can observe. There is no `Clone`: duplicating contents is a
/// transfer, not a copy of the handle.
#[must_use]
pub struct Buffer<S: MemorySpace> {
    /// Backing storage, rounded up to whole lines.
    lines: Box<[Line]>,
    /// Requested size in bytes.
    len: usize,
    /// Registry key within the owning device.
    id: AllocationId,
    /// Diagnostic label supplied at allocation.
    label: String,
    /// Owning device; released into on drop.
    memory: DeviceMemory,
    _space: PhantomData<fn() -> S>,
}

impl<S: MemorySpace> Buffer<S> {
    pub(crate) fn new(
        lines: Box<[Line]>,
        len: usize,
        id: AllocationId,
        label: String,
        memory: DeviceMemory,
    ) -> Self {
        Self {
            lines,
            len,
            id,
            label,
            memory,
            _space: PhantomData,
        }
    }

    /// Size of the allocation in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether this is a zero-length allocation.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Label supplied at allocation time.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Registry key of this allocation within its device.
    pub fn id(&self) -> AllocationId {
        self.id
    }

    /// The device that owns this buffer.
    pub fn memory(&self) -> &DeviceMemory {
        &self.memory
    }

    /// ID of the device that owns this buffer.
    pub fn device_id(&self) -> DeviceId {
        self.memory.id()
    }

    pub(crate) fn bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<Line, u8>(&self.lines)[..self.len]
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<Line, u8>(&mut self.lines)[..self.len]
    }
}

impl<L: Layout> Buffer<HostMapped<Device<L>>> {
    /// Read the buffer's bytes from the host.
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes()
    }

    /// Mutable host access to the buffer's bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.bytes_mut()
    }
}

impl<S: MemorySpace> Drop for Buffer<S> {
    fn drop(&mut self) {
        self.memory.release(S::KIND, self.id, self.len);
    }
}

impl<S: MemorySpace> fmt::Debug for Buffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("space", &S::KIND)
            .field("id", &self.id)
            .field("label", &self.label)
            .field("len", &self.len)
            .field("device", &self.memory.id())
            .finish()
    }
}
