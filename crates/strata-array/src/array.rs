//! The owned array entity.

use std::fmt;
use std::marker::PhantomData;

use strata_core::{Element, Layout};
use strata_memory::{Buffer, Device, DeviceMemory, HostMapped, MemorySpace};

/// A typed array of `T` living in memory space `S`.
///
/// Holds the index map assigned at creation and an exclusively owned buffer
/// of `allocation_size() * size_of::<T>()` bytes. Arrays are move-only and
/// never resized; the buffer is returned to its pool when the array is
/// dropped. Create arrays through [`Allocate`](crate::Allocate) or
/// [`CreateFrom`](crate::CreateFrom).
///
/// Only host-mapped arrays can be read or written from the host. Device
/// contents are reached through [`DeepCopy`](crate::DeepCopy).
pub struct Array<T: Element, S: MemorySpace> {
    pub(crate) layout: S::Layout,
    pub(crate) data: Buffer<S>,
    _value: PhantomData<T>,
}

impl<T: Element, S: MemorySpace> Array<T, S> {
    pub(crate) fn from_parts(layout: S::Layout, data: Buffer<S>) -> Self {
        debug_assert_eq!(layout.size_bytes(), data.len());
        Self {
            layout,
            data,
            _value: PhantomData,
        }
    }

    /// Label supplied at creation. Empty for shape-copied arrays.
    pub fn label(&self) -> &str {
        self.data.label()
    }

    /// Logical extent along `rank`. `dimension(0)` is the element count.
    pub fn dimension(&self, rank: usize) -> usize {
        self.layout.dimension(rank)
    }

    /// Logical element count, `dimension(0)`.
    pub fn len(&self) -> usize {
        self.layout.dimension(0)
    }

    /// Whether the logical extent is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element slots allocated, including any padding.
    pub fn allocation_size(&self) -> usize {
        self.layout.allocation_size()
    }

    /// Size of the backing buffer in bytes.
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// The index map this array was created with.
    pub fn layout(&self) -> &S::Layout {
        &self.layout
    }

    /// The device that owns this array's buffer.
    pub fn memory(&self) -> &DeviceMemory {
        self.data.memory()
    }

    /// The backing buffer.
    pub fn buffer(&self) -> &Buffer<S> {
        &self.data
    }
}

impl<T: Element, L: Layout> Array<T, HostMapped<Device<L>>> {
    /// Every allocated slot, padding included.
    pub fn as_slice(&self) -> &[T] {
        bytemuck::cast_slice(self.data.as_bytes())
    }

    /// Mutable access to every allocated slot, padding included.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(self.data.as_bytes_mut())
    }

    /// The first `len()` elements.
    pub fn values(&self) -> &[T] {
        let len = self.len();
        &self.as_slice()[..len]
    }

    /// Mutable access to the first `len()` elements.
    pub fn values_mut(&mut self) -> &mut [T] {
        let len = self.len();
        &mut self.as_mut_slice()[..len]
    }

    /// Raw bytes of the whole allocation.
    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_bytes()
    }
}

impl<T: Element, S: MemorySpace> fmt::Debug for Array<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("value_type", &std::any::type_name::<T>())
            .field("space", &S::KIND)
            .field("label", &self.label())
            .field("len", &self.len())
            .field("allocation_size", &self.allocation_size())
            .finish()
    }
}
