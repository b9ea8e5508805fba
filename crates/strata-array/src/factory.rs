//! The factory dispatch matrix.
//!
//! Allocation and data movement are selected by the pair (output space,
//! input space). Each supported pair is a trait implementation, so the
//! direction of a copy is part of the strategy's identity and an unsupported
//! pair does not compile:
//!
//! ```compile_fail
//! use strata_array::{create, deep_copy, Array};
//! use strata_memory::{DeviceConfig, DeviceMemory, HostMirror};
//!
//! let mem = DeviceMemory::new(DeviceConfig::default()).unwrap();
//! let src: Array<f32, HostMirror> = create(&mem, "a", 4).unwrap();
//! let mut dst: Array<f32, HostMirror> = create(&mem, "b", 4).unwrap();
//! // There is no host-mapped to host-mapped strategy.
//! deep_copy(&mut dst, &src).unwrap();
//! ```
//!
//! Nor can two device spaces with different layouts be paired:
//!
//! ```compile_fail
//! use strata_array::{create, deep_copy, Array};
//! use strata_core::Padded;
//! use strata_memory::{Device, DeviceConfig, DeviceMemory};
//!
//! let mem = DeviceMemory::new(DeviceConfig::default()).unwrap();
//! let src: Array<f32, Device> = create(&mem, "a", 4).unwrap();
//! let mut dst: Array<f32, Device<Padded<128>>> = create(&mem, "b", 4).unwrap();
//! deep_copy(&mut dst, &src).unwrap();
//! ```

use strata_core::{Element, Layout};
use strata_memory::{Device, DeviceMemory, HostMirror, MemorySpace, BUFFER_ALIGN};

use crate::array::Array;
use crate::error::ArrayError;

/// Allocating constructor: no source array.
pub trait Allocate: Sized {
    /// Create a zero-filled array of `count` logical elements.
    ///
    /// The buffer comes from the output space's own pool on `memory` and is
    /// tagged with `label`, which affects diagnostics only.
    fn allocate(memory: &DeviceMemory, label: &str, count: usize) -> Result<Self, ArrayError>;
}

/// Shape-copying constructor across a supported space pair.
///
/// The result has the input's logical extent, an empty label, and all-zero
/// contents. It never copies the input's values; follow with
/// [`DeepCopy::deep_copy`] to populate it.
pub trait CreateFrom<In>: Sized {
    /// Allocate a zero-filled counterpart shaped like `input`.
    fn create_from(input: &In) -> Result<Self, ArrayError>;
}

/// Whole-array content transfer from `Src` into `self`.
///
/// Both arrays must already exist and have equal allocation sizes. The check
/// runs before any byte moves, so a rejected copy leaves `self` untouched.
pub trait DeepCopy<Src> {
    /// Overwrite every byte of `self` with the bytes of `src`.
    fn deep_copy(&mut self, src: &Src) -> Result<(), ArrayError>;
}

impl<T: Element, S: MemorySpace> Allocate for Array<T, S> {
    fn allocate(memory: &DeviceMemory, label: &str, count: usize) -> Result<Self, ArrayError> {
        let required = std::mem::align_of::<T>();
        if required > BUFFER_ALIGN {
            return Err(ArrayError::UnsupportedAlignment {
                required,
                provided: BUFFER_ALIGN,
            });
        }
        let layout = <S::Layout as Layout>::assign::<T>(count)?;
        let data = memory.allocate::<S>(layout.size_bytes(), label)?;
        tracing::debug!(
            device = %memory.id(),
            space = %S::KIND,
            label,
            count,
            allocation_size = layout.allocation_size(),
            "array created"
        );
        Ok(Array::from_parts(layout, data))
    }
}

/// Reject a copy whose two allocations differ in byte size.
fn check_sizes<T: Element, D: MemorySpace, S: MemorySpace>(
    dst: &Array<T, D>,
    src: &Array<T, S>,
) -> Result<(), ArrayError> {
    let (dst_bytes, src_bytes) = (dst.size_bytes(), src.size_bytes());
    if dst_bytes != src_bytes {
        tracing::debug!(
            dst = %dst.data.id(),
            src = %src.data.id(),
            dst_bytes,
            src_bytes,
            "deep copy rejected: size mismatch"
        );
        return Err(ArrayError::SizeMismatch {
            dst_bytes,
            src_bytes,
        });
    }
    Ok(())
}

// Device <- Device

impl<T: Element, L: Layout> CreateFrom<Array<T, Device<L>>> for Array<T, Device<L>> {
    fn create_from(input: &Array<T, Device<L>>) -> Result<Self, ArrayError> {
        Self::allocate(input.memory(), "", input.dimension(0))
    }
}

impl<T: Element, L: Layout> DeepCopy<Array<T, Device<L>>> for Array<T, Device<L>> {
    fn deep_copy(&mut self, src: &Array<T, Device<L>>) -> Result<(), ArrayError> {
        check_sizes(self, src)?;
        let size = self.allocation_size() * std::mem::size_of::<T>();
        let memory = self.data.memory().clone();
        memory.copy_to_device_from_device(&mut self.data, &src.data, size)?;
        Ok(())
    }
}

// Device <- HostMapped (upload)

impl<T: Element, L: Layout> CreateFrom<Array<T, HostMirror<L>>> for Array<T, Device<L>> {
    fn create_from(input: &Array<T, HostMirror<L>>) -> Result<Self, ArrayError> {
        Self::allocate(input.memory(), "", input.dimension(0))
    }
}

impl<T: Element, L: Layout> DeepCopy<Array<T, HostMirror<L>>> for Array<T, Device<L>> {
    fn deep_copy(&mut self, src: &Array<T, HostMirror<L>>) -> Result<(), ArrayError> {
        check_sizes(self, src)?;
        let size = self.allocation_size() * std::mem::size_of::<T>();
        let memory = self.data.memory().clone();
        memory.copy_to_device_from_host(&mut self.data, &src.data, size)?;
        Ok(())
    }
}

// HostMapped <- Device (download)

impl<T: Element, L: Layout> CreateFrom<Array<T, Device<L>>> for Array<T, HostMirror<L>> {
    fn create_from(input: &Array<T, Device<L>>) -> Result<Self, ArrayError> {
        Self::allocate(input.memory(), "", input.dimension(0))
    }
}

impl<T: Element, L: Layout> DeepCopy<Array<T, Device<L>>> for Array<T, HostMirror<L>> {
    fn deep_copy(&mut self, src: &Array<T, Device<L>>) -> Result<(), ArrayError> {
        check_sizes(self, src)?;
        let size = src.allocation_size() * std::mem::size_of::<T>();
        src.memory()
            .copy_to_host_from_device(&mut self.data, &src.data, size)?;
        Ok(())
    }
}

/// Allocate a zero-filled array of `count` elements. See [`Allocate`].
pub fn create<A: Allocate>(memory: &DeviceMemory, label: &str, count: usize) -> Result<A, ArrayError> {
    A::allocate(memory, label, count)
}

/// Allocate a zero-filled counterpart shaped like `input`. See [`CreateFrom`].
pub fn create_from<Out: CreateFrom<In>, In>(input: &In) -> Result<Out, ArrayError> {
    Out::create_from(input)
}

/// Copy the whole of `src` into `dst`. See [`DeepCopy`].
pub fn deep_copy<Dst: DeepCopy<Src>, Src>(dst: &mut Dst, src: &Src) -> Result<(), ArrayError> {
    dst.deep_copy(src)
}
