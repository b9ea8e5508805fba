//! Strata: typed device arrays with host mirrors and explicit transfers.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strata sub-crates. For most users, adding `strata` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mem = DeviceMemory::new(DeviceConfig::new("gpu0")).unwrap();
//!
//! // Fill a host mirror, push it to the device, pull it back.
//! let mut host: Array<f64, HostMirror> = create(&mem, "samples", 3).unwrap();
//! host.as_mut_slice().copy_from_slice(&[0.5, 1.5, 2.5]);
//!
//! let mut dev: Array<f64, Device> = create(&mem, "samples", 3).unwrap();
//! deep_copy(&mut dev, &host).unwrap();
//!
//! let mut back: Array<f64, HostMirror> = create_from(&dev).unwrap();
//! deep_copy(&mut back, &dev).unwrap();
//! assert_eq!(back.values(), &[0.5, 1.5, 2.5]);
//!
//! let stats = mem.transfer_stats();
//! assert_eq!(stats.calls(Direction::HostToDevice), 1);
//! assert_eq!(stats.calls(Direction::DeviceToHost), 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strata-core` | Element bound, layouts, IDs, layout errors |
//! | [`memory`] | `strata-memory` | Memory spaces, buffers, pools, transfer primitives |
//! | [`array`] | `strata-array` | `Array`, the factory traits and free functions |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element bound, index maps, and IDs (`strata-core`).
///
/// Contains the [`types::Layout`] trait with its [`types::Contiguous`] and
/// [`types::Padded`] implementations.
pub use strata_core as types;

/// Memory spaces, buffers, and transfers (`strata-memory`).
///
/// [`memory::DeviceMemory`] owns the device and host-mapped pools and
/// exposes the three direction-typed copy primitives.
pub use strata_memory as memory;

/// Typed arrays and the factory matrix (`strata-array`).
///
/// See [`array::Allocate`], [`array::CreateFrom`] and [`array::DeepCopy`]
/// for the supported space pairs.
pub use strata_array as array;

/// Common imports for typical Strata usage.
///
/// ```rust
/// use strata::prelude::*;
/// ```
///
/// This imports the array type, the factory entry points, the memory space
/// tags, the device handle and the error types.
pub mod prelude {
    // Core types
    pub use strata_core::{Contiguous, Element, Layout, Padded};

    // Memory
    pub use strata_memory::{
        Device, DeviceConfig, DeviceMemory, Direction, HostMapped, HostMirror, MemorySpace,
        SpaceKind, TransferStats,
    };

    // Arrays and factories
    pub use strata_array::{create, create_from, deep_copy, Allocate, Array, CreateFrom, DeepCopy};

    // Errors
    pub use strata_array::ArrayError;
    pub use strata_core::LayoutError;
    pub use strata_memory::MemoryError;
}
