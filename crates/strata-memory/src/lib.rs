//! Memory spaces, owned buffers and directional transfers for Strata arrays.
//!
//! This crate plays the memory-manager role for a simulated accelerator: it
//! hands out zero-filled buffers from two capacity-bounded pools and moves
//! bytes between them with three direction-typed copy primitives. This crate
//! is the only one that may contain `unsafe` code, confined to `raw.rs`.
//!
//! # Architecture
//!
//! ```text
//! DeviceMemory (cloneable handle, Arc interior)
//! ├── device pool      ←─── Buffer<Device<L>>             (no host view)
//! ├── host-mapped pool ←─── Buffer<HostMapped<Device<L>>> (as_bytes / as_bytes_mut)
//! ├── registry: IndexMap<AllocationId, AllocationInfo>
//! └── TransferCounters (calls + bytes per Direction)
//! ```
//!
//! # Spaces are types
//!
//! The space a buffer lives in is part of its type. A copy primitive names
//! the space of its destination and of its source in its signature, so an
//! upload cannot be mistaken for a download and device memory can never be
//! read from the host without going through a transfer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod manager;
mod raw;
pub mod space;
pub mod transfer;

// Public re-exports for the primary API surface.
pub use buffer::{Buffer, BUFFER_ALIGN};
pub use config::DeviceConfig;
pub use error::MemoryError;
pub use manager::{AllocationInfo, DeviceMemory};
pub use space::{Device, HostMapped, HostMirror, MemorySpace, SpaceKind};
pub use transfer::{Direction, TransferStats};
