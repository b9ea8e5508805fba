//! Core types and layout contracts for Strata heterogeneous-memory arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the value-type bound shared by every memory space, the index-map
//! ([`Layout`]) contract that turns a logical element count into an
//! allocation size, strongly-typed identifiers, and the layout error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod id;
pub mod layout;

pub use element::Element;
pub use error::LayoutError;
pub use id::{AllocationId, DeviceId};
pub use layout::{Contiguous, Layout, Padded};
