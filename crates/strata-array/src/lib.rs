//! Typed arrays and the space-pair factory matrix for Strata.
//!
//! An [`Array<T, S>`](Array) is an index map plus an owned buffer in the
//! memory space `S`. Arrays are created and filled through a closed set of
//! strategies keyed by (output space, input space):
//!
//! | Output | Input | `create` | `deep_copy` primitive |
//! |--------|-------|----------|-----------------------|
//! | any space | none | [`Allocate`] | n/a |
//! | `Device<L>` | `Device<L>` | [`CreateFrom`] (shape only) | device-to-device |
//! | `Device<L>` | `HostMirror<L>` | [`CreateFrom`] (shape only) | host-to-device |
//! | `HostMirror<L>` | `Device<L>` | [`CreateFrom`] (shape only) | device-to-host |
//!
//! Any other pair has no implementation and is rejected by the compiler.
//!
//! # Example
//!
//! ```rust
//! use strata_array::{create, create_from, deep_copy, Array};
//! use strata_memory::{Device, DeviceConfig, DeviceMemory, HostMirror};
//!
//! let mem = DeviceMemory::new(DeviceConfig::new("gpu0")).unwrap();
//!
//! let mut host: Array<f32, HostMirror> = create(&mem, "input", 4).unwrap();
//! host.as_mut_slice().copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
//!
//! // Same shape, still zero: creating never copies contents.
//! let mut dev: Array<f32, Device> = create_from(&host).unwrap();
//! deep_copy(&mut dev, &host).unwrap();
//!
//! let mut back: Array<f32, HostMirror> = create_from(&dev).unwrap();
//! assert_eq!(back.as_slice(), &[0.0; 4]);
//! deep_copy(&mut back, &dev).unwrap();
//! assert_eq!(back.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod error;
pub mod factory;

pub use array::Array;
pub use error::ArrayError;
pub use factory::{create, create_from, deep_copy, Allocate, CreateFrom, DeepCopy};
