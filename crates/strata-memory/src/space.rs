//! Memory-space tags.
//!
//! A memory space is a zero-sized type parameter, never a runtime value.
//! [`Device`] is the accelerator's own memory; [`HostMapped`] is a
//! host-addressable mirror of a device space that shares its index map.
//! The set of spaces is closed: [`MemorySpace`] is sealed.

use std::fmt;
use std::marker::PhantomData;

use strata_core::{Contiguous, Layout};

/// Which pool a buffer is drawn from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpaceKind {
    /// Accelerator memory. Not addressable from the host.
    Device,
    /// Host-addressable mirror memory.
    HostMapped,
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device => write!(f, "device"),
            Self::HostMapped => write!(f, "host-mapped"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A memory space an array or buffer can live in.
///
/// Sealed: only [`Device`] and [`HostMapped<Device>`](HostMapped) implement it.
pub trait MemorySpace: sealed::Sealed + Send + Sync + 'static {
    /// Index map used for arrays in this space.
    type Layout: Layout;

    /// Pool this space draws from.
    const KIND: SpaceKind;
}

/// The accelerator's own memory space, laid out with `L`.
///
/// The layout is part of the space so that the host-mapped mirror of a
/// device space is guaranteed to use the same index map.
pub struct Device<L: Layout = Contiguous> {
    _layout: PhantomData<fn() -> L>,
}

/// Host-addressable mirror of the space `S`.
///
/// Not a view of `S`'s memory: a host-mapped array is an independent
/// allocation whose layout is identical to its device twin, which is what
/// makes a flat byte copy between them valid.
pub struct HostMapped<S> {
    _space: PhantomData<fn() -> S>,
}

/// Host-mapped mirror of a device laid out with `L`.
pub type HostMirror<L = Contiguous> = HostMapped<Device<L>>;

impl<L: Layout> sealed::Sealed for Device<L> {}
impl<L: Layout> sealed::Sealed for HostMapped<Device<L>> {}

impl<L: Layout> MemorySpace for Device<L> {
    type Layout = L;
    const KIND: SpaceKind = SpaceKind::Device;
}

impl<L: Layout> MemorySpace for HostMapped<Device<L>> {
    type Layout = L;
    const KIND: SpaceKind = SpaceKind::HostMapped;
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::Padded;

    fn kind_of<S: MemorySpace>() -> SpaceKind {
        S::KIND
    }

    #[test]
    fn kinds_match_tags() {
        assert_eq!(kind_of::<Device>(), SpaceKind::Device);
        assert_eq!(kind_of::<HostMirror>(), SpaceKind::HostMapped);
        assert_eq!(kind_of::<Device<Padded<128>>>(), SpaceKind::Device);
        assert_eq!(kind_of::<HostMirror<Padded<128>>>(), SpaceKind::HostMapped);
    }

    #[test]
    fn mirror_shares_device_layout() {
        fn same<A: MemorySpace, B: MemorySpace<Layout = A::Layout>>() {}
        same::<Device<Padded<256>>, HostMirror<Padded<256>>>();
        same::<Device, HostMirror>();
    }

    #[test]
    fn display_names() {
        assert_eq!(SpaceKind::Device.to_string(), "device");
        assert_eq!(SpaceKind::HostMapped.to_string(), "host-mapped");
    }
}
