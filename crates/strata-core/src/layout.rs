//! Index maps: logical extent to allocation size.
//!
//! A [`Layout`] is assigned once for a logical element count and value type
//! and then answers two questions: how many element slots to allocate
//! ([`Layout::allocation_size`]) and what the logical extent is
//! ([`Layout::dimension`]). Assignment is a pure function of the count and
//! the element size, so a device array and its host-mapped mirror always agree
//! on the allocation size when they share a layout type.

use std::fmt;

use crate::element::{element_size, Element};
use crate::error::LayoutError;

/// Index-map contract shared by every memory space.
///
/// Implementations must be deterministic: equal `count` and equal element
/// size yield an equal `allocation_size()`.
pub trait Layout: Clone + fmt::Debug + PartialEq + Eq + Send + Sync + 'static {
    /// Assign the map to `count` logical elements of type `T`.
    ///
    /// Fails if the required byte size overflows `usize` or `T` is
    /// zero-sized.
    fn assign<T: Element>(count: usize) -> Result<Self, LayoutError>;

    /// Total element slots to allocate. Always `>= dimension(0)`.
    fn allocation_size(&self) -> usize;

    /// Logical extent along `rank`.
    ///
    /// Rank 0 returns the assigned count. Ranks past [`Layout::rank`] have
    /// extent 1.
    fn dimension(&self, rank: usize) -> usize;

    /// Size in bytes of one element slot.
    fn element_size(&self) -> usize;

    /// Number of ranks described by this map.
    fn rank(&self) -> usize {
        1
    }

    /// Bytes backing the allocation: `allocation_size() * element_size()`.
    ///
    /// Cannot overflow; [`Layout::assign`] checked the product.
    fn size_bytes(&self) -> usize {
        self.allocation_size() * self.element_size()
    }
}

fn checked_bytes(count: usize, slots: usize, size: usize) -> Result<usize, LayoutError> {
    slots.checked_mul(size).ok_or(LayoutError::Overflow {
        count,
        element_size: size,
    })
}

/// Dense rank-1 map: one slot per logical element, no padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Contiguous {
    count: usize,
    element_size: usize,
}

impl Layout for Contiguous {
    fn assign<T: Element>(count: usize) -> Result<Self, LayoutError> {
        let size = element_size::<T>();
        if size == 0 {
            return Err(LayoutError::ZeroSizedElement);
        }
        checked_bytes(count, count, size)?;
        Ok(Self {
            count,
            element_size: size,
        })
    }

    fn allocation_size(&self) -> usize {
        self.count
    }

    fn dimension(&self, rank: usize) -> usize {
        if rank == 0 {
            self.count
        } else {
            1
        }
    }

    fn element_size(&self) -> usize {
        self.element_size
    }
}

/// Rank-1 map padded so the allocation is a whole number of `BYTES` granules.
///
/// The slot count is rounded up to the smallest value whose byte size is a
/// multiple of `BYTES`, which matches the transaction width of the backing
/// memory. `BYTES` must be a non-zero power of two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Padded<const BYTES: usize> {
    count: usize,
    slots: usize,
    element_size: usize,
}

impl<const BYTES: usize> Padded<BYTES> {
    /// Element slots per padding unit for elements of `size` bytes.
    fn unit(size: usize) -> usize {
        BYTES / gcd(BYTES, size)
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl<const BYTES: usize> Layout for Padded<BYTES> {
    fn assign<T: Element>(count: usize) -> Result<Self, LayoutError> {
        if !BYTES.is_power_of_two() {
            return Err(LayoutError::InvalidPadding { bytes: BYTES });
        }
        let size = element_size::<T>();
        if size == 0 {
            return Err(LayoutError::ZeroSizedElement);
        }
        let unit = Self::unit(size);
        let overflow = LayoutError::Overflow {
            count,
            element_size: size,
        };
        let slots = count
            .div_ceil(unit)
            .checked_mul(unit)
            .ok_or(overflow)?;
        checked_bytes(count, slots, size)?;
        Ok(Self {
            count,
            slots,
            element_size: size,
        })
    }

    fn allocation_size(&self) -> usize {
        self.slots
    }

    fn dimension(&self, rank: usize) -> usize {
        if rank == 0 {
            self.count
        } else {
            1
        }
    }

    fn element_size(&self) -> usize {
        self.element_size
    }
}
