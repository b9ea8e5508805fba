//! Memory-manager error types.

use std::error::Error;
use std::fmt;

use strata_core::DeviceId;

use crate::space::SpaceKind;
use crate::transfer::Direction;

/// Errors that can occur during allocation or transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// A pool cannot satisfy an allocation request.
    AllocationFailed {
        /// Pool the request was made against.
        space: SpaceKind,
        /// Diagnostic label attached to the request.
        label: String,
        /// Number of bytes requested.
        requested: usize,
        /// Bytes still free in the pool at the time of the request.
        available: usize,
    },
    /// A transfer asked for more bytes than one of its buffers holds.
    TransferOutOfBounds {
        /// Direction of the rejected transfer.
        direction: Direction,
        /// Number of bytes requested.
        requested: usize,
        /// Length of the destination buffer in bytes.
        dst_len: usize,
        /// Length of the source buffer in bytes.
        src_len: usize,
    },
    /// A buffer passed to a transfer was allocated by a different device.
    ForeignBuffer {
        /// Direction of the rejected transfer.
        direction: Direction,
        /// The device asked to perform the transfer.
        expected: DeviceId,
        /// The device that owns the offending buffer.
        found: DeviceId,
    },
    /// The device configuration was rejected at construction.
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed {
                space,
                label,
                requested,
                available,
            } => {
                write!(
                    f,
                    "{space} allocation '{label}' failed: requested {requested} bytes, available {available} bytes"
                )
            }
            Self::TransferOutOfBounds {
                direction,
                requested,
                dst_len,
                src_len,
            } => {
                write!(
                    f,
                    "{direction} transfer of {requested} bytes exceeds buffers (dst {dst_len} bytes, src {src_len} bytes)"
                )
            }
            Self::ForeignBuffer {
                direction,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{direction} transfer on device {expected} given a buffer owned by device {found}"
                )
            }
            Self::InvalidConfig { reason } => write!(f, "invalid device config: {reason}"),
        }
    }
}

impl Error for MemoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_failure_message_carries_label() {
        let err = MemoryError::AllocationFailed {
            space: SpaceKind::Device,
            label: "weights".into(),
            requested: 4096,
            available: 1024,
        };
        assert_eq!(
            err.to_string(),
            "device allocation 'weights' failed: requested 4096 bytes, available 1024 bytes"
        );
    }

    #[test]
    fn out_of_bounds_message_names_direction() {
        let err = MemoryError::TransferOutOfBounds {
            direction: Direction::HostToDevice,
            requested: 10,
            dst_len: 8,
            src_len: 10,
        };
        assert!(err.to_string().starts_with("host-to-device transfer"));
    }
}
