//! Array-level error types.

use std::error::Error;
use std::fmt;

use strata_core::LayoutError;
use strata_memory::MemoryError;

/// Errors surfaced by array creation and deep copies.
///
/// None are retried or recovered by this crate; each reaches the direct
/// caller unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The index map could not be assigned for the requested extent.
    Layout(LayoutError),
    /// The memory manager failed an allocation or a transfer.
    Memory(MemoryError),
    /// `deep_copy` between arrays whose allocations differ in size.
    /// Raised before any byte moves.
    SizeMismatch {
        /// Destination allocation size in bytes.
        dst_bytes: usize,
        /// Source allocation size in bytes.
        src_bytes: usize,
    },
    /// The value type needs stricter alignment than buffers provide.
    UnsupportedAlignment {
        /// Alignment required by the value type.
        required: usize,
        /// Alignment every buffer guarantees.
        provided: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::Memory(err) => write!(f, "memory error: {err}"),
            Self::SizeMismatch {
                dst_bytes,
                src_bytes,
            } => {
                write!(
                    f,
                    "deep copy size mismatch: destination {dst_bytes} bytes, source {src_bytes} bytes"
                )
            }
            Self::UnsupportedAlignment { required, provided } => {
                write!(
                    f,
                    "value type requires {required}-byte alignment, buffers provide {provided}"
                )
            }
        }
    }
}

impl Error for ArrayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Memory(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LayoutError> for ArrayError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<MemoryError> for ArrayError {
    fn from(err: MemoryError) -> Self {
        Self::Memory(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_expose_source() {
        let err = ArrayError::from(LayoutError::ZeroSizedElement);
        assert!(err.source().is_some());
        let err = ArrayError::SizeMismatch {
            dst_bytes: 3200,
            src_bytes: 4000,
        };
        assert!(err.source().is_none());
        assert_eq!(
            err.to_string(),
            "deep copy size mismatch: destination 3200 bytes, source 4000 bytes"
        );
    }
}
