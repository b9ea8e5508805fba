//! Layout error types.

use std::error::Error;
use std::fmt;

/// Errors produced while assigning an index map to a logical extent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The element count (after padding) times the element size does not
    /// fit in `usize`.
    Overflow {
        /// Logical element count requested.
        count: usize,
        /// Size of one element in bytes.
        element_size: usize,
    },
    /// Zero-sized value types cannot be laid out.
    ZeroSizedElement,
    /// The padding granule is not a non-zero power of two.
    InvalidPadding {
        /// The rejected granule in bytes.
        bytes: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow {
                count,
                element_size,
            } => {
                write!(
                    f,
                    "layout overflow: {count} elements of {element_size} bytes exceed the address range"
                )
            }
            Self::ZeroSizedElement => write!(f, "zero-sized element types cannot be laid out"),
            Self::InvalidPadding { bytes } => {
                write!(f, "padding granule must be a non-zero power of two (got {bytes})")
            }
        }
    }
}

impl Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_message_names_count_and_size() {
        let err = LayoutError::Overflow {
            count: usize::MAX,
            element_size: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains(&usize::MAX.to_string()));
        assert!(msg.contains("8 bytes"));
    }
}
