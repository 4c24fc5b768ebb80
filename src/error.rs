//! Error types for [`DynamicArray`](crate::DynamicArray).

use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by the fallible operations of [`DynamicArray`](crate::DynamicArray)
/// and its cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity exceeds `usize::MAX` elements or `isize::MAX` bytes.
    CapacityOverflow,
    /// The global allocator could not provide memory for `layout`.
    AllocationFailure {
        /// The layout that was requested.
        layout: Layout,
    },
    /// An index, `front`/`back` on an empty array, or a cursor position fell
    /// outside the live range `[0, len)`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the array at the time of the access.
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocationFailure { layout } => {
                write!(f, "memory allocation of {} bytes failed", layout.size())
            }
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    use crate::Error;
    use core::alloc::Layout;
    use core::error::Error as CoreError;

    fn describe(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = describe(&Error::OutOfRange { index: 4, len: 2 });
        assert_eq!(s, "index 4 out of range for length 2");
    }

    #[test]
    fn test_allocation_failure_reports_size() {
        let layout = Layout::array::<u64>(8).unwrap();
        let s = Error::AllocationFailure { layout }.to_string();
        assert_eq!(s, "memory allocation of 64 bytes failed");
    }

    #[test]
    fn test_capacity_overflow_message() {
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");
    }
}
