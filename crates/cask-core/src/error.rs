//! Error types for the Cask container family.
//!
//! Every fallible container operation returns [`ContainerError`]. Variants
//! are grouped into three broad classes, exposed through
//! [`ContainerError::kind`], so callers can branch on the class without
//! matching every variant.

use std::error::Error;
use std::fmt;

/// Broad classification of a [`ContainerError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input detected before any state was touched.
    InvalidArgument,
    /// A storage region could not be obtained.
    AllocationFailure,
    /// Removal or inspection on a container with no live elements.
    EmptyContainer,
}

/// Errors that can occur during container operations.
///
/// A container that returns any of these is left in its last valid state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// Containers cannot hold zero-width elements.
    ZeroElementWidth,
    /// An element or output buffer did not match the container's width.
    WidthMismatch {
        /// The container's element width in bytes.
        expected: usize,
        /// The width that was supplied.
        actual: usize,
    },
    /// An index at or past the number of live elements.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A [`ContainerConfig`](crate::ContainerConfig) that cannot be honoured.
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The region allocator could not satisfy a request.
    AllocationFailed {
        /// Size of the region that was requested.
        requested_bytes: usize,
    },
    /// A region would exceed the configured byte ceiling.
    CapacityExceeded {
        /// Size of the region that was requested.
        requested_bytes: usize,
        /// The configured ceiling.
        limit_bytes: usize,
    },
    /// `capacity * element_width` (or the growth formula) overflows `usize`.
    CapacityOverflow {
        /// Slot count that was being computed or sized.
        capacity: usize,
        /// Element width in bytes.
        element_width: usize,
    },
    /// The container has no live elements.
    Empty,
}

impl ContainerError {
    /// The broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ZeroElementWidth
            | Self::WidthMismatch { .. }
            | Self::IndexOutOfRange { .. }
            | Self::InvalidConfig { .. } => ErrorKind::InvalidArgument,
            Self::AllocationFailed { .. }
            | Self::CapacityExceeded { .. }
            | Self::CapacityOverflow { .. } => ErrorKind::AllocationFailure,
            Self::Empty => ErrorKind::EmptyContainer,
        }
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementWidth => write!(f, "element width must be greater than zero"),
            Self::WidthMismatch { expected, actual } => {
                write!(
                    f,
                    "element width mismatch: expected {expected} bytes, got {actual} bytes"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid container config: {reason}"),
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
            Self::CapacityExceeded {
                requested_bytes,
                limit_bytes,
            } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested_bytes} bytes, limit {limit_bytes} bytes"
                )
            }
            Self::CapacityOverflow {
                capacity,
                element_width,
            } => {
                write!(
                    f,
                    "capacity overflow: {capacity} slots of {element_width} bytes"
                )
            }
            Self::Empty => write!(f, "container is empty"),
        }
    }
}

impl Error for ContainerError {}
