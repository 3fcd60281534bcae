//! Container configuration parameters.

use crate::error::ContainerError;

/// Configuration shared by every container in the family.
///
/// Controls the capacity floor and an optional ceiling on region size.
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Minimum number of slots a container holds.
    ///
    /// Used as the initial capacity of empty containers and as the floor
    /// below which shrinking never goes. Default: 10. Zero is allowed; the
    /// `2 * capacity + 1` growth rule still makes progress from there.
    pub min_capacity: usize,

    /// Upper bound on the size of a single storage region, in bytes.
    ///
    /// A grow that would need a larger region fails with
    /// [`ContainerError::CapacityExceeded`]. Default: `None` (unbounded).
    pub max_bytes: Option<usize>,
}

impl ContainerConfig {
    /// Default capacity floor.
    pub const DEFAULT_MIN_CAPACITY: usize = 10;

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            max_bytes: None,
        }
    }

    /// Replace the capacity floor.
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Set a byte ceiling on region size.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = Some(max_bytes);
        self
    }

    /// Check the config against a concrete element width.
    ///
    /// The byte ceiling must leave room for `min_capacity` slots, otherwise
    /// no container could ever be constructed.
    pub fn validate(&self, element_width: usize) -> Result<(), ContainerError> {
        if element_width == 0 {
            return Err(ContainerError::ZeroElementWidth);
        }
        if let Some(limit) = self.max_bytes {
            let floor_bytes = self.min_capacity.checked_mul(element_width).ok_or(
                ContainerError::CapacityOverflow {
                    capacity: self.min_capacity,
                    element_width,
                },
            )?;
            if floor_bytes > limit {
                return Err(ContainerError::InvalidConfig {
                    reason: format!(
                        "max_bytes {limit} cannot hold min_capacity {} slots of {element_width} bytes",
                        self.min_capacity
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self::new()
    }
}
