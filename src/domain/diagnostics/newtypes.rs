// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Event log capacity bounds (50 to 5000 events).
pub mod buffer_capacity_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 50;
    /// Maximum number of retained events.
    pub const MAX: usize = 5000;
    /// Default number of retained events.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of diagnostic events kept in memory before the oldest are evicted.
///
/// Out-of-range values are clamped, so a `BufferCapacity` is always usable.
///
/// ```
/// use alok_site::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(10).value(), 50);
/// assert_eq!(BufferCapacity::new(800).value(), 800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a capacity, clamped to [`buffer_capacity_bounds`].
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped_into_bounds() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn default_capacity_is_within_bounds() {
        let value = BufferCapacity::default().value();
        assert!((buffer_capacity_bounds::MIN..=buffer_capacity_bounds::MAX).contains(&value));
    }
}
