//! Growth and shrink policy.
//!
//! Pure capacity arithmetic, no allocation. Growth is `2c + 1` for both
//! container shapes: doubling bounds total copy work over `n` pushes to
//! `O(n)`, and the `+ 1` moves a zero-capacity buffer forward.
//!
//! The two shapes differ in their triggers:
//!
//! | | grow when | shrink when | shrink to |
//! |---|---|---|---|
//! | array | `size == c` | `2 * size <= c` | `max(size, floor)` |
//! | queue | `head + 1 >= c` | `size <= ⌈c/2⌉` | `max(⌈c/2⌉, floor)` |

use cask_core::ContainerError;

/// Capacity after one growth step: `2 * capacity + 1`.
pub fn grown_capacity(capacity: usize, element_width: usize) -> Result<usize, ContainerError> {
    capacity
        .checked_mul(2)
        .and_then(|c| c.checked_add(1))
        .ok_or(ContainerError::CapacityOverflow {
            capacity,
            element_width,
        })
}

/// `⌈capacity / 2⌉`.
pub fn half_capacity(capacity: usize) -> usize {
    capacity.div_ceil(2)
}

/// Whether an array must grow before writing slot `size`.
pub fn array_needs_grow(size: usize, capacity: usize) -> bool {
    size >= capacity
}

/// Whether a queue must grow before writing slot `head_index`.
///
/// The queue grows one slot early. With the window flush at offset 0 this
/// is `size == capacity - 1`; measuring from the head keeps the write in
/// bounds when the tail has advanced.
pub fn queue_needs_grow(head_index: usize, capacity: usize) -> bool {
    head_index.saturating_add(1) >= capacity
}

/// Target capacity for an array that now holds `size` elements, if it
/// should shrink.
///
/// Shrinks to exactly `size` (never below `min_capacity`) once the array is
/// at most half full. Returns `None` when the floor leaves nothing to
/// reclaim.
pub fn array_shrink_target(size: usize, capacity: usize, min_capacity: usize) -> Option<usize> {
    if size.saturating_mul(2) > capacity {
        return None;
    }
    let target = size.max(min_capacity);
    (target < capacity).then_some(target)
}

/// Whether a queue holding `size` elements is due for recentering.
pub fn queue_recenter_due(size: usize, capacity: usize) -> bool {
    size <= half_capacity(capacity)
}

/// Target capacity for a queue about to pop from `size` elements, if it
/// should shrink.
///
/// `None` either when recentering is not due or when the floor leaves
/// nothing to reclaim; callers check [`queue_recenter_due`] separately
/// because the window is recentered even when the capacity stays.
pub fn queue_shrink_target(size: usize, capacity: usize, min_capacity: usize) -> Option<usize> {
    if !queue_recenter_due(size, capacity) {
        return None;
    }
    let target = half_capacity(capacity).max(min_capacity);
    (target < capacity).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growth_makes_progress_from_zero() {
        assert_eq!(grown_capacity(0, 4).unwrap(), 1);
        assert_eq!(grown_capacity(1, 4).unwrap(), 3);
        assert_eq!(grown_capacity(10, 4).unwrap(), 21);
    }

    #[test]
    fn growth_overflow_is_reported() {
        assert_eq!(
            grown_capacity(usize::MAX / 2 + 1, 8),
            Err(ContainerError::CapacityOverflow {
                capacity: usize::MAX / 2 + 1,
                element_width: 8
            })
        );
        // 2 * (MAX / 2) + 1 == MAX still fits.
        assert_eq!(grown_capacity(usize::MAX / 2, 8), Ok(usize::MAX));
        assert_eq!(grown_capacity(usize::MAX / 2 - 1, 8), Ok(usize::MAX - 2));
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(half_capacity(21), 11);
        assert_eq!(half_capacity(20), 10);
        assert_eq!(half_capacity(1), 1);
        assert_eq!(half_capacity(0), 0);
    }

    #[test]
    fn array_grows_only_when_full() {
        assert!(!array_needs_grow(9, 10));
        assert!(array_needs_grow(10, 10));
        assert!(array_needs_grow(0, 0));
    }

    #[test]
    fn queue_grows_one_slot_early() {
        assert!(!queue_needs_grow(8, 10));
        assert!(queue_needs_grow(9, 10));
        assert!(queue_needs_grow(0, 0));
        assert!(queue_needs_grow(0, 1));
    }

    #[test]
    fn array_shrinks_to_size_at_half_mark() {
        assert_eq!(array_shrink_target(10, 21, 10), Some(10));
        assert_eq!(array_shrink_target(11, 21, 10), None);
        assert_eq!(array_shrink_target(3, 40, 0), Some(3));
    }

    #[test]
    fn array_shrink_respects_floor() {
        assert_eq!(array_shrink_target(2, 10, 10), None);
        assert_eq!(array_shrink_target(2, 30, 10), Some(10));
    }

    #[test]
    fn queue_shrinks_to_half_at_half_mark() {
        assert_eq!(queue_shrink_target(12, 21, 10), None);
        assert_eq!(queue_shrink_target(11, 21, 10), Some(11));
        assert_eq!(queue_shrink_target(6, 11, 10), Some(10));
        assert_eq!(queue_shrink_target(5, 10, 10), None);
        assert!(queue_recenter_due(5, 10));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn array_target_keeps_size_and_bound(
                size in 0usize..10_000,
                capacity in 0usize..20_000,
                floor in 0usize..64,
            ) {
                prop_assume!(size <= capacity);
                if let Some(target) = array_shrink_target(size, capacity, floor) {
                    prop_assert!(size <= target);
                    prop_assert!(target < capacity);
                    prop_assert!(target <= (2 * size + 1).max(floor));
                }
            }

            #[test]
            fn queue_target_halves_without_dropping_live_slots(
                size in 0usize..10_000,
                capacity in 0usize..20_000,
                floor in 0usize..64,
            ) {
                prop_assume!(size <= capacity);
                if let Some(target) = queue_shrink_target(size, capacity, floor) {
                    prop_assert!(size <= target);
                    prop_assert!(target < capacity);
                    prop_assert_eq!(target, half_capacity(capacity).max(floor));
                }
            }
        }
    }
}
