//! Test utilities and fixtures for Cask development.
//!
//! - [`FailingAllocator`]: a [`RegionAllocator`] that refuses requests on
//!   cue, for driving the allocation-failure paths.
//! - [`ReferenceDeque`]: a straightforward model of the bidirectional
//!   queue to compare real containers against.
//! - [`fixtures`]: element generators for widths that do not map to a
//!   primitive type.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use cask_core::{ContainerError, Heap, RegionAllocator};

/// Allocator that succeeds a set number of times, then refuses.
///
/// The budget can be topped up or cut off at any time through the
/// container's `allocator_mut()`, so a test can build up state with
/// allocation enabled and then force the next resize to fail.
#[derive(Clone, Debug, Default)]
pub struct FailingAllocator {
    /// Remaining successful allocations; `None` means unlimited.
    remaining: Option<usize>,
    calls: usize,
    refused: usize,
}

impl FailingAllocator {
    /// Create an allocator that succeeds `succeed_count` times then fails.
    pub fn new(succeed_count: usize) -> Self {
        Self {
            remaining: Some(succeed_count),
            calls: 0,
            refused: 0,
        }
    }

    /// Create an allocator that never fails until told to.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Allow exactly `succeed_count` more allocations.
    pub fn fail_after(&mut self, succeed_count: usize) {
        self.remaining = Some(succeed_count);
    }

    /// Refuse every allocation from now on.
    pub fn fail_always(&mut self) {
        self.remaining = Some(0);
    }

    /// Lift any limit.
    pub fn allow_all(&mut self) {
        self.remaining = None;
    }

    /// How many times `allocate()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// How many calls were refused.
    pub fn refused(&self) -> usize {
        self.refused
    }
}

impl RegionAllocator for FailingAllocator {
    fn allocate(&mut self, bytes: usize) -> Result<Vec<u8>, ContainerError> {
        self.calls += 1;
        match self.remaining {
            Some(0) => {
                self.refused += 1;
                Err(ContainerError::AllocationFailed {
                    requested_bytes: bytes,
                })
            }
            Some(ref mut n) => {
                *n -= 1;
                Heap.allocate(bytes)
            }
            None => Heap.allocate(bytes),
        }
    }
}

/// Model of the bidirectional queue: push at the head, pop at the tail.
///
/// Elements are owned byte vectors so any width can be modelled.
#[derive(Clone, Debug, Default)]
pub struct ReferenceDeque {
    items: VecDeque<Vec<u8>>,
}

impl ReferenceDeque {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the head.
    pub fn push(&mut self, element: &[u8]) {
        self.items.push_back(element.to_vec());
    }

    /// Remove from the tail.
    pub fn pop(&mut self) -> Option<Vec<u8>> {
        self.items.pop_front()
    }

    /// The element the next `pop` returns.
    pub fn peek(&self) -> Option<&[u8]> {
        self.items.front().map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Live elements from the newest (head) down to the oldest (tail).
    pub fn head_to_tail(&self) -> Vec<Vec<u8>> {
        self.items.iter().rev().cloned().collect()
    }
}
