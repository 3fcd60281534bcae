//! Bidirectional queue with a sliding live window.
//!
//! Elements enter at the head and leave at the tail. Rather than wrapping
//! around, the live window `[tail, head)` slides towards the end of the
//! buffer as elements flow through, and is moved back to offset 0
//! ("recentered") whenever a pop finds the queue at most half full. The
//! same check drives shrinking, so the buffer is compacted and trimmed in
//! one step.
//!
//! ```text
//!  before pop:   [ . . . t x x x h . . . . . . ]   size <= ⌈cap/2⌉
//!  shrink:       [ x x x h . . . ]                 window copied to the front
//!                capacity = max(⌈cap/2⌉, floor)
//!  at the floor: window moved to offset 0 in place
//! ```

use std::fmt;
use std::iter::Rev;
use std::ops::Range;
use std::slice::ChunksExact;

use cask_buffer::{policy, RawBuffer};
use cask_core::{ContainerConfig, ContainerError, Element, Heap, RegionAllocator};

use crate::check_width;
use crate::listing::Listing;

/// Iterator over a queue's live elements, newest first.
pub type HeadToTail<'a> = Rev<ChunksExact<'a, u8>>;

/// A FIFO queue of `element_width`-byte elements in one contiguous buffer.
///
/// Invariant: `tail <= head <= capacity`, and the live elements are the
/// slots `[tail, head)`.
pub struct BidiQueue<A: RegionAllocator = Heap> {
    buffer: RawBuffer<A>,
    /// Slot of the oldest live element (next to pop).
    tail: usize,
    /// Slot the next push writes.
    head: usize,
    min_capacity: usize,
}

impl BidiQueue<Heap> {
    /// Create an empty queue with the default config (10 slots).
    pub fn new(element_width: usize) -> Result<Self, ContainerError> {
        Self::with_config(element_width, ContainerConfig::new())
    }

    /// Create an empty queue whose capacity never drops below `capacity`.
    pub fn with_capacity(element_width: usize, capacity: usize) -> Result<Self, ContainerError> {
        Self::with_config(
            element_width,
            ContainerConfig::new().with_min_capacity(capacity),
        )
    }

    /// Create an empty queue with an explicit config.
    pub fn with_config(
        element_width: usize,
        config: ContainerConfig,
    ) -> Result<Self, ContainerError> {
        Self::with_allocator(element_width, config, Heap)
    }
}

impl<A: RegionAllocator> BidiQueue<A> {
    /// Create an empty queue drawing its storage from `allocator`.
    pub fn with_allocator(
        element_width: usize,
        config: ContainerConfig,
        allocator: A,
    ) -> Result<Self, ContainerError> {
        let buffer = RawBuffer::new(element_width, config.min_capacity, &config, allocator)?;
        Ok(Self {
            buffer,
            tail: 0,
            head: 0,
            min_capacity: config.min_capacity,
        })
    }

    /// Width of one element in bytes.
    pub fn element_width(&self) -> usize {
        self.buffer.element_width()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.head - self.tail
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The slot range currently holding live elements.
    pub fn window(&self) -> Range<usize> {
        self.tail..self.head
    }

    /// The allocator storage is drawn from.
    pub fn allocator(&self) -> &A {
        self.buffer.allocator()
    }

    /// Mutable access to the allocator.
    pub fn allocator_mut(&mut self) -> &mut A {
        self.buffer.allocator_mut()
    }

    /// Append `element` at the head.
    pub fn push(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), element.len())?;
        let slot = self.reserve_slot()?;
        self.buffer.write_slot(slot, element);
        self.head += 1;
        Ok(())
    }

    /// Remove the element at the tail, copying it into `out`.
    ///
    /// May first recenter and shrink the buffer. If the shrink cannot be
    /// allocated the error is returned and the queue is unchanged.
    pub fn pop_into(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), out.len())?;
        self.pop_with(|bytes| out.copy_from_slice(bytes))
    }

    /// Borrow the element the next pop returns.
    pub fn peek(&self) -> Result<&[u8], ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        Ok(self.buffer.slot(self.tail))
    }

    /// Copy the element the next pop returns into `out`.
    pub fn peek_into(&self, out: &mut [u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), out.len())?;
        out.copy_from_slice(self.peek()?);
        Ok(())
    }

    /// Append a typed value at the head.
    pub fn push_value<T: Element>(&mut self, value: &T) -> Result<(), ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        let slot = self.reserve_slot()?;
        value.encode(self.buffer.slot_mut(slot));
        self.head += 1;
        Ok(())
    }

    /// Remove and decode the element at the tail.
    pub fn pop_value<T: Element>(&mut self) -> Result<T, ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        self.pop_with(T::decode)
    }

    /// Decode the element the next pop returns.
    pub fn peek_value<T: Element>(&self) -> Result<T, ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        self.peek().map(T::decode)
    }

    /// Live elements from the head (newest) down to the tail (oldest).
    pub fn iter(&self) -> HeadToTail<'_> {
        self.buffer
            .slots(self.window())
            .chunks_exact(self.element_width())
            .rev()
    }

    /// Render the live elements newest first as `[e0, e1, ...]`.
    pub fn listing<F>(&self, format_element: F) -> Listing<HeadToTail<'_>, F>
    where
        F: Fn(&[u8], &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        Listing::new(self.iter(), format_element)
    }

    /// Slot the next push writes, growing first if the head is about to
    /// reach the end of the buffer.
    fn reserve_slot(&mut self) -> Result<usize, ContainerError> {
        let capacity = self.capacity();
        if policy::queue_needs_grow(self.head, capacity) {
            let grown = policy::grown_capacity(capacity, self.element_width())?;
            self.buffer.reallocate(grown, self.head)?;
        }
        Ok(self.head)
    }

    /// Hand the tail element to `take`, then advance the tail.
    fn pop_with<R>(&mut self, take: impl FnOnce(&[u8]) -> R) -> Result<R, ContainerError> {
        if self.is_empty() {
            return Err(ContainerError::Empty);
        }
        self.recenter_if_due()?;
        let value = take(self.buffer.slot(self.tail));
        self.tail += 1;
        if self.is_empty() {
            self.tail = 0;
            self.head = 0;
        }
        Ok(value)
    }

    /// Move the window to offset 0 and shrink, if the queue is at most
    /// half full.
    ///
    /// When the buffer shrinks, the window is copied straight to the front
    /// of the new region, so a refused shrink leaves the queue as it was.
    /// When the floor blocks the shrink, the window is moved in place.
    fn recenter_if_due(&mut self) -> Result<(), ContainerError> {
        let size = self.len();
        let capacity = self.capacity();
        if !policy::queue_recenter_due(size, capacity) {
            return Ok(());
        }
        match policy::queue_shrink_target(size, capacity, self.min_capacity) {
            Some(target) => self.buffer.reallocate_window(target, self.window())?,
            None if self.tail > 0 => self.buffer.relocate(self.window(), 0),
            None => return Ok(()),
        }
        if self.tail > 0 {
            tracing::trace!(tail = self.tail, head = self.head, size, "recentering queue window");
        }
        self.tail = 0;
        self.head = size;
        Ok(())
    }
}

impl<A: RegionAllocator> fmt::Debug for BidiQueue<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BidiQueue")
            .field("element_width", &self.element_width())
            .field("window", &self.window())
            .field("capacity", &self.capacity())
            .finish()
    }
}
