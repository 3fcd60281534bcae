//! Growable array of fixed-width byte elements.

use std::fmt;
use std::slice::ChunksExact;

use cask_buffer::{policy, RawBuffer};
use cask_core::{ContainerConfig, ContainerError, Element, Heap, RegionAllocator};

use crate::check_width;
use crate::listing::Listing;

/// A contiguous, growable array of `element_width`-byte elements.
///
/// Live elements occupy slots `[0, len)`. Pushing into a full array grows
/// the buffer to `2 * capacity + 1` slots; popping down to half the
/// capacity shrinks it to exactly `len` slots, but never below the
/// configured floor. [`resize`](GrowableArray::resize) bypasses the
/// doubling and allocates exactly what is asked for.
///
/// Every operation either succeeds or leaves the array untouched.
pub struct GrowableArray<A: RegionAllocator = Heap> {
    buffer: RawBuffer<A>,
    len: usize,
    min_capacity: usize,
}

impl GrowableArray<Heap> {
    /// Create an empty array with the default config.
    pub fn new(element_width: usize) -> Result<Self, ContainerError> {
        Self::with_config(element_width, ContainerConfig::new())
    }

    /// Create an empty array whose capacity never drops below `capacity`.
    pub fn with_capacity(element_width: usize, capacity: usize) -> Result<Self, ContainerError> {
        Self::with_config(
            element_width,
            ContainerConfig::new().with_min_capacity(capacity),
        )
    }

    /// Create an array of `len` live elements with the default config.
    ///
    /// The contents are unspecified (currently zero); callers are expected
    /// to [`set`](GrowableArray::set) them. Capacity is `len` or the
    /// default floor, whichever is larger.
    pub fn with_len(element_width: usize, len: usize) -> Result<Self, ContainerError> {
        Self::with_len_and_config(element_width, len, ContainerConfig::new())
    }

    /// Create an array of `len` live elements with an explicit config.
    pub fn with_len_and_config(
        element_width: usize,
        len: usize,
        config: ContainerConfig,
    ) -> Result<Self, ContainerError> {
        Self::with_len_and_allocator(element_width, len, config, Heap)
    }

    /// Create an empty array with an explicit config.
    pub fn with_config(
        element_width: usize,
        config: ContainerConfig,
    ) -> Result<Self, ContainerError> {
        Self::with_allocator(element_width, config, Heap)
    }
}

impl<A: RegionAllocator> GrowableArray<A> {
    /// Create an empty array drawing its storage from `allocator`.
    pub fn with_allocator(
        element_width: usize,
        config: ContainerConfig,
        allocator: A,
    ) -> Result<Self, ContainerError> {
        let buffer = RawBuffer::new(element_width, config.min_capacity, &config, allocator)?;
        Ok(Self {
            buffer,
            len: 0,
            min_capacity: config.min_capacity,
        })
    }

    /// Create an array of `len` live (zeroed) elements drawing its storage
    /// from `allocator`. Capacity is `max(len, config.min_capacity)`.
    pub fn with_len_and_allocator(
        element_width: usize,
        len: usize,
        config: ContainerConfig,
        allocator: A,
    ) -> Result<Self, ContainerError> {
        let capacity = len.max(config.min_capacity);
        let buffer = RawBuffer::new(element_width, capacity, &config, allocator)?;
        Ok(Self {
            buffer,
            len,
            min_capacity: config.min_capacity,
        })
    }

    /// Width of one element in bytes.
    pub fn element_width(&self) -> usize {
        self.buffer.element_width()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// The allocator storage is drawn from.
    pub fn allocator(&self) -> &A {
        self.buffer.allocator()
    }

    /// Mutable access to the allocator.
    pub fn allocator_mut(&mut self) -> &mut A {
        self.buffer.allocator_mut()
    }

    /// Append `element` at the end.
    pub fn push(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), element.len())?;
        let slot = self.reserve_slot()?;
        self.buffer.write_slot(slot, element);
        self.len += 1;
        Ok(())
    }

    /// Remove the last element, copying it into `out`.
    ///
    /// After the removal the vacated slot is zeroed, either directly or by
    /// shrinking the buffer past it. If the shrink cannot be allocated the
    /// error is returned and the element stays in place.
    pub fn pop_into(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), out.len())?;
        self.pop_with(|bytes| out.copy_from_slice(bytes))
    }

    /// Borrow element `index`.
    pub fn get(&self, index: usize) -> Result<&[u8], ContainerError> {
        self.check_index(index)?;
        Ok(self.buffer.slot(index))
    }

    /// Copy element `index` into `out`.
    pub fn get_into(&self, index: usize, out: &mut [u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), out.len())?;
        out.copy_from_slice(self.get(index)?);
        Ok(())
    }

    /// Overwrite element `index` with `element`.
    pub fn set(&mut self, index: usize, element: &[u8]) -> Result<(), ContainerError> {
        check_width(self.element_width(), element.len())?;
        self.check_index(index)?;
        self.buffer.write_slot(index, element);
        Ok(())
    }

    /// Set the number of live elements to `new_len`.
    ///
    /// Grows the buffer to exactly `new_len` slots if it is too small (no
    /// doubling). Elements exposed by growing are unspecified. Elements cut
    /// off by shrinking are zeroed; the capacity is left as is.
    pub fn resize(&mut self, new_len: usize) -> Result<(), ContainerError> {
        if new_len > self.capacity() {
            self.buffer.reallocate(new_len, self.len)?;
        } else if new_len < self.len {
            self.buffer.clear_slots(new_len..self.len);
        }
        self.len = new_len;
        Ok(())
    }

    /// Remove every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.buffer.clear_slots(0..self.len);
        self.len = 0;
    }

    /// Append a typed value.
    pub fn push_value<T: Element>(&mut self, value: &T) -> Result<(), ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        let slot = self.reserve_slot()?;
        value.encode(self.buffer.slot_mut(slot));
        self.len += 1;
        Ok(())
    }

    /// Remove and decode the last element.
    pub fn pop_value<T: Element>(&mut self) -> Result<T, ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        self.pop_with(T::decode)
    }

    /// Decode element `index`.
    pub fn get_value<T: Element>(&self, index: usize) -> Result<T, ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        self.get(index).map(T::decode)
    }

    /// Encode `value` into element `index`.
    pub fn set_value<T: Element>(&mut self, index: usize, value: &T) -> Result<(), ContainerError> {
        check_width(self.element_width(), T::WIDTH)?;
        self.check_index(index)?;
        value.encode(self.buffer.slot_mut(index));
        Ok(())
    }

    /// Live elements in index order.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.buffer
            .slots(0..self.len)
            .chunks_exact(self.element_width())
    }

    /// Render the live elements in index order as `[e0, e1, ...]`.
    pub fn listing<F>(&self, format_element: F) -> Listing<ChunksExact<'_, u8>, F>
    where
        F: Fn(&[u8], &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        Listing::new(self.iter(), format_element)
    }

    /// Index of the slot the next push writes, growing first if full.
    fn reserve_slot(&mut self) -> Result<usize, ContainerError> {
        let capacity = self.capacity();
        if policy::array_needs_grow(self.len, capacity) {
            let grown = policy::grown_capacity(capacity, self.element_width())?;
            self.buffer.reallocate(grown, self.len)?;
        }
        Ok(self.len)
    }

    /// Hand the last element to `take`, then retire its slot.
    fn pop_with<R>(&mut self, take: impl FnOnce(&[u8]) -> R) -> Result<R, ContainerError> {
        let last = self.len.checked_sub(1).ok_or(ContainerError::Empty)?;
        let value = take(self.buffer.slot(last));
        match policy::array_shrink_target(last, self.capacity(), self.min_capacity) {
            Some(target) => self.buffer.reallocate(target, last)?,
            None => self.buffer.clear_slot(last),
        }
        self.len = last;
        Ok(value)
    }

    fn check_index(&self, index: usize) -> Result<(), ContainerError> {
        if index < self.len {
            Ok(())
        } else {
            Err(ContainerError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

impl<A: RegionAllocator> fmt::Debug for GrowableArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("element_width", &self.element_width())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
