//! LIFO stack on top of [`GrowableArray`].

use std::fmt;
use std::slice::ChunksExact;

use cask_core::{ContainerConfig, ContainerError, Element, Heap, RegionAllocator};

use crate::array::GrowableArray;
use crate::listing::Listing;

/// A stack of `element_width`-byte elements.
///
/// A growable array restricted to its last slot, with the same resize
/// behaviour. Popped slots are zeroed so stale elements never reappear.
pub struct Stack<A: RegionAllocator = Heap> {
    items: GrowableArray<A>,
}

impl Stack<Heap> {
    /// Create an empty stack with the default config.
    pub fn new(element_width: usize) -> Result<Self, ContainerError> {
        Self::with_config(element_width, ContainerConfig::new())
    }

    /// Create an empty stack with an explicit config.
    pub fn with_config(
        element_width: usize,
        config: ContainerConfig,
    ) -> Result<Self, ContainerError> {
        Self::with_allocator(element_width, config, Heap)
    }
}

impl<A: RegionAllocator> Stack<A> {
    /// Create an empty stack drawing its storage from `allocator`.
    pub fn with_allocator(
        element_width: usize,
        config: ContainerConfig,
        allocator: A,
    ) -> Result<Self, ContainerError> {
        Ok(Self {
            items: GrowableArray::with_allocator(element_width, config, allocator)?,
        })
    }

    /// Width of one element in bytes.
    pub fn element_width(&self) -> usize {
        self.items.element_width()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The allocator storage is drawn from.
    pub fn allocator(&self) -> &A {
        self.items.allocator()
    }

    /// Mutable access to the allocator.
    pub fn allocator_mut(&mut self) -> &mut A {
        self.items.allocator_mut()
    }

    /// Push `element` on top.
    pub fn push(&mut self, element: &[u8]) -> Result<(), ContainerError> {
        self.items.push(element)
    }

    /// Pop the top element into `out`.
    pub fn pop_into(&mut self, out: &mut [u8]) -> Result<(), ContainerError> {
        self.items.pop_into(out)
    }

    /// Borrow the top element.
    pub fn peek(&self) -> Result<&[u8], ContainerError> {
        let top = self.len().checked_sub(1).ok_or(ContainerError::Empty)?;
        self.items.get(top)
    }

    /// Copy the top element into `out`.
    pub fn peek_into(&self, out: &mut [u8]) -> Result<(), ContainerError> {
        let top = self.len().checked_sub(1).ok_or(ContainerError::Empty)?;
        self.items.get_into(top, out)
    }

    /// Push a typed value on top.
    pub fn push_value<T: Element>(&mut self, value: &T) -> Result<(), ContainerError> {
        self.items.push_value(value)
    }

    /// Pop and decode the top element.
    pub fn pop_value<T: Element>(&mut self) -> Result<T, ContainerError> {
        self.items.pop_value()
    }

    /// Decode the top element.
    pub fn peek_value<T: Element>(&self) -> Result<T, ContainerError> {
        let top = self.len().checked_sub(1).ok_or(ContainerError::Empty)?;
        self.items.get_value(top)
    }

    /// Remove every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Live elements from the bottom up to the top.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.items.iter()
    }

    /// Render the live elements bottom first as `[e0, e1, ...]`.
    pub fn listing<F>(&self, format_element: F) -> Listing<ChunksExact<'_, u8>, F>
    where
        F: Fn(&[u8], &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        self.items.listing(format_element)
    }
}

impl<A: RegionAllocator> fmt::Debug for Stack<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("element_width", &self.element_width())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}
