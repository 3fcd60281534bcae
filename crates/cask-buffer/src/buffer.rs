//! The type-erased slot buffer.
//!
//! A [`RawBuffer`] is one contiguous `Vec<u8>` divided into fixed-width
//! slots. Indices everywhere are slot offsets, never addresses, so they
//! survive a reallocation that moves the region.

use std::ops::Range;

use cask_core::{ContainerConfig, ContainerError, Heap, RegionAllocator};

/// A single contiguous region of `capacity * element_width` bytes.
///
/// The buffer has no notion of which slots are live; that bookkeeping
/// belongs to the container that owns it. Slot accessors panic on an
/// out-of-capacity index: containers validate indices against their live
/// window before reaching this layer.
pub struct RawBuffer<A: RegionAllocator = Heap> {
    /// Backing storage. Always exactly `capacity * element_width` bytes.
    data: Vec<u8>,
    element_width: usize,
    capacity: usize,
    /// Ceiling on `data.len()`, from [`ContainerConfig::max_bytes`].
    max_bytes: Option<usize>,
    allocator: A,
}

impl RawBuffer<Heap> {
    /// Create a heap-backed buffer with `capacity` zeroed slots.
    pub fn on_heap(
        element_width: usize,
        capacity: usize,
        config: &ContainerConfig,
    ) -> Result<Self, ContainerError> {
        Self::new(element_width, capacity, config, Heap)
    }
}

impl<A: RegionAllocator> RawBuffer<A> {
    /// Create a buffer with `capacity` zeroed slots of `element_width` bytes.
    ///
    /// Fails if the width is zero, the config is inconsistent with the
    /// width, the region size overflows or exceeds the ceiling, or the
    /// allocator refuses.
    pub fn new(
        element_width: usize,
        capacity: usize,
        config: &ContainerConfig,
        mut allocator: A,
    ) -> Result<Self, ContainerError> {
        config.validate(element_width)?;
        let bytes = region_bytes(capacity, element_width, config.max_bytes)?;
        let data = obtain(&mut allocator, bytes)?;
        Ok(Self {
            data,
            element_width,
            capacity,
            max_bytes: config.max_bytes,
            allocator,
        })
    }

    /// Width of one slot in bytes.
    pub fn element_width(&self) -> usize {
        self.element_width
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Size of the backing region in bytes.
    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// The allocator regions are drawn from.
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Mutable access to the allocator.
    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Bytes of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn slot(&self, index: usize) -> &[u8] {
        let start = index * self.element_width;
        &self.data[start..start + self.element_width]
    }

    /// Mutable bytes of slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    pub fn slot_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.element_width;
        &mut self.data[start..start + self.element_width]
    }

    /// Contiguous bytes of a run of slots.
    ///
    /// # Panics
    ///
    /// Panics if `slots.end > capacity` or the range is reversed.
    pub fn slots(&self, slots: Range<usize>) -> &[u8] {
        &self.data[self.byte_range(slots)]
    }

    /// Copy `bytes` into slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity` or `bytes.len() != element_width`.
    pub fn write_slot(&mut self, index: usize, bytes: &[u8]) {
        self.slot_mut(index).copy_from_slice(bytes);
    }

    /// Copy slot `index` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= capacity` or `out.len() != element_width`.
    pub fn read_slot(&self, index: usize, out: &mut [u8]) {
        out.copy_from_slice(self.slot(index));
    }

    /// Zero slot `index`.
    pub fn clear_slot(&mut self, index: usize) {
        self.slot_mut(index).fill(0);
    }

    /// Zero a run of slots.
    pub fn clear_slots(&mut self, slots: Range<usize>) {
        let bytes = self.byte_range(slots);
        self.data[bytes].fill(0);
    }

    /// Move the slots in `src` so they start at slot `dst`.
    ///
    /// Source and destination may overlap; the move behaves as if the
    /// source were first copied aside. Slots of `src` outside the
    /// destination keep their old bytes.
    ///
    /// # Panics
    ///
    /// Panics if either range runs past `capacity`.
    pub fn relocate(&mut self, src: Range<usize>, dst: usize) {
        let bytes = self.byte_range(src);
        self.data.copy_within(bytes, dst * self.element_width);
    }

    /// Replace the backing region with one of `new_capacity` slots,
    /// carrying over the first `keep` slots.
    ///
    /// This and [`reallocate_window`](RawBuffer::reallocate_window) are the
    /// only places the capacity changes. The new region is fully obtained
    /// before anything is touched, so on error the buffer is exactly as it
    /// was. Slots past `keep` in the new region are zero.
    ///
    /// # Panics
    ///
    /// Panics if `keep` exceeds either the old or the new capacity.
    pub fn reallocate(&mut self, new_capacity: usize, keep: usize) -> Result<(), ContainerError> {
        assert!(
            keep <= self.capacity && keep <= new_capacity,
            "keep {keep} exceeds capacity (old {}, new {new_capacity})",
            self.capacity,
        );
        self.reallocate_window(new_capacity, 0..keep)
    }

    /// Replace the backing region with one of `new_capacity` slots,
    /// carrying the slots in `window` over to the start of the new region.
    ///
    /// Compacts and resizes in a single copy. Same failure guarantee as
    /// [`reallocate`](RawBuffer::reallocate): on error nothing has moved.
    ///
    /// # Panics
    ///
    /// Panics if `window` runs past the old capacity or does not fit in
    /// `new_capacity`.
    pub fn reallocate_window(
        &mut self,
        new_capacity: usize,
        window: Range<usize>,
    ) -> Result<(), ContainerError> {
        assert!(
            window.start <= window.end
                && window.end <= self.capacity
                && window.len() <= new_capacity,
            "window {window:?} does not fit (old {}, new {new_capacity})",
            self.capacity,
        );
        let bytes = region_bytes(new_capacity, self.element_width, self.max_bytes)?;
        let mut region = obtain(&mut self.allocator, bytes)?;
        let kept_slots = window.len();
        let src = self.byte_range(window);
        region[..src.len()].copy_from_slice(&self.data[src]);

        tracing::debug!(
            old_capacity = self.capacity,
            new_capacity,
            element_width = self.element_width,
            kept_slots,
            "reallocated buffer"
        );
        self.data = region;
        self.capacity = new_capacity;
        Ok(())
    }

    fn byte_range(&self, slots: Range<usize>) -> Range<usize> {
        slots.start * self.element_width..slots.end * self.element_width
    }
}

/// Byte size of a region holding `capacity` slots, checked against the
/// ceiling.
fn region_bytes(
    capacity: usize,
    element_width: usize,
    max_bytes: Option<usize>,
) -> Result<usize, ContainerError> {
    let bytes = capacity
        .checked_mul(element_width)
        .ok_or(ContainerError::CapacityOverflow {
            capacity,
            element_width,
        })?;
    match max_bytes {
        Some(limit) if bytes > limit => Err(ContainerError::CapacityExceeded {
            requested_bytes: bytes,
            limit_bytes: limit,
        }),
        _ => Ok(bytes),
    }
}

/// Ask the allocator for a region and check it is the size we asked for.
fn obtain<A: RegionAllocator>(allocator: &mut A, bytes: usize) -> Result<Vec<u8>, ContainerError> {
    match allocator.allocate(bytes) {
        Ok(region) if region.len() == bytes => Ok(region),
        Ok(_) => Err(ContainerError::AllocationFailed {
            requested_bytes: bytes,
        }),
        Err(err) => {
            tracing::warn!(requested_bytes = bytes, error = %err, "region allocation refused");
            Err(err)
        }
    }
}
