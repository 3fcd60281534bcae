//! Region allocation seam.
//!
//! Containers never call the global allocator directly; every storage
//! region comes from a [`RegionAllocator`]. [`Heap`] is the production
//! implementation. Tests substitute allocators that refuse requests on
//! cue to exercise the failure paths.

use crate::error::ContainerError;

/// Source of zero-filled storage regions.
pub trait RegionAllocator {
    /// Return a zero-filled region of exactly `bytes` bytes.
    ///
    /// Must not panic or abort on exhaustion; report
    /// [`ContainerError::AllocationFailed`] instead.
    fn allocate(&mut self, bytes: usize) -> Result<Vec<u8>, ContainerError>;
}

/// Allocator backed by the global heap.
///
/// Uses [`Vec::try_reserve_exact`], so exhaustion surfaces as an error
/// rather than an abort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Heap;

impl RegionAllocator for Heap {
    fn allocate(&mut self, bytes: usize) -> Result<Vec<u8>, ContainerError> {
        let mut region = Vec::new();
        region
            .try_reserve_exact(bytes)
            .map_err(|_| ContainerError::AllocationFailed {
                requested_bytes: bytes,
            })?;
        region.resize(bytes, 0);
        Ok(region)
    }
}

impl<A: RegionAllocator + ?Sized> RegionAllocator for &mut A {
    fn allocate(&mut self, bytes: usize) -> Result<Vec<u8>, ContainerError> {
        (**self).allocate(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_returns_zeroed_region_of_exact_size() {
        let region = Heap.allocate(37).unwrap();
        assert_eq!(region.len(), 37);
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn heap_zero_bytes_is_valid() {
        assert!(Heap.allocate(0).unwrap().is_empty());
    }

    #[test]
    fn heap_reports_impossible_request() {
        let result = Heap.allocate(usize::MAX);
        assert_eq!(
            result,
            Err(ContainerError::AllocationFailed {
                requested_bytes: usize::MAX
            })
        );
    }

    #[test]
    fn mutable_reference_forwards() {
        fn region_of<A: RegionAllocator>(mut allocator: A, bytes: usize) -> Vec<u8> {
            allocator.allocate(bytes).unwrap()
        }
        let mut heap = Heap;
        assert_eq!(region_of(&mut heap, 4), vec![0; 4]);
    }
}
