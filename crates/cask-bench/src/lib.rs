//! Workload profiles for benchmarking the Cask containers.
//!
//! - [`filled_queue`] / [`filled_array`]: containers pre-loaded to a given
//!   length, for steady-state measurements.
//! - [`sawtooth`]: a push/pop schedule that repeatedly climbs to a peak
//!   and drains, crossing every grow and shrink threshold on the way.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cask_collections::{BidiQueue, GrowableArray};
use cask_core::ContainerError;

/// One step of a benchmark schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Push one element.
    Push,
    /// Pop one element.
    Pop,
}

/// A queue of `width`-byte elements holding `len` elements.
pub fn filled_queue(len: usize, width: usize) -> Result<BidiQueue, ContainerError> {
    let mut queue = BidiQueue::new(width)?;
    let element = vec![0xa5u8; width];
    for _ in 0..len {
        queue.push(&element)?;
    }
    Ok(queue)
}

/// An array of `width`-byte elements holding `len` elements.
pub fn filled_array(len: usize, width: usize) -> Result<GrowableArray, ContainerError> {
    let mut array = GrowableArray::new(width)?;
    let element = vec![0x5au8; width];
    for _ in 0..len {
        array.push(&element)?;
    }
    Ok(array)
}

/// `cycles` rounds of `peak` pushes followed by `peak` pops.
pub fn sawtooth(peak: usize, cycles: usize) -> Vec<Step> {
    let mut steps = Vec::with_capacity(2 * peak * cycles);
    for _ in 0..cycles {
        steps.extend(std::iter::repeat(Step::Push).take(peak));
        steps.extend(std::iter::repeat(Step::Pop).take(peak));
    }
    steps
}
