//! Growable array, stack and bidirectional queue over a type-erased buffer.
//!
//! All three containers store fixed-width byte elements in a single
//! [`RawBuffer`](cask_buffer::RawBuffer) and share its resize policy:
//!
//! - [`GrowableArray`]: random access over slots `[0, len)`, grows when
//!   full, shrinks to `len` once half empty.
//! - [`Stack`]: a growable array restricted to its top.
//! - [`BidiQueue`]: pushes at the head, pops at the tail, and keeps its live
//!   window `[tail, head)` inside the buffer, recentering it to offset 0
//!   whenever it is at most half full.
//!
//! The byte-level API (`push`, `pop_into`, `get`, ...) works for any width.
//! The `*_value` helpers layer [`Element`](cask_core::Element) types on top
//! and reject types whose width does not match the container's.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod listing;
pub mod queue;
pub mod stack;

pub use array::GrowableArray;
pub use listing::Listing;
pub use queue::BidiQueue;
pub use stack::Stack;

use cask_core::ContainerError;

/// Reject an element or output buffer whose width is not `expected`.
pub(crate) fn check_width(expected: usize, actual: usize) -> Result<(), ContainerError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ContainerError::WidthMismatch { expected, actual })
    }
}
