//! Cask: type-erased contiguous containers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Cask sub-crates. For most users, adding `cask` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cask::prelude::*;
//!
//! // A queue of 4-byte elements, 10 slots to start with.
//! let mut queue = BidiQueue::new(4).unwrap();
//! for i in 0..12i32 {
//!     queue.push_value(&i).unwrap();
//! }
//! assert_eq!(queue.capacity(), 21);
//! assert_eq!(queue.pop_value::<i32>().unwrap(), 0);
//!
//! // Raw bytes work for any width, including ones no primitive matches.
//! let mut array = GrowableArray::new(3).unwrap();
//! array.push(&[1, 2, 3]).unwrap();
//! assert_eq!(array.get(0).unwrap(), &[1, 2, 3]);
//!
//! // Rendering needs a formatter for the element type.
//! let text = queue
//!     .listing(|bytes, f| write!(f, "{}", i32::decode(bytes)))
//!     .to_string();
//! assert!(text.starts_with("[11, 10, 9"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cask-core` | Errors, config, `Element`, `RegionAllocator` |
//! | [`buffer`] | `cask-buffer` | `RawBuffer` and the resize policy |
//! | [`collections`] | `cask-collections` | `GrowableArray`, `Stack`, `BidiQueue` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, configuration, element codec and allocator seam (`cask-core`).
pub use cask_core as types;

/// The type-erased buffer and its growth/shrink policy (`cask-buffer`).
///
/// Only needed to build a new container shape; the containers in
/// [`collections`] already wrap it.
pub use cask_buffer as buffer;

/// The containers (`cask-collections`).
pub use cask_collections as collections;

/// Common imports.
///
/// ```rust
/// use cask::prelude::*;
/// ```
pub mod prelude {
    pub use cask_collections::{BidiQueue, GrowableArray, Listing, Stack};
    pub use cask_core::{ContainerConfig, ContainerError, Element, ErrorKind, Heap, RegionAllocator};
}
