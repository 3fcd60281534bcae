//! Type-erased contiguous buffer and resize policy for Cask containers.
//!
//! Every container in the family stores its elements in one [`RawBuffer`]:
//! a single owned region of `capacity * element_width` bytes. The buffer
//! knows nothing about what the bytes mean. It offers slot-granular
//! access, an overlap-safe relocation primitive, and an all-or-nothing
//! [`RawBuffer::reallocate`] (with a compacting
//! [`RawBuffer::reallocate_window`] variant).
//!
//! *When* to reallocate, and to what size, lives in [`policy`] as pure
//! arithmetic so the containers and the tests share one definition.
//!
//! ```text
//! GrowableArray / Stack         BidiQueue
//!        │                          │
//!        └──────── policy ──────────┘
//!                    │
//!               RawBuffer ── RegionAllocator (Heap)
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod policy;

pub use buffer::RawBuffer;
