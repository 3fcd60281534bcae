//! Core types and traits for the Cask container family.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the buffer engine and the containers:
//! the error taxonomy, container configuration, the element codec used
//! by the typed helpers, and the region allocator seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod alloc;
pub mod config;
pub mod element;
pub mod error;

pub use alloc::{Heap, RegionAllocator};
pub use config::ContainerConfig;
pub use element::Element;
pub use error::{ContainerError, ErrorKind};
