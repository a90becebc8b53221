//! # storage-adapters
//!
//! Implementations of the `domains` repository ports.
//! The in-memory adapter backs tests and local runs.

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::{IdGenerator, InMemoryForumStore};
