//! forum/crates/domains/src/lib.rs
//!
//! The central domain logic and interface definitions for the forum core.

pub mod entities;
pub mod error;
pub mod models;
pub mod traits;
pub mod translator;

// Re-exporting for easier access in other crates
pub use entities::*;
pub use error::*;
pub use models::*;
pub use traits::*;
pub use translator::{translate, AppError};
