//! # services
//!
//! Use cases for the forum core, one struct per user-facing operation, and
//! the [`Forum`] composition root that wires them to concrete adapters.

pub mod forum;
pub mod use_cases;

pub use forum::Forum;
pub use use_cases::{
    AddCommentUseCase, AddThreadUseCase, DeleteCommentParams, DeleteCommentUseCase,
    DetailThreadUseCase,
};
