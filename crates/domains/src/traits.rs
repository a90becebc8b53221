//! # Core Traits (Ports)
//!
//! Any adapter must implement these traits to be used by the services.
//! Adapters map their own failures into [`DomainError`](crate::DomainError)
//! variants; the core never inspects anything else.

use async_trait::async_trait;

use crate::entities::{AddComment, AddThread, DeleteComment, DetailThread};
use crate::error::Result;
use crate::models::{AddedComment, AddedThread, CommentRecord, ThreadRecord};

/// Thread persistence contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread>;

    /// Fails with `ThreadNotFound` when no such thread exists.
    async fn verify_thread_availability(&self, thread_id: &str) -> Result<()>;

    /// Fails with `ThreadNotFound` when no such thread exists.
    async fn get_detail_thread(&self, key: &DetailThread) -> Result<ThreadRecord>;
}

/// Comment persistence contract.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment_in_thread(&self, comment: AddComment) -> Result<AddedComment>;

    /// Checks both that the comment lives under the thread (`CommentNotFound`)
    /// and that `owner` wrote it (`NotCommentOwner`).
    async fn verify_comment_availability(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<()>;

    /// Comments of the thread, in display order, deleted ones included.
    async fn get_comments_in_thread(&self, key: &DetailThread) -> Result<Vec<CommentRecord>>;

    /// Soft delete: flips the deletion marker, never removes the row.
    async fn delete_comment_in_thread(&self, comment: DeleteComment) -> Result<()>;
}

/// Resolves a bearer credential to a caller id.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AuthenticationTokenManager: Send + Sync {
    /// `Ok(None)` when the header does not carry a valid token.
    async fn verify_token_from_header(&self, authorization: &str) -> Result<Option<String>>;
}
