use std::sync::Arc;

use domains::{CommentRepository, DetailThread, Result, ThreadDetail, ThreadRepository};
use serde_json::Value;

/// Reads a thread with its comments, masking soft-deleted ones.
pub struct DetailThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DetailThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// The lookup key is built once and handed to both repositories.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, params: &Value) -> Result<ThreadDetail> {
        let key = DetailThread::new(params)?;

        let thread = self.thread_repository.get_detail_thread(&key).await?;
        let comments = self.comment_repository.get_comments_in_thread(&key).await?;

        tracing::debug!(thread_id = key.thread_id(), comments = comments.len(), "thread loaded");
        Ok(ThreadDetail::assemble(thread, comments))
    }
}
