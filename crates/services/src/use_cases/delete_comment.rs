use std::sync::Arc;

use domains::{
    required_id, CommentRepository, DeleteComment, DomainError, Reason, Result, Scope,
};
use serde_json::json;

/// Route parameters plus the resolved caller id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCommentParams {
    pub id: Option<String>,
    pub thread_id: Option<String>,
    pub comment_id: Option<String>,
}

/// Soft-deletes a comment owned by the caller.
pub struct DeleteCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, params: DeleteCommentParams) -> Result<()> {
        let owner = required_id(params.id.as_deref())
            .ok_or_else(|| DomainError::rejected(Scope::DeleteComment, Reason::NoAuthorization))?;
        let (Some(thread_id), Some(comment_id)) = (
            required_id(params.thread_id.as_deref()),
            required_id(params.comment_id.as_deref()),
        ) else {
            return Err(DomainError::rejected(Scope::DeleteComment, Reason::NoParams));
        };

        let delete = DeleteComment::new(&json!({
            "owner": owner,
            "threadId": thread_id,
            "commentId": comment_id,
        }))?;

        // Existence and ownership are both enforced by this one call.
        self.comment_repository
            .verify_comment_availability(thread_id, comment_id, owner)
            .await?;

        self.comment_repository
            .delete_comment_in_thread(delete)
            .await?;
        tracing::info!(comment_id, "comment soft-deleted");
        Ok(())
    }
}
