use std::sync::Arc;

use domains::{
    merge_fields, required_id, AddComment, AddedComment, CommentRepository, DomainError, Reason,
    Result, Scope, ThreadRepository,
};
use serde_json::Value;

/// Posts a comment under an existing thread.
pub struct AddCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        thread_repository: Arc<dyn ThreadRepository>,
    ) -> Self {
        Self {
            comment_repository,
            thread_repository,
        }
    }

    /// Authorization is checked before the route parameter, and the thread
    /// must exist before the comment is written.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(
        &self,
        payload: &Value,
        caller_id: Option<&str>,
        thread_id: Option<&str>,
    ) -> Result<AddedComment> {
        let owner = required_id(caller_id)
            .ok_or_else(|| DomainError::rejected(Scope::AddComment, Reason::NoAuthorization))?;
        let thread_id = required_id(thread_id)
            .ok_or_else(|| DomainError::rejected(Scope::AddComment, Reason::NoParams))?;

        let comment = AddComment::new(&merge_fields(
            payload,
            &[("owner", owner), ("threadId", thread_id)],
        ))?;

        self.thread_repository
            .verify_thread_availability(thread_id)
            .await?;

        let added = self.comment_repository.add_comment_in_thread(comment).await?;
        tracing::debug!(comment_id = %added.id, "comment added");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domains::{MockCommentRepository, MockThreadRepository};
    use mockall::Sequence;
    use serde_json::json;

    fn use_case(
        comments: MockCommentRepository,
        threads: MockThreadRepository,
    ) -> AddCommentUseCase {
        AddCommentUseCase::new(Arc::new(comments), Arc::new(threads))
    }

    fn untouched() -> (MockCommentRepository, MockThreadRepository) {
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment_in_thread().never();
        let mut threads = MockThreadRepository::new();
        threads.expect_verify_thread_availability().never();
        (comments, threads)
    }

    #[tokio::test]
    async fn test_orchestrates_add_comment_in_order() {
        let payload = json!({ "content": "This is content for comment" });
        let mut seq = Sequence::new();

        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_availability()
            .withf(|thread_id| thread_id == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut comments = MockCommentRepository::new();
        comments
            .expect_add_comment_in_thread()
            .withf(|comment| {
                comment.thread_id() == "thread-123"
                    && comment.content() == "This is content for comment"
                    && comment.owner() == "user-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|comment| {
                Ok(AddedComment {
                    id: "comment-123".into(),
                    thread_id: comment.thread_id().into(),
                    content: comment.content().into(),
                    owner: comment.owner().into(),
                })
            });

        let added = use_case(comments, threads)
            .execute(&payload, Some("user-123"), Some("thread-123"))
            .await
            .unwrap();

        assert_eq!(
            added,
            AddedComment {
                id: "comment-123".into(),
                thread_id: "thread-123".into(),
                content: "This is content for comment".into(),
                owner: "user-123".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_rejects_missing_caller_without_touching_repositories() {
        let (comments, threads) = untouched();
        let payload = json!({ "content": "content" });

        let err = use_case(comments, threads)
            .execute(&payload, None, Some("thread-123"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "ADD_COMMENT.NO_AUTHORIZATION");
    }

    #[tokio::test]
    async fn test_rejects_missing_thread_param() {
        let (comments, threads) = untouched();
        let payload = json!({ "content": "content" });

        let err = use_case(comments, threads)
            .execute(&payload, Some("user-123"), None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "ADD_COMMENT.NO_PARAMS");
    }

    #[tokio::test]
    async fn test_authorization_checked_before_params() {
        let (comments, threads) = untouched();

        let err = use_case(comments, threads)
            .execute(&json!({}), None, None)
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::rejected(Scope::AddComment, Reason::NoAuthorization));
    }

    #[tokio::test]
    async fn test_content_limit_checked_before_thread_lookup() {
        let (comments, threads) = untouched();
        let payload = json!({ "content": "c".repeat(101) });

        let err = use_case(comments, threads)
            .execute(&payload, Some("user-123"), Some("thread-123"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "ADD_COMMENT.CONTENT_LIMIT_CHAR");
    }

    #[tokio::test]
    async fn test_missing_thread_stops_before_insert() {
        let mut threads = MockThreadRepository::new();
        threads
            .expect_verify_thread_availability()
            .times(1)
            .returning(|thread_id| Err(DomainError::thread_not_found(thread_id)));
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment_in_thread().never();

        let payload = json!({ "content": "content" });
        let err = use_case(comments, threads)
            .execute(&payload, Some("user-123"), Some("xxx"))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::thread_not_found("xxx"));
    }
}
