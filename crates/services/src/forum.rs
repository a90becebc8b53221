//! # Forum
//!
//! Composition root: every use case built once, at startup, from explicit
//! adapter references. Entry points resolve the caller from the
//! `Authorization` header, run the use case and translate failures into
//! [`AppError`] so a transport adapter only has to pick a status code.

use std::sync::Arc;

use domains::{
    translate, AddedComment, AddedThread, AppError, AuthenticationTokenManager,
    CommentRepository, DomainError, ErrorKind, ThreadDetail, ThreadRepository,
};
use serde_json::{json, Value};

use crate::use_cases::{
    AddCommentUseCase, AddThreadUseCase, DeleteCommentParams, DeleteCommentUseCase,
    DetailThreadUseCase,
};

pub struct Forum {
    add_thread: AddThreadUseCase,
    add_comment: AddCommentUseCase,
    delete_comment: DeleteCommentUseCase,
    detail_thread: DetailThreadUseCase,
    tokens: Arc<dyn AuthenticationTokenManager>,
}

impl Forum {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        tokens: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            add_thread: AddThreadUseCase::new(thread_repository.clone()),
            add_comment: AddCommentUseCase::new(
                comment_repository.clone(),
                thread_repository.clone(),
            ),
            delete_comment: DeleteCommentUseCase::new(comment_repository.clone()),
            detail_thread: DetailThreadUseCase::new(thread_repository, comment_repository),
            tokens,
        }
    }

    /// `POST /threads`
    pub async fn create_thread(
        &self,
        authorization: Option<&str>,
        payload: &Value,
    ) -> Result<AddedThread, AppError> {
        let caller = self.caller(authorization).await?;
        self.add_thread
            .execute(payload, caller.as_deref())
            .await
            .map_err(report)
    }

    /// `POST /threads/{threadId}/comments`
    pub async fn post_comment(
        &self,
        authorization: Option<&str>,
        thread_id: Option<&str>,
        payload: &Value,
    ) -> Result<AddedComment, AppError> {
        let caller = self.caller(authorization).await?;
        self.add_comment
            .execute(payload, caller.as_deref(), thread_id)
            .await
            .map_err(report)
    }

    /// `DELETE /threads/{threadId}/comments/{commentId}`
    pub async fn remove_comment(
        &self,
        authorization: Option<&str>,
        thread_id: Option<&str>,
        comment_id: Option<&str>,
    ) -> Result<(), AppError> {
        let caller = self.caller(authorization).await?;
        self.delete_comment
            .execute(DeleteCommentParams {
                id: caller,
                thread_id: thread_id.map(String::from),
                comment_id: comment_id.map(String::from),
            })
            .await
            .map_err(report)
    }

    /// `GET /threads/{threadId}`
    pub async fn thread_detail(&self, thread_id: Option<&str>) -> Result<ThreadDetail, AppError> {
        self.detail_thread
            .execute(&json!({ "threadId": thread_id }))
            .await
            .map_err(report)
    }

    /// A missing header is not an error here: the use case decides how to
    /// reject an anonymous caller.
    async fn caller(&self, authorization: Option<&str>) -> Result<Option<String>, AppError> {
        match authorization {
            Some(header) => self
                .tokens
                .verify_token_from_header(header)
                .await
                .map_err(report),
            None => Ok(None),
        }
    }
}

fn report(error: DomainError) -> AppError {
    let app_error = translate(&error);
    match app_error.kind() {
        ErrorKind::Internal => tracing::error!(error = %error, "request failed"),
        _ => tracing::warn!(error = %error, status = app_error.status_code(), "request rejected"),
    }
    app_error
}
