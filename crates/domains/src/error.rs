//! # DomainError
//!
//! Centralized error handling for the forum core.
//! Every failure the core can raise is a typed variant; the historical
//! `"SCOPE.REASON"` strings are only a rendering of [`ErrorCode`].

use std::fmt;

use thiserror::Error;

/// Externally meaningful classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed payload: missing property, wrong type, length limit.
    Invariant,
    /// Caller identity absent or unresolved.
    Authentication,
    /// Caller is known but does not own the resource.
    Authorization,
    /// Missing route parameter or missing resource.
    NotFound,
    /// Anything the core cannot classify.
    Internal,
}

impl ErrorKind {
    /// HTTP-class status equivalent, for adapters that speak HTTP.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Invariant => 400,
            Self::Authentication => 401,
            Self::Authorization => 403,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

/// The operation that raised a coded error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    AddThread,
    DetailThread,
    AddComment,
    DeleteComment,
}

impl Scope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddThread => "ADD_THREAD",
            Self::DetailThread => "DETAIL_THREAD",
            Self::AddComment => "ADD_COMMENT",
            Self::DeleteComment => "DELETE_COMMENT",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a request was rejected before reaching storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    NotContainNeededProperty,
    NotMeetDataTypeSpecification,
    TitleLimitChar,
    ContentLimitChar,
    NoAuthorization,
    NoParams,
}

impl Reason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotContainNeededProperty => "NOT_CONTAIN_NEEDED_PROPERTY",
            Self::NotMeetDataTypeSpecification => "NOT_MEET_DATA_TYPE_SPECIFICATION",
            Self::TitleLimitChar => "TITLE_LIMIT_CHAR",
            Self::ContentLimitChar => "CONTENT_LIMIT_CHAR",
            Self::NoAuthorization => "NO_AUTHORIZATION",
            Self::NoParams => "NO_PARAMS",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(scope, reason)` pair, rendered as `SCOPE.REASON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode {
    pub scope: Scope,
    pub reason: Reason,
}

impl ErrorCode {
    pub const fn new(scope: Scope, reason: Reason) -> Self {
        Self { scope, reason }
    }

    /// The flat `SCOPE.REASON` form used in logs.
    pub fn as_code(&self) -> String {
        self.to_string()
    }

    pub fn kind(&self) -> ErrorKind {
        match (self.scope, self.reason) {
            // A detail lookup without a thread id is reported like a missing route.
            (Scope::DetailThread, Reason::NotContainNeededProperty) => ErrorKind::NotFound,
            (_, Reason::NoAuthorization) => ErrorKind::Authentication,
            (_, Reason::NoParams) => ErrorKind::NotFound,
            (
                _,
                Reason::NotContainNeededProperty
                | Reason::NotMeetDataTypeSpecification
                | Reason::TitleLimitChar
                | Reason::ContentLimitChar,
            ) => ErrorKind::Invariant,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.scope, self.reason)
    }
}

/// The primary error type for every core operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Rejected by an entity constructor or a use-case precondition.
    #[error("{0}")]
    Rejected(ErrorCode),

    /// The thread does not exist.
    #[error("thread {thread_id} not found")]
    ThreadNotFound { thread_id: String },

    /// No comment with that id lives under that thread.
    #[error("comment {comment_id} not found in thread {thread_id}")]
    CommentNotFound {
        thread_id: String,
        comment_id: String,
    },

    /// The caller is not the comment's owner.
    #[error("user {owner} does not own comment {comment_id}")]
    NotCommentOwner { comment_id: String, owner: String },

    /// Infrastructure failure inside an adapter.
    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn rejected(scope: Scope, reason: Reason) -> Self {
        Self::Rejected(ErrorCode::new(scope, reason))
    }

    pub fn thread_not_found(thread_id: impl Into<String>) -> Self {
        Self::ThreadNotFound {
            thread_id: thread_id.into(),
        }
    }

    pub fn comment_not_found(thread_id: impl Into<String>, comment_id: impl Into<String>) -> Self {
        Self::CommentNotFound {
            thread_id: thread_id.into(),
            comment_id: comment_id.into(),
        }
    }

    pub fn not_comment_owner(comment_id: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::NotCommentOwner {
            comment_id: comment_id.into(),
            owner: owner.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// The coded form, if this error came from validation.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Rejected(code) => Some(*code),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Rejected(code) => code.kind(),
            Self::ThreadNotFound { .. } | Self::CommentNotFound { .. } => ErrorKind::NotFound,
            Self::NotCommentOwner { .. } => ErrorKind::Authorization,
            Self::Storage { .. } => ErrorKind::Internal,
        }
    }
}

/// A specialized Result type for forum core logic.
pub type Result<T> = std::result::Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_renders_scope_and_reason() {
        let code = ErrorCode::new(Scope::AddThread, Reason::TitleLimitChar);
        assert_eq!(code.as_code(), "ADD_THREAD.TITLE_LIMIT_CHAR");

        let err = DomainError::rejected(Scope::DeleteComment, Reason::NoParams);
        assert_eq!(err.to_string(), "DELETE_COMMENT.NO_PARAMS");
    }

    #[test]
    fn test_kind_classification() {
        let invariant = [
            Reason::NotContainNeededProperty,
            Reason::NotMeetDataTypeSpecification,
            Reason::TitleLimitChar,
            Reason::ContentLimitChar,
        ];
        for reason in invariant {
            assert_eq!(ErrorCode::new(Scope::AddComment, reason).kind(), ErrorKind::Invariant);
        }
        for scope in [Scope::AddThread, Scope::AddComment, Scope::DeleteComment] {
            assert_eq!(
                ErrorCode::new(scope, Reason::NoAuthorization).kind(),
                ErrorKind::Authentication
            );
            assert_eq!(ErrorCode::new(scope, Reason::NoParams).kind(), ErrorKind::NotFound);
        }
    }

    #[test]
    fn test_detail_thread_missing_property_is_not_found() {
        let code = ErrorCode::new(Scope::DetailThread, Reason::NotContainNeededProperty);
        assert_eq!(code.kind(), ErrorKind::NotFound);
        let code = ErrorCode::new(Scope::DetailThread, Reason::NotMeetDataTypeSpecification);
        assert_eq!(code.kind(), ErrorKind::Invariant);
    }

    #[test]
    fn test_repository_errors_kinds() {
        assert_eq!(DomainError::thread_not_found("thread-1").kind(), ErrorKind::NotFound);
        assert_eq!(
            DomainError::comment_not_found("thread-1", "comment-1").kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            DomainError::not_comment_owner("comment-1", "user-2").kind(),
            ErrorKind::Authorization
        );
        assert_eq!(DomainError::storage("pool closed").kind(), ErrorKind::Internal);
        assert_eq!(DomainError::storage("pool closed").code(), None);
        assert_eq!(ErrorKind::Authorization.status_code(), 403);
    }
}
