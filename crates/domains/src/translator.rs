//! # AppError
//!
//! The client-facing side of the error taxonomy. [`translate`] turns any
//! [`DomainError`] into one of a handful of stable kinds with a fixed message.
//! Storage failures are never reclassified: they surface as
//! [`AppError::Internal`] carrying the adapter's message.

use thiserror::Error;

use crate::error::{DomainError, ErrorCode, ErrorKind, Reason, Scope};

pub const MISSING_AUTHENTICATION: &str = "Missing authentication";
pub const THREAD_NOT_FOUND: &str = "thread tidak ditemukan";
pub const COMMENT_NOT_FOUND: &str = "komentar tidak ditemukan";
pub const NOT_COMMENT_OWNER: &str = "anda tidak berhak menghapus komentar ini";

/// The error a transport adapter reports back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Invalid payload (400)
    #[error("{0}")]
    Invariant(String),

    /// Missing or unresolved caller identity (401)
    #[error("{0}")]
    Authentication(String),

    /// Caller does not own the resource (403)
    #[error("{0}")]
    Authorization(String),

    /// Route parameter or resource missing (404)
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure, passed through untouched (500)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invariant(_) => ErrorKind::Invariant,
            Self::Authentication(_) => ErrorKind::Authentication,
            Self::Authorization(_) => ErrorKind::Authorization,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// The message shown to the caller.
    pub fn message(&self) -> &str {
        match self {
            Self::Invariant(m)
            | Self::Authentication(m)
            | Self::Authorization(m)
            | Self::NotFound(m)
            | Self::Internal(m) => m,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        translate(&error)
    }
}

/// Maps a domain failure onto its client-facing error.
pub fn translate(error: &DomainError) -> AppError {
    match error {
        DomainError::Rejected(code) => translate_code(*code),
        DomainError::ThreadNotFound { .. } => AppError::NotFound(THREAD_NOT_FOUND.to_string()),
        DomainError::CommentNotFound { .. } => AppError::NotFound(COMMENT_NOT_FOUND.to_string()),
        DomainError::NotCommentOwner { .. } => {
            AppError::Authorization(NOT_COMMENT_OWNER.to_string())
        }
        DomainError::Storage { message } => AppError::Internal(message.clone()),
    }
}

fn translate_code(code: ErrorCode) -> AppError {
    let message = message_for(code).to_string();
    match code.kind() {
        ErrorKind::Invariant => AppError::Invariant(message),
        ErrorKind::Authentication => AppError::Authentication(message),
        ErrorKind::Authorization => AppError::Authorization(message),
        ErrorKind::NotFound => AppError::NotFound(message),
        ErrorKind::Internal => AppError::Internal(message),
    }
}

fn message_for(code: ErrorCode) -> &'static str {
    use Reason::*;
    use Scope::*;

    match (code.scope, code.reason) {
        (_, NoAuthorization) => MISSING_AUTHENTICATION,

        (AddThread, NotContainNeededProperty) => {
            "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
        }
        (AddThread, NotMeetDataTypeSpecification) => {
            "tidak dapat membuat thread baru karena tipe data tidak sesuai"
        }
        (AddThread, TitleLimitChar) => {
            "tidak dapat membuat thread baru karena karakter judul melebihi batas limit"
        }

        (DetailThread, NotContainNeededProperty) => {
            "tidak dapat mengambil thread karena properti yang dibutuhkan tidak ada"
        }
        (DetailThread, NotMeetDataTypeSpecification) => {
            "tidak dapat mengambil thread karena tipe data tidak sesuai"
        }

        (AddComment, NoParams) => "params tidak ditemukan",
        (AddComment, NotContainNeededProperty) => {
            "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak ada"
        }
        (AddComment, NotMeetDataTypeSpecification) => {
            "tidak dapat membuat comment baru karena tipe data tidak sesuai"
        }
        (AddComment, ContentLimitChar) => {
            "tidak dapat membuat komentar baru karena karakter judul melebihi batas limit"
        }

        (DeleteComment, NoParams) => "parameter komen id tidak ada",
        (DeleteComment, NotContainNeededProperty) => {
            "tidak dapat menghapus comment karena data yang dibutuhkan tidak ada"
        }
        (DeleteComment, NotMeetDataTypeSpecification) => {
            "tidak dapat menghapus comment karena tipe data yang dibutuhkan tidak sesuai"
        }

        // Pairs no entity raises; fall back on the reason alone.
        (_, NoParams) => "params tidak ditemukan",
        (_, NotContainNeededProperty) => "properti yang dibutuhkan tidak ada",
        (_, NotMeetDataTypeSpecification) => "tipe data tidak sesuai",
        (_, TitleLimitChar | ContentLimitChar) => "karakter melebihi batas limit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(scope: Scope, reason: Reason) -> AppError {
        translate(&DomainError::rejected(scope, reason))
    }

    #[test]
    fn test_no_authorization_is_missing_authentication_everywhere() {
        for scope in [Scope::AddThread, Scope::AddComment, Scope::DeleteComment] {
            let err = rejected(scope, Reason::NoAuthorization);
            assert_eq!(err, AppError::Authentication(MISSING_AUTHENTICATION.into()));
            assert_eq!(err.status_code(), 401);
        }
    }

    #[test]
    fn test_invariant_messages() {
        assert_eq!(
            rejected(Scope::AddThread, Reason::TitleLimitChar),
            AppError::Invariant(
                "tidak dapat membuat thread baru karena karakter judul melebihi batas limit".into()
            )
        );
        assert_eq!(
            rejected(Scope::AddComment, Reason::NotMeetDataTypeSpecification),
            AppError::Invariant("tidak dapat membuat comment baru karena tipe data tidak sesuai".into())
        );
        assert_eq!(
            rejected(Scope::DeleteComment, Reason::NotContainNeededProperty).status_code(),
            400
        );
    }

    #[test]
    fn test_missing_params_are_not_found() {
        assert_eq!(
            rejected(Scope::AddComment, Reason::NoParams),
            AppError::NotFound("params tidak ditemukan".into())
        );
        assert_eq!(
            rejected(Scope::DeleteComment, Reason::NoParams),
            AppError::NotFound("parameter komen id tidak ada".into())
        );
        assert_eq!(
            rejected(Scope::DetailThread, Reason::NotContainNeededProperty).status_code(),
            404
        );
    }

    #[test]
    fn test_repository_failures() {
        let err = translate(&DomainError::thread_not_found("xxx"));
        assert_eq!(err, AppError::NotFound(THREAD_NOT_FOUND.into()));

        let err = translate(&DomainError::comment_not_found("thread-1", "xxxx"));
        assert_eq!(err.message(), COMMENT_NOT_FOUND);

        let err = translate(&DomainError::not_comment_owner("comment-1", "user-2"));
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn test_storage_failure_passes_through_as_internal() {
        let err: AppError = DomainError::storage("connection reset").into();
        assert_eq!(err, AppError::Internal("connection reset".into()));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn test_every_code_has_a_message() {
        let scopes = [
            Scope::AddThread,
            Scope::DetailThread,
            Scope::AddComment,
            Scope::DeleteComment,
        ];
        let reasons = [
            Reason::NotContainNeededProperty,
            Reason::NotMeetDataTypeSpecification,
            Reason::TitleLimitChar,
            Reason::ContentLimitChar,
            Reason::NoAuthorization,
            Reason::NoParams,
        ];
        for scope in scopes {
            for reason in reasons {
                let err = rejected(scope, reason);
                assert!(!err.message().is_empty());
                assert_eq!(err.kind(), ErrorCode::new(scope, reason).kind());
            }
        }
    }
}
