//! # Read Models
//!
//! Shapes returned by repositories and the public views derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Shown in place of a soft-deleted comment's content.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// Returned by `ThreadRepository::add_thread`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub owner: String,
}

/// Returned by `CommentRepository::add_comment_in_thread`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedComment {
    pub id: String,
    pub thread_id: String,
    pub content: String,
    pub owner: String,
}

/// A thread row joined with its author's username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// A comment row as stored, deletion marker included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub username: String,
    pub content: String,
    pub date: DateTime<Utc>,
    /// Normalised at the storage boundary: `'1'`, `1`, `1.0` and `true` are deleted.
    #[serde(default, deserialize_with = "deserialize_delete_flag")]
    pub is_delete: bool,
}

impl CommentRecord {
    /// Public view with the soft-delete masking rule applied.
    pub fn into_view(self) -> CommentView {
        let content = if self.is_delete {
            DELETED_COMMENT_PLACEHOLDER.to_string()
        } else {
            self.content
        };

        CommentView {
            id: self.id,
            username: self.username,
            content,
            date: self.date,
        }
    }
}

/// A comment as exposed to callers. Never carries the deletion marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// A thread with its comments, ready to hand to a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentView>,
}

impl ThreadDetail {
    /// Attaches comments to a thread, masking deleted ones in repository order.
    pub fn assemble(thread: ThreadRecord, comments: Vec<CommentRecord>) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments: comments.into_iter().map(CommentRecord::into_view).collect(),
        }
    }
}

/// Accepts every representation the storage layer has used for the marker.
pub fn deserialize_delete_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64() == Some(1.0),
        Value::String(s) => s == "1",
        _ => false,
    })
}
