//! # Entities
//!
//! Self-validating value objects built from raw request payloads.
//! Validation runs once, at construction, before any storage is touched.
//! Checks are ordered: missing property, then data type, then length.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{DomainError, Reason, Result, Scope};

/// Maximum thread title length, in characters.
pub const TITLE_MAX_CHARS: usize = 50;
/// Maximum comment content length, in characters.
pub const CONTENT_MAX_CHARS: usize = 100;

/// The single "is this identifier present" rule shared by every use case.
/// `None` and the empty string both count as absent.
pub fn required_id(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}

/// Returns a copy of `payload` with `fields` set on top of it.
/// Non-object payloads are treated as an empty object.
pub fn merge_fields(payload: &Value, fields: &[(&str, &str)]) -> Value {
    let mut merged = match payload {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    for (key, value) in fields {
        merged.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Value::Object(merged)
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn required_strings<'a, const N: usize>(
    scope: Scope,
    payload: &'a Value,
    keys: [&str; N],
) -> Result<[&'a str; N]> {
    let values = keys.map(|key| payload.get(key));
    if values.iter().any(|value| is_missing(*value)) {
        return Err(DomainError::rejected(scope, Reason::NotContainNeededProperty));
    }

    let mut fields = [""; N];
    for (slot, value) in fields.iter_mut().zip(values) {
        *slot = value.and_then(Value::as_str).ok_or_else(|| {
            DomainError::rejected(scope, Reason::NotMeetDataTypeSpecification)
        })?;
    }
    Ok(fields)
}

fn exceeds(text: &str, limit: usize) -> bool {
    text.chars().count() > limit
}

/// A request to open a new thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddThread {
    title: String,
    body: String,
    owner: String,
}

impl AddThread {
    pub fn new(payload: &Value) -> Result<Self> {
        let [title, body, owner] =
            required_strings(Scope::AddThread, payload, ["title", "body", "owner"])?;

        if exceeds(title, TITLE_MAX_CHARS) {
            return Err(DomainError::rejected(Scope::AddThread, Reason::TitleLimitChar));
        }

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A request to comment on an existing thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddComment {
    thread_id: String,
    content: String,
    owner: String,
}

impl AddComment {
    pub fn new(payload: &Value) -> Result<Self> {
        let [thread_id, content, owner] =
            required_strings(Scope::AddComment, payload, ["threadId", "content", "owner"])?;

        if exceeds(content, CONTENT_MAX_CHARS) {
            return Err(DomainError::rejected(Scope::AddComment, Reason::ContentLimitChar));
        }

        Ok(Self {
            thread_id: thread_id.to_string(),
            content: content.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// A request to soft-delete a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteComment {
    thread_id: String,
    comment_id: String,
    owner: String,
}

impl DeleteComment {
    pub fn new(payload: &Value) -> Result<Self> {
        let [thread_id, comment_id, owner] = required_strings(
            Scope::DeleteComment,
            payload,
            ["threadId", "commentId", "owner"],
        )?;

        Ok(Self {
            thread_id: thread_id.to_string(),
            comment_id: comment_id.to_string(),
            owner: owner.to_string(),
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &str {
        &self.comment_id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Lookup key for a thread detail read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailThread {
    thread_id: String,
}

impl DetailThread {
    pub fn new(params: &Value) -> Result<Self> {
        let [thread_id] = required_strings(Scope::DetailThread, params, ["threadId"])?;

        Ok(Self {
            thread_id: thread_id.to_string(),
        })
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }
}
