//! # In-memory forum store
//!
//! Implements `ThreadRepository` and `CommentRepository` over `DashMap`s.
//! Comments are kept per thread in insertion order, which is also the
//! order `get_comments_in_thread` returns them in.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use domains::{
    AddComment, AddThread, AddedComment, AddedThread, CommentRecord, CommentRepository,
    DeleteComment, DetailThread, DomainError, Result, ThreadRecord, ThreadRepository,
};
use uuid::Uuid;

/// Produces the suffix appended to `thread-` / `comment-` ids.
pub type IdGenerator = Arc<dyn Fn() -> String + Send + Sync>;

const DEFAULT_SUFFIX_LEN: usize = 16;
/// Fresh ids drawn before giving up on a crowded id space.
const MAX_ID_ATTEMPTS: usize = 8;

struct StoredThread {
    id: String,
    title: String,
    body: String,
    owner: String,
    date: DateTime<Utc>,
}

struct StoredComment {
    id: String,
    content: String,
    owner: String,
    date: DateTime<Utc>,
    is_delete: bool,
}

pub struct InMemoryForumStore {
    /// user id -> username
    users: DashMap<String, String>,
    threads: DashMap<String, StoredThread>,
    /// thread id -> comments
    comments: DashMap<String, Vec<StoredComment>>,
    id_generator: IdGenerator,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::with_suffix_len(DEFAULT_SUFFIX_LEN)
    }

    /// Random hex suffixes of `len` characters (at most 32).
    pub fn with_suffix_len(len: usize) -> Self {
        Self::with_id_generator(Arc::new(move || {
            let mut suffix = Uuid::new_v4().simple().to_string();
            suffix.truncate(len);
            suffix
        }))
    }

    pub fn with_id_generator(id_generator: IdGenerator) -> Self {
        Self {
            users: DashMap::new(),
            threads: DashMap::new(),
            comments: DashMap::new(),
            id_generator,
        }
    }

    /// Makes `username` resolvable for `user_id` in read models.
    pub fn register_user(&self, user_id: impl Into<String>, username: impl Into<String>) {
        self.users.insert(user_id.into(), username.into());
    }

    fn username_of(&self, user_id: &str) -> String {
        self.users
            .get(user_id)
            .map(|name| name.value().clone())
            .unwrap_or_else(|| user_id.to_string())
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", (self.id_generator)())
    }
}

impl Default for InMemoryForumStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ThreadRepository for InMemoryForumStore {
    async fn add_thread(&self, thread: AddThread) -> Result<AddedThread> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let Entry::Vacant(slot) = self.threads.entry(self.next_id("thread")) else {
                continue;
            };

            let stored = StoredThread {
                id: slot.key().clone(),
                title: thread.title().to_string(),
                body: thread.body().to_string(),
                owner: thread.owner().to_string(),
                date: Utc::now(),
            };
            let added = AddedThread {
                id: stored.id.clone(),
                title: stored.title.clone(),
                body: stored.body.clone(),
                owner: stored.owner.clone(),
            };

            slot.insert(stored);
            tracing::trace!(thread_id = %added.id, "thread stored");
            return Ok(added);
        }

        tracing::error!(attempts = MAX_ID_ATTEMPTS, "thread id space exhausted");
        Err(DomainError::storage("could not allocate a unique thread id"))
    }

    async fn verify_thread_availability(&self, thread_id: &str) -> Result<()> {
        if self.threads.contains_key(thread_id) {
            Ok(())
        } else {
            Err(DomainError::thread_not_found(thread_id))
        }
    }

    async fn get_detail_thread(&self, key: &DetailThread) -> Result<ThreadRecord> {
        let thread = self
            .threads
            .get(key.thread_id())
            .ok_or_else(|| DomainError::thread_not_found(key.thread_id()))?;

        Ok(ThreadRecord {
            id: thread.id.clone(),
            title: thread.title.clone(),
            body: thread.body.clone(),
            date: thread.date,
            username: self.username_of(&thread.owner),
        })
    }
}

#[async_trait]
impl CommentRepository for InMemoryForumStore {
    async fn add_comment_in_thread(&self, comment: AddComment) -> Result<AddedComment> {
        // Stands in for the foreign key a relational store would enforce.
        if !self.threads.contains_key(comment.thread_id()) {
            return Err(DomainError::thread_not_found(comment.thread_id()));
        }

        // Unique within the thread. The entry lock spans the check and the push.
        let mut comments = self
            .comments
            .entry(comment.thread_id().to_string())
            .or_default();
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| self.next_id("comment"))
            .find(|id| comments.iter().all(|c| &c.id != id))
            .ok_or_else(|| {
                tracing::error!(attempts = MAX_ID_ATTEMPTS, "comment id space exhausted");
                DomainError::storage("could not allocate a unique comment id")
            })?;

        let stored = StoredComment {
            id,
            content: comment.content().to_string(),
            owner: comment.owner().to_string(),
            date: Utc::now(),
            is_delete: false,
        };
        let added = AddedComment {
            id: stored.id.clone(),
            thread_id: comment.thread_id().to_string(),
            content: stored.content.clone(),
            owner: stored.owner.clone(),
        };

        comments.push(stored);
        tracing::trace!(comment_id = %added.id, "comment stored");
        Ok(added)
    }

    async fn verify_comment_availability(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> Result<()> {
        let comments = self
            .comments
            .get(thread_id)
            .ok_or_else(|| DomainError::comment_not_found(thread_id, comment_id))?;
        let comment = comments
            .iter()
            .find(|c| c.id == comment_id)
            .ok_or_else(|| DomainError::comment_not_found(thread_id, comment_id))?;

        if comment.owner != owner {
            return Err(DomainError::not_comment_owner(comment_id, owner));
        }
        Ok(())
    }

    async fn get_comments_in_thread(&self, key: &DetailThread) -> Result<Vec<CommentRecord>> {
        let Some(comments) = self.comments.get(key.thread_id()) else {
            return Ok(Vec::new());
        };

        Ok(comments
            .iter()
            .map(|c| CommentRecord {
                id: c.id.clone(),
                username: self.username_of(&c.owner),
                content: c.content.clone(),
                date: c.date,
                is_delete: c.is_delete,
            })
            .collect())
    }

    async fn delete_comment_in_thread(&self, comment: DeleteComment) -> Result<()> {
        let mut comments = self
            .comments
            .get_mut(comment.thread_id())
            .ok_or_else(|| DomainError::comment_not_found(comment.thread_id(), comment.comment_id()))?;
        let stored = comments
            .iter_mut()
            .find(|c| c.id == comment.comment_id())
            .ok_or_else(|| DomainError::comment_not_found(comment.thread_id(), comment.comment_id()))?;

        stored.is_delete = true;
        Ok(())
    }
}
