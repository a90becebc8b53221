//! Shared fixtures for the cross-crate tests under `tests/`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use domains::{AuthenticationTokenManager, Result};
use services::Forum;
use storage_adapters::InMemoryForumStore;

/// Token manager backed by a fixed `token -> user id` table.
#[derive(Default)]
pub struct StaticTokens {
    tokens: DashMap<String, String>,
}

impl StaticTokens {
    pub fn issue(&self, token: &str, user_id: &str) -> String {
        self.tokens.insert(token.to_string(), user_id.to_string());
        format!("Bearer {token}")
    }
}

#[async_trait]
impl AuthenticationTokenManager for StaticTokens {
    async fn verify_token_from_header(&self, authorization: &str) -> Result<Option<String>> {
        let Some(token) = authorization.strip_prefix("Bearer ") else {
            return Ok(None);
        };
        Ok(self.tokens.get(token).map(|user| user.value().clone()))
    }
}

pub struct TestForum {
    pub forum: Forum,
    pub store: Arc<InMemoryForumStore>,
    pub tokens: Arc<StaticTokens>,
}

impl TestForum {
    pub fn with_store(store: InMemoryForumStore) -> Self {
        let store = Arc::new(store);
        let tokens = Arc::new(StaticTokens::default());
        let forum = Forum::new(store.clone(), store.clone(), tokens.clone());
        Self {
            forum,
            store,
            tokens,
        }
    }

    /// Registers `user_id` as `username` and returns a bearer header for them.
    pub fn login(&self, user_id: &str, username: &str) -> String {
        self.store.register_user(user_id, username);
        self.tokens.issue(&format!("token-{user_id}"), user_id)
    }
}

impl Default for TestForum {
    fn default() -> Self {
        Self::with_store(InMemoryForumStore::new())
    }
}
