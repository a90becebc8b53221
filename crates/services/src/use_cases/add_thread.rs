use std::sync::Arc;

use domains::{
    merge_fields, required_id, AddThread, AddedThread, DomainError, Reason, Result, Scope,
    ThreadRepository,
};
use serde_json::Value;

/// Opens a new thread on behalf of an authenticated caller.
pub struct AddThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadUseCase {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    /// The caller id always wins over an `owner` key smuggled into the payload.
    #[tracing::instrument(skip(self, payload))]
    pub async fn execute(&self, payload: &Value, caller_id: Option<&str>) -> Result<AddedThread> {
        let owner = required_id(caller_id)
            .ok_or_else(|| DomainError::rejected(Scope::AddThread, Reason::NoAuthorization))?;

        let thread = AddThread::new(&merge_fields(payload, &[("owner", owner)]))?;

        let added = self.thread_repository.add_thread(thread).await?;
        tracing::debug!(thread_id = %added.id, "thread added");
        Ok(added)
    }
}
