use std::sync::Mutex;
use tracing::error;
use shared::{models::*, PollError, PollRegistry};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Poll(#[from] PollError),
    #[error("Poll store lock poisoned")]
    LockFailed,
}

/// Process-wide poll state behind one coarse lock. Each call holds the lock
/// for its whole check-then-mutate sequence and hands back owned copies.
#[derive(Debug, Default)]
pub struct PollStore {
    registry: Mutex<PollRegistry>,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_registry<T>(
        &self,
        op: impl FnOnce(&mut PollRegistry) -> shared::Result<T>,
    ) -> Result<T, StoreError> {
        let mut registry = match self.registry.lock() {
            Ok(guard) => guard,
            Err(e) => {
                error!("Failed to acquire poll store lock: {}", e);
                return Err(StoreError::LockFailed);
            }
        };
        Ok(op(&mut registry)?)
    }

    pub fn create_poll(&self, request: CreatePollRequest) -> Result<Poll, StoreError> {
        self.with_registry(|registry| registry.create_poll(request))
    }

    pub fn cast_vote(&self, poll_id: &str, option_id: &str, voter_id: Option<&str>) -> Result<VoteOutcome, StoreError> {
        self.with_registry(|registry| registry.cast_vote(poll_id, option_id, voter_id))
    }

    pub fn get_results(&self, poll_id: &str) -> Result<PollResults, StoreError> {
        self.with_registry(|registry| registry.get_results(poll_id))
    }

    pub fn list_active_polls(&self) -> Result<Vec<ActivePoll>, StoreError> {
        self.with_registry(|registry| Ok(registry.list_active_polls()))
    }

    pub fn set_status(&self, poll_id: &str, status: String) -> Result<StatusChange, StoreError> {
        self.with_registry(|registry| registry.set_status(poll_id, status))
    }

    pub fn poll(&self, poll_id: &str) -> Result<Poll, StoreError> {
        self.with_registry(|registry| {
            registry.poll(poll_id).ok_or_else(|| PollError::NotFound(poll_id.to_string()))
        })
    }

    pub fn poll_count(&self) -> Result<usize, StoreError> {
        self.with_registry(|registry| Ok(registry.len()))
    }
}
