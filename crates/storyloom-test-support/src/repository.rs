//! Test repositories — mock `SaveRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use storyloom_core::error::DomainError;
use storyloom_core::repository::{SaveRecord, SaveRepository};

/// A save repository that keeps every appended record in memory and answers
/// `load_latest` from them.
#[derive(Debug, Default)]
pub struct InMemorySaveRepository {
    records: Mutex<Vec<SaveRecord>>,
}

impl InMemorySaveRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all records appended so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn records(&self) -> Vec<SaveRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl SaveRepository for InMemorySaveRepository {
    async fn append_save(&self, record: &SaveRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn load_latest(&self, player_id: &str) -> Result<Option<SaveRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|record| record.player_id == player_id)
            .cloned())
    }
}

/// A save repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingSaveRepository;

#[async_trait]
impl SaveRepository for FailingSaveRepository {
    async fn append_save(&self, _record: &SaveRecord) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("database is locked".into()))
    }

    async fn load_latest(&self, _player_id: &str) -> Result<Option<SaveRecord>, DomainError> {
        Err(DomainError::Infrastructure("database is locked".into()))
    }
}
