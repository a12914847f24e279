//! Test narrators — canned `Narrator` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use storyloom_narrator::port::{Narrator, NarratorError, NarratorRequest};
use storyloom_narrator::reply::NarratorReply;

/// A narrator that answers every call with the same text and records the
/// requests it received.
#[derive(Debug)]
pub struct ScriptedNarrator {
    text: String,
    requests: Mutex<Vec<NarratorRequest>>,
}

impl ScriptedNarrator {
    /// Create a narrator that returns `text` verbatim, well-formed or not.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a narrator that returns `reply` serialized as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the reply cannot be serialized.
    #[must_use]
    pub fn replying(reply: &NarratorReply) -> Self {
        Self::new(serde_json::to_string(reply).unwrap())
    }

    /// Returns a snapshot of all requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn requests(&self) -> Vec<NarratorRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Narrator for ScriptedNarrator {
    async fn narrate(&self, request: &NarratorRequest) -> Result<String, NarratorError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.text.clone())
    }
}

/// A narrator whose every call fails as if the service errored.
#[derive(Debug)]
pub struct FailingNarrator;

#[async_trait]
impl Narrator for FailingNarrator {
    async fn narrate(&self, _request: &NarratorRequest) -> Result<String, NarratorError> {
        Err(NarratorError::CallFailed("connection reset by peer".into()))
    }
}

/// A narrator that never answers. Useful for exercising call timeouts.
#[derive(Debug)]
pub struct StalledNarrator;

#[async_trait]
impl Narrator for StalledNarrator {
    async fn narrate(&self, _request: &NarratorRequest) -> Result<String, NarratorError> {
        std::future::pending().await
    }
}
