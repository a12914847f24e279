//! Narrator used when no text-generation service is configured.

use async_trait::async_trait;

use crate::port::{Narrator, NarratorError, NarratorRequest};

/// A narrator that is never available. Every turn it serves falls back.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNarrator;

#[async_trait]
impl Narrator for NullNarrator {
    async fn narrate(&self, _request: &NarratorRequest) -> Result<String, NarratorError> {
        Err(NarratorError::Unavailable("no narrator configured".to_owned()))
    }
}
