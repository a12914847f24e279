//! OpenAI-compatible chat-completions narrator.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::port::{Narrator, NarratorError, NarratorRequest};
use crate::prompt::{DEFAULT_LANGUAGE, system_prompt, user_prompt};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

const TEMPERATURE: f32 = 0.7;

/// Narrator backed by an OpenAI-compatible `/v1/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiNarrator {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    language: String,
}

impl OpenAiNarrator {
    /// Creates a narrator for `base_url` and `model`.
    ///
    /// `api_key` is the credential used when a turn does not supply its own;
    /// an empty key counts as absent. `timeout` bounds each HTTP request.
    #[must_use]
    pub fn new(base_url: &str, model: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
            api_key: api_key.filter(|key| !key.is_empty()),
            language: DEFAULT_LANGUAGE.to_owned(),
        }
    }

    /// Sets the language the narrator is told to reply in.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// The turn's own key wins over the configured one.
    fn resolve_credential<'a>(&'a self, request: &'a NarratorRequest) -> Option<&'a str> {
        request
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .or(self.api_key.as_deref())
    }
}

impl fmt::Debug for OpenAiNarrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiNarrator")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("language", &self.language)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl Narrator for OpenAiNarrator {
    async fn narrate(&self, request: &NarratorRequest) -> Result<String, NarratorError> {
        let Some(api_key) = self.resolve_credential(request) else {
            return Err(NarratorError::Unavailable("no API key configured".to_owned()));
        };

        let user_content = user_prompt(request)
            .map_err(|e| NarratorError::CallFailed(format!("game state not serializable: {e}")))?;

        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(&self.language),
                },
                ChatMessage {
                    role: "user",
                    content: user_content,
                },
            ],
            temperature: TEMPERATURE,
        };

        debug!(model = %self.model, base_url = %self.base_url, "requesting narration");

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NarratorError::CallFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(NarratorError::CallFailed(format!("{status}: {detail}")));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| NarratorError::CallFailed(format!("invalid completion envelope: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                NarratorError::CallFailed("completion contained no message content".to_owned())
            })
    }
}
