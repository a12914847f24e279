//! Server configuration read from the environment.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use storyloom_narrator::null::NullNarrator;
use storyloom_narrator::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiNarrator};
use storyloom_narrator::port::Narrator;
use storyloom_narrator::prompt::DEFAULT_LANGUAGE;
use storyloom_turn::application::turn_handler::DEFAULT_NARRATOR_TIMEOUT;

use crate::error::AppError;

const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Narrator selection and connection settings.
#[derive(Clone)]
pub struct NarratorConfig {
    /// When false every turn falls back without calling out.
    pub enabled: bool,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Chat model name.
    pub model: String,
    /// Credential used when a turn does not bring its own.
    pub api_key: Option<String>,
    /// Deadline for one narrator call.
    pub timeout: Duration,
    /// Language the narrator replies in.
    pub language: String,
}

impl NarratorConfig {
    /// Builds the narrator this configuration selects.
    #[must_use]
    pub fn build(&self) -> Arc<dyn Narrator> {
        if self.enabled {
            Arc::new(OpenAiNarrator::new(
                &self.base_url,
                &self.model,
                self.api_key.clone(),
                self.timeout,
            )
            .with_language(self.language.clone()))
        } else {
            Arc::new(NullNarrator)
        }
    }
}

impl fmt::Debug for NarratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarratorConfig")
            .field("enabled", &self.enabled)
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("language", &self.language)
            .finish()
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `SQLite` connection URL for the save store.
    pub database_url: String,
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Narrator settings.
    pub narrator: NarratorConfig,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name
    /// to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => DEFAULT_PORT,
        };

        let enabled = match lookup("NARRATOR_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("NARRATOR_ENABLED must be true or false, got {raw:?}"))
            })?,
            None => true,
        };

        let timeout = match lookup("NARRATOR_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.parse().map_err(|e| {
                AppError::Config(format!("NARRATOR_TIMEOUT_SECS must be a whole number: {e}"))
            })?),
            None => DEFAULT_NARRATOR_TIMEOUT,
        };

        Ok(Self {
            database_url: or_default("DATABASE_URL", DEFAULT_DATABASE_URL),
            host: or_default("HOST", DEFAULT_HOST),
            port,
            narrator: NarratorConfig {
                enabled,
                base_url: or_default("OPENAI_BASE_URL", DEFAULT_BASE_URL),
                model: or_default("OPENAI_MODEL", DEFAULT_MODEL),
                api_key: lookup("OPENAI_API_KEY").filter(|key| !key.is_empty()),
                timeout,
                language: or_default("NARRATOR_LANGUAGE", DEFAULT_LANGUAGE),
            },
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host` and `port` do not form a valid
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
