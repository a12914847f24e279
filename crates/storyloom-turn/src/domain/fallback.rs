//! The offline turn used whenever the narrator cannot produce a usable reply.

use std::time::Duration;

use storyloom_game_state::domain::patch::StatDelta;
use storyloom_narrator::port::NarratorError;
use storyloom_narrator::reply::NarratorReply;
use thiserror::Error;

/// Narration shown for every fallback turn, whatever the cause.
pub const FALLBACK_NARRATION: &str = "Unable to reach the narrator. Please try again later. \
If you have set an API key, please check that it is correct.";

/// Why a turn fell back. Only logged; callers always see the same reply.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FallbackCause {
    /// No narrator configured or no credential resolvable.
    #[error("narrator unavailable: {0}")]
    Unavailable(String),

    /// The narrator call raised an error.
    #[error("narrator call failed: {0}")]
    CallFailed(String),

    /// The narrator call did not finish in time.
    #[error("narrator call timed out after {0:?}")]
    TimedOut(Duration),

    /// The narrator's text was not a well-formed reply.
    #[error("narrator reply malformed: {0}")]
    MalformedReply(String),
}

impl From<NarratorError> for FallbackCause {
    fn from(err: NarratorError) -> Self {
        match err {
            NarratorError::Unavailable(reason) => Self::Unavailable(reason),
            NarratorError::CallFailed(reason) => Self::CallFailed(reason),
        }
    }
}

/// The fixed reply merged on fallback: one narration line, no options, and
/// zero stat and item changes.
#[must_use]
pub fn fallback_reply() -> NarratorReply {
    NarratorReply {
        narration: FALLBACK_NARRATION.to_owned(),
        options: Vec::new(),
        delta_stats: StatDelta::ZERO,
        items: Vec::new(),
    }
}
