//! Shared test mocks and utilities for the Storyloom narrative game server.

mod clock;
mod narrator;
mod repository;

pub use clock::FixedClock;
pub use narrator::{FailingNarrator, ScriptedNarrator, StalledNarrator};
pub use repository::{FailingSaveRepository, InMemorySaveRepository};
