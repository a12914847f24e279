//! Storyloom — Turn bounded context.
//!
//! Runs one turn per request: validates the player's input, asks the
//! narrator for the next beat, falls back to a fixed offline beat on any
//! narrator failure, and merges the result into the player's state. Also
//! owns the per-player session store and the save/load handlers.

pub mod application;
pub mod domain;
