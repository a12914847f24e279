//! Storyloom — Game State bounded context.
//!
//! Owns the per-player `GameState` (hit points, gold, inventory and
//! narrative history) and the patch merge that is the only way to mutate it.

pub mod domain;
