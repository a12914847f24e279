//! Domain layer for the Game State context.

pub mod game_state;
pub mod patch;
