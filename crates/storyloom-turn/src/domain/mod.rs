//! Domain layer for the Turn context.

pub mod commands;
pub mod fallback;
pub mod turn_result;
