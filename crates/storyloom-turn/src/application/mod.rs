//! Application layer for the Turn context.

pub mod save_handlers;
pub mod sessions;
pub mod turn_handler;
