//! Storyloom Save Store — SQLite persistence for saved games.

pub mod schema;
pub mod sqlite_save_repository;
