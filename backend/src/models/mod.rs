use sqlx::SqlitePool;

use crate::config::Config;

pub mod book;

pub use book::*;

/// Application state shared across all handlers
pub struct AppState {
    pub db: SqlitePool,
    pub config: Config,
}
