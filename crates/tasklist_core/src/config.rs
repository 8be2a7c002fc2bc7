//! Application configuration resolved by the front end.
//!
//! # Invariants
//! - `log_dir = None` leaves logging disabled.
//! - `db_path = None` selects a private in-memory store.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Database file name used when no explicit path is given.
pub const DEFAULT_DB_FILE_NAME: &str = "tasklist.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: Some(PathBuf::from(DEFAULT_DB_FILE_NAME)),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Same defaults, but backed by an in-memory store.
    pub fn ephemeral() -> Self {
        Self {
            db_path: None,
            ..Self::default()
        }
    }
}
