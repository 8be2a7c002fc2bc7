//! Core of the tasklist manager.
//!
//! Three tiers: [`state`] owns the list/task/selection model and its
//! persistence, [`view`] renders snapshots onto a surface, and
//! [`coordinator`] runs every user action through mutate, render, persist.

pub mod config;
pub mod coordinator;
pub mod db;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;
pub mod view;

pub use config::AppConfig;
pub use coordinator::{ActionOutcome, Coordinator, CoordinatorError, RejectReason};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::list::{ListId, Task, TaskId, TaskList, ValidationError, SEEDED_TASK_NAME};
pub use state::{DeserializationError, ListState, StateError, LISTS_KEY, SELECTED_LIST_KEY};
pub use store::memory_store::MemoryStore;
pub use store::sqlite_store::SqliteKeyValueStore;
pub use store::{KeyValueStore, StoreError, StoreResult};
pub use view::{ViewDocument, ViewEvent, ViewHandle, ViewSurface};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
