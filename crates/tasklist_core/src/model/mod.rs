//! List/task domain model.
//!
//! # Responsibility
//! - Define the persisted shapes of lists and tasks.
//! - Generate collision-resistant opaque ids.
//!
//! # Invariants
//! - Every list and task carries an id unique within the process lifetime
//!   and across reloads.
//! - Names are non-empty after trimming.

pub mod id;
pub mod list;
