//! State Module: canonical in-memory list/task/selection model.
//!
//! # Responsibility
//! - Own the list collection and the selection exclusively.
//! - Serialize the model to and from a [`KeyValueStore`].
//!
//! # Invariants
//! - `selected_list_id` is `None` or the id of a list currently held.
//! - Both persisted keys are written together on every persist.
//!
//! # See also
//! - crate::coordinator for the mutate/render/persist cycle.

pub mod list_state;

pub use list_state::{
    decode_entry, DeserializationError, ListState, StateError, StateResult, LISTS_KEY,
    SELECTED_LIST_KEY,
};
