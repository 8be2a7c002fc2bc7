//! View Module: renders model snapshots onto a view surface.
//!
//! # Responsibility
//! - Resolve the element handle from the presentation layer's selectors.
//! - Replace container children from a list/selection snapshot.
//! - Report raw interactions as [`ViewEvent`]s; never mutate state.
//!
//! # Invariants
//! - Rendering is a full replace of a container's children.
//! - No model snapshot is retained between render calls.

pub mod document;
pub mod handle;
pub mod render;
pub mod surface;

pub use document::{Element, ElementKind, ViewDocument};
pub use handle::{acquire_view_handle, selectors, ViewError, ViewHandle};
pub use render::{
    bind_listeners, clear_input, emphasize, read_input, remaining_count, remaining_count_label,
    render_lists, render_task_panel,
};
pub use surface::{ClickTarget, ElementRef, EventKind, ViewEvent, ViewNode, ViewSurface};
