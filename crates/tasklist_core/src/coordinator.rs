//! Coordinator: sequences view events into state mutations.
//!
//! # Responsibility
//! - Register view listeners exactly once.
//! - Translate each [`ViewEvent`] into one state mutation, then run the
//!   render+persist cycle.
//!
//! # Invariants
//! - Rejected actions mutate nothing and skip the cycle.
//! - The cycle renders from the live state, then persists it; a failed
//!   persist is logged and never blocks rendering.
//! - The view tree is only written through `crate::view` functions.

use crate::state::{ListState, StateError};
use crate::store::KeyValueStore;
use crate::view::{
    acquire_view_handle, bind_listeners, clear_input, read_input, render_lists,
    render_task_panel, ClickTarget, ViewError, ViewEvent, ViewHandle, ViewSurface,
};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Why an action was dropped without side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Submitted name was blank after trimming.
    EmptyName,
    /// Task submission while no list is selected.
    NoSelection,
    /// Click inside the list container that missed every list row.
    NotAListRow,
    /// Event came from an element the coordinator does not handle.
    UnknownElement,
}

impl RejectReason {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyName => "empty_name",
            Self::NoSelection => "no_selection",
            Self::NotAListRow => "not_a_list_row",
            Self::UnknownElement => "unknown_element",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// State mutated (or deliberately left as is) and the cycle ran.
    Completed,
    Rejected(RejectReason),
}

#[derive(Debug)]
pub enum CoordinatorError {
    View(ViewError),
    /// Events were handled before [`Coordinator::init`].
    NotInitialized,
}

impl Display for CoordinatorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View(err) => write!(f, "{err}"),
            Self::NotInitialized => write!(f, "coordinator used before init"),
        }
    }
}

impl Error for CoordinatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::View(err) => Some(err),
            Self::NotInitialized => None,
        }
    }
}

impl From<ViewError> for CoordinatorError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

/// Owns the state and the view surface for one session.
pub struct Coordinator<S: KeyValueStore, V: ViewSurface> {
    state: ListState<S>,
    view: V,
    initialized: bool,
}

impl<S: KeyValueStore, V: ViewSurface> Coordinator<S, V> {
    pub fn new(state: ListState<S>, view: V) -> Self {
        Self {
            state,
            view,
            initialized: false,
        }
    }

    /// Wires listeners once and renders the loaded state.
    ///
    /// Calling it again re-renders but attaches nothing new.
    pub fn init(&mut self) -> Result<(), CoordinatorError> {
        let handle = acquire_view_handle(&self.view)?;
        if !self.initialized {
            let attached = bind_listeners(&mut self.view, &handle);
            self.initialized = true;
            info!("event=app_init module=coordinator status=ok listeners_attached={attached}");
        }
        self.render(&handle);
        Ok(())
    }

    /// Handles queued view events in arrival order; returns how many ran.
    pub fn run_pending(&mut self) -> Result<usize, CoordinatorError> {
        self.ensure_initialized()?;
        let mut handled = 0;
        while let Some(event) = self.view.next_event() {
            self.handle_event(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Runs one event to completion.
    pub fn handle_event(&mut self, event: ViewEvent) -> Result<ActionOutcome, CoordinatorError> {
        self.ensure_initialized()?;
        let handle = acquire_view_handle(&self.view)?;

        let (action, outcome) = match event {
            ViewEvent::Submit { element } if element == handle.new_list_form => {
                ("new_list", self.submit_new_list(&handle))
            }
            ViewEvent::Submit { element } if element == handle.new_task_form => {
                ("new_task", self.submit_new_task(&handle))
            }
            ViewEvent::Click { element, target } if element == handle.list_container => {
                ("select_list", self.click_list_container(target))
            }
            ViewEvent::Click { element, .. } if element == handle.delete_list_button => {
                ("delete_list", self.delete_selected_list())
            }
            _ => (
                "unknown",
                ActionOutcome::Rejected(RejectReason::UnknownElement),
            ),
        };

        match outcome {
            ActionOutcome::Completed => {
                debug!("event=action module=coordinator status=ok action={action}");
                self.action_complete()?;
            }
            ActionOutcome::Rejected(reason) => {
                debug!(
                    "event=action module=coordinator status=rejected action={action} reason={}",
                    reason.as_str()
                );
            }
        }
        Ok(outcome)
    }

    /// Render+persist cycle run after every completed action.
    pub fn action_complete(&mut self) -> Result<(), CoordinatorError> {
        let handle = acquire_view_handle(&self.view)?;
        self.render(&handle);
        if let Err(err) = self.state.persist() {
            error!("event=state_persist module=coordinator status=error error={err}");
        }
        Ok(())
    }

    pub fn state(&self) -> &ListState<S> {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable surface access for the presentation layer to inject input.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_parts(self) -> (ListState<S>, V) {
        (self.state, self.view)
    }

    fn submit_new_list(&mut self, handle: &ViewHandle) -> ActionOutcome {
        let name = read_input(&self.view, handle.new_list_input);
        if name.is_empty() {
            return ActionOutcome::Rejected(RejectReason::EmptyName);
        }
        match self.state.create_list(&name) {
            Ok(_) => {
                clear_input(&mut self.view, handle.new_list_input);
                ActionOutcome::Completed
            }
            Err(err) => ActionOutcome::Rejected(reject_reason(&err)),
        }
    }

    fn submit_new_task(&mut self, handle: &ViewHandle) -> ActionOutcome {
        if self.state.selected_list().is_none() {
            return ActionOutcome::Rejected(RejectReason::NoSelection);
        }
        let name = read_input(&self.view, handle.new_task_input);
        if name.is_empty() {
            return ActionOutcome::Rejected(RejectReason::EmptyName);
        }
        match self.state.add_task_to_selected(&name) {
            Ok(_) => {
                clear_input(&mut self.view, handle.new_task_input);
                ActionOutcome::Completed
            }
            Err(err) => ActionOutcome::Rejected(reject_reason(&err)),
        }
    }

    fn click_list_container(&mut self, target: ClickTarget) -> ActionOutcome {
        match target {
            ClickTarget::ListItem(list_id) => {
                self.state.select_list(&list_id);
                ActionOutcome::Completed
            }
            ClickTarget::Element | ClickTarget::TaskRow(_) => {
                ActionOutcome::Rejected(RejectReason::NotAListRow)
            }
        }
    }

    fn delete_selected_list(&mut self) -> ActionOutcome {
        self.state.delete_selected_list();
        ActionOutcome::Completed
    }

    fn render(&mut self, handle: &ViewHandle) {
        let lists = self.state.lists();
        let selected_id = self.state.selected_id();
        render_lists(&mut self.view, handle, lists, selected_id);
        render_task_panel(&mut self.view, handle, lists, selected_id);
    }

    fn ensure_initialized(&self) -> Result<(), CoordinatorError> {
        if self.initialized {
            Ok(())
        } else {
            Err(CoordinatorError::NotInitialized)
        }
    }
}

fn reject_reason(err: &StateError) -> RejectReason {
    match err {
        StateError::NoSelection => RejectReason::NoSelection,
        _ => RejectReason::EmptyName,
    }
}
