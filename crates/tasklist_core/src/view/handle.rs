//! View handle resolution.

use super::surface::{ElementRef, ViewSurface};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Data-attribute selectors supplied by the markup layer.
pub mod selectors {
    pub const LIST_CONTAINER: &str = "[data-lists]";
    pub const TASK_PANEL: &str = "[data-list-display-container]";
    pub const TASK_CONTAINER: &str = "[data-tasks]";
    pub const LIST_TITLE: &str = "[data-list-title]";
    pub const LIST_COUNT: &str = "[data-list-count]";
    pub const NEW_LIST_FORM: &str = "[data-new-list-form]";
    pub const NEW_LIST_INPUT: &str = "[data-new-list-input]";
    pub const NEW_TASK_FORM: &str = "[data-new-task-form]";
    pub const NEW_TASK_INPUT: &str = "[data-new-task-input]";
    pub const DELETE_LIST_BUTTON: &str = "[data-delete-list-button]";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The surface has no element for this selector.
    MissingElement(&'static str),
}

impl Display for ViewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingElement(selector) => write!(f, "view element not found: {selector}"),
        }
    }
}

impl Error for ViewError {}

/// Resolved static regions and interactive elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewHandle {
    pub list_container: ElementRef,
    pub task_panel: ElementRef,
    pub task_container: ElementRef,
    pub list_title: ElementRef,
    pub list_count: ElementRef,
    pub new_list_form: ElementRef,
    pub new_list_input: ElementRef,
    pub new_task_form: ElementRef,
    pub new_task_input: ElementRef,
    pub delete_list_button: ElementRef,
}

/// Resolves every handle element from `surface`.
///
/// Pure lookup; calling it repeatedly on an unchanged surface yields equal
/// handles.
pub fn acquire_view_handle(surface: &impl ViewSurface) -> Result<ViewHandle, ViewError> {
    let find = |selector: &'static str| {
        surface
            .resolve(selector)
            .ok_or(ViewError::MissingElement(selector))
    };

    Ok(ViewHandle {
        list_container: find(selectors::LIST_CONTAINER)?,
        task_panel: find(selectors::TASK_PANEL)?,
        task_container: find(selectors::TASK_CONTAINER)?,
        list_title: find(selectors::LIST_TITLE)?,
        list_count: find(selectors::LIST_COUNT)?,
        new_list_form: find(selectors::NEW_LIST_FORM)?,
        new_list_input: find(selectors::NEW_LIST_INPUT)?,
        new_task_form: find(selectors::NEW_TASK_FORM)?,
        new_task_input: find(selectors::NEW_TASK_INPUT)?,
        delete_list_button: find(selectors::DELETE_LIST_BUTTON)?,
    })
}
