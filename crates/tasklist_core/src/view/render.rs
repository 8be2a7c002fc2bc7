//! Rendering and input helpers over a [`ViewSurface`].
//!
//! These are the only functions that write to the element tree.

use super::handle::ViewHandle;
use super::surface::{ElementRef, EventKind, ViewNode, ViewSurface};
use crate::model::list::TaskList;

/// Emphasized label form used for the selected list and the panel title.
pub fn emphasize(label: &str) -> String {
    label.to_uppercase()
}

pub fn remaining_count(list: &TaskList) -> usize {
    list.remaining()
}

/// `"1 task left"` for one, `"<n> tasks left"` otherwise.
pub fn remaining_count_label(remaining: usize) -> String {
    let noun = if remaining == 1 { "task" } else { "tasks" };
    format!("{remaining} {noun} left")
}

/// Replaces the list container's children with one item per list.
pub fn render_lists<V: ViewSurface>(
    surface: &mut V,
    handle: &ViewHandle,
    lists: &[TaskList],
    selected_id: Option<&str>,
) {
    let items = lists
        .iter()
        .map(|list| {
            let selected = selected_id == Some(list.id.as_str());
            ViewNode::ListItem {
                list_id: list.id.clone(),
                label: if selected {
                    emphasize(&list.name)
                } else {
                    list.name.clone()
                },
                selected,
            }
        })
        .collect();
    surface.replace_children(handle.list_container, items);
}

/// Shows the selected list's tasks, or hides the panel without a selection.
pub fn render_task_panel<V: ViewSurface>(
    surface: &mut V,
    handle: &ViewHandle,
    lists: &[TaskList],
    selected_id: Option<&str>,
) {
    let selected = selected_id.and_then(|id| lists.iter().find(|list| list.id == id));
    let Some(list) = selected else {
        surface.set_hidden(handle.task_panel, true);
        return;
    };

    surface.set_hidden(handle.task_panel, false);
    surface.set_text(handle.list_title, &emphasize(&list.name));
    surface.set_text(
        handle.list_count,
        &remaining_count_label(remaining_count(list)),
    );

    let rows = list
        .tasks
        .iter()
        .map(|task| ViewNode::TaskRow {
            task_id: task.id.clone(),
            label: task.name.clone(),
            checked: task.complete,
        })
        .collect();
    surface.replace_children(handle.task_container, rows);
}

/// Attaches every interactive listener; returns how many were new.
pub fn bind_listeners<V: ViewSurface>(surface: &mut V, handle: &ViewHandle) -> usize {
    let wiring = [
        (handle.new_list_form, EventKind::Submit),
        (handle.new_task_form, EventKind::Submit),
        (handle.list_container, EventKind::Click),
        (handle.delete_list_button, EventKind::Click),
    ];

    let mut attached = 0;
    for (element, kind) in wiring {
        if surface.attach_listener(element, kind) {
            attached += 1;
        }
    }
    attached
}

/// Reads an input's value with surrounding whitespace removed.
pub fn read_input<V: ViewSurface>(surface: &V, input: ElementRef) -> String {
    surface.input_value(input).trim().to_string()
}

pub fn clear_input<V: ViewSurface>(surface: &mut V, input: ElementRef) {
    surface.set_input_value(input, "");
}
