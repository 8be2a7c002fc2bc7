//! Contract between the view module and a concrete presentation layer.

use crate::model::list::{ListId, TaskId};

/// Stable reference to one element of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementRef(usize);

impl ElementRef {
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Listener categories an element can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Submit,
    Click,
}

/// Rendered child node of a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// One row of the list container, bound back to its list.
    ListItem {
        list_id: ListId,
        label: String,
        selected: bool,
    },
    /// One checkable row of the task container.
    TaskRow {
        task_id: TaskId,
        label: String,
        checked: bool,
    },
}

/// What a click landed on inside an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickTarget {
    /// The element itself, or whitespace between its children.
    Element,
    ListItem(ListId),
    TaskRow(TaskId),
}

/// Raw interaction reported by the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Submit {
        element: ElementRef,
    },
    Click {
        element: ElementRef,
        target: ClickTarget,
    },
}

/// Presentation layer operated on by the view module.
///
/// Implementations own the element tree; the view module only resolves
/// elements by selector and replaces their content.
pub trait ViewSurface {
    /// Resolves one element by its selector.
    fn resolve(&self, selector: &str) -> Option<ElementRef>;

    fn replace_children(&mut self, element: ElementRef, children: Vec<ViewNode>);
    fn set_text(&mut self, element: ElementRef, text: &str);
    fn set_hidden(&mut self, element: ElementRef, hidden: bool);
    fn input_value(&self, element: ElementRef) -> String;
    fn set_input_value(&mut self, element: ElementRef, value: &str);

    /// Attaches a listener of `kind` to `element`.
    ///
    /// Returns `false` when the same listener is already attached.
    fn attach_listener(&mut self, element: ElementRef, kind: EventKind) -> bool;

    /// Pops the oldest pending event.
    fn next_event(&mut self) -> Option<ViewEvent>;
}
