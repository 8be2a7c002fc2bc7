//! In-memory element tree implementing [`ViewSurface`].
//!
//! Stands in for the markup layer: elements are registered under a selector
//! and interactions (`type_into`, `submit`, `click`, `click_child`) are
//! queued as events only when a matching listener is attached.

use super::handle::selectors;
use super::surface::{ClickTarget, ElementRef, EventKind, ViewEvent, ViewNode, ViewSurface};
use std::collections::{BTreeSet, VecDeque};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Container,
    Text,
    Form,
    Input,
    Button,
}

/// One addressable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub selector: String,
    pub kind: ElementKind,
    /// Text content (titles, labels, counters).
    pub text: String,
    /// Current value; meaningful for inputs.
    pub value: String,
    pub hidden: bool,
    pub children: Vec<ViewNode>,
    listeners: BTreeSet<EventKind>,
}

impl Element {
    fn new(selector: &str, kind: ElementKind) -> Self {
        Self {
            selector: selector.to_string(),
            kind,
            text: String::new(),
            value: String::new(),
            hidden: false,
            children: Vec::new(),
            listeners: BTreeSet::new(),
        }
    }

    pub fn has_listener(&self, kind: EventKind) -> bool {
        self.listeners.contains(&kind)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[derive(Debug, Default)]
pub struct ViewDocument {
    elements: Vec<Element>,
    events: VecDeque<ViewEvent>,
}

impl ViewDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the element set the list/task screen expects.
    pub fn standard() -> Self {
        let mut doc = Self::new();
        for (selector, kind) in [
            (selectors::LIST_CONTAINER, ElementKind::Container),
            (selectors::NEW_LIST_FORM, ElementKind::Form),
            (selectors::NEW_LIST_INPUT, ElementKind::Input),
            (selectors::DELETE_LIST_BUTTON, ElementKind::Button),
            (selectors::TASK_PANEL, ElementKind::Container),
            (selectors::LIST_TITLE, ElementKind::Text),
            (selectors::LIST_COUNT, ElementKind::Text),
            (selectors::TASK_CONTAINER, ElementKind::Container),
            (selectors::NEW_TASK_FORM, ElementKind::Form),
            (selectors::NEW_TASK_INPUT, ElementKind::Input),
        ] {
            doc.insert(selector, kind);
        }
        doc
    }

    /// Registers an element, or returns the existing one for `selector`.
    pub fn insert(&mut self, selector: &str, kind: ElementKind) -> ElementRef {
        if let Some(existing) = self.resolve(selector) {
            return existing;
        }
        self.elements.push(Element::new(selector, kind));
        ElementRef::new(self.elements.len() - 1)
    }

    pub fn element(&self, element: ElementRef) -> Option<&Element> {
        self.elements.get(element.index())
    }

    pub fn find(&self, selector: &str) -> Option<&Element> {
        self.resolve(selector).and_then(|element| self.element(element))
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Replaces the value of the input at `selector`.
    pub fn type_into(&mut self, selector: &str, text: &str) -> bool {
        match self.resolve(selector) {
            Some(element) => {
                self.set_input_value(element, text);
                true
            }
            None => false,
        }
    }

    /// Submits the form at `selector`; returns whether an event was queued.
    pub fn submit(&mut self, selector: &str) -> bool {
        let Some(element) = self.resolve(selector) else {
            return false;
        };
        self.dispatch(element, EventKind::Submit, |element| ViewEvent::Submit {
            element,
        })
    }

    /// Clicks the element at `selector` itself (not one of its children).
    pub fn click(&mut self, selector: &str) -> bool {
        let Some(element) = self.resolve(selector) else {
            return false;
        };
        self.dispatch(element, EventKind::Click, |element| ViewEvent::Click {
            element,
            target: ClickTarget::Element,
        })
    }

    /// Clicks the `index`-th rendered child of the element at `selector`.
    ///
    /// An out-of-range index counts as a click on the element's whitespace.
    pub fn click_child(&mut self, selector: &str, index: usize) -> bool {
        let Some(element) = self.resolve(selector) else {
            return false;
        };
        let target = match self
            .element(element)
            .and_then(|found| found.children.get(index))
        {
            Some(ViewNode::ListItem { list_id, .. }) => ClickTarget::ListItem(list_id.clone()),
            Some(ViewNode::TaskRow { task_id, .. }) => ClickTarget::TaskRow(task_id.clone()),
            None => ClickTarget::Element,
        };
        self.dispatch(element, EventKind::Click, |element| ViewEvent::Click {
            element,
            target,
        })
    }

    fn dispatch(
        &mut self,
        element: ElementRef,
        kind: EventKind,
        build: impl FnOnce(ElementRef) -> ViewEvent,
    ) -> bool {
        let listening = self
            .element(element)
            .is_some_and(|found| found.has_listener(kind));
        if listening {
            self.events.push_back(build(element));
        }
        listening
    }

    fn element_mut(&mut self, element: ElementRef) -> Option<&mut Element> {
        self.elements.get_mut(element.index())
    }
}

impl ViewSurface for ViewDocument {
    fn resolve(&self, selector: &str) -> Option<ElementRef> {
        self.elements
            .iter()
            .position(|element| element.selector == selector)
            .map(ElementRef::new)
    }

    fn replace_children(&mut self, element: ElementRef, children: Vec<ViewNode>) {
        if let Some(found) = self.element_mut(element) {
            found.children = children;
        }
    }

    fn set_text(&mut self, element: ElementRef, text: &str) {
        if let Some(found) = self.element_mut(element) {
            found.text = text.to_string();
        }
    }

    fn set_hidden(&mut self, element: ElementRef, hidden: bool) {
        if let Some(found) = self.element_mut(element) {
            found.hidden = hidden;
        }
    }

    fn input_value(&self, element: ElementRef) -> String {
        self.element(element)
            .map(|found| found.value.clone())
            .unwrap_or_default()
    }

    fn set_input_value(&mut self, element: ElementRef, value: &str) {
        if let Some(found) = self.element_mut(element) {
            found.value = value.to_string();
        }
    }

    fn attach_listener(&mut self, element: ElementRef, kind: EventKind) -> bool {
        self.element_mut(element)
            .is_some_and(|found| found.listeners.insert(kind))
    }

    fn next_event(&mut self) -> Option<ViewEvent> {
        self.events.pop_front()
    }
}
