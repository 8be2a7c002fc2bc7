//! Plain-text rendering of the view document.

use std::fmt::Write;
use tasklist_core::view::{selectors, ViewNode};
use tasklist_core::ViewDocument;

pub fn render(doc: &ViewDocument) -> String {
    let mut out = String::from("LISTS\n");

    let rows = doc
        .find(selectors::LIST_CONTAINER)
        .map(|container| container.children.as_slice())
        .unwrap_or_default();
    if rows.is_empty() {
        out.push_str("  (none)\n");
    }
    for (index, node) in rows.iter().enumerate() {
        if let ViewNode::ListItem {
            label, selected, ..
        } = node
        {
            let marker = if *selected { '>' } else { ' ' };
            let _ = writeln!(out, "{marker} {}. {label}", index + 1);
        }
    }

    let panel_hidden = doc
        .find(selectors::TASK_PANEL)
        .map_or(true, |panel| panel.hidden);
    if panel_hidden {
        out.push_str("\n(no list selected)");
        return out;
    }

    let text_of = |selector: &'static str| {
        doc.find(selector)
            .map(|element| element.text.as_str())
            .unwrap_or_default()
    };
    let _ = writeln!(
        out,
        "\n{} ({})",
        text_of(selectors::LIST_TITLE),
        text_of(selectors::LIST_COUNT)
    );

    if let Some(tasks) = doc.find(selectors::TASK_CONTAINER) {
        for node in &tasks.children {
            if let ViewNode::TaskRow { label, checked, .. } = node {
                let mark = if *checked { 'x' } else { ' ' };
                let _ = writeln!(out, "  [{mark}] {label}");
            }
        }
    }
    out.trim_end().to_string()
}
