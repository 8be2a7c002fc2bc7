use tasklist_core::view::{
    acquire_view_handle, remaining_count, remaining_count_label, render_lists, render_task_panel,
    selectors, ElementKind, ViewError, ViewNode,
};
use tasklist_core::{Task, TaskList, ViewDocument};

fn list_with(name: &str, flags: &[bool]) -> TaskList {
    let mut list = TaskList::new(name);
    list.tasks = flags
        .iter()
        .enumerate()
        .map(|(i, complete)| {
            let mut task = Task::new(format!("task {i}"));
            task.complete = *complete;
            task
        })
        .collect();
    list
}

#[test]
fn handle_acquisition_is_idempotent() {
    let doc = ViewDocument::standard();
    let first = acquire_view_handle(&doc).unwrap();
    let second = acquire_view_handle(&doc).unwrap();
    assert_eq!(first, second);
}

#[test]
fn handle_acquisition_reports_missing_element() {
    let mut doc = ViewDocument::new();
    doc.insert(selectors::LIST_CONTAINER, ElementKind::Container);

    let err = acquire_view_handle(&doc).unwrap_err();
    assert_eq!(err, ViewError::MissingElement(selectors::TASK_PANEL));
}

#[test]
fn render_lists_replaces_children_and_marks_selection() {
    let mut doc = ViewDocument::standard();
    let handle = acquire_view_handle(&doc).unwrap();
    let work = TaskList::new("Work");
    let home = TaskList::new("Home");
    let lists = vec![work.clone(), home.clone()];

    render_lists(&mut doc, &handle, &lists, None);
    render_lists(&mut doc, &handle, &lists, Some(home.id.as_str()));

    let children = &doc.find(selectors::LIST_CONTAINER).unwrap().children;
    assert_eq!(
        children,
        &vec![
            ViewNode::ListItem {
                list_id: work.id.clone(),
                label: "Work".to_string(),
                selected: false,
            },
            ViewNode::ListItem {
                list_id: home.id.clone(),
                label: "HOME".to_string(),
                selected: true,
            },
        ]
    );
}

#[test]
fn task_panel_hidden_without_valid_selection() {
    let mut doc = ViewDocument::standard();
    let handle = acquire_view_handle(&doc).unwrap();
    let lists = vec![TaskList::new("Work")];

    render_task_panel(&mut doc, &handle, &lists, None);
    assert!(doc.find(selectors::TASK_PANEL).unwrap().hidden);

    render_task_panel(&mut doc, &handle, &lists, Some(lists[0].id.as_str()));
    assert!(!doc.find(selectors::TASK_PANEL).unwrap().hidden);

    render_task_panel(&mut doc, &handle, &lists, Some("stale"));
    assert!(doc.find(selectors::TASK_PANEL).unwrap().hidden);
}

#[test]
fn task_panel_shows_title_count_and_rows() {
    let mut doc = ViewDocument::standard();
    let handle = acquire_view_handle(&doc).unwrap();
    let list = list_with("Chores", &[false, true, false]);
    let lists = vec![list.clone()];

    render_task_panel(&mut doc, &handle, &lists, Some(list.id.as_str()));

    assert_eq!(doc.find(selectors::LIST_TITLE).unwrap().text, "CHORES");
    assert_eq!(doc.find(selectors::LIST_COUNT).unwrap().text, "2 tasks left");
    let rows = &doc.find(selectors::TASK_CONTAINER).unwrap().children;
    let checked: Vec<bool> = rows
        .iter()
        .map(|node| match node {
            ViewNode::TaskRow { checked, .. } => *checked,
            other => panic!("unexpected node {other:?}"),
        })
        .collect();
    assert_eq!(checked, vec![false, true, false]);
}

#[test]
fn remaining_count_matches_incomplete_tasks() {
    assert_eq!(remaining_count(&list_with("a", &[false, true, false])), 2);
    assert_eq!(remaining_count_label(2), "2 tasks left");

    let one = list_with("b", &[true, false]);
    assert_eq!(remaining_count_label(remaining_count(&one)), "1 task left");
}
