use tasklist_core::db::open_db_in_memory;
use tasklist_core::{
    KeyValueStore, ListState, MemoryStore, SqliteKeyValueStore, StateError, TaskList,
    LISTS_KEY, SELECTED_LIST_KEY, SEEDED_TASK_NAME,
};

fn assert_selection_valid<S: KeyValueStore>(state: &ListState<S>) {
    if let Some(id) = state.selected_id() {
        assert!(
            state.lists().iter().any(|list| list.id == id),
            "selection {id} references no list"
        );
    }
}

#[test]
fn load_from_empty_store_yields_empty_model() {
    let state = ListState::load(MemoryStore::new());
    assert!(state.lists().is_empty());
    assert!(state.selected_id().is_none());
}

#[test]
fn load_recovers_from_malformed_entries() {
    let store = MemoryStore::new();
    store.set(LISTS_KEY, "[{\"id\": 3}").unwrap();
    store.set(SELECTED_LIST_KEY, "not-json").unwrap();

    let state = ListState::load(&store);
    assert!(state.lists().is_empty());
    assert!(state.selected_id().is_none());
}

#[test]
fn selection_invariant_holds_across_action_sequence() {
    let mut state = ListState::load(MemoryStore::new());
    assert_selection_valid(&state);

    let a = state.create_list("A").unwrap();
    let b = state.create_list("B").unwrap();
    assert_selection_valid(&state);

    assert!(!state.select_list("missing"));
    assert!(state.selected_id().is_none());

    state.select_list(&a.id);
    assert_selection_valid(&state);
    assert!(!state.select_list("missing"));
    assert_eq!(state.selected_id(), Some(a.id.as_str()));

    state.delete_selected_list();
    assert_selection_valid(&state);
    assert!(state.selected_id().is_none());

    state.select_list(&b.id);
    state.add_task_to_selected("x").unwrap();
    state.delete_selected_list();
    assert_selection_valid(&state);
    assert!(state.lists().is_empty());
}

#[test]
fn select_list_twice_is_idempotent() {
    let mut state = ListState::load(MemoryStore::new());
    let list = state.create_list("Home").unwrap();

    assert!(state.select_list(&list.id));
    let lists_after_first = state.lists().to_vec();
    let selected_after_first = state.selected_id().map(str::to_string);

    assert!(state.select_list(&list.id));
    assert_eq!(state.lists(), lists_after_first.as_slice());
    assert_eq!(state.selected_id().map(str::to_string), selected_after_first);
}

#[test]
fn persist_then_reload_reproduces_model() {
    let conn = open_db_in_memory().unwrap();

    let (expected_lists, expected_selection) = {
        let mut state = ListState::load(SqliteKeyValueStore::new(&conn));
        let work = state.create_list("Work").unwrap();
        state.create_list("Home").unwrap();
        state.select_list(&work.id);
        let task = state.add_task_to_selected("Ship release").unwrap();
        state.set_task_complete(&task.id, true).unwrap();
        state.persist().unwrap();
        (
            state.lists().to_vec(),
            state.selected_id().map(str::to_string),
        )
    };

    let reloaded = ListState::load(SqliteKeyValueStore::new(&conn));
    assert_eq!(reloaded.lists(), expected_lists.as_slice());
    assert_eq!(reloaded.selected_id().map(str::to_string), expected_selection);
}

#[test]
fn persist_writes_wire_format_under_both_keys() {
    let store = MemoryStore::new();
    let mut state = ListState::load(&store);
    let list = state.create_list("Groceries").unwrap();
    state.persist().unwrap();

    let lists: serde_json::Value =
        serde_json::from_str(&store.get(LISTS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(lists[0]["id"], list.id.as_str());
    assert_eq!(lists[0]["name"], "Groceries");
    assert_eq!(lists[0]["tasks"][0]["name"], SEEDED_TASK_NAME);
    assert_eq!(lists[0]["tasks"][0]["complete"], false);
    assert_eq!(store.get(SELECTED_LIST_KEY).unwrap().as_deref(), Some("null"));

    state.select_list(&list.id);
    state.persist().unwrap();
    assert_eq!(
        store.get(SELECTED_LIST_KEY).unwrap(),
        Some(format!("\"{}\"", list.id))
    );
}

#[test]
fn load_accepts_externally_written_snapshot() {
    let store = MemoryStore::new();
    store
        .set(
            LISTS_KEY,
            r#"[{"id":"1700000000000","name":"Trip","tasks":[{"id":"t1","name":"Pack","complete":true}]}]"#,
        )
        .unwrap();
    store.set(SELECTED_LIST_KEY, "\"1700000000000\"").unwrap();

    let state = ListState::load(&store);
    let selected: &TaskList = state.selected_list().unwrap();
    assert_eq!(selected.name, "Trip");
    assert!(selected.tasks[0].complete);
    assert_eq!(selected.remaining(), 0);
}

#[test]
fn delete_without_selection_is_noop() {
    let mut state = ListState::load(MemoryStore::new());
    state.create_list("Keep").unwrap();
    let before = state.lists().to_vec();

    assert!(state.delete_selected_list().is_none());
    assert_eq!(state.lists(), before.as_slice());
}

#[test]
fn delete_removes_exactly_the_selected_list() {
    let mut state = ListState::load(MemoryStore::new());
    let a = state.create_list("A").unwrap();
    let b = state.create_list("B").unwrap();
    let c = state.create_list("C").unwrap();

    state.select_list(&b.id);
    let removed = state.delete_selected_list().unwrap();

    assert_eq!(removed.id, b.id);
    let remaining: Vec<&str> = state.lists().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(remaining, vec![a.id.as_str(), c.id.as_str()]);
    assert!(state.selected_id().is_none());
}

#[test]
fn groceries_scenario() {
    let mut state = ListState::load(MemoryStore::new());

    let groceries = state.create_list("Groceries").unwrap();
    assert_eq!(groceries.tasks.len(), 1);
    assert_eq!(state.lists().len(), 1);

    state.select_list(&groceries.id);
    let milk = state.add_task_to_selected("Milk").unwrap();
    assert_eq!(milk.name, "Milk");
    assert!(!milk.complete);

    let selected = state.selected_list().unwrap();
    assert_eq!(selected.tasks.len(), 2);
    assert_eq!(selected.tasks[1], milk);
    assert_eq!(selected.remaining(), 2);
}

#[test]
fn add_task_without_selection_fails_and_changes_nothing() {
    let mut state = ListState::load(MemoryStore::new());
    state.create_list("A").unwrap();
    state.create_list("B").unwrap();
    let before = state.lists().to_vec();

    let err = state.add_task_to_selected("Orphan").unwrap_err();
    assert!(matches!(err, StateError::NoSelection));
    assert_eq!(state.lists(), before.as_slice());
}

#[test]
fn add_task_rejects_blank_name() {
    let mut state = ListState::load(MemoryStore::new());
    let list = state.create_list("A").unwrap();
    state.select_list(&list.id);

    let err = state.add_task_to_selected("  ").unwrap_err();
    assert!(matches!(err, StateError::Validation(_)));
    assert_eq!(state.selected_list().unwrap().tasks.len(), 1);
}

#[test]
fn rapid_list_creation_yields_unique_ids() {
    let mut state = ListState::load(MemoryStore::new());
    let first = state.create_list("Same").unwrap();
    let second = state.create_list("Same").unwrap();
    assert_ne!(first.id, second.id);
}
