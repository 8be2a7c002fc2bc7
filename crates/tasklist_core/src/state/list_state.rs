//! Owned list state with store-backed load and persist.

use crate::model::list::{normalize_name, ListId, Task, TaskId, TaskList, ValidationError};
use crate::store::{KeyValueStore, StoreError};
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key holding the serialized list collection.
pub const LISTS_KEY: &str = "list.list";
/// Store key holding the serialized nullable selected list id.
pub const SELECTED_LIST_KEY: &str = "list.selectedListId";

pub type StateResult<T> = Result<T, StateError>;

/// Errors surfaced by state queries and mutations.
#[derive(Debug)]
pub enum StateError {
    /// Input name failed validation.
    Validation(ValidationError),
    /// Operation needs a selected list and none is selected.
    NoSelection,
    /// Task id is not part of the selected list.
    TaskNotFound(TaskId),
    /// Model could not be encoded for persistence.
    Encode(serde_json::Error),
    /// Store backend rejected the write.
    Store(StoreError),
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoSelection => write!(f, "no list is selected"),
            Self::TaskNotFound(id) => write!(f, "task not found in selected list: {id}"),
            Self::Encode(err) => write!(f, "failed to encode state: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::NoSelection | Self::TaskNotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StateError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for StateError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for StateError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persisted entry exists but cannot be parsed.
///
/// Recovered during load by falling back to the empty model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeserializationError {
    pub key: String,
    pub message: String,
}

impl Display for DeserializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed entry `{}`: {}", self.key, self.message)
    }
}

impl Error for DeserializationError {}

/// Parses one raw persisted entry.
pub fn decode_entry<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, DeserializationError> {
    serde_json::from_str(raw).map_err(|err| DeserializationError {
        key: key.to_string(),
        message: err.to_string(),
    })
}

/// Canonical model owner.
///
/// Holds the store it was loaded from; every [`ListState::persist`] writes
/// back to that same store.
pub struct ListState<S: KeyValueStore> {
    store: S,
    lists: Vec<TaskList>,
    selected_list_id: Option<ListId>,
}

impl<S: KeyValueStore> ListState<S> {
    /// Loads the persisted model from `store`.
    ///
    /// Absent or malformed entries yield an empty collection / no selection.
    /// A persisted selection naming no loaded list is dropped.
    pub fn load(store: S) -> Self {
        let lists: Vec<TaskList> = read_entry(&store, LISTS_KEY).unwrap_or_default();
        let mut selected_list_id: Option<ListId> =
            read_entry::<Option<ListId>>(&store, SELECTED_LIST_KEY).flatten();

        let dangling = selected_list_id
            .as_deref()
            .is_some_and(|id| !lists.iter().any(|list| list.id == id));
        if dangling {
            warn!("event=state_load module=state status=repaired reason=dangling_selection");
            selected_list_id = None;
        }

        info!(
            "event=state_load module=state status=ok list_count={} has_selection={}",
            lists.len(),
            selected_list_id.is_some()
        );

        Self {
            store,
            lists,
            selected_list_id,
        }
    }

    /// Live read view of the list collection, in creation order.
    pub fn lists(&self) -> &[TaskList] {
        &self.lists
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_list_id.as_deref()
    }

    /// Returns the selected list, if any.
    pub fn selected_list(&self) -> Option<&TaskList> {
        let id = self.selected_id()?;
        self.lists.iter().find(|list| list.id == id)
    }

    /// Appends a new list seeded with one placeholder task.
    ///
    /// # Errors
    /// - `Validation` when `name` is blank.
    pub fn create_list(&mut self, name: &str) -> StateResult<TaskList> {
        let name = normalize_name(name)?;
        let list = TaskList::new(name);
        self.lists.push(list.clone());
        debug!(
            "event=list_create module=state status=ok list_count={}",
            self.lists.len()
        );
        Ok(list)
    }

    /// Removes the selected list and clears the selection.
    ///
    /// Returns the removed list; `None` when nothing was selected or the
    /// selection matched no list.
    pub fn delete_selected_list(&mut self) -> Option<TaskList> {
        let selected = self.selected_list_id.take()?;
        let index = self.lists.iter().position(|list| list.id == selected)?;
        let removed = self.lists.remove(index);
        debug!(
            "event=list_delete module=state status=ok list_count={}",
            self.lists.len()
        );
        Some(removed)
    }

    /// Selects `id` if a list with that id exists.
    ///
    /// Returns whether the selection now points at `id`. Unknown ids leave
    /// the current selection untouched.
    pub fn select_list(&mut self, id: &str) -> bool {
        if !self.lists.iter().any(|list| list.id == id) {
            debug!("event=list_select module=state status=ignored reason=unknown_id");
            return false;
        }
        self.selected_list_id = Some(id.to_string());
        true
    }

    /// Appends an incomplete task to the selected list.
    ///
    /// # Errors
    /// - `NoSelection` when no list is selected.
    /// - `Validation` when `name` is blank.
    pub fn add_task_to_selected(&mut self, name: &str) -> StateResult<Task> {
        let list = self.selected_list_mut().ok_or(StateError::NoSelection)?;
        let task = Task::new(normalize_name(name)?);
        list.tasks.push(task.clone());
        debug!(
            "event=task_add module=state status=ok task_count={}",
            list.tasks.len()
        );
        Ok(task)
    }

    /// Sets the completion flag of one task in the selected list.
    pub fn set_task_complete(&mut self, task_id: &str, complete: bool) -> StateResult<()> {
        let list = self.selected_list_mut().ok_or(StateError::NoSelection)?;
        let task = list
            .task_mut(task_id)
            .ok_or_else(|| StateError::TaskNotFound(task_id.to_string()))?;
        task.complete = complete;
        Ok(())
    }

    /// Writes the list collection and the selection under their keys.
    pub fn persist(&self) -> StateResult<()> {
        let lists = serde_json::to_string(&self.lists)?;
        let selected = serde_json::to_string(&self.selected_list_id)?;
        self.store.set_many(&[
            (LISTS_KEY, lists.as_str()),
            (SELECTED_LIST_KEY, selected.as_str()),
        ])?;
        debug!(
            "event=state_persist module=state status=ok list_count={}",
            self.lists.len()
        );
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn selected_list_mut(&mut self) -> Option<&mut TaskList> {
        let id = self.selected_list_id.as_deref()?;
        self.lists.iter_mut().find(|list| list.id == id)
    }
}

fn read_entry<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            error!("event=state_load module=state status=error key={key} error={err}");
            return None;
        }
    };

    match decode_entry(key, &raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!("event=state_load module=state status=recovered key={key} error={err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_entry, ListState, StateError, LISTS_KEY, SELECTED_LIST_KEY};
    use crate::model::list::TaskList;
    use crate::store::memory_store::MemoryStore;
    use crate::store::KeyValueStore;

    #[test]
    fn decode_entry_reports_key_on_failure() {
        let err = decode_entry::<Vec<TaskList>>(LISTS_KEY, "{not json").unwrap_err();
        assert_eq!(err.key, LISTS_KEY);
        assert!(err.to_string().contains("list.list"));
    }

    #[test]
    fn load_drops_selection_that_matches_no_list() {
        let store = MemoryStore::new();
        store.set(LISTS_KEY, "[]").unwrap();
        store.set(SELECTED_LIST_KEY, "\"gone\"").unwrap();

        let state = ListState::load(&store);
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn create_list_rejects_blank_name() {
        let mut state = ListState::load(MemoryStore::new());
        let err = state.create_list("   ").unwrap_err();
        assert!(matches!(err, StateError::Validation(_)));
        assert!(state.lists().is_empty());
    }

    #[test]
    fn delete_with_dangling_selection_still_clears_it() {
        let mut state = ListState::load(MemoryStore::new());
        state.selected_list_id = Some("ghost".to_string());
        assert!(state.delete_selected_list().is_none());
        assert!(state.selected_id().is_none());
    }

    #[test]
    fn set_task_complete_requires_task_in_selected_list() {
        let mut state = ListState::load(MemoryStore::new());
        let list = state.create_list("Work").unwrap();
        assert!(matches!(
            state.set_task_complete(&list.tasks[0].id, true),
            Err(StateError::NoSelection)
        ));

        state.select_list(&list.id);
        state.set_task_complete(&list.tasks[0].id, true).unwrap();
        assert_eq!(state.selected_list().unwrap().remaining(), 0);

        let err = state.set_task_complete("missing", true).unwrap_err();
        assert!(matches!(err, StateError::TaskNotFound(id) if id == "missing"));
    }
}
