//! Task List State
//!
//! View-local cache of the server's task list, held in a reactive store.
//! The plain helpers on `Phase` and task slices carry the logic; the
//! `store_*` functions apply them to the store fields.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_table_client::{Priority, Task};

/// Coarse view lifecycle: Initial -> Loading -> Ready, then Ready <-> Loading per action
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Initial,
    Loading,
    Ready,
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        *self == Phase::Loading
    }

    /// Controls are only shown once the first load has settled
    pub fn is_ready(&self) -> bool {
        *self == Phase::Ready
    }

    /// Enter Loading. Returns false if another action is still in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = Phase::Loading;
        true
    }

    pub fn finish(&mut self) {
        *self = Phase::Ready;
    }
}

/// Task list view state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskListState {
    /// Tasks in server order, newest first
    pub tasks: Vec<Task>,
    pub phase: Phase,
    /// Not-yet-submitted title text
    pub draft: String,
    /// Priority for the next created task
    pub priority: Priority,
}

pub type TaskStore = Store<TaskListState>;

/// Title to submit, or None when the draft is blank
pub fn submission(draft: &str) -> Option<String> {
    let title = draft.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Put a freshly created task at the front; no local re-sort
pub fn prepend_task(tasks: &mut Vec<Task>, task: Task) {
    tasks.insert(0, task);
}

/// Swap in the server's copy of a task, keeping its position
pub fn replace_task(tasks: &mut [Task], updated: Task) -> bool {
    match tasks.iter_mut().find(|t| t.id == updated.id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

pub fn find_task(tasks: &[Task], id: i64) -> Option<&Task> {
    tasks.iter().find(|t| t.id == id)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin(store: &TaskStore) -> bool {
    store.phase().write().begin()
}

pub fn store_finish(store: &TaskStore) {
    store.phase().write().finish();
}

pub fn store_replace_all(store: &TaskStore, tasks: Vec<Task>) {
    store.tasks().set(tasks);
}

pub fn store_prepend_task(store: &TaskStore, task: Task) {
    prepend_task(&mut store.tasks().write(), task);
}

pub fn store_replace_task(store: &TaskStore, task: Task) -> bool {
    replace_task(&mut store.tasks().write(), task)
}

/// Current `completed` flag of a task, None if it is not in the list
pub fn store_completed(store: &TaskStore, id: i64) -> Option<bool> {
    find_task(&store.tasks().read_untracked(), id).map(|t| t.completed)
}

pub fn store_set_draft(store: &TaskStore, draft: String) {
    store.draft().set(draft);
}

pub fn store_set_priority(store: &TaskStore, priority: Priority) {
    store.priority().set(priority);
}

#[cfg(test)]
pub(crate) fn task(id: i64, title: &str, priority: Priority, completed: bool) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: None,
        completed,
        created_at: format!("2024-01-0{}T00:00:00.000Z", id % 10),
        priority,
    }
}
