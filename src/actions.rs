//! Task List Actions
//!
//! Each action takes the store through Loading, awaits one client call,
//! reconciles the returned record and settles back to Ready. Failures are
//! handed back to the caller; local state stays as it was before the call.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_table_client::{ClientResult, NewTask, TableClient, TaskPatch, Transport};

use crate::state::{self, TaskListStateStoreFields, TaskStore};

/// What an action did with local state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing to do, or another action was in flight. No request was sent.
    Skipped,
}

/// Replace the local list with the server's. Ends Ready even on failure.
pub async fn load_tasks<T: Transport>(store: TaskStore, client: &TableClient<T>) -> ClientResult<Outcome> {
    if !state::store_begin(&store) {
        return Ok(Outcome::Skipped);
    }
    let result = client.list_tasks().await;
    if let Ok(tasks) = &result {
        state::store_replace_all(&store, tasks.clone());
    }
    state::store_finish(&store);
    result.map(|_| Outcome::Applied)
}

/// Create a task from the draft and selected priority, then prepend it
pub async fn submit_task<T: Transport>(store: TaskStore, client: &TableClient<T>) -> ClientResult<Outcome> {
    let Some(title) = state::submission(&store.draft().get_untracked()) else {
        return Ok(Outcome::Skipped);
    };
    if !state::store_begin(&store) {
        return Ok(Outcome::Skipped);
    }
    let new_task = NewTask::new(title, store.priority().get_untracked());
    let result = client.create_task(&new_task).await;
    if let Ok(task) = &result {
        state::store_prepend_task(&store, task.clone());
        state::store_set_draft(&store, String::new());
    }
    state::store_finish(&store);
    result.map(|_| Outcome::Applied)
}

/// Flip `completed` on one task and swap in the server's copy in place
pub async fn toggle_task<T: Transport>(store: TaskStore, client: &TableClient<T>, id: i64) -> ClientResult<Outcome> {
    let Some(completed) = state::store_completed(&store, id) else {
        return Ok(Outcome::Skipped);
    };
    if !state::store_begin(&store) {
        return Ok(Outcome::Skipped);
    }
    let result = client.update_task(id, &TaskPatch::completed(!completed)).await;
    if let Ok(task) = &result {
        state::store_replace_task(&store, task.clone());
    }
    state::store_finish(&store);
    result.map(|_| Outcome::Applied)
}

/// Run an action on the event loop. Failures go to the log only; the
/// view shows no error state.
pub fn spawn_logged<F>(action: &'static str, future: F)
where
    F: Future<Output = ClientResult<Outcome>> + 'static,
{
    spawn_local(async move {
        match future.await {
            Ok(Outcome::Applied) => tracing::debug!(action, "action applied"),
            Ok(Outcome::Skipped) => tracing::debug!(action, "action skipped"),
            Err(e) => tracing::error!(action, error = %e, "action failed"),
        }
    });
}
