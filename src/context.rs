//! Task List Context
//!
//! Store and client shared with the task list's child components.

use leptos::prelude::*;
use todo_table_client::{HttpTransport, TableClient, TableConfig};

use reactive_stores::Store;

use crate::state::{TaskListState, TaskStore};

pub type HttpTableClient = TableClient<HttpTransport>;

/// Provided by `TaskList`, read by the form and rows
#[derive(Clone, Copy)]
pub struct TaskListContext {
    pub store: TaskStore,
    /// The reqwest client lives on the browser thread only
    client: StoredValue<HttpTableClient, LocalStorage>,
}

impl TaskListContext {
    pub fn new(config: TableConfig) -> Self {
        Self {
            store: Store::new(TaskListState::default()),
            client: StoredValue::new_local(TableClient::new(config)),
        }
    }

    /// Client handle for one spawned action
    pub fn client(&self) -> HttpTableClient {
        self.client.get_value()
    }
}

pub fn use_task_list() -> TaskListContext {
    expect_context::<TaskListContext>()
}
