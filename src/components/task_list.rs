//! Task List Component
//!
//! Owns the task store, loads the list on mount and renders either the
//! spinner or the input row plus one card per task.

use leptos::prelude::*;
use todo_table_client::TableConfig;

use crate::actions::{self, spawn_logged};
use crate::components::{NewTaskForm, Spinner, TaskRow};
use crate::context::TaskListContext;
use crate::state::TaskListStateStoreFields;

#[component]
pub fn TaskList(config: TableConfig) -> impl IntoView {
    let ctx = TaskListContext::new(config);
    provide_context(ctx);
    let store = ctx.store;

    // Load once on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_logged("load tasks", async move { actions::load_tasks(store, &client).await });
    });

    view! {
        <Show
            when=move || store.phase().get().is_ready()
            fallback=|| view! { <Spinner /> }
        >
            <div class="todo-list">
                <NewTaskForm />
                <div class="task-rows">
                    <For
                        each=move || store.tasks().get()
                        // Every field a row renders, so a replaced record re-renders
                        key=|task| (
                            task.id,
                            task.completed,
                            task.title.clone(),
                            task.description.clone(),
                            task.priority,
                        )
                        children=|task| view! { <TaskRow task=task /> }
                    />
                </div>
            </div>
        </Show>
    }
}
