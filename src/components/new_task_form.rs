//! New Task Form Component
//!
//! Draft title input, priority selector and submit button.
//! Enter in the input submits the form.

use leptos::prelude::*;
use todo_table_client::Priority;

use crate::actions::{self, spawn_logged};
use crate::context::use_task_list;
use crate::state::{self, TaskListStateStoreFields};

#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_task_list();
    let store = ctx.store;

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        spawn_logged("add task", async move { actions::submit_task(store, &client).await });
    };

    let change_priority = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match value.parse::<Priority>() {
            Ok(priority) => state::store_set_priority(&store, priority),
            Err(e) => tracing::warn!("ignoring priority change: {}", e),
        }
    };

    view! {
        <form class="new-task-form" on:submit=add_task>
            <input
                type="text"
                class="draft-input"
                placeholder="Add a new task..."
                prop:value=move || store.draft().get()
                on:input=move |ev| state::store_set_draft(&store, event_target_value(&ev))
            />
            <select class="priority-select" on:change=change_priority>
                {Priority::all().into_iter().map(|priority| {
                    view! {
                        <option
                            value=priority.as_str()
                            prop:selected=move || store.priority().get() == priority
                        >
                            {priority.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button type="submit" class="add-btn">"Add Task"</button>
        </form>
    }
}
