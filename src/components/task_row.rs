//! Task Row Component
//!
//! One card in the list: checkbox, title, optional description, priority badge.

use leptos::prelude::*;
use todo_table_client::Task;

use crate::actions::{self, spawn_logged};
use crate::components::PriorityBadge;
use crate::context::use_task_list;

#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_task_list();

    let id = task.id;
    let completed = task.completed;
    let description = task.description.filter(|d| !d.is_empty());
    let card_class = if completed { "task-card completed" } else { "task-card" };
    let title_class = if completed { "task-title done" } else { "task-title" };

    let toggle = move |_| {
        let client = ctx.client();
        spawn_logged("update task", async move { actions::toggle_task(ctx.store, &client, id).await });
    };

    view! {
        <div class=card_class>
            <input
                type="checkbox"
                class="task-check"
                prop:checked=completed
                on:change=toggle
            />
            <div class="task-body">
                <h3 class=title_class>{task.title}</h3>
                {description.map(|d| view! { <p class="task-description">{d}</p> })}
            </div>
            <PriorityBadge priority=task.priority />
        </div>
    }
}
