//! Retro Todo Frontend App
//!
//! Page shell: header, the task list, footer.

use leptos::prelude::*;
use todo_table_client::TableConfig;

use crate::components::TaskList;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="container">
            <header class="page-header">
                <h1 class="page-title">"Retro Todo List"</h1>
                <p class="page-subtitle">"Keep track of your vintage tasks in style"</p>
            </header>

            <TaskList config=TableConfig::default() />

            <footer class="page-footer">"Made with ❤️ on a vintage keyboard"</footer>
        </div>
    }
}
