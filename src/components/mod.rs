//! UI Components
//!
//! Leptos components of the task list view.

mod new_task_form;
mod priority_badge;
mod spinner;
mod task_list;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use priority_badge::PriorityBadge;
pub use spinner::Spinner;
pub use task_list::TaskList;
pub use task_row::TaskRow;
