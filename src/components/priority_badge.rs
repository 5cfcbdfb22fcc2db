//! Priority Badge Component
//!
//! Outlined label whose color is keyed by priority.

use leptos::prelude::*;
use todo_table_client::Priority;

/// CSS classes for a badge; `high` is the most prominent, `low` the least
pub fn badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "priority-badge priority-high",
        Priority::Medium => "priority-badge priority-medium",
        Priority::Low => "priority-badge priority-low",
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! {
        <span class=badge_class(priority)>{priority.as_str()}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_class_per_priority() {
        assert_eq!(badge_class(Priority::High), "priority-badge priority-high");
        assert_eq!(badge_class(Priority::Medium), "priority-badge priority-medium");
        assert_eq!(badge_class(Priority::Low), "priority-badge priority-low");
    }
}
