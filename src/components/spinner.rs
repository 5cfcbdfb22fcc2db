//! Spinner Component
//!
//! Loading indicator shown while a request is in flight.

use leptos::prelude::*;

/// Shown in place of the list while a request is in flight
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
