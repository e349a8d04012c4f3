//! Placeholder shown while a mock fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <div class="loading__spinner" aria-hidden="true"></div>
            <span class="visually-hidden">"Loading..."</span>
        </div>
    }
}
