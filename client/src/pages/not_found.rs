use leptos::prelude::*;

/// Fallback for unmatched routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <a href="/" class="btn btn--primary">
                "Back to Home"
            </a>
        </div>
    }
}
