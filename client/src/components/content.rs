//! Shared building blocks for the content pages.

use leptos::prelude::*;

use crate::net::types::Feature;

/// Dark banner with the page title and a tagline.
#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(into)] tagline: String) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1>{title}</h1>
            <p class="page-header__tagline">{tagline}</p>
        </header>
    }
}

/// Titled grid of feature cards.
#[component]
pub fn FeatureGrid(heading: &'static str, features: Vec<Feature>) -> impl IntoView {
    view! {
        <section class="content-section">
            <h3 class="content-section__title">{heading}</h3>
            <div class="feature-grid">
                {features
                    .into_iter()
                    .enumerate()
                    .map(|(index, feature)| {
                        let heading_id = format!("feature-{index}");
                        view! {
                            <div class="feature-card" aria-labelledby=heading_id.clone()>
                                <h4 id=heading_id.clone()>{feature.title}</h4>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Titled bullet list.
#[component]
pub fn BulletList(heading: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <section class="content-section">
            <h3 class="content-section__title">{heading}</h3>
            <ul class="bullet-list">
                {items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </section>
    }
}
