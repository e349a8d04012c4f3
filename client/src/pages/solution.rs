//! Solutions page: industries, use cases, impact, and a testimonial carousel.

#[cfg(test)]
#[path = "solution_test.rs"]
mod solution_test;

use leptos::prelude::*;

use crate::components::content::{BulletList, PageHeader};
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::api;
use crate::net::cache::use_cached_content;
use crate::net::types::{SolutionDetails, UseCase};

/// Move a carousel position by `delta`, clamped to `0..len`.
///
/// The carousel does not wrap; an empty carousel stays at zero.
pub fn carousel_step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

#[component]
pub fn SolutionPage() -> impl IntoView {
    let data = use_cached_content(api::fetch_solution);

    view! {
        <div class="page page--solution">
            {move || match data.get() {
                Some(solution) => view! { <SolutionContent solution=solution/> }.into_any(),
                None => view! { <LoadingSpinner/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn SolutionContent(solution: SolutionDetails) -> impl IntoView {
    let SolutionDetails { industries, use_cases, impact } = solution;
    let cards = use_cases.clone();

    view! {
        <PageHeader title="Real-World Solutions" tagline="How RoboGuard is transforming safety and security"/>
        <BulletList heading="Industries We Serve" items=industries/>
        <section class="content-section">
            <h3 class="content-section__title">"Use Cases"</h3>
            <div class="feature-grid">
                {cards
                    .into_iter()
                    .map(|case| {
                        view! {
                            <div class="feature-card">
                                <h4>{case.title}</h4>
                                <p>{case.scenario}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
        <BulletList heading="Our Impact" items=impact/>
        <section class="teaser">
            <Testimonials use_cases=use_cases/>
            <a href="/product" class="btn btn--primary">
                "Back to Product Overview"
            </a>
        </section>
    }
}

#[component]
fn Testimonials(use_cases: Vec<UseCase>) -> impl IntoView {
    let len = use_cases.len();
    let index = RwSignal::new(0_usize);
    let slides = StoredValue::new(use_cases);

    view! {
        <div class="carousel" role="region" aria-roledescription="carousel" aria-label="Customer testimonials">
            <button
                class="carousel__nav"
                type="button"
                aria-label="Previous testimonial"
                disabled=move || index.get() == 0
                on:click=move |_| index.update(|i| *i = carousel_step(*i, len, -1))
            >
                "\u{2039}"
            </button>
            {move || {
                slides
                    .with_value(|cases| cases.get(index.get()).cloned())
                    .map(|case| {
                        view! {
                            <div class="carousel__slide" aria-roledescription="slide">
                                <h3>{case.name}</h3>
                                <p>{case.description}</p>
                            </div>
                        }
                    })
            }}
            <button
                class="carousel__nav"
                type="button"
                aria-label="Next testimonial"
                disabled=move || index.get() + 1 >= len
                on:click=move |_| index.update(|i| *i = carousel_step(*i, len, 1))
            >
                "\u{203A}"
            </button>
        </div>
    }
}
