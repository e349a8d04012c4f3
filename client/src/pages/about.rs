//! Company background: mission, story, and values.

use leptos::prelude::*;

use crate::components::content::{FeatureGrid, PageHeader};
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::api;
use crate::net::cache::use_cached_content;

#[component]
pub fn AboutPage() -> impl IntoView {
    let data = use_cached_content(api::fetch_about);

    view! {
        <div class="page page--about">
            <PageHeader title="About Anscer Robotics" tagline="Autonomous security, built for the real world"/>
            {move || match data.get() {
                Some(about) => {
                    view! {
                        <section class="content-section">
                            <h3 class="content-section__title">"Our Mission"</h3>
                            <p class="content-section__body">{about.mission}</p>
                        </section>
                        <section class="content-section">
                            <h3 class="content-section__title">"Our Story"</h3>
                            <p class="content-section__body">{about.story}</p>
                        </section>
                        <FeatureGrid heading="What We Value" features=about.values/>
                    }
                        .into_any()
                }
                None => view! { <LoadingSpinner/> }.into_any(),
            }}
            <section class="teaser">
                <a href="/product" class="btn btn--primary">
                    "Meet Robotics Guard"
                </a>
            </section>
        </div>
    }
}
