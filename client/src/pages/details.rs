//! Technical deep-dive behind the product overview.

use leptos::prelude::*;

use crate::components::content::{BulletList, FeatureGrid, PageHeader};
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::api;
use crate::net::cache::use_cached_content;

#[component]
pub fn DetailsPage() -> impl IntoView {
    let data = use_cached_content(api::fetch_details);

    view! {
        <div class="page page--details">
            <PageHeader title="Robotics Guard Details" tagline="Dig deeper into the tech that powers Robotics Guard"/>
            {move || match data.get() {
                Some(details) => {
                    view! {
                        <FeatureGrid heading="Extended Features" features=details.extended_features/>
                        <BulletList heading="Technology Stack" items=details.technology_stack/>
                        <BulletList heading="Security Protocols" items=details.security_protocols/>
                    }
                        .into_any()
                }
                None => view! { <LoadingSpinner/> }.into_any(),
            }}
            <section class="teaser">
                <a href="/product" class="btn btn--primary">
                    "Back to Overview"
                </a>
            </section>
        </div>
    }
}
