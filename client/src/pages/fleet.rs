//! Fleet overview, shown behind the login gate.

use leptos::prelude::*;

use crate::components::content::{BulletList, PageHeader};
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::protected::Protected;
use crate::net::api;
use crate::net::cache::use_cached_content;
use crate::net::types::FleetData;

#[component]
pub fn FleetPage() -> impl IntoView {
    view! {
        <Protected>
            <FleetLoader/>
        </Protected>
    }
}

#[component]
fn FleetLoader() -> impl IntoView {
    let data = use_cached_content(api::fetch_fleet);

    view! {
        <div class="page page--fleet">
            {move || match data.get() {
                Some(fleet) => view! { <FleetContent fleet=fleet/> }.into_any(),
                None => view! { <LoadingSpinner/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn FleetContent(fleet: FleetData) -> impl IntoView {
    let FleetData { title, intro, roboguard_role, benefits, image_url } = fleet;

    view! {
        <PageHeader title=title tagline="The Future of Autonomous Security"/>
        <section class="split">
            <div class="split__text">
                <h2>"The Rise of Autonomous Security"</h2>
                <p>{intro}</p>
            </div>
            <div class="split__media">
                <img src=image_url alt="Fleet of Robots"/>
            </div>
        </section>
        <section class="content-section">
            <h3 class="content-section__title">"Robotics Guard Role in Fleet-Based Security"</h3>
            <p class="content-section__body">{roboguard_role}</p>
        </section>
        <BulletList heading="Benefits of Fleet-Based Security" items=benefits/>
        <section class="teaser">
            <a href="/product" class="btn btn--primary" aria-label="Discover Robotics Guard">
                "Discover Robotics Guard"
            </a>
        </section>
    }
}
