//! Product overview: hero, feature cards, and roadmap.

use leptos::prelude::*;

use crate::components::content::{BulletList, FeatureGrid, PageHeader};
use crate::components::loading_spinner::LoadingSpinner;
use crate::net::api;
use crate::net::cache::use_cached_content;
use crate::net::types::ProductDetails;

#[component]
pub fn ProductPage() -> impl IntoView {
    let data = use_cached_content(api::fetch_product);

    view! {
        <div class="page page--product">
            {move || match data.get() {
                Some(product) => view! { <ProductContent product=product/> }.into_any(),
                None => view! { <LoadingSpinner/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductContent(product: ProductDetails) -> impl IntoView {
    let ProductDetails { name, tagline, description, image_url, features, key_features, future_improvements } = product;

    view! {
        <PageHeader title=name.clone() tagline=tagline/>
        <section class="split">
            <div class="split__text">
                <h2>"Meet " {name.clone()}</h2>
                <p>{description}</p>
                <a href="/details" class="btn btn--primary" aria-label="Explore Robotics Guard features">
                    "Explore Features"
                </a>
            </div>
            <div class="split__media">
                <img src=image_url alt=name/>
            </div>
        </section>
        <FeatureGrid heading="Product Details" features=features/>
        <BulletList heading="Key Features" items=key_features/>
        <BulletList heading="Future Improvements" items=future_improvements/>
        <section class="teaser">
            <a href="/solution" class="btn">
                "See it in the field"
            </a>
        </section>
    }
}
