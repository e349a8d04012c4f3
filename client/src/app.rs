//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the composition root: it builds the session store from its
//! storage backend and credential verifier, seeds the observable auth state,
//! and hands both to the page tree through Leptos context.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::net::cache::ContentCache;
use crate::pages::{
    about::AboutPage,
    dashboard::DashboardPage,
    details::DetailsPage,
    fleet::FleetPage,
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    product::ProductPage,
    robots::{FleetNodePage, RobotFilterPage, RobotTypePage},
    solution::SolutionPage,
};
use crate::state::auth::AuthState;
use crate::state::credentials::FixedCredentials;
use crate::state::session::SessionStore;
use crate::util::storage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and auth state contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(storage::default_backend(), Arc::new(FixedCredentials::default()));
    let auth = RwSignal::new(AuthState::pending());

    // Effects only run in the browser, so SSR keeps the pending state and the
    // persisted marker is read once after hydration.
    let store_init = store.clone();
    Effect::new(move || {
        auth.set(AuthState::resolved(store_init.current_user()));
    });

    provide_context(store);
    provide_context(auth);
    provide_context(ContentCache::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/anscer-site.css"/>
        <Title text="Anscer Robotics"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("product") view=ProductPage/>
                    <Route path=StaticSegment("solution") view=SolutionPage/>
                    <Route path=StaticSegment("details") view=DetailsPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("fleet") view=FleetPage/>
                    <Route path=StaticSegment("filter") view=RobotFilterPage/>
                    <Route path=(StaticSegment("robots"), ParamSegment("type")) view=RobotTypePage/>
                    <Route path=(StaticSegment("nodes"), ParamSegment("node")) view=FleetNodePage/>
                </Routes>
            </main>
        </Router>
    }
}
