//! Site-wide navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. Public links are always shown; the gated
//! links and the logout button appear only once the session store has a
//! user. Below the desktop breakpoint the links collapse into a toggled menu.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionStore;

/// Links shown to every visitor, in display order.
pub const PUBLIC_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/product", "Product"),
    ("/solution", "Solution"),
    ("/details", "Details"),
];

/// Links shown only with an active session.
pub const MEMBER_LINKS: &[(&str, &str)] = &[("/dashboard", "Dashboard"), ("/fleet", "Fleet")];

/// Where the nav bar logout lands.
pub const LOGOUT_TARGET: &str = "/";

/// Accessible label for the mobile menu toggle.
pub fn menu_toggle_label(open: bool) -> &'static str {
    if open { "Close menu" } else { "Open menu" }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let on_logout = Callback::new(move |()| {
        store.sign_out(auth);
        menu_open.set(false);
        navigate(LOGOUT_TARGET, NavigateOptions::default());
    });

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__inner">
                <a href="/" class="nav-bar__brand">
                    "Anscer Robotics"
                </a>
                <div class="nav-bar__links">
                    <NavLinks auth=auth on_logout=on_logout/>
                </div>
                <button
                    class="nav-bar__toggle"
                    type="button"
                    aria-label=move || menu_toggle_label(menu_open.get())
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="nav-bar__mobile" on:click=move |_| menu_open.set(false)>
                    <NavLinks auth=auth on_logout=on_logout/>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLinks(auth: RwSignal<AuthState>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        {PUBLIC_LINKS
            .iter()
            .map(|&(href, label)| {
                view! {
                    <a href=href class="nav-bar__link">
                        {label}
                    </a>
                }
            })
            .collect_view()}
        <Show
            when=move || auth.get().is_authenticated()
            fallback=|| {
                view! {
                    <a href="/login" class="nav-bar__link">
                        "Login"
                    </a>
                }
            }
        >
            {MEMBER_LINKS
                .iter()
                .map(|&(href, label)| {
                    view! {
                        <a href=href class="nav-bar__link">
                            {label}
                        </a>
                    }
                })
                .collect_view()}
            <button class="btn btn--danger nav-bar__logout" type="button" on:click=move |_| on_logout.run(())>
                "Log Out"
            </button>
        </Show>
    }
}
