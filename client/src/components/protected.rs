//! Wrapper that renders its children only for a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated page mounts inside `Protected`, which installs the route guard
//! against the current location and shows a placeholder while the session is
//! unknown or a redirect is in flight.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::guard::{install_unauth_redirect, requested_path};

#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    install_unauth_redirect(
        auth,
        move || requested_path(&location.pathname.get(), &location.search.get()),
        navigate,
    );

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="guard-pending">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
