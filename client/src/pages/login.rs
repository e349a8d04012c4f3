//! Login page with sign-in and sign-up modes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or through the route guard with a `redirect` query
//! parameter. The page only writes the session; the authed-redirect effect
//! notices the new user and navigates to the preserved path, so a visitor
//! who is already signed in is forwarded the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::util::guard::{REDIRECT_PARAM, install_authed_redirect};

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

const USERNAME_TOO_SHORT: &str = "Username must be at least 3 characters";
const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginMode {
    SignIn,
    SignUp,
}

/// Validated form input, username trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Per-field validation messages shown under the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

fn check_lengths(username: &str, password: &str) -> FieldErrors {
    FieldErrors {
        username: (username.chars().count() < MIN_USERNAME_CHARS).then_some(USERNAME_TOO_SHORT),
        password: (password.chars().count() < MIN_PASSWORD_CHARS).then_some(PASSWORD_TOO_SHORT),
        confirm_password: None,
    }
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login_input(username: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let username = username.trim();
    let errors = check_lengths(username, password);
    if errors.is_empty() {
        Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Validate the sign-up form, including the password confirmation.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_signup_input(username: &str, password: &str, confirm: &str) -> Result<Credentials, FieldErrors> {
    let username = username.trim();
    let mut errors = check_lengths(username, password);
    if password != confirm {
        errors.confirm_password = Some(PASSWORD_MISMATCH);
    }
    if errors.is_empty() {
        Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let store = expect_context::<SessionStore>();
    let query = use_query_map();
    let redirect = move || query.with(|q| q.get(REDIRECT_PARAM));

    install_authed_redirect(auth, redirect, use_navigate());

    let mode = RwSignal::new(LoginMode::SignIn);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let field_errors = RwSignal::new(FieldErrors::default());
    let error = RwSignal::new(None::<String>);

    let switch_mode = move |next: LoginMode| {
        mode.set(next);
        field_errors.set(FieldErrors::default());
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        let outcome = match mode.get_untracked() {
            LoginMode::SignIn => validate_login_input(&username.get_untracked(), &password.get_untracked())
                .map(|c| store.sign_in(auth, &c.username, &c.password)),
            LoginMode::SignUp => {
                validate_signup_input(&username.get_untracked(), &password.get_untracked(), &confirm.get_untracked())
                    .map(|c| store.sign_up(auth, &c.username, &c.password))
            }
        };
        match outcome {
            Err(fields) => field_errors.set(fields),
            Ok(result) => {
                field_errors.set(FieldErrors::default());
                if let Err(e) = result {
                    error.set(Some(e.to_string()));
                }
            }
        }
    };

    let password_type = move || if show_password.get() { "text" } else { "password" };
    let mode_class = move |target: LoginMode| {
        if mode.get() == target { "login-mode__button login-mode__button--active" } else { "login-mode__button" }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Dashboard Access"</h1>
                <Show when=move || redirect().is_some() && mode.get() == LoginMode::SignIn>
                    <p class="login-message login-message--notice">"You must log in to access that page."</p>
                </Show>
                {move || error.get().map(|message| view! { <p class="login-message login-message--error" role="alert">{message}</p> })}

                <div class="login-mode">
                    <button type="button" class=move || mode_class(LoginMode::SignIn) on:click=move |_| switch_mode(LoginMode::SignIn)>
                        "Sign In"
                    </button>
                    <button type="button" class=move || mode_class(LoginMode::SignUp) on:click=move |_| switch_mode(LoginMode::SignUp)>
                        "Sign Up"
                    </button>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-username">"Username"</label>
                    <input
                        id="login-username"
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Enter username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().username.map(|m| view! { <p class="field-error">{m}</p> })}

                    <label class="login-label" for="login-password">"Password"</label>
                    <div class="login-password">
                        <input
                            id="login-password"
                            class="login-input"
                            type=password_type
                            autocomplete="current-password"
                            placeholder="Enter password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button
                            type="button"
                            class="login-password__toggle"
                            aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    {move || field_errors.get().password.map(|m| view! { <p class="field-error">{m}</p> })}

                    <Show when=move || mode.get() == LoginMode::SignUp>
                        <label class="login-label" for="login-confirm">"Confirm Password"</label>
                        <input
                            id="login-confirm"
                            class="login-input"
                            type=password_type
                            autocomplete="new-password"
                            placeholder="Confirm password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        {move || field_errors.get().confirm_password.map(|m| view! { <p class="field-error">{m}</p> })}
                    </Show>

                    <button class="login-button" type="submit">
                        {move || match mode.get() {
                            LoginMode::SignIn => "Login",
                            LoginMode::SignUp => "Sign Up",
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
