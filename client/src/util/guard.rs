//! Route guard for the gated dashboard area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages consult the observable auth state on every navigation. An
//! anonymous visitor is sent to `/login?redirect=<requested path>`, and the
//! login page sends an authenticated visitor on to the preserved path.
//! Decisions are pure functions; the `install_*` helpers wire them to Leptos
//! effects and the router.
//!
//! The guard is advisory. It hides views, it does not protect data.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
/// Where a successful login lands when no usable `redirect` was preserved.
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";
/// Query parameter carrying the originally requested path.
pub const REDIRECT_PARAM: &str = "redirect";

const PROTECTED_ROOTS: &[&str] = &["/dashboard", "/fleet", "/filter", "/robots", "/nodes"];

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested view.
    Allow,
    /// The session has not been read yet; render a placeholder.
    Pending,
    /// Navigate to the contained target instead.
    Redirect(String),
}

fn path_only(target: &str) -> &str {
    target.split(['?', '#']).next().unwrap_or(target)
}

/// Whether `path` (query and fragment ignored) is behind the login gate.
pub fn is_protected(path: &str) -> bool {
    let path = path_only(path).trim_end_matches('/');
    PROTECTED_ROOTS.iter().any(|root| {
        path == *root || path.strip_prefix(root).is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Join router location parts into the path preserved across login.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{search}")
    }
}

/// Login URL that remembers `requested` for the post-login redirect.
pub fn login_redirect(requested: &str) -> String {
    format!("{LOGIN_PATH}?{REDIRECT_PARAM}={}", urlencoding::encode(requested))
}

/// Decide whether `requested` may render for `auth`.
pub fn check_route(requested: &str, auth: &AuthState) -> GuardDecision {
    if !is_protected(requested) || auth.is_authenticated() {
        return GuardDecision::Allow;
    }
    if auth.loading {
        return GuardDecision::Pending;
    }
    GuardDecision::Redirect(login_redirect(requested))
}

/// Same-site absolute path that is not the login page itself.
///
/// URL parsers strip tab and newline before resolving, so any control or
/// whitespace character could turn `/\t/host` into a protocol-relative URL.
pub fn is_safe_return_path(target: &str) -> bool {
    target.starts_with('/')
        && !target.starts_with("//")
        && !target.contains('\\')
        && !target.chars().any(|c| c.is_control() || c.is_whitespace())
        && path_only(target).trim_end_matches('/') != LOGIN_PATH
}

/// Resolve the preserved `redirect` value into a navigation target.
pub fn post_login_target(redirect: Option<&str>) -> String {
    redirect
        .map(str::trim)
        .filter(|target| is_safe_return_path(target))
        .unwrap_or(DEFAULT_LANDING_PATH)
        .to_owned()
}

/// Decide whether the login page should render or forward an authenticated
/// visitor.
pub fn check_login_route(auth: &AuthState, redirect: Option<&str>) -> GuardDecision {
    if auth.is_authenticated() {
        GuardDecision::Redirect(post_login_target(redirect))
    } else {
        GuardDecision::Allow
    }
}

fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<R, F>(auth: RwSignal<AuthState>, requested: R, navigate: F)
where
    R: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let GuardDecision::Redirect(target) = check_route(&requested(), &state) {
            navigate(&target, replace_history());
        }
    });
}

/// Forward away from `/login` once a user is present.
pub fn install_authed_redirect<R, F>(auth: RwSignal<AuthState>, redirect: R, navigate: F)
where
    R: Fn() -> Option<String> + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let GuardDecision::Redirect(target) = check_login_route(&state, redirect().as_deref()) {
            navigate(&target, replace_history());
        }
    });
}
