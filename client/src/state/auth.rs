//! Sign-in snapshot observed by the navigation bar, protected pages and the
//! login page.
//!
//! `App` seeds a pending `RwSignal<AuthState>` and resolves it from the
//! persisted marker after hydration. From then on the signal changes only
//! through `SessionStore::sign_in`, `sign_up` and `sign_out`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until the persisted session marker has been read
/// in the browser, so guards can tell "not yet known" from "anonymous".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session store has been consulted.
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// State after the session store has been consulted.
    #[must_use]
    pub fn resolved(user: Option<String>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::resolved(None)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
