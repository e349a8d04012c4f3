//! Session store: the single persisted authentication marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at the application root and shared through context. Login
//! writes the username, logout clears it, and `current_user` re-reads storage
//! so a reload restores the session. Callers mirror the result into the
//! observable `RwSignal<AuthState>` with [`SessionStore::sign_in`] and
//! [`SessionStore::sign_out`].
//!
//! All operations are synchronous and local to storage. Gating built on this
//! is advisory: anyone can write the storage key by hand.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use super::auth::AuthState;
use super::credentials::{AuthError, CredentialVerifier};
use crate::util::storage::SessionStorage;

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { storage, verifier }
    }

    /// Verify the pair and persist `username` on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when the verifier rejects the
    /// pair; storage is left untouched.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if !self.verifier.verify(username, password) {
            leptos::logging::warn!("login rejected for {username:?}");
            return Err(AuthError::InvalidCredentials);
        }
        self.storage.save(username);
        leptos::logging::log!("session started for {username:?}");
        Ok(username.to_owned())
    }

    /// Register through the verifier and persist `username` on success.
    ///
    /// # Errors
    ///
    /// Propagates the verifier's registration error; storage is left
    /// untouched.
    pub fn signup(&self, username: &str, password: &str) -> Result<String, AuthError> {
        self.verifier.register(username, password)?;
        self.storage.save(username);
        leptos::logging::log!("account created for {username:?}");
        Ok(username.to_owned())
    }

    /// Clear the persisted marker. Always succeeds, safe to repeat.
    pub fn logout(&self) {
        self.storage.remove();
    }

    /// Read the persisted marker. Blank values count as no session.
    #[must_use]
    pub fn current_user(&self) -> Option<String> {
        self.storage.load().filter(|user| !user.trim().is_empty())
    }

    /// [`Self::login`] and publish the new user to `auth`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::login`]; `auth` is not modified on failure.
    pub fn sign_in(&self, auth: RwSignal<AuthState>, username: &str, password: &str) -> Result<(), AuthError> {
        let user = self.login(username, password)?;
        auth.set(AuthState::resolved(Some(user)));
        Ok(())
    }

    /// [`Self::signup`] and publish the new user to `auth`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::signup`]; `auth` is not modified on failure.
    pub fn sign_up(&self, auth: RwSignal<AuthState>, username: &str, password: &str) -> Result<(), AuthError> {
        let user = self.signup(username, password)?;
        auth.set(AuthState::resolved(Some(user)));
        Ok(())
    }

    /// [`Self::logout`] and publish the anonymous state to `auth`.
    pub fn sign_out(&self, auth: RwSignal<AuthState>) {
        self.logout();
        auth.set(AuthState::anonymous());
    }
}
