//! Credential verification for the demo login.
//!
//! DESIGN
//! ======
//! The session store never compares passwords itself; it asks an injected
//! `CredentialVerifier`. `FixedCredentials` is the demo stand-in, and a real
//! verifier can replace it at the composition root without touching guards.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// Username accepted by the demo verifier.
pub const DEMO_USERNAME: &str = "user";
/// Password accepted by the demo verifier.
pub const DEMO_PASSWORD: &str = "Password@12";

/// Failures surfaced by login and signup.
///
/// `Display` strings are shown verbatim as the inline form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Signup failed. Username may already exist.")]
    RegistrationUnavailable,
}

/// Capability that decides whether a username/password pair may sign in.
pub trait CredentialVerifier: Send + Sync {
    /// Return `true` when the pair is accepted.
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// The default implementation has no account store and always returns
    /// [`AuthError::RegistrationUnavailable`].
    fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        let _ = (username, password);
        Err(AuthError::RegistrationUnavailable)
    }
}

/// Verifier that accepts exactly one hard-coded pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedCredentials {
    username: String,
    password: String,
}

impl FixedCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl Default for FixedCredentials {
    fn default() -> Self {
        Self::new(DEMO_USERNAME, DEMO_PASSWORD)
    }
}

impl CredentialVerifier for FixedCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
