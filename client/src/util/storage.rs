//! Storage backends for the persisted session marker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session store writes one string through a `SessionStorage` so it can
//! run against `localStorage` in the browser and an in-memory slot during SSR
//! and tests.
//!
//! TRADE-OFFS
//! ==========
//! Browser persistence is best-effort: a missing window or a storage quota
//! error degrades to "no session" instead of surfacing an error to the UI.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::{Arc, Mutex, PoisonError};

/// `localStorage` key holding the signed-in username.
pub const SESSION_STORAGE_KEY: &str = "anscer_auth_user";

/// Key/value slot the session store persists its marker in.
pub trait SessionStorage: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
    fn remove(&self);
}

/// `localStorage`-backed slot. Only functional with the `hydrate` feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserStorage {
    key: &'static str,
}

impl BrowserStorage {
    #[must_use]
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[cfg(feature = "hydrate")]
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl SessionStorage for BrowserStorage {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::local_storage()?.get_item(self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = Self::local_storage() else {
                return;
            };
            if storage.set_item(self.key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for {}", self.key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.key, value);
        }
    }

    fn remove(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = Self::local_storage() {
                let _ = storage.remove_item(self.key);
            }
        }
    }
}

/// Process-local slot. Clones share the same value, which is how tests
/// simulate a page reload over the same storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self { slot: Arc::new(Mutex::new(Some(value.to_owned()))) }
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, value: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_owned());
    }

    fn remove(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Backend used by the application root: `localStorage` in the browser,
/// memory elsewhere.
pub fn default_backend() -> Arc<dyn SessionStorage> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(BrowserStorage::new(SESSION_STORAGE_KEY))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryStorage::default())
    }
}
