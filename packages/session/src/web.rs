//! # localStorage backend for browser-side session persistence
//!
//! [`LocalStorageBackend`] is the [`StorageBackend`] used on the web
//! platform. All failures are swallowed: a missing `window`, disabled
//! storage, or a quota error degrades to "no stored session" rather than
//! crashing the UI. The authoritative identity always lives on the server;
//! local storage only caches the proof of login.

use crate::backend::StorageBackend;

/// Browser localStorage backend. Zero-size; every call re-resolves the
/// storage handle from the current window.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
