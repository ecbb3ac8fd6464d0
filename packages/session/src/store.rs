//! # Session store: the single source of truth for "who is logged in"
//!
//! Persists the authenticated user and their bearer token in client storage
//! under two well-known keys. Purely local: no network calls, and storage
//! failures degrade to an absent session rather than an error.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::backend::StorageBackend;
use crate::roles::Role;

/// Storage key holding the serialized [`AuthUser`].
pub const USER_KEY: &str = "expo_admin_user";
/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "expo_admin_token";

/// Identity of the signed-in operator, as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub username: String,
    pub role: Role,
}

/// Dependency-injected session service. Cloning shares the same backend.
///
/// Lifecycle: login saves a user, logout and 401 handling clear it. The store
/// holds at most one record (a save replaces the prior one).
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Persist the authenticated user, overwriting any prior record.
    pub fn save(&self, user: &AuthUser) {
        match serde_json::to_string(user) {
            Ok(json) => self.backend.set(USER_KEY, &json),
            Err(err) => tracing::error!("failed to serialize auth user: {err}"),
        }
    }

    /// Persist the bearer token presented on authenticated requests.
    pub fn save_token(&self, token: &str) {
        self.backend.set(TOKEN_KEY, token);
    }

    /// The stored user, or `None` when logged out, storage is unavailable,
    /// or the stored record does not parse.
    pub fn get_user(&self) -> Option<AuthUser> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// Remove the stored user and token.
    pub fn clear(&self) {
        self.backend.remove(USER_KEY);
        self.backend.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_user().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryBackend::new()))
    }

    fn admin() -> AuthUser {
        AuthUser {
            id: Some(1),
            email: Some("admin@expo.test".to_string()),
            username: "admin".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_save_then_get_roundtrips() {
        let store = store();
        let user = admin();
        store.save(&user);
        assert_eq!(store.get_user(), Some(user));
    }

    #[test]
    fn test_save_replaces_prior_user() {
        let store = store();
        store.save(&admin());

        let replacement = AuthUser {
            id: Some(2),
            email: None,
            username: "operator".to_string(),
            role: Role::User,
        };
        store.save(&replacement);
        assert_eq!(store.get_user(), Some(replacement));
    }

    #[test]
    fn test_clear_removes_user_and_token() {
        let store = store();
        store.save(&admin());
        store.save_token("tok-123");
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("tok-123"));

        store.clear();
        assert!(store.get_user().is_none());
        assert!(store.token().is_none());
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_is_authenticated_tracks_save_and_clear() {
        let store = store();
        assert!(!store.is_authenticated());
        store.save(&admin());
        assert!(store.is_authenticated());
        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let backend = MemoryBackend::new();
        backend.set(USER_KEY, "{not json");
        let store = SessionStore::new(Arc::new(backend));
        assert!(store.get_user().is_none());
        assert!(!store.is_authenticated());
    }
}
