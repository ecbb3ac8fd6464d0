use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Key-value persistence seam for client-held state.
///
/// Synchronous on purpose: the browser's localStorage is synchronous, and the
/// session record is a single small string.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory StorageBackend for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let backend = MemoryBackend::new();
        assert!(backend.get("k").is_none());

        backend.set("k", "v1");
        assert_eq!(backend.get("k").as_deref(), Some("v1"));

        backend.set("k", "v2");
        assert_eq!(backend.get("k").as_deref(), Some("v2"));

        backend.remove("k");
        assert!(backend.get("k").is_none());
    }

    #[test]
    fn test_clones_share_entries() {
        let backend = MemoryBackend::new();
        let other = backend.clone();
        backend.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }
}
