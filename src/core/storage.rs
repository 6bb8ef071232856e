//! Durable key-value storage for small client preferences.
//!
//! The only value stored today is the remembered login email. Browser builds
//! write to `localStorage`; native builds and tests keep it in memory.

use std::sync::Arc;

use dashmap::DashMap;

/// Storage key for the remembered login email.
pub const REMEMBERED_EMAIL_KEY: &str = "rememberEmail";

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|value| value.clone())
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(feature = "hydrate")]
pub use browser::LocalStore;

#[cfg(feature = "hydrate")]
mod browser {
    use super::KeyValueStore;

    /// `window.localStorage`. Every call degrades to a no-op when storage is
    /// unavailable (private mode, disabled cookies).
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LocalStore;

    impl LocalStore {
        fn storage() -> Option<web_sys::Storage> {
            web_sys::window()?.local_storage().ok().flatten()
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Option<String> {
            Self::storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if let Some(storage) = Self::storage()
                && storage.set_item(key, value).is_err()
            {
                tracing::warn!("Failed to write {} to local storage", key);
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip_and_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);

        store.set(REMEMBERED_EMAIL_KEY, "ada@example.com");
        assert_eq!(
            store.get(REMEMBERED_EMAIL_KEY).as_deref(),
            Some("ada@example.com")
        );

        store.remove(REMEMBERED_EMAIL_KEY);
        assert_eq!(store.get(REMEMBERED_EMAIL_KEY), None);
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }
}
