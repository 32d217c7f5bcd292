/// Key-value persistence over chrome.storage.local
///
/// The popup stores exactly two keys, read and written by name. The store is
/// behind a trait so tests can substitute an in-memory fake.
use async_trait::async_trait;
use thiserror::Error;

/// Storage key for the GitHub username (echoed back into the form)
pub const USERNAME_KEY: &str = "githubUsername";

/// Storage key for the personal access token (write-only; never re-displayed)
pub const TOKEN_KEY: &str = "githubToken";

/// A storage write failed at the browser boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("storage write failed: {0}")]
pub struct StoreError(pub String);

/// Persistent, asynchronous key-value store scoped to the extension install
#[async_trait(?Send)]
pub trait KeyValueStore {
    /// Read a key; missing or unreadable keys are absent, not failures
    async fn get(&self, key: &str) -> Option<String>;

    /// Write a key
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(target_arch = "wasm32")]
mod chrome {
    use async_trait::async_trait;
    use wasm_bindgen::prelude::*;

    use super::{KeyValueStore, StoreError};

    // Import JS bridge functions
    #[wasm_bindgen(module = "/storage.js")]
    extern "C" {
        #[wasm_bindgen(catch)]
        async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        async fn setStorage(key: &str, value: &str) -> Result<(), JsValue>;
    }

    /// chrome.storage.local reached through the JS bridge
    pub struct ChromeStorage;

    #[async_trait(?Send)]
    impl KeyValueStore for ChromeStorage {
        async fn get(&self, key: &str) -> Option<String> {
            match getStorage(key).await {
                Ok(value) => value.as_string(),
                Err(err) => {
                    log::warn!("storage read for {key} failed: {err:?}");
                    None
                }
            }
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            setStorage(key, value)
                .await
                .map_err(|err| StoreError(format!("{err:?}")))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use chrome::ChromeStorage;

/// In-memory store for host-side tests
#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::{KeyValueStore, StoreError};

    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
        fail_writes: bool,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(key: &str, value: &str) -> Self {
            let store = Self::new();
            store
                .entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            store
        }

        pub fn failing() -> Self {
            Self {
                entries: RefCell::new(HashMap::new()),
                fail_writes: true,
            }
        }

        pub fn value(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        pub fn len(&self) -> usize {
            self.entries.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError("simulated write failure".to_string()));
            }
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::memory::MemoryStore;
    use super::*;

    #[test]
    fn test_get_missing_key_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(block_on(store.get(TOKEN_KEY)), None);
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();

        block_on(store.set(USERNAME_KEY, "alice")).unwrap();

        assert_eq!(block_on(store.get(USERNAME_KEY)), Some("alice".to_string()));
    }

    #[test]
    fn test_overwrite_on_re_save() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "old");

        block_on(store.set(TOKEN_KEY, "new")).unwrap();

        assert_eq!(block_on(store.get(TOKEN_KEY)), Some("new".to_string()));
    }

    #[test]
    fn test_failing_store_reports_error() {
        let store = MemoryStore::failing();

        let result = block_on(store.set(TOKEN_KEY, "tok"));

        assert!(result.is_err());
        assert_eq!(store.len(), 0);
    }
}
