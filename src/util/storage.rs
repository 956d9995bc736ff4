//! Durable key/value storage for the session token.
//!
//! `BrowserStorage` reads and writes `window.localStorage` and requires a
//! browser environment; outside the `csr` build it behaves as an empty,
//! read-only store. `MemoryStorage` backs tests and non-browser callers.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Errors produced by storage writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota exceeded, private mode).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Persistent key/value storage scoped to the client.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] if the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str);
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("localStorage remove failed for {key}: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage. Clones share the same map, so a test can keep a
/// handle while a store owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry. Seeding is not counted as a write.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage.lock().values.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// Number of `set` calls that reached the map.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    /// Make every subsequent `set` fail, like a full quota would.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        inner.values.insert(key.to_owned(), value.to_owned());
        inner.writes += 1;
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.lock().values.remove(key);
    }
}
