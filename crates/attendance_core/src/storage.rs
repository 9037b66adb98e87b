//! Durable key-value storage seam. The browser implementation is backed by
//! `localStorage`; tests use [`MemoryStore`]. Records are plain JSON and are
//! trusted at face value once they parse.

use crate::error::AttendError;
use serde::{Serialize, de::DeserializeOwned};
use std::{cell::RefCell, collections::HashMap, rc::Rc};
use tracing::warn;

/// Storage key for the last verified location.
pub const LOCATION_KEY: &str = "location";
/// Storage key for the teacher's attendance window.
pub const TIMER_KEY: &str = "attendanceTimer";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns an error when the backing store rejects the write (quota, private mode).
    fn set(&self, key: &str, value: &str) -> Result<(), AttendError>;

    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AttendError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AttendError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AttendError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Reads a JSON record. A record that fails to parse is removed and reported as absent.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, "discarding malformed stored record: {err}");
            store.remove(key);
            None
        }
    }
}

/// # Errors
/// Returns an error if the value cannot be encoded or the store rejects the write.
pub fn save_json<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), AttendError> {
    let raw = serde_json::to_string(value)
        .map_err(|err| AttendError::Storage(format!("Failed to encode {key}: {err}")))?;
    store.set(key, &raw)
}
