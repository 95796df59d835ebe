//! In-memory store fake.
//!
//! Backs tests and ephemeral sessions with the same contract as the
//! durable store. Single-threaded by design, matching the core's
//! synchronous execution model.

use super::{Store, StoreResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// `BTreeMap`-backed store with no durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Store for MemoryStore {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::store::Store;

    #[test]
    fn read_write_remove_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.read("users").unwrap(), None);

        store.write("users", "[]").unwrap();
        assert_eq!(store.read("users").unwrap().as_deref(), Some("[]"));

        store.remove("users").unwrap();
        assert_eq!(store.read("users").unwrap(), None);

        // Removing an absent key stays a no-op.
        store.remove("users").unwrap();
    }
}
