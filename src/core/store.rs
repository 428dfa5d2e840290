//! In-memory record storage
//!
//! One [`MemoryStore`] backs each resource type for the lifetime of the
//! process. The store is cloneable (clones share the same records) and is
//! injected into the router state at startup, so tests get an isolated
//! store per server instead of sharing process-wide globals.

use crate::core::error::ApiError;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Insertion-ordered, id-keyed record collection.
///
/// `IndexMap` gives direct key lookup while keeping `list` in insertion
/// order. The `RwLock` makes individual operations atomic; there is
/// deliberately no cross-request versioning — concurrent writers to the
/// same record are last-write-wins.
#[derive(Clone)]
pub struct MemoryStore<T> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Clone> MemoryStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// All records, in insertion order.
    pub fn list(&self) -> Result<Vec<T>, ApiError> {
        let records = self.records.read()?;
        Ok(records.values().cloned().collect())
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Result<Option<T>, ApiError> {
        let records = self.records.read()?;
        Ok(records.get(id).cloned())
    }

    /// Append a new record under `id`.
    pub fn insert(&self, id: String, record: T) -> Result<(), ApiError> {
        let mut records = self.records.write()?;
        records.insert(id, record);
        Ok(())
    }

    /// Replace the record stored under `id`, keeping its position.
    ///
    /// Returns `false` when no record with that id exists.
    pub fn update(&self, id: &str, record: T) -> Result<bool, ApiError> {
        let mut records = self.records.write()?;
        match records.get_mut(id) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove and return the record stored under `id`.
    ///
    /// Remaining records keep their relative order.
    pub fn remove(&self, id: &str) -> Result<Option<T>, ApiError> {
        let mut records = self.records.write()?;
        Ok(records.shift_remove(id))
    }
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
