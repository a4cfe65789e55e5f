//! Concurrent handle registry.
//!
//! Maps caller-chosen string ids to opaque handles (controllers, sessions,
//! anything a request handler creates and later looks up again). One mutex
//! guards the whole map and is held only for a single lookup, insert or
//! removal, so the four operations are linearizable.
//!
//! The registry only stores the mapping. Whoever removes an entry with
//! [`HandleRegistry::del`] receives the handle and is responsible for
//! releasing whatever it refers to.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

/// Thread-safe map from id to handle.
#[derive(Debug)]
pub struct HandleRegistry<H> {
    handles: Mutex<HashMap<String, H>>,
}

impl<H> Default for HandleRegistry<H> {
    fn default() -> Self {
        Self {
            handles: Mutex::new(HashMap::new()),
        }
    }
}

impl<H: Clone> HandleRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `handle` under `id` unless the id is already taken.
    ///
    /// Returns `false` and leaves the existing entry untouched if `id` is
    /// present; the caller's handle was not stored in that case.
    pub fn add(&self, id: impl Into<String>, handle: H) -> bool {
        let mut handles = self.lock();
        match handles.entry(id.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    /// A copy of the handle stored under `id`, leaving the entry in place.
    pub fn get(&self, id: &str) -> Option<H> {
        self.lock().get(id).cloned()
    }

    /// Remove the entry for `id` and return its handle.
    ///
    /// Concurrent callers racing to delete the same id see the handle
    /// exactly once; every other caller gets `None`.
    pub fn del(&self, id: &str) -> Option<H> {
        self.lock().remove(id)
    }

    // Every operation leaves the map consistent before it can panic, so a
    // poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, H>> {
        self.handles
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}
