use crate::data::{Entity, EntityCache, InMemoryCache};

use super::CallLog;

/// Cache double that stores entities and records every read and write.
///
/// Entries added through [`RecordingCache::seed`] are not counted as writes,
/// so a test can pre-populate the cache and still assert that the use case
/// itself never wrote to it.
#[derive(Debug)]
pub struct RecordingCache<T: Entity> {
    store: InMemoryCache<T>,
    reads: CallLog<String>,
    writes: CallLog<T>,
}

impl<T: Entity> RecordingCache<T> {
    pub fn new() -> Self {
        Self {
            store: InMemoryCache::new(),
            reads: CallLog::new(),
            writes: CallLog::new(),
        }
    }

    pub fn seed(&self, entity: T) {
        self.store.put(entity);
    }

    /// Identifiers passed to `get`, in call order.
    pub fn reads(&self) -> Vec<String> {
        self.reads.calls()
    }

    /// Entities passed to `put`, in call order.
    pub fn writes(&self) -> Vec<T> {
        self.writes.calls()
    }

    /// Total number of `get` and `put` calls.
    pub fn interactions(&self) -> usize {
        self.reads.count() + self.writes.count()
    }

    pub fn cached(&self, id: &str) -> Option<T> {
        self.store.get(id)
    }
}

impl<T: Entity> Default for RecordingCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityCache<T> for RecordingCache<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.reads.record(id.to_string());
        self.store.get(id)
    }

    fn put(&self, entity: T) {
        self.writes.record(entity.clone());
        self.store.put(entity);
    }
}
