use std::cell::RefCell;
use std::collections::HashMap;

/// A value object that can be stored in an [`EntityCache`] under its identifier.
pub trait Entity: Clone {
    /// Returns the identifier the entity is cached under.
    fn id(&self) -> &str;
}

/// Cache trait for storing and retrieving entities by identifier.
///
/// Implementations take `&self` so a use case can hold a shared reference to
/// the cache while the caller keeps inspecting it.
pub trait EntityCache<T: Entity> {
    /// Retrieves a cached entity for the given identifier.
    ///
    /// # Arguments
    /// * `id` - The identifier to look up
    ///
    /// # Returns
    /// * `Some(T)` - The cached entity if present
    /// * `None` - If nothing has been cached under `id`
    fn get(&self, id: &str) -> Option<T>;

    /// Stores an entity under its own identifier, replacing any previous entry.
    fn put(&self, entity: T);
}

impl<T: Entity, C: EntityCache<T> + ?Sized> EntityCache<T> for &C {
    fn get(&self, id: &str) -> Option<T> {
        (**self).get(id)
    }

    fn put(&self, entity: T) {
        (**self).put(entity)
    }
}

/// InMemoryCache is a `HashMap`-backed implementation of [`EntityCache`].
///
/// Entries never expire; the last write for an identifier wins.
#[derive(Debug)]
pub struct InMemoryCache<T> {
    entries: RefCell<HashMap<String, T>>,
}

impl<T> InMemoryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<T> Default for InMemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityCache<T> for InMemoryCache<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.entries.borrow().get(id).cloned()
    }

    fn put(&self, entity: T) {
        tracing::debug!("[InMemoryCache] put, id={}", entity.id());
        self.entries
            .borrow_mut()
            .insert(entity.id().to_string(), entity);
    }
}
