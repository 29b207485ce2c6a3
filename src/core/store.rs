//! In-memory record stores with process-unique id assignment
//!
//! Each resource type owns one [`RecordStore`]: an ordered collection behind
//! its own lock, so interleaved requests never race on append/remove. Stores
//! are injected into the application state rather than living as globals,
//! which keeps test instances isolated from one another.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::error::{ApiError, NotFoundError};

/// The resource a record (or a failure message) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Dish,
    Order,
}

impl Resource {
    /// Capitalized noun used in client-facing messages
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Dish => "Dish",
            Resource::Order => "Order",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A record that can live in a [`RecordStore`]
pub trait Record: Clone + Send + Sync + 'static {
    /// Which resource this record type belongs to
    const RESOURCE: Resource;

    /// The record's identity, assigned once at creation and never changed
    fn id(&self) -> &str;
}

/// Ordered in-memory collection of records of one resource type
///
/// Ids are monotonically increasing integers rendered as strings; an id is
/// never reused after deletion. Cloning the store clones the handle, not the
/// collection.
#[derive(Clone)]
pub struct RecordStore<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
    next_id: Arc<AtomicU64>,
}

impl<T: Record> RecordStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a store seeded with existing records
    ///
    /// The id counter starts above the highest numeric seed id so freshly
    /// assigned ids stay unique.
    pub fn with_records(records: Vec<T>) -> Self {
        let highest = records
            .iter()
            .filter_map(|record| record.id().parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self {
            records: Arc::new(RwLock::new(records)),
            next_id: Arc::new(AtomicU64::new(highest)),
        }
    }

    /// Assign a new identity, unique for the lifetime of the process
    pub fn next_id(&self) -> String {
        (self.next_id.fetch_add(1, Ordering::Relaxed) + 1).to_string()
    }

    /// All records in collection order
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    /// First record whose id matches, scanning in collection order
    pub fn find(&self, id: &str) -> Option<T> {
        self.read().iter().find(|record| record.id() == id).cloned()
    }

    /// Append a record at the end of the collection
    pub fn append(&self, record: T) {
        self.write().push(record);
    }

    /// Mutate the matching record in place under the write lock
    ///
    /// Returns the updated record, or `None` if the id is absent.
    pub fn update(&self, id: &str, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let mut records = self.write();
        let record = records.iter_mut().find(|record| record.id() == id)?;
        mutate(record);
        Some(record.clone())
    }

    /// Remove the matching record, preserving the order of the remainder
    pub fn remove(&self, id: &str) -> Option<T> {
        let mut records = self.write();
        let index = records.iter().position(|record| record.id() == id)?;
        Some(records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock only means a panicking writer; the collection itself
    // is still usable, so recover the guard instead of propagating.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Existence check: resolve a route id against a store
///
/// The resolved record flows to the rest of the handler so the read path
/// never performs a second lookup.
pub fn resolve<T: Record>(store: &RecordStore<T>, id: &str) -> Result<T, ApiError> {
    store.find(id).ok_or_else(|| {
        NotFoundError::Record {
            resource: T::RESOURCE,
            id: id.to_string(),
        }
        .into()
    })
}
