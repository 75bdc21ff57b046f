use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Flat field map stored per document
pub type Document = HashMap<String, String>;

/// Opaque storage failure
///
/// Carries a reason for logs, but the engine surfaces every storage failure
/// identically as `EngineError::StorageWriteFailed`.
#[derive(Error, Debug)]
#[error("{reason}")]
pub struct StorageError {
    pub reason: String,
}

impl StorageError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// External document store capability
///
/// The engine does not persist data itself; bank links and profile documents
/// go through this narrow read/write interface. One write is issued per
/// submission and its outcome is awaited before success is reported. No retry,
/// no idempotency key, no partial-failure recovery.
///
/// # Example
///
/// ```
/// use rewards_engine::storage::{Document, DocumentStore, InMemoryStore};
///
/// let store = InMemoryStore::new();
///
/// let mut doc = Document::new();
/// doc.insert("university".to_string(), "DePaul University".to_string());
/// store.write("users", "u1", doc).unwrap();
///
/// assert!(store.read("users", "u1").unwrap().is_some());
/// assert!(store.read("users", "u2").unwrap().is_none());
/// ```
pub trait DocumentStore: Send + Sync {
    /// Write a document, replacing any existing one under the same key
    fn write(&self, collection: &str, key: &str, fields: Document) -> Result<(), StorageError>;

    /// Read a document; `Ok(None)` when it does not exist
    fn read(&self, collection: &str, key: &str) -> Result<Option<Document>, StorageError>;
}

/// In-memory document store for tests and single-process sessions
#[derive(Default)]
pub struct InMemoryStore {
    documents: Mutex<HashMap<(String, String), Document>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored in a collection
    pub fn collection_len(&self, collection: &str) -> usize {
        self.documents
            .lock()
            .map(|docs| docs.keys().filter(|(c, _)| c == collection).count())
            .unwrap_or(0)
    }
}

impl DocumentStore for InMemoryStore {
    fn write(&self, collection: &str, key: &str, fields: Document) -> Result<(), StorageError> {
        self.documents
            .lock()
            .map_err(|_| StorageError::new("store mutex poisoned"))?
            .insert((collection.to_string(), key.to_string()), fields);
        Ok(())
    }

    fn read(&self, collection: &str, key: &str) -> Result<Option<Document>, StorageError> {
        Ok(self
            .documents
            .lock()
            .map_err(|_| StorageError::new("store mutex poisoned"))?
            .get(&(collection.to_string(), key.to_string()))
            .cloned())
    }
}
