use std::sync::Arc;

use crate::error::{EngineError, Result};
use crate::identity::UserId;
use crate::storage::{Document, DocumentStore};

/// Collection that holds user profile documents
pub const USERS: &str = "users";

/// Records registration profiles and university selection
///
/// Profile documents are owned by the external store; the engine only
/// validates fields and issues the writes.
pub struct ProfileRecorder<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ProfileRecorder<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Write the initial profile document for a newly registered user
    ///
    /// The university starts empty and is filled in later by
    /// `select_university`.
    pub fn register(&self, user_id: &UserId, name: &str, email: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(EngineError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(EngineError::MissingField("email"));
        }

        let mut doc = Document::new();
        doc.insert("name".to_string(), name.trim().to_string());
        doc.insert("email".to_string(), email.trim().to_string());
        doc.insert("university".to_string(), String::new());

        self.store.write(USERS, &user_id.0, doc)?;
        Ok(())
    }

    /// Set the user's university, preserving the rest of the profile
    ///
    /// Reads the existing document and merges the selection into it; a missing
    /// profile still gets a document with just the university.
    pub fn select_university(&self, user_id: &UserId, university: &str) -> Result<()> {
        if university.trim().is_empty() {
            return Err(EngineError::MissingField("university"));
        }

        let mut doc = self.store.read(USERS, &user_id.0)?.unwrap_or_default();
        doc.insert("university".to_string(), university.trim().to_string());

        self.store.write(USERS, &user_id.0, doc)?;
        Ok(())
    }

    /// Read back a profile document
    pub fn profile(&self, user_id: &UserId) -> Result<Option<Document>> {
        Ok(self.store.read(USERS, &user_id.0)?)
    }
}
