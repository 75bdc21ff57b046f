use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clock;
use crate::error::{EngineError, Result};
use crate::identity::UserId;
use crate::models::{BankLinkFields, BankLinkRecord};
use crate::storage::DocumentStore;

/// Collection that holds bank-link documents
pub const BANK_ACCOUNTS: &str = "bankAccounts";

/// Validates and forwards bank-link requests to the external store
///
/// Write-once per submission: no dedupe by account number, no unlink or
/// update, and no verification that the account exists at a real bank.
pub struct AccountLinkRecorder<S: DocumentStore> {
    store: Arc<S>,
    /// Distinguishes document keys for links recorded within the same instant
    link_seq: AtomicU64,
}

impl<S: DocumentStore> AccountLinkRecorder<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            link_seq: AtomicU64::new(0),
        }
    }

    /// Record a bank link for an authenticated user
    ///
    /// Every field must be non-empty, including the full name, which is
    /// checked but not persisted. The caller supplies the user id explicitly;
    /// resolving the current user is the session layer's job. `linkedAt` is
    /// assigned here at write time, and success is reported only after the
    /// store confirms the write.
    pub fn link(&self, user_id: &UserId, fields: &BankLinkFields) -> Result<BankLinkRecord> {
        if fields.full_name.trim().is_empty() {
            return Err(EngineError::MissingField("full name"));
        }
        if fields.bank_name.trim().is_empty() {
            return Err(EngineError::MissingField("bank name"));
        }
        if fields.account_number.trim().is_empty() {
            return Err(EngineError::MissingField("account number"));
        }
        if fields.routing_number.trim().is_empty() {
            return Err(EngineError::MissingField("routing number"));
        }

        let record = BankLinkRecord {
            user_id: user_id.clone(),
            bank_name: fields.bank_name.trim().to_string(),
            account_number: fields.account_number.trim().to_string(),
            routing_number: fields.routing_number.trim().to_string(),
            linked_at_ms: clock::unix_millis(),
        };

        let seq = self.link_seq.fetch_add(1, Ordering::Relaxed);
        let key = format!("{}-{}-{}", record.user_id, record.linked_at_ms, seq);
        self.store.write(BANK_ACCOUNTS, &key, record.to_document())?;

        Ok(record)
    }
}
