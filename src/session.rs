use std::sync::Arc;

use tokio::sync::RwLock;

use crate::account_link::AccountLinkRecorder;
use crate::engine::{DashboardSummary, RewardsEngine};
use crate::error::{EngineError, Result};
use crate::identity::IdentityProvider;
use crate::models::{BankLinkFields, BankLinkRecord, PurchaseEntry, Transaction};
use crate::storage::DocumentStore;

/// Per-session handle over the rewards engine
///
/// One signed-in session owns one in-memory ledger. Each user action is a
/// discrete request/response exchange; the write lock serializes mutations so
/// no two operations touch the ledger concurrently. Storage writes are awaited
/// before success is reported, so the caller never proceeds on an unconfirmed
/// write.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use rewards_engine::identity::{AuthSession, UserId};
/// use rewards_engine::models::PurchaseEntry;
/// use rewards_engine::session::Session;
/// use rewards_engine::storage::InMemoryStore;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let auth = Arc::new(AuthSession::new());
///     auth.sign_in(UserId::new("u1"));
///
///     let session = Session::new(auth, Arc::new(InMemoryStore::new()));
///
///     let tx = session
///         .submit_purchase(PurchaseEntry {
///             date: "2025-01-01".to_string(),
///             item: "book".to_string(),
///             amount: "100.00".to_string(),
///         })
///         .await
///         .unwrap();
///
///     assert_eq!(tx.points, 10);
/// }
/// ```
pub struct Session<I: IdentityProvider, S: DocumentStore> {
    engine: Arc<RwLock<RewardsEngine>>,
    identity: Arc<I>,
    links: Arc<AccountLinkRecorder<S>>,
}

impl<I: IdentityProvider, S: DocumentStore> Session<I, S> {
    pub fn new(identity: Arc<I>, store: Arc<S>) -> Self {
        Self {
            engine: Arc::new(RwLock::new(RewardsEngine::new())),
            identity,
            links: Arc::new(AccountLinkRecorder::new(store)),
        }
    }

    /// Submit a purchase entry and return the awarded transaction
    pub async fn submit_purchase(&self, entry: PurchaseEntry) -> Result<Transaction> {
        let mut engine = self.engine.write().await;
        engine.submit_purchase(entry)
    }

    /// Snapshot of totals, tier progress, and recent activity
    ///
    /// Read lock: concurrent summaries never block each other
    pub async fn summary(&self) -> DashboardSummary {
        self.engine.read().await.summary()
    }

    /// Link a bank account for the signed-in user
    ///
    /// Fails with `NotAuthenticated` before any storage write when no user is
    /// signed in.
    pub async fn link_bank(&self, fields: &BankLinkFields) -> Result<BankLinkRecord> {
        let user = self
            .identity
            .current_user()
            .ok_or(EngineError::NotAuthenticated)?;
        self.links.link(&user, fields)
    }

    /// Cheap clone for sharing across tasks
    pub fn clone_handle(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
            identity: Arc::clone(&self.identity),
            links: Arc::clone(&self.links),
        }
    }
}
