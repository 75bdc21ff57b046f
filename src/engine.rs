use crate::error::Result;
use crate::ledger::{Ledger, LedgerTotals};
use crate::models::{PurchaseEntry, Transaction};
use crate::progress::{self, TierProgress, TIER_THRESHOLD};
use crate::rewards;
use crate::validate;

/// Number of transactions shown in the recent-activity view
pub const RECENT_LIMIT: usize = 5;

/// Rewards accrual engine
///
/// Runs the submit pipeline: validate → calculate → record. The ledger is
/// exclusive in-memory state for one session; a failed validation never
/// reaches it.
#[derive(Debug, Default)]
pub struct RewardsEngine {
    ledger: Ledger,
}

/// Snapshot the presentation layer renders as summary cards
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub totals: LedgerTotals,
    pub progress: TierProgress,
    pub recent: Vec<Transaction>,
}

impl RewardsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a raw purchase entry and return the awarded transaction
    ///
    /// Validation errors leave the ledger unchanged; once a purchase is
    /// validated, recording cannot fail.
    pub fn submit_purchase(&mut self, entry: PurchaseEntry) -> Result<Transaction> {
        let purchase = validate::validate(&entry)?;
        let reward = rewards::calculate(purchase.amount);
        Ok(self.ledger.record(purchase, reward).clone())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Tier progress recomputed from the current ledger totals
    pub fn progress(&self) -> TierProgress {
        progress::progress(self.ledger.totals().points, TIER_THRESHOLD)
    }

    /// Totals, tier progress, and the recent prefix in one snapshot
    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            totals: self.ledger.totals(),
            progress: self.progress(),
            recent: self.ledger.recent(RECENT_LIMIT).to_vec(),
        }
    }
}
