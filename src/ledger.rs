use rust_decimal::Decimal;

use crate::clock;
use crate::models::{Transaction, TxId};
use crate::rewards::Reward;
use crate::validate::ValidatedPurchase;

/// Running totals over the whole ledger
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerTotals {
    pub points: u64,
    pub credit: Decimal,
}

/// Append-only, newest-first record of awarded transactions
///
/// Source of truth for the running totals. Insertion order is reverse
/// chronological by creation, not by the user-supplied date. Transactions are
/// never edited or removed after insertion.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    last_ms: i64,
    seq: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an awarded purchase, prepending it to the ledger
    ///
    /// The terminal, always-succeeding step of the pipeline: the purchase was
    /// already validated and id generation is internal.
    pub fn record(&mut self, purchase: ValidatedPurchase, reward: Reward) -> &Transaction {
        let id = self.next_id();
        let tx = Transaction {
            id,
            date: purchase.date,
            item: purchase.item,
            amount: purchase.amount,
            points: reward.points,
            credit: reward.credit,
        };
        self.transactions.insert(0, tx);
        &self.transactions[0]
    }

    /// Totals over the entire ledger, not just the visible prefix
    pub fn totals(&self) -> LedgerTotals {
        LedgerTotals {
            points: self.transactions.iter().map(|tx| tx.points).sum(),
            credit: self.transactions.iter().map(|tx| tx.credit).sum(),
        }
    }

    /// The `n` most recently recorded transactions, newest first
    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.transactions[..self.transactions.len().min(n)]
    }

    /// Most recently recorded transaction, if any
    pub fn latest(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // Timestamp + sequence: unique within one millisecond, and the sequence
    // keeps ids distinct if the clock steps backwards
    fn next_id(&mut self) -> TxId {
        let now = clock::unix_millis();
        if now > self.last_ms {
            self.last_ms = now;
            self.seq = 0;
        } else {
            self.seq += 1;
        }
        TxId {
            created_ms: self.last_ms,
            seq: self.seq,
        }
    }
}
