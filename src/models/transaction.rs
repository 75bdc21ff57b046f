use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// Ledger transaction identifier
///
/// Creation timestamp plus a sequence number, so ids stay unique even for
/// transactions recorded within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TxId {
    pub created_ms: i64,
    pub seq: u32,
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:04}", self.created_ms, self.seq)
    }
}

// Serialized as a single string column for CSV output
impl Serialize for TxId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Awarded transaction held by the ledger
///
/// Immutable once created; points and credit are derived at award time and
/// never recomputed.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: TxId,
    pub date: String,
    pub item: String,
    pub amount: Decimal,
    pub points: u64,
    pub credit: Decimal,
}
