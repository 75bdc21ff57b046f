use serde::Deserialize;

/// Raw purchase entry as submitted by the user (form state or CSV row)
///
/// The amount stays a string until the validator parses it; entries exist only
/// until they are converted into a ledger transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseEntry {
    pub date: String,
    pub item: String,
    pub amount: String,
}
