use rust_decimal::Decimal;

use crate::error::{EngineError, Result};
use crate::models::PurchaseEntry;
use crate::rewards;

/// Purchase entry that passed validation, with the amount parsed
#[derive(Debug, Clone)]
pub struct ValidatedPurchase {
    pub date: String,
    pub item: String,
    pub amount: Decimal,
}

/// Validate a raw purchase entry
///
/// Checks that `date` and `item` are present and that `amount` parses to a
/// positive decimal no larger than the calculator can award points for.
/// Amounts with more than 2 decimal digits are accepted here; rounding is the
/// calculator's job. No side effects.
pub fn validate(entry: &PurchaseEntry) -> Result<ValidatedPurchase> {
    if entry.date.trim().is_empty() {
        return Err(EngineError::MissingField("date"));
    }
    if entry.item.trim().is_empty() {
        return Err(EngineError::MissingField("item"));
    }

    let amount: Decimal = entry
        .amount
        .trim()
        .parse()
        .map_err(|_| EngineError::InvalidAmount(entry.amount.clone()))?;

    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount(entry.amount.clone()));
    }

    // Amounts whose points award would overflow the running total are
    // rejected here so the calculator never fails on a validated purchase
    if amount > rewards::max_amount() {
        return Err(EngineError::InvalidAmount(entry.amount.clone()));
    }

    Ok(ValidatedPurchase {
        date: entry.date.trim().to_string(),
        item: entry.item.trim().to_string(),
        amount,
    })
}
