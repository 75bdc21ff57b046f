use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Reward earned by a single purchase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reward {
    pub points: u64,
    pub credit: Decimal,
}

/// Points accrual rate: 10% of the purchase amount
fn points_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Tuition credit accrual rate: 5% of the purchase amount
fn credit_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Largest purchase amount whose points award still fits in a `u64`
///
/// The validator rejects anything above this, keeping `calculate` infallible
/// for validated amounts.
pub fn max_amount() -> Decimal {
    Decimal::from(u64::MAX) * Decimal::TEN
}

/// Compute the reward for a purchase amount
///
/// `points = round(amount × 0.10)` half-up to an integer, and
/// `credit = round(amount × 0.05)` half-up to 2 decimal places. Pure and
/// deterministic: the same amount always yields the same pair.
pub fn calculate(amount: Decimal) -> Reward {
    let points = (amount * points_rate())
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let credit = (amount * credit_rate())
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    Reward {
        points: points.to_u64().expect("amount bounded by validator"),
        credit,
    }
}
