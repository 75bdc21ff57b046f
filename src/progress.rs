use rust_decimal::Decimal;

/// Point total that unlocks the next reward tier
pub const TIER_THRESHOLD: u64 = 1000;

/// Inverse of the points accrual rate: one point per $10 of spend
pub const DOLLARS_PER_POINT: u64 = 10;

/// Flat tuition-credit bonus advertised with the next tier
///
/// A static reward description, not derived from the remaining points.
pub fn tier_bonus_credit() -> Decimal {
    Decimal::new(3000, 2)
}

/// Progress toward the next reward tier, derived and never stored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierProgress {
    /// Percent of the threshold reached, clamped to [0, 100]
    pub percent: Decimal,
    /// Points still needed to unlock the tier
    pub remaining: u64,
}

impl TierProgress {
    /// Dollars of spend still needed, derived from the remaining points
    pub fn dollars_to_unlock(&self) -> Decimal {
        Decimal::from(self.remaining) * Decimal::from(DOLLARS_PER_POINT)
    }
}

/// Compute tier progress from a running point total
///
/// Stateless: callers recompute from the ledger's current totals on every
/// observation, the ledger being the sole source of truth.
pub fn progress(total_points: u64, threshold: u64) -> TierProgress {
    let percent = if threshold == 0 {
        Decimal::ONE_HUNDRED
    } else {
        (Decimal::from(total_points) / Decimal::from(threshold) * Decimal::ONE_HUNDRED)
            .min(Decimal::ONE_HUNDRED)
    };

    TierProgress {
        percent,
        remaining: threshold.saturating_sub(total_points),
    }
}
