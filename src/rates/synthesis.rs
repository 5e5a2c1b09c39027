use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::types::{CustomerCategory, DurationTier};

use super::RateResolver;

/// days assumed per month when deriving a daily rate
const DAYS_PER_MONTH: u32 = 30;

/// derive a per-day rate when no explicit daily price is stored
///
/// Divides the resolved one-month price by 30, rounded half-up to cents.
/// Returns zero when the one-month price is also unresolved, so downstream
/// aggregation still produces a number; zero reads as "unpriced" and the
/// caller prompts for a manual override.
pub fn synthesize_daily_rate(
    resolver: &RateResolver<'_>,
    size: &str,
    level: &str,
    category: &CustomerCategory,
) -> Money {
    match resolver.unit_price(size, level, category, DurationTier::OneMonth) {
        Some(monthly) => Money::from_decimal(monthly.as_decimal() / Decimal::from(DAYS_PER_MONTH)),
        None => Money::ZERO,
    }
}
