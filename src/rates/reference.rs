//! Bundled fallback prices, consulted only when the dynamic source has
//! no matching entry. The table is an explicit versioned value so tests
//! and callers can substitute their own.

use crate::decimal::Money;

use super::{RateEntry, RateTable, TierPrices};

pub const REFERENCE_TABLE_VERSION: &str = "2024-09";

/// static reference rate table
pub fn reference_rates() -> RateTable {
    RateTable::versioned(
        REFERENCE_TABLE_VERSION,
        vec![
            entry(
                "12x4",
                "A",
                "standard",
                TierPrices {
                    one_month: Some(Money::from_major(3200)),
                    three_months: Some(Money::from_major(9100)),
                    six_months: Some(Money::from_major(17500)),
                    full_year: Some(Money::from_major(33000)),
                    ..Default::default()
                },
            ),
            entry(
                "12x4",
                "A",
                "corporate",
                TierPrices {
                    one_month: Some(Money::from_major(3600)),
                    six_months: Some(Money::from_major(19800)),
                    full_year: Some(Money::from_major(37500)),
                    ..Default::default()
                },
            ),
            entry(
                "12x4",
                "B",
                "standard",
                TierPrices {
                    one_month: Some(Money::from_major(2600)),
                    three_months: Some(Money::from_major(7400)),
                    full_year: Some(Money::from_major(27000)),
                    ..Default::default()
                },
            ),
            entry(
                "10x4",
                "A",
                "standard",
                TierPrices {
                    day: Some(Money::from_major(95)),
                    one_month: Some(Money::from_major(2700)),
                    three_months: Some(Money::from_major(7700)),
                    six_months: Some(Money::from_major(14800)),
                    ..Default::default()
                },
            ),
            entry(
                "10x4",
                "A",
                "marketer",
                TierPrices {
                    one_month: Some(Money::from_major(2400)),
                    six_months: Some(Money::from_major(13200)),
                    ..Default::default()
                },
            ),
            entry(
                "10x4",
                "B",
                "standard",
                TierPrices::monthly(Money::from_major(2100)),
            ),
            entry(
                "8x3",
                "A",
                "standard",
                TierPrices {
                    day: Some(Money::from_major(70)),
                    one_month: Some(Money::from_major(1900)),
                    full_year: Some(Money::from_major(19500)),
                    ..Default::default()
                },
            ),
            entry(
                "8x3",
                "B",
                "standard",
                TierPrices::monthly(Money::from_major(1500)),
            ),
            entry(
                "8x3",
                "B",
                "municipal",
                TierPrices {
                    one_month: Some(Money::from_major(1100)),
                    full_year: Some(Money::from_major(11500)),
                    ..Default::default()
                },
            ),
            entry(
                "6x3",
                "B",
                "standard",
                TierPrices {
                    one_month: Some(Money::from_major(1200)),
                    three_months: Some(Money::from_major(3400)),
                    ..Default::default()
                },
            ),
        ],
    )
}

fn entry(size: &str, level: &str, category: &str, prices: TierPrices) -> RateEntry {
    RateEntry::new(size, level, category, prices)
}
