pub mod discount;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::rates::{synthesize_daily_rate, RateResolver};
use crate::types::{CustomerCategory, DurationTier, Placement, PlacementId, RentalDuration};

pub use discount::{apply_discount, Discount, DiscountOutcome};

/// one priced placement within an estimate, derived per call and never stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub placement_id: PlacementId,
    pub unit_price: Money,
    pub tier: DurationTier,
    /// number of tier-units billed, e.g. 3 one-month units for a
    /// 3-month rental with no bulk tier stored
    pub quantity: u32,
}

impl CostLine {
    pub fn total(&self) -> Money {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// aggregated estimate across all selected placements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub lines: Vec<CostLine>,
    pub total: Money,
}

/// price a set of placements for the requested duration
///
/// Pure over its arguments; callers recompute on every input change
/// rather than caching.
pub fn estimate_total(
    resolver: &RateResolver<'_>,
    placements: &[Placement],
    category: &CustomerCategory,
    duration: RentalDuration,
) -> CostEstimate {
    let lines: Vec<CostLine> = placements
        .iter()
        .map(|placement| cost_line(resolver, placement, category, duration))
        .collect();
    let total = lines.iter().map(CostLine::total).sum();

    CostEstimate { lines, total }
}

fn cost_line(
    resolver: &RateResolver<'_>,
    placement: &Placement,
    category: &CustomerCategory,
    duration: RentalDuration,
) -> CostLine {
    match duration {
        RentalDuration::Months(count) => {
            if let Some(tier) = DurationTier::from_months(count) {
                if let Some(unit_price) =
                    resolver.unit_price(&placement.size, &placement.level, category, tier)
                {
                    return CostLine {
                        placement_id: placement.id,
                        unit_price,
                        tier,
                        quantity: 1,
                    };
                }
            }

            // no bulk tier stored: bill the month rate linearly, falling
            // back to the placement's own monthly price when unpriced
            let unit_price = resolver
                .unit_price(
                    &placement.size,
                    &placement.level,
                    category,
                    DurationTier::OneMonth,
                )
                .unwrap_or(placement.fallback_monthly_price);

            CostLine {
                placement_id: placement.id,
                unit_price,
                tier: DurationTier::OneMonth,
                quantity: count,
            }
        }
        RentalDuration::Days(count) => {
            let unit_price = resolver
                .unit_price(&placement.size, &placement.level, category, DurationTier::Day)
                .unwrap_or_else(|| {
                    synthesize_daily_rate(resolver, &placement.size, &placement.level, category)
                });

            CostLine {
                placement_id: placement.id,
                unit_price,
                tier: DurationTier::Day,
                quantity: count,
            }
        }
    }
}
