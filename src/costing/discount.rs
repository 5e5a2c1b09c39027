use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// percent-of-total or fixed-amount reduction
///
/// Out-of-range values are clamped, never rejected, so a data-entry UI
/// keeps moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// percentage points of the base total, clamped to [0, 100]
    Percent(Decimal),
    /// fixed reduction, clamped to >= 0 but deliberately allowed to
    /// exceed the base total; the final total floors at zero instead
    Amount(Money),
}

/// result of applying a discount to a base total
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DiscountOutcome {
    pub discount_amount: Money,
    pub final_total: Money,
}

/// apply an optional discount to a base total
///
/// The base is either the aggregator's estimate or the caller's manual
/// override; this function is agnostic to which.
pub fn apply_discount(base_total: Money, discount: Option<&Discount>) -> DiscountOutcome {
    let discount_amount = match discount {
        Some(Discount::Percent(value)) => {
            base_total.portion(Rate::from_percentage_clamped(*value))
        }
        Some(Discount::Amount(value)) => (*value).max(Money::ZERO),
        None => Money::ZERO,
    };

    let final_total = (base_total - discount_amount).max(Money::ZERO);

    DiscountOutcome {
        discount_amount,
        final_total,
    }
}
