use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{CostingError, Result};

/// amount owed at early termination, prorated by elapsed days
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub consumed_days: i64,
    pub total_days: i64,
    pub amount_due: Money,
}

/// prorate a final total over elapsed versus total contract days
///
/// The contracted span is floored at one day, and consumption is clamped
/// to [0, total], so a backdated or inverted range never produces a
/// negative or overshooting amount.
pub fn prorate(
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    final_total: Money,
    as_of: DateTime<Utc>,
) -> Settlement {
    let total_days = (end_date - start_date).num_days().max(1);
    let effective_end = end_date.min(as_of);
    let consumed_days = (effective_end - start_date).num_days().clamp(0, total_days);

    let amount_due = Money::from_decimal(
        final_total.as_decimal() * Decimal::from(consumed_days) / Decimal::from(total_days),
    );

    Settlement {
        consumed_days,
        total_days,
        amount_due,
    }
}

/// settle a contract whose dates may be incomplete
///
/// Missing dates are insufficient data, not a guess; the caller blocks
/// the settlement action until both are supplied.
pub fn settle(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    final_total: Money,
    as_of: DateTime<Utc>,
) -> Result<Settlement> {
    match (start_date, end_date) {
        (Some(start), Some(end)) => Ok(prorate(start, end, final_total, as_of)),
        _ => Err(CostingError::MissingContractDates),
    }
}

/// settle as of the provider's current time
pub fn settle_now(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    final_total: Money,
    time_provider: &SafeTimeProvider,
) -> Result<Settlement> {
    settle(start_date, end_date, final_total, time_provider.now())
}
