use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::costing::{apply_discount, estimate_total, CostEstimate, Discount};
use crate::decimal::Money;
use crate::errors::Result;
use crate::rates::{
    reference_rates, synthesize_daily_rate, RateResolver, RateSource, RateTable,
};
use crate::schedule::{assign_due_dates, distribute_evenly, Installment};
use crate::settlement::{settle, Settlement};
use crate::types::{CustomerCategory, DurationTier, Placement, RentalDuration};

/// everything the costing flow reads from a draft contract
///
/// The engine never mutates the contract; the caller persists the
/// computed totals and installments through its own write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub customer_category: CustomerCategory,
    pub placements: Vec<Placement>,
    pub duration: RentalDuration,
    /// manual override of the aggregator's estimate
    pub manual_base_total: Option<Money>,
    pub discount: Option<Discount>,
    pub installment_count: u32,
}

/// computed pricing for a contract draft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPricing {
    pub estimate: CostEstimate,
    /// estimate or manual override, whichever the discount applied to
    pub base_total: Money,
    pub discount_amount: Money,
    pub final_total: Money,
    pub installments: Vec<Installment>,
}

/// stateless facade over the two rate tables
///
/// The quote builder, contract-create and contract-edit flows all go
/// through this one type, so their fallback behavior cannot drift.
#[derive(Debug, Clone, Default)]
pub struct CostingEngine {
    dynamic: RateTable,
    reference: RateTable,
}

impl CostingEngine {
    pub fn new(dynamic: RateTable, reference: RateTable) -> Self {
        Self { dynamic, reference }
    }

    /// engine over a dynamic snapshot and the bundled reference table
    pub fn with_reference_rates(dynamic: RateTable) -> Self {
        Self::new(dynamic, reference_rates())
    }

    /// snapshot a dynamic source for the given sizes
    pub fn snapshot(source: &dyn RateSource, sizes: &[&str]) -> Self {
        Self::with_reference_rates(RateTable::new(source.fetch_rates(sizes)))
    }

    pub fn resolver(&self) -> RateResolver<'_> {
        RateResolver::new(&self.dynamic, &self.reference)
    }

    /// unit price at a tier, dynamic source first
    pub fn unit_price(
        &self,
        size: &str,
        level: &str,
        category: &CustomerCategory,
        tier: DurationTier,
    ) -> Option<Money> {
        self.resolver().unit_price(size, level, category, tier)
    }

    /// per-day rate, synthesized from the one-month price when needed
    pub fn daily_rate(&self, size: &str, level: &str, category: &CustomerCategory) -> Money {
        self.resolver()
            .unit_price(size, level, category, DurationTier::Day)
            .unwrap_or_else(|| synthesize_daily_rate(&self.resolver(), size, level, category))
    }

    /// estimated total for a selection of placements
    pub fn estimate(
        &self,
        placements: &[Placement],
        category: &CustomerCategory,
        duration: RentalDuration,
    ) -> CostEstimate {
        estimate_total(&self.resolver(), placements, category, duration)
    }

    /// full costing flow: estimate, optional manual override, discount,
    /// even installment split, due dates
    ///
    /// Due dates are filled only when the contract has a start date; the
    /// split itself never needs one.
    pub fn price_contract(&self, terms: &ContractTerms) -> ContractPricing {
        let estimate = self.estimate(&terms.placements, &terms.customer_category, terms.duration);
        let base_total = terms.manual_base_total.unwrap_or(estimate.total);
        let outcome = apply_discount(base_total, terms.discount.as_ref());

        let mut installments = distribute_evenly(outcome.final_total, terms.installment_count);
        if let Some(start_date) = terms.start_date {
            assign_due_dates(start_date, &mut installments);
        }

        ContractPricing {
            estimate,
            base_total,
            discount_amount: outcome.discount_amount,
            final_total: outcome.final_total,
            installments,
        }
    }

    /// prorated amount owed for early termination as of a given moment
    pub fn settle(
        &self,
        terms: &ContractTerms,
        final_total: Money,
        as_of: DateTime<Utc>,
    ) -> Result<Settlement> {
        settle(terms.start_date, terms.end_date, final_total, as_of)
    }

    /// prorated amount owed as of the provider's current time
    pub fn settle_now(
        &self,
        terms: &ContractTerms,
        final_total: Money,
        time_provider: &SafeTimeProvider,
    ) -> Result<Settlement> {
        self.settle(terms, final_total, time_provider.now())
    }
}
