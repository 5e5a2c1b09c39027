pub mod costing;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod rates;
pub mod schedule;
pub mod settlement;
pub mod types;

// re-export key types
pub use costing::{apply_discount, estimate_total, CostEstimate, CostLine, Discount, DiscountOutcome};
pub use decimal::{Money, Rate};
pub use engine::{ContractPricing, ContractTerms, CostingEngine};
pub use errors::{CostingError, Result};
pub use rates::{
    reference_rates, synthesize_daily_rate, RateEntry, RateResolver, RateSource, RateTable,
    TierPrices, REFERENCE_TABLE_VERSION,
};
pub use schedule::{
    assign_due_dates, distribute_evenly, due_date_for, schedule_balances, Installment,
    MAX_INSTALLMENTS, MIN_INSTALLMENTS,
};
pub use settlement::{prorate, settle, settle_now, Settlement};
pub use types::{CustomerCategory, DurationTier, Placement, PlacementId, RentalDuration};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
