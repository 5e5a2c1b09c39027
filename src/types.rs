use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a leased placement
pub type PlacementId = Uuid;

/// billing-duration bucket for which an explicit unit price may exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationTier {
    Day,
    OneMonth,
    TwoMonths,
    ThreeMonths,
    SixMonths,
    FullYear,
}

impl DurationTier {
    pub const ALL: [DurationTier; 6] = [
        DurationTier::Day,
        DurationTier::OneMonth,
        DurationTier::TwoMonths,
        DurationTier::ThreeMonths,
        DurationTier::SixMonths,
        DurationTier::FullYear,
    ];

    /// number of months billed by this tier, None for the daily tier
    pub fn months(&self) -> Option<u32> {
        match self {
            DurationTier::Day => None,
            DurationTier::OneMonth => Some(1),
            DurationTier::TwoMonths => Some(2),
            DurationTier::ThreeMonths => Some(3),
            DurationTier::SixMonths => Some(6),
            DurationTier::FullYear => Some(12),
        }
    }

    /// tier matching a month count exactly, if one exists
    pub fn from_months(months: u32) -> Option<Self> {
        match months {
            1 => Some(DurationTier::OneMonth),
            2 => Some(DurationTier::TwoMonths),
            3 => Some(DurationTier::ThreeMonths),
            6 => Some(DurationTier::SixMonths),
            12 => Some(DurationTier::FullYear),
            _ => None,
        }
    }
}

/// customer pricing category
///
/// The set is administrable and open, so the category is an opaque
/// case-sensitive lookup key, never an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerCategory(String);

impl CustomerCategory {
    pub fn new(name: impl Into<String>) -> Self {
        CustomerCategory(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CustomerCategory {
    fn from(name: &str) -> Self {
        CustomerCategory::new(name)
    }
}

impl From<String> for CustomerCategory {
    fn from(name: String) -> Self {
        CustomerCategory::new(name)
    }
}

impl fmt::Display for CustomerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// a leased billboard face selected for a contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub id: PlacementId,
    pub size: String,
    pub level: String,
    /// used only when no rate entry resolves at any source
    pub fallback_monthly_price: Money,
}

impl Placement {
    pub fn new(
        id: PlacementId,
        size: impl Into<String>,
        level: impl Into<String>,
        fallback_monthly_price: Money,
    ) -> Self {
        Self {
            id,
            size: size.into(),
            level: level.into(),
            fallback_monthly_price,
        }
    }
}

/// requested rental duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "count", rename_all = "snake_case")]
pub enum RentalDuration {
    Months(u32),
    Days(u32),
}
