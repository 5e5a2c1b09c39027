pub mod reference;
pub mod synthesis;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::{CustomerCategory, DurationTier};

pub use reference::{reference_rates, REFERENCE_TABLE_VERSION};
pub use synthesis::synthesize_daily_rate;

/// per-tier unit prices
///
/// A missing tier means "no explicit price at this tier", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierPrices {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_month: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_months: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_months: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub six_months: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_year: Option<Money>,
}

impl TierPrices {
    /// stored price for a tier, if any
    pub fn price(&self, tier: DurationTier) -> Option<Money> {
        match tier {
            DurationTier::Day => self.day,
            DurationTier::OneMonth => self.one_month,
            DurationTier::TwoMonths => self.two_months,
            DurationTier::ThreeMonths => self.three_months,
            DurationTier::SixMonths => self.six_months,
            DurationTier::FullYear => self.full_year,
        }
    }

    /// prices with only the one-month tier set
    pub fn monthly(price: Money) -> Self {
        Self {
            one_month: Some(price),
            ..Default::default()
        }
    }
}

/// immutable pricing record for one (size, level, category) triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub size: String,
    pub level: String,
    pub category: CustomerCategory,
    pub prices: TierPrices,
}

impl RateEntry {
    pub fn new(
        size: impl Into<String>,
        level: impl Into<String>,
        category: impl Into<CustomerCategory>,
        prices: TierPrices,
    ) -> Self {
        Self {
            size: size.into(),
            level: level.into(),
            category: category.into(),
            prices,
        }
    }

    fn matches(&self, size: &str, level: &str, category: &CustomerCategory) -> bool {
        // case-sensitive on all three keys
        self.size == size && self.level == level && &self.category == category
    }
}

/// read-only snapshot of rate entries
///
/// At most one entry per (size, level, category) triple is expected;
/// a source with duplicates is a data-quality problem and lookup takes
/// the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub entries: Vec<RateEntry>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self {
            version: None,
            entries,
        }
    }

    pub fn versioned(version: impl Into<String>, entries: Vec<RateEntry>) -> Self {
        Self {
            version: Some(version.into()),
            entries,
        }
    }

    /// parse a table from a JSON snapshot
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// first entry matching the triple exactly
    pub fn lookup(
        &self,
        size: &str,
        level: &str,
        category: &CustomerCategory,
    ) -> Option<&RateEntry> {
        self.entries
            .iter()
            .find(|entry| entry.matches(size, level, category))
    }

    /// stored tier price for the triple, if any
    pub fn price(
        &self,
        size: &str,
        level: &str,
        category: &CustomerCategory,
        tier: DurationTier,
    ) -> Option<Money> {
        self.lookup(size, level, category)
            .and_then(|entry| entry.prices.price(tier))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// caller-supplied dynamic pricing source
///
/// The engine reads it as a point-in-time snapshot, never as a live
/// subscription.
pub trait RateSource {
    /// administrable rate entries covering the given sizes
    fn fetch_rates(&self, sizes: &[&str]) -> Vec<RateEntry>;
}

impl RateSource for RateTable {
    fn fetch_rates(&self, sizes: &[&str]) -> Vec<RateEntry> {
        self.entries
            .iter()
            .filter(|entry| sizes.contains(&entry.size.as_str()))
            .cloned()
            .collect()
    }
}

/// resolves unit prices against the dynamic table first, then the
/// static reference table
#[derive(Debug, Clone, Copy)]
pub struct RateResolver<'a> {
    dynamic: &'a RateTable,
    reference: &'a RateTable,
}

impl<'a> RateResolver<'a> {
    pub fn new(dynamic: &'a RateTable, reference: &'a RateTable) -> Self {
        Self { dynamic, reference }
    }

    /// unit price for the triple at a tier
    ///
    /// A dynamic entry with no price at the requested tier falls through
    /// to the reference table. None means unpriced at both sources; the
    /// caller applies its own price fallback.
    pub fn unit_price(
        &self,
        size: &str,
        level: &str,
        category: &CustomerCategory,
        tier: DurationTier,
    ) -> Option<Money> {
        self.dynamic
            .price(size, level, category, tier)
            .or_else(|| self.reference.price(size, level, category, tier))
    }
}
