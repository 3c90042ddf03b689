// Derived, per-render output types. Nothing here is cached; every value is
// recomputed from the items and a single sampled "now".
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::models::Money;

/// Lifespan of an item in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalDays {
    /// No retirement date: the item is still in use.
    Indefinite,
    /// Days from purchase to retirement. May be zero or negative when the
    /// retirement date is not after the purchase date.
    Days(i64),
}

impl Serialize for TotalDays {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TotalDays::Indefinite => serializer.serialize_str("indefinite"),
            TotalDays::Days(d) => serializer.serialize_i64(*d),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub daily_cost: Money,
    pub total_days: TotalDays,
    pub days_used: i64,
    pub consumed_value: Money,
}

impl CostBreakdown {
    /// Breakdown reported for items without a usable purchase date.
    pub fn zero() -> Self {
        Self {
            daily_cost: Money::ZERO,
            total_days: TotalDays::Days(0),
            days_used: 0,
            consumed_value: Money::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusCategory {
    Active,
    Expired,
    /// Warranty ends within the configured window; carries the days left.
    ExpiringSoon { days: i64 },
}

impl StatusCategory {
    /// Default English label. Translated labels belong to the renderer.
    pub fn label(self) -> String {
        match self {
            StatusCategory::Active => "Active".to_string(),
            StatusCategory::Expired => "Expired".to_string(),
            StatusCategory::ExpiringSoon { days: 1 } => "Warranty expires in 1 day".to_string(),
            StatusCategory::ExpiringSoon { days } => format!("Warranty expires in {} days", days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStatus {
    pub label: String,
    pub category: StatusCategory,
}

impl From<StatusCategory> for ItemStatus {
    fn from(category: StatusCategory) -> Self {
        Self { label: category.label(), category }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport {
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub in_use: bool,
    pub cost: CostBreakdown,
    pub status: ItemStatus,
}

/// Totals over a whole catalog, computed fresh on every call.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_value: f64,
    pub total_items: usize,
    /// Sum of each item's rounded daily cost.
    pub total_daily_cost: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReport {
    pub generated_at: DateTime<Utc>,
    pub items: Vec<ItemReport>,
    pub statistics: CatalogStatistics,
}
