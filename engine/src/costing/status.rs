// Warranty status classification
use chrono::{DateTime, Utc};
use shared::models::Item;
use shared::report::{ItemStatus, StatusCategory};

use crate::dates::{ceil_days, normalize};

pub const DEFAULT_EXPIRING_SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusClassifier {
    expiring_soon_days: i64,
}

impl Default for StatusClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_EXPIRING_SOON_DAYS)
    }
}

impl StatusClassifier {
    pub fn new(expiring_soon_days: i64) -> Self {
        Self { expiring_soon_days }
    }

    pub fn classify(&self, item: &Item, today: DateTime<Utc>) -> ItemStatus {
        self.category(item, today).into()
    }

    pub fn category(&self, item: &Item, today: DateTime<Utc>) -> StatusCategory {
        let Some(warranty) = normalize(&item.warranty_date) else {
            return StatusCategory::Active;
        };
        if warranty < today {
            return StatusCategory::Expired;
        }
        let days = ceil_days(warranty - today);
        if days > 0 && days <= self.expiring_soon_days {
            StatusCategory::ExpiringSoon { days }
        } else {
            StatusCategory::Active
        }
    }
}

/// Classify with the default 30-day warning window.
pub fn classify(item: &Item, today: DateTime<Utc>) -> ItemStatus {
    StatusClassifier::default().classify(item, today)
}
