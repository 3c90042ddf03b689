// Produces the per-item and aggregate figures a dashboard renders.
use chrono::{DateTime, Utc};
use shared::models::Item;
use shared::report::{CatalogReport, CatalogStatistics, ItemReport};
use std::path::Path;
use tracing::{error, info};

use crate::config::settings::EngineSettings;
use crate::costing::{aggregate, amortize, StatusClassifier};
use crate::data::catalog::ItemCatalog;
use crate::data::feed::ItemFeedParser;

pub struct CatalogService {
    catalog: ItemCatalog,
    classifier: StatusClassifier,
}

impl CatalogService {
    pub fn new(catalog: ItemCatalog, classifier: StatusClassifier) -> Self {
        CatalogService { catalog, classifier }
    }

    /// Builds a service from settings and loads the configured feed.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let mut service = Self::new(ItemCatalog::new(), StatusClassifier::new(settings.expiring_soon_days));
        service.reload(&settings.feed_path);
        service
    }

    /// Replaces the catalog with the contents of `feed_path`. A feed that
    /// cannot be read leaves an empty catalog behind.
    pub fn reload(&mut self, feed_path: impl AsRef<Path>) -> usize {
        let items = match ItemFeedParser::load_items_from_json(feed_path.as_ref()) {
            Ok(items) => items,
            Err(e) => {
                error!(error = %e, "Failed to load item feed, continuing with an empty catalog");
                Vec::new()
            }
        };
        self.catalog.replace_items(items)
    }

    pub fn catalog(&self) -> &ItemCatalog {
        &self.catalog
    }

    pub fn item_report(&self, item: &Item, now: DateTime<Utc>) -> ItemReport {
        ItemReport {
            name: item.name.clone(),
            price: item.price,
            category: item.category.clone(),
            in_use: item.in_use(),
            cost: amortize(item, now),
            status: self.classifier.classify(item, now),
        }
    }

    pub fn statistics(&self, now: DateTime<Utc>) -> CatalogStatistics {
        aggregate(self.catalog.items(), now)
    }

    /// Full report for one render pass. Every item is evaluated against the
    /// same `now`.
    pub fn report(&self, now: DateTime<Utc>) -> CatalogReport {
        let items: Vec<ItemReport> = self.catalog.items().iter().map(|item| self.item_report(item, now)).collect();
        let statistics = self.statistics(now);
        info!(
            items = statistics.total_items,
            total_value = statistics.total_value,
            total_daily_cost = %statistics.total_daily_cost,
            "Generated catalog report"
        );

        CatalogReport { generated_at: now, items, statistics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::report::{StatusCategory, TotalDays};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_service() -> CatalogService {
        let catalog = ItemCatalog::from_items(vec![
            Item::new("Laptop", 3650.0, "2023-01-01")
                .with_retirement("2024-01-01")
                .with_category("Electronics"),
            Item::new("Headphones", 300.0, "2024-01-01").with_warranty("2024-02-01"),
            Item::new("Mystery", 99.0, "sometime"),
        ]);
        CatalogService::new(catalog, StatusClassifier::default())
    }

    #[test]
    fn test_report_uses_single_now() {
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
        let report = sample_service().report(now);

        assert_eq!(report.generated_at, now);
        assert_eq!(report.items.len(), 3);

        let laptop = &report.items[0];
        assert_eq!(laptop.cost.daily_cost.to_string(), "10.00");
        assert_eq!(laptop.cost.total_days, TotalDays::Days(365));
        assert!(!laptop.in_use);
        assert_eq!(laptop.category.as_deref(), Some("Electronics"));

        let headphones = &report.items[1];
        assert_eq!(headphones.cost.days_used, 10);
        assert_eq!(headphones.cost.daily_cost.to_string(), "30.00");
        assert!(headphones.in_use);
        assert_eq!(headphones.status.category, StatusCategory::ExpiringSoon { days: 21 });

        let mystery = &report.items[2];
        assert_eq!(mystery.cost.daily_cost.to_string(), "0.00");
        assert_eq!(mystery.status.category, StatusCategory::Active);

        assert_eq!(report.statistics.total_items, 3);
        assert_eq!(report.statistics.total_daily_cost.to_string(), "40.00");
    }

    #[test]
    fn test_report_serializes() {
        let now = Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap();
        let value = serde_json::to_value(sample_service().report(now)).unwrap();
        assert_eq!(value["items"][0]["cost"]["dailyCost"], "10.00");
        assert_eq!(value["items"][1]["cost"]["totalDays"], "indefinite");
        assert_eq!(value["items"][1]["inUse"], true);
        assert_eq!(value["statistics"]["totalItems"], 3);
    }

    #[test]
    fn test_from_settings_loads_feed() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{ "name": "Lamp", "price": 45, "purchaseDate": "2023-11", "warrantyDate": "2024-01-05" }}]"#).unwrap();

        let settings = EngineSettings::default().with_feed_path(file.path());
        let service = CatalogService::from_settings(&settings);
        assert_eq!(service.catalog().len(), 1);

        let today = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let report = service.report(today);
        assert_eq!(report.items[0].status.category, StatusCategory::ExpiringSoon { days: 4 });
    }

    #[test]
    fn test_unreadable_feed_gives_empty_catalog() {
        let settings = EngineSettings::default().with_feed_path("/definitely/not/here/items.json");
        let service = CatalogService::from_settings(&settings);
        assert!(service.catalog().is_empty());

        let stats = service.statistics(Utc::now());
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.total_value, 0.0);
    }
}
