// Catalog-wide totals
use chrono::{DateTime, Utc};
use shared::models::{Item, Money};
use shared::report::CatalogStatistics;

use super::amortize::amortize;

/// Totals for the dashboard header: summed prices, item count and the sum of
/// every item's rounded daily cost. Computed from scratch on each call.
/// The sum is kept exact and rounded when rendered.
pub fn aggregate(items: &[Item], now: DateTime<Utc>) -> CatalogStatistics {
    let (total_value, total_daily_cost) = items.iter().fold((0.0, 0.0), |(value, daily), item| {
        (value + item.price, daily + amortize(item, now).daily_cost.value())
    });

    CatalogStatistics {
        total_value,
        total_items: items.len(),
        total_daily_cost: Money::new(total_daily_cost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_aggregate_empty() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(aggregate(&[], now), CatalogStatistics::default());
    }

    #[test]
    fn test_aggregate_sums_rounded_daily_costs() {
        let now = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
        let items = vec![
            // 10 / 6 days -> 1.67
            Item::new("Mug", 10.0, "2024-01-01"),
            // 365-day lifespan -> 10.00
            Item::new("Laptop", 3650.0, "2023-01-01").with_retirement("2024-01-01"),
            // No purchase date -> 0.00
            Item::new("Gift", 25.5, "0"),
        ];

        let stats = aggregate(&items, now);
        assert_eq!(stats.total_items, 3);
        assert!((stats.total_value - 3685.5).abs() < 1e-9);
        assert_eq!(stats.total_daily_cost.to_string(), "11.67");
    }

    #[test]
    fn test_aggregate_is_fresh_per_call() {
        let items = vec![Item::new("Desk", 100.0, "2024-01-01")];
        let early = aggregate(&items, Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap());
        let late = aggregate(&items, Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
        assert_eq!(early.total_daily_cost.to_string(), "50.00");
        assert_eq!(late.total_daily_cost.to_string(), "25.00");
    }
}
