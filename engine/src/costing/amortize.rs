// Ownership cost amortization for a single item
use chrono::{DateTime, Utc};
use shared::models::{Item, Money};
use shared::report::{CostBreakdown, TotalDays};
use tracing::debug;

use crate::dates::{ceil_days, normalize};

/// Computes the cost breakdown of `item` as of `now`.
///
/// Without a usable purchase date the result is [`CostBreakdown::zero`].
/// Without a usable retirement date the item is in indefinite use: its daily
/// cost is the price spread over the days owned so far. Otherwise the price
/// is spread over the purchase-to-retirement lifespan.
pub fn amortize(item: &Item, now: DateTime<Utc>) -> CostBreakdown {
    let Some(purchased) = normalize(&item.purchase_date) else {
        debug!(item = %item.name, "no usable purchase date, reporting zero cost");
        return CostBreakdown::zero();
    };

    match normalize(&item.retirement_date) {
        None => amortize_indefinite(item.price, purchased, now),
        Some(retired) => amortize_retired(item.price, purchased, retired),
    }
}

fn amortize_indefinite(price: f64, purchased: DateTime<Utc>, now: DateTime<Utc>) -> CostBreakdown {
    // Purchases dated in the future count as zero days
    let days_used = ceil_days(now - purchased).max(0);
    let daily_cost = if days_used > 0 {
        Money::rounded(price / days_used as f64)
    } else {
        Money::ZERO
    };

    CostBreakdown {
        daily_cost,
        total_days: TotalDays::Indefinite,
        days_used,
        consumed_value: consumed_value(price, daily_cost, days_used),
    }
}

fn amortize_retired(price: f64, purchased: DateTime<Utc>, retired: DateTime<Utc>) -> CostBreakdown {
    let lifespan = ceil_days(retired - purchased);
    let days_used = lifespan.max(0);

    // Retired on or before the purchase date: the whole price is consumed at
    // once and the non-positive lifespan is reported unchanged.
    if lifespan <= 0 {
        debug!(lifespan, "retirement date is not after purchase date");
        return CostBreakdown {
            daily_cost: Money::ZERO,
            total_days: TotalDays::Days(lifespan),
            days_used,
            consumed_value: Money::new(price),
        };
    }

    let daily_cost = Money::rounded(price / lifespan as f64);
    CostBreakdown {
        daily_cost,
        total_days: TotalDays::Days(lifespan),
        days_used,
        consumed_value: consumed_value(price, daily_cost, days_used),
    }
}

// Uses the rounded daily cost, then caps at the price. The capped value is
// kept exact; rounding happens only when it is rendered.
fn consumed_value(price: f64, daily_cost: Money, days_used: i64) -> Money {
    Money::new(price.min(daily_cost.value() * days_used as f64))
}
