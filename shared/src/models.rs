use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::utils::{format_money, round_money};

/// A date-like value as it arrives from the item feed.
///
/// The feed encodes "no date" several ways (`null`, `0`, `"0"`, empty
/// string, missing key). All of them collapse to [`DateValue::Absent`] when
/// the value is built, so later code only has one case to check.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DateValue {
    #[default]
    Absent,
    /// An already-resolved instant (never produced by the JSON feed).
    Instant(DateTime<Utc>),
    /// A bare number, interpreted later as an epoch count.
    Epoch(f64),
    /// Any non-sentinel string.
    Text(String),
    /// Arrays, objects, `true`.
    Other(Value),
}

impl DateValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, DateValue::Absent)
    }
}

impl From<Value> for DateValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => DateValue::Absent,
            Value::Number(n) => match n.as_f64() {
                Some(f) => DateValue::from(f),
                None => DateValue::Absent,
            },
            Value::String(s) => DateValue::from(s),
            other => DateValue::Other(other),
        }
    }
}

impl From<String> for DateValue {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == "0" {
            DateValue::Absent
        } else {
            DateValue::Text(s)
        }
    }
}

impl From<&str> for DateValue {
    fn from(s: &str) -> Self {
        DateValue::from(s.to_string())
    }
}

impl From<f64> for DateValue {
    fn from(n: f64) -> Self {
        if n == 0.0 || n.is_nan() {
            DateValue::Absent
        } else {
            DateValue::Epoch(n)
        }
    }
}

impl From<i64> for DateValue {
    fn from(n: i64) -> Self {
        DateValue::from(n as f64)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(instant: DateTime<Utc>) -> Self {
        DateValue::Instant(instant)
    }
}

impl<T: Into<DateValue>> From<Option<T>> for DateValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateValue::Absent, Into::into)
    }
}

impl<'de> Deserialize<'de> for DateValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(DateValue::from)
    }
}

impl Serialize for DateValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DateValue::Absent => serializer.serialize_none(),
            DateValue::Instant(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            // Whole epoch counts go back out as integers
            DateValue::Epoch(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                serializer.serialize_i64(*n as i64)
            }
            DateValue::Epoch(n) => serializer.serialize_f64(*n),
            DateValue::Text(s) => serializer.serialize_str(s),
            DateValue::Other(v) => v.serialize(serializer),
        }
    }
}

/// An owned item as supplied by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub purchase_date: DateValue,
    #[serde(default)]
    pub warranty_date: DateValue,
    #[serde(default)]
    pub retirement_date: DateValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64, purchase_date: impl Into<DateValue>) -> Self {
        Self {
            name: name.into(),
            price,
            purchase_date: purchase_date.into(),
            ..Self::default()
        }
    }

    pub fn with_warranty(mut self, warranty_date: impl Into<DateValue>) -> Self {
        self.warranty_date = warranty_date.into();
        self
    }

    pub fn with_retirement(mut self, retirement_date: impl Into<DateValue>) -> Self {
        self.retirement_date = retirement_date.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// True when no retirement date was recorded at all.
    ///
    /// An unparseable retirement string is not "in use" for display purposes,
    /// even though cost amortization treats it as indefinite use.
    pub fn in_use(&self) -> bool {
        self.retirement_date.is_absent()
    }
}

/// A monetary amount.
///
/// Holds the exact value; rounding half-up to two decimals happens only when
/// it is rendered (or serialized) as a string such as `"10.00"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Money = Money(0.0);

    pub fn new(value: f64) -> Self {
        Money(value)
    }

    /// Builds an amount already rounded to whole cents.
    pub fn rounded(value: f64) -> Self {
        Money(round_money(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_money(self.0))
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_sentinels_collapse_to_absent() {
        for raw in [json!(null), json!(0), json!("0"), json!(""), json!(false), json!(0.0)] {
            assert_eq!(DateValue::from(raw.clone()), DateValue::Absent, "raw value {}", raw);
        }
    }

    #[test]
    fn test_non_sentinels_are_kept() {
        assert_eq!(DateValue::from(json!(1_700_000_000)), DateValue::Epoch(1_700_000_000.0));
        assert_eq!(DateValue::from(json!("2021-06")), DateValue::Text("2021-06".to_string()));
        assert_eq!(DateValue::from(json!("000")), DateValue::Text("000".to_string()));
        assert_eq!(DateValue::from(json!(true)), DateValue::Other(json!(true)));
    }

    #[test]
    fn test_item_deserialize_camel_case_with_defaults() {
        let item: Item = serde_json::from_value(json!({
            "name": "Laptop",
            "price": 3650,
            "purchaseDate": "2024-01-01",
            "retirementDate": "0",
            "category": "Electronics"
        }))
        .unwrap();

        assert_eq!(item.name, "Laptop");
        assert_eq!(item.price, 3650.0);
        assert_eq!(item.purchase_date, DateValue::Text("2024-01-01".to_string()));
        assert!(item.warranty_date.is_absent());
        assert!(item.retirement_date.is_absent());
        assert!(item.in_use());
        assert_eq!(item.category.as_deref(), Some("Electronics"));
        assert_eq!(item.notes, None);
    }

    #[test]
    fn test_date_value_serialize() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(serde_json::to_value(DateValue::Instant(instant)).unwrap(), json!("2024-01-01T00:00:00.000Z"));
        assert_eq!(serde_json::to_value(DateValue::Epoch(1_700_000_000.0)).unwrap(), json!(1_700_000_000i64));
        assert_eq!(serde_json::to_value(DateValue::Absent).unwrap(), json!(null));
    }

    #[test]
    fn test_money_display_and_serialize() {
        let m = Money::new(3650.0 / 366.0);
        assert_eq!(m.to_string(), "9.97");
        assert_eq!(serde_json::to_value(m).unwrap(), json!("9.97"));
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_money_keeps_exact_value() {
        let m = Money::new(0.125);
        assert_eq!(m.value(), 0.125);
        assert_eq!(m.to_string(), "0.13");
        assert_eq!(Money::rounded(0.125).value(), 0.13);
    }

    #[test]
    fn test_padded_sentinel_is_absent() {
        assert_eq!(DateValue::from(" 0 "), DateValue::Absent);
        assert_eq!(DateValue::from(json!("   ")), DateValue::Absent);

        let item = Item::new("Chair", 120.0, "2024-01-01").with_retirement(" 0 ");
        assert!(item.in_use());
    }
}
