// Data model shared between the cost engine and whatever renders its output.
pub mod models;
pub mod report;
pub mod utils;

pub use models::{DateValue, Item, Money};
pub use report::{CatalogReport, CatalogStatistics, CostBreakdown, ItemReport, ItemStatus, StatusCategory, TotalDays};
