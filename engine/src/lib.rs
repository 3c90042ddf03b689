// Engine library root
// Date normalization, cost amortization and warranty status for owned items.

pub mod config;
pub mod costing;
pub mod data;
pub mod dates;
pub mod error;
pub mod services;

pub use costing::{aggregate, amortize, classify, StatusClassifier};
pub use dates::normalize;
pub use error::EngineError;
