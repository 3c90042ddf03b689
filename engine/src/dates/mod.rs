// Date handling for loosely formatted feed values
pub mod normalizer;

pub use normalizer::{ceil_days, normalize};
