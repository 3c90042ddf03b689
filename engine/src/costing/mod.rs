// Cost and status calculations over items. Every function here is pure: the
// caller samples "now" once and passes it to each call.
pub mod aggregate;
pub mod amortize;
pub mod status;

pub use aggregate::aggregate;
pub use amortize::amortize;
pub use status::{classify, StatusClassifier};
