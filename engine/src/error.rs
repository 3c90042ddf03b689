use thiserror::Error;

// Errors only arise at the edges (files, config, JSON syntax). Date and cost
// computations never fail; bad dates degrade to "absent" instead.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Item feed error: {0}")]
    FeedError(String),
}
