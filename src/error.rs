use thiserror::Error;

/// Everything that can stop a query from producing a URL. Classification,
/// prompt building and normalization are total, so only the completion call,
/// configuration and local file output appear here.
#[derive(Error, Debug)]
pub enum GeoIntError {
    /// The completion service could not be reached.
    #[error("Completion service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The completion service answered, but not with usable text.
    #[error("Completion service failed: {0}")]
    UpstreamFailed(String),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
