use thiserror::Error;

/// Failure to obtain a portfolio data document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("browser environment unavailable: {0}")]
    Unavailable(String),
    #[error("request for {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("could not read body of {url}: {reason}")]
    Body { url: String, reason: String },
    #[error("{url} is not a valid portfolio document: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// Both the primary and the fallback document failed.
    #[error("primary data failed ({primary}); fallback data failed ({fallback})")]
    Exhausted {
        primary: Box<LoadError>,
        fallback: Box<LoadError>,
    },
}
