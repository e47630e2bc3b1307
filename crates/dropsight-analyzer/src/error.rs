use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The service answered with an explicit error (an `{ "error": ... }`
    /// body or a non-2xx status). Recovered per item with estimated scores.
    #[error("analysis service error: {0}")]
    Service(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
