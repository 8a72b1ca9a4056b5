/// Errors from cover catalog loading and store lookups.
#[derive(Debug, thiserror::Error)]
pub enum CoverError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error for {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("store API error: {0}")]
    Api(String),
}
