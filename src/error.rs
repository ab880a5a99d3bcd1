#[derive(Debug, thiserror::Error)]
pub enum NasiyaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Fetch superseded by a newer request")]
    Aborted,
}

pub type Result<T> = std::result::Result<T, NasiyaError>;
