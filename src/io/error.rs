use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json serialize error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
