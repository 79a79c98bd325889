use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AtelierError>;

#[derive(Debug, Error)]
pub enum AtelierError {
    #[error("Storage error ({0}): {1}")]
    Storage(String, String),

    #[error("Backup error: {0}")]
    Backup(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
