use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Contact already exists.")]
    DuplicateContact,

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Unrecognized command: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Stored data is corrupt: {0}")]
    CorruptStorage(String),
}
