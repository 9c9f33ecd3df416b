use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum SpendzError {
    /// A field failed validation. Recoverable: the caller re-prompts.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),

    /// The storage medium rejected a write. The in-memory collection is
    /// rolled back before this propagates, so memory and disk stay in sync.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SpendzError>;
