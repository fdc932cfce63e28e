use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate response id: {0}")]
    DuplicateResponse(Uuid),

    #[error("invalid category id: {0:?}")]
    InvalidCategoryId(String),
}
