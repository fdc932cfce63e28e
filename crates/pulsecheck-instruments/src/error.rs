use pulsecheck_core::models::category::CategoryId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown category '{category}' for instrument '{instrument_id}'")]
    UnknownCategory {
        instrument_id: String,
        category: CategoryId,
    },

    #[error("invalid definition for instrument '{instrument_id}': {reason}")]
    InvalidDefinition {
        instrument_id: String,
        reason: String,
    },

    #[error("instrument already registered: {0}")]
    DuplicateInstrument(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
