use pulsecheck_instruments::error::InstrumentError;
use thiserror::Error;

/// Configuration mismatches. Bad answer data never produces one of these;
/// it is rejected per answer and counted instead.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error("invalid recommendation catalog for '{instrument_id}': {reason}")]
    InvalidCatalog {
        instrument_id: String,
        reason: String,
    },

    #[error("recommendation catalog is for '{catalog}' but the instrument is '{instrument}'")]
    CatalogMismatch { catalog: String, instrument: String },

    #[error("no built-in recommendation catalog for instrument: {0}")]
    NoBuiltinCatalog(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
