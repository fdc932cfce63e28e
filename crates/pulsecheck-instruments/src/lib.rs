//! pulsecheck-instruments
//!
//! Questionnaire instrument definitions. Pure data plus the per-item rules
//! that depend only on a definition: answer normalization and score
//! classification. Aggregation over many responses lives in
//! `pulsecheck-engine`.

pub mod definition;
pub mod error;
pub mod instruments;
pub mod registry;
pub mod scoring;
pub mod thresholds;

use definition::InstrumentDefinition;

/// Trait implemented by each built-in questionnaire instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "indicator_tool").
    fn id(&self) -> &str {
        &self.definition().id
    }

    /// Human-readable name.
    fn name(&self) -> &str {
        &self.definition().name
    }

    /// Items, categories, and scoring profile.
    fn definition(&self) -> &InstrumentDefinition;
}

/// Return all built-in instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::indicator_tool::IndicatorTool),
        Box::new(instruments::burnout_inventory::BurnoutInventory),
    ]
}

/// Look up a built-in instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
