use crate::all_instruments;
use crate::definition::InstrumentDefinition;
use crate::error::InstrumentError;

/// The set of instrument definitions available to one scoring session.
///
/// Starts from the built-ins; callers may register further definitions
/// (e.g. a versioned definition loaded from storage). Ids are unique.
#[derive(Debug, Clone)]
pub struct InstrumentRegistry {
    definitions: Vec<InstrumentDefinition>,
}

impl InstrumentRegistry {
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    pub fn builtin() -> Self {
        Self {
            definitions: all_instruments()
                .iter()
                .map(|i| i.definition().clone())
                .collect(),
        }
    }

    /// Validate and add a definition.
    pub fn register(&mut self, definition: InstrumentDefinition) -> Result<(), InstrumentError> {
        definition.validate()?;
        if self.definitions.iter().any(|d| d.id == definition.id) {
            return Err(InstrumentError::DuplicateInstrument(definition.id));
        }
        tracing::info!(instrument = %definition.id, version = definition.version, "registered instrument");
        self.definitions.push(definition);
        Ok(())
    }

    /// Add a definition, replacing any existing one with the same id.
    pub fn upsert(&mut self, definition: InstrumentDefinition) -> Result<(), InstrumentError> {
        definition.validate()?;
        match self.definitions.iter_mut().find(|d| d.id == definition.id) {
            Some(existing) => {
                tracing::info!(
                    instrument = %definition.id,
                    from = existing.version,
                    to = definition.version,
                    "replaced instrument definition"
                );
                *existing = definition;
            }
            None => self.definitions.push(definition),
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<&InstrumentDefinition, InstrumentError> {
        self.definitions
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| InstrumentError::UnknownInstrument(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.iter().map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl Default for InstrumentRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
