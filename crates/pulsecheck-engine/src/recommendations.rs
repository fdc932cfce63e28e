//! Recommendation text is configuration, not code: each instrument has a
//! JSON catalog keyed by `(category, tier)`, validated against the
//! instrument definition when it is loaded.

use std::collections::HashMap;

use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::recommendation::Recommendation;
use pulsecheck_core::models::tier::HealthImpact;
use pulsecheck_instruments::definition::InstrumentDefinition;
use pulsecheck_instruments::error::InstrumentError;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub instrument_id: String,
    pub version: u32,
    pub entries: Vec<CatalogEntry>,
    pub fallback: FallbackEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub category: CategoryId,
    pub tier: HealthImpact,
    pub text: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

/// Used when a `(category, tier)` pair has no entry. `{category}` in the
/// text is replaced with the category's display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackEntry {
    pub text: String,
    #[serde(default)]
    pub actions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RecommendationCatalog {
    instrument_id: String,
    version: u32,
    entries: HashMap<(CategoryId, HealthImpact), CatalogEntry>,
    category_names: HashMap<CategoryId, String>,
    fallback: FallbackEntry,
}

impl RecommendationCatalog {
    /// Parse a catalog document and check it against `definition`.
    pub fn load(json: &str, definition: &InstrumentDefinition) -> Result<Self, EngineError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_document(document, definition)
    }

    /// The catalog shipped with a built-in instrument.
    pub fn builtin(definition: &InstrumentDefinition) -> Result<Self, EngineError> {
        let json = match definition.id.as_str() {
            "indicator_tool" => include_str!("../catalogs/indicator_tool.json"),
            "burnout_inventory" => include_str!("../catalogs/burnout_inventory.json"),
            other => return Err(EngineError::NoBuiltinCatalog(other.to_string())),
        };
        Self::load(json, definition)
    }

    pub fn from_document(
        document: CatalogDocument,
        definition: &InstrumentDefinition,
    ) -> Result<Self, EngineError> {
        if document.instrument_id != definition.id {
            return Err(EngineError::CatalogMismatch {
                catalog: document.instrument_id,
                instrument: definition.id.clone(),
            });
        }

        let mut entries = HashMap::with_capacity(document.entries.len());
        for entry in document.entries {
            definition.category(&entry.category)?;
            let key = (entry.category.clone(), entry.tier);
            if entries.contains_key(&key) {
                return Err(EngineError::InvalidCatalog {
                    instrument_id: definition.id.clone(),
                    reason: format!(
                        "duplicate entry for category '{}' at tier {}",
                        entry.category,
                        entry.tier.label()
                    ),
                });
            }
            entries.insert(key, entry);
        }

        let category_names = definition
            .categories
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect();

        tracing::info!(
            instrument = %definition.id,
            version = document.version,
            entries = entries.len(),
            "loaded recommendation catalog"
        );

        Ok(Self {
            instrument_id: document.instrument_id,
            version: document.version,
            entries,
            category_names,
            fallback: document.fallback,
        })
    }

    pub fn instrument_id(&self) -> &str {
        &self.instrument_id
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Resolve a category id against the instrument this catalog was
    /// loaded for.
    pub fn check_category(&self, category: &CategoryId) -> Result<(), EngineError> {
        if self.category_names.contains_key(category) {
            Ok(())
        } else {
            Err(InstrumentError::UnknownCategory {
                instrument_id: self.instrument_id.clone(),
                category: category.clone(),
            }
            .into())
        }
    }

    /// Recommendation for a category at a tier. Never fails: a missing
    /// entry yields the catalog's generic fallback.
    pub fn select(&self, category: &CategoryId, tier: HealthImpact) -> Recommendation {
        if let Some(entry) = self.entries.get(&(category.clone(), tier)) {
            return Recommendation {
                category: category.clone(),
                tier,
                text: entry.text.clone(),
                actions: entry.actions.clone(),
                is_fallback: false,
            };
        }

        tracing::debug!(
            instrument = %self.instrument_id,
            category = %category,
            tier = tier.label(),
            "no catalog entry, using fallback recommendation"
        );
        let name = self
            .category_names
            .get(category)
            .map(String::as_str)
            .unwrap_or_else(|| category.as_str());
        Recommendation {
            category: category.clone(),
            tier,
            text: self.fallback.text.replace("{category}", name),
            actions: self.fallback.actions.clone(),
            is_fallback: true,
        }
    }
}

pub fn select_recommendation(
    catalog: &RecommendationCatalog,
    category: &CategoryId,
    tier: HealthImpact,
) -> Recommendation {
    catalog.select(category, tier)
}
