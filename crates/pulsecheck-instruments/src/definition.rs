use std::cmp::Ordering;
use std::collections::HashSet;

use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::tier::{Classification, HealthImpact, RiskLevel};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::thresholds::ThresholdTable;

/// How a response's item values combine into the score that is classified
/// on the five-tier risk scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AggregationMode {
    /// Mean of per-category averages of normalized answers.
    PerCategoryNormalizedAverage,
    /// Sum of every normalized item value.
    RawSummedTotal,
}

/// Which end of the normalized scale is the good one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreDirection {
    FavorableHigh,
    /// Symptom-load instruments: a higher score is worse.
    SeverityHigh,
}

impl ScoreDirection {
    /// Order two scores so that the more critical one sorts first.
    pub fn criticality(self, a: f64, b: f64) -> Ordering {
        match self {
            ScoreDirection::FavorableHigh => a.total_cmp(&b),
            ScoreDirection::SeverityHigh => b.total_cmp(&a),
        }
    }
}

/// Inclusive bounds of an item's answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleRange {
    pub min: i32,
    pub max: i32,
}

impl ScaleRange {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringProfile {
    pub aggregation: AggregationMode,
    pub direction: ScoreDirection,
    pub risk_levels: ThresholdTable<RiskLevel>,
    pub health_impact: ThresholdTable<HealthImpact>,
}

impl ScoringProfile {
    pub fn classify_risk(&self, score: f64) -> RiskLevel {
        self.risk_levels.classify(score)
    }

    pub fn classify_health(&self, score: f64) -> HealthImpact {
        self.health_impact.classify(score)
    }

    /// `risk_score` is whatever [`AggregationMode`] produces for a response;
    /// `health_score` is always an average on the item scale.
    pub fn classify(&self, risk_score: f64, health_score: f64) -> Classification {
        Classification {
            risk_level: self.classify_risk(risk_score),
            health_impact: self.classify_health(health_score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub item_number: u32,
    pub text: String,
    pub category: CategoryId,
    pub scale: ScaleRange,
    /// Reverse-scored: normalized as `scale.max + 1 - value`.
    pub inverted: bool,
}

/// Full schema of one questionnaire. Category and item order are
/// significant: ranking ties break on declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InstrumentDefinition {
    pub id: String,
    pub name: String,
    pub version: u32,
    pub profile: ScoringProfile,
    pub categories: Vec<Category>,
    pub items: Vec<Item>,
}

impl InstrumentDefinition {
    /// Parse and validate a definition supplied as JSON.
    pub fn from_json(json: &str) -> Result<Self, InstrumentError> {
        let definition: InstrumentDefinition = serde_json::from_str(json)?;
        definition.validate()?;
        tracing::info!(
            instrument = %definition.id,
            version = definition.version,
            items = definition.items.len(),
            "loaded instrument definition"
        );
        Ok(definition)
    }

    pub fn validate(&self) -> Result<(), InstrumentError> {
        let invalid = |reason: String| InstrumentError::InvalidDefinition {
            instrument_id: self.id.clone(),
            reason,
        };

        if self.id.is_empty() {
            return Err(invalid("empty instrument id".to_string()));
        }
        if self.categories.is_empty() || self.items.is_empty() {
            return Err(invalid("instrument has no categories or no items".to_string()));
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(invalid(format!("duplicate category '{}'", category.id)));
            }
        }

        let mut item_numbers = HashSet::new();
        for item in &self.items {
            if !item_numbers.insert(item.item_number) {
                return Err(invalid(format!("duplicate item number {}", item.item_number)));
            }
            if item.scale.min >= item.scale.max {
                return Err(invalid(format!(
                    "item {} has an empty scale [{}, {}]",
                    item.item_number, item.scale.min, item.scale.max
                )));
            }
            if !category_ids.contains(&item.category) {
                return Err(InstrumentError::UnknownCategory {
                    instrument_id: self.id.clone(),
                    category: item.category.clone(),
                });
            }
        }

        for category in &self.categories {
            if self.items_in(&category.id).next().is_none() {
                return Err(invalid(format!("category '{}' has no items", category.id)));
            }
        }

        self.profile
            .risk_levels
            .check()
            .map_err(|e| invalid(format!("risk levels: {e}")))?;
        self.profile
            .health_impact
            .check()
            .map_err(|e| invalid(format!("health impact: {e}")))?;

        Ok(())
    }

    pub fn item(&self, item_number: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.item_number == item_number)
    }

    /// Resolve a caller-supplied category id against this definition.
    pub fn category(&self, id: &CategoryId) -> Result<&Category, InstrumentError> {
        self.categories
            .iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| InstrumentError::UnknownCategory {
                instrument_id: self.id.clone(),
                category: id.clone(),
            })
    }

    /// Declaration index of a category; used as the ranking tie-breaker.
    pub fn category_position(&self, id: &CategoryId) -> Option<usize> {
        self.categories.iter().position(|c| &c.id == id)
    }

    /// Declaration index of an item.
    pub fn item_position(&self, item_number: u32) -> Option<usize> {
        self.items.iter().position(|i| i.item_number == item_number)
    }

    pub fn items_in<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a Item> {
        self.items.iter().filter(move |i| &i.category == category)
    }
}
