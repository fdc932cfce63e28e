use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::category::CategoryId;
use super::tier::{Classification, HealthImpact, RiskLevel};

/// Convert a collection length to a report count, saturating at `u32::MAX`.
pub fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// The grouping a set of responses was rolled up under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
#[ts(export)]
pub enum PartitionKey {
    Organization,
    Department(String),
    /// Responses submitted without a department.
    Unassigned,
    Respondent(Uuid),
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKey::Organization => f.write_str("organization"),
            PartitionKey::Department(name) => write!(f, "department:{name}"),
            PartitionKey::Unassigned => f.write_str("unassigned"),
            PartitionKey::Respondent(id) => write!(f, "respondent:{id}"),
        }
    }
}

/// Average of the normalized answers in one category.
///
/// Never constructed for a category without answers; absence is `None` at
/// the use site, not a zero average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryScore {
    pub category: CategoryId,
    pub average: f64,
    pub sample_count: u32,
}

/// Scores for a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseScore {
    pub response_id: Uuid,
    pub category_scores: Vec<CategoryScore>,
    pub overall_average: Option<f64>,
    /// Sum of normalized item values; only for summed-total instruments and
    /// only when every item was validly answered.
    pub total: Option<f64>,
    pub classification: Option<Classification>,
    pub rejected_answer_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateReport {
    pub partition_key: PartitionKey,
    pub response_count: u32,
    /// Present categories only, in declaration order.
    pub category_scores: Vec<CategoryScore>,
    /// Mean of the present category averages.
    pub overall_average: Option<f64>,
    pub mean_total: Option<f64>,
    /// Counts of each response's own risk level, not a classification of
    /// this partition's aggregate.
    pub risk_distribution: BTreeMap<RiskLevel, u32>,
    pub health_distribution: BTreeMap<HealthImpact, u32>,
    pub unclassified_count: u32,
    pub rejected_answer_count: u32,
}

impl AggregateReport {
    pub fn category_score(&self, category: &CategoryId) -> Option<&CategoryScore> {
        self.category_scores.iter().find(|s| &s.category == category)
    }

    pub fn classified_count(&self) -> u32 {
        self.risk_distribution.values().sum()
    }
}

/// One row of the per-question table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionRow {
    pub item_number: u32,
    pub text: String,
    pub category: CategoryId,
    pub average: f64,
    pub sample_count: u32,
    pub tier: HealthImpact,
}
