use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::CategoryId;
use super::report::PartitionKey;
use super::tier::HealthImpact;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub category: CategoryId,
    pub tier: HealthImpact,
    pub text: String,
    pub actions: Vec<String>,
    /// True when no catalog entry matched and the generic text was used.
    #[serde(default)]
    pub is_fallback: bool,
}

/// How soon an action plan entry should be acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActionPriority {
    Immediate,
    ShortTerm,
}

impl ActionPriority {
    /// Favorable categories need no action.
    pub fn for_tier(tier: HealthImpact) -> Option<Self> {
        match tier {
            HealthImpact::Risk => Some(ActionPriority::Immediate),
            HealthImpact::Intermediate => Some(ActionPriority::ShortTerm),
            HealthImpact::Favorable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionItem {
    pub category: CategoryId,
    pub category_name: String,
    pub priority: ActionPriority,
    pub score: f64,
    pub tier: HealthImpact,
    pub recommendation: Recommendation,
}

/// Action items for one partition, most critical category first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionPlan {
    pub partition_key: PartitionKey,
    pub items: Vec<ActionItem>,
}

impl ActionPlan {
    pub fn immediate(&self) -> impl Iterator<Item = &ActionItem> {
        self.items
            .iter()
            .filter(|i| i.priority == ActionPriority::Immediate)
    }

    pub fn short_term(&self) -> impl Iterator<Item = &ActionItem> {
        self.items
            .iter()
            .filter(|i| i.priority == ActionPriority::ShortTerm)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
