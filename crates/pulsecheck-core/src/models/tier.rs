use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Five-level severity classification, ordered from least to most severe.
///
/// Instruments that number their bands (1 = lowest severity) map band `n`
/// onto the `n`-th variant; see [`RiskLevel::from_tier_number`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Moderate,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    /// Band number, 1 (least severe) through 5.
    pub fn tier_number(self) -> u8 {
        match self {
            RiskLevel::VeryLow => 1,
            RiskLevel::Low => 2,
            RiskLevel::Moderate => 3,
            RiskLevel::High => 4,
            RiskLevel::VeryHigh => 5,
        }
    }

    pub fn from_tier_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very low",
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very high",
        }
    }
}

/// Coarse traffic-light classification used for summaries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HealthImpact {
    Favorable,
    Intermediate,
    Risk,
}

impl HealthImpact {
    pub const ALL: [HealthImpact; 3] = [
        HealthImpact::Favorable,
        HealthImpact::Intermediate,
        HealthImpact::Risk,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HealthImpact::Favorable => "favorable",
            HealthImpact::Intermediate => "intermediate",
            HealthImpact::Risk => "risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub risk_level: RiskLevel,
    pub health_impact: HealthImpact,
}
