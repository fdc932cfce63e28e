use pulsecheck_core::models::tier::{HealthImpact, RiskLevel};

use super::{category, item};
use crate::Instrument;
use crate::definition::{
    AggregationMode, InstrumentDefinition, ScaleRange, ScoreDirection, ScoringProfile,
};
use crate::thresholds::ThresholdTable;

/// Burnout inventory: 20 frequency items rated 1 (never) to 6 (every day).
/// Scored as a symptom load: the 20 normalized values are summed (20–120)
/// and higher is worse. Professional efficacy items describe the absence of
/// burnout and are reverse-scored onto the symptom direction.
pub struct BurnoutInventory;

impl Instrument for BurnoutInventory {
    fn definition(&self) -> &InstrumentDefinition {
        static DEFINITION: std::sync::LazyLock<InstrumentDefinition> =
            std::sync::LazyLock::new(|| {
                let scale = ScaleRange { min: 1, max: 6 };

                let categories = vec![
                    category("exhaustion", "Exhaustion", "Emotional and physical depletion caused by work"),
                    category("distancing", "Distancing", "Cynical or detached attitude toward the job and the people in it"),
                    category("professional_efficacy", "Professional efficacy", "Sense of competence and accomplishment at work"),
                ];

                #[rustfmt::skip]
                let items = vec![
                    item(1, "exhaustion", scale, false, "My work leaves me emotionally drained"),
                    item(2, "exhaustion", scale, false, "By the end of the workday I have nothing left"),
                    item(3, "exhaustion", scale, false, "Facing another workday tires me before it starts"),
                    item(4, "exhaustion", scale, false, "A full day of work is a strain for me"),
                    item(5, "exhaustion", scale, false, "I feel burned out by my job"),
                    item(6, "exhaustion", scale, false, "My job frustrates me"),
                    item(7, "exhaustion", scale, false, "I push myself harder than I can sustain"),
                    item(8, "exhaustion", scale, false, "I feel I cannot keep going like this"),
                    item(9, "distancing", scale, false, "I have lost interest in my work since I started this job"),
                    item(10, "distancing", scale, false, "I have become more cynical about whether my work contributes anything"),
                    item(11, "distancing", scale, false, "I just want to do my job and not be bothered"),
                    item(12, "distancing", scale, false, "I doubt the significance of my work"),
                    item(13, "distancing", scale, false, "I treat some people at work more impersonally than I would like"),
                    item(14, "distancing", scale, false, "I have become harder toward people since taking this job"),
                    item(15, "professional_efficacy", scale, true, "I can effectively solve the problems that arise in my work"),
                    item(16, "professional_efficacy", scale, true, "I make an effective contribution to what my organization does"),
                    item(17, "professional_efficacy", scale, true, "I feel energized when I accomplish something at work"),
                    item(18, "professional_efficacy", scale, true, "I have accomplished many worthwhile things in this job"),
                    item(19, "professional_efficacy", scale, true, "At work I am confident that I get things done"),
                    item(20, "professional_efficacy", scale, true, "I deal with emotional problems at work calmly"),
                ];

                InstrumentDefinition {
                    id: "burnout_inventory".to_string(),
                    name: "Burnout Inventory".to_string(),
                    version: 1,
                    profile: ScoringProfile {
                        aggregation: AggregationMode::RawSummedTotal,
                        direction: ScoreDirection::SeverityHigh,
                        risk_levels: ThresholdTable::at_most(
                            &[
                                (20.0, RiskLevel::VeryLow),
                                (40.0, RiskLevel::Low),
                                (60.0, RiskLevel::Moderate),
                                (80.0, RiskLevel::High),
                            ],
                            RiskLevel::VeryHigh,
                        ),
                        // Thirds of the 1–6 item scale.
                        health_impact: ThresholdTable::at_most(
                            &[
                                (2.67, HealthImpact::Favorable),
                                (4.33, HealthImpact::Intermediate),
                            ],
                            HealthImpact::Risk,
                        ),
                    },
                    categories,
                    items,
                }
            });
        &DEFINITION
    }
}
