use pulsecheck_core::models::tier::{HealthImpact, RiskLevel};

use super::{category, item};
use crate::Instrument;
use crate::definition::{
    AggregationMode, InstrumentDefinition, ScaleRange, ScoreDirection, ScoringProfile,
};
use crate::thresholds::ThresholdTable;

/// Occupational psychosocial risk indicator tool.
/// 35 items across 7 working-condition categories, each rated 1–5.
/// Demands and Relationships items are negatively worded and reverse-scored,
/// so after normalization a higher score is always more favorable.
pub struct IndicatorTool;

impl Instrument for IndicatorTool {
    fn definition(&self) -> &InstrumentDefinition {
        static DEFINITION: std::sync::LazyLock<InstrumentDefinition> =
            std::sync::LazyLock::new(|| {
                let scale = ScaleRange { min: 1, max: 5 };

                let categories = vec![
                    category("demands", "Demands", "Workload, work patterns and the work environment"),
                    category("control", "Control", "How much say people have in the way they do their work"),
                    category("manager_support", "Manager support", "Encouragement and resources provided by line management"),
                    category("peer_support", "Peer support", "Encouragement and resources provided by colleagues"),
                    category("relationships", "Relationships", "Promoting positive working and avoiding conflict"),
                    category("role", "Role", "Whether people understand their role in the organization"),
                    category("change", "Change", "How organizational change is managed and communicated"),
                ];

                #[rustfmt::skip]
                let items = vec![
                    item(1, "role", scale, false, "I am clear what is expected of me at work"),
                    item(2, "control", scale, false, "I can decide when to take a break"),
                    item(3, "demands", scale, true, "Different groups at work demand things from me that are hard to combine"),
                    item(4, "role", scale, false, "I know how to go about getting my job done"),
                    item(5, "relationships", scale, true, "I am subject to personal harassment in the form of unkind words or behavior"),
                    item(6, "demands", scale, true, "I have unachievable deadlines"),
                    item(7, "peer_support", scale, false, "If work gets difficult, my colleagues will help me"),
                    item(8, "manager_support", scale, false, "I am given supportive feedback on the work I do"),
                    item(9, "demands", scale, true, "I have to work very intensively"),
                    item(10, "control", scale, false, "I have a say in my own work speed"),
                    item(11, "role", scale, false, "I am clear what my duties and responsibilities are"),
                    item(12, "demands", scale, true, "I have to neglect some tasks because I have too much to do"),
                    item(13, "role", scale, false, "I am clear about the goals and objectives for my department"),
                    item(14, "relationships", scale, true, "There is friction or anger between colleagues"),
                    item(15, "control", scale, false, "I have a choice in deciding how I do my work"),
                    item(16, "demands", scale, true, "I am unable to take sufficient breaks"),
                    item(17, "role", scale, false, "I understand how my work fits into the overall aim of the organization"),
                    item(18, "demands", scale, true, "I am pressured to work long hours"),
                    item(19, "control", scale, false, "I have a choice in deciding what I do at work"),
                    item(20, "demands", scale, true, "I have to work very fast"),
                    item(21, "relationships", scale, true, "I am subject to bullying at work"),
                    item(22, "demands", scale, true, "I have unrealistic time pressures"),
                    item(23, "manager_support", scale, false, "I can rely on my line manager to help me out with a work problem"),
                    item(24, "peer_support", scale, false, "I get the help and support I need from colleagues"),
                    item(25, "control", scale, false, "I have some say over the way I work"),
                    item(26, "change", scale, false, "I have sufficient opportunities to question managers about change at work"),
                    item(27, "peer_support", scale, false, "I receive the respect at work I deserve from my colleagues"),
                    item(28, "change", scale, false, "Staff are always consulted about change at work"),
                    item(29, "manager_support", scale, false, "I can talk to my line manager about something that has upset or annoyed me about work"),
                    item(30, "control", scale, false, "My working time can be flexible"),
                    item(31, "peer_support", scale, false, "My colleagues are willing to listen to my work-related problems"),
                    item(32, "change", scale, false, "When changes are made at work, I am clear how they will work out in practice"),
                    item(33, "manager_support", scale, false, "I am supported through emotionally demanding work"),
                    item(34, "relationships", scale, true, "Relationships at work are strained"),
                    item(35, "manager_support", scale, false, "My line manager encourages me at work"),
                ];

                InstrumentDefinition {
                    id: "indicator_tool".to_string(),
                    name: "Psychosocial Risk Indicator Tool".to_string(),
                    version: 1,
                    profile: ScoringProfile {
                        aggregation: AggregationMode::PerCategoryNormalizedAverage,
                        direction: ScoreDirection::FavorableHigh,
                        risk_levels: ThresholdTable::at_least(
                            &[
                                (4.21, RiskLevel::VeryLow),
                                (3.41, RiskLevel::Low),
                                (2.61, RiskLevel::Moderate),
                                (1.81, RiskLevel::High),
                            ],
                            RiskLevel::VeryHigh,
                        ),
                        health_impact: ThresholdTable::at_least(
                            &[
                                (3.67, HealthImpact::Favorable),
                                (2.33, HealthImpact::Intermediate),
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
