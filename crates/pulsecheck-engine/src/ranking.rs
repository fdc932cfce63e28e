//! Critical-first orderings for "focus areas" and "most critical questions"
//! sections. Ties always break on declaration order in the definition.

use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::report::{CategoryScore, QuestionRow};
use pulsecheck_core::models::response::Response;
use pulsecheck_core::models::tier::HealthImpact;
use pulsecheck_instruments::definition::InstrumentDefinition;
use pulsecheck_instruments::scoring::normalize_response;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A present category with its traffic-light tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RankedCategory {
    pub category: CategoryId,
    pub name: String,
    pub score: f64,
    pub sample_count: u32,
    pub tier: HealthImpact,
}

/// Order category scores most critical first.
///
/// Scores for categories the definition does not declare are dropped.
pub fn rank_categories(
    definition: &InstrumentDefinition,
    scores: &[CategoryScore],
) -> Vec<RankedCategory> {
    let direction = definition.profile.direction;

    let mut ranked: Vec<(usize, RankedCategory)> = scores
        .iter()
        .filter_map(|score| {
            let position = definition.category_position(&score.category)?;
            let category = &definition.categories[position];
            Some((
                position,
                RankedCategory {
                    category: category.id.clone(),
                    name: category.name.clone(),
                    score: score.average,
                    sample_count: score.sample_count,
                    tier: definition.profile.classify_health(score.average),
                },
            ))
        })
        .collect();

    ranked.sort_by(|(pos_a, a), (pos_b, b)| {
        direction
            .criticality(a.score, b.score)
            .then(pos_a.cmp(pos_b))
    });
    ranked.into_iter().map(|(_, r)| r).collect()
}

/// Per-question averages across `responses`, most critical first.
///
/// Items nobody answered validly are omitted.
pub fn question_table(
    definition: &InstrumentDefinition,
    responses: &[Response],
) -> Vec<QuestionRow> {
    let mut sums = vec![(0i64, 0u32); definition.items.len()];
    for response in responses {
        let normalized = normalize_response(definition, response);
        for answer in &normalized.answers {
            if let Some(pos) = definition.item_position(answer.item_number) {
                sums[pos].0 += i64::from(answer.value);
                sums[pos].1 = sums[pos].1.saturating_add(1);
            }
        }
    }

    // Position in `rows` is item declaration order, so a stable sort keeps
    // ties in that order.
    let mut rows: Vec<QuestionRow> = definition
        .items
        .iter()
        .zip(sums)
        .filter(|(_, (_, count))| *count > 0)
        .map(|(item, (sum, count))| {
            let average = sum as f64 / f64::from(count);
            QuestionRow {
                item_number: item.item_number,
                text: item.text.clone(),
                category: item.category.clone(),
                average,
                sample_count: count,
                tier: definition.profile.classify_health(average),
            }
        })
        .collect();

    let direction = definition.profile.direction;
    rows.sort_by(|a, b| direction.criticality(a.average, b.average));
    rows
}

/// The `n` most critical questions.
pub fn most_critical_questions(
    definition: &InstrumentDefinition,
    responses: &[Response],
    n: usize,
) -> Vec<QuestionRow> {
    let mut rows = question_table(definition, responses);
    rows.truncate(n);
    rows
}
