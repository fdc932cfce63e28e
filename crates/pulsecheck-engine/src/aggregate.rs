//! Category averages over arbitrary sets of responses.
//!
//! A category average pools every normalized answer in the category across
//! the given responses. The overall average is the mean of the *present*
//! category averages, so a category with eight items carries the same weight
//! as one with three.

use std::collections::HashMap;

use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::report::{saturating_count, CategoryScore, ResponseScore};
use pulsecheck_core::models::response::Response;
use pulsecheck_instruments::definition::{AggregationMode, InstrumentDefinition};
use pulsecheck_instruments::scoring::{normalize_response, NormalizedResponse};

use crate::error::EngineError;

/// Maps item numbers to category positions for one definition.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    by_item: HashMap<u32, usize>,
    categories: usize,
}

impl CategoryIndex {
    pub fn new(definition: &InstrumentDefinition) -> Self {
        let by_item = definition
            .items
            .iter()
            .filter_map(|item| {
                definition
                    .category_position(&item.category)
                    .map(|pos| (item.item_number, pos))
            })
            .collect();
        Self {
            by_item,
            categories: definition.categories.len(),
        }
    }

    fn position(&self, item_number: u32) -> Option<usize> {
        self.by_item.get(&item_number).copied()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    sum: i64,
    count: u32,
}

impl Tally {
    fn add(&mut self, value: i32) {
        self.sum += i64::from(value);
        self.count = self.count.saturating_add(1);
    }

    fn average(self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / f64::from(self.count))
    }
}

fn tally<'a>(
    index: &CategoryIndex,
    responses: impl IntoIterator<Item = &'a NormalizedResponse>,
) -> Vec<Tally> {
    let mut tallies = vec![Tally::default(); index.categories];
    for response in responses {
        for answer in &response.answers {
            if let Some(pos) = index.position(answer.item_number) {
                tallies[pos].add(answer.value);
            }
        }
    }
    tallies
}

/// Category scores for the pooled answers of `responses`, in declaration
/// order. Categories without answers are left out.
pub fn category_scores<'a>(
    definition: &InstrumentDefinition,
    index: &CategoryIndex,
    responses: impl IntoIterator<Item = &'a NormalizedResponse>,
) -> Vec<CategoryScore> {
    tally(index, responses)
        .into_iter()
        .zip(&definition.categories)
        .filter_map(|(t, category)| {
            t.average().map(|average| CategoryScore {
                category: category.id.clone(),
                average,
                sample_count: t.count,
            })
        })
        .collect()
}

/// Average of one category across `responses`.
///
/// `Ok(None)` means no valid answers fell in the category; that is not a
/// zero score. An undefined category is a configuration error.
pub fn aggregate_category(
    definition: &InstrumentDefinition,
    responses: &[Response],
    category: &CategoryId,
) -> Result<Option<CategoryScore>, EngineError> {
    definition.category(category)?;
    let index = CategoryIndex::new(definition);
    let normalized: Vec<NormalizedResponse> = responses
        .iter()
        .map(|r| normalize_response(definition, r))
        .collect();

    Ok(category_scores(definition, &index, &normalized)
        .into_iter()
        .find(|s| &s.category == category))
}

/// Mean of the present category averages; `None` when there are none.
pub fn overall_average(scores: &[CategoryScore]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().map(|s| s.average).sum::<f64>() / scores.len() as f64)
}

/// Score and classify a single response.
pub fn score_response(definition: &InstrumentDefinition, response: &Response) -> ResponseScore {
    let index = CategoryIndex::new(definition);
    score_normalized(definition, &index, &normalize_response(definition, response))
}

pub(crate) fn score_normalized(
    definition: &InstrumentDefinition,
    index: &CategoryIndex,
    normalized: &NormalizedResponse,
) -> ResponseScore {
    let category_scores = category_scores(definition, index, [normalized]);
    let overall_average = overall_average(&category_scores);
    let profile = &definition.profile;

    // Rejected and duplicate answers are already gone, so a full count means
    // every item was answered exactly once.
    let total = match profile.aggregation {
        AggregationMode::RawSummedTotal if normalized.answers.len() == definition.items.len() => {
            Some(normalized.answers.iter().map(|a| f64::from(a.value)).sum())
        }
        _ => None,
    };

    let risk_score = match profile.aggregation {
        AggregationMode::PerCategoryNormalizedAverage => overall_average,
        AggregationMode::RawSummedTotal => total,
    };
    let classification = risk_score
        .zip(overall_average)
        .map(|(risk, health)| profile.classify(risk, health));

    ResponseScore {
        response_id: normalized.response_id,
        category_scores,
        overall_average,
        total,
        classification,
        rejected_answer_count: saturating_count(normalized.rejected.len()),
    }
}
