use std::collections::BTreeMap;

use pulsecheck_core::models::report::{saturating_count, AggregateReport, PartitionKey};
use pulsecheck_core::models::response::Response;
use pulsecheck_core::models::tier::{HealthImpact, RiskLevel};
use pulsecheck_instruments::definition::{AggregationMode, InstrumentDefinition};
use pulsecheck_instruments::scoring::{normalize_response, NormalizedResponse};
use rayon::prelude::*;

use crate::aggregate::{category_scores, overall_average, score_normalized, CategoryIndex};

/// Partition `responses` with `partition` and build one report per key.
///
/// Partitions are independent and computed in parallel; the result is keyed
/// by [`PartitionKey`] order, so output does not depend on scheduling.
pub fn rollup<F>(
    definition: &InstrumentDefinition,
    responses: &[Response],
    partition: F,
) -> BTreeMap<PartitionKey, AggregateReport>
where
    F: Fn(&Response) -> PartitionKey,
{
    let mut groups: BTreeMap<PartitionKey, Vec<&Response>> = BTreeMap::new();
    for response in responses {
        groups.entry(partition(response)).or_default().push(response);
    }

    tracing::debug!(
        instrument = %definition.id,
        responses = responses.len(),
        partitions = groups.len(),
        "rolling up responses"
    );

    let index = CategoryIndex::new(definition);
    groups
        .into_par_iter()
        .map(|(key, members)| {
            let report = build_report(definition, &index, key.clone(), &members);
            (key, report)
        })
        .collect()
}

/// Report for an already-selected set of responses.
pub fn aggregate_report(
    definition: &InstrumentDefinition,
    partition_key: PartitionKey,
    responses: &[Response],
) -> AggregateReport {
    let index = CategoryIndex::new(definition);
    let members: Vec<&Response> = responses.iter().collect();
    build_report(definition, &index, partition_key, &members)
}

fn build_report(
    definition: &InstrumentDefinition,
    index: &CategoryIndex,
    partition_key: PartitionKey,
    members: &[&Response],
) -> AggregateReport {
    let normalized: Vec<NormalizedResponse> = members
        .iter()
        .map(|r| normalize_response(definition, r))
        .collect();

    let category_scores = category_scores(definition, index, &normalized);
    let overall_average = overall_average(&category_scores);

    let mut risk_distribution: BTreeMap<RiskLevel, u32> =
        RiskLevel::ALL.iter().map(|&level| (level, 0)).collect();
    let mut health_distribution: BTreeMap<HealthImpact, u32> =
        HealthImpact::ALL.iter().map(|&tier| (tier, 0)).collect();
    let mut unclassified_count: u32 = 0;
    let mut rejected_answer_count: u32 = 0;
    let mut totals = Vec::new();

    // Each response is classified on its own scores; the partition's pooled
    // average is never what gets counted here.
    for response in &normalized {
        let score = score_normalized(definition, index, response);
        rejected_answer_count = rejected_answer_count.saturating_add(score.rejected_answer_count);
        totals.extend(score.total);
        match score.classification {
            Some(c) => {
                let risk = risk_distribution.entry(c.risk_level).or_default();
                *risk = risk.saturating_add(1);
                let health = health_distribution.entry(c.health_impact).or_default();
                *health = health.saturating_add(1);
            }
            None => unclassified_count = u32::saturating_add(unclassified_count, 1),
        }
    }

    let mean_total = match definition.profile.aggregation {
        AggregationMode::RawSummedTotal if !totals.is_empty() => {
            Some(totals.iter().sum::<f64>() / totals.len() as f64)
        }
        _ => None,
    };

    if rejected_answer_count > 0 {
        tracing::warn!(
            instrument = %definition.id,
            partition = %partition_key,
            rejected = rejected_answer_count,
            "answers excluded from aggregation"
        );
    }

    AggregateReport {
        partition_key,
        response_count: saturating_count(members.len()),
        category_scores,
        overall_average,
        mean_total,
        risk_distribution,
        health_distribution,
        unclassified_count,
        rejected_answer_count,
    }
}
