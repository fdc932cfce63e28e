mod common;

use pretty_assertions::assert_eq;
use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::report::PartitionKey;
use pulsecheck_core::models::response::Response;
use pulsecheck_core::models::tier::RiskLevel;
use pulsecheck_engine::aggregate::{aggregate_category, overall_average, score_response};
use pulsecheck_engine::error::EngineError;
use pulsecheck_engine::partition::{by_department, by_respondent, whole_organization};
use pulsecheck_engine::rollup::{aggregate_report, rollup};
use pulsecheck_instruments::error::InstrumentError;

use common::{burnout, category_only, indicator, uniform};

#[test]
fn overall_average_weights_categories_equally() {
    let def = indicator();
    // 8 demands items at 5, 3 change items at 1. A raw item mean would be
    // 43 / 11; the category mean is 3.
    let mut pairs = category_only(&def, "demands", 5);
    pairs.extend(category_only(&def, "change", 1));
    let score = score_response(&def, &Response::from_pairs(None, &pairs));

    assert_eq!(score.overall_average, Some(3.0));
    assert_eq!(overall_average(&score.category_scores), Some(3.0));
}

#[test]
fn undefined_category_is_a_configuration_error() {
    let def = indicator();
    let err = aggregate_category(&def, &[], &CategoryId::from_static("exhaustion")).unwrap_err();
    assert!(matches!(
        err,
        EngineError::Instrument(InstrumentError::UnknownCategory { .. })
    ));
}

#[test]
fn empty_response_set_gives_absent_scores_not_zero() {
    let def = indicator();
    assert_eq!(
        aggregate_category(&def, &[], &CategoryId::from_static("demands")).unwrap(),
        None
    );

    let report = aggregate_report(&def, PartitionKey::Organization, &[]);
    assert_eq!(report.response_count, 0);
    assert!(report.category_scores.is_empty());
    assert_eq!(report.overall_average, None);
    assert_eq!(report.classified_count(), 0);
    assert_eq!(report.risk_distribution.len(), 5);
}

#[test]
fn invalid_answers_are_dropped_and_counted() {
    let def = indicator();
    let mut response = uniform(&def, Some("it"), 4);
    response.raw_answers[0].value = 42;
    response.raw_answers.push(pulsecheck_core::models::response::RawAnswer {
        item_number: 200,
        value: 3,
    });

    let report = aggregate_report(&def, PartitionKey::Organization, &[response]);
    assert_eq!(report.rejected_answer_count, 2);
    assert_eq!(report.overall_average, Some(4.0));
    assert_eq!(report.classified_count(), 1);

    let role = report
        .category_score(&CategoryId::from_static("role"))
        .unwrap();
    // item 1 (role) was the rejected one
    assert_eq!(role.sample_count, 4);
}

#[test]
fn response_without_valid_answers_is_unclassified() {
    let def = indicator();
    let responses = vec![
        uniform(&def, None, 4),
        Response::from_pairs(None, &[(1, 9), (2, 0)]),
    ];

    let report = aggregate_report(&def, PartitionKey::Organization, &responses);
    assert_eq!(report.response_count, 2);
    assert_eq!(report.classified_count(), 1);
    assert_eq!(report.unclassified_count, 1);
    assert_eq!(
        report.classified_count() + report.unclassified_count,
        report.response_count
    );
}

#[test]
fn department_counts_add_up_to_the_organization() {
    let def = indicator();
    let responses = vec![
        uniform(&def, Some("a"), 5),
        uniform(&def, Some("b"), 3),
        uniform(&def, None, 2),
        uniform(&def, Some("  "), 1),
        uniform(&def, Some("a"), 4),
    ];

    let departments = rollup(&def, &responses, by_department);
    assert_eq!(
        departments.keys().cloned().collect::<Vec<_>>(),
        vec![
            PartitionKey::Department("a".to_string()),
            PartitionKey::Department("b".to_string()),
            PartitionKey::Unassigned,
        ]
    );
    assert_eq!(departments[&PartitionKey::Unassigned].response_count, 2);

    let organization = rollup(&def, &responses, whole_organization);
    let total: u32 = departments.values().map(|r| r.response_count).sum();
    assert_eq!(total, organization[&PartitionKey::Organization].response_count);
}

#[test]
fn respondent_partitions_hold_one_response_each() {
    let def = indicator();
    let responses = vec![uniform(&def, None, 5), uniform(&def, None, 1)];

    let reports = rollup(&def, &responses, by_respondent);
    assert_eq!(reports.len(), 2);
    let report = &reports[&PartitionKey::Respondent(responses[1].id)];
    assert_eq!(report.response_count, 1);
    assert_eq!(report.risk_distribution[&RiskLevel::VeryHigh], 1);
}

#[test]
fn burnout_reports_carry_mean_total() {
    let def = burnout();
    let responses = vec![uniform(&def, None, 1), uniform(&def, None, 3)];

    let report = aggregate_report(&def, PartitionKey::Organization, &responses);
    // totals 20 and 60
    assert_eq!(report.mean_total, Some(40.0));
    assert_eq!(report.risk_distribution[&RiskLevel::VeryLow], 1);
    assert_eq!(report.risk_distribution[&RiskLevel::Moderate], 1);

    let indicator_report = aggregate_report(&indicator(), PartitionKey::Organization, &[]);
    assert_eq!(indicator_report.mean_total, None);
}

#[test]
fn custom_partition_functions_are_supported() {
    let def = indicator();
    let responses = vec![
        uniform(&def, Some("north-1"), 5),
        uniform(&def, Some("north-2"), 4),
        uniform(&def, Some("south-1"), 1),
    ];

    let by_region = rollup(&def, &responses, |r| {
        let region = r
            .partition_key
            .as_deref()
            .and_then(|k| k.split('-').next())
            .unwrap_or("none");
        PartitionKey::Department(region.to_string())
    });

    assert_eq!(by_region.len(), 2);
    assert_eq!(
        by_region[&PartitionKey::Department("north".to_string())].response_count,
        2
    );
}
