use pretty_assertions::assert_eq;
use pulsecheck_core::error::CoreError;
use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::recommendation::ActionPriority;
use pulsecheck_core::models::report::{saturating_count, PartitionKey};
use pulsecheck_core::models::response::{parse_responses, Response};
use pulsecheck_core::models::tier::{HealthImpact, RiskLevel};

#[test]
fn category_ids_must_be_snake_case() {
    assert!(CategoryId::new("manager_support").is_ok());
    assert!(CategoryId::new("").is_err());
    assert!(CategoryId::new("Manager Support").is_err());

    let parsed: Result<CategoryId, _> = serde_json::from_str("\"Bad-Id\"");
    assert!(parsed.is_err());
    let parsed: CategoryId = serde_json::from_str("\"role\"").unwrap();
    assert_eq!(parsed.as_str(), "role");
}

#[test]
fn risk_levels_order_by_severity() {
    assert!(RiskLevel::VeryLow < RiskLevel::Low);
    assert!(RiskLevel::High < RiskLevel::VeryHigh);
    assert_eq!(RiskLevel::from_tier_number(3), Some(RiskLevel::Moderate));
    assert_eq!(RiskLevel::from_tier_number(0), None);
    assert_eq!(RiskLevel::from_tier_number(6), None);
    for level in RiskLevel::ALL {
        assert_eq!(RiskLevel::from_tier_number(level.tier_number()), Some(level));
    }
    assert_eq!(serde_json::to_string(&RiskLevel::VeryHigh).unwrap(), "\"very_high\"");
}

#[test]
fn only_non_favorable_tiers_need_action() {
    assert_eq!(ActionPriority::for_tier(HealthImpact::Risk), Some(ActionPriority::Immediate));
    assert_eq!(
        ActionPriority::for_tier(HealthImpact::Intermediate),
        Some(ActionPriority::ShortTerm)
    );
    assert_eq!(ActionPriority::for_tier(HealthImpact::Favorable), None);
}

#[test]
fn partition_keys_serialize_tagged() {
    let key = PartitionKey::Department("finance".to_string());
    assert_eq!(
        serde_json::to_value(&key).unwrap(),
        serde_json::json!({ "kind": "department", "value": "finance" })
    );
    assert_eq!(key.to_string(), "department:finance");
    assert_eq!(PartitionKey::Organization.to_string(), "organization");
}

#[test]
fn parse_responses_rejects_repeated_ids() {
    let response = Response::from_pairs(Some("ops"), &[(1, 3), (2, 4)]);
    let json = serde_json::to_string(&vec![response.clone(), response.clone()]).unwrap();
    assert!(matches!(
        parse_responses(&json),
        Err(CoreError::DuplicateResponse(id)) if id == response.id
    ));

    let json = serde_json::to_string(&vec![response.clone()]).unwrap();
    let parsed = parse_responses(&json).unwrap();
    assert_eq!(parsed[0].raw_answers, response.raw_answers);
    assert_eq!(parsed[0].partition_key.as_deref(), Some("ops"));
}

#[test]
fn partition_key_defaults_to_none() {
    let json = r#"[{
        "id": "6f1c9a0e-8f7a-4a53-9a55-2f5d3c1b7e10",
        "submitted_at": "2026-03-02T09:30:00Z",
        "raw_answers": [{ "item_number": 1, "value": 4 }]
    }]"#;
    let parsed = parse_responses(json).unwrap();
    assert_eq!(parsed[0].partition_key, None);
}

#[test]
fn report_counts_saturate_instead_of_wrapping() {
    assert_eq!(saturating_count(0), 0);
    assert_eq!(saturating_count(3), 3);
    assert_eq!(saturating_count(u32::MAX as usize), u32::MAX);
    if let Some(past_max) = (u32::MAX as usize).checked_add(1) {
        assert_eq!(saturating_count(past_max), u32::MAX);
        assert_eq!(saturating_count(usize::MAX), u32::MAX);
    }
}
