use pulsecheck_core::models::recommendation::{ActionItem, ActionPlan, ActionPriority};
use pulsecheck_core::models::report::{AggregateReport, PartitionKey};
use pulsecheck_instruments::definition::InstrumentDefinition;

use crate::error::EngineError;
use crate::ranking::{rank_categories, RankedCategory};
use crate::recommendations::RecommendationCatalog;

/// Turn ranked categories into an action plan.
///
/// `Risk` categories become immediate actions, `Intermediate` ones
/// short-term actions; favorable categories are skipped. Input order is
/// kept, so pass the output of [`rank_categories`].
pub fn build_action_plan(
    catalog: &RecommendationCatalog,
    partition_key: PartitionKey,
    classified: &[RankedCategory],
) -> Result<ActionPlan, EngineError> {
    let mut items = Vec::new();
    for category in classified {
        catalog.check_category(&category.category)?;
        let Some(priority) = ActionPriority::for_tier(category.tier) else {
            continue;
        };
        items.push(ActionItem {
            category: category.category.clone(),
            category_name: category.name.clone(),
            priority,
            score: category.score,
            tier: category.tier,
            recommendation: catalog.select(&category.category, category.tier),
        });
    }

    Ok(ActionPlan {
        partition_key,
        items,
    })
}

/// Rank a report's categories and build its action plan.
pub fn action_plan_for_report(
    definition: &InstrumentDefinition,
    catalog: &RecommendationCatalog,
    report: &AggregateReport,
) -> Result<ActionPlan, EngineError> {
    if catalog.instrument_id() != definition.id {
        return Err(EngineError::CatalogMismatch {
            catalog: catalog.instrument_id().to_string(),
            instrument: definition.id.clone(),
        });
    }
    for score in &report.category_scores {
        definition.category(&score.category)?;
    }

    let ranked = rank_categories(definition, &report.category_scores);
    build_action_plan(catalog, report.partition_key.clone(), &ranked)
}
