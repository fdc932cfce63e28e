use std::fs;

use clap::Parser;
use eyre::WrapErr;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pulsecheck_core::models::recommendation::ActionPlan;
use pulsecheck_core::models::report::{AggregateReport, PartitionKey, QuestionRow};
use pulsecheck_core::models::response::parse_responses;
use pulsecheck_engine::action_plan::action_plan_for_report;
use pulsecheck_engine::partition::{by_department, by_respondent, whole_organization};
use pulsecheck_engine::ranking::{most_critical_questions, rank_categories, RankedCategory};
use pulsecheck_engine::recommendations::RecommendationCatalog;
use pulsecheck_engine::rollup::{aggregate_report, rollup};
use pulsecheck_instruments::definition::InstrumentDefinition;
use pulsecheck_instruments::registry::InstrumentRegistry;

mod cli;

use cli::{Cli, GroupBy};

#[derive(Serialize)]
struct ScoringOutput {
    instrument_id: String,
    instrument_version: u32,
    organization: AggregateReport,
    organization_ranking: Vec<RankedCategory>,
    reports: Vec<AggregateReport>,
    action_plans: Vec<ActionPlan>,
    questions: Vec<QuestionRow>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut registry = InstrumentRegistry::builtin();
    let instrument_id = match &cli.definition {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read definition at {}", path.display()))?;
            let definition = InstrumentDefinition::from_json(&json)?;
            let id = definition.id.clone();
            registry.upsert(definition)?;
            id
        }
        None => cli.instrument.clone(),
    };
    let definition = registry.get(&instrument_id)?;

    let catalog = match &cli.catalog {
        Some(path) => {
            let json = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read catalog at {}", path.display()))?;
            RecommendationCatalog::load(&json, definition)?
        }
        None => RecommendationCatalog::builtin(definition)
            .wrap_err("no recommendation catalog for this instrument; pass --catalog")?,
    };

    let json = fs::read_to_string(&cli.responses)
        .wrap_err_with(|| format!("failed to read responses at {}", cli.responses.display()))?;
    let responses = parse_responses(&json)?;
    tracing::info!(
        instrument = %definition.id,
        responses = responses.len(),
        group_by = ?cli.group_by,
        "scoring responses"
    );

    let reports = match cli.group_by {
        GroupBy::Respondent => rollup(definition, &responses, by_respondent),
        GroupBy::Department => rollup(definition, &responses, by_department),
        GroupBy::Organization => rollup(definition, &responses, whole_organization),
    };
    let organization = aggregate_report(definition, PartitionKey::Organization, &responses);

    let action_plans = reports
        .values()
        .map(|report| action_plan_for_report(definition, &catalog, report))
        .collect::<Result<Vec<_>, _>>()?;

    let output = ScoringOutput {
        instrument_id: definition.id.clone(),
        instrument_version: definition.version,
        organization_ranking: rank_categories(definition, &organization.category_scores),
        organization,
        reports: reports.into_values().collect(),
        action_plans,
        questions: most_critical_questions(definition, &responses, cli.top_questions),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
