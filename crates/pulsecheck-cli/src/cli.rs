use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Score questionnaire responses and print aggregate reports as JSON.
#[derive(Debug, Parser)]
#[command(name = "pulsecheck", version, about)]
pub struct Cli {
    /// Built-in instrument id. Ignored when --definition is given.
    #[arg(long, env = "PULSECHECK_INSTRUMENT", default_value = "indicator_tool")]
    pub instrument: String,

    /// JSON array of responses.
    #[arg(long)]
    pub responses: PathBuf,

    /// Instrument definition JSON, replacing or extending the built-ins.
    #[arg(long)]
    pub definition: Option<PathBuf>,

    /// Recommendation catalog JSON. Defaults to the instrument's built-in
    /// catalog.
    #[arg(long, env = "PULSECHECK_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = GroupBy::Department)]
    pub group_by: GroupBy,

    /// Number of rows in the most-critical-questions table.
    #[arg(long, default_value_t = 10)]
    pub top_questions: usize,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Respondent,
    Department,
    Organization,
}
