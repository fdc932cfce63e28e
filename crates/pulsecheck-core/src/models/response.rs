use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// One raw item value exactly as the respondent submitted it.
///
/// The owning [`Response`] carries the response id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAnswer {
    pub item_number: u32,
    pub value: i32,
}

/// A single submitted questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Response {
    pub id: Uuid,
    /// Grouping key supplied by intake, usually the respondent's department.
    #[serde(default)]
    pub partition_key: Option<String>,
    pub submitted_at: jiff::Timestamp,
    pub raw_answers: Vec<RawAnswer>,
}

impl Response {
    pub fn new(partition_key: Option<String>, raw_answers: Vec<RawAnswer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            partition_key,
            submitted_at: jiff::Timestamp::now(),
            raw_answers,
        }
    }

    /// Build a response from `(item_number, value)` pairs.
    pub fn from_pairs(partition_key: Option<&str>, pairs: &[(u32, i32)]) -> Self {
        let raw_answers = pairs
            .iter()
            .map(|&(item_number, value)| RawAnswer { item_number, value })
            .collect();
        Self::new(partition_key.map(str::to_string), raw_answers)
    }
}

/// Parse a JSON array of responses, rejecting repeated response ids.
pub fn parse_responses(json: &str) -> Result<Vec<Response>, CoreError> {
    let responses: Vec<Response> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(responses.len());
    for response in &responses {
        if !seen.insert(response.id) {
            return Err(CoreError::DuplicateResponse(response.id));
        }
    }
    Ok(responses)
}
