use std::collections::HashSet;

use pulsecheck_core::models::response::Response;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;
use uuid::Uuid;

use crate::definition::{InstrumentDefinition, Item, ScaleRange};

/// Why a raw answer was excluded from scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RejectionKind {
    OutOfRange,
    UnknownItem,
    DuplicateItem,
}

/// A raw answer that could not be normalized. Non-fatal: the answer is
/// dropped and the rest of the response is still scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_number: u32,
    pub value: i32,
    pub kind: RejectionKind,
    pub expected_range: Option<ScaleRange>,
    pub message: String,
}

/// An item value on the favorable-high (or, for symptom-load instruments,
/// severity-high) scale after inversion has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedAnswer {
    pub item_number: u32,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedResponse {
    pub response_id: Uuid,
    pub answers: Vec<NormalizedAnswer>,
    pub rejected: Vec<ValidationError>,
}

/// Normalize one raw value using the item's own scale.
pub fn normalize(value: i32, item: &Item) -> Result<i32, ValidationError> {
    if !item.scale.contains(value) {
        return Err(ValidationError {
            item_number: item.item_number,
            value,
            kind: RejectionKind::OutOfRange,
            expected_range: Some(item.scale),
            message: format!(
                "item {}: value {} is outside range [{}, {}]",
                item.item_number, value, item.scale.min, item.scale.max
            ),
        });
    }

    if item.inverted {
        Ok(item.scale.max + 1 - value)
    } else {
        Ok(value)
    }
}

/// Normalize every answer in a response against `definition`.
///
/// Out-of-range values and item numbers the definition does not know are
/// rejected. The first *valid* answer to an item is kept; later answers to
/// that item are rejected as duplicates, so an invalid answer never shadows
/// a valid one that follows it.
pub fn normalize_response(
    definition: &InstrumentDefinition,
    response: &Response,
) -> NormalizedResponse {
    let mut answers = Vec::with_capacity(response.raw_answers.len());
    let mut rejected = Vec::new();
    let mut seen = HashSet::with_capacity(response.raw_answers.len());

    for raw in &response.raw_answers {
        if seen.contains(&raw.item_number) {
            rejected.push(ValidationError {
                item_number: raw.item_number,
                value: raw.value,
                kind: RejectionKind::DuplicateItem,
                expected_range: None,
                message: format!("item {}: answered more than once", raw.item_number),
            });
            continue;
        }

        let Some(item) = definition.item(raw.item_number) else {
            rejected.push(ValidationError {
                item_number: raw.item_number,
                value: raw.value,
                kind: RejectionKind::UnknownItem,
                expected_range: None,
                message: format!(
                    "item {} is not part of {}",
                    raw.item_number, definition.name
                ),
            });
            continue;
        };

        match normalize(raw.value, item) {
            Ok(value) => {
                seen.insert(raw.item_number);
                answers.push(NormalizedAnswer {
                    item_number: raw.item_number,
                    value,
                });
            }
            Err(e) => rejected.push(e),
        }
    }

    for e in &rejected {
        tracing::warn!(
            instrument = %definition.id,
            response_id = %response.id,
            item_number = e.item_number,
            kind = ?e.kind,
            "rejected answer: {}",
            e.message
        );
    }

    NormalizedResponse {
        response_id: response.id,
        answers,
        rejected,
    }
}
