#![allow(dead_code)]

use pulsecheck_core::models::category::CategoryId;
use pulsecheck_core::models::response::Response;
use pulsecheck_instruments::definition::{Category, InstrumentDefinition, Item, ScaleRange};
use pulsecheck_instruments::get_instrument;

pub fn indicator() -> InstrumentDefinition {
    get_instrument("indicator_tool").unwrap().definition().clone()
}

pub fn burnout() -> InstrumentDefinition {
    get_instrument("burnout_inventory").unwrap().definition().clone()
}

/// One category, two 1–5 items, indicator-tool cutpoints.
pub fn two_item_instrument(second_inverted: bool) -> InstrumentDefinition {
    let category = CategoryId::from_static("wellbeing");
    let scale = ScaleRange { min: 1, max: 5 };
    let item = |item_number, inverted| Item {
        item_number,
        text: format!("question {item_number}"),
        category: category.clone(),
        scale,
        inverted,
    };

    InstrumentDefinition {
        id: "two_item".to_string(),
        name: "Two item check".to_string(),
        version: 1,
        profile: indicator().profile,
        categories: vec![Category {
            id: category.clone(),
            name: "Wellbeing".to_string(),
            description: None,
        }],
        items: vec![item(1, false), item(2, second_inverted)],
    }
}

/// A response whose every answer normalizes to `normalized`.
pub fn uniform(definition: &InstrumentDefinition, department: Option<&str>, normalized: i32) -> Response {
    let pairs: Vec<(u32, i32)> = definition
        .items
        .iter()
        .map(|item| {
            let raw = if item.inverted {
                item.scale.max + 1 - normalized
            } else {
                normalized
            };
            (item.item_number, raw)
        })
        .collect();
    Response::from_pairs(department, &pairs)
}

/// Only the items of `category`, all normalizing to `normalized`.
pub fn category_only(
    definition: &InstrumentDefinition,
    category: &'static str,
    normalized: i32,
) -> Vec<(u32, i32)> {
    definition
        .items_in(&CategoryId::from_static(category))
        .map(|item| {
            let raw = if item.inverted {
                item.scale.max + 1 - normalized
            } else {
                normalized
            };
            (item.item_number, raw)
        })
        .collect()
}
