pub mod burnout_inventory;
pub mod indicator_tool;

use pulsecheck_core::models::category::CategoryId;

use crate::definition::{Category, Item, ScaleRange};

pub(crate) fn category(id: &'static str, name: &str, description: &str) -> Category {
    Category {
        id: CategoryId::from_static(id),
        name: name.to_string(),
        description: Some(description.to_string()),
    }
}

pub(crate) fn item(
    item_number: u32,
    category: &'static str,
    scale: ScaleRange,
    inverted: bool,
    text: &str,
) -> Item {
    Item {
        item_number,
        text: text.to_string(),
        category: CategoryId::from_static(category),
        scale,
        inverted,
    }
}
