//! Stock partition functions for [`crate::rollup::rollup`]. Any
//! `Fn(&Response) -> PartitionKey` works; these cover the usual groupings.

use pulsecheck_core::models::report::PartitionKey;
use pulsecheck_core::models::response::Response;

/// One partition per respondent.
pub fn by_respondent(response: &Response) -> PartitionKey {
    PartitionKey::Respondent(response.id)
}

/// One partition per department; responses without one go to
/// [`PartitionKey::Unassigned`].
pub fn by_department(response: &Response) -> PartitionKey {
    match response.partition_key.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => PartitionKey::Department(name.to_string()),
        _ => PartitionKey::Unassigned,
    }
}

/// A single partition holding every response.
pub fn whole_organization(_: &Response) -> PartitionKey {
    PartitionKey::Organization
}
