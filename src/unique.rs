//! Uniqueness checks over enumeration members.
//!
//! Members are grouped by scalar with the same equality lookup uses, so two
//! members differing only in their description are still duplicates.

use tracing::warn;

use crate::error::{Duplicate, DuplicateList, EnumError};
use crate::table::EnumTable;

/// Every member repeating an earlier member's scalar, paired with that
/// earlier (canonical) member, in the alias's declaration order.
#[must_use]
pub fn find_duplicates(table: &EnumTable) -> Vec<Duplicate> {
    table
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(position, entry)| {
            let canonical = table.canonical_position(position)?;
            if canonical == position {
                return None;
            }
            let canonical = table.entry(canonical)?;
            Some(Duplicate::new(entry.name(), canonical.name()))
        })
        .collect()
}

/// Fail with [`EnumError::DuplicateValues`] when any scalar is declared twice.
pub fn check_unique(table: &EnumTable) -> Result<(), EnumError> {
    let duplicates = find_duplicates(table);
    if duplicates.is_empty() {
        return Ok(());
    }
    warn!(
        enum_name = %table.name(),
        duplicates = duplicates.len(),
        "Duplicate values found"
    );
    Err(EnumError::DuplicateValues {
        enum_name: table.name().to_string(),
        duplicates: DuplicateList(duplicates),
    })
}
