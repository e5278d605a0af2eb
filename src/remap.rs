//! Output Remapper: assembled columns -> canonical case order.
//!
//! Canonical order, shared by both families:
//!
//! | pos | case        | pos | case        | pos | case        |
//! |-----|-------------|-----|-------------|-----|-------------|
//! | 0   | nominative  | 5   | elative     | 10  | essive      |
//! | 1   | genitive    | 6   | illative    | 11  | translative |
//! | 2   | accusative  | 7   | adessive    | 12  | instructive |
//! | 3   | partitive   | 8   | ablative    | 13  | abessive    |
//! | 4   | inessive    | 9   | allative    | 14  | comitative  |
//!
//! Each permutation maps canonical position -> assembled row.

use crate::columns::Columns;
use crate::error::{ExtractionError, ExtractionResult};
use crate::forms::{ColumnSequence, OutputRecord, WordFormSet};

pub const CASE_COUNT: usize = 15;

pub const CANONICAL_CASES: [&str; CASE_COUNT] = [
    "nominative",
    "genitive",
    "accusative",
    "partitive",
    "inessive",
    "elative",
    "illative",
    "adessive",
    "ablative",
    "allative",
    "essive",
    "translative",
    "instructive",
    "abessive",
    "comitative",
];

/// Declension tables print the (merged) accusative right after the nominative.
pub const DECLENSION_PERMUTATION: [usize; CASE_COUNT] =
    [0, 2, 1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// Pronominal tables print partitive before accusative.
pub const PRONOMINAL_PERMUTATION: [usize; CASE_COUNT] =
    [0, 1, 3, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14];

/// Reorder one column. The column must cover the permutation exactly.
pub fn apply_permutation(
    column: &[WordFormSet],
    permutation: &[usize],
) -> ExtractionResult<ColumnSequence> {
    if column.len() != permutation.len() {
        return Err(ExtractionError::malformed(format!(
            "expected {} rows, found {}",
            permutation.len(),
            column.len()
        )));
    }
    permutation
        .iter()
        .map(|&source| {
            column.get(source).cloned().ok_or_else(|| {
                ExtractionError::malformed(format!("permutation index {} out of range", source))
            })
        })
        .collect()
}

/// Inverse mapping: assembled row -> canonical position.
pub fn invert_permutation(permutation: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0; permutation.len()];
    for (canonical, &source) in permutation.iter().enumerate() {
        if let Some(slot) = inverse.get_mut(source) {
            *slot = canonical;
        }
    }
    inverse
}

/// Remap both columns and concatenate singular then plural.
pub fn remap_columns(columns: Columns, permutation: &[usize]) -> ExtractionResult<OutputRecord> {
    if columns.singular.len() != columns.plural.len() {
        return Err(ExtractionError::malformed(format!(
            "singular has {} rows but plural has {}",
            columns.singular.len(),
            columns.plural.len()
        )));
    }
    let mut forms = apply_permutation(&columns.singular, permutation)?;
    forms.extend(apply_permutation(&columns.plural, permutation)?);
    Ok(OutputRecord { forms })
}
