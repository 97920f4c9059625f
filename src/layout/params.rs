//! Deriving template layout parameters from grouped rows.

use crate::calibration::CardTransform;
use crate::constants::{CHECKBOX_COLUMN_PX_PER_UNIT, DEFAULT_COLUMN_GAP_PX};
use crate::error::ScriptError;
use crate::models::{LayoutParams, RowBucket, RowCustomization};

/// Formats a logical coordinate for template embedding.
///
/// Four decimal digits, fixed. The generated script is diffed and
/// re-parsed as text, so formatting must stay identical between runs;
/// callers embed this string form rather than re-rounding the float.
#[must_use]
pub fn fmt4(value: f64) -> String {
    format!("{value:.4}")
}

/// Derives the upgrade-sheet layout parameters from grouped rows.
///
/// The horizontal origin comes from the first column of the first row,
/// inverse-mapped to logical space and shifted left by one column spacing:
/// the template numbers columns from 1 and draws column `col` at
/// `x_initial + col * x_offset`.
///
/// Column spacing comes from the pixel gap between the first two columns of
/// the first row that has more than one, converted through the fixed
/// column ratio; when every row has a single column a default gap is
/// assumed.
///
/// # Errors
///
/// Returns [`ScriptError::LayoutDerivation`] when `rows` is empty or a row
/// has no columns.
pub fn derive_layout_params(
    rows: &[RowBucket],
    transform: &CardTransform,
) -> Result<LayoutParams, ScriptError> {
    let first_row = rows
        .first()
        .ok_or_else(|| ScriptError::LayoutDerivation("no rows to derive layout from".into()))?;

    let gap_px = rows
        .iter()
        .find(|row| row.x_coords.len() > 1)
        .map_or(DEFAULT_COLUMN_GAP_PX, |row| {
            row.x_coords[1] - row.x_coords[0]
        });
    let x_offset = gap_px / CHECKBOX_COLUMN_PX_PER_UNIT;

    let first_x = *first_row.x_coords.first().ok_or_else(|| {
        ScriptError::LayoutDerivation("row 1 has no columns".into())
    })?;
    let x_initial = transform.x.to_logical(first_x) - x_offset;

    let mut customizations = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        if row.x_coords.is_empty() {
            return Err(ScriptError::LayoutDerivation(format!(
                "row {} has no columns",
                index + 1
            )));
        }
        customizations.push(RowCustomization {
            row_index: index + 1,
            pos_z: transform.y.to_logical(row.y),
            checkbox_count: row.x_coords.len(),
        });
    }

    Ok(LayoutParams {
        x_initial,
        x_offset,
        customizations,
    })
}
