//! Upgrade-sheet script generation from picked coordinates.

use crate::calibration::CardTransform;
use crate::error::ScriptError;
use crate::layout::{derive_layout_params, fmt4, group_rows};
use crate::models::{CalibrationReference, LayoutParams, PixelCoordinate};

use super::template;
use super::templates::{
    TOKEN_CUSTOMIZATIONS, TOKEN_X_INITIAL, TOKEN_X_OFFSET, UPGRADE_SHEET_SCAFFOLD,
};

/// Generates the upgrade-sheet script for a set of picked coordinates.
///
/// Coordinates are grouped into rows, the calibration reference is solved
/// into a pixel-to-logical transform, and the derived layout parameters are
/// substituted into the fixed scaffold. Output is deterministic: the same
/// coordinates and calibration always produce byte-identical text.
///
/// # Errors
///
/// Returns [`ScriptError::EmptyInput`] for an empty coordinate list,
/// [`ScriptError::Calibration`] for a degenerate reference, and
/// [`ScriptError::LayoutDerivation`] for malformed row state.
pub fn generate_upgrade_sheet(
    coords: &[PixelCoordinate],
    reference: &CalibrationReference,
) -> Result<String, ScriptError> {
    let rows = group_rows(coords)?;
    let transform = CardTransform::solve(reference)?;
    let params = derive_layout_params(&rows, &transform)?;

    template::render(
        UPGRADE_SHEET_SCAFFOLD,
        &[
            (TOKEN_X_INITIAL, fmt4(params.x_initial)),
            (TOKEN_X_OFFSET, fmt4(params.x_offset)),
            (TOKEN_CUSTOMIZATIONS, customizations_fragment(&params)),
        ],
    )
}

/// Builds the Lua table body for the per-row customizations.
fn customizations_fragment(params: &LayoutParams) -> String {
    let mut fragment = String::new();
    for row in &params.customizations {
        if !fragment.is_empty() {
            fragment.push('\n');
        }
        fragment.push_str(&format!(
            "  [{}] = {{\n    checkboxes = {{\n      posZ = {},\n      count = {}\n    }}\n  }},",
            row.row_index,
            fmt4(row.pos_z),
            row.checkbox_count
        ));
    }
    fragment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_calibration;

    fn coords(pairs: &[(f64, f64)]) -> Vec<PixelCoordinate> {
        pairs.iter().map(|&(x, y)| PixelCoordinate::new(x, y)).collect()
    }

    #[test]
    fn test_empty_coordinates_fail() {
        let result = generate_upgrade_sheet(&[], &default_calibration());
        assert_eq!(result, Err(ScriptError::EmptyInput));
    }

    #[test]
    fn test_generated_script_contains_derived_rows() {
        let script = generate_upgrade_sheet(
            &coords(&[(68.0, 206.0), (89.0, 206.0), (68.0, 580.0)]),
            &default_calibration(),
        )
        .unwrap();

        assert!(script.contains("[1] = {"));
        assert!(script.contains("[2] = {"));
        assert!(script.contains("count = 2"));
        assert!(script.contains("count = 1"));
        // No placeholder tokens survive
        assert!(!script.contains("{{"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let input = coords(&[(68.0, 206.0), (89.0, 206.0), (68.0, 580.0)]);
        let first = generate_upgrade_sheet(&input, &default_calibration()).unwrap();
        let second = generate_upgrade_sheet(&input, &default_calibration()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_numeric_values_use_four_decimals() {
        let script =
            generate_upgrade_sheet(&coords(&[(68.0, 206.0)]), &default_calibration()).unwrap();

        // xInitial for pixel 68 with the default gap
        let t = CardTransform::solve(&default_calibration()).unwrap();
        let x_offset = crate::constants::DEFAULT_COLUMN_GAP_PX
            / crate::constants::CHECKBOX_COLUMN_PX_PER_UNIT;
        let expected = fmt4(t.x.to_logical(68.0) - x_offset);
        assert!(script.contains(&format!("local xInitial = {expected}")));
        assert!(script.contains(&format!("local xOffset = {}", fmt4(x_offset))));
    }
}
