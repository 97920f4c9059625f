//! Error types for the script-generation core.
//!
//! Generation-path errors are fatal to the calling operation and propagate
//! unchanged to the CLI, which owns the user-facing message. The reverse
//! parser never raises; it returns `None` and logs instead (see
//! `parser::extractor`).

use std::fmt;

use thiserror::Error;

/// Coordinate axis, used to pinpoint degenerate calibration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Errors raised by the calibration, layout, and generation paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    /// The coordinate or button list was empty. Generation never falls back
    /// to a default layout.
    #[error("input is empty; at least one entry is required")]
    EmptyInput,

    /// The two calibration reference points coincide on an axis, which
    /// would make the solved scale zero or undefined.
    #[error("degenerate calibration on the {axis} axis: reference points must differ in both pixel and logical value")]
    Calibration {
        /// The axis on which the reference points coincide.
        axis: Axis,
    },

    /// Malformed row or column state encountered while deriving layout
    /// parameters.
    #[error("layout derivation failed: {0}")]
    LayoutDerivation(String),

    /// A declared placeholder is missing from the template scaffold,
    /// meaning the scaffold and the generator have drifted apart.
    #[error("template placeholder '{placeholder}' not found in scaffold")]
    Template {
        /// The placeholder token that could not be located.
        placeholder: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_name_the_failure() {
        assert_eq!(
            ScriptError::EmptyInput.to_string(),
            "input is empty; at least one entry is required"
        );
        assert!(ScriptError::Calibration { axis: Axis::Y }
            .to_string()
            .contains("the y axis"));
        assert_eq!(
            ScriptError::LayoutDerivation("row 2 has no columns".into()).to_string(),
            "layout derivation failed: row 2 has no columns"
        );
        assert!(ScriptError::Template {
            placeholder: "{{A}}".into()
        }
        .to_string()
        .contains("'{{A}}'"));
    }

    #[test]
    fn test_variants_compare_by_value() {
        assert_eq!(
            ScriptError::Calibration { axis: Axis::X },
            ScriptError::Calibration { axis: Axis::X }
        );
        assert_ne!(
            ScriptError::Calibration { axis: Axis::X },
            ScriptError::Calibration { axis: Axis::Y }
        );
    }
}
