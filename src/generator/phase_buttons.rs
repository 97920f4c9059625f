//! Phase-tracker script generation from a button configuration.

use crate::error::ScriptError;
use crate::models::PhaseButtonConfig;

use super::template;
use super::templates::{
    PHASE_TRACKER_SCAFFOLD, TOKEN_BUTTON_COLORS, TOKEN_BUTTON_IDS, TOKEN_BUTTON_INDEX,
    TOKEN_BUTTON_LABELS,
};

/// Generates the phase-tracker script for a button configuration.
///
/// The four substituted fragments are all derived from the same button
/// order, so label, id, color, and index position stay aligned end to end.
///
/// # Errors
///
/// Returns [`ScriptError::EmptyInput`] for an empty configuration; callers
/// wanting the stock tracker pass [`PhaseButtonConfig::default`] explicitly.
pub fn generate_phase_tracker(config: &PhaseButtonConfig) -> Result<String, ScriptError> {
    if config.is_empty() {
        return Err(ScriptError::EmptyInput);
    }

    template::render(
        PHASE_TRACKER_SCAFFOLD,
        &[
            (TOKEN_BUTTON_LABELS, label_fragment(config)),
            (TOKEN_BUTTON_IDS, id_fragment(config)),
            (TOKEN_BUTTON_COLORS, color_fragment(config)),
            (TOKEN_BUTTON_INDEX, index_fragment(config)),
        ],
    )
}

/// Quoted, comma-joined label glyph list: `"u", "u", "t"`.
pub fn label_fragment(config: &PhaseButtonConfig) -> String {
    config
        .buttons
        .iter()
        .map(|button| format!("\"{}\"", button.label.code()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quoted, comma-joined id list: `"Mythos", "Upkeep"`.
pub fn id_fragment(config: &PhaseButtonConfig) -> String {
    config
        .buttons
        .iter()
        .map(|button| format!("\"{}\"", button.id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Quoted color list, one entry per line to keep the scaffold readable.
pub fn color_fragment(config: &PhaseButtonConfig) -> String {
    config
        .buttons
        .iter()
        .map(|button| format!("\"{}\"", button.color.to_hex()))
        .collect::<Vec<_>>()
        .join(",\n  ")
}

/// Index map body resolving each id to its 1-based array position.
pub fn index_fragment(config: &PhaseButtonConfig) -> String {
    config
        .buttons
        .iter()
        .enumerate()
        .map(|(i, button)| format!("  [\"{}\"] = {},", button.id, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
