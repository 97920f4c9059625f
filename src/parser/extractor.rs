//! Best-effort reverse parse of a generated phase-tracker script.
//!
//! Pattern-based reconstruction for edit continuity: the parameter block is
//! located by its structural comment marker, then the three quoted lists
//! are extracted independently and zipped back into buttons. This is
//! advisory; every failure path returns `None` (with a diagnostic log)
//! rather than raising, since the expected remediation is "start over with
//! fresh input". The sidecar record (see `parser::sidecar`) is the
//! preferred recovery path; this parser exists for scripts generated before
//! sidecars, or whose sidecar was lost.

use regex::Regex;
use tracing::{debug, warn};

use crate::models::{ButtonLabel, PhaseButton, PhaseButtonConfig, RgbColor};

/// Comment marker opening the parameter block in the generated script.
const CONFIG_BLOCK_MARKER: &str = "-- phase tracker configuration";

/// Color assigned to entries padded in for a missing color list position.
const PADDED_COLOR: RgbColor = RgbColor::new(255, 255, 255);

/// Attempts to recover the button configuration from a generated script.
///
/// Returns `None` when the parameter block or any of the three lists
/// (labels, ids, colors) cannot be located. Lists of unequal length are
/// zipped to the longest, padding labels with the default glyph, ids with
/// sequential `button<N>` names, and colors with white; this tolerates
/// hand-edited scripts at the cost of masking dropped entries.
pub fn extract_phase_config(script: &str) -> Option<PhaseButtonConfig> {
    let Some(marker) = script.find(CONFIG_BLOCK_MARKER) else {
        warn!("phase tracker configuration block not found in script");
        return None;
    };
    let block = &script[marker..];

    let labels = quoted_list(block, "buttonLabels")?;
    let ids = quoted_list(block, "buttonIds")?;
    let colors = quoted_list(block, "buttonColors")?;

    let count = labels.len().max(ids.len()).max(colors.len());
    if count == 0 {
        warn!("phase tracker configuration block contains no buttons");
        return None;
    }

    let mut buttons = Vec::with_capacity(count);
    for i in 0..count {
        let label = labels
            .get(i)
            .and_then(|raw| parse_label(raw))
            .unwrap_or_default();
        let id = ids
            .get(i)
            .filter(|raw| !raw.is_empty())
            .cloned()
            .unwrap_or_else(|| format!("button{}", i + 1));
        let color = colors
            .get(i)
            .and_then(|raw| {
                RgbColor::from_hex(raw)
                    .map_err(|e| debug!("unparseable button color '{raw}': {e}"))
                    .ok()
            })
            .unwrap_or(PADDED_COLOR);

        buttons.push(PhaseButton::new(id, label, color));
    }

    Some(PhaseButtonConfig::new(buttons))
}

/// Extracts the quoted entries of `name = { ... }` inside the block.
///
/// Returns `None` when no such assignment exists; an assignment with no
/// quoted entries yields an empty list.
fn quoted_list(block: &str, name: &str) -> Option<Vec<String>> {
    let assignment = Regex::new(&format!(r"{name}\s*=\s*\{{([^}}]*)\}}")).unwrap();
    let Some(captures) = assignment.captures(block) else {
        warn!("list '{name}' not found in phase tracker configuration block");
        return None;
    };

    let quoted = Regex::new(r#""([^"]*)""#).unwrap();
    Some(
        quoted
            .captures_iter(&captures[1])
            .map(|entry| entry[1].to_string())
            .collect(),
    )
}

/// Parses a label glyph from its extracted string form.
fn parse_label(raw: &str) -> Option<ButtonLabel> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(code), None) => {
            let label = ButtonLabel::from_code(code);
            if label.is_none() {
                debug!("unknown label glyph code '{code}', using default");
            }
            label
        }
        _ => {
            debug!("label '{raw}' is not a single glyph code, using default");
            None
        }
    }
}
