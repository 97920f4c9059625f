//! Phase button configuration for the phase-tracker script.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::rgb::RgbColor;

/// Glyph catalog for button labels.
///
/// The tracker renders labels with its bundled icon font, so a label is a
/// single character code from this fixed catalog rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ButtonLabel {
    /// Filled circle, code `u`. The default marker glyph.
    Circle,
    /// Diamond, code `t`.
    Diamond,
    /// Square, code `s`.
    Square,
    /// Star, code `v`.
    Star,
    /// Skull, code `w`.
    Skull,
}

impl ButtonLabel {
    /// All catalog entries, in code order.
    pub const ALL: [Self; 5] = [
        Self::Square,
        Self::Diamond,
        Self::Circle,
        Self::Star,
        Self::Skull,
    ];

    /// The single-character icon-font code for this glyph.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Square => 's',
            Self::Diamond => 't',
            Self::Circle => 'u',
            Self::Star => 'v',
            Self::Skull => 'w',
        }
    }

    /// Looks up a glyph by its icon-font code.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|glyph| glyph.code() == code)
    }
}

impl Default for ButtonLabel {
    fn default() -> Self {
        Self::Circle
    }
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<String> for ButtonLabel {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code)
                .ok_or_else(|| format!("Unknown label glyph code '{code}'")),
            _ => Err(format!(
                "Label must be a single glyph code character, got '{value}'"
            )),
        }
    }
}

impl From<ButtonLabel> for String {
    fn from(label: ButtonLabel) -> Self {
        label.code().to_string()
    }
}

/// One tracker button: a stable id, a label glyph, and a face color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseButton {
    /// Identifier the runtime uses to resolve the button's position.
    pub id: String,
    /// Label glyph drawn on the button face.
    pub label: ButtonLabel,
    /// Button face color.
    pub color: RgbColor,
}

impl PhaseButton {
    /// Creates a new button.
    #[must_use]
    pub fn new(id: impl Into<String>, label: ButtonLabel, color: RgbColor) -> Self {
        Self {
            id: id.into(),
            label,
            color,
        }
    }
}

/// An ordered set of tracker buttons.
///
/// Order is significant: it defines each button's array position and
/// therefore the id-to-position index map emitted into the script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhaseButtonConfig {
    /// The buttons, in declared order.
    pub buttons: Vec<PhaseButton>,
}

impl PhaseButtonConfig {
    /// Creates a config from an ordered button list.
    #[must_use]
    pub fn new(buttons: Vec<PhaseButton>) -> Self {
        Self { buttons }
    }

    /// Number of buttons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    /// Whether the config holds no buttons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl Default for PhaseButtonConfig {
    /// The documented default: the four canonical phases, a shared circle
    /// glyph, and four distinct colors.
    fn default() -> Self {
        Self::new(vec![
            PhaseButton::new("Mythos", ButtonLabel::Circle, RgbColor::new(128, 0, 128)),
            PhaseButton::new(
                "Investigation",
                ButtonLabel::Circle,
                RgbColor::new(255, 140, 0),
            ),
            PhaseButton::new("Enemy", ButtonLabel::Circle, RgbColor::new(220, 20, 60)),
            PhaseButton::new("Upkeep", ButtonLabel::Circle, RgbColor::new(34, 139, 34)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_codes_round_trip() {
        for glyph in ButtonLabel::ALL {
            assert_eq!(ButtonLabel::from_code(glyph.code()), Some(glyph));
        }
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(ButtonLabel::from_code('x'), None);
        assert_eq!(ButtonLabel::from_code('U'), None);
    }

    #[test]
    fn test_label_serde_single_char() {
        let label: ButtonLabel = serde_json::from_str("\"t\"").unwrap();
        assert_eq!(label, ButtonLabel::Diamond);
        assert!(serde_json::from_str::<ButtonLabel>("\"tt\"").is_err());
        assert!(serde_json::from_str::<ButtonLabel>("\"z\"").is_err());
    }

    #[test]
    fn test_default_config_shape() {
        let config = PhaseButtonConfig::default();
        let ids: Vec<&str> = config.buttons.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["Mythos", "Investigation", "Enemy", "Upkeep"]);

        // Shared label glyph, four distinct colors
        assert!(config
            .buttons
            .iter()
            .all(|b| b.label == ButtonLabel::Circle));
        let mut colors: Vec<_> = config.buttons.iter().map(|b| b.color).collect();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), 4);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = PhaseButtonConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: PhaseButtonConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
