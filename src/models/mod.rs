//! Data models for coordinates, layout parameters, and phase buttons.

pub mod coordinate;
pub mod layout;
pub mod phase;
pub mod rgb;

// Re-export commonly used types
pub use coordinate::{CalibrationCorrespondence, CalibrationReference, PixelCoordinate};
pub use layout::{LayoutParams, RowBucket, RowCustomization};
pub use phase::{ButtonLabel, PhaseButton, PhaseButtonConfig};
pub use rgb::RgbColor;
