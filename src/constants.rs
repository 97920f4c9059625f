//! Application-wide constants.

use crate::models::{CalibrationCorrespondence, CalibrationReference};

/// Application display name.
pub const APP_NAME: &str = "Cardscribe";

/// Binary name used in help and error text.
pub const APP_BINARY_NAME: &str = "cardscribe";

/// Width of the standard card render, in pixels.
pub const CARD_RENDER_WIDTH_PX: f64 = 750.0;

/// Height of the standard card render, in pixels.
pub const CARD_RENDER_HEIGHT_PX: f64 = 1050.0;

/// Pixels of horizontal spacing per logical unit between checkbox columns.
///
/// Column spacing is derived from a pixel gap measured on the render, so it
/// uses this fixed ratio rather than the solved horizontal transform; the two
/// were tuned together against the standard 750x1050 render.
pub const CHECKBOX_COLUMN_PX_PER_UNIT: f64 = 340.0;

/// Assumed pixel gap between checkbox columns when every picked row has a
/// single column and no gap can be measured.
pub const DEFAULT_COLUMN_GAP_PX: f64 = 21.0;

/// Default calibration for the standard 750x1050 card render.
///
/// Two reference correspondences per axis, measured once against a card
/// whose logical corners are known. Callers working from a non-standard
/// render supply their own [`CalibrationReference`] instead.
pub fn default_calibration() -> CalibrationReference {
    CalibrationReference {
        x: [
            CalibrationCorrespondence {
                pixel: 69.0,
                logical: -0.9,
            },
            CalibrationCorrespondence {
                pixel: 681.0,
                logical: 0.9,
            },
        ],
        y: [
            CalibrationCorrespondence {
                pixel: 93.0,
                logical: -0.9,
            },
            CalibrationCorrespondence {
                pixel: 957.0,
                logical: 0.9,
            },
        ],
    }
}
