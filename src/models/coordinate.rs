//! Pixel-space coordinates and calibration reference data.

use serde::{Deserialize, Serialize};

/// A point in source-image pixel space.
///
/// Serializes as a two-element `[x, y]` array, the shape produced by the
/// coordinate-picking workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PixelCoordinate {
    /// Horizontal pixel position.
    pub x: f64,
    /// Vertical pixel position.
    pub y: f64,
}

impl PixelCoordinate {
    /// Creates a new pixel coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PixelCoordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<PixelCoordinate> for (f64, f64) {
    fn from(coord: PixelCoordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// A known pairing of a pixel position and its logical equivalent on one
/// axis, used to solve the affine transform for that axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationCorrespondence {
    /// Position in source-image pixel space.
    pub pixel: f64,
    /// Equivalent position in the runtime's logical coordinate space.
    pub logical: f64,
}

/// The full calibration input: two correspondences per axis.
///
/// Passed explicitly to the solver so it stays pure and testable with
/// arbitrary calibration data; the measured defaults for the standard card
/// render live in [`crate::constants::default_calibration`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationReference {
    /// Reference correspondences for the horizontal axis.
    pub x: [CalibrationCorrespondence; 2],
    /// Reference correspondences for the vertical axis.
    pub y: [CalibrationCorrespondence; 2],
}
