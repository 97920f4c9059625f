//! Affine transform solving from calibration correspondences.
//!
//! Each axis is solved independently from its two reference points:
//!
//! ```text
//! scale  = (pixel2 - pixel1) / (logical2 - logical1)
//! offset = pixel1 - scale * logical1
//! ```
//!
//! so that `pixel = logical * scale + offset` and
//! `logical = (pixel - offset) / scale`. The solved transform reproduces
//! both reference points exactly, up to floating-point rounding.

use crate::error::{Axis, ScriptError};
use crate::models::{CalibrationCorrespondence, CalibrationReference};

/// Scale and offset mapping one axis between pixel and logical space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    /// Pixels per logical unit.
    pub scale: f64,
    /// Pixel position of the logical origin.
    pub offset: f64,
}

impl AffineTransform {
    /// Solves the transform for one axis from two correspondences.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Calibration`] when the correspondences
    /// coincide in either pixel or logical value: equal logical values make
    /// the scale division undefined, and equal pixel values make the scale
    /// zero, which breaks the inverse mapping.
    pub fn solve(
        a: CalibrationCorrespondence,
        b: CalibrationCorrespondence,
        axis: Axis,
    ) -> Result<Self, ScriptError> {
        if a.logical == b.logical || a.pixel == b.pixel {
            return Err(ScriptError::Calibration { axis });
        }

        let scale = (b.pixel - a.pixel) / (b.logical - a.logical);
        let offset = a.pixel - scale * a.logical;

        Ok(Self { scale, offset })
    }

    /// Maps a pixel position to logical space.
    #[must_use]
    pub fn to_logical(&self, pixel: f64) -> f64 {
        (pixel - self.offset) / self.scale
    }

    /// Maps a logical position back to pixel space.
    #[must_use]
    pub fn to_pixel(&self, logical: f64) -> f64 {
        logical * self.scale + self.offset
    }
}

/// The solved two-axis transform for a card render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Horizontal axis transform.
    pub x: AffineTransform,
    /// Vertical axis transform.
    pub y: AffineTransform,
}

impl CardTransform {
    /// Solves both axes from a calibration reference.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError::Calibration`] naming the degenerate axis.
    pub fn solve(reference: &CalibrationReference) -> Result<Self, ScriptError> {
        Ok(Self {
            x: AffineTransform::solve(reference.x[0], reference.x[1], Axis::X)?,
            y: AffineTransform::solve(reference.y[0], reference.y[1], Axis::Y)?,
        })
    }
}
