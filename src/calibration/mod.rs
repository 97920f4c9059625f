//! Pixel-to-logical coordinate calibration.

pub mod solver;

pub use solver::{AffineTransform, CardTransform};
