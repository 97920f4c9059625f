//! Row grouping and layout parameter derivation.

pub mod params;
pub mod rows;

pub use params::{derive_layout_params, fmt4};
pub use rows::group_rows;
