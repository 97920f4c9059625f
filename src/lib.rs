//! Cardscribe Library
//!
//! This library provides the core functionality for the cardscribe CLI:
//! calibrating pixel-to-logical coordinate mappings, deriving checkbox
//! layouts from picked coordinates, and generating (or reverse-parsing)
//! Tabletop Simulator card scripts.

// Module declarations
pub mod calibration;
pub mod cli;
pub mod constants;
pub mod error;
pub mod generator;
pub mod layout;
pub mod models;
pub mod parser;
