//! Script generation: template substitution and the two script surfaces.

pub mod phase_buttons;
pub mod template;
pub mod templates;
pub mod upgrade_sheet;

pub use phase_buttons::generate_phase_tracker;
pub use upgrade_sheet::generate_upgrade_sheet;
