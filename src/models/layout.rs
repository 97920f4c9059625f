//! Layout structures derived from picked coordinates.

/// All pixel x-positions sharing one exact pixel y-value, treated as a
/// single row of checkboxes.
///
/// `x_coords` is non-empty and sorted ascending; rows themselves are ordered
/// ascending by `y` (see `layout::rows`).
#[derive(Debug, Clone, PartialEq)]
pub struct RowBucket {
    /// Shared vertical pixel position of the row.
    pub y: f64,
    /// Horizontal pixel positions of the row's columns, ascending.
    pub x_coords: Vec<f64>,
}

/// Per-row layout descriptor consumed by the upgrade-sheet template.
#[derive(Debug, Clone, PartialEq)]
pub struct RowCustomization {
    /// 1-based row position, matching the template's Lua array indexing.
    pub row_index: usize,
    /// Logical vertical position of the row.
    pub pos_z: f64,
    /// Number of checkbox columns in the row.
    pub checkbox_count: usize,
}

/// The compact parameter set injected into the upgrade-sheet template.
///
/// The template draws column `col` of a row at `x_initial + col * x_offset`
/// with columns numbered from 1, which is why `x_initial` sits one column
/// spacing to the left of the first picked column.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    /// Logical x origin for checkbox drawing.
    pub x_initial: f64,
    /// Logical spacing between checkbox columns.
    pub x_offset: f64,
    /// One entry per picked row, in ascending row order.
    pub customizations: Vec<RowCustomization>,
}
