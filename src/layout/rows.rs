//! Grouping picked coordinates into rows.

use crate::error::ScriptError;
use crate::models::{PixelCoordinate, RowBucket};

/// Groups pixel coordinates into rows by exact vertical position.
///
/// Coordinates share a row only when their `y` values are exactly equal;
/// there is no tolerance or snapping. The picking workflow pins a row's
/// coordinates to one `y` before they reach this function, so near-misses
/// are intentionally kept apart. Within a row, x-positions are sorted
/// ascending; rows are ordered ascending by `y`.
///
/// # Errors
///
/// Returns [`ScriptError::EmptyInput`] for an empty coordinate list.
pub fn group_rows(coords: &[PixelCoordinate]) -> Result<Vec<RowBucket>, ScriptError> {
    if coords.is_empty() {
        return Err(ScriptError::EmptyInput);
    }

    let mut sorted = coords.to_vec();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));

    let mut rows: Vec<RowBucket> = Vec::new();
    for coord in sorted {
        match rows.last_mut() {
            Some(row) if row.y == coord.y => row.x_coords.push(coord.x),
            _ => rows.push(RowBucket {
                y: coord.y,
                x_coords: vec![coord.x],
            }),
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(f64, f64)]) -> Vec<PixelCoordinate> {
        pairs.iter().map(|&(x, y)| PixelCoordinate::new(x, y)).collect()
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(group_rows(&[]), Err(ScriptError::EmptyInput));
    }

    #[test]
    fn test_single_coordinate_single_row() {
        let rows = group_rows(&coords(&[(68.0, 206.0)])).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].y, 206.0);
        assert_eq!(rows[0].x_coords, vec![68.0]);
    }

    #[test]
    fn test_rows_grouped_by_exact_y() {
        // Two columns at y=206, one at y=580
        let rows = group_rows(&coords(&[(68.0, 206.0), (89.0, 206.0), (68.0, 580.0)])).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].x_coords.len(), 2);
        assert_eq!(rows[1].x_coords.len(), 1);
    }

    #[test]
    fn test_no_tolerance_between_near_rows() {
        let rows = group_rows(&coords(&[(68.0, 206.0), (89.0, 206.5)])).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_x_sorted_within_row_and_rows_sorted_by_y() {
        let rows = group_rows(&coords(&[
            (120.0, 580.0),
            (89.0, 206.0),
            (68.0, 206.0),
            (68.0, 580.0),
        ]))
        .unwrap();
        assert_eq!(rows[0].y, 206.0);
        assert_eq!(rows[0].x_coords, vec![68.0, 89.0]);
        assert_eq!(rows[1].y, 580.0);
        assert_eq!(rows[1].x_coords, vec![68.0, 120.0]);
    }

    #[test]
    fn test_row_count_matches_distinct_y_values() {
        let input = coords(&[
            (10.0, 100.0),
            (20.0, 100.0),
            (30.0, 200.0),
            (40.0, 300.0),
            (50.0, 300.0),
            (60.0, 300.0),
        ]);
        let rows = group_rows(&input).unwrap();
        assert_eq!(rows.len(), 3);
        let total: usize = rows.iter().map(|r| r.x_coords.len()).sum();
        assert_eq!(total, input.len());
    }
}
