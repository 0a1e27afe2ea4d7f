//! Ready made grid specs.

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::GridSpec;
use crate::units::{ColumnsCount, RowsCount};

/// 8 rows by 12 columns, entering on the top row and leaving on the bottom row.
pub fn standard_grid() -> Result<GridSpec> {
    GridSpec::new(RowsCount(8),
                  ColumnsCount(12),
                  GridCoordinate::new(0, 1),
                  GridCoordinate::new(7, 10))
}

/// 12 rows by 16 columns, entering on the top row and leaving on the bottom row.
pub fn large_grid() -> Result<GridSpec> {
    GridSpec::new(RowsCount(12),
                  ColumnsCount(16),
                  GridCoordinate::new(0, 1),
                  GridCoordinate::new(11, 14))
}

/// The spec for a grid with corners as entry and exit: top left to bottom right.
pub fn corner_to_corner_grid(rows: RowsCount, columns: ColumnsCount) -> Result<GridSpec> {
    GridSpec::new(rows,
                  columns,
                  GridCoordinate::new(0, 0),
                  GridCoordinate::new(rows.0.saturating_sub(1), columns.0.saturating_sub(1)))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn presets_are_valid() {
        let standard = standard_grid().unwrap();
        assert_eq!(standard.dimensions().rows(), RowsCount(8));
        assert_eq!(standard.dimensions().columns(), ColumnsCount(12));
        assert_eq!(standard.entry(), GridCoordinate::new(0, 1));
        assert_eq!(standard.exit(), GridCoordinate::new(7, 10));

        let large = large_grid().unwrap();
        assert_eq!(large.dimensions().size().0, 192);
        assert_eq!(large.exit(), GridCoordinate::new(11, 14));
    }

    #[test]
    fn corner_to_corner() {
        let spec = corner_to_corner_grid(RowsCount(3), ColumnsCount(5)).unwrap();
        assert_eq!(spec.entry(), GridCoordinate::new(0, 0));
        assert_eq!(spec.exit(), GridCoordinate::new(2, 4));

        assert!(corner_to_corner_grid(RowsCount(1), ColumnsCount(5)).is_err());
        assert!(corner_to_corner_grid(RowsCount(0), ColumnsCount(0)).is_err());
    }
}
