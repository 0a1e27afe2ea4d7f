use error_chain::bail;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::units::{CellsCount, ColumnsCount, RowsCount, WallsCount};

/// The shape of a rectangular grid. Both dimensions are at least 2, a single row or column
/// degenerates the adjacency rules the wall table is built on.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct RectGridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RectGridDimensions {
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<RectGridDimensions> {
        if rows.0 < 2 || columns.0 < 2 {
            bail!(ErrorKind::InvalidGridSpec(format!("grid must be at least 2x2, got {}x{}",
                                                     rows.0,
                                                     columns.0)));
        }
        // Every count derived from the shape has to fit in a usize.
        let cells = rows.0.checked_mul(columns.0);
        let horizontal_walls = (rows.0 - 1).checked_mul(columns.0);
        let vertical_walls = (columns.0 - 1).checked_mul(rows.0);
        let walls = horizontal_walls.and_then(|h| vertical_walls.and_then(|v| h.checked_add(v)));
        if cells.is_none() || walls.is_none() {
            bail!(ErrorKind::InvalidGridSpec(format!("grid of {}x{} is too large",
                                                     rows.0,
                                                     columns.0)));
        }

        Ok(RectGridDimensions { rows, columns })
    }

    #[inline(always)]
    pub fn size(&self) -> CellsCount {
        CellsCount(self.rows.0 * self.columns.0)
    }

    #[inline(always)]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline(always)]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Separators lying between vertically adjacent cells, (R-1) * C of them.
    #[inline(always)]
    pub fn horizontal_walls_count(&self) -> WallsCount {
        WallsCount((self.rows.0 - 1) * self.columns.0)
    }

    /// Separators standing between horizontally adjacent cells, (C-1) * R of them.
    #[inline(always)]
    pub fn vertical_walls_count(&self) -> WallsCount {
        WallsCount((self.columns.0 - 1) * self.rows.0)
    }

    pub fn walls_count(&self) -> WallsCount {
        WallsCount(self.horizontal_walls_count().0 + self.vertical_walls_count().0)
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        coord.row < self.rows.0 && coord.col < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional row major index in the range 0...size.
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row * self.columns.0 + coord.col)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn degenerate_dimensions_rejected() {
        assert!(RectGridDimensions::new(RowsCount(1), ColumnsCount(5)).is_err());
        assert!(RectGridDimensions::new(RowsCount(5), ColumnsCount(1)).is_err());
        assert!(RectGridDimensions::new(RowsCount(0), ColumnsCount(0)).is_err());
        assert!(RectGridDimensions::new(RowsCount(2), ColumnsCount(2)).is_ok());
    }

    #[test]
    fn oversized_dimensions_rejected() {
        let too_large = |rows, columns| match RectGridDimensions::new(RowsCount(rows),
                                                                       ColumnsCount(columns)) {
            Err(Error(ErrorKind::InvalidGridSpec(_), _)) => true,
            _ => false,
        };
        // cell count overflows
        assert!(too_large(usize::MAX / 2 + 1, 4));
        assert!(too_large(4, usize::MAX / 2 + 1));
        assert!(too_large(usize::MAX, usize::MAX));
        // cell count fits, wall count does not
        assert!(too_large(usize::MAX / 2, 2));

        let fits = RectGridDimensions::new(RowsCount(usize::MAX / 4), ColumnsCount(2)).unwrap();
        assert_eq!(fits.size(), CellsCount((usize::MAX / 4) * 2));
    }

    #[test]
    fn counts() {
        let d = RectGridDimensions::new(RowsCount(8), ColumnsCount(12)).unwrap();
        assert_eq!(d.size(), CellsCount(96));
        assert_eq!(d.horizontal_walls_count(), WallsCount(7 * 12));
        assert_eq!(d.vertical_walls_count(), WallsCount(11 * 8));
        assert_eq!(d.walls_count(), WallsCount(84 + 88));

        let small = RectGridDimensions::new(RowsCount(2), ColumnsCount(2)).unwrap();
        assert_eq!(small.walls_count(), WallsCount(4));
    }

    #[test]
    fn coordinate_as_index() {
        let d = RectGridDimensions::new(RowsCount(3), ColumnsCount(3)).unwrap();
        let gc = |r, c| GridCoordinate::new(r, c);
        let coords = [gc(0, 0), gc(0, 1), gc(0, 2), gc(1, 0), gc(1, 1), gc(1, 2), gc(2, 0),
                      gc(2, 1), gc(2, 2)];
        let indices: Vec<Option<usize>> =
            coords.iter().map(|coord| d.coordinate_to_index(*coord)).collect();
        let expected = (0..9).map(Some).collect::<Vec<Option<usize>>>();
        assert_eq!(expected, indices);

        assert_eq!(d.coordinate_to_index(gc(3, 2)), None);
        assert_eq!(d.coordinate_to_index(gc(2, 3)), None);
        assert_eq!(d.coordinate_to_index(gc(usize::MAX, usize::MAX)), None);
    }
}
