use std::convert::TryFrom;
use std::fmt;

use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnsCount, RowsCount};

/// A cell position on a rectangular grid. Row 0 is the north most row, column 0 the west most.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: usize,
    pub col: usize,
}

impl GridCoordinate {
    pub fn new(row: usize, col: usize) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    pub fn from_row_major_index(index: usize, dimensions: &RectGridDimensions) -> GridCoordinate {
        let ColumnsCount(columns) = dimensions.columns();
        GridCoordinate::new(index / columns, index % columns)
    }

    /// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate would fall off the grid.
    pub fn offset(self, dir: CompassPrimary, dimensions: &RectGridDimensions) -> Option<GridCoordinate> {
        let RowsCount(rows) = dimensions.rows();
        let ColumnsCount(columns) = dimensions.columns();
        let GridCoordinate { row, col } = self;

        match dir {
            CompassPrimary::North if row > 0 => Some(GridCoordinate::new(row - 1, col)),
            CompassPrimary::South if row + 1 < rows => Some(GridCoordinate::new(row + 1, col)),
            CompassPrimary::East if col + 1 < columns => Some(GridCoordinate::new(row, col + 1)),
            CompassPrimary::West if col > 0 => Some(GridCoordinate::new(row, col - 1)),
            _ => None,
        }
    }

    /// Two positions are grid adjacent when they are one step apart along exactly one axis.
    pub fn is_adjacent(self, other: GridCoordinate) -> bool {
        let row_step = abs_diff(self.row, other.row);
        let col_step = abs_diff(self.col, other.col);
        row_step + col_step == 1
    }
}

impl From<(usize, usize)> for GridCoordinate {
    fn from(row_col_pair: (usize, usize)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[inline]
fn abs_diff(a: usize, b: usize) -> usize {
    if a > b { a - b } else { b - a }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    pub fn all() -> [CompassPrimary; 4] {
        [CompassPrimary::North, CompassPrimary::South, CompassPrimary::East, CompassPrimary::West]
    }
}

/// The integer cell codes of a grid matrix.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellCode {
    /// `1`: an ordinary passable cell, carved into during generation.
    Path,
    /// `0`: the pre-opened entry, where carving starts.
    Entry,
    /// `-1`: the designated exit.
    Exit,
}

impl CellCode {
    pub fn code(self) -> i8 {
        match self {
            CellCode::Path => 1,
            CellCode::Entry => 0,
            CellCode::Exit => -1,
        }
    }
}

impl TryFrom<i8> for CellCode {
    type Error = i8;

    fn try_from(code: i8) -> Result<CellCode, i8> {
        match code {
            1 => Ok(CellCode::Path),
            0 => Ok(CellCode::Entry),
            -1 => Ok(CellCode::Exit),
            unknown => Err(unknown),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(rows: usize, columns: usize) -> RectGridDimensions {
        RectGridDimensions::new(RowsCount(rows), ColumnsCount(columns))
            .expect("valid test dimensions")
    }

    #[test]
    fn offsets_stay_on_grid() {
        let d = dims(2, 3);
        let gc = |r, c| GridCoordinate::new(r, c);

        assert_eq!(gc(0, 0).offset(CompassPrimary::North, &d), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::West, &d), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::South, &d), Some(gc(1, 0)));
        assert_eq!(gc(0, 0).offset(CompassPrimary::East, &d), Some(gc(0, 1)));

        assert_eq!(gc(1, 2).offset(CompassPrimary::South, &d), None);
        assert_eq!(gc(1, 2).offset(CompassPrimary::East, &d), None);
        assert_eq!(gc(1, 2).offset(CompassPrimary::North, &d), Some(gc(0, 2)));
        assert_eq!(gc(1, 2).offset(CompassPrimary::West, &d), Some(gc(1, 1)));
    }

    #[test]
    fn adjacency() {
        let gc = |r, c| GridCoordinate::new(r, c);
        assert!(gc(1, 1).is_adjacent(gc(0, 1)));
        assert!(gc(1, 1).is_adjacent(gc(1, 2)));
        assert!(!gc(1, 1).is_adjacent(gc(1, 1)));
        assert!(!gc(1, 1).is_adjacent(gc(0, 0)));
        assert!(!gc(1, 1).is_adjacent(gc(1, 3)));
    }

    #[test]
    fn row_major_index_conversion() {
        let d = dims(3, 4);
        assert_eq!(GridCoordinate::from_row_major_index(0, &d), GridCoordinate::new(0, 0));
        assert_eq!(GridCoordinate::from_row_major_index(5, &d), GridCoordinate::new(1, 1));
        assert_eq!(GridCoordinate::from_row_major_index(11, &d), GridCoordinate::new(2, 3));
    }

    #[test]
    fn cell_codes() {
        assert_eq!(CellCode::try_from(1i8), Ok(CellCode::Path));
        assert_eq!(CellCode::try_from(0i8), Ok(CellCode::Entry));
        assert_eq!(CellCode::try_from(-1i8), Ok(CellCode::Exit));
        assert_eq!(CellCode::try_from(2i8), Err(2));
        assert_eq!(CellCode::Exit.code(), -1);
    }
}
