use std::fmt;

use crate::cells::GridCoordinate;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{CellsCount, ColumnsCount, RowsCount};

/// Row major iteration over every cell coordinate of a grid.
#[derive(Clone)]
pub struct RectGridCellIter {
    dimensions: RectGridDimensions,
    current_cell_number: usize,
    cells_count: usize,
}

impl RectGridCellIter {
    pub fn new(dimensions: RectGridDimensions) -> RectGridCellIter {
        let CellsCount(cells_count) = dimensions.size();
        RectGridCellIter {
            dimensions,
            current_cell_number: 0,
            cells_count,
        }
    }
}

impl fmt::Debug for RectGridCellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for RectGridCellIter {} // default impl using size_hint()
impl Iterator for RectGridCellIter {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = GridCoordinate::from_row_major_index(self.current_cell_number,
                                                             &self.dimensions);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

/// Iterates the grid one row at a time, north to south.
#[derive(Debug, Copy, Clone)]
pub struct RectRowIter {
    current_index: usize,
    rows_size: RowsCount,
    cols_size: ColumnsCount,
}

impl RectRowIter {
    pub fn new(dimensions: &RectGridDimensions) -> RectRowIter {
        RectRowIter {
            current_index: 0,
            rows_size: dimensions.rows(),
            cols_size: dimensions.columns(),
        }
    }
}

impl ExactSizeIterator for RectRowIter {}
impl Iterator for RectRowIter {
    type Item = Vec<GridCoordinate>;

    fn next(&mut self) -> Option<Self::Item> {
        let RowsCount(count) = self.rows_size;
        if self.current_index < count {
            let ColumnsCount(length) = self.cols_size;
            let row = self.current_index;
            let coords = (0..length).map(|col| GridCoordinate::new(row, col)).collect();
            self.current_index += 1;
            Some(coords)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.rows_size.0 - self.current_index;
        (lower_bound, Some(lower_bound))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dims(rows: usize, columns: usize) -> RectGridDimensions {
        RectGridDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
    }

    #[test]
    fn cell_iter() {
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(RectGridCellIter::new(dims(2, 3)).collect::<Vec<GridCoordinate>>(),
                   &[gc(0, 0), gc(0, 1), gc(0, 2), gc(1, 0), gc(1, 1), gc(1, 2)]);
    }

    #[test]
    fn cell_iter_exact_size() {
        let mut iter = RectGridCellIter::new(dims(3, 3));
        assert_eq!(iter.len(), 9);
        let _ = iter.next();
        assert_eq!(iter.len(), 8);
    }

    #[test]
    fn row_iter() {
        let gc = |r, c| GridCoordinate::new(r, c);
        assert_eq!(RectRowIter::new(&dims(2, 2)).collect::<Vec<Vec<GridCoordinate>>>(),
                   &[&[gc(0, 0), gc(0, 1)], &[gc(1, 0), gc(1, 1)]]);
    }
}
