//! The wall table of a rectangular grid and the working set of walls left standing.
//!
//! Every pair of grid adjacent cells is separated by exactly one wall, and every wall has a fixed
//! index derived from the grid shape alone:
//!
//! - horizontal separators (between rows `r` and `r + 1`, column `c`) come first, row major:
//!   `r * C + c`
//! - vertical separators (between columns `c` and `c + 1`, row `r`) follow, column major:
//!   `(R - 1) * C + c * R + r`
//!
//! `WallTable::wall_between` computes the same formula in O(1), which is how carving finds the
//! wall to knock down.

use std::slice;

use bit_set::BitSet;
use smallvec::SmallVec;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnsCount, RowsCount, WallsCount};

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum WallOrientation {
    /// Lies along the boundary between a cell and the cell south of it.
    Horizontal,
    /// Stands along the boundary between a cell and the cell east of it.
    Vertical,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash, Ord, PartialOrd)]
pub struct WallIndex(pub usize);

/// One wall record: its orientation and the two cells it separates.
/// `first` is always the north (horizontal wall) or west (vertical wall) cell.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub struct Wall {
    pub orientation: WallOrientation,
    pub first: GridCoordinate,
    pub second: GridCoordinate,
}

impl Wall {
    #[inline]
    pub fn cells(&self) -> (GridCoordinate, GridCoordinate) {
        (self.first, self.second)
    }

    #[inline]
    pub fn separates(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

/// The immutable enumeration of every wall position for one grid shape.
#[derive(Debug, Clone)]
pub struct WallTable {
    dimensions: RectGridDimensions,
    walls: Vec<Wall>,
}

impl WallTable {
    pub fn new(dimensions: &RectGridDimensions) -> WallTable {
        let RowsCount(rows) = dimensions.rows();
        let ColumnsCount(columns) = dimensions.columns();
        let WallsCount(walls_count) = dimensions.walls_count();

        let mut walls = Vec::with_capacity(walls_count);
        for row in 1..rows {
            for col in 0..columns {
                walls.push(Wall {
                    orientation: WallOrientation::Horizontal,
                    first: GridCoordinate::new(row - 1, col),
                    second: GridCoordinate::new(row, col),
                });
            }
        }
        for col in 1..columns {
            for row in 0..rows {
                walls.push(Wall {
                    orientation: WallOrientation::Vertical,
                    first: GridCoordinate::new(row, col - 1),
                    second: GridCoordinate::new(row, col),
                });
            }
        }
        debug_assert_eq!(walls.len(), walls_count);

        WallTable {
            dimensions: *dimensions,
            walls,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    #[inline]
    pub fn get(&self, index: WallIndex) -> Option<&Wall> {
        self.walls.get(index.0)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<Wall> {
        self.walls.iter()
    }

    /// The index of the wall separating two grid adjacent cells. Argument order does not matter.
    ///
    /// Fails with `InvalidAdjacency` if either cell is off the grid or the cells are not one
    /// orthogonal step apart.
    pub fn wall_between(&self, a: GridCoordinate, b: GridCoordinate) -> Result<WallIndex> {
        let on_grid = self.dimensions.is_valid_coordinate(a) &&
                      self.dimensions.is_valid_coordinate(b);
        if !on_grid || !a.is_adjacent(b) {
            return Err(ErrorKind::InvalidAdjacency(a, b).into());
        }

        let RowsCount(rows) = self.dimensions.rows();
        let ColumnsCount(columns) = self.dimensions.columns();

        let index = if a.row == b.row {
            let west_col = a.col.min(b.col);
            (rows - 1) * columns + west_col * rows + a.row
        } else {
            let north_row = a.row.min(b.row);
            north_row * columns + a.col
        };
        Ok(WallIndex(index))
    }

    /// The walls bordering `coord` on the grid, up to one per compass direction.
    pub fn walls_of(&self, coord: GridCoordinate) -> SmallVec<[WallIndex; 4]> {
        CompassPrimary::all()
            .iter()
            .filter_map(|dir| coord.offset(*dir, &self.dimensions))
            .filter_map(|neighbour| self.wall_between(coord, neighbour).ok())
            .collect()
    }
}

/// A set of wall indices into one `WallTable`, used for the walls still standing while a maze
/// is carved.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WallSet {
    walls: BitSet,
    capacity: usize,
}

impl WallSet {
    /// Every wall of the table, nothing carved yet.
    pub fn full(table: &WallTable) -> WallSet {
        let capacity = table.len();
        let mut walls = BitSet::with_capacity(capacity);
        for index in 0..capacity {
            walls.insert(index);
        }
        WallSet { walls, capacity }
    }

    pub fn empty(table: &WallTable) -> WallSet {
        WallSet {
            walls: BitSet::with_capacity(table.len()),
            capacity: table.len(),
        }
    }

    /// Returns true if the wall was present.
    #[inline]
    pub fn remove(&mut self, index: WallIndex) -> bool {
        self.walls.remove(index.0)
    }

    /// Returns true if the wall was not already present. Indices outside the table are ignored.
    #[inline]
    pub fn insert(&mut self, index: WallIndex) -> bool {
        index.0 < self.capacity && self.walls.insert(index.0)
    }

    #[inline]
    pub fn contains(&self, index: WallIndex) -> bool {
        self.walls.contains(index.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// The size of the table this set indexes into.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Wall indices in ascending order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = WallIndex> + 'a {
        self.walls.iter().map(WallIndex)
    }
}
