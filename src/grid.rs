use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use error_chain::bail;
use itertools::Itertools;
use smallvec::SmallVec;

use crate::cells::{CellCode, CompassPrimary, GridCoordinate};
use crate::errors::*;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::units::{CellsCount, ColumnsCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[GridCoordinate; 4]>;

/// A validated description of the grid to carve: its shape, the entry carving starts from and
/// the exit it has to reach.
#[derive(Eq, PartialEq, Debug, Copy, Clone)]
pub struct GridSpec {
    dimensions: RectGridDimensions,
    entry: GridCoordinate,
    exit: GridCoordinate,
}

impl GridSpec {
    pub fn new(rows: RowsCount,
               columns: ColumnsCount,
               entry: GridCoordinate,
               exit: GridCoordinate)
               -> Result<GridSpec> {
        let dimensions = RectGridDimensions::new(rows, columns)?;

        if !dimensions.is_valid_coordinate(entry) {
            bail!(ErrorKind::InvalidGridSpec(format!("entry {} is outside the {}x{} grid",
                                                     entry,
                                                     rows.0,
                                                     columns.0)));
        }
        if !dimensions.is_valid_coordinate(exit) {
            bail!(ErrorKind::InvalidGridSpec(format!("exit {} is outside the {}x{} grid",
                                                     exit,
                                                     rows.0,
                                                     columns.0)));
        }
        if entry == exit {
            bail!(ErrorKind::InvalidGridSpec(format!("entry and exit are both {}", entry)));
        }

        Ok(GridSpec { dimensions, entry, exit })
    }

    /// Build a spec from a literal matrix of cell codes: `1` path, `0` entry, `-1` exit.
    /// There must be exactly one entry and exactly one exit.
    pub fn from_cell_codes(matrix: &[Vec<i8>]) -> Result<GridSpec> {
        if matrix.is_empty() || matrix[0].is_empty() {
            bail!(ErrorKind::InvalidGridSpec(String::from("cell matrix is empty")));
        }
        if !matrix.iter().map(Vec::len).all_equal() {
            bail!(ErrorKind::InvalidGridSpec(String::from("cell matrix rows differ in length")));
        }

        let mut entries = CoordinateSmallVec::new();
        let mut exits = CoordinateSmallVec::new();
        for (row, codes) in matrix.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                let coord = GridCoordinate::new(row, col);
                match CellCode::try_from(code) {
                    Ok(CellCode::Path) => {}
                    Ok(CellCode::Entry) => entries.push(coord),
                    Ok(CellCode::Exit) => exits.push(coord),
                    Err(unknown) => {
                        bail!(ErrorKind::InvalidGridSpec(format!("unknown cell code {} at {}",
                                                                 unknown,
                                                                 coord)))
                    }
                }
            }
        }

        let single = |found: &CoordinateSmallVec, name: &str| -> Result<GridCoordinate> {
            match found.len() {
                1 => Ok(found[0]),
                n => {
                    Err(ErrorKind::InvalidGridSpec(format!("expected exactly one {} cell, found {}",
                                                           name,
                                                           n))
                        .into())
                }
            }
        };
        let entry = single(&entries, "entry (0)")?;
        let exit = single(&exits, "exit (-1)")?;

        GridSpec::new(RowsCount(matrix.len()), ColumnsCount(matrix[0].len()), entry, exit)
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn entry(&self) -> GridCoordinate {
        self.entry
    }

    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        self.exit
    }
}

/// Parses the literal matrix form, one grid row per non blank line. Codes are separated by
/// whitespace and/or commas, so `1, 0, 1` and `1 0 1` are the same row.
impl FromStr for GridSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<GridSpec> {
        let mut matrix = Vec::new();
        for (line_number, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let codes = line.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<i8>()
                        .chain_err(|| {
                            ErrorKind::InvalidGridSpec(format!("line {}: '{}' is not a cell code",
                                                               line_number + 1,
                                                               token))
                        })
                })
                .collect::<Result<Vec<i8>>>()?;
            matrix.push(codes);
        }
        GridSpec::from_cell_codes(&matrix)
    }
}

/// The R x C cell code matrix for one generation attempt.
#[derive(Debug, Clone)]
pub struct Grid {
    dimensions: RectGridDimensions,
    cells: Vec<CellCode>,
    entry: GridCoordinate,
    exit: GridCoordinate,
}

impl Grid {
    pub fn new(spec: &GridSpec) -> Grid {
        let dimensions = *spec.dimensions();
        let CellsCount(cells_count) = dimensions.size();

        let cells = RectGridCellIter::new(dimensions)
            .map(|coord| if coord == spec.entry() {
                CellCode::Entry
            } else if coord == spec.exit() {
                CellCode::Exit
            } else {
                CellCode::Path
            })
            .collect::<Vec<CellCode>>();
        debug_assert_eq!(cells.len(), cells_count);

        Grid {
            dimensions,
            cells,
            entry: spec.entry(),
            exit: spec.exit(),
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.dimensions.size().0
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.dimensions.rows()
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.dimensions.columns()
    }

    #[inline]
    pub fn entry(&self) -> GridCoordinate {
        self.entry
    }

    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        self.exit
    }

    #[inline]
    pub fn is_exit(&self, coord: GridCoordinate) -> bool {
        coord == self.exit
    }

    /// The cell code at `coord`, or None off the grid.
    pub fn cell_code(&self, coord: GridCoordinate) -> Option<CellCode> {
        self.coordinate_to_index(coord).map(|index| self.cells[index])
    }

    /// The cell codes as the integer matrix callers supply, row by row.
    pub fn cell_codes(&self) -> Vec<Vec<i8>> {
        self.cells
            .chunks(self.columns().0)
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }

    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        self.dimensions.is_valid_coordinate(coord)
    }

    #[inline]
    pub fn coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        self.dimensions.coordinate_to_index(coord)
    }

    #[inline]
    pub fn index_to_coordinate(&self, index: usize) -> Option<GridCoordinate> {
        if index < self.size() {
            Some(GridCoordinate::from_row_major_index(index, &self.dimensions))
        } else {
            None
        }
    }

    /// Cells to the North, South, East or West of `coord` that are on the grid.
    pub fn neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        CompassPrimary::all()
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        if self.is_valid_coordinate(coord) {
            coord.offset(direction, &self.dimensions)
        } else {
            None
        }
    }

    #[inline]
    pub fn iter(&self) -> RectGridCellIter {
        RectGridCellIter::new(self.dimensions)
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        RectRowIter::new(&self.dimensions)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cell_codes() {
            writeln!(f, "{}", row.iter().map(|code| format!("{:>2}", code)).join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;

    fn spec(rows: usize,
            columns: usize,
            entry: (usize, usize),
            exit: (usize, usize))
            -> Result<GridSpec> {
        GridSpec::new(RowsCount(rows), ColumnsCount(columns), entry.into(), exit.into())
    }

    #[test]
    fn spec_validation() {
        assert!(spec(2, 2, (0, 0), (1, 1)).is_ok());
        assert!(spec(1, 4, (0, 0), (0, 3)).is_err());
        assert!(spec(4, 4, (0, 0), (0, 0)).is_err());
        assert!(spec(4, 4, (4, 0), (0, 1)).is_err());
        assert!(spec(4, 4, (0, 0), (0, 4)).is_err());
        assert!(spec(usize::MAX / 2 + 1, 4, (0, 0), (0, 1)).is_err());
    }

    #[test]
    fn invalid_spec_error_kind() {
        match spec(4, 4, (2, 2), (2, 2)) {
            Err(Error(ErrorKind::InvalidGridSpec(_), _)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn grid_cell_codes() {
        let g = Grid::new(&spec(3, 4, (0, 1), (2, 2)).unwrap());
        assert_eq!(g.cell_codes(),
                   vec![vec![1, 0, 1, 1], vec![1, 1, 1, 1], vec![1, 1, -1, 1]]);
        assert_eq!(g.cell_code(GridCoordinate::new(0, 1)), Some(CellCode::Entry));
        assert_eq!(g.cell_code(GridCoordinate::new(2, 2)), Some(CellCode::Exit));
        assert_eq!(g.cell_code(GridCoordinate::new(1, 1)), Some(CellCode::Path));
        assert_eq!(g.cell_code(GridCoordinate::new(3, 0)), None);
        assert!(g.is_exit(GridCoordinate::new(2, 2)));
        assert_eq!(g.size(), 12);
    }

    #[test]
    fn exactly_one_exit_cell() {
        let g = Grid::new(&spec(5, 5, (0, 0), (4, 4)).unwrap());
        let exits = g.iter().filter(|c| g.cell_code(*c) == Some(CellCode::Exit)).count();
        assert_eq!(exits, 1);
    }

    #[test]
    fn neighbour_cells() {
        let g = Grid::new(&spec(10, 10, (0, 0), (9, 9)).unwrap());

        let check_expected_neighbours = |coord, expected_neighbours: &[GridCoordinate]| {
            let neighbours: Vec<GridCoordinate> =
                g.neighbours(coord).iter().cloned().sorted().collect();
            let expected: Vec<GridCoordinate> =
                expected_neighbours.iter().cloned().sorted().collect();
            assert_eq!(neighbours, expected);
        };
        let gc = |r, c| GridCoordinate::new(r, c);

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // sides
        check_expected_neighbours(gc(0, 1), &[gc(0, 0), gc(1, 1), gc(0, 2)]);
        check_expected_neighbours(gc(8, 9), &[gc(7, 9), gc(9, 9), gc(8, 8)]);

        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);

        // off the grid
        check_expected_neighbours(gc(10, 10), &[]);
    }

    #[test]
    fn index_round_trip_bounds() {
        let g = Grid::new(&spec(2, 3, (0, 0), (1, 2)).unwrap());
        assert_eq!(g.index_to_coordinate(5), Some(GridCoordinate::new(1, 2)));
        assert_eq!(g.index_to_coordinate(6), None);
    }

    #[test]
    fn spec_from_cell_codes() {
        let matrix = vec![vec![1, 0, 1, 1], vec![1, 1, 1, 1], vec![1, 1, -1, 1]];
        let s = GridSpec::from_cell_codes(&matrix).unwrap();
        assert_eq!(s.entry(), GridCoordinate::new(0, 1));
        assert_eq!(s.exit(), GridCoordinate::new(2, 2));
        assert_eq!(s.dimensions().rows(), RowsCount(3));
        assert_eq!(s.dimensions().columns(), ColumnsCount(4));
        assert_eq!(Grid::new(&s).cell_codes(), matrix);
    }

    #[test]
    fn spec_from_bad_cell_codes() {
        // no exit
        assert!(GridSpec::from_cell_codes(&[vec![0, 1], vec![1, 1]]).is_err());
        // two exits
        assert!(GridSpec::from_cell_codes(&[vec![0, -1], vec![1, -1]]).is_err());
        // no entry
        assert!(GridSpec::from_cell_codes(&[vec![1, -1], vec![1, 1]]).is_err());
        // unknown code
        assert!(GridSpec::from_cell_codes(&[vec![0, -1], vec![1, 7]]).is_err());
        // ragged
        assert!(GridSpec::from_cell_codes(&[vec![0, -1, 1], vec![1, 1]]).is_err());
        // degenerate
        assert!(GridSpec::from_cell_codes(&[vec![0, 1, -1]]).is_err());
        assert!(GridSpec::from_cell_codes(&[]).is_err());
    }

    #[test]
    fn spec_from_text() {
        let text = "
            1, 0, 1
            1  1  1
            1,-1, 1
        ";
        let s = text.parse::<GridSpec>().unwrap();
        assert_eq!(s.entry(), GridCoordinate::new(0, 1));
        assert_eq!(s.exit(), GridCoordinate::new(2, 1));

        assert!("1 0\n1 x".parse::<GridSpec>().is_err());
    }

    #[test]
    fn grid_display() {
        let g = Grid::new(&spec(2, 2, (0, 0), (1, 1)).unwrap());
        assert_eq!(format!("{}", g), " 0  1\n 1 -1\n");
    }
}
