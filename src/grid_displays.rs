//! Plain text drawing of a maze with box drawing characters, for eyeballing results in a terminal.
//! The entry cell is marked `S` and the exit cell `E`.

use std::fmt;

use crate::cells::GridCoordinate;
use crate::maze::Maze;
use crate::units::{ColumnsCount, RowsCount};

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR: &str = "─";
const WALL_LR_3: &str = "───";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let RowsCount(rows_count) = self.dimensions().rows();
        let ColumnsCount(columns_count) = self.dimensions().columns();

        // Lines alternate between wall lines (corners plus the horizontal walls between them) and
        // cell lines (vertical walls plus cell bodies). There is one more wall line than rows.
        let mut output = String::new();
        for line in 0..=rows_count {

            for column_line in 0..=columns_count {
                output.push_str(self.corner(line, column_line));
                if column_line < columns_count {
                    output.push_str(if self.horizontal_segment(line, column_line) {
                        WALL_LR_3
                    } else {
                        "   "
                    });
                }
            }
            output.push('\n');

            if line < rows_count {
                for column_line in 0..=columns_count {
                    output.push_str(if self.vertical_segment(line, column_line) {
                        WALL_UD
                    } else {
                        " "
                    });
                    if column_line < columns_count {
                        output.push_str(self.cell_body(GridCoordinate::new(line, column_line)));
                    }
                }
                output.push('\n');
            }
        }

        f.write_str(&output)
    }
}

impl Maze {
    fn cell_body(&self, coord: GridCoordinate) -> &'static str {
        if coord == self.entry() {
            " S "
        } else if coord == self.exit() {
            " E "
        } else {
            "   "
        }
    }

    /// Is there a wall on horizontal line `line` above the cell in `column`?
    /// Lines 0 and R are the outer boundary.
    fn horizontal_segment(&self, line: usize, column: usize) -> bool {
        let RowsCount(rows_count) = self.dimensions().rows();
        if line == 0 || line == rows_count {
            true
        } else {
            !self.is_linked(GridCoordinate::new(line - 1, column), GridCoordinate::new(line, column))
        }
    }

    /// Is there a wall on vertical line `line` left of the cell in `row`?
    /// Lines 0 and C are the outer boundary.
    fn vertical_segment(&self, row: usize, line: usize) -> bool {
        let ColumnsCount(columns_count) = self.dimensions().columns();
        if line == 0 || line == columns_count {
            true
        } else {
            !self.is_linked(GridCoordinate::new(row, line - 1), GridCoordinate::new(row, line))
        }
    }

    fn corner(&self, line: usize, column_line: usize) -> &'static str {
        let RowsCount(rows_count) = self.dimensions().rows();
        let ColumnsCount(columns_count) = self.dimensions().columns();

        let left = column_line > 0 && self.horizontal_segment(line, column_line - 1);
        let right = column_line < columns_count && self.horizontal_segment(line, column_line);
        let up = line > 0 && self.vertical_segment(line - 1, column_line);
        let down = line < rows_count && self.vertical_segment(line, column_line);

        match (left, right, up, down) {
            (false, false, false, false) => " ",
            (true, false, false, false) => WALL_L,
            (false, true, false, false) => WALL_R,
            (false, false, true, false) => WALL_U,
            (false, false, false, true) => WALL_D,
            (true, true, false, false) => WALL_LR,
            (false, false, true, true) => WALL_UD,
            (true, false, false, true) => WALL_LD,
            (false, true, true, false) => WALL_RU,
            (true, false, true, false) => WALL_LU,
            (false, true, false, true) => WALL_RD,
            (true, true, true, false) => WALL_LRU,
            (true, true, false, true) => WALL_LRD,
            (true, true, true, true) => WALL_LRUD,
            (false, true, true, true) => WALL_RUD,
            (true, false, true, true) => WALL_LUD,
        }
    }
}
