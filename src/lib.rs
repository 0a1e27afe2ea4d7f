//! **maze_carver** generates perfect mazes on rectangular grids: every cell is reachable and
//! there is exactly one route between any two cells.
//!
//! A maze starts as a `grid::GridSpec` (dimensions, entry and exit). The generator carves passages
//! through a table of walls by randomized depth first search, and `driver::generate` retries until
//! the exit is reachable from the entry. The result is a `maze::Maze` listing the walls still
//! standing and the passages carved.

pub mod cells;
pub mod driver;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grids;
pub mod maze;
pub mod pathing;
pub mod units;
pub mod walls;
