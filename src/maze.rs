use petgraph::graph::{NodeIndex, UnGraph};

use crate::cells::{CellCode, GridCoordinate};
use crate::generators::{CarveStats, Carving};
use crate::grid::{CoordinateSmallVec, Grid};
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_iterators::{RectGridCellIter, RectRowIter};
use crate::walls::{Wall, WallIndex, WallSet, WallTable};

/// A successfully generated maze: every cell carved, the exit reachable from the entry.
///
/// Collaborators place one obstacle per `standing_walls` record; `passages` are the walls that
/// were knocked down.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    wall_table: WallTable,
    standing: WallSet,
    removed: Vec<WallIndex>,
    visit_order: Vec<GridCoordinate>,
    stats: CarveStats,
    attempts: usize,
}

impl Maze {
    pub(crate) fn new(grid: Grid, wall_table: WallTable, carving: Carving, attempts: usize) -> Maze {
        Maze {
            grid,
            wall_table,
            standing: carving.standing,
            removed: carving.removed,
            visit_order: carving.visit_order,
            stats: carving.stats,
            attempts,
        }
    }

    #[inline]
    pub fn dimensions(&self) -> &RectGridDimensions {
        self.grid.dimensions()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn wall_table(&self) -> &WallTable {
        &self.wall_table
    }

    #[inline]
    pub fn entry(&self) -> GridCoordinate {
        self.grid.entry()
    }

    #[inline]
    pub fn exit(&self) -> GridCoordinate {
        self.grid.exit()
    }

    #[inline]
    pub fn cell_code(&self, coord: GridCoordinate) -> Option<CellCode> {
        self.grid.cell_code(coord)
    }

    /// How many generation attempts it took to produce this maze.
    #[inline]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    #[inline]
    pub fn stats(&self) -> CarveStats {
        self.stats
    }

    /// The cells that are path, row major. A finished maze is carved everywhere.
    #[inline]
    pub fn open_cells(&self) -> RectGridCellIter {
        self.grid.iter()
    }

    #[inline]
    pub fn iter_row(&self) -> RectRowIter {
        self.grid.iter_row()
    }

    /// Cells in the order carving first reached them, starting at the entry.
    #[inline]
    pub fn visit_order(&self) -> &[GridCoordinate] {
        &self.visit_order
    }

    #[inline]
    pub fn standing_wall_set(&self) -> &WallSet {
        &self.standing
    }

    pub fn standing_walls<'a>(&'a self) -> impl Iterator<Item = &'a Wall> + 'a {
        self.standing.iter().filter_map(move |index| self.wall_table.get(index))
    }

    /// Walls knocked down while carving, in carving order.
    pub fn passages<'a>(&'a self) -> impl Iterator<Item = &'a Wall> + 'a {
        self.removed.iter().filter_map(move |index| self.wall_table.get(*index))
    }

    #[inline]
    pub fn passages_count(&self) -> usize {
        self.removed.len()
    }

    /// Are two cells joined by a passage? False for cells that are not grid adjacent.
    pub fn is_linked(&self, a: GridCoordinate, b: GridCoordinate) -> bool {
        self.wall_table
            .wall_between(a, b)
            .map(|index| !self.standing.contains(index))
            .unwrap_or(false)
    }

    /// Cells joined to `coord` by a passage.
    pub fn links(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.grid
            .neighbours(coord)
            .into_iter()
            .filter(|neighbour| self.is_linked(coord, *neighbour))
            .collect()
    }

    /// The passages as an undirected graph with one node per cell, in row major order, so
    /// `NodeIndex::new(i)` is the cell at row major index `i`.
    pub fn passage_graph(&self) -> UnGraph<GridCoordinate, WallIndex> {
        let mut graph = UnGraph::with_capacity(self.grid.size(), self.removed.len());
        for coord in self.grid.iter() {
            let _ = graph.add_node(coord);
        }
        for index in &self.removed {
            if let Some(wall) = self.wall_table.get(*index) {
                let node = |coord| self.grid.coordinate_to_index(coord).map(NodeIndex::new);
                if let (Some(a), Some(b)) = (node(wall.first), node(wall.second)) {
                    let _ = graph.add_edge(a, b, *index);
                }
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    use super::*;
    use crate::generators::recursive_backtracker;
    use crate::grid::GridSpec;
    use crate::units::{ColumnsCount, RowsCount};

    fn maze(rows: usize, columns: usize, seed: u64) -> Maze {
        let spec = GridSpec::new(RowsCount(rows),
                                 ColumnsCount(columns),
                                 GridCoordinate::new(0, 0),
                                 GridCoordinate::new(rows - 1, columns - 1))
            .unwrap();
        let grid = Grid::new(&spec);
        let table = WallTable::new(grid.dimensions());
        let carving =
            recursive_backtracker(&grid, &table, &mut XorShiftRng::seed_from_u64(seed)).unwrap();
        Maze::new(grid, table, carving, 1)
    }

    #[test]
    fn walls_split_into_standing_and_passages() {
        let m = maze(5, 6, 11);
        let total = m.wall_table().len();
        assert_eq!(m.standing_walls().count() + m.passages().count(), total);
        assert_eq!(m.passages_count(), 5 * 6 - 1);

        for wall in m.passages() {
            assert!(m.is_linked(wall.first, wall.second));
            assert!(m.is_linked(wall.second, wall.first));
        }
        for wall in m.standing_walls() {
            assert!(!m.is_linked(wall.first, wall.second));
        }
    }

    #[test]
    fn links_are_symmetric() {
        let m = maze(4, 4, 2);
        for coord in m.open_cells() {
            for linked in m.links(coord).iter() {
                assert!(m.links(*linked).contains(&coord));
            }
        }
        assert!(!m.is_linked(GridCoordinate::new(0, 0), GridCoordinate::new(3, 3)));
    }

    #[test]
    fn open_cells_cover_grid() {
        let m = maze(3, 7, 8);
        assert_eq!(m.open_cells().count(), 21);
        assert_eq!(m.visit_order().len(), 21);
        assert_eq!(m.visit_order()[0], m.entry());
        assert_eq!(m.cell_code(m.exit()), Some(CellCode::Exit));
    }

    #[test]
    fn passage_graph_mirrors_passages() {
        let m = maze(4, 5, 21);
        let graph = m.passage_graph();
        assert_eq!(graph.node_count(), 20);
        assert_eq!(graph.edge_count(), 19);
        assert_eq!(graph[NodeIndex::new(7)], GridCoordinate::new(1, 2));
        for edge in graph.raw_edges() {
            assert!(m.is_linked(graph[edge.source()], graph[edge.target()]));
        }
    }
}
