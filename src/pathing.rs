//! Reachability over carved passages, used to validate a maze before it is handed out.
//!
//! No route finding here: only whether cells are connected at all.

use fnv::FnvHashSet;
use petgraph::algo::connected_components;

use crate::cells::GridCoordinate;
use crate::maze::Maze;

/// Flood fill from `start` along passages. Returns every cell reachable from `start`, which
/// includes `start` itself, or an empty set when `start` is off the grid.
///
/// Each cell enters the frontier at most once: the reached set doubles as the visited set.
pub fn reachable_from(maze: &Maze, start: GridCoordinate) -> FnvHashSet<GridCoordinate> {
    let mut reached = FnvHashSet::with_capacity_and_hasher(maze.grid().size(), Default::default());
    if !maze.grid().is_valid_coordinate(start) {
        return reached;
    }

    reached.insert(start);
    let mut frontier = vec![start];
    while !frontier.is_empty() {

        let mut new_frontier = vec![];
        for cell_coord in &frontier {
            for link_coord in maze.links(*cell_coord).iter() {
                if reached.insert(*link_coord) {
                    new_frontier.push(*link_coord);
                }
            }
        }
        frontier = new_frontier;
    }

    reached
}

#[inline]
pub fn is_exit_reachable(maze: &Maze) -> bool {
    reachable_from(maze, maze.entry()).contains(&maze.exit())
}

/// A perfect maze's passages form a spanning tree: one connected component with exactly one
/// passage fewer than there are cells.
pub fn is_perfect(maze: &Maze) -> bool {
    let graph = maze.passage_graph();
    graph.node_count() > 0 && graph.edge_count() + 1 == graph.node_count() &&
    connected_components(&graph) == 1
}
