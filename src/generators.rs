//! Randomized depth first carving, a.k.a. the recursive backtracker.
//!
//! Carving starts at the grid's entry cell with every wall of the wall table standing. Each step
//! either knocks down the wall to a random unvisited neighbour of the current cell and moves
//! there, or, at a dead end, retreats one cell back along the carving path. The recursion is an
//! explicit stack so large grids cannot overflow the call stack.
//!
//! The path only gives up when the stack is empty. On a whole rectangular grid every cell is
//! reachable from the entry, so by then every cell has been carved into and the passages form a
//! spanning tree: a perfect maze.

use std::fmt;

use bit_set::BitSet;
use log::{debug, trace};
use rand::Rng;

use crate::cells::GridCoordinate;
use crate::errors::*;
use crate::grid::{CoordinateSmallVec, Grid};
use crate::walls::{WallIndex, WallSet, WallTable};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GeneratorState {
    /// Knocked down a wall into an unvisited neighbour.
    Carving,
    /// Retreated along the carving path from a dead end.
    Backtracking,
    /// The carving path ran out with cells still unvisited; a new path was seeded at a random
    /// unvisited cell. Nothing links the new path back to the entry.
    StuckRestart,
    /// Every cell is visited and the exit was reached from the entry.
    DoneSuccess,
    /// Every cell is visited but the exit was not reached from the entry.
    DoneFailure,
}

impl GeneratorState {
    #[inline]
    pub fn is_done(self) -> bool {
        self == GeneratorState::DoneSuccess || self == GeneratorState::DoneFailure
    }
}

#[derive(Eq, PartialEq, Copy, Clone, Debug, Default)]
pub struct CarveStats {
    /// Cells moved from unvisited to visited, the entry included.
    pub visits: usize,
    pub backtracks: usize,
    pub restarts: usize,
}

/// The attempt scoped state of one carving run over a grid.
pub struct Carver<'a> {
    grid: &'a Grid,
    wall_table: &'a WallTable,
    visited: BitSet,
    unvisited_count: usize,
    stack: Vec<GridCoordinate>,
    current: GridCoordinate,
    standing: WallSet,
    removed: Vec<WallIndex>,
    visit_order: Vec<GridCoordinate>,
    // The entry's component is the first path; paths seeded later cannot reach the exit for it.
    on_entry_path: bool,
    exit_found: bool,
    state: GeneratorState,
    stats: CarveStats,
}

impl<'a> fmt::Debug for Carver<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Carver :: state: {:?}, current: {}, stack depth: {}, unvisited: {}, standing walls: {}",
               self.state,
               self.current,
               self.stack.len(),
               self.unvisited_count,
               self.standing.len())
    }
}

impl<'a> Carver<'a> {
    /// Marks the entry visited and puts it on the carving path.
    pub fn new(grid: &'a Grid, wall_table: &'a WallTable) -> Carver<'a> {
        let cells_count = grid.size();
        let mut carver = Carver {
            grid,
            wall_table,
            visited: BitSet::with_capacity(cells_count),
            unvisited_count: cells_count,
            stack: Vec::with_capacity(cells_count),
            current: grid.entry(),
            standing: WallSet::full(wall_table),
            removed: Vec::with_capacity(cells_count.saturating_sub(1)),
            visit_order: Vec::with_capacity(cells_count),
            on_entry_path: true,
            exit_found: false,
            state: GeneratorState::Carving,
            stats: CarveStats::default(),
        };
        carver.visit(grid.entry());
        carver
    }

    /// Perform one transition of the carving state machine and return the resulting state.
    /// Once a `Done*` state is reached it is returned for every further step.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<GeneratorState> {
        if self.state.is_done() {
            return Ok(self.state);
        }

        if self.unvisited_count == 0 {
            self.state = if self.exit_found {
                GeneratorState::DoneSuccess
            } else {
                GeneratorState::DoneFailure
            };
            return Ok(self.state);
        }

        let candidates = self.unvisited_neighbours(self.current);
        self.state = if !candidates.is_empty() {
            let chosen = candidates[rng.gen_range(0..candidates.len())];
            self.carve_to(chosen)?;
            GeneratorState::Carving
        } else {
            self.stack.pop();
            self.stats.backtracks += 1;

            if let Some(&previous) = self.stack.last() {
                self.current = previous;
                GeneratorState::Backtracking
            } else {
                self.restart(rng);
                GeneratorState::StuckRestart
            }
        };

        Ok(self.state)
    }

    /// Step until every cell is visited.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<Carving> {
        while !self.step(rng)?.is_done() {}
        Ok(self.into_carving())
    }

    pub fn into_carving(self) -> Carving {
        Carving {
            state: self.state,
            standing: self.standing,
            removed: self.removed,
            visit_order: self.visit_order,
            stats: self.stats,
        }
    }

    #[inline]
    pub fn state(&self) -> GeneratorState {
        self.state
    }

    #[inline]
    pub fn current(&self) -> GridCoordinate {
        self.current
    }

    /// Off grid coordinates are never visited.
    #[inline]
    pub fn is_visited(&self, coord: GridCoordinate) -> bool {
        self.grid
            .coordinate_to_index(coord)
            .map_or(false, |index| self.visited.contains(index))
    }

    #[inline]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[inline]
    pub fn unvisited_count(&self) -> usize {
        self.unvisited_count
    }

    #[inline]
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    pub fn exit_found(&self) -> bool {
        self.exit_found
    }

    #[inline]
    pub fn standing_walls(&self) -> &WallSet {
        &self.standing
    }

    #[inline]
    pub fn removed_walls(&self) -> &[WallIndex] {
        &self.removed
    }

    #[inline]
    pub fn stats(&self) -> CarveStats {
        self.stats
    }

    fn unvisited_neighbours(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        self.grid
            .neighbours(coord)
            .into_iter()
            .filter(|neighbour| !self.is_visited(*neighbour))
            .collect()
    }

    fn carve_to(&mut self, next: GridCoordinate) -> Result<()> {
        let wall = self.wall_table.wall_between(self.current, next)?;
        if !self.standing.remove(wall) {
            // Each wall is knocked down at most once, from the first side to reach the other.
            return Err(ErrorKind::WallAlreadyCarved(self.current, next).into());
        }
        self.removed.push(wall);
        trace!("carved {} -> {} through wall {}", self.current, next, wall.0);

        self.visit(next);
        if self.on_entry_path && self.grid.is_exit(next) {
            self.exit_found = true;
        }
        self.current = next;
        Ok(())
    }

    fn visit(&mut self, coord: GridCoordinate) {
        if let Some(index) = self.grid.coordinate_to_index(coord) {
            if self.visited.insert(index) {
                self.unvisited_count -= 1;
                self.stats.visits += 1;
                self.visit_order.push(coord);
                self.stack.push(coord);
            }
        }
    }

    fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let nth = rng.gen_range(0..self.unvisited_count);
        let seed = self.grid
            .iter()
            .filter(|coord| !self.is_visited(*coord))
            .nth(nth);

        if let Some(seed) = seed {
            debug!("carving path exhausted with {} cells left, reseeding at {}",
                   self.unvisited_count,
                   seed);
            self.on_entry_path = false;
            self.stats.restarts += 1;
            self.visit(seed);
            self.current = seed;
        }
    }

    #[cfg(test)]
    fn block_for_test(&mut self, coord: GridCoordinate) {
        self.visit(coord);
        self.stack.retain(|c| *c != coord);
    }
}

/// The outcome of one carving attempt.
#[derive(Debug, Clone)]
pub struct Carving {
    pub state: GeneratorState,
    /// Walls still standing.
    pub standing: WallSet,
    /// Walls knocked down, in carving order.
    pub removed: Vec<WallIndex>,
    /// Cells in the order they were first visited.
    pub visit_order: Vec<GridCoordinate>,
    pub stats: CarveStats,
}

impl Carving {
    #[inline]
    pub fn is_success(&self) -> bool {
        self.state == GeneratorState::DoneSuccess
    }
}

/// Carve a maze over `grid` in one call.
pub fn recursive_backtracker<R: Rng + ?Sized>(grid: &Grid,
                                              wall_table: &WallTable,
                                              rng: &mut R)
                                              -> Result<Carving> {
    Carver::new(grid, wall_table).run(rng)
}
