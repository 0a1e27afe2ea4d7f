//! Repeated carving attempts until one produces a maze whose exit is reachable from its entry.

use log::{debug, error, info, warn};
use rand::Rng;

use crate::errors::*;
use crate::generators::{recursive_backtracker, Carving};
use crate::grid::{Grid, GridSpec};
use crate::maze::Maze;
use crate::pathing;
use crate::walls::WallTable;

pub const DEFAULT_MAX_ATTEMPTS: usize = 32;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GenerationOptions {
    max_attempts: usize,
}

impl GenerationOptions {
    #[inline]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions { max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

#[derive(Debug)]
pub struct GenerationOptionsBuilder {
    options: GenerationOptions,
}

impl GenerationOptionsBuilder {
    pub fn new() -> GenerationOptionsBuilder {
        GenerationOptionsBuilder { options: GenerationOptions::default() }
    }

    /// At least one attempt is always made, zero is raised to one.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.options.max_attempts = max_attempts.max(1);
        self
    }

    pub fn build(self) -> GenerationOptions {
        self.options
    }
}

impl Default for GenerationOptionsBuilder {
    fn default() -> Self {
        GenerationOptionsBuilder::new()
    }
}

/// Generate a perfect maze over the grid `spec` describes.
///
/// Every attempt starts from a fresh grid with all walls standing. An attempt that finishes
/// without reaching the exit, or that trips over an internal wall bookkeeping error, is logged and
/// retried. Fails with `GenerationFailed` once `options.max_attempts()` attempts are used up.
pub fn generate<R: Rng + ?Sized>(spec: &GridSpec,
                                 options: &GenerationOptions,
                                 rng: &mut R)
                                 -> Result<Maze> {
    generate_with(spec, options, rng, recursive_backtracker::<R>)
}

fn generate_with<R, F>(spec: &GridSpec,
                       options: &GenerationOptions,
                       rng: &mut R,
                       mut carve: F)
                       -> Result<Maze>
    where R: Rng + ?Sized,
          F: FnMut(&Grid, &WallTable, &mut R) -> Result<Carving>
{
    let max_attempts = options.max_attempts().max(1);

    for attempt in 1..=max_attempts {
        debug!("attempt {}/{}: carving {}x{} grid from {} to {}",
               attempt,
               max_attempts,
               spec.dimensions().rows().0,
               spec.dimensions().columns().0,
               spec.entry(),
               spec.exit());

        let grid = Grid::new(spec);
        let wall_table = WallTable::new(grid.dimensions());

        let carving = match carve(&grid, &wall_table, &mut *rng) {
            Ok(carving) => carving,
            Err(e) => {
                let internal = matches!(*e.kind(),
                                        ErrorKind::InvalidAdjacency(..) |
                                        ErrorKind::WallAlreadyCarved(..));
                if !internal {
                    return Err(e);
                }
                error!("attempt {}: carving reached an inconsistent state: {}", attempt, e);
                continue;
            }
        };

        if !carving.is_success() {
            warn!("attempt {}: exit {} not reached from entry {}, retrying",
                  attempt,
                  spec.exit(),
                  spec.entry());
            continue;
        }

        let maze = Maze::new(grid, wall_table, carving, attempt);
        if !pathing::is_exit_reachable(&maze) {
            warn!("attempt {}: carving reported success but no passage joins {} to {}, retrying",
                  attempt,
                  maze.entry(),
                  maze.exit());
            continue;
        }

        info!("maze generated after {} attempt(s): {} passages, {} walls standing",
              attempt,
              maze.passages_count(),
              maze.standing_wall_set().len());
        return Ok(maze);
    }

    Err(ErrorKind::GenerationFailed(max_attempts).into())
}

/// A grid spec and generation options kept together for generating many mazes of the same shape.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    spec: GridSpec,
    options: GenerationOptions,
}

impl MazeGenerator {
    pub fn new(spec: GridSpec, options: GenerationOptions) -> MazeGenerator {
        MazeGenerator { spec, options }
    }

    #[inline]
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    #[inline]
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze> {
        generate(&self.spec, &self.options, rng)
    }
}
