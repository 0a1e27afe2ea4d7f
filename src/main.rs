use std::fs;

use docopt::Docopt;
use log::info;
use maze_carver::{
    cells::GridCoordinate,
    driver::{self, GenerationOptionsBuilder},
    grid::GridSpec,
    grids,
    maze::Maze,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;

const USAGE: &str = "Maze Carver

Usage:
    maze_driver -h | --help
    maze_driver [--large | --grid-file=<path>] [--rows=<r> --columns=<c>] [--entry-row=<n> --entry-column=<n>] [--exit-row=<n> --exit-column=<n>] [--seed=<n>] [--max-attempts=<n>] [--quiet]

Options:
    -h --help              Show this screen.
    --rows=<r>             Number of grid rows, at least 2.
    --columns=<c>          Number of grid columns, at least 2.
    --entry-row=<n>        Row of the cell carving starts from. Defaults to 0.
    --entry-column=<n>     Column of the cell carving starts from. Defaults to 0.
    --exit-row=<n>         Row of the exit cell. Defaults to the last row.
    --exit-column=<n>      Column of the exit cell. Defaults to the last column.
                           The entry and exit options need --rows and --columns.
    --grid-file=<path>     Read the grid from a text file of cell codes, one grid row per line: 1 path, 0 entry, -1 exit.
    --large                Use the 12x16 preset grid instead of the 8x12 one.
    --seed=<n>             Seed the random number generator for a reproducible maze.
    --max-attempts=<n>     Give up after this many attempts that do not reach the exit [default: 32].
    --quiet                Only print the summary counts, not the maze drawing.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: Option<usize>,
    flag_columns: Option<usize>,
    flag_entry_row: Option<usize>,
    flag_entry_column: Option<usize>,
    flag_exit_row: Option<usize>,
    flag_exit_column: Option<usize>,
    flag_grid_file: String,
    flag_large: bool,
    flag_seed: Option<u64>,
    flag_max_attempts: usize,
    flag_quiet: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_carver::errors::Error, ::maze_carver::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let spec = grid_spec_from_args(&args)?;
    let options = GenerationOptionsBuilder::new()
        .max_attempts(args.flag_max_attempts)
        .build();

    let mut rng = if let Some(seed) = args.flag_seed {
        info!("seeding generator with {}", seed);
        XorShiftRng::seed_from_u64(seed)
    } else {
        XorShiftRng::from_entropy()
    };

    let maze = driver::generate(&spec, &options, &mut rng)?;

    if !args.flag_quiet {
        println!("{}", maze);
    }
    print_summary(&maze);

    Ok(())
}

/// Explicit dimensions win over a grid file, which wins over the presets.
fn grid_spec_from_args(args: &MazeArgs) -> Result<GridSpec> {
    match (args.flag_rows, args.flag_columns) {
        (Some(rows), Some(columns)) => {
            let exit = GridCoordinate::new(args.flag_exit_row.unwrap_or_else(|| rows.saturating_sub(1)),
                                           args.flag_exit_column
                                               .unwrap_or_else(|| columns.saturating_sub(1)));
            let entry = GridCoordinate::new(args.flag_entry_row.unwrap_or(0),
                                            args.flag_entry_column.unwrap_or(0));
            return Ok(GridSpec::new(RowsCount(rows), ColumnsCount(columns), entry, exit)?);
        }
        (None, None) => {}
        _ => return Err("--rows and --columns must be given together".into()),
    }

    let any_entry_exit_flag = args.flag_entry_row.is_some() || args.flag_entry_column.is_some() ||
                              args.flag_exit_row.is_some() ||
                              args.flag_exit_column.is_some();
    if any_entry_exit_flag {
        return Err("entry and exit options need --rows and --columns; grid files and presets \
                    define their own entry and exit"
            .into());
    }

    if !args.flag_grid_file.is_empty() {
        let text = fs::read_to_string(&args.flag_grid_file)
            .chain_err(|| format!("Failed to read grid file {}", args.flag_grid_file))?;
        return Ok(text.parse::<GridSpec>()?);
    }

    if args.flag_large {
        Ok(grids::large_grid()?)
    } else {
        Ok(grids::standard_grid()?)
    }
}

fn print_summary(maze: &Maze) {
    let dimensions = maze.dimensions();
    println!("grid: {}x{}, entry {}, exit {}",
             dimensions.rows().0,
             dimensions.columns().0,
             maze.entry(),
             maze.exit());
    println!("passages: {}", maze.passages_count());
    println!("standing walls: {}", maze.standing_walls().count());
    println!("attempts: {}", maze.attempts());
}
