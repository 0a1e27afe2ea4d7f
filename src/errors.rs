//! Error types for grid validation and maze generation.
//!
//! Other modules `use crate::errors::*;` to get the `Error`, `ErrorKind`, `ResultExt` and `Result`
//! types that `error_chain!` creates.

use error_chain::error_chain;

use crate::cells::GridCoordinate;

error_chain! {

    errors {
        // Rejected before any carving began.
        InvalidGridSpec(reason: String) {
            description("invalid grid specification")
            display("invalid grid specification: {}", reason)
        }

        // Seen during carving this means the generator state is inconsistent.
        InvalidAdjacency(a: GridCoordinate, b: GridCoordinate) {
            description("cells are not grid adjacent")
            display("no wall separates {} and {}: cells are not grid adjacent", a, b)
        }

        // Carving tried to knock down a wall it had already knocked down.
        WallAlreadyCarved(a: GridCoordinate, b: GridCoordinate) {
            description("wall already carved")
            display("wall between {} and {} already carved", a, b)
        }

        GenerationFailed(attempts: usize) {
            description("maze generation did not reach the exit")
            display("maze generation did not reach the exit after {} attempts", attempts)
        }
    }
}
