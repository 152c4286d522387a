use thiserror::Error;

use crate::maze::Coord;

/// Errors raised while building or validating a maze.
///
/// Failing to find a path is not an error: solvers return an empty path for that.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MazeError {
    #[error("invalid maze dimensions {rows}x{cols}: both must be at least 3")]
    InvalidDimensions { rows: u16, cols: u16 },
    #[error(
        "maze too small to satisfy minimum start/goal distance of {min_distance} (gave up after {attempts} attempts)"
    )]
    GenerationFailed { min_distance: u32, attempts: usize },
    #[error("maze has {0} open cells, at least 2 are needed for a start and a goal")]
    TooFewOpenCells(usize),
    #[error("endpoint {0} is out of bounds or not an open cell")]
    InvalidEndpoint(Coord),
    #[error("start and goal must be different cells")]
    SameEndpoints,
    #[error("malformed grid at line {line}: {reason}")]
    MalformedGrid { line: usize, reason: String },
}

/// Errors surfaced by the binaries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze error; {0}")]
    Maze(#[from] MazeError),
}
