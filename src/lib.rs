pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod report;
pub mod solvers;

pub use error::{AppError, MazeError};
pub use generators::{GeneratorConfig, generate_maze, generate_maze_with, get_rng};
pub use maze::{Cell, Coord, Grid, Maze};
pub use report::{SearchResult, compare};
pub use solvers::{Path, Solver, search};
