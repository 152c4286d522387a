use rand::{Rng, SeedableRng, rngs::StdRng};

mod endpoints;
mod recur_backtrack;

pub use endpoints::pick_endpoints;
pub use recur_backtrack::recursive_backtrack;

use crate::{
    error::MazeError,
    maze::{Cell, Coord, Grid, Maze, normalize_dimension},
};

/// Where carving begins.
const ORIGIN: Coord = Coord::new(1, 1);

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Tunables for [`generate_maze_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Fraction of `rows * cols` punched open after carving, adding loops and shortcuts.
    pub extra_opening_ratio: f64,
    /// How many times the goal may be redrawn before giving up.
    pub max_goal_resamples: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extra_opening_ratio: 0.02,
            max_goal_resamples: 10_000,
        }
    }
}

/// Generates a maze with the default [`GeneratorConfig`].
pub fn generate_maze<R: Rng + ?Sized>(rows: u16, cols: u16, rng: &mut R) -> Result<Maze, MazeError> {
    generate_maze_with(rows, cols, &GeneratorConfig::default(), rng)
}

/// Generates a connected maze of (normalized) `rows x cols` with a start and goal.
///
/// Even dimensions are decremented to odd. Both must be at least 3.
pub fn generate_maze_with<R: Rng + ?Sized>(
    rows: u16,
    cols: u16,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    if rows < 3 || cols < 3 {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }
    let (rows, cols) = (normalize_dimension(rows), normalize_dimension(cols));

    let mut grid = Grid::new(rows, cols, Cell::Wall);
    recursive_backtrack(&mut grid, ORIGIN, rng);

    let extra = (rows as f64 * cols as f64 * config.extra_opening_ratio) as usize;
    punch_openings(&mut grid, extra, rng);

    let open = grid.open_cells();
    let (start, goal) = pick_endpoints(
        &open,
        Maze::min_endpoint_distance(rows, cols),
        config.max_goal_resamples,
        rng,
    )?;
    Maze::new(grid, start, goal)
}

/// Forces `count` random interior cells open. Never closes anything, so connectivity is kept.
fn punch_openings<R: Rng + ?Sized>(grid: &mut Grid, count: usize, rng: &mut R) {
    for _ in 0..count {
        let cell = Coord::new(
            rng.random_range(1..grid.rows() - 1),
            rng.random_range(1..grid.cols() - 1),
        );
        grid.set(cell, Cell::Open);
    }
    tracing::debug!("[generator] punched {} extra openings", count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_maze() {
        let first = generate_maze(11, 11, &mut get_rng(Some(42))).unwrap();
        let second = generate_maze(11, 11, &mut get_rng(Some(42))).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.grid().to_string(), second.grid().to_string());
        assert_eq!(first.start(), second.start());
        assert_eq!(first.goal(), second.goal());
    }

    #[test]
    fn test_dimensions_are_normalized_to_odd() {
        let maze = generate_maze(12, 10, &mut get_rng(Some(1))).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (11, 9));
        let maze = generate_maze(11, 51, &mut get_rng(Some(1))).unwrap();
        assert_eq!((maze.rows(), maze.cols()), (11, 51));
    }

    #[test]
    fn test_endpoints_are_open_distinct_and_far_apart() {
        for seed in 0..100 {
            let maze = generate_maze(15, 21, &mut get_rng(Some(seed))).unwrap();
            let grid = maze.grid();
            assert!(grid.is_open(maze.start()));
            assert!(grid.is_open(maze.goal()));
            assert_ne!(maze.start(), maze.goal());
            assert!(maze.start().manhattan(maze.goal()) >= Maze::min_endpoint_distance(15, 21));
        }
    }

    #[test]
    fn test_border_stays_wall() {
        let maze = generate_maze(31, 17, &mut get_rng(Some(5))).unwrap();
        let grid = maze.grid();
        for cell in grid.open_cells() {
            assert!(!grid.is_boundary(cell), "{cell} is open on the border");
        }
    }

    #[test]
    fn test_extra_openings_only_add() {
        let no_extra = GeneratorConfig {
            extra_opening_ratio: 0.0,
            ..GeneratorConfig::default()
        };
        let lots = GeneratorConfig {
            extra_opening_ratio: 0.2,
            ..GeneratorConfig::default()
        };
        // The carve consumes the rng identically in both runs, so the tree is the same
        let tree = generate_maze_with(21, 21, &no_extra, &mut get_rng(Some(8))).unwrap();
        let loopy = generate_maze_with(21, 21, &lots, &mut get_rng(Some(8))).unwrap();
        assert_eq!(tree.grid().open_cells().len(), 2 * 100 - 1);
        for cell in tree.grid().open_cells() {
            assert!(loopy.grid().is_open(cell));
        }
        assert!(loopy.grid().open_cells().len() > tree.grid().open_cells().len());
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut rng = get_rng(Some(0));
        assert_eq!(
            generate_maze(0, 11, &mut rng),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 11 })
        );
        assert_eq!(
            generate_maze(11, 2, &mut rng),
            Err(MazeError::InvalidDimensions { rows: 11, cols: 2 })
        );
    }

    #[test]
    fn test_tiny_maze_fails_instead_of_hanging() {
        // 3x3 and 4x4 both carve a single open cell
        for (rows, cols) in [(3, 3), (4, 4)] {
            assert_eq!(
                generate_maze(rows, cols, &mut get_rng(Some(0))),
                Err(MazeError::TooFewOpenCells(1))
            );
        }
        // A 5x3 corridor has three cells and needs distance 2: only its two ends qualify
        let config = GeneratorConfig {
            max_goal_resamples: 0,
            ..GeneratorConfig::default()
        };
        let mut failures = 0;
        for seed in 0..50 {
            match generate_maze_with(5, 3, &config, &mut get_rng(Some(seed))) {
                Ok(maze) => assert_eq!(maze.start().manhattan(maze.goal()), 2),
                Err(e) => {
                    assert_eq!(
                        e,
                        MazeError::GenerationFailed {
                            min_distance: 2,
                            attempts: 0
                        }
                    );
                    failures += 1;
                }
            }
        }
        assert!(failures > 0);
    }
}
