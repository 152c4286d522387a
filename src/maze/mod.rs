pub mod cell;
pub mod coord;
pub mod grid;

pub use cell::Cell;
pub use coord::Coord;
pub use grid::Grid;

use crate::error::MazeError;

/// Rounds an even dimension down to the nearest odd number.
///
/// The carving lattice steps two cells at a time from `(1, 1)`, so odd dimensions
/// keep corridor cells on odd coordinates and leave a full wall border.
pub fn normalize_dimension(n: u16) -> u16 {
    if n % 2 == 0 { n.saturating_sub(1) } else { n }
}

/// A grid with a designated start and goal.
///
/// Immutable once built so every solver sees exactly the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Coord,
    goal: Coord,
}

impl Maze {
    /// Builds a maze, checking that both endpoints are distinct open cells.
    pub fn new(grid: Grid, start: Coord, goal: Coord) -> Result<Self, MazeError> {
        for endpoint in [start, goal] {
            if !grid.is_open(endpoint) {
                return Err(MazeError::InvalidEndpoint(endpoint));
            }
        }
        if start == goal {
            return Err(MazeError::SameEndpoints);
        }
        Ok(Maze { grid, start, goal })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn goal(&self) -> Coord {
        self.goal
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    /// Smallest start/goal Manhattan distance the generator accepts for these dimensions.
    pub fn min_endpoint_distance(rows: u16, cols: u16) -> u32 {
        (rows as u32 + cols as u32) / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension(11), 11);
        assert_eq!(normalize_dimension(12), 11);
        assert_eq!(normalize_dimension(4), 3);
        assert_eq!(normalize_dimension(0), 0);
    }

    #[test]
    fn test_new_validates_endpoints() {
        let grid: Grid = "
            #####
            #..##
            #####
        "
        .parse()
        .unwrap();
        let a = Coord::new(1, 1);
        let b = Coord::new(1, 2);

        let maze = Maze::new(grid.clone(), a, b).unwrap();
        assert_eq!(maze.start(), a);
        assert_eq!(maze.goal(), b);
        assert_eq!((maze.rows(), maze.cols()), (3, 5));

        assert_eq!(
            Maze::new(grid.clone(), a, a),
            Err(MazeError::SameEndpoints)
        );
        assert_eq!(
            Maze::new(grid.clone(), a, Coord::new(1, 3)),
            Err(MazeError::InvalidEndpoint(Coord::new(1, 3)))
        );
        assert_eq!(
            Maze::new(grid, Coord::new(8, 8), b),
            Err(MazeError::InvalidEndpoint(Coord::new(8, 8)))
        );
    }

    #[test]
    fn test_min_endpoint_distance() {
        assert_eq!(Maze::min_endpoint_distance(11, 11), 7);
        assert_eq!(Maze::min_endpoint_distance(51, 51), 34);
        assert_eq!(Maze::min_endpoint_distance(3, 3), 2);
    }
}
