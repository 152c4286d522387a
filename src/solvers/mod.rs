mod astar;
mod bfs;
mod dfs;
pub mod path;

use rand::Rng;

use crate::maze::{Coord, Grid, Maze};
use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
pub use path::{Path, Predecessors, reconstruct_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Bfs,
    Dfs,
    AStar,
}

impl Solver {
    /// Every solver, in the order results are reported.
    pub const ALL: [Solver; 3] = [Solver::Bfs, Solver::Dfs, Solver::AStar];

    pub fn short_name(&self) -> &'static str {
        match self {
            Solver::Bfs => "BFS",
            Solver::Dfs => "DFS",
            Solver::AStar => "A*",
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

/// What a single search run produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// Empty when the goal is unreachable.
    pub path: Path,
    /// Cells reached (BFS, DFS) or expanded (A*) during the run.
    pub visited: usize,
}

/// Runs `solver` over `grid` from `start` to `goal`.
///
/// `rng` is only consumed by DFS. Endpoints that are out of bounds or walls give an
/// empty path.
pub fn explore<R: Rng + ?Sized>(
    solver: Solver,
    grid: &Grid,
    start: Coord,
    goal: Coord,
    rng: &mut R,
) -> SearchOutcome {
    if !grid.is_open(start) || !grid.is_open(goal) {
        return SearchOutcome::default();
    }
    match solver {
        Solver::Bfs => solve_bfs(grid, start, goal),
        Solver::Dfs => solve_dfs(grid, start, goal, rng),
        Solver::AStar => solve_astar(grid, start, goal),
    }
}

/// Like [`explore`] but only returns the path.
pub fn search<R: Rng + ?Sized>(solver: Solver, grid: &Grid, start: Coord, goal: Coord, rng: &mut R) -> Path {
    explore(solver, grid, start, goal, rng).path
}

/// Solves a maze between its own start and goal.
pub fn solve_maze<R: Rng + ?Sized>(maze: &Maze, solver: Solver, rng: &mut R) -> SearchOutcome {
    explore(solver, maze.grid(), maze.start(), maze.goal(), rng)
}
