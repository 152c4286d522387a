use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    maze::Maze,
    solvers::{Path, Solver, solve_maze},
};

/// One solver's result on a maze, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub solver: Solver,
    pub path: Path,
    /// Wall-clock time of the search call alone.
    pub elapsed: Duration,
    pub visited: usize,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of cells on the path, 0 when nothing was found.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Runs one solver on `maze` and times it.
pub fn run<R: Rng + ?Sized>(maze: &Maze, solver: Solver, rng: &mut R) -> SearchResult {
    let started = Instant::now();
    let outcome = solve_maze(maze, solver, rng);
    let elapsed = started.elapsed();

    if outcome.path.is_empty() {
        tracing::info!(
            "[compare] {}: no path found ({} cells visited, {:?})",
            solver.short_name(),
            outcome.visited,
            elapsed
        );
    } else {
        tracing::info!(
            "[compare] {}: path of {} cells ({} cells visited, {:?})",
            solver.short_name(),
            outcome.path.len(),
            outcome.visited,
            elapsed
        );
    }

    SearchResult {
        solver,
        path: outcome.path,
        elapsed,
        visited: outcome.visited,
    }
}

/// Runs every solver, one after another, against the same maze.
pub fn compare<R: Rng + ?Sized>(maze: &Maze, rng: &mut R) -> Vec<SearchResult> {
    tracing::debug!(
        "[compare] {}x{} maze, start {} goal {}",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.goal()
    );
    Solver::ALL
        .into_iter()
        .map(|solver| run(maze, solver, rng))
        .collect()
}
