//! Terminal drawing of mazes and solver results.
//!
//! Presentation only: nothing here changes a maze or a path.

use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};

use crate::{
    maze::{Coord, Maze},
    report::SearchResult,
    solvers::Solver,
};

/// What a single grid position looks like on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    /// Part of the route found by the given solver.
    Route(Solver),
    Start,
    Goal,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const CELL_WIDTH: u16 = 2;

    fn color(self) -> Color {
        match self {
            Tile::Open => Color::Reset,
            Tile::Wall => Color::White,
            Tile::Route(Solver::Bfs) => Color::Green,
            Tile::Route(Solver::Dfs) => Color::Magenta,
            Tile::Route(Solver::AStar) => Color::Yellow,
            Tile::Start => Color::Blue,
            Tile::Goal => Color::Red,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Tile::Open => "  ",
            Tile::Wall => "⬜",
            Tile::Route(Solver::Bfs) => "🟩",
            Tile::Route(Solver::Dfs) => "🟪",
            Tile::Route(Solver::AStar) => "🟨",
            Tile::Start => "🟦",
            Tile::Goal => "🟥",
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = self.symbol().with(self.color());

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::CELL_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Lays out the tiles for `maze`, with an optional route on top. Start and goal always win.
pub fn tiles(maze: &Maze, overlay: Option<(&[Coord], Solver)>) -> Vec<Vec<Tile>> {
    let grid = maze.grid();
    let mut tiles = (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    if grid[Coord::new(row, col)].is_open() {
                        Tile::Open
                    } else {
                        Tile::Wall
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut paint = |c: Coord, tile: Tile| {
        if let Some(slot) = tiles
            .get_mut(c.row as usize)
            .and_then(|r| r.get_mut(c.col as usize))
        {
            *slot = tile;
        }
    };
    if let Some((path, solver)) = overlay {
        path.iter().for_each(|&c| paint(c, Tile::Route(solver)));
    }
    paint(maze.start(), Tile::Start);
    paint(maze.goal(), Tile::Goal);
    tiles
}

/// Draws the maze, row by row.
pub fn draw_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    overlay: Option<(&[Coord], Solver)>,
) -> std::io::Result<()> {
    for row in tiles(maze, overlay) {
        for tile in row {
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\n"))?;
    }
    Ok(())
}

/// Draws one solver's heading, its route over the maze, and whether it succeeded.
pub fn draw_result<W: Write>(out: &mut W, maze: &Maze, result: &SearchResult) -> std::io::Result<()> {
    queue!(
        out,
        style::PrintStyledContent(
            format!("\n{} Algorithm\n", result.solver.short_name())
                .with(Color::Cyan)
                .attribute(Attribute::Bold)
        ),
    )?;
    draw_maze(out, maze, Some((result.path.as_slice(), result.solver)))?;

    if result.found() {
        queue!(
            out,
            style::PrintStyledContent(
                format!(
                    "✅ Found in {:.3} seconds\n",
                    result.elapsed.as_secs_f64()
                )
                .with(Color::Green)
            ),
            style::Print(format!("📏 Path length: {}\n", result.len())),
            style::Print(format!("🔍 Cells visited: {}\n", result.visited)),
        )?;
    } else {
        queue!(
            out,
            style::PrintStyledContent(
                "❌ No path found\n"
                    .with(Color::Red)
                    .attribute(Attribute::Bold)
            ),
        )?;
    }
    out.flush()
}

/// One line per solver, without drawing the maze.
pub fn draw_summary<W: Write>(out: &mut W, results: &[SearchResult]) -> std::io::Result<()> {
    queue!(
        out,
        style::PrintStyledContent(
            format!("{:<4} {:>8} {:>8} {:>12}\n", "", "length", "visited", "seconds")
                .attribute(Attribute::Bold)
        ),
    )?;
    for result in results {
        let length = if result.found() {
            result.len().to_string()
        } else {
            "none".to_string()
        };
        queue!(
            out,
            style::Print(format!(
                "{:<4} {:>8} {:>8} {:>12.6}\n",
                result.solver.short_name(),
                length,
                result.visited,
                result.elapsed.as_secs_f64()
            )),
        )?;
    }
    out.flush()
}

/// Explains what each tile means.
pub fn draw_legend<W: Write>(out: &mut W) -> std::io::Result<()> {
    queue!(
        out,
        style::PrintStyledContent("\nColor Legend\n".with(Color::Yellow).attribute(Attribute::Bold)),
    )?;
    let entries = [
        (Tile::Open, "Open path"),
        (Tile::Wall, "Wall"),
        (Tile::Start, "Start point"),
        (Tile::Goal, "Goal point"),
        (Tile::Route(Solver::Bfs), "BFS path"),
        (Tile::Route(Solver::Dfs), "DFS path"),
        (Tile::Route(Solver::AStar), "A* path"),
    ];
    for (tile, label) in entries {
        queue!(out, style::Print(format!("  {tile} {label}\n")))?;
    }
    out.flush()
}
