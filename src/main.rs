use std::io::Write;

use clap::Parser;
use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
    terminal,
};

use mazecmp::{
    AppError, compare,
    config::{Config, init_logging},
    generate_maze_with, get_rng,
    render::{Tile, draw_legend, draw_result, draw_summary},
};

fn main() -> Result<(), AppError> {
    let config = Config::parse();
    let _guard = init_logging(&config.log_file);
    tracing::info!("Starting with {:?}", config);

    let mut rng = get_rng(config.seed);
    let maze = match generate_maze_with(config.rows, config.cols, &config.generator_config(), &mut rng)
    {
        Ok(maze) => maze,
        Err(e) => {
            tracing::warn!("[main] maze generation failed: {}", e);
            return Err(e.into());
        }
    };
    let results = compare(&maze, &mut rng);

    let mut stdout = std::io::stdout();
    queue!(
        stdout,
        style::PrintStyledContent(
            format!(
                "Maze Solving Comparison ({}x{}, start {}, goal {})\n",
                maze.rows(),
                maze.cols(),
                maze.start(),
                maze.goal()
            )
            .with(Color::Cyan)
            .attribute(Attribute::Bold)
        ),
    )?;

    if !config.no_render {
        // Not fatal: the output may be piped, or the user scrolls
        if let Ok((term_width, _)) = terminal::size() {
            if term_width < maze.cols() * Tile::CELL_WIDTH {
                queue!(
                    stdout,
                    style::PrintStyledContent(
                        format!(
                            "Terminal is {} columns wide, the maze needs {}. Lines will wrap.\n",
                            term_width,
                            maze.cols() * Tile::CELL_WIDTH
                        )
                        .with(Color::Yellow)
                    ),
                )?;
            }
        }
        for result in &results {
            draw_result(&mut stdout, &maze, result)?;
        }
        queue!(stdout, style::Print("\n"))?;
    }

    draw_summary(&mut stdout, &results)?;
    if config.legend {
        draw_legend(&mut stdout)?;
    }
    stdout.flush()?;
    Ok(())
}
