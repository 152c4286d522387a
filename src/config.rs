use std::path::PathBuf;

use clap::Parser;

use crate::generators::GeneratorConfig;

/// Generate a random maze and compare BFS, DFS and A* on it.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Maze rows; even values are rounded down to odd
    #[arg(short, long, default_value_t = 51, value_parser = clap::value_parser!(u16).range(3..=1001))]
    pub rows: u16,

    /// Maze columns; even values are rounded down to odd
    #[arg(short, long, default_value_t = 51, value_parser = clap::value_parser!(u16).range(3..=1001))]
    pub cols: u16,

    /// Seed for the random generator, for reproducible mazes and DFS runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Fraction of cells punched open after carving
    #[arg(long, default_value_t = 0.02, value_parser = parse_ratio)]
    pub extra_openings: f64,

    /// Give up after redrawing the goal this many times
    #[arg(long, default_value_t = 10_000)]
    pub max_goal_resamples: usize,

    /// Only print the timing summary, not the mazes
    #[arg(long)]
    pub no_render: bool,

    /// Print the color legend
    #[arg(long)]
    pub legend: bool,

    /// Where to write logs
    #[arg(long, default_value = "mazecmp.log")]
    pub log_file: PathBuf,
}

impl Config {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            extra_opening_ratio: self.extra_openings,
            max_goal_resamples: self.max_goal_resamples,
        }
    }
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let ratio = s.parse::<f64>().map_err(|e| e.to_string())?;
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(format!("{ratio} is not between 0 and 1"))
    }
}

/// Installs a file-backed tracing subscriber. Stdout is left for the drawn mazes.
///
/// Log level comes from `RUST_LOG`, defaulting to `info`. Keep the returned guard alive
/// until exit so buffered lines get flushed.
pub fn init_logging(log_file: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    let dir = match log_file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "mazecmp.log".into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    // Ignore the error if a subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["mazecmp"]).unwrap();
        assert_eq!((config.rows, config.cols), (51, 51));
        assert_eq!(config.seed, None);
        assert!(!config.no_render);
        assert_eq!(config.generator_config(), GeneratorConfig::default());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "mazecmp",
            "-r",
            "21",
            "--cols",
            "31",
            "--seed",
            "9",
            "--extra-openings",
            "0.1",
            "--max-goal-resamples",
            "5",
            "--no-render",
        ])
        .unwrap();
        assert_eq!((config.rows, config.cols), (21, 31));
        assert_eq!(config.seed, Some(9));
        assert!(config.no_render);
        assert_eq!(
            config.generator_config(),
            GeneratorConfig {
                extra_opening_ratio: 0.1,
                max_goal_resamples: 5
            }
        );
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::try_parse_from(["mazecmp", "--rows", "2"]).is_err());
        assert!(Config::try_parse_from(["mazecmp", "--cols", "5000"]).is_err());
        assert!(Config::try_parse_from(["mazecmp", "--extra-openings", "1.5"]).is_err());
        assert!(Config::try_parse_from(["mazecmp", "--extra-openings", "abc"]).is_err());
    }
}
