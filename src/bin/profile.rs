use std::time::Duration;

use mazecmp::{AppError, Solver, compare, config::init_logging, generate_maze, get_rng};

/// Largest maze the CLI accepts.
const SIZE: u16 = 1001;

fn main() -> Result<(), AppError> {
    let _guard = init_logging(std::path::Path::new("mazecmp-profile.log"));

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok()).unwrap_or(1);

    let mut rng = get_rng(None);
    let mut totals = Solver::ALL.map(|solver| (solver, Duration::ZERO));
    for iteration in 0..num_iters {
        let maze = generate_maze(SIZE, SIZE, &mut rng)?;
        for result in compare(&maze, &mut rng) {
            if let Some((_, total)) = totals.iter_mut().find(|(s, _)| *s == result.solver) {
                *total += result.elapsed;
            }
        }
        tracing::info!("[profile] iteration {} done", iteration + 1);
    }

    for (solver, total) in totals {
        println!(
            "{:<4} total {:>10.4}s  mean {:>10.6}s over {} runs",
            solver.short_name(),
            total.as_secs_f64(),
            total.as_secs_f64() / num_iters.max(1) as f64,
            num_iters
        );
    }
    Ok(())
}
