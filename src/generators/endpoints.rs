use rand::{Rng, seq::index};

use crate::{error::MazeError, maze::Coord};

/// Picks a start and goal from `open` at least `min_distance` apart (Manhattan).
///
/// Two distinct cells are sampled first; then only the goal is redrawn, up to
/// `max_resamples` times, until the distance constraint holds.
pub fn pick_endpoints<R: Rng + ?Sized>(
    open: &[Coord],
    min_distance: u32,
    max_resamples: usize,
    rng: &mut R,
) -> Result<(Coord, Coord), MazeError> {
    if open.len() < 2 {
        return Err(MazeError::TooFewOpenCells(open.len()));
    }

    let picks = index::sample(rng, open.len(), 2);
    let start = open[picks.index(0)];
    let mut goal = open[picks.index(1)];

    // A redrawn goal may land on the start; distance 0 never passes
    let min_distance = min_distance.max(1);
    let mut attempts = 0;
    while start.manhattan(goal) < min_distance {
        if attempts == max_resamples {
            tracing::warn!(
                "[generator] no goal at distance >= {} from {} after {} attempts",
                min_distance,
                start,
                attempts
            );
            return Err(MazeError::GenerationFailed {
                min_distance,
                attempts,
            });
        }
        goal = open[rng.random_range(0..open.len())];
        attempts += 1;
    }

    tracing::debug!(
        "[generator] start {} goal {} (distance {}, {} resamples)",
        start,
        goal,
        start.manhattan(goal),
        attempts
    );
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn row_of(len: u16) -> Vec<Coord> {
        (0..len).map(|col| Coord::new(1, col)).collect()
    }

    #[test]
    fn test_respects_min_distance() {
        let open = row_of(20);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (start, goal) = pick_endpoints(&open, 8, 10_000, &mut rng).unwrap();
            assert_ne!(start, goal);
            assert!(start.manhattan(goal) >= 8);
            assert!(open.contains(&start) && open.contains(&goal));
        }
    }

    #[test]
    fn test_unsatisfiable_distance_is_bounded() {
        let open = row_of(2);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_endpoints(&open, 5, 100, &mut rng),
            Err(MazeError::GenerationFailed {
                min_distance: 5,
                attempts: 100
            })
        );
    }

    #[test]
    fn test_too_few_open_cells() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            pick_endpoints(&row_of(1), 1, 10, &mut rng),
            Err(MazeError::TooFewOpenCells(1))
        );
        assert_eq!(
            pick_endpoints(&[], 1, 10, &mut rng),
            Err(MazeError::TooFewOpenCells(0))
        );
    }

    #[test]
    fn test_zero_distance_still_distinct() {
        let open = row_of(2);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (start, goal) = pick_endpoints(&open, 0, 10, &mut rng).unwrap();
            assert_ne!(start, goal);
        }
    }
}
