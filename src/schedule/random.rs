use rand::Rng;
use super::types::{Interval, Schedule};

/// Generates `count` intervals with starts in `0..horizon` and lengths of at
/// least one time unit. Used for the "random example" button.
pub fn random_schedule<R: Rng>(rng: &mut R, count: usize, horizon: i64) -> Schedule {
    let horizon = horizon.max(2);
    let max_len = (horizon / 3).max(1);
    let intervals = (0..count)
        .map(|_| {
            let start = rng.gen_range(0..horizon);
            let len = rng.gen_range(1..=max_len);
            Interval::new(start, start + len)
        })
        .collect();
    Schedule { intervals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count_within_horizon() {
        let mut rng = StdRng::seed_from_u64(7);
        let schedule = random_schedule(&mut rng, 12, 24);
        assert_eq!(schedule.len(), 12);
        for interval in &schedule.intervals {
            assert!(interval.start >= 0 && interval.start < 24);
            assert!(interval.end > interval.start);
            assert!(interval.end - interval.start <= 8);
        }
    }

    #[test]
    fn same_seed_same_schedule() {
        let a = random_schedule(&mut StdRng::seed_from_u64(42), 8, 24);
        let b = random_schedule(&mut StdRng::seed_from_u64(42), 8, 24);
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_horizon_is_clamped() {
        let schedule = random_schedule(&mut StdRng::seed_from_u64(1), 3, 0);
        assert!(schedule.intervals.iter().all(|i| i.start >= 0 && i.start < 2));
    }
}
