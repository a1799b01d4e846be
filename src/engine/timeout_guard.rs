use std::time::Duration;

use crate::basic_types::Stopwatch;

//clock reads are expensive relative to a search step, so the wall clock is
//  only sampled once every stride calls; the stride therefore also bounds
//  how late a timeout can fire
const CLOCK_SAMPLING_STRIDE: u64 = 10_000;

/// A polling deadline consulted inside the search hot loops. `check` is O(1)
/// per call and once the deadline has fired it keeps reporting so.
pub struct TimeoutGuard {
    stopwatch: Stopwatch,
    num_checks: u64,
    has_fired: bool,
}

impl TimeoutGuard {
    pub fn new(time_budget: Duration) -> TimeoutGuard {
        TimeoutGuard {
            stopwatch: Stopwatch::new(time_budget),
            num_checks: 0,
            has_fired: false,
        }
    }

    pub fn check(&mut self) -> bool {
        self.num_checks += 1;
        if !self.has_fired && self.num_checks % CLOCK_SAMPLING_STRIDE == 0 {
            self.has_fired = self.stopwatch.is_budget_exhausted();
        }
        self.has_fired
    }

    pub fn get_elapsed_time(&self) -> Duration {
        self.stopwatch.get_elapsed_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_expired_deadline_fires_only_at_the_sampling_stride() {
        let mut guard = TimeoutGuard::new(Duration::ZERO);
        for _ in 0..CLOCK_SAMPLING_STRIDE - 1 {
            assert!(!guard.check());
        }
        assert!(guard.check());
        //once fired the guard stays fired
        assert!(guard.check());
    }

    #[test]
    fn a_generous_deadline_does_not_fire() {
        let mut guard = TimeoutGuard::new(Duration::from_secs(3600));
        for _ in 0..3 * CLOCK_SAMPLING_STRIDE {
            assert!(!guard.check());
        }
    }
}
