use std::time::{Duration, Instant};

/// Wall-clock budget keeping: records its creation instant and answers how
/// much of the given time budget remains.
#[derive(Debug, Copy, Clone)]
pub struct Stopwatch {
    time_start: Instant,
    time_budget: Duration,
}

impl Stopwatch {
    pub fn new(time_budget: Duration) -> Stopwatch {
        Stopwatch {
            time_start: Instant::now(),
            time_budget,
        }
    }

    pub fn get_elapsed_time(&self) -> Duration {
        self.time_start.elapsed()
    }

    pub fn get_remaining_time_budget(&self) -> Duration {
        self.time_budget.saturating_sub(self.time_start.elapsed())
    }

    pub fn is_budget_exhausted(&self) -> bool {
        self.get_remaining_time_budget() == Duration::ZERO
    }
}
