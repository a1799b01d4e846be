use super::Assignment;

/// The outcome of a single solve. `Unsatisfiable` is an exhaustive proof for
/// the naive and MOMS engines; for the conflict-driven engine it only means
/// the trail could not be backtracked any further, which is suggestive but
/// not definitive (see the engine documentation).
pub enum SolverExecutionFlag {
    Satisfiable { assignment: Assignment },
    Unsatisfiable,
    Timeout,
}

impl SolverExecutionFlag {
    pub fn is_satisfiable(&self) -> bool {
        matches!(
            self,
            SolverExecutionFlag::Satisfiable { assignment: _ }
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SolverExecutionFlag::Timeout)
    }
}

//search effort counters, read out of the returned output by the driver; no
//  counter state survives a solve
#[derive(Default, Debug, Clone, Copy)]
pub struct SearchStatistics {
    pub num_nodes_explored: u64,
    pub num_decisions: u64,
    pub num_conflicts: u64,
    pub num_restarts: u64,
    pub num_propagations: u64,
}

pub struct SolverOutput {
    pub flag: SolverExecutionFlag,
    pub statistics: SearchStatistics,
}
