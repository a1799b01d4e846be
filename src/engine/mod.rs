mod conflict_driven_solver;
mod moms_solver;
mod naive_solver;
mod timeout_guard;
mod variable_activities;

pub use conflict_driven_solver::{ConflictDrivenParameters, ConflictDrivenSolver};
pub use moms_solver::MomsSolver;
pub use naive_solver::NaiveSolver;
pub use timeout_guard::TimeoutGuard;
pub use variable_activities::VariableActivities;

use crate::basic_types::{Formula, SolverOutput};

/// The three search strategies offered by the toolkit. All of them consume
/// the same formula model and produce the same output shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    Naive,
    Moms,
    ConflictDriven,
}

impl SearchStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Naive => "naive",
            SearchStrategy::Moms => "moms",
            SearchStrategy::ConflictDriven => "cdcl",
        }
    }
}

pub fn solve_with_strategy(
    formula: &Formula,
    strategy: SearchStrategy,
    parameters: ConflictDrivenParameters,
    guard: &mut TimeoutGuard,
) -> SolverOutput {
    match strategy {
        SearchStrategy::Naive => NaiveSolver::new(formula).solve(guard),
        SearchStrategy::Moms => MomsSolver::new(formula).solve(guard),
        SearchStrategy::ConflictDriven => {
            ConflictDrivenSolver::new(formula, parameters).solve(guard)
        }
    }
}
