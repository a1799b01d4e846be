use crate::basic_types::{
    Assignment, Formula, PropositionalVariable, SearchStatistics, SolverExecutionFlag,
    SolverOutput,
};

use super::TimeoutGuard;

//the internal verdict of a recursive search subtree
pub(crate) enum SearchStatus {
    Satisfied,
    Exhausted,
    TimedOut,
}

/// The baseline engine: recursive branch and satisfaction testing with no
/// unit propagation. At every node the full clause list is evaluated against
/// the current partial assignment; branching picks the least-indexed unset
/// variable and tries true before false.
pub struct NaiveSolver<'formula> {
    formula: &'formula Formula,
    assignment: Assignment,
    statistics: SearchStatistics,
}

impl<'formula> NaiveSolver<'formula> {
    pub fn new(formula: &'formula Formula) -> NaiveSolver<'formula> {
        NaiveSolver {
            formula,
            assignment: Assignment::new(formula.num_variables()),
            statistics: SearchStatistics::default(),
        }
    }

    pub fn solve(mut self, guard: &mut TimeoutGuard) -> SolverOutput {
        let flag = match self.branch(guard) {
            SearchStatus::Satisfied => SolverExecutionFlag::Satisfiable {
                assignment: self.assignment,
            },
            SearchStatus::Exhausted => SolverExecutionFlag::Unsatisfiable,
            SearchStatus::TimedOut => SolverExecutionFlag::Timeout,
        };
        SolverOutput {
            flag,
            statistics: self.statistics,
        }
    }

    fn branch(&mut self, guard: &mut TimeoutGuard) -> SearchStatus {
        self.statistics.num_nodes_explored += 1;
        if guard.check() {
            return SearchStatus::TimedOut;
        }

        if self.assignment.satisfies(self.formula) {
            return SearchStatus::Satisfied;
        }

        let Some(variable) = self.first_unassigned_variable() else {
            return SearchStatus::Exhausted;
        };

        self.statistics.num_decisions += 1;
        for value in [true, false] {
            self.assignment.assign(variable, value);
            match self.branch(guard) {
                SearchStatus::Satisfied => return SearchStatus::Satisfied,
                SearchStatus::TimedOut => return SearchStatus::TimedOut,
                SearchStatus::Exhausted => self.assignment.unassign(variable),
            }
        }
        SearchStatus::Exhausted
    }

    fn first_unassigned_variable(&self) -> Option<PropositionalVariable> {
        self.formula
            .get_propositional_variables()
            .find(|variable| !self.assignment.contains(*variable))
    }
}
