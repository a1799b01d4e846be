use crate::basic_types::{
    Assignment, Formula, Literal, SearchStatistics, SolverExecutionFlag, SolverOutput,
};

use super::naive_solver::SearchStatus;
use super::TimeoutGuard;

/// The same recursive skeleton as the naive engine, with branching replaced
/// by a maximum-occurrence heuristic: over the clauses not yet satisfied by
/// the partial assignment, the signed literal of an unset variable with the
/// most occurrences is selected and its variable branched on. Ties are
/// broken towards the literal encountered first during clause enumeration,
/// which keeps the selection deterministic.
pub struct MomsSolver<'formula> {
    formula: &'formula Formula,
    assignment: Assignment,
    statistics: SearchStatistics,
}

impl<'formula> MomsSolver<'formula> {
    pub fn new(formula: &'formula Formula) -> MomsSolver<'formula> {
        MomsSolver {
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

        let Some(literal) = self.select_branching_literal() else {
            return SearchStatus::Exhausted;
        };
        let variable = literal.get_propositional_variable();

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

    fn select_branching_literal(&self) -> Option<Literal> {
        //dense occurrence counts indexed by literal code, plus the literals
        //  in first-encounter order so that ties resolve deterministically
        let num_literal_codes = 2 * (self.formula.num_variables() as usize + 1);
        let mut occurrence_counts = vec![0u64; num_literal_codes];
        let mut encountered_literals: Vec<Literal> = vec![];

        for clause in self.formula.clauses() {
            if self.assignment.is_clause_satisfied(clause) {
                continue;
            }
            for &literal in clause.get_literal_slice() {
                if self.assignment.is_literal_unassigned(literal) {
                    if occurrence_counts[literal] == 0 {
                        encountered_literals.push(literal);
                    }
                    occurrence_counts[literal] += 1;
                }
            }
        }

        let mut best_literal = None;
        let mut best_count = 0;
        for literal in encountered_literals {
            if occurrence_counts[literal] > best_count {
                best_count = occurrence_counts[literal];
                best_literal = Some(literal);
            }
        }
        best_literal
    }
}
