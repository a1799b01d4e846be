use log::debug;

use crate::basic_types::{
    Assignment, Formula, SearchStatistics, SolverExecutionFlag, SolverOutput,
};
use crate::lantern_asserts::*;
use crate::propagators::WatchedLiteralPropagator;

use super::{TimeoutGuard, VariableActivities};

pub struct ConflictDrivenParameters {
    pub var_decay: f64,
    pub max_decisions: u64,
    pub restart_base: u64,
    pub decay_stride: u64,
}

impl Default for ConflictDrivenParameters {
    fn default() -> ConflictDrivenParameters {
        ConflictDrivenParameters {
            var_decay: 0.95,
            max_decisions: 1_000_000,
            restart_base: 100,
            decay_stride: 50,
        }
    }
}

/// The conflict-driven engine: watched-literal unit propagation, activity
/// guided decisions, chronological backtracking by halving the trail, and
/// restarts on a conflict threshold.
///
/// This is not a full CDCL solver. It learns no conflict clauses and does no
/// implication graph analysis, so an `Unsatisfiable` answer from this engine
/// only states that the trail could not be meaningfully backtracked any
/// further. It must not be read as a proof of unsatisfiability; the naive
/// and MOMS engines remain the exhaustive provers.
pub struct ConflictDrivenSolver<'formula> {
    formula: &'formula Formula,
    assignment: Assignment,
    propagator: WatchedLiteralPropagator,
    activities: VariableActivities,
    statistics: SearchStatistics,
    parameters: ConflictDrivenParameters,
}

impl<'formula> ConflictDrivenSolver<'formula> {
    pub fn new(
        formula: &'formula Formula,
        parameters: ConflictDrivenParameters,
    ) -> ConflictDrivenSolver<'formula> {
        let mut propagator = WatchedLiteralPropagator::new(formula.num_variables());
        for clause in formula.clauses() {
            propagator.attach_clause(clause);
        }
        lantern_assert_advanced!(propagator.debug_check_watches(formula));

        ConflictDrivenSolver {
            formula,
            assignment: Assignment::new(formula.num_variables()),
            propagator,
            activities: VariableActivities::new(formula.num_variables(), parameters.var_decay),
            statistics: SearchStatistics::default(),
            parameters,
        }
    }

    pub fn solve(mut self, guard: &mut TimeoutGuard) -> SolverOutput {
        //an empty clause can never be watched, so it is handled up front
        if self.formula.has_empty_clause() {
            return self.conclude(SolverExecutionFlag::Unsatisfiable);
        }

        //the conflict counter behind both the decay epochs and the restart
        //  test; a restart resets it, the lifetime total lives in the
        //  statistics
        let mut num_conflicts_since_restart: u64 = 0;

        while self.statistics.num_decisions < self.parameters.max_decisions {
            self.statistics.num_nodes_explored += 1;
            if guard.check() {
                return self.conclude(SolverExecutionFlag::Timeout);
            }

            let num_assigned_before = self.assignment.len();
            let propagation_status = self.propagator.propagate(
                self.formula,
                &mut self.assignment,
                &mut self.activities,
            );
            self.statistics.num_propagations +=
                (self.assignment.len() - num_assigned_before) as u64;

            if propagation_status.conflict_detected() {
                self.statistics.num_conflicts += 1;
                num_conflicts_since_restart += 1;

                if self.assignment.len() <= 1 {
                    return self.conclude(SolverExecutionFlag::Unsatisfiable);
                }

                self.backtrack_by_halving();

                if num_conflicts_since_restart % self.parameters.decay_stride == 0 {
                    self.activities.decay_activities();
                }

                if num_conflicts_since_restart > self.parameters.restart_base {
                    self.restart();
                    num_conflicts_since_restart = 0;
                }
                continue;
            }

            if self.assignment.is_total() {
                //re-verify against the full clause list; with fixed watches
                //  a unit can slip through propagation, in which case the
                //  totality check is what catches the inconsistency
                if self.assignment.satisfies(self.formula) {
                    let assignment = self.assignment.clone();
                    return self.conclude(SolverExecutionFlag::Satisfiable { assignment });
                }
                self.backtrack_by_halving();
                continue;
            }

            let Some(decision_variable) =
                self.activities.peek_best_unassigned(&self.assignment)
            else {
                //unreachable while the totality check above precedes this
                return self.conclude(SolverExecutionFlag::Unsatisfiable);
            };

            self.statistics.num_decisions += 1;
            //a fixed deterministic polarity schedule: every third decision
            //  assigns false, the others assign true
            let polarity = self.statistics.num_decisions % 3 != 0;
            self.assignment.assign(decision_variable, polarity);
        }

        //the decision cap was reached without an answer; report the same
        //  incomplete unsatisfiable outcome as a dead-end trail
        debug!(
            "Conflict-driven search stopped at the decision cap of {}",
            self.parameters.max_decisions
        );
        self.conclude(SolverExecutionFlag::Unsatisfiable)
    }

    fn backtrack_by_halving(&mut self) {
        let backtrack_position = self.assignment.len() / 2;
        self.assignment.backtrack_to(backtrack_position);
        self.propagator.synchronise(self.assignment.len());
        lantern_assert_moderate!(self.assignment.len() == backtrack_position);
    }

    fn restart(&mut self) {
        //the trail is discarded but the activity scores survive, so the
        //  search resumes with everything it has learned about the variables
        self.assignment.backtrack_to(0);
        self.propagator.synchronise(0);
        self.statistics.num_restarts += 1;
    }

    fn conclude(self, flag: SolverExecutionFlag) -> SolverOutput {
        SolverOutput {
            flag,
            statistics: self.statistics,
        }
    }
}
