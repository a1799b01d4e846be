use crate::basic_types::{Assignment, Clause, Formula, Literal, PropagationStatus};
use crate::engine::VariableActivities;

/// Watched-literal unit propagation. Every clause with at least two literals
/// is registered under its first two literals, unit clauses under their
/// single literal, and the empty clause is never registered. Watches are not
/// moved afterwards: a visited clause is re-scanned in full, which keeps the
/// bookkeeping trivial at the cost of occasionally missing an implication
/// through a non-watched literal. The solver compensates with its totality
/// re-verification step.
pub struct WatchedLiteralPropagator {
    watch_lists: Vec<Vec<u32>>,
    next_position_on_trail_to_propagate: usize,
}

impl WatchedLiteralPropagator {
    pub fn new(num_variables: u32) -> WatchedLiteralPropagator {
        WatchedLiteralPropagator {
            //one watch list per literal code, i.e., two per variable, plus
            //  the two unused lists of the reserved variable zero
            watch_lists: vec![vec![]; 2 * (num_variables as usize + 1)],
            next_position_on_trail_to_propagate: 0,
        }
    }

    pub fn attach_clause(&mut self, clause: &Clause) {
        match clause.len() {
            0 => {}
            1 => self.watch_lists[clause[0]].push(clause.id()),
            _ => {
                self.watch_lists[clause[0]].push(clause.id());
                self.watch_lists[clause[1]].push(clause.id());
            }
        }
    }

    /// Runs unit propagation to fixed point. The unpropagated tail of the
    /// trail acts as the work queue: each newly set variable falsifies the
    /// complement of its assignment literal, and every clause watching that
    /// falsified literal is inspected. Implied assignments extend the trail
    /// and are therefore consumed by later iterations in FIFO order.
    pub fn propagate(
        &mut self,
        formula: &Formula,
        assignment: &mut Assignment,
        activities: &mut VariableActivities,
    ) -> PropagationStatus {
        while self.next_position_on_trail_to_propagate < assignment.len() {
            let trail_variable =
                assignment.get_trail_variable(self.next_position_on_trail_to_propagate);
            let falsified_literal = !assignment.get_assignment_literal(trail_variable);

            for watch_position in 0..self.watch_lists[falsified_literal].len() {
                let clause_index = self.watch_lists[falsified_literal][watch_position];
                let clause = &formula.clauses()[clause_index as usize];

                //re-scan the clause: a single pass decides whether it is
                //  satisfied, unit, or falsified under the current assignment
                let mut unassigned_literal: Option<Literal> = None;
                let mut num_unassigned_literals = 0;
                let mut is_satisfied = false;
                for &literal in clause.get_literal_slice() {
                    if assignment.is_literal_assigned_true(literal) {
                        is_satisfied = true;
                        break;
                    }
                    if assignment.is_literal_unassigned(literal) {
                        unassigned_literal = Some(literal);
                        num_unassigned_literals += 1;
                    }
                }

                if is_satisfied {
                    continue;
                }

                if num_unassigned_literals == 0 {
                    //every literal of the clause is falsified
                    return PropagationStatus::ConflictDetected {
                        conflict_clause: clause_index,
                    };
                }

                if num_unassigned_literals == 1 {
                    let implied_literal =
                        unassigned_literal.expect("a unit clause has an unassigned literal");
                    assignment.assign(
                        implied_literal.get_propositional_variable(),
                        implied_literal.is_positive(),
                    );
                    activities.bump_activity(implied_literal.get_propositional_variable());
                }
            }
            self.next_position_on_trail_to_propagate += 1;
        }
        PropagationStatus::NoConflictDetected
    }

    //called after the solver rewinds the trail so that propagation resumes
    //  from the first position that is no longer propagated
    pub fn synchronise(&mut self, trail_length: usize) {
        self.next_position_on_trail_to_propagate =
            std::cmp::min(self.next_position_on_trail_to_propagate, trail_length);
    }

    pub fn is_propagation_complete(&self, trail_length: usize) -> bool {
        self.next_position_on_trail_to_propagate == trail_length
    }

    //every nonempty clause must be registered under exactly
    //  min(2, |clause|) of its literals
    pub fn debug_check_watches(&self, formula: &Formula) -> bool {
        let mut num_registrations = vec![0u32; formula.num_clauses()];
        for watch_list in &self.watch_lists {
            for &clause_index in watch_list {
                num_registrations[clause_index as usize] += 1;
            }
        }
        formula.clauses().iter().all(|clause| {
            num_registrations[clause.id() as usize] == std::cmp::min(2, clause.len())
        })
    }
}
