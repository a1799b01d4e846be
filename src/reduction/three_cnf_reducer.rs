use std::time::Duration;

use log::debug;

use crate::basic_types::{
    Clause, Formula, Literal, PropositionalVariable, ReductionStats, Stopwatch,
};
use crate::lantern_asserts::*;

/// Transforms an arbitrary-width CNF formula into an equisatisfiable formula
/// in which every clause has exactly three literals (empty clauses are the
/// one exception and survive unchanged, since they already encode
/// unconditional unsatisfiability). Auxiliary variables are numbered from
/// N+1 upwards in encounter order, so the output is identical across runs
/// for identical input.
pub struct ThreeCnfReducer {
    next_auxiliary_variable: u32,
}

impl ThreeCnfReducer {
    pub fn new() -> ThreeCnfReducer {
        ThreeCnfReducer {
            next_auxiliary_variable: 0,
        }
    }

    pub fn reduce(&mut self, formula: &Formula) -> (Formula, ReductionStats) {
        let stopwatch = Stopwatch::new(Duration::MAX);
        self.next_auxiliary_variable = formula.num_variables() + 1;

        let mut reduced_clause_literal_lists: Vec<Vec<Literal>> = vec![];
        for clause in formula.clauses() {
            match clause.len() {
                0 => reduced_clause_literal_lists.push(vec![]),
                1 => reduced_clause_literal_lists.extend(self.replace_unit_clause(clause)),
                2 => reduced_clause_literal_lists.extend(self.replace_binary_clause(clause)),
                3 => reduced_clause_literal_lists.push(clause.get_literal_slice().to_vec()),
                _ => reduced_clause_literal_lists.extend(self.replace_wide_clause(clause)),
            }
        }

        let num_reduced_variables = self.next_auxiliary_variable - 1;
        let reduced_formula = Formula::new(
            num_reduced_variables,
            reduced_clause_literal_lists,
            format!("3-CNF reduction of {}", formula.source_label()),
        );

        let stats = ThreeCnfReducer::capture_stats(
            formula,
            &reduced_formula,
            stopwatch.get_elapsed_time(),
        );
        debug!(
            "Reduced {} clauses to {} clauses with {} auxiliary variables",
            stats.num_original_clauses, stats.num_reduced_clauses, stats.num_auxiliary_variables
        );
        (reduced_formula, stats)
    }

    //(x) becomes the four clauses over two fresh variables that force x in
    //  every polarity combination of the auxiliaries
    fn replace_unit_clause(&mut self, clause: &Clause) -> Vec<Vec<Literal>> {
        let x = clause[0];
        let y = self.mint_auxiliary_variable();
        let z = self.mint_auxiliary_variable();
        vec![
            vec![x, pos(y), pos(z)],
            vec![x, pos(y), neg(z)],
            vec![x, neg(y), pos(z)],
            vec![x, neg(y), neg(z)],
        ]
    }

    //(a v b) becomes two clauses that are indifferent to the fresh variable
    fn replace_binary_clause(&mut self, clause: &Clause) -> Vec<Vec<Literal>> {
        let a = clause[0];
        let b = clause[1];
        let y = self.mint_auxiliary_variable();
        vec![vec![a, b, pos(y)], vec![a, b, neg(y)]]
    }

    //a clause of width k >= 4 becomes a chain of k-2 ternary clauses linked
    //  through k-3 fresh variables: (x1 v x2 v y1), (~y1 v x3 v y2), ...,
    //  (~y_{k-3} v x_{k-1} v x_k)
    fn replace_wide_clause(&mut self, clause: &Clause) -> Vec<Vec<Literal>> {
        let literals = clause.get_literal_slice();
        let width = literals.len();
        lantern_assert_simple!(width >= 4);

        let auxiliary_variables: Vec<PropositionalVariable> = (0..width - 3)
            .map(|_| self.mint_auxiliary_variable())
            .collect();

        let mut replacement = Vec::with_capacity(width - 2);
        replacement.push(vec![literals[0], literals[1], pos(auxiliary_variables[0])]);
        for i in 0..width - 4 {
            replacement.push(vec![
                neg(auxiliary_variables[i]),
                literals[i + 2],
                pos(auxiliary_variables[i + 1]),
            ]);
        }
        replacement.push(vec![
            neg(auxiliary_variables[width - 4]),
            literals[width - 2],
            literals[width - 1],
        ]);
        replacement
    }

    fn mint_auxiliary_variable(&mut self) -> PropositionalVariable {
        let variable = PropositionalVariable::new(self.next_auxiliary_variable);
        self.next_auxiliary_variable += 1;
        variable
    }

    fn capture_stats(
        original: &Formula,
        reduced: &Formula,
        elapsed: Duration,
    ) -> ReductionStats {
        ReductionStats {
            num_original_variables: original.num_variables(),
            num_original_clauses: original.num_clauses(),
            num_reduced_variables: reduced.num_variables(),
            num_reduced_clauses: reduced.num_clauses(),
            num_auxiliary_variables: reduced.num_variables() - original.num_variables(),
            original_clause_size_distribution: original.clause_size_distribution(),
            num_original_literals: original.num_literals(),
            num_reduced_literals: reduced.num_literals(),
            variable_growth_ratio: reduced.num_variables() as f64
                / original.num_variables() as f64,
            clause_growth_ratio: reduced.num_clauses() as f64 / original.num_clauses() as f64,
            reduction_time_ms: elapsed.as_secs_f64() * 1000.0,
        }
    }
}

impl Default for ThreeCnfReducer {
    fn default() -> Self {
        ThreeCnfReducer::new()
    }
}

fn pos(variable: PropositionalVariable) -> Literal {
    Literal::new(variable, true)
}

fn neg(variable: PropositionalVariable) -> Literal {
    Literal::new(variable, false)
}
