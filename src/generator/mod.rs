use std::collections::HashSet;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::basic_types::{Formula, Literal, PropositionalVariable};

/// The clause/variable ratio at which random 3-CNF instances are hardest.
pub const PHASE_TRANSITION_RATIO: f64 = 4.26;

/// Generates a random 3-CNF formula with the given number of variables and
/// a clause count of `num_variables * clause_ratio`. Each clause draws three
/// distinct variables with uniformly random polarities, so no clause is
/// trivially true, and duplicate clauses are rejected. Generation is driven
/// by an explicitly seeded generator and is therefore reproducible.
pub fn generate_random_3cnf(num_variables: u32, clause_ratio: f64, seed: u64) -> Formula {
    let mut rng = StdRng::seed_from_u64(seed);
    let num_requested_clauses = (num_variables as f64 * clause_ratio) as usize;
    let clause_width = std::cmp::min(3, num_variables as usize);

    let mut clause_literal_lists: Vec<Vec<Literal>> = vec![];
    let mut seen_clauses: HashSet<Vec<Literal>> = HashSet::new();

    //rejection sampling may fail to hit the requested count on tiny variable
    //  ranges, so the number of attempts is capped
    let max_attempts = num_requested_clauses * 10;
    let mut num_attempts = 0;
    while clause_literal_lists.len() < num_requested_clauses && num_attempts < max_attempts {
        num_attempts += 1;

        let variable_indices =
            rand::seq::index::sample(&mut rng, num_variables as usize, clause_width);
        let clause: Vec<Literal> = variable_indices
            .iter()
            .map(|index| {
                Literal::new(PropositionalVariable::new(index as u32 + 1), rng.gen_bool(0.5))
            })
            .collect();

        if seen_clauses.insert(clause.clone()) {
            clause_literal_lists.push(clause);
        }
    }
    clause_literal_lists.shuffle(&mut rng);

    debug!(
        "Generated {} clauses over {} variables (requested {})",
        clause_literal_lists.len(),
        num_variables,
        num_requested_clauses
    );

    Formula::new(
        num_variables,
        clause_literal_lists,
        format!("random 3-CNF (n={num_variables}, seed={seed})"),
    )
}
