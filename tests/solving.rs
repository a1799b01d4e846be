use std::time::Duration;

use lantern::basic_types::{Formula, Literal, SolverExecutionFlag, SolverOutput};
use lantern::engine::{
    solve_with_strategy, ConflictDrivenParameters, SearchStrategy, TimeoutGuard,
};
use lantern::generator;
use lantern::parsers::dimacs;
use lantern::verifier::SolutionVerifier;

const ALL_STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::Naive,
    SearchStrategy::Moms,
    SearchStrategy::ConflictDriven,
];

fn solve(formula: &Formula, strategy: SearchStrategy) -> SolverOutput {
    let mut guard = TimeoutGuard::new(Duration::from_secs(3600));
    //a modest decision cap keeps cap-bound runs affordable in tests
    let parameters = ConflictDrivenParameters {
        max_decisions: 5_000,
        ..ConflictDrivenParameters::default()
    };
    solve_with_strategy(formula, strategy, parameters, &mut guard)
}

#[test]
fn a_single_unit_clause_is_satisfiable_for_every_engine() {
    let formula = dimacs::parse_cnf("p cnf 1 1\n1 0\n", "unit").unwrap();

    for strategy in ALL_STRATEGIES {
        match solve(&formula, strategy).flag {
            SolverExecutionFlag::Satisfiable { assignment } => {
                assert!(
                    assignment.is_literal_assigned_true(Literal::from_dimacs(1)),
                    "{} should set variable 1 to true",
                    strategy.name()
                );
            }
            _ => panic!("{} should report SAT", strategy.name()),
        }
    }

    //the canonical witness is accepted by the verifier
    let witness = dimacs::parse_solution("v 1 0\n", 1);
    assert!(SolutionVerifier::verify(&formula, &witness).is_satisfied);
}

#[test]
fn complementary_unit_clauses_are_unsatisfiable_for_every_engine() {
    let formula = dimacs::parse_cnf("p cnf 1 2\n1 0\n-1 0\n", "conflict").unwrap();

    for strategy in ALL_STRATEGIES {
        assert!(
            matches!(
                solve(&formula, strategy).flag,
                SolverExecutionFlag::Unsatisfiable
            ),
            "{} should report UNSAT",
            strategy.name()
        );
    }

    //no total assignment passes verification
    for candidate in ["v 1 0\n", "v -1 0\n"] {
        let witness = dimacs::parse_solution(candidate, 1);
        assert!(!SolutionVerifier::verify(&formula, &witness).is_satisfied);
    }
}

#[test]
fn a_two_variable_implication_has_a_verified_witness_for_every_engine() {
    let formula = dimacs::parse_cnf("p cnf 2 2\n1 2 0\n-1 2 0\n", "implication").unwrap();

    for strategy in ALL_STRATEGIES {
        match solve(&formula, strategy).flag {
            SolverExecutionFlag::Satisfiable { assignment } => {
                let report = SolutionVerifier::verify(&formula, &assignment);
                assert!(
                    report.is_satisfied,
                    "the witness of {} must satisfy both clauses",
                    strategy.name()
                );
            }
            _ => panic!("{} should report SAT", strategy.name()),
        }
    }
}

#[test]
fn every_engine_is_deterministic_in_outcome_and_node_count() {
    let formula = generator::generate_random_3cnf(10, 4.26, 11);

    for strategy in ALL_STRATEGIES {
        let first = solve(&formula, strategy);
        let second = solve(&formula, strategy);

        assert_eq!(
            first.flag.is_satisfiable(),
            second.flag.is_satisfiable(),
            "{} changed its verdict between runs",
            strategy.name()
        );
        assert_eq!(
            first.statistics.num_nodes_explored, second.statistics.num_nodes_explored,
            "{} changed its node count between runs",
            strategy.name()
        );
        assert_eq!(
            first.statistics.num_decisions,
            second.statistics.num_decisions
        );
    }
}

#[test]
fn the_exhaustive_engines_agree_and_satisfiable_witnesses_verify() {
    for seed in 0..4 {
        let formula = generator::generate_random_3cnf(10, 4.26, seed);

        let naive_output = solve(&formula, SearchStrategy::Naive);
        let moms_output = solve(&formula, SearchStrategy::Moms);
        assert_eq!(
            naive_output.flag.is_satisfiable(),
            moms_output.flag.is_satisfiable(),
            "naive and MOMS disagree on seed {seed}"
        );

        //every SAT answer of any engine must come with a checkable witness
        for strategy in ALL_STRATEGIES {
            if let SolverExecutionFlag::Satisfiable { assignment } =
                solve(&formula, strategy).flag
            {
                assert!(
                    SolutionVerifier::verify(&formula, &assignment).is_satisfied,
                    "{} returned an unverifiable witness on seed {seed}",
                    strategy.name()
                );
            }
        }
    }
}

#[test]
fn a_tight_deadline_forces_the_naive_engine_to_time_out() {
    //a dense 50-variable instance is far beyond the naive engine in 10ms
    let formula = generator::generate_random_3cnf(50, 6.0, 99);

    let mut guard = TimeoutGuard::new(Duration::from_millis(10));
    let output = solve_with_strategy(
        &formula,
        SearchStrategy::Naive,
        ConflictDrivenParameters::default(),
        &mut guard,
    );

    assert!(output.flag.is_timeout());
    assert!(output.statistics.num_nodes_explored > 0);

    //the conflict-driven engine with a generous deadline answers the same
    //  input with a definite verdict, identically on every run
    let first = solve(&formula, SearchStrategy::ConflictDriven);
    let second = solve(&formula, SearchStrategy::ConflictDriven);
    assert!(!first.flag.is_timeout());
    assert!(!second.flag.is_timeout());
    assert_eq!(first.flag.is_satisfiable(), second.flag.is_satisfiable());
    assert_eq!(
        first.statistics.num_nodes_explored,
        second.statistics.num_nodes_explored
    );
}

#[test]
fn the_conflict_driven_engine_solves_a_chain_of_forced_assignments() {
    //unit clause plus implications, everything is decided by propagation
    let formula = dimacs::parse_cnf(
        "p cnf 4 4\n1 0\n-1 2 0\n-2 3 0\n-3 4 0\n",
        "forced chain",
    )
    .unwrap();

    match solve(&formula, SearchStrategy::ConflictDriven).flag {
        SolverExecutionFlag::Satisfiable { assignment } => {
            for index in 1..=4 {
                assert!(assignment.is_literal_assigned_true(Literal::from_dimacs(index)));
            }
        }
        _ => panic!("the chain is satisfiable"),
    }
}
