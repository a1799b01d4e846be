use std::time::Duration;

use lantern::basic_types::{Formula, SolverExecutionFlag};
use lantern::engine::{NaiveSolver, TimeoutGuard};
use lantern::parsers::dimacs;
use lantern::reduction::ThreeCnfReducer;
use lantern::verifier::SolutionVerifier;

fn rendered_clauses(formula: &Formula) -> Vec<String> {
    formula
        .clauses()
        .iter()
        .map(|clause| clause.to_string())
        .collect()
}

fn naive_satisfiability(formula: &Formula) -> bool {
    let mut guard = TimeoutGuard::new(Duration::from_secs(3600));
    NaiveSolver::new(formula)
        .solve(&mut guard)
        .flag
        .is_satisfiable()
}

#[test]
fn a_five_literal_clause_reduces_to_the_documented_chain() {
    let formula = dimacs::parse_cnf("p cnf 5 1\n1 2 3 4 5 0\n", "wide").unwrap();
    let (reduced, stats) = ThreeCnfReducer::new().reduce(&formula);

    assert_eq!(
        rendered_clauses(&reduced),
        vec!["1 2 6 0", "-6 3 7 0", "-7 4 5 0"]
    );
    assert_eq!(reduced.num_variables(), 7);
    assert_eq!(stats.num_auxiliary_variables, 2);
}

#[test]
fn a_unit_clause_with_seven_variables_reduces_to_four_clauses() {
    let formula = dimacs::parse_cnf("p cnf 7 1\n7 0\n", "unit").unwrap();
    let (reduced, _) = ThreeCnfReducer::new().reduce(&formula);

    assert_eq!(
        rendered_clauses(&reduced),
        vec!["7 8 9 0", "7 8 -9 0", "7 -8 9 0", "7 -8 -9 0"]
    );
    assert_eq!(reduced.num_variables(), 9);
}

#[test]
fn reduction_preserves_satisfiability_across_clause_widths() {
    let satisfiable_inputs = [
        "p cnf 4 3\n1 2 3 4 0\n-1 -2 0\n3 0\n",
        "p cnf 6 3\n1 2 3 4 5 6 0\n-1 0\n-2 -3 0\n",
        "p cnf 3 2\n1 2 3 0\n-3 0\n",
    ];
    for input in satisfiable_inputs {
        let formula = dimacs::parse_cnf(input, "sat input").unwrap();
        let (reduced, _) = ThreeCnfReducer::new().reduce(&formula);
        assert!(naive_satisfiability(&formula));
        assert!(naive_satisfiability(&reduced));
    }

    let unsatisfiable_inputs = [
        "p cnf 2 4\n1 2 0\n1 -2 0\n-1 2 0\n-1 -2 0\n",
        "p cnf 1 2\n1 0\n-1 0\n",
        "p cnf 4 2\n1 2 3 4 0\n0\n",
    ];
    for input in unsatisfiable_inputs {
        let formula = dimacs::parse_cnf(input, "unsat input").unwrap();
        let (reduced, _) = ThreeCnfReducer::new().reduce(&formula);
        assert!(!naive_satisfiability(&formula));
        assert!(!naive_satisfiability(&reduced));
    }
}

#[test]
fn a_projected_reduced_witness_satisfies_the_original_formula() {
    let formula =
        dimacs::parse_cnf("p cnf 5 3\n1 2 3 4 5 0\n-1 -3 0\n2 0\n", "projection").unwrap();
    let (reduced, _) = ThreeCnfReducer::new().reduce(&formula);

    let mut guard = TimeoutGuard::new(Duration::from_secs(3600));
    let output = NaiveSolver::new(&reduced).solve(&mut guard);
    let SolverExecutionFlag::Satisfiable { assignment } = output.flag else {
        panic!("the reduced formula is satisfiable");
    };

    //the reduction contract: dropping the auxiliary variables from any
    //  witness of the reduced formula yields a witness of the original
    let projected = dimacs::project_solution(&assignment, formula.num_variables());
    assert!(SolutionVerifier::verify(&formula, &projected).is_satisfied);
}

#[test]
fn reduced_output_written_to_disk_parses_back_identically() {
    let formula = dimacs::parse_cnf("p cnf 4 2\n1 -2 3 4 0\n-4 0\n", "roundtrip").unwrap();
    let (reduced, _) = ThreeCnfReducer::new().reduce(&formula);

    let file_location = std::env::temp_dir()
        .join("lantern_reduction_roundtrip.3sat.cnf")
        .to_string_lossy()
        .into_owned();
    dimacs::write_cnf_file(&reduced, &file_location).unwrap();
    let reparsed = dimacs::parse_cnf_file(&file_location).unwrap();
    std::fs::remove_file(&file_location).unwrap();

    assert_eq!(reparsed.num_variables(), reduced.num_variables());
    assert_eq!(rendered_clauses(&reparsed), rendered_clauses(&reduced));
}
