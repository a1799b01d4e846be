use std::fs;
use std::path::PathBuf;
use std::process::Output;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lantern_driver_{}_{}", std::process::id(), name))
}

fn run_lantern(arguments: &[String]) -> Output {
    assert_cmd::Command::cargo_bin("lantern")
        .expect("could not find executable")
        .args(arguments)
        .output()
        .expect("could not run executable")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn solving_a_satisfiable_file_prints_a_witness_and_saves_a_solution() {
    let cnf_location = temp_path("solve.cnf");
    fs::write(&cnf_location, "p cnf 2 2\n1 2 0\n-1 2 0\n").unwrap();

    let output = run_lantern(&[
        format!("-file-location={}", cnf_location.display()),
        "-mode=solve".to_string(),
        "-strategy=cdcl".to_string(),
    ]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("s SATISFIABLE"));
    assert!(stdout.contains("v "));

    let solution_location = PathBuf::from(format!("{}.sol", cnf_location.display()));
    let solution_contents = fs::read_to_string(&solution_location).unwrap();
    assert!(solution_contents.lines().any(|line| line.starts_with("v ")));

    //the saved solution is accepted by the verify mode
    let verify_output = run_lantern(&[
        format!("-file-location={}", cnf_location.display()),
        "-mode=verify".to_string(),
    ]);
    assert!(verify_output.status.success());
    assert!(stdout_of(&verify_output).contains("s SATISFIABLE"));

    fs::remove_file(&cnf_location).unwrap();
    fs::remove_file(&solution_location).unwrap();
}

#[test]
fn an_unsatisfiable_file_is_reported_as_such() {
    let cnf_location = temp_path("unsat.cnf");
    fs::write(&cnf_location, "p cnf 1 2\n1 0\n-1 0\n").unwrap();

    let output = run_lantern(&[
        format!("-file-location={}", cnf_location.display()),
        "-mode=solve".to_string(),
        "-strategy=naive".to_string(),
    ]);

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("s UNSATISFIABLE"));

    fs::remove_file(&cnf_location).unwrap();
}

#[test]
fn reduce_mode_writes_the_3cnf_file_and_the_statistics_csv() {
    let directory = temp_path("reduce_dir");
    fs::create_dir_all(&directory).unwrap();
    let cnf_location = directory.join("wide.cnf");
    fs::write(&cnf_location, "p cnf 5 1\n1 2 3 4 5 0\n").unwrap();

    let output = run_lantern(&[
        format!("-file-location={}", directory.display()),
        "-mode=reduce".to_string(),
    ]);
    assert!(output.status.success());

    let reduced_contents = fs::read_to_string(directory.join("wide.3sat.cnf")).unwrap();
    assert!(reduced_contents.contains("p cnf 7 3"));
    assert!(reduced_contents.contains("1 2 6 0"));

    let csv_contents = fs::read_to_string(directory.join("reduction_stats.csv")).unwrap();
    let mut csv_lines = csv_contents.lines();
    assert_eq!(
        csv_lines.next(),
        Some("OriginalVars,OriginalClauses,ReducedVars,ReducedClauses,AuxVars,VarRatio,ClauseRatio,TimeMs")
    );
    assert!(csv_lines.next().unwrap().starts_with("5,1,7,3,2,1.400,3.000,"));

    fs::remove_dir_all(&directory).unwrap();
}

#[test]
fn generate_mode_produces_a_parsable_instance() {
    let cnf_location = temp_path("generated.cnf");

    let output = run_lantern(&[
        format!("-file-location={}", cnf_location.display()),
        "-mode=generate".to_string(),
        "-num-variables=12".to_string(),
        "-random-seed=5".to_string(),
    ]);
    assert!(output.status.success());

    let contents = fs::read_to_string(&cnf_location).unwrap();
    assert!(contents.contains("p cnf 12 "));

    fs::remove_file(&cnf_location).unwrap();
}
