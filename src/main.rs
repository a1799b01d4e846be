use std::io::Write;
use std::path::Path;
use std::time::Duration;

use log::{debug, error, info, warn, LevelFilter};

use lantern::arguments::{self, ArgumentHandler};
use lantern::basic_types::{Formula, ReductionStats, SolverExecutionFlag};
use lantern::engine::{
    solve_with_strategy, ConflictDrivenParameters, SearchStrategy, TimeoutGuard,
};
use lantern::generator;
use lantern::parsers::dimacs;
use lantern::reduction::ThreeCnfReducer;
use lantern::result::{LanternError, LanternResult};
use lantern::verifier::SolutionVerifier;

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => error!("Execution failed, error: {}", e),
    }
}

fn run() -> LanternResult<()> {
    let mut argument_handler = arguments::create_argument_handler();
    argument_handler.print_help_summary_if_needed_and_exit();
    argument_handler.parse_command_line_arguments();

    configure_logging(
        argument_handler.get_bool_argument("verbose"),
        argument_handler.get_bool_argument("omit-timestamp"),
        argument_handler.get_bool_argument("omit-call-site"),
    )?;

    argument_handler.print_arguments_different_from_default();

    match argument_handler.get_string_argument("mode").as_str() {
        "solve" => run_solve(&argument_handler),
        "reduce" => run_reduce(&argument_handler),
        "verify" => run_verify(&argument_handler),
        "generate" => run_generate(&argument_handler),
        unknown_mode => unreachable!("mode '{unknown_mode}' passed argument validation"),
    }
}

fn configure_logging(
    verbose: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    //log lines are prefixed with 'c ' so that everything the driver emits is
    //  legal DIMACS comment output
    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .init();
    debug!("Logging successfully configured");
    Ok(())
}

fn get_file_location(argument_handler: &ArgumentHandler) -> LanternResult<String> {
    let file_location = argument_handler.get_string_argument("file-location");
    if file_location.is_empty() {
        return Err(LanternError::MissingFileError);
    }
    Ok(file_location)
}

fn selected_strategies(argument_handler: &ArgumentHandler) -> Vec<SearchStrategy> {
    match argument_handler.get_string_argument("strategy").as_str() {
        "naive" => vec![SearchStrategy::Naive],
        "moms" => vec![SearchStrategy::Moms],
        "cdcl" => vec![SearchStrategy::ConflictDriven],
        _ => vec![
            SearchStrategy::Naive,
            SearchStrategy::Moms,
            SearchStrategy::ConflictDriven,
        ],
    }
}

fn conflict_driven_parameters(argument_handler: &ArgumentHandler) -> ConflictDrivenParameters {
    ConflictDrivenParameters {
        var_decay: argument_handler.get_float_argument("var-decay"),
        max_decisions: argument_handler.get_integer_argument("max-decisions") as u64,
        restart_base: argument_handler.get_integer_argument("restart-base") as u64,
        decay_stride: argument_handler.get_integer_argument("decay-stride") as u64,
    }
}

fn strategy_timeout(argument_handler: &ArgumentHandler, strategy: SearchStrategy) -> Duration {
    let seconds = match strategy {
        SearchStrategy::Naive => argument_handler.get_float_argument("timeout-naive"),
        SearchStrategy::Moms => argument_handler.get_float_argument("timeout-moms"),
        SearchStrategy::ConflictDriven => argument_handler.get_float_argument("timeout-cdcl"),
    };
    Duration::from_secs_f64(seconds)
}

fn run_solve(argument_handler: &ArgumentHandler) -> LanternResult<()> {
    let file_location = get_file_location(argument_handler)?;
    let cnf_files = dimacs::collect_cnf_files(&file_location, false)?;

    for cnf_file in &cnf_files {
        let formula = dimacs::parse_cnf_file(cnf_file)?;
        info!(
            "File: {} | variables: {} | clauses: {}",
            cnf_file,
            formula.num_variables(),
            formula.num_clauses()
        );

        for strategy in selected_strategies(argument_handler) {
            solve_one(argument_handler, &formula, strategy, cnf_file)?;
        }
    }
    Ok(())
}

fn solve_one(
    argument_handler: &ArgumentHandler,
    formula: &Formula,
    strategy: SearchStrategy,
    cnf_file: &str,
) -> LanternResult<()> {
    let mut guard = TimeoutGuard::new(strategy_timeout(argument_handler, strategy));
    let parameters = conflict_driven_parameters(argument_handler);

    let output = solve_with_strategy(formula, strategy, parameters, &mut guard);
    let elapsed_seconds = guard.get_elapsed_time().as_secs_f64();

    info!(
        "[{}] {:.2}s | nodes: {} | decisions: {} | conflicts: {} | restarts: {}",
        strategy.name(),
        elapsed_seconds,
        output.statistics.num_nodes_explored,
        output.statistics.num_decisions,
        output.statistics.num_conflicts,
        output.statistics.num_restarts
    );

    match output.flag {
        SolverExecutionFlag::Satisfiable { ref assignment } => {
            println!("s SATISFIABLE");
            println!("{}", dimacs::stringify_solution(assignment));

            //the witness is never trusted blindly, the verifier is the
            //  arbiter of solver output
            let report = SolutionVerifier::verify(formula, assignment);
            if !report.is_satisfied {
                error!(
                    "The {} engine produced a witness that falsifies {} clauses.",
                    strategy.name(),
                    report.num_falsified_clauses
                );
                return Err(LanternError::InconsistentSolution);
            }

            if strategy == SearchStrategy::ConflictDriven {
                let solution_file = format!("{cnf_file}.sol");
                dimacs::write_solution_file(
                    &solution_file,
                    assignment,
                    cnf_file,
                    elapsed_seconds,
                    output.statistics.num_nodes_explored,
                )?;
                info!("Solution saved to {}", solution_file);
            }
        }
        SolverExecutionFlag::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            if strategy == SearchStrategy::ConflictDriven {
                warn!(
                    "The conflict-driven engine cannot prove unsatisfiability; treat this answer as suggestive only."
                );
            }
        }
        SolverExecutionFlag::Timeout => {
            println!("s UNKNOWN");
            info!("[{}] timed out", strategy.name());
        }
    }
    Ok(())
}

fn run_reduce(argument_handler: &ArgumentHandler) -> LanternResult<()> {
    let file_location = get_file_location(argument_handler)?;
    let cnf_files = dimacs::collect_cnf_files(&file_location, true)?;

    for cnf_file in &cnf_files {
        let formula = dimacs::parse_cnf_file(cnf_file)?;
        let (reduced_formula, stats) = ThreeCnfReducer::new().reduce(&formula);

        let reduced_file = dimacs::reduced_file_location(cnf_file);
        dimacs::write_cnf_file(&reduced_formula, &reduced_file)?;

        info!(
            "{}: {} vars / {} clauses -> {} vars (+{} aux) / {} clauses in {:.2} ms",
            cnf_file,
            stats.num_original_variables,
            stats.num_original_clauses,
            stats.num_reduced_variables,
            stats.num_auxiliary_variables,
            stats.num_reduced_clauses,
            stats.reduction_time_ms
        );
        info!(
            "Growth ratios: variables {:.3}x | clauses {:.3}x | literals {} -> {}",
            stats.variable_growth_ratio,
            stats.clause_growth_ratio,
            stats.num_original_literals,
            stats.num_reduced_literals
        );
        info!("Reduced formula saved to {}", reduced_file);

        append_reduction_stats(&reduced_file, &stats)?;
    }
    Ok(())
}

//the statistics of every reduction in a directory accumulate in one csv
//  file next to the reduced outputs
fn append_reduction_stats(reduced_file: &str, stats: &ReductionStats) -> LanternResult<()> {
    let csv_location = Path::new(reduced_file)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("reduction_stats.csv");

    let needs_header = !csv_location.exists();
    let mut csv_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_location)?;
    if needs_header {
        writeln!(csv_file, "{}", ReductionStats::CSV_HEADER)?;
    }
    writeln!(csv_file, "{}", stats.to_csv_row())?;
    Ok(())
}

fn run_verify(argument_handler: &ArgumentHandler) -> LanternResult<()> {
    let file_location = get_file_location(argument_handler)?;
    if !file_location.ends_with(".cnf") {
        return Err(LanternError::InvalidInstanceFile);
    }
    let solution_file = format!("{file_location}.sol");

    let formula = dimacs::parse_cnf_file(&file_location)?;
    let assignment = dimacs::parse_solution_file(&solution_file, formula.num_variables())?;

    let report = SolutionVerifier::verify(&formula, &assignment);
    info!(
        "Satisfied clauses: {}/{}",
        report.num_satisfied_clauses,
        formula.num_clauses()
    );

    if report.is_satisfied {
        println!("s SATISFIABLE");
    } else {
        println!("s UNSATISFIABLE");
        warn!(
            "Falsified clauses: {} (first ids: {:?})",
            report.num_falsified_clauses, report.falsified_clause_ids
        );
    }
    Ok(())
}

fn run_generate(argument_handler: &ArgumentHandler) -> LanternResult<()> {
    let file_location = get_file_location(argument_handler)?;

    let formula = generator::generate_random_3cnf(
        argument_handler.get_integer_argument("num-variables") as u32,
        argument_handler.get_float_argument("clause-ratio"),
        argument_handler.get_integer_argument("random-seed") as u64,
    );

    dimacs::write_cnf_file(&formula, &file_location)?;
    info!(
        "Generated {} with {} variables and {} clauses",
        file_location,
        formula.num_variables(),
        formula.num_clauses()
    );
    Ok(())
}
