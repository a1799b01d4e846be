mod argument_handler;

pub use argument_handler::ArgumentHandler;

/// Declares every argument the toolkit recognises, with the defaults used
/// when the command line leaves them untouched.
pub fn create_argument_handler() -> ArgumentHandler {
    let mut argument_handler = ArgumentHandler::new();

    argument_handler.define_new_category("general", "Driver behaviour and input selection.");
    argument_handler.define_string_argument(
        "file-location",
        "general",
        "Path to a DIMACS CNF file, or a directory to process in batch.",
        "",
        &[],
    );
    argument_handler.define_string_argument(
        "mode",
        "general",
        "What to do with the input: solve it, reduce it to 3-CNF, verify a solution file, or generate an instance.",
        "solve",
        &["solve", "reduce", "verify", "generate"],
    );
    argument_handler.define_string_argument(
        "strategy",
        "general",
        "Search strategy for solving; 'all' runs the three strategies in sequence.",
        "all",
        &["naive", "moms", "cdcl", "all"],
    );
    argument_handler.define_bool_argument(
        "verbose",
        "general",
        "Log at debug level instead of warnings only.",
        false,
    );
    argument_handler.define_bool_argument(
        "omit-timestamp",
        "general",
        "Leave the timestamp out of log lines.",
        false,
    );
    argument_handler.define_bool_argument(
        "omit-call-site",
        "general",
        "Leave the source location out of log lines.",
        false,
    );

    argument_handler.define_new_category("solver", "Search engine parameters.");
    argument_handler.define_float_argument(
        "timeout-naive",
        "solver",
        "Deadline in seconds for the naive engine.",
        30.0,
        0.0,
        86_400.0,
    );
    argument_handler.define_float_argument(
        "timeout-moms",
        "solver",
        "Deadline in seconds for the MOMS engine.",
        30.0,
        0.0,
        86_400.0,
    );
    argument_handler.define_float_argument(
        "timeout-cdcl",
        "solver",
        "Deadline in seconds for the conflict-driven engine.",
        1800.0,
        0.0,
        86_400.0,
    );
    argument_handler.define_float_argument(
        "var-decay",
        "solver",
        "Multiplicative activity decay factor, strictly between 0 and 1.",
        0.95,
        0.001,
        0.999,
    );
    argument_handler.define_integer_argument(
        "max-decisions",
        "solver",
        "Hard cap on the number of decisions of the conflict-driven engine.",
        1_000_000,
        1,
        5_000_000,
    );
    argument_handler.define_integer_argument(
        "restart-base",
        "solver",
        "Number of conflicts after which the conflict-driven engine restarts.",
        100,
        1,
        1_000_000,
    );
    argument_handler.define_integer_argument(
        "decay-stride",
        "solver",
        "Number of conflicts between activity decay epochs.",
        50,
        1,
        1_000_000,
    );

    argument_handler.define_new_category("generation", "Random instance generation.");
    argument_handler.define_integer_argument(
        "num-variables",
        "generation",
        "Number of variables of a generated instance.",
        50,
        1,
        1_000_000,
    );
    argument_handler.define_float_argument(
        "clause-ratio",
        "generation",
        "Clause to variable ratio of a generated instance; 4.26 is the 3-SAT phase transition.",
        4.26,
        0.1,
        100.0,
    );
    argument_handler.define_integer_argument(
        "random-seed",
        "generation",
        "Seed for instance generation.",
        0,
        0,
        i64::MAX,
    );

    argument_handler
}
