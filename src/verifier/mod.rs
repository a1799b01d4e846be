mod solution_verifier;

pub use solution_verifier::SolutionVerifier;
