use thiserror::Error;

pub type LanternResult<T> = Result<T, LanternError>;

#[derive(Error, Debug)]
pub enum LanternError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to read file {1}, more details: {0}")]
    FileReadingError(std::io::Error, String),
    #[error("Invalid DIMACS header: {0}")]
    InvalidDimacsHeader(String),
    #[error("Literal {literal} is out of bounds for a formula with {num_variables} variables")]
    LiteralOutOfBounds { literal: i64, num_variables: u32 },
    #[error("The supplied path is not supported.")]
    InvalidInstanceFile,
    #[error("No file location given")]
    MissingFileError,
    #[error("The reported satisfying assignment does not satisfy the formula")]
    InconsistentSolution,
}
