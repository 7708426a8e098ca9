use std::io;

use thiserror::Error;

/// Invalid-argument error raised by the core. Every variant is a precondition violation local to
/// the call that returned it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("gpa must be within [0.0, 4.0], got {0}")]
    GpaOutOfRange(f64),
    #[error("credits taken must be non-negative and fit in 32 bits, got {0}")]
    CreditsOutOfRange(i64),
    #[error("order must be 0 or 1, got {0}")]
    UnknownOrder(i64),
    #[error("unknown sorting algorithm: '{0}'")]
    UnknownAlgorithm(String),
    #[error("students must be non-empty")]
    EmptyInput,
    #[error("no order installed, call set_order before sort")]
    OrderNotSet,
}

/// Failure while reading "gpa credits" lines.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read students: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: invalid GPA format '{token}', expected a decimal number")]
    InvalidGpa { line: usize, token: String },
    #[error("line {line}: invalid credits format '{token}', expected an integer")]
    InvalidCredits { line: usize, token: String },
    #[error("line {line}: {source}")]
    Student { line: usize, source: Error },
    #[error("input is empty or contains no valid student data")]
    NoStudents,
}
