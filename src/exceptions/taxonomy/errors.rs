//! The two error categories.
//!
//! `CheckedError` is part of a function's normal outcome and the caller is
//! expected to branch on it. `UncheckedError` means the caller broke the
//! function's contract; callers usually propagate it with `?` and stop.

use std::num::ParseIntError;
use thiserror::Error;

/// Recoverable, expected failures ("caller must handle")
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckedError {
    #[error("{0}")]
    UnderAge(String),

    #[error("Sorry, Your balance is not enough. (requested {requested}, balance {balance})")]
    InsufficientFunds { requested: f64, balance: f64 },
}

/// Contract violations by the caller ("caller may ignore")
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UncheckedError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid Age: {0}")]
    InvalidAge(i32),

    #[error("not a number: {0}")]
    NumberFormat(#[from] ParseIntError),
}

/// Either category, for functions that can fail both ways
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Failure {
    #[error(transparent)]
    Checked(#[from] CheckedError),

    #[error(transparent)]
    Unchecked(#[from] UncheckedError),
}

impl Failure {
    pub fn is_checked(&self) -> bool {
        matches!(self, Failure::Checked(_))
    }
}

impl From<ParseIntError> for Failure {
    fn from(e: ParseIntError) -> Self {
        Failure::Unchecked(UncheckedError::NumberFormat(e))
    }
}
