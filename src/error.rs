//! Error types shared across topics.

use thiserror::Error;

/// Failure of an arithmetic dispatch.
///
/// `DivisionByZero` is the only way an [`Operation`](crate::enums::operation::Operation)
/// can fail; every other variant is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Returned by `FromStr` when a name does not match any variant of a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{input}' (expected one of: {expected})")]
pub struct ParseVariantError {
    pub kind: &'static str,
    pub input: String,
    pub expected: String,
}

impl ParseVariantError {
    pub(crate) fn new(kind: &'static str, input: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            input: input.to_string(),
            expected: expected.join(", "),
        }
    }
}

/// Failure reported by a topic's `verify()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A dispatch strategy disagrees with the reference strategy.
    #[error("variant '{variant}' failed for {input}: expected {expected}, got {actual}")]
    Mismatch {
        variant: &'static str,
        input: String,
        expected: String,
        actual: String,
    },

    /// The reference strategy itself breaks a documented invariant.
    #[error("invariant violated: {0}")]
    Invariant(String),

    #[error("no '{0}' variant found for reference")]
    MissingReference(&'static str),
}

pub type VerifyResult = Result<(), VerifyError>;
