//! Reference implementation using an exhaustive match expression.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArithmeticError, ParseVariantError};

/// Binary integer operation.
///
/// Arithmetic wraps on overflow, so `Add`, `Subtract` and `Multiply` are total
/// and `Divide` fails only on a zero divisor (`i32::MIN / -1` wraps to `i32::MIN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn all() -> &'static [Operation] {
        &Self::ALL
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// `a <op> b`, failing with [`ArithmeticError::DivisionByZero`] for `Divide` when `b == 0`.
    pub fn apply(self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        apply_original(self, a, b)
    }
}

#[inline(never)]
pub fn apply_original(op: Operation, a: i32, b: i32) -> Result<i32, ArithmeticError> {
    match op {
        Operation::Add => Ok(a.wrapping_add(b)),
        Operation::Subtract => Ok(a.wrapping_sub(b)),
        Operation::Multiply => Ok(a.wrapping_mul(b)),
        Operation::Divide if b == 0 => Err(ArithmeticError::DivisionByZero),
        Operation::Divide => Ok(a.wrapping_div(b)),
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseVariantError;

    /// Accepts the name in any case or the operator symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| {
                op.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.chars().eq(std::iter::once(op.symbol()))
            })
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|op| op.name()).collect();
                ParseVariantError::new("operation", s, &names)
            })
    }
}
