//! Operation dispatch implementations.
//!
//! Every strategy has the same signature and must agree with `original` on
//! every input, including which inputs fail.

pub mod c_impl;
mod fn_table;
mod original;

#[cfg(c_implementation_active)]
pub use c_impl::apply_c_switch;
pub use c_impl::C_IMPL_AVAILABLE;
pub use fn_table::apply_fn_table;
pub use original::{apply_original, Operation};

use crate::error::ArithmeticError;
use crate::utils::VariantInfo;

/// Behavior shared by every operation: combine two integers.
pub trait Calculator {
    fn apply(&self, a: i32, b: i32) -> Result<i32, ArithmeticError>;
}

impl Calculator for Operation {
    fn apply(&self, a: i32, b: i32) -> Result<i32, ArithmeticError> {
        apply_original(*self, a, b)
    }
}

/// Body of a single operation
pub type BinaryFn = fn(i32, i32) -> Result<i32, ArithmeticError>;

/// Full dispatcher: operation tag plus operands
pub type DispatchFn = fn(Operation, i32, i32) -> Result<i32, ArithmeticError>;

/// Returns all available variants; the first one is the reference.
pub fn available_variants() -> Vec<VariantInfo<DispatchFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<DispatchFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Rust exhaustive match expression",
            function: apply_original,
        },
        VariantInfo {
            name: "fn-table",
            description: "Constant array of function pointers indexed by discriminant",
            function: apply_fn_table,
        },
    ];

    #[cfg(c_implementation_active)]
    variants.push(VariantInfo {
        name: "c-switch",
        description: "C switch statement",
        function: apply_c_switch,
    });

    variants
}
