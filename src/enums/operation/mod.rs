//! # Operation Dispatcher
//!
//! A closed set of binary integer operations where each variant supplies its
//! own behavior:
//!
//! - `Add`: `a + b`
//! - `Subtract`: `a - b`
//! - `Multiply`: `a * b`
//! - `Divide`: truncating `a / b`, failing with `DivisionByZero` when `b == 0`
//!
//! ## Strategies
//!
//! - **original**: exhaustive `match`, the compiler may lower it to a jump table
//! - **fn-table**: constant array of function pointers indexed by discriminant
//! - **c-switch**: C `switch` statement via FFI (when a supported C compiler is present)

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyResult;
use crate::registry::{BenchmarkClosure, TopicRunner};

pub struct OperationRunner;

impl TopicRunner for OperationRunner {
    fn name(&self) -> &'static str {
        "operation"
    }

    fn description(&self) -> &'static str {
        "Closed set of binary integer operations with per-variant behavior"
    }

    fn category(&self) -> &'static str {
        "enums"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn demonstrate(&self) -> Vec<String> {
        let (a, b) = (5, 3);
        let mut lines: Vec<String> = Operation::all()
            .iter()
            .map(|op| match op.apply(a, b) {
                Ok(value) => format!("{op:<8} {a} {} {b} = {value}", op.symbol()),
                Err(e) => format!("{op:<8} {a} {} {b} -> {e}", op.symbol()),
            })
            .collect();

        let op = Operation::Divide;
        lines.push(match op.apply(a, 0) {
            Ok(value) => format!("{op:<8} {a} {} 0 = {value}", op.symbol()),
            Err(e) => format!("{op:<8} {a} {} 0 -> {e}", op.symbol()),
        });
        lines
    }

    fn verify(&self) -> VerifyResult {
        test::verify_all()
    }

    fn benchmark_closures(&self, size: usize, seed: u64) -> Vec<BenchmarkClosure<'static>> {
        bench::closures(size, seed)
    }
}
