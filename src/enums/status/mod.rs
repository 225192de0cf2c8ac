//! # Status Catalog
//!
//! A closed set of request statuses. Each variant owns an immutable
//! `(code, message)` pair:
//!
//! | Status     | Code | Message                 |
//! |------------|------|-------------------------|
//! | `Pending`  | 0    | (none)                  |
//! | `Success`  | 200  | `Operation successful.` |
//! | `Error`    | 500  | `Internal error.`       |
//! | `NotFound` | 404  | `Not found.`            |
//!
//! ## Strategies
//!
//! - **original**: constant table indexed by the enum discriminant
//! - **match**: exhaustive `match`, checked by the compiler

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyResult;
use crate::registry::{BenchmarkClosure, TopicRunner};

pub struct StatusRunner;

impl TopicRunner for StatusRunner {
    fn name(&self) -> &'static str {
        "status"
    }

    fn description(&self) -> &'static str {
        "Closed status set carrying a fixed code and message per variant"
    }

    fn category(&self) -> &'static str {
        "enums"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn demonstrate(&self) -> Vec<String> {
        let mut lines: Vec<String> = Status::all()
            .iter()
            .map(|status| format!("{:<9} #{} -> {}", status, status.ordinal(), status.describe()))
            .collect();
        lines.push(String::new());
        lines.push(Status::Success.client_response());
        lines
    }

    fn verify(&self) -> VerifyResult {
        test::verify_all()
    }

    fn benchmark_closures(&self, size: usize, seed: u64) -> Vec<BenchmarkClosure<'static>> {
        bench::closures(size, seed)
    }
}
