//! # Error Taxonomy
//!
//! Two error categories expressed as distinct types:
//!
//! - [`CheckedError`]: expected outcomes the caller must branch on
//!   (under-age applicant, insufficient funds)
//! - [`UncheckedError`]: the caller broke the contract
//!   (non-positive price or age, malformed number)
//!
//! [`Failure`] joins both for functions that can fail either way.

pub mod account;
pub mod errors;

pub use account::*;
pub use errors::{CheckedError, Failure, UncheckedError};

use crate::error::VerifyResult;
use crate::registry::{BenchmarkClosure, TopicRunner};

pub struct TaxonomyRunner;

impl TopicRunner for TaxonomyRunner {
    fn name(&self) -> &'static str {
        "taxonomy"
    }

    fn description(&self) -> &'static str {
        "Checked versus unchecked error categories as distinct Result types"
    }

    fn category(&self) -> &'static str {
        "exceptions"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        Vec::new()
    }

    fn demonstrate(&self) -> Vec<String> {
        fn show<T: std::fmt::Debug, E: std::fmt::Display>(
            call: &str,
            result: Result<T, E>,
        ) -> String {
            match result {
                Ok(value) => format!("{call:<22} ok: {value:?}"),
                Err(e) => format!("{call:<22} err: {e}"),
            }
        }

        vec![
            show("validate_price(100)", validate_price(100.0)),
            show("validate_price(-1)", validate_price(-1.0)),
            show("withdraw(100, 80)", withdraw(100.0, 80.0)),
            show("withdraw(100, 120)", withdraw(100.0, 120.0)),
            show("register_user(15)", register_user(15)),
            show("register_user(-15)", register_user(-15)),
            show("approve_age(\"21\")", approve_age("21")),
            show("approve_age(\"16\")", approve_age("16")),
            show("approve_age(\"123a\")", approve_age("123a")),
        ]
    }

    fn verify(&self) -> VerifyResult {
        test::verify_all()
    }

    fn benchmark_closures(&self, _size: usize, _seed: u64) -> Vec<BenchmarkClosure<'static>> {
        Vec::new()
    }
}
