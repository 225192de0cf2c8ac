//! Utility modules for benchmarking and terminal output.

pub mod bench;
pub mod runner;
pub mod tui;

pub use bench::{measure_closures, time_seed, BenchmarkClosure, BenchmarkResult, TimingConfig};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an implementation strategy.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "fn-table")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
