//! Timing harness for comparing dispatch strategies.
//!
//! Every topic hands the harness a list of [`BenchmarkClosure`]s, one per
//! strategy. The harness warms each closure up, interleaves the measured runs
//! in a shuffled order so no strategy benefits from running last, and reduces
//! the raw samples to a [`BenchmarkResult`].

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Duration;

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup runs before measurement (default: 10)
    pub warmup_iterations: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
        }
    }
}

/// One strategy, ready to be measured.
///
/// `run` processes the whole prepared input once and returns the elapsed time
/// together with a checksum of the results. Timing happens inside the closure
/// so the harness overhead stays out of the measurement.
pub struct BenchmarkClosure<'a> {
    pub name: &'static str,
    pub description: &'static str,
    pub run: Box<dyn FnMut() -> (Duration, f64) + 'a>,
}

/// Aggregated timings of one strategy
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of measured runs
    pub runs: usize,
    /// Checksum of the last run, used to spot strategies that disagree
    pub result_sample: Option<f64>,
}

/// Time the body of `$e` and return `(elapsed, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = ::std::time::Instant::now();
        let value = ::std::hint::black_box($e);
        (start.elapsed(), value)
    }};
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Measure all closures with a shuffled execution order.
pub fn measure_closures(
    mut closures: Vec<BenchmarkClosure<'_>>,
    config: &TimingConfig,
    seed: u64,
) -> Vec<BenchmarkResult> {
    if closures.is_empty() {
        return Vec::new();
    }

    for closure in &mut closures {
        for _ in 0..config.warmup_iterations {
            black_box((closure.run)());
        }
    }

    let samples = config.runs_per_variant;
    let mut tasks: Vec<usize> = (0..closures.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    tasks.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut measurements: Vec<Vec<Duration>> = (0..closures.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; closures.len()];

    for idx in tasks {
        let (elapsed, result) = (closures[idx].run)();
        measurements[idx].push(elapsed);
        result_samples[idx] = Some(result);
    }

    closures
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((closure, times), sample)| {
            summarize(closure.name, closure.description, &times, sample)
        })
        .collect()
}

fn summarize(
    name: &str,
    description: &str,
    times: &[Duration],
    result_sample: Option<f64>,
) -> BenchmarkResult {
    let (avg, min, max, std_dev) = compute_stats(times);
    BenchmarkResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: avg,
        median_time: calculate_median(times),
        min_time: min,
        max_time: max,
        std_dev,
        runs: times.len(),
        result_sample,
    }
}

/// Compute `(avg, min, max, std_dev)` from a list of durations
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration, Duration) {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return (
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
        );
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;
    let std_dev = calculate_std_dev(times, avg);

    (avg, min, max, std_dev)
}

/// Sample standard deviation
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
