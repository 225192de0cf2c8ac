//! Cross-topic benchmark runs and CSV export.

use std::io::Write;
use std::path::Path;

use super::bench::{measure_closures, BenchmarkResult, TimingConfig};
use crate::registry::TopicRunner;

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub topic_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results indexed by `[topic][size]`, plus the flattened rows for CSV.
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Benchmark every topic at every size. Each `(topic, size)` pair gets its
/// own seed derived from `seed`, so a run is reproducible end to end.
pub fn run_topics(
    topics: &[&dyn TopicRunner],
    sizes: &[usize],
    config: &TimingConfig,
    seed: u64,
) -> GroupedResults {
    let mut results = Vec::with_capacity(topics.len());
    let mut raw_data = Vec::new();

    for (topic_idx, topic) in topics.iter().enumerate() {
        let mut per_size = Vec::with_capacity(sizes.len());

        for (size_idx, &size) in sizes.iter().enumerate() {
            let input_seed = seed
                .wrapping_add((topic_idx as u64) << 32)
                .wrapping_add(size_idx as u64);
            let closures = topic.benchmark_closures(size, input_seed);
            if closures.is_empty() {
                tracing::debug!(topic = topic.name(), "no strategies to benchmark");
                per_size.push(Vec::new());
                continue;
            }

            tracing::info!(topic = topic.name(), size, variants = closures.len(), "benchmarking");
            let measured = measure_closures(closures, config, input_seed);

            raw_data.extend(measured.iter().map(|r| RawTimingData {
                topic_name: topic.name().to_string(),
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_time.as_nanos() as u64,
                result_sample: r.result_sample,
            }));
            per_size.push(measured);
        }

        results.push(per_size);
    }

    GroupedResults { results, raw_data }
}

/// Export timing data to CSV file
pub fn export_csv(path: &Path, data: &[RawTimingData]) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_csv(&mut file, data)
}

fn write_csv<W: Write>(out: &mut W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "algorithm,variant,compiler,input_size,avg_time_ns,result")?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            out,
            "{},{},{},{},{},{}",
            entry.topic_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}
