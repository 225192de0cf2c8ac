//! Command line interface: argument types and subcommand handlers.

use crate::registry::{build_registry, TopicRegistry, TopicRunner};
use crate::utils::{runner, time_seed, TimingConfig};
use crate::{tui, Operation, Status};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "variants")]
#[command(about = "Closed-set enums with per-variant behavior", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available topics
    List,
    /// Print each topic's demonstration
    Demo(TopicFilter),
    /// Check every strategy of each topic against its reference
    Verify(TopicFilter),
    /// Time the dispatch strategies of each topic
    Bench(BenchArgs),
    /// Evaluate a single operation
    Apply {
        /// Operation name or symbol (add, subtract, multiply, divide, + - * /)
        op: Operation,
        #[arg(allow_hyphen_values = true)]
        a: i32,
        #[arg(allow_hyphen_values = true)]
        b: i32,
    },
    /// Describe a single status
    Status {
        /// Status name (pending, success, error, not_found)
        status: Status,
    },
}

#[derive(Args, Debug)]
pub struct TopicFilter {
    /// Name of a specific topic (omit for all)
    pub topic: Option<String>,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Name of a specific topic (omit for all)
    pub topic: Option<String>,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096")]
    pub sizes: Vec<usize>,

    /// Measured runs per variant
    #[arg(short, long, default_value_t = 30)]
    pub runs: usize,

    /// Warmup runs per variant
    #[arg(long, default_value_t = 10)]
    pub warmup: usize,

    /// Random seed for reproducible inputs and ordering (default: time-based)
    #[arg(long, env = "VARIANTS_SEED")]
    pub seed: Option<u64>,

    /// Export raw timings to CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

/// Install the stderr subscriber; `-v` raises the default level.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch a parsed command line. No subcommand means `demo` for every topic.
pub fn run(cli: Cli) -> Result<()> {
    let registry = build_registry();

    match cli
        .command
        .unwrap_or(Commands::Demo(TopicFilter { topic: None }))
    {
        Commands::List => tui::print_available_topics(&registry),
        Commands::Demo(filter) => {
            let topics = select(&registry, filter.topic.as_deref())?;
            tui::print_header("Closed-Variants");
            for topic in topics {
                tui::print_demonstration(topic);
            }
        }
        Commands::Verify(filter) => verify(&select(&registry, filter.topic.as_deref())?)?,
        Commands::Bench(args) => bench(&registry, args)?,
        Commands::Apply { op, a, b } => println!("{}", apply(op, a, b)?),
        Commands::Status { status } => {
            println!("{}", status.describe());
            println!("{}", status.client_response());
        }
    }

    Ok(())
}

fn apply(op: Operation, a: i32, b: i32) -> Result<i32> {
    op.apply(a, b)
        .with_context(|| format!("{op} {a} {} {b}", op.symbol()))
}

fn select<'a>(registry: &'a TopicRegistry, name: Option<&str>) -> Result<Vec<&'a dyn TopicRunner>> {
    let topics = registry.select(name);
    if topics.is_empty() {
        bail!(
            "topic '{}' not found (available: {})",
            name.unwrap_or_default(),
            registry.list_names().join(", ")
        );
    }
    Ok(topics)
}

fn verify(topics: &[&dyn TopicRunner]) -> Result<()> {
    let mut failures = 0;
    for topic in topics {
        match topic.verify() {
            Ok(()) => println!("  ✅ Topic '{}' passed verification", topic.name()),
            Err(e) => {
                tracing::error!(topic = topic.name(), error = %e, "verification failed");
                println!("  ❌ Topic '{}' failed verification: {}", topic.name(), e);
                failures += 1;
            }
        }
    }
    if failures > 0 {
        bail!("{failures} topic(s) failed verification");
    }
    Ok(())
}

fn bench(registry: &TopicRegistry, args: BenchArgs) -> Result<()> {
    let topics = select(registry, args.topic.as_deref())?;
    let seed = args.seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: args.runs.max(1),
        warmup_iterations: args.warmup,
    };
    tracing::info!(seed, ?config, sizes = ?args.sizes, "starting benchmark");

    tui::print_header("Closed-Variants Dispatch Benchmarks");
    let grouped = runner::run_topics(&topics, &args.sizes, &config, seed);

    if let Some(path) = &args.csv {
        runner::export_csv(path, &grouped.raw_data)
            .with_context(|| format!("failed to export CSV to {}", path.display()))?;
        println!("  Raw data exported to: {}", path.display());
        println!();
    }

    tui::print_grouped_results(&topics, &args.sizes, &grouped.results);
    println!("Seed: {seed}");
    println!("Note: Speedup is relative to the first variant (usually 'original').");
    Ok(())
}
