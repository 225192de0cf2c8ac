//! Command line front end for the topic registry.
//!
//! Usage:
//!   variants                       # Demonstrate every topic
//!   variants list                  # List available topics
//!   variants verify operation      # Verify one topic
//!   variants bench --sizes 64,1024 # Time the dispatch strategies
//!   variants apply divide 5 3      # Evaluate one operation
//!   variants status not_found      # Describe one status

use anyhow::Result;
use clap::Parser;
use closed_variants::cli::{init_tracing, run, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
