//! Rowmax command-line interface.
//!
//! Benchmark the max-row-sum problem with one of three strategies:
//! ```sh
//! rowmax sequential 4096 4096 1000
//! rowmax threaded 4096 4096 1000 8
//! rowmax distributed 4096 4096 1000 8
//! ```

mod runner;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rowmax")]
#[command(about = "Max-row-sum benchmark: sequential, shared-memory, and message-passing strategies")]
#[command(version)]
struct Cli {
    /// PRNG seed for the matrix fill.
    #[arg(long, default_value_t = 42, global = true)]
    seed: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Single-threaded baseline scan.
    Sequential {
        /// Number of matrix rows (N).
        n: usize,
        /// Number of matrix columns (M).
        m: usize,
        /// Benchmark iterations.
        #[arg(default_value_t = 100_000)]
        k: usize,
    },
    /// Shared-memory parallel scan (Rayon).
    Threaded {
        /// Number of matrix rows (N).
        n: usize,
        /// Number of matrix columns (M).
        m: usize,
        /// Benchmark iterations.
        #[arg(default_value_t = 100_000)]
        k: usize,
        /// Thread count (0 = one per core).
        #[arg(default_value_t = 0)]
        threads: usize,
    },
    /// Message-passing workers: scatter + value/index all-reduce.
    Distributed {
        /// Number of matrix rows (N).
        n: usize,
        /// Number of matrix columns (M).
        m: usize,
        /// Benchmark iterations.
        #[arg(default_value_t = 100_000)]
        k: usize,
        /// Worker count (0 = one per core).
        #[arg(default_value_t = 0)]
        workers: usize,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::try_parse().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        // Missing N or M is a usage error: print usage, exit code 1.
        let _ = err.print();
        std::process::exit(1);
    });

    match cli.command {
        Commands::Sequential { n, m, k } => runner::run_sequential(n, m, k, cli.seed),
        Commands::Threaded { n, m, k, threads } => {
            runner::run_threaded(n, m, k, threads, cli.seed)
        }
        Commands::Distributed { n, m, k, workers } => {
            runner::run_distributed(n, m, k, workers, cli.seed)
        }
    }
}
