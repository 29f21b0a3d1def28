//! superbench: run the fixed workload sequence and print checksums and
//! timings.
//!
//! With no arguments it prints the text report for the reference sizes:
//!
//! ```text
//! SuperBench Results:
//!   Mandelbrot: <checksum> (<ms> ms)
//!   ...
//! Total time:   <ms> ms
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `SUPERBENCH_LOG` (or
//! `RUST_LOG`) to a filter such as `superbench=debug`.

use anyhow::Result;
use clap::Parser;
use superbench::{list_workloads, run_suite, BenchRunnerConfig, OutputFormat, Sizes};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(
    name = "superbench",
    about = "Run the numeric micro-benchmark suite",
    long_about = "
Runs six single-threaded workloads in a fixed order (Mandelbrot, MatMul,
FFT, Blur, Sort, BigDataSum) at fixed sizes, printing each checksum and
its elapsed milliseconds, followed by the total.

Example:
    superbench                       # Full suite, text report
    superbench --workload 'fft'      # One workload
    superbench --runs 5 --warmup 1   # Median of five runs
    superbench --format json         # Machine-readable output
"
)]
struct Cli {
    /// Filter workloads by glob pattern over name or label (e.g. "fft", "m*")
    #[arg(long)]
    workload: Option<String>,

    /// Number of measurement runs per workload (reports median)
    #[arg(long)]
    runs: Option<usize>,

    /// Number of warmup runs (discarded, not reported)
    #[arg(long)]
    warmup: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// List workloads without running them
    #[arg(long)]
    list: bool,

    /// Show individual runs and throughput; debug diagnostics
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Suppress the text report; only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    if cli.list {
        for (name, label) in list_workloads() {
            println!("  {:<12} {}", name, label);
        }
        return Ok(());
    }

    let mut config = BenchRunnerConfig::from_env();
    if let Some(pattern) = cli.workload {
        config = config.filter(pattern);
    }
    if let Some(r) = cli.runs {
        config = config.runs(r);
    }
    if let Some(w) = cli.warmup {
        config = config.warmup(w);
    }
    if let Some(f) = cli.format {
        config = config.format(f);
    }
    if cli.verbose {
        config = config.verbose(true);
    }
    if cli.quiet {
        config = config.quiet(true);
    }

    run_suite(config, &Sizes::REFERENCE)?;
    Ok(())
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.verbose {
        EnvFilter::new("superbench=debug")
    } else if cli.quiet {
        EnvFilter::new("error")
    } else {
        std::env::var("SUPERBENCH_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .and_then(|expr| EnvFilter::try_new(expr).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}
