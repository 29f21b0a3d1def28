//! # superbench
//!
//! A single-threaded micro-benchmark suite of six independent numeric
//! workloads: escape-time fractal, naive matrix multiply, radix-2 FFT, 3×3
//! blur, comparison sort and a large static-buffer scan. Each workload is a
//! deterministic pure function that returns a checksum; the runner times the
//! call and reports checksum and elapsed milliseconds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use superbench::{run_suite, BenchRunnerConfig, Sizes};
//!
//! let suite = run_suite(BenchRunnerConfig::from_env(), &Sizes::REFERENCE)?;
//! println!("{} workloads, {:?}", suite.results.len(), suite.total_duration);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Running a single workload by hand:
//!
//! ```rust
//! use superbench::workloads::matmul::matmul;
//!
//! assert_eq!(matmul(2), 19);
//! ```

mod config;
mod context;
mod harness;
mod report;
mod result;
mod runner;

pub mod rng;
pub mod workloads;

pub use config::{BenchRunnerConfig, OutputFormat};
pub use context::BenchContext;
pub use harness::{list_workloads, run_suite, SUITE_NAME};
pub use report::{
    format_duration, format_result_line, format_throughput, format_total_line, ConsoleReporter,
    JsonReporter, Reporter, REPORT_HEADER,
};
pub use result::{BenchResult, SuiteResult};
pub use runner::BenchRunner;
pub use workloads::{register_workloads, Sizes, Workload, WORKLOADS};
