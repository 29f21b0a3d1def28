//! Configuration for the benchmark runner.
//!
//! Only run control lives here. Workload sizes are fixed in
//! [`Sizes::REFERENCE`](crate::workloads::Sizes::REFERENCE).

use clap::ValueEnum;

/// How the suite result is rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per workload plus a total line.
    #[default]
    Text,
    /// A single JSON document at the end of the suite.
    Json,
}

/// Configuration for the benchmark runner.
#[derive(Debug, Clone)]
pub struct BenchRunnerConfig {
    /// Number of measurement runs (reports median).
    pub runs: usize,
    /// Warmup runs (discarded).
    pub warmup_runs: usize,
    /// Print per-run timings and throughput under each result line.
    pub verbose: bool,
    /// Suppress the text report; only the JSON document (if selected) is
    /// written.
    pub quiet: bool,
    /// Filter workloads by name or label (glob, case-insensitive).
    pub filter: Option<String>,
    /// Git SHA to include in JSON results.
    pub git_sha: Option<String>,
    /// Output rendering.
    pub format: OutputFormat,
}

impl Default for BenchRunnerConfig {
    fn default() -> Self {
        Self {
            runs: 1,
            warmup_runs: 0,
            verbose: false,
            quiet: false,
            filter: None,
            git_sha: None,
            format: OutputFormat::Text,
        }
    }
}

impl BenchRunnerConfig {
    /// Create a new config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config from environment variables.
    ///
    /// Supported variables:
    /// - `BENCH_RUNS`: measurement runs (default: 1)
    /// - `BENCH_WARMUP`: warmup runs (default: 0)
    /// - `BENCH_VERBOSE`: verbose output (default: false)
    /// - `BENCH_QUIET`: suppress the text report (default: false)
    /// - `BENCH_FILTER`: filter workloads by name
    /// - `BENCH_FORMAT`: `text` or `json`
    /// - `BENCH_GIT_SHA`: git commit hash
    pub fn from_env() -> Self {
        let mut cfg = Self::from_lookup(|key| std::env::var(key).ok());

        // Try to detect git SHA if not set
        if cfg.git_sha.is_none() {
            cfg.git_sha = detect_git_sha();
        }

        cfg
    }

    /// Build a config from an arbitrary variable source. Unparseable values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(n) = lookup("BENCH_RUNS").and_then(|v| v.parse().ok()) {
            cfg.runs = n;
        }
        if let Some(n) = lookup("BENCH_WARMUP").and_then(|v| v.parse().ok()) {
            cfg.warmup_runs = n;
        }
        if let Some(v) = lookup("BENCH_VERBOSE") {
            cfg.verbose = is_truthy(&v);
        }
        if let Some(v) = lookup("BENCH_QUIET") {
            cfg.quiet = is_truthy(&v);
        }
        if let Some(v) = lookup("BENCH_FILTER") {
            cfg.filter = Some(v);
        }
        if let Some(f) = lookup("BENCH_FORMAT").and_then(|v| OutputFormat::from_str(&v, true).ok())
        {
            cfg.format = f;
        }
        if let Some(v) = lookup("BENCH_GIT_SHA") {
            cfg.git_sha = Some(v);
        }

        cfg
    }

    /// Set the number of measurement runs.
    pub fn runs(mut self, n: usize) -> Self {
        self.runs = n;
        self
    }

    /// Set the number of warmup runs.
    pub fn warmup(mut self, n: usize) -> Self {
        self.warmup_runs = n;
        self
    }

    /// Set verbose output.
    pub fn verbose(mut self, v: bool) -> Self {
        self.verbose = v;
        self
    }

    /// Suppress the text report.
    pub fn quiet(mut self, q: bool) -> Self {
        self.quiet = q;
        self
    }

    /// Set filter pattern.
    pub fn filter(mut self, pattern: impl Into<String>) -> Self {
        self.filter = Some(pattern.into());
        self
    }

    /// Set git SHA.
    pub fn git_sha(mut self, sha: impl Into<String>) -> Self {
        self.git_sha = Some(sha.into());
        self
    }

    /// Set output format.
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

fn is_truthy(v: &str) -> bool {
    v != "0" && !v.eq_ignore_ascii_case("false")
}

fn detect_git_sha() -> Option<String> {
    std::process::Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}
