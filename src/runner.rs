//! The suite runner.

use crate::config::{BenchRunnerConfig, OutputFormat};
use crate::context::BenchContext;
use crate::harness::matches_glob;
use crate::report::{ConsoleReporter, JsonReporter, Reporter};
use crate::result::{BenchResult, SuiteResult};
use anyhow::{bail, ensure, Context, Result};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Runs workloads one after another, timing each call and collecting its
/// checksum.
///
/// # Example
///
/// ```rust,no_run
/// use superbench::{BenchRunner, BenchRunnerConfig};
///
/// let mut runner = BenchRunner::with_config("demo", BenchRunnerConfig::new());
///
/// runner.run("blur", "Blur", |ctx| {
///     let sum = ctx.measure(|| superbench::workloads::blur::blur(256, 256));
///     ctx.set_checksum(sum);
///     Ok(())
/// })?;
///
/// let suite = runner.finish();
/// assert_eq!(suite.results.len(), 1);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct BenchRunner {
    suite: String,
    config: BenchRunnerConfig,
    results: Vec<BenchResult>,
    suite_start: Instant,
    started_at: String,
    started: bool,
    reporters: Vec<Box<dyn Reporter>>,
}

impl BenchRunner {
    /// Create a new runner with explicit config.
    ///
    /// The default reporter follows `config.format`: the text report for
    /// [`OutputFormat::Text`], a JSON document for [`OutputFormat::Json`].
    /// With `config.quiet` the text report is dropped.
    pub fn with_config(suite: &str, config: BenchRunnerConfig) -> Self {
        let reporters: Vec<Box<dyn Reporter>> = match config.format {
            OutputFormat::Text if config.quiet => Vec::new(),
            OutputFormat::Text => vec![Box::new(
                ConsoleReporter::new().show_all_runs(config.verbose),
            )],
            OutputFormat::Json => vec![Box::new(JsonReporter::stdout())],
        };

        Self {
            suite: suite.to_string(),
            config,
            results: Vec::new(),
            suite_start: Instant::now(),
            started_at: String::new(),
            started: false,
            reporters,
        }
    }

    /// Replace reporters with a custom set.
    pub fn reporters(&mut self, reporters: Vec<Box<dyn Reporter>>) -> &mut Self {
        self.reporters = reporters;
        self
    }

    /// Add an additional reporter.
    pub fn add_reporter(&mut self, reporter: Box<dyn Reporter>) -> &mut Self {
        self.reporters.push(reporter);
        self
    }

    fn should_run(&self, name: &str, label: &str) -> bool {
        match &self.config.filter {
            Some(f) => matches_glob(name, f) || matches_glob(label, f),
            None => true,
        }
    }

    /// Reporters see the suite start lazily, just before the first workload,
    /// so reporters swapped in after construction still get it.
    fn ensure_started(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.suite_start = Instant::now();
        self.started_at = unix_millis();
        info!(
            suite = %self.suite,
            runs = self.config.runs,
            warmup = self.config.warmup_runs,
            "suite started"
        );
        for r in &self.reporters {
            r.suite_start(&self.suite, &self.config);
        }
    }

    /// Run one workload.
    ///
    /// The closure must call `ctx.measure()` exactly once and record a
    /// checksum with `ctx.set_checksum()`. Errors from the closure abort the
    /// workload; so does a checksum that changes between measurement runs.
    pub fn run<F>(&mut self, name: &str, label: &str, f: F) -> Result<()>
    where
        F: Fn(&mut BenchContext) -> Result<()>,
    {
        if !self.should_run(name, label) {
            debug!(workload = name, "skipped by filter");
            return Ok(());
        }
        ensure!(self.config.runs > 0, "at least one measurement run is required");

        self.ensure_started();
        for r in &self.reporters {
            r.bench_start(name);
        }

        for _ in 0..self.config.warmup_runs {
            let mut ctx = BenchContext::new();
            f(&mut ctx).with_context(|| format!("warmup of workload '{}' failed", name))?;
        }

        let mut durations = Vec::with_capacity(self.config.runs);
        let mut checksum = None;
        let mut bytes = None;
        let mut elements = None;

        for run in 0..self.config.runs {
            let mut ctx = BenchContext::new();
            f(&mut ctx).with_context(|| format!("workload '{}' failed", name))?;

            let Some(d) = ctx.duration else {
                panic!(
                    "Workload '{}' did not call ctx.measure(). \
                     Every workload must measure exactly one call.",
                    name
                );
            };
            let Some(sum) = ctx.checksum else {
                panic!(
                    "Workload '{}' did not call ctx.set_checksum(). \
                     Every workload must report the checksum it computed.",
                    name
                );
            };

            match checksum {
                Some(first) if first != sum => bail!(
                    "workload '{}' is not deterministic: checksum {} on the first run, {} on run {}",
                    name,
                    first,
                    sum,
                    run + 1
                ),
                _ => checksum = Some(sum),
            }

            debug!(
                workload = name,
                run,
                checksum = sum,
                elapsed_us = d.as_micros() as u64,
                "run finished"
            );
            durations.push(d);
            bytes = ctx.bytes.or(bytes);
            elements = ctx.elements.or(elements);
        }

        // Report median
        durations.sort();
        let median = durations[durations.len() / 2];

        let result = BenchResult {
            name: format!("{}/{}", self.suite, name),
            label: label.to_string(),
            checksum: checksum.unwrap_or_default(),
            duration: median,
            bytes,
            elements,
            all_runs: durations,
        };

        for r in &self.reporters {
            r.bench_end(&result);
        }

        self.results.push(result);
        Ok(())
    }

    /// Finish the suite and return its results.
    pub fn finish(mut self) -> SuiteResult {
        self.ensure_started();
        let wall_duration = self.suite_start.elapsed();
        let total_duration: Duration = self.results.iter().map(|r| r.duration).sum();

        let suite_result = SuiteResult {
            suite: self.suite,
            results: self.results,
            total_duration,
            wall_duration,
            started_at: self.started_at,
            runs: self.config.runs,
            warmup_runs: self.config.warmup_runs,
            git_sha: self.config.git_sha,
        };

        for r in &self.reporters {
            r.suite_end(&suite_result);
        }
        info!(
            suite = %suite_result.suite,
            workloads = suite_result.results.len(),
            total_ms = suite_result.total_duration.as_millis() as u64,
            "suite finished"
        );

        suite_result
    }
}

fn unix_millis() -> String {
    let now = std::time::SystemTime::now();
    let duration = now
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}", duration.as_millis())
}
