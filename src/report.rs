//! Pluggable reporters for suite output.
//!
//! Reporters never panic: write errors are logged and dropped. Each call
//! writes complete lines so output cannot interleave mid-line.

use crate::config::BenchRunnerConfig;
use crate::result::{BenchResult, SuiteResult};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;
use tracing::warn;

/// Trait for suite result reporters.
pub trait Reporter: Send + Sync {
    /// Called when a suite starts.
    fn suite_start(&self, _suite: &str, _config: &BenchRunnerConfig) {}

    /// Called when a workload starts.
    fn bench_start(&self, _name: &str) {}

    /// Called when a workload completes.
    fn bench_end(&self, _result: &BenchResult) {}

    /// Called when a suite completes.
    fn suite_end(&self, _result: &SuiteResult) {}
}

/// Column width of `<label>:` in the text report.
const LABEL_WIDTH: usize = 11;

/// Header printed before the first result line.
pub const REPORT_HEADER: &str = "SuperBench Results:";

/// `  <Label>: <checksum> (<ms> ms)`, with the label column padded.
pub fn format_result_line(result: &BenchResult) -> String {
    format!(
        "  {:<width$} {} ({} ms)",
        format!("{}:", result.label),
        result.checksum,
        result.duration.as_millis(),
        width = LABEL_WIDTH
    )
}

/// `Total time:   <ms> ms`, aligned with the result lines.
pub fn format_total_line(result: &SuiteResult) -> String {
    format!(
        "{:<width$} {} ms",
        "Total time:",
        result.total_duration.as_millis(),
        width = LABEL_WIDTH + 2
    )
}

/// Format a duration with consistent units: ns, µs, ms, or s.
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos >= 1_000_000_000 {
        format!("{:.2}s", d.as_secs_f64())
    } else if nanos >= 1_000_000 {
        format!("{:.2}ms", d.as_secs_f64() * 1_000.0)
    } else if nanos >= 1_000 {
        format!("{:.2}µs", d.as_secs_f64() * 1_000_000.0)
    } else {
        format!("{}ns", nanos)
    }
}

/// Throughput string, empty if neither bytes nor elements are set.
/// Bytes take precedence.
pub fn format_throughput(result: &BenchResult) -> String {
    if let Some(bps) = result.bytes_per_sec() {
        if bps >= 1_000_000_000.0 {
            format!("{:.2} GB/s", bps / 1_000_000_000.0)
        } else if bps >= 1_000_000.0 {
            format!("{:.2} MB/s", bps / 1_000_000.0)
        } else if bps >= 1_000.0 {
            format!("{:.2} KB/s", bps / 1_000.0)
        } else {
            format!("{:.2} B/s", bps)
        }
    } else if let Some(eps) = result.elements_per_sec() {
        if eps >= 1_000_000.0 {
            format!("{:.2}M ops/s", eps / 1_000_000.0)
        } else if eps >= 1_000.0 {
            format!("{:.2}K ops/s", eps / 1_000.0)
        } else {
            format!("{:.0} ops/s", eps)
        }
    } else {
        String::new()
    }
}

/// Console reporter that prints the text report, to stdout unless another
/// writer is given.
pub struct ConsoleReporter {
    show_all_runs: bool,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::with_writer(std::io::stdout())
    }

    pub fn with_writer(out: impl Write + Send + 'static) -> Self {
        Self {
            show_all_runs: false,
            out: Mutex::new(Box::new(out)),
        }
    }

    /// Show individual run times and throughput on an indented line under
    /// each result.
    pub fn show_all_runs(mut self, show: bool) -> Self {
        self.show_all_runs = show;
        self
    }

    fn detail_line(result: &BenchResult) -> String {
        let runs: Vec<_> = result.all_runs.iter().map(|d| format_duration(*d)).collect();
        let mut line = format!("      runs: [{}]", runs.join(", "));
        if let Some(sd) = result.std_dev() {
            line.push_str(&format!(
                " ±{} min {} max {}",
                format_duration(sd),
                format_duration(result.min_duration()),
                format_duration(result.max_duration())
            ));
        }
        let throughput = format_throughput(result);
        if !throughput.is_empty() {
            line.push_str(&format!("  {}", throughput));
        }
        line
    }

    fn write_line(&self, message: &str) {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write report line");
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for ConsoleReporter {
    fn suite_start(&self, _suite: &str, _config: &BenchRunnerConfig) {
        self.write_line(REPORT_HEADER);
    }

    fn bench_end(&self, result: &BenchResult) {
        let mut line = format_result_line(result);
        if self.show_all_runs {
            line.push('\n');
            line.push_str(&Self::detail_line(result));
        }
        self.write_line(&line);
    }

    fn suite_end(&self, result: &SuiteResult) {
        self.write_line(&format_total_line(result));
    }
}

/// JSON reporter that writes the whole suite as one document when it ends.
pub struct JsonReporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl JsonReporter {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Pretty-printed JSON for a suite result.
    pub fn render(result: &SuiteResult) -> serde_json::Result<String> {
        serde_json::to_string_pretty(result)
    }
}

impl Reporter for JsonReporter {
    fn suite_end(&self, result: &SuiteResult) {
        let json = match Self::render(result) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "failed to serialize suite result");
                return;
            }
        };
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(out, "{}", json).and_then(|_| out.flush()) {
            warn!(error = %e, "failed to write JSON results");
        }
    }
}
