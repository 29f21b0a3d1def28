//! Suite entry points shared by the binary and tests.

use crate::workloads::{register_workloads, Sizes, WORKLOADS};
use crate::{BenchRunner, BenchRunnerConfig, SuiteResult};
use anyhow::Result;
use tracing::warn;

/// Suite name used in result names ("superbench/fft").
pub const SUITE_NAME: &str = "superbench";

/// Run the whole suite with the given config and sizes, using the default
/// reporter for `config.format`.
pub fn run_suite(config: BenchRunnerConfig, sizes: &Sizes) -> Result<SuiteResult> {
    let filtered = config.filter.is_some();
    let mut runner = BenchRunner::with_config(SUITE_NAME, config);
    register_workloads(&mut runner, sizes)?;
    let suite = runner.finish();
    if suite.results.is_empty() && filtered {
        warn!("no workloads matched the filter");
    }
    Ok(suite)
}

/// `(name, label)` of every registered workload, in execution order.
pub fn list_workloads() -> Vec<(&'static str, &'static str)> {
    WORKLOADS.iter().map(|w| (w.name, w.label)).collect()
}

/// Simple glob matching supporting `*`; without wildcards it is a substring
/// match. Case-insensitive.
pub(crate) fn matches_glob(text: &str, pattern: &str) -> bool {
    let pattern = pattern.to_lowercase();
    let text = text.to_lowercase();

    if !pattern.contains('*') {
        return text.contains(&pattern);
    }

    // Split by * and check that all parts appear in order
    let parts: Vec<&str> = pattern.split('*').collect();
    let mut remaining = text.as_str();

    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 {
            // First part must be at the start
            if !remaining.starts_with(part) {
                return false;
            }
            remaining = &remaining[part.len()..];
        } else if i == parts.len() - 1 {
            // Last part must be at the end
            if !remaining.ends_with(part) {
                return false;
            }
        } else if let Some(pos) = remaining.find(part) {
            remaining = &remaining[pos + part.len()..];
        } else {
            return false;
        }
    }
    true
}
