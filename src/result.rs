//! Benchmark result types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of a single workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResult {
    /// Full name including suite: "suite/workload"
    pub name: String,
    /// Human-readable label used in the text report
    pub label: String,
    /// Checksum produced by the workload (identical across runs)
    pub checksum: u64,
    /// Measured duration (median if multiple runs)
    #[serde(with = "duration_serde")]
    pub duration: Duration,
    /// Bytes processed (for throughput calculation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<u64>,
    /// Elements/operations processed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<u64>,
    /// All individual run durations, sorted ascending
    #[serde(with = "duration_vec_serde")]
    pub all_runs: Vec<Duration>,
}

impl BenchResult {
    /// Calculate bytes per second throughput.
    pub fn bytes_per_sec(&self) -> Option<f64> {
        self.bytes.map(|b| b as f64 / self.duration.as_secs_f64())
    }

    /// Calculate elements per second throughput.
    pub fn elements_per_sec(&self) -> Option<f64> {
        self.elements
            .map(|e| e as f64 / self.duration.as_secs_f64())
    }

    /// Get minimum duration across all runs.
    pub fn min_duration(&self) -> Duration {
        self.all_runs.iter().copied().min().unwrap_or(self.duration)
    }

    /// Get maximum duration across all runs.
    pub fn max_duration(&self) -> Duration {
        self.all_runs.iter().copied().max().unwrap_or(self.duration)
    }

    /// Get standard deviation of durations.
    pub fn std_dev(&self) -> Option<Duration> {
        if self.all_runs.len() < 2 {
            return None;
        }
        let mean =
            self.all_runs.iter().map(|d| d.as_secs_f64()).sum::<f64>() / self.all_runs.len() as f64;
        let variance = self
            .all_runs
            .iter()
            .map(|d| {
                let diff = d.as_secs_f64() - mean;
                diff * diff
            })
            .sum::<f64>()
            / (self.all_runs.len() - 1) as f64;
        Some(Duration::from_secs_f64(variance.sqrt()))
    }
}

/// Results for an entire suite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    /// Suite name
    pub suite: String,
    /// Individual results, in execution order
    pub results: Vec<BenchResult>,
    /// Sum of the reported workload durations
    #[serde(with = "duration_serde")]
    pub total_duration: Duration,
    /// Wall-clock time from suite start to finish, reporting included
    #[serde(with = "duration_serde")]
    pub wall_duration: Duration,
    /// Unix timestamp (milliseconds) when the suite started
    pub started_at: String,
    /// Measurement runs per workload
    pub runs: usize,
    /// Warmup runs per workload
    pub warmup_runs: usize,
    /// Git commit hash (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_sha: Option<String>,
}

impl SuiteResult {
    /// Look up a result by workload name (with or without the suite prefix).
    pub fn get(&self, name: &str) -> Option<&BenchResult> {
        self.results.iter().find(|r| {
            r.name == name || r.name.rsplit('/').next() == Some(name)
        })
    }

    /// Checksums in execution order.
    pub fn checksums(&self) -> Vec<u64> {
        self.results.iter().map(|r| r.checksum).collect()
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        d.as_nanos().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let nanos = u128::deserialize(d)?;
        Ok(Duration::from_nanos(nanos as u64))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(v: &[Duration], s: S) -> Result<S::Ok, S::Error> {
        v.iter()
            .map(|d| d.as_nanos())
            .collect::<Vec<_>>()
            .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Duration>, D::Error> {
        let nanos: Vec<u128> = Vec::deserialize(d)?;
        Ok(nanos
            .into_iter()
            .map(|n| Duration::from_nanos(n as u64))
            .collect())
    }
}
