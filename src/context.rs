//! Per-run context handed to workload closures.

use std::time::{Duration, Instant};

/// Context passed to workload closures for timing control.
///
/// The closure must call [`measure`](Self::measure) exactly once around the
/// workload call and record the checksum it produced.
pub struct BenchContext {
    pub(crate) duration: Option<Duration>,
    pub(crate) checksum: Option<u64>,
    pub(crate) bytes: Option<u64>,
    pub(crate) elements: Option<u64>,
}

impl BenchContext {
    pub(crate) fn new() -> Self {
        Self {
            duration: None,
            checksum: None,
            bytes: None,
            elements: None,
        }
    }

    /// Record the checksum the workload produced.
    pub fn set_checksum(&mut self, checksum: u64) {
        self.checksum = Some(checksum);
    }

    /// Record bytes processed, for bytes/sec reporting.
    pub fn set_bytes(&mut self, bytes: u64) {
        self.bytes = Some(bytes);
    }

    /// Record elements processed, for ops/sec reporting.
    pub fn set_elements(&mut self, elements: u64) {
        self.elements = Some(elements);
    }

    /// Time a single call. Everything outside the closure is untimed.
    ///
    /// ```rust,no_run
    /// # use superbench::BenchContext;
    /// # fn example(ctx: &mut BenchContext) {
    /// let sum = ctx.measure(|| superbench::workloads::blur::blur(64, 64));
    /// ctx.set_checksum(sum);
    /// # }
    /// ```
    pub fn measure<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        self.duration = Some(start.elapsed());
        result
    }
}
