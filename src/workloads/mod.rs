//! The six benchmark workloads and their registration.
//!
//! Every workload is a pure function of explicit dimensions. The wrappers in
//! this module only time the call and hand the checksum to the runner.

pub mod blur;
pub mod fft;
pub mod mandelbrot;
pub mod matmul;
pub mod scan;
pub mod sort;

use crate::{BenchContext, BenchRunner};
use anyhow::Result;
use std::hint::black_box;

/// Input dimensions for every workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizes {
    pub mandelbrot_width: usize,
    pub mandelbrot_height: usize,
    pub mandelbrot_max_iter: u32,
    pub matmul_n: usize,
    pub fft_n: usize,
    pub blur_width: usize,
    pub blur_height: usize,
    pub sort_n: usize,
}

impl Sizes {
    /// The fixed sizes the suite is published with.
    pub const REFERENCE: Sizes = Sizes {
        mandelbrot_width: 800,
        mandelbrot_height: 800,
        mandelbrot_max_iter: 1000,
        matmul_n: 256,
        fft_n: 2048,
        blur_width: 1024,
        blur_height: 1024,
        sort_n: 2 * 1024 * 1024,
    };
}

impl Default for Sizes {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// A registered workload.
pub struct Workload {
    /// Short name used in result names and filters
    pub name: &'static str,
    /// Label printed in the text report
    pub label: &'static str,
    /// Times the workload and records its checksum
    pub func: fn(&mut BenchContext, &Sizes) -> Result<()>,
}

/// All workloads, in execution order.
pub const WORKLOADS: [Workload; 6] = [
    Workload {
        name: "mandelbrot",
        label: "Mandelbrot",
        func: run_mandelbrot,
    },
    Workload {
        name: "matmul",
        label: "MatMul",
        func: run_matmul,
    },
    Workload {
        name: "fft",
        label: "FFT",
        func: run_fft,
    },
    Workload {
        name: "blur",
        label: "Blur",
        func: run_blur,
    },
    Workload {
        name: "sort",
        label: "Sort",
        func: run_sort,
    },
    Workload {
        name: "scan",
        label: "BigDataSum",
        func: run_scan,
    },
];

/// Run every workload on `runner`, in order.
pub fn register_workloads(runner: &mut BenchRunner, sizes: &Sizes) -> Result<()> {
    for workload in &WORKLOADS {
        runner.run(workload.name, workload.label, |ctx| (workload.func)(ctx, sizes))?;
    }
    Ok(())
}

fn run_mandelbrot(ctx: &mut BenchContext, sizes: &Sizes) -> Result<()> {
    let (w, h, max_iter) = (
        sizes.mandelbrot_width,
        sizes.mandelbrot_height,
        sizes.mandelbrot_max_iter,
    );
    ctx.set_elements((w * h) as u64);
    let sum = ctx.measure(|| {
        mandelbrot::mandelbrot(black_box(w), black_box(h), black_box(max_iter))
    });
    ctx.set_checksum(sum);
    Ok(())
}

fn run_matmul(ctx: &mut BenchContext, sizes: &Sizes) -> Result<()> {
    let n = sizes.matmul_n;
    // multiply-adds
    ctx.set_elements((n * n * n) as u64);
    let sum = ctx.measure(|| matmul::matmul(black_box(n)));
    ctx.set_checksum(sum);
    Ok(())
}

fn run_fft(ctx: &mut BenchContext, sizes: &Sizes) -> Result<()> {
    let n = sizes.fft_n;
    ctx.set_elements(n as u64);
    let sum = ctx.measure(|| fft::fft_checksum(black_box(n)))?;
    ctx.set_checksum(sum);
    Ok(())
}

fn run_blur(ctx: &mut BenchContext, sizes: &Sizes) -> Result<()> {
    let (w, h) = (sizes.blur_width, sizes.blur_height);
    ctx.set_elements((w * h) as u64);
    let sum = ctx.measure(|| blur::blur(black_box(w), black_box(h)));
    ctx.set_checksum(sum);
    Ok(())
}

fn run_sort(ctx: &mut BenchContext, sizes: &Sizes) -> Result<()> {
    let n = sizes.sort_n;
    ctx.set_elements(n as u64);
    let median = ctx.measure(|| sort::sort_median(black_box(n)))?;
    ctx.set_checksum(median);
    Ok(())
}

fn run_scan(ctx: &mut BenchContext, _sizes: &Sizes) -> Result<()> {
    ctx.set_bytes(scan::BIG_DATA_LEN as u64);
    let sum = ctx.measure(scan::static_scan);
    ctx.set_checksum(sum);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_register_workloads_in_reference_order() {
        let labels: Vec<_> = WORKLOADS.iter().map(|w| w.label).collect();
        assert_eq!(
            labels,
            vec!["Mandelbrot", "MatMul", "FFT", "Blur", "Sort", "BigDataSum"]
        );
    }

    #[test]
    fn should_keep_reference_fft_size_a_power_of_two() {
        assert!(Sizes::REFERENCE.fft_n.is_power_of_two());
        assert_eq!(Sizes::default(), Sizes::REFERENCE);
    }

    #[test]
    fn should_record_checksum_and_timing_when_workload_runs() {
        let sizes = Sizes {
            blur_width: 5,
            blur_height: 5,
            ..Sizes::REFERENCE
        };
        let mut ctx = BenchContext::new();
        run_blur(&mut ctx, &sizes).unwrap();
        assert_eq!(ctx.checksum, Some(9 * 128));
        assert!(ctx.duration.is_some());
        assert_eq!(ctx.elements, Some(25));
    }

    #[test]
    fn should_fail_fft_workload_when_size_is_not_power_of_two() {
        let sizes = Sizes {
            fft_n: 1000,
            ..Sizes::REFERENCE
        };
        let mut ctx = BenchContext::new();
        assert!(run_fft(&mut ctx, &sizes).is_err());
        assert!(ctx.checksum.is_none());
    }
}
