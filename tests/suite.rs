use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use superbench::workloads::{fft, sort};
use superbench::{
    register_workloads, BenchRunner, BenchRunnerConfig, ConsoleReporter, Sizes, SuiteResult,
};

const SMALL: Sizes = Sizes {
    mandelbrot_width: 2,
    mandelbrot_height: 2,
    mandelbrot_max_iter: 10,
    matmul_n: 2,
    fft_n: 4,
    blur_width: 4,
    blur_height: 4,
    sort_n: 5,
};

/// Collects what the console reporter writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn run_small(config: BenchRunnerConfig) -> (SuiteResult, Vec<String>) {
    let captured = Captured::default();
    let mut runner = BenchRunner::with_config("superbench", config);
    runner
        .reporters(vec![])
        .add_reporter(Box::new(ConsoleReporter::with_writer(captured.clone())));
    register_workloads(&mut runner, &SMALL).unwrap();
    let suite = runner.finish();
    (suite, captured.lines())
}

#[test]
fn should_run_all_six_workloads_in_order() {
    let (suite, _) = run_small(BenchRunnerConfig::new());

    let labels: Vec<_> = suite.results.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Mandelbrot", "MatMul", "FFT", "Blur", "Sort", "BigDataSum"]
    );

    let mut sorted = sort::random_values(SMALL.sort_n, sort::SEED);
    sorted.sort_unstable();

    assert_eq!(
        suite.checksums(),
        vec![
            13,
            19,
            fft::fft_checksum(4).unwrap(),
            4 * 128,
            u64::from(sorted[SMALL.sort_n / 2]),
            42,
        ]
    );
}

#[test]
fn should_total_the_six_timings() {
    let (suite, _) = run_small(BenchRunnerConfig::new());

    let sum: Duration = suite.results.iter().map(|r| r.duration).sum();
    assert_eq!(suite.results.len(), 6);
    assert_eq!(suite.total_duration, sum);
    assert!(suite.wall_duration >= suite.total_duration);
}

#[test]
fn should_print_header_six_lines_and_total() {
    let (suite, lines) = run_small(BenchRunnerConfig::new());

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "SuperBench Results:");
    assert!(lines[1].starts_with("  Mandelbrot: 13 ("));
    assert!(lines[2].starts_with("  MatMul:     19 ("));
    assert!(lines[6].starts_with("  BigDataSum: 42 ("));
    for line in &lines[1..7] {
        assert!(line.ends_with(" ms)"), "unexpected line: {line}");
    }
    assert_eq!(
        lines[7],
        format!("Total time:   {} ms", suite.total_duration.as_millis())
    );
}

#[test]
fn should_run_only_matching_workloads_when_filtered() {
    let (suite, lines) = run_small(BenchRunnerConfig::new().filter("fft"));

    assert_eq!(suite.results.len(), 1);
    assert_eq!(suite.get("fft").map(|r| r.label.as_str()), Some("FFT"));
    assert!(suite.get("sort").is_none());
    assert_eq!(lines.len(), 3);
}

#[test]
fn should_keep_checksums_stable_across_runs() {
    let (once, _) = run_small(BenchRunnerConfig::new());
    let (thrice, _) = run_small(BenchRunnerConfig::new().runs(3).warmup(1));

    assert_eq!(once.checksums(), thrice.checksums());
    assert!(thrice.results.iter().all(|r| r.all_runs.len() == 3));
    let blur = thrice.get("superbench/blur").unwrap();
    assert!(blur.min_duration() <= blur.duration);
    assert!(blur.duration <= blur.max_duration());
}

#[test]
fn should_stop_at_first_failing_workload() {
    let sizes = Sizes {
        fft_n: 6,
        ..SMALL
    };
    let mut runner = BenchRunner::with_config("superbench", BenchRunnerConfig::new());
    runner.reporters(vec![]);

    let err = register_workloads(&mut runner, &sizes).unwrap_err();
    assert!(format!("{err:#}").contains("power of two"));

    let suite = runner.finish();
    assert_eq!(suite.results.len(), 2);
    assert!(suite.get("matmul").is_some());
    assert!(suite.get("fft").is_none());
}
