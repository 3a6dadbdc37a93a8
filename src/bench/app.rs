use crate::models::{Benchmark, Report};
use crate::utils::duration::DurExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::time::Instant;

pub struct BenchApp {
    benchmark: Benchmark,
    progress: ProgressBar,
}

impl BenchApp {
    pub fn new(benchmark: Benchmark) -> anyhow::Result<Self> {
        let progress_style = ProgressStyle::default_bar()
            .template("{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len} ({eta})")?
            .progress_chars("=>=");
        let progress = ProgressBar::new(benchmark.iterations);
        progress.set_style(progress_style);

        Ok(BenchApp {
            benchmark,
            progress,
        })
    }

    /// Folds every synthetic point into the start rectangle, one chunk at a time
    pub fn run(&self) -> Report {
        let bench = &self.benchmark;
        let started = Instant::now();

        let mut rect = bench.start;
        for chunk in bench.chunks() {
            let len = chunk.end - chunk.start;
            rect = bench.fold(rect, chunk);
            self.progress.inc(len);
        }

        let elapsed = started.elapsed();
        debug_assert!(rect.covers(&bench.start));
        self.progress.finish_and_clear();

        Report {
            rect,
            iterations: bench.iterations,
            elapsed,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} iterations in {:?} ({:?} per iteration)",
            self.iterations,
            self.elapsed,
            self.elapsed.per_iteration(self.iterations)
        )
    }
}
