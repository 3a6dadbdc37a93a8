use crate::bench::BenchApp;
use crate::models::Benchmark;
use anyhow::Context as _;
use std::io::Write as _;

mod bench;
mod impls;
mod models;
mod utils;

fn main() -> anyhow::Result<()> {
    let app = BenchApp::new(Benchmark::default())?;
    let report = app.run();

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", report.rect).context("write summary")?;
    stdout.flush().context("flush stdout")?;

    eprintln!("{report}");
    Ok(())
}
