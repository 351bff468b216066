//!
//! The benchmark ingest binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::prelude::*;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() -> anyhow::Result<()> {
    let arguments = Arguments::validate(Arguments::try_parse()?)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input_paths: Vec<PathBuf> =
        if arguments.input_paths.len() == 1 && arguments.input_paths[0].is_dir() {
            let resolution_pattern = format!(
                "{}/*",
                glob::Pattern::escape(arguments.input_paths[0].to_string_lossy().as_ref())
            );
            glob::glob(resolution_pattern.as_str())?
                .filter_map(Result::ok)
                .filter(|path| path.is_file())
                .collect()
        } else {
            arguments.input_paths
        };
    if input_paths.is_empty() {
        anyhow::bail!("No input files found. Use `--input-paths` to specify input files.");
    }
    let raws = input_paths
        .into_iter()
        .map(|path| {
            std::fs::read_to_string(path.as_path())
                .map_err(|error| anyhow::anyhow!("Input file {path:?} reading: {error}"))
        })
        .collect::<anyhow::Result<Vec<String>>>()?;

    let commit = benchmark_tracker::CommitRef::try_from(arguments.commit)?;
    let run = benchmark_tracker::Run::new(arguments.tool, raws, commit);
    let config = benchmark_tracker::DetectorConfig::new(
        arguments.threshold,
        arguments
            .direction
            .unwrap_or_else(|| arguments.tool.direction()),
    )?;
    let key = benchmark_tracker::HistoryKey::new(arguments.repository, arguments.suite);

    let store = benchmark_tracker::FileStore::new(arguments.store, arguments.store_format)
        .with_lock_timeout(Duration::from_secs(arguments.lock_timeout));
    let tracker = benchmark_tracker::Tracker::new(store, arguments.retries);
    let ingestion = tracker.ingest(&key, run, &config)?;

    let report = benchmark_tracker::Report::new(
        &key,
        &ingestion.entry,
        Some(ingestion.outcome),
        ingestion.comparisons,
    );
    let reports = [report];
    match arguments.output_file {
        Some(path) => {
            let mut file = std::fs::File::create(path.as_path())
                .map_err(|error| anyhow::anyhow!("Report file {path:?} creating: {error}"))?;
            benchmark_tracker::report::write_all(&reports, arguments.report_format, &mut file)?;
        }
        None => {
            let mut stdout = std::io::stdout();
            benchmark_tracker::report::write_all(&reports, arguments.report_format, &mut stdout)?;
        }
    }

    if arguments.fail_on_regression {
        let regressions: Vec<&str> = reports
            .iter()
            .flat_map(|report| report.regressions().map(|(name, _)| name))
            .collect();
        if !regressions.is_empty() {
            anyhow::bail!("Benchmarks regressed: {}", regressions.join(", "));
        }
    }

    Ok(())
}
