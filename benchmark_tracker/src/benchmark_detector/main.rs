//!
//! The benchmark detector binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use tracing_subscriber::prelude::*;

use benchmark_tracker::IStore;

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

    let store = benchmark_tracker::FileStore::new(arguments.store, arguments.store_format);
    let keys = match arguments.repository {
        Some(repository) => vec![benchmark_tracker::HistoryKey::new(
            repository,
            arguments.suite,
        )],
        None => store.keys()?,
    };
    let tracker = benchmark_tracker::Tracker::new(store, 0);

    let mut reports = Vec::with_capacity(keys.len());
    for key in keys.iter() {
        let direction = match arguments.direction {
            Some(direction) => direction,
            None => tracker
                .store()
                .load(key)?
                .latest()
                .and_then(|entry| entry.tool.parse::<benchmark_tracker::Tool>().ok())
                .map(|tool| tool.direction())
                .unwrap_or_default(),
        };
        let config = benchmark_tracker::DetectorConfig::new(arguments.threshold, direction)?;

        let (entry, comparisons) =
            match tracker.detect(key, arguments.commit_id.as_deref(), &config) {
                Ok(detection) => detection,
                Err(benchmark_tracker::TrackerError::EmptyHistory(key)) if arguments.all => {
                    tracing::warn!("History {key} is empty, skipping");
                    continue;
                }
                Err(error) => Err(error)?,
            };
        reports.push(benchmark_tracker::Report::new(
            key,
            &entry,
            None,
            comparisons,
        ));
    }

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
        let regressions: Vec<String> = reports
            .iter()
            .flat_map(|report| {
                report
                    .regressions()
                    .map(move |(name, _)| format!("{name} in [{}]", report.suite))
            })
            .collect();
        if !regressions.is_empty() {
            anyhow::bail!("Benchmarks regressed: {}", regressions.join(", "));
        }
    }

    Ok(())
}
