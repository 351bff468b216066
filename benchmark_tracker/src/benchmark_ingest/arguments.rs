//!
//! The benchmark ingest arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark ingest arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// The tool that produced the outputs: `cargo`, `go`, `benchmarkjs`,
    /// `customSmallerIsBetter`, or `customBiggerIsBetter`.
    #[arg(long)]
    pub tool: benchmark_tracker::Tool,

    /// Raw output files of one run.
    /// If only one path is provided and it is a directory, every file inside is read.
    #[arg(long, num_args = 1.., required = true)]
    pub input_paths: Vec<PathBuf>,

    /// The JSON file describing the benchmarked commit.
    #[arg(long)]
    pub commit: PathBuf,

    /// The repository URL.
    #[arg(long)]
    pub repository: String,

    /// The suite label.
    #[arg(long, default_value = "Benchmark")]
    pub suite: String,

    /// The history store root directory.
    #[arg(long)]
    pub store: PathBuf,

    /// The history file format: `json` or `data-js`.
    #[arg(long, default_value_t = benchmark_tracker::StoreFormat::Json)]
    pub store_format: benchmark_tracker::StoreFormat,

    /// The fractional change allowed before a benchmark is reported as changed.
    #[arg(long, default_value_t = 0.2)]
    pub threshold: f64,

    /// `smaller-is-better` or `bigger-is-better`. If unset, inferred from the tool.
    #[arg(long)]
    pub direction: Option<benchmark_tracker::Direction>,

    /// The number of restarts of a failed load-merge-save sequence.
    #[arg(long, default_value_t = benchmark_tracker::Tracker::<benchmark_tracker::FileStore>::DEFAULT_RETRIES)]
    pub retries: usize,

    /// Seconds to wait for a history file locked by another process.
    #[arg(long, default_value_t = benchmark_tracker::FileStore::DEFAULT_LOCK_TIMEOUT.as_secs())]
    pub lock_timeout: u64,

    /// The report format: `text` or `json`.
    #[arg(long, default_value_t = benchmark_tracker::ReportFormat::Text)]
    pub report_format: benchmark_tracker::ReportFormat,

    /// The report file. If unset, the report is printed to `stdout`.
    #[arg(short, long)]
    pub output_file: Option<PathBuf>,

    /// Exits with an error if any benchmark regressed.
    #[arg(long)]
    pub fail_on_regression: bool,
}

impl Arguments {
    ///
    /// Validates the arguments.
    ///
    pub fn validate(arguments: Self) -> anyhow::Result<Self> {
        if arguments.repository.trim().is_empty() {
            anyhow::bail!("The repository URL passed with `--repository` must not be empty.");
        }
        if arguments.suite.trim().is_empty() {
            anyhow::bail!("The suite label passed with `--suite` must not be empty.");
        }
        if arguments.store.is_file() {
            anyhow::bail!(
                "Expected a directory as the history store, but got a file: {:?}",
                arguments.store
            );
        }

        Ok(arguments)
    }
}
