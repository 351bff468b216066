//!
//! The benchmark detector arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark detector arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// The history store root directory.
    #[arg(long)]
    pub store: PathBuf,

    /// The history file format: `json` or `data-js`.
    #[arg(long, default_value_t = benchmark_tracker::StoreFormat::Json)]
    pub store_format: benchmark_tracker::StoreFormat,

    /// The repository URL.
    #[arg(long)]
    pub repository: Option<String>,

    /// The suite label.
    #[arg(long, default_value = "Benchmark")]
    pub suite: String,

    /// The commit to classify. If unset, the most recently appended entry is classified.
    #[arg(long)]
    pub commit_id: Option<String>,

    /// Classifies the latest entry of every stored history.
    #[arg(long)]
    pub all: bool,

    /// The fractional change allowed before a benchmark is reported as changed.
    #[arg(long, default_value_t = 0.2)]
    pub threshold: f64,

    /// `smaller-is-better` or `bigger-is-better`. If unset, inferred from the tool of the
    /// latest entry of each history.
    #[arg(long)]
    pub direction: Option<benchmark_tracker::Direction>,

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
        match (arguments.all, arguments.repository.as_deref(), arguments.commit_id.as_deref()) {
            (true, Some(_), _) => {
                anyhow::bail!("The `--all` flag cannot be combined with `--repository`.")
            }
            (true, _, Some(_)) => {
                anyhow::bail!("The `--all` flag cannot be combined with `--commit-id`.")
            }
            (false, None, _) => {
                anyhow::bail!("Either `--repository` or `--all` must be passed.")
            }
            _ => {}
        }
        if !arguments.store.is_dir() {
            anyhow::bail!("History store directory {:?} does not exist.", arguments.store);
        }

        Ok(arguments)
    }
}
