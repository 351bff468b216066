//!
//! The detection report.
//!


pub mod format;

use colored::Colorize;
use serde::Serialize;

use crate::detector::comparison::Comparison;
use crate::detector::verdict::Verdict;
use crate::detector::Detection;
use crate::merger::outcome::Outcome;
use crate::model::entry::Entry;
use crate::model::key::HistoryKey;
use crate::model::range;

use self::format::Format;

/// The inner width of the text table.
const WIDTH: usize = 78;

///
/// The detection report of one commit entry.
///
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// The repository URL.
    pub repository: String,
    /// The suite label.
    pub suite: String,
    /// The classified commit.
    pub commit_id: String,
    /// The merge outcome, if the entry has just been ingested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// The comparisons by benchmark name.
    pub comparisons: Detection,
}

impl Report {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        key: &HistoryKey,
        entry: &Entry,
        outcome: Option<Outcome>,
        comparisons: Detection,
    ) -> Self {
        Self {
            repository: key.repository.clone(),
            suite: key.suite.clone(),
            commit_id: entry.commit_id().to_owned(),
            outcome,
            comparisons,
        }
    }

    ///
    /// Returns the regressed benchmarks.
    ///
    pub fn regressions(&self) -> impl Iterator<Item = (&str, &Comparison)> {
        self.comparisons
            .iter()
            .filter(|(_name, comparison)| comparison.verdict == Verdict::Regressed)
            .map(|(name, comparison)| (name.as_str(), comparison))
    }

    ///
    /// Whether any benchmark regressed.
    ///
    pub fn has_regressions(&self) -> bool {
        self.regressions().next().is_some()
    }

    ///
    /// Writes the report as a colored table.
    ///
    pub fn write_text<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        let title = format!("{} [{}]", self.repository, self.suite);
        let commit = match self.outcome {
            Some(outcome) => format!("{} ({outcome})", self.commit_id),
            None => self.commit_id.clone(),
        };
        writeln!(
            w,
            "╔═╡ {} ╞{}╡ {} ╞═╗",
            title.bright_white(),
            "═".repeat(WIDTH.saturating_sub(title.chars().count() + commit.chars().count() + 10)),
            commit.bright_white()
        )?;

        for (name, comparison) in self.comparisons.iter() {
            let latest = &comparison.latest;
            let current = format!(
                "{} {} {}",
                latest.value,
                range::format(latest.dispersion),
                latest.unit
            );
            let change = match comparison.ratio() {
                Some(ratio) => format!("{:+8.2}%", (ratio - 1.0) * 100.0),
                None => format!("{:>9}", "new"),
            };
            let verdict = format!("{:>20}", comparison.verdict.to_string());
            let verdict = match comparison.verdict {
                Verdict::Regressed => verdict.bright_red(),
                Verdict::Improved => verdict.green(),
                Verdict::Stable => verdict.white(),
                Verdict::InsufficientHistory => verdict.bright_white(),
            };
            writeln!(w, "║ {:44} {:>30} ║", name.bright_white(), current)?;
            writeln!(w, "║ {:46} {change} {verdict} ║", "")?;
            if let Some(baseline) = comparison.baseline.as_ref() {
                let previous = format!(
                    "{} {} {}",
                    baseline.measurement.value,
                    range::format(baseline.measurement.dispersion),
                    baseline.measurement.unit
                );
                writeln!(
                    w,
                    "║   {:42} {:>30} ║",
                    format!("baseline {}", baseline.commit_id),
                    previous
                )?;
            }
        }

        let regressions = self.regressions().count();
        let summary = format!(
            "{} benchmarks, {regressions} regressed",
            self.comparisons.len()
        );
        writeln!(
            w,
            "║ {:>width$} ║",
            if regressions > 0 {
                summary.bright_red()
            } else {
                summary.green()
            },
            width = WIDTH - 2
        )?;
        writeln!(w, "╚{}╝", "═".repeat(WIDTH))?;

        Ok(())
    }
}

///
/// Writes reports in the requested format.
///
/// The JSON format is always an array, so consumers need not care how many suites were
/// classified.
///
pub fn write_all<W>(reports: &[Report], format: Format, w: &mut W) -> anyhow::Result<()>
where
    W: std::io::Write,
{
    match format {
        Format::Text => {
            for report in reports.iter() {
                report.write_text(w)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *w, reports)?;
            writeln!(w)?;
        }
    }
    Ok(())
}
