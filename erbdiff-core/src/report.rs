//! Per-comparison report: for every partial of the reference note, the
//! closest partial of the other note, their distance in Hz and that distance
//! relative to the ERB at their midpoint.

use std::fmt;
use std::io::Write;

use thiserror::Error;
use tracing::debug;

use crate::common::midpoint_hz;
use crate::erb::{erb_hz, erb_percent};
use crate::matching::nearest_match;
use crate::notes::{self, FrequencySet};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("unknown comparison: {0}")]
    UnknownComparison(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One reference note checked against one other note.
#[derive(Clone, Debug)]
pub struct Comparison {
    /// Short handle used to toggle the comparison (e.g. "eb4").
    pub key: &'static str,
    /// Heading printed above the rows (e.g. "A3 vs Eb4").
    pub label: String,
    pub reference: FrequencySet,
    pub other: FrequencySet,
    pub enabled: bool,
}

impl Comparison {
    pub fn new(key: &'static str, reference: FrequencySet, other: FrequencySet) -> Self {
        Self {
            key,
            label: format!("{} vs {}", reference.name, other.name),
            reference,
            other,
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Run in this order; disabled entries are skipped.
    pub comparisons: Vec<Comparison>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            comparisons: vec![
                Comparison::new("a4", notes::a3(), notes::a4()),
                Comparison::new("e4", notes::a3(), notes::e4()),
                Comparison::new("b3", notes::a3(), notes::b3()).disabled(),
                Comparison::new("eb4", notes::a3(), notes::e_flat4()),
            ],
        }
    }
}

impl ReportConfig {
    pub fn enable(&mut self, key: &str) -> Result<(), ReportError> {
        self.set_enabled(key, true)
    }

    pub fn disable(&mut self, key: &str) -> Result<(), ReportError> {
        self.set_enabled(key, false)
    }

    fn set_enabled(&mut self, key: &str, on: bool) -> Result<(), ReportError> {
        let cmp = self
            .comparisons
            .iter_mut()
            .find(|c| c.key.eq_ignore_ascii_case(key))
            .ok_or_else(|| ReportError::UnknownComparison(key.to_string()))?;
        cmp.enabled = on;
        Ok(())
    }

    pub fn enabled(&self) -> impl Iterator<Item = &Comparison> {
        self.comparisons.iter().filter(|c| c.enabled)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReportRow {
    pub freq_hz: f64,
    pub other_hz: f64,
    pub diff_hz: f64,
    /// ERB at the midpoint of `freq_hz` and `other_hz`.
    pub erb_hz: f64,
    pub erb_percent: f64,
}

impl ReportRow {
    /// Both partials fall inside a single auditory filter.
    pub fn within_erb(&self) -> bool {
        self.erb_percent < 100.0
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "freq: {:.1}, other: {:.1}, min diff: {:.1}, erb: {:.1}, % of erb: {:.0}",
            self.freq_hz, self.other_hz, self.diff_hz, self.erb_hz, self.erb_percent
        )
    }
}

#[derive(Clone, Debug)]
pub struct ComparisonReport {
    pub key: &'static str,
    pub label: String,
    pub rows: Vec<ReportRow>,
}

impl ComparisonReport {
    /// Heading line, then each row followed by an empty line.
    pub fn write_text<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        writeln!(w, "{}", self.label)?;
        for row in &self.rows {
            writeln!(w, "{row}\n")?;
        }
        Ok(())
    }
}

/// Compare every partial of `cmp.reference` against `cmp.other`.
pub fn run_comparison_step(cmp: &Comparison) -> ComparisonReport {
    let candidates = cmp.other.freqs_hz();
    let rows = cmp
        .reference
        .freqs_hz()
        .iter()
        .map(|&freq_hz| {
            let m = nearest_match(freq_hz, candidates);
            let centre = midpoint_hz(freq_hz, m.other_hz);
            let row = ReportRow {
                freq_hz,
                other_hz: m.other_hz,
                diff_hz: m.diff_hz,
                erb_hz: erb_hz(centre),
                erb_percent: erb_percent(m.diff_hz, centre),
            };
            debug!(
                comparison = cmp.key,
                freq_hz,
                other_hz = row.other_hz,
                erb_percent = row.erb_percent,
                "matched partial"
            );
            row
        })
        .collect();

    ComparisonReport {
        key: cmp.key,
        label: cmp.label.clone(),
        rows,
    }
}

/// Run every enabled comparison, in configured order.
pub fn run_report(cfg: &ReportConfig) -> Vec<ComparisonReport> {
    cfg.enabled()
        .map(|cmp| {
            let report = run_comparison_step(cmp);
            debug!(
                comparison = cmp.key,
                within_erb = report.rows.iter().filter(|r| r.within_erb()).count(),
                rows = report.rows.len(),
                "comparison done"
            );
            report
        })
        .collect()
}

/// Text of all reports, as printed to stdout.
pub fn write_reports<W: Write>(
    w: &mut W,
    reports: &[ComparisonReport],
) -> Result<(), ReportError> {
    for report in reports {
        report.write_text(w)?;
    }
    Ok(())
}
