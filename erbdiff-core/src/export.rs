use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::common::cents_diff;
use crate::report::{ComparisonReport, ReportError};

pub fn export_report_csv(
    path: impl AsRef<Path>,
    reports: &[ComparisonReport],
) -> Result<(), ReportError> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    write_report_csv(&mut w, reports)?;
    w.flush()?;
    Ok(())
}

pub fn write_report_csv<W: Write>(w: &mut W, reports: &[ComparisonReport]) -> std::io::Result<()> {
    writeln!(
        w,
        "comparison,freq_hz,other_hz,diff_hz,cents,erb_hz,erb_percent,within_erb"
    )?;
    for report in reports {
        for r in &report.rows {
            writeln!(
                w,
                "{},{:.6},{:.6},{:.6},{:.3},{:.6},{:.6},{}",
                report.key,
                r.freq_hz,
                r.other_hz,
                r.diff_hz,
                cents_diff(r.freq_hz, r.other_hz),
                r.erb_hz,
                r.erb_percent,
                r.within_erb()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, run_report};

    #[test]
    fn csv_rows_follow_reports() {
        let reports = run_report(&ReportConfig::default());
        let mut out = Vec::new();
        write_report_csv(&mut out, &reports).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 12);
        assert!(lines[0].starts_with("comparison,freq_hz"));
        assert_eq!(
            lines[1],
            "a4,220.000000,440.000000,220.000000,1200.000,60.319839,364.722458,false"
        );
        assert!(lines[7].starts_with("e4,660.000000,659.200000,0.800000,"));
        assert!(lines[7].ends_with(",true"));
        assert!(lines[12].starts_with("eb4,880.000000,933.300000"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let reports = run_report(&ReportConfig::default());
        export_report_csv(&path, &reports).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 13);
    }

    #[test]
    fn export_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("report.csv");
        let err = export_report_csv(&path, &[]).unwrap_err();
        assert!(matches!(err, ReportError::Io(_)));
    }
}
