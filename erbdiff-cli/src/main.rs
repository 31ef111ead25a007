#[cfg(feature = "visualise")]
mod common;
#[cfg(feature = "visualise")]
mod plot;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use erbdiff_core::export::export_report_csv;
use erbdiff_core::notes;
use erbdiff_core::report::{ReportConfig, run_report, write_reports};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Distance between the closest partials of two notes, in Hz and in % of the ERB.
#[derive(Parser, Debug)]
#[command(name = "erbdiff", version, about)]
struct Args {
    /// Turn on a comparison by key (repeatable), e.g. `--enable b3`
    #[arg(long, value_name = "KEY")]
    enable: Vec<String>,

    /// Turn off a comparison by key (repeatable)
    #[arg(long, value_name = "KEY")]
    disable: Vec<String>,

    /// List the note catalog and comparison keys, then exit
    #[arg(long)]
    list: bool,

    /// Also write every row as CSV to this file
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Render a % of ERB chart into the target directory
    #[cfg(feature = "visualise")]
    #[arg(long)]
    plot: bool,

    /// Log more to stderr (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut cfg = ReportConfig::default();
    for key in &args.enable {
        cfg.enable(key)?;
    }
    for key in &args.disable {
        cfg.disable(key)?;
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list {
        print_listing(&mut out, &cfg)?;
        return Ok(());
    }

    let reports = run_report(&cfg);
    info!(comparisons = reports.len(), "report computed");
    write_reports(&mut out, &reports)?;
    out.flush()?;

    if let Some(path) = &args.csv {
        export_report_csv(path, &reports)?;
        info!(path = %path.display(), "csv written");
    }

    #[cfg(feature = "visualise")]
    if args.plot {
        plot::plot_erb_percent(&reports, "erb_percent")?;
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_listing<W: Write>(w: &mut W, cfg: &ReportConfig) -> std::io::Result<()> {
    writeln!(w, "Notes:")?;
    for set in notes::catalog() {
        let freqs: Vec<String> = set.freqs_hz().iter().map(|f| format!("{f:.1}")).collect();
        writeln!(w, "  {:<4} {}", set.name, freqs.join(", "))?;
    }
    writeln!(w, "Comparisons:")?;
    for cmp in &cfg.comparisons {
        writeln!(
            w,
            "  {:<4} {:<10} {}",
            cmp.key,
            cmp.label,
            if cmp.enabled { "on" } else { "off" }
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toggles() {
        let args = Args::try_parse_from([
            "erbdiff", "--enable", "b3", "--disable", "a4", "--disable", "e4", "-vv",
        ])
        .unwrap();
        assert_eq!(args.enable, ["b3"]);
        assert_eq!(args.disable, ["a4", "e4"]);
        assert_eq!(args.verbose, 2);
        assert!(!args.list);
        assert!(args.csv.is_none());
    }

    #[test]
    fn listing_shows_catalog_and_toggles() {
        let mut out = Vec::new();
        print_listing(&mut out, &ReportConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("  A4   440.0, 880.0\n"));
        assert!(text.contains("  Eb4  311.1, 622.2, 933.3, 1244.4\n"));
        assert!(text.contains("  b3   A3 vs B3   off\n"));
        assert!(text.contains("  eb4  A3 vs Eb4  on\n"));
    }
}
