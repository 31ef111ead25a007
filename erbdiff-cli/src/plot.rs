use erbdiff_core::report::ComparisonReport;
use plotters::prelude::*;
use tracing::info;

use crate::common::gen_target_fn;

/// Grouped bars of `% of ERB` per reference harmonic, one colour per comparison.
pub fn plot_erb_percent(
    reports: &[ComparisonReport],
    fname: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let out_file = gen_target_fn(format!("{}.png", fname));

    let root = BitMapBackend::new(&out_file, (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_rows = reports.iter().map(|r| r.rows.len()).max().unwrap_or(0);
    let max_pct = reports
        .iter()
        .flat_map(|r| r.rows.iter().map(|row| row.erb_percent))
        .fold(100.0_f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Closest-partial distance in % of ERB", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5..(max_rows as f64 + 0.5), 0.0..(max_pct * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Harmonic of reference note")
        .y_desc("% of ERB")
        .x_labels(max_rows.max(1))
        .x_label_formatter(&|x| format!("{:.0}", x))
        .draw()?;

    // One ERB: partials below this line share an auditory filter.
    chart.draw_series(LineSeries::new(
        [(0.5, 100.0), (max_rows as f64 + 0.5, 100.0)],
        BLACK.mix(0.5),
    ))?;

    let n = reports.len().max(1) as f64;
    let width = 0.8 / n;
    for (idx, report) in reports.iter().enumerate() {
        let color = Palette99::pick(idx).to_rgba();
        let offset = -0.4 + width * idx as f64;
        chart
            .draw_series(report.rows.iter().enumerate().map(|(k, row)| {
                let x0 = (k + 1) as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + width, row.erb_percent)], color.filled())
            }))?
            .label(report.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
    }

    chart.configure_series_labels().border_style(BLACK).draw()?;
    root.present()?;
    info!(path = %out_file.display(), "chart written");

    Ok(())
}
