//! Interannual stacked-bar chart with epoch shading.

use crate::palette;
use csp_data::annual::AnnualStormRow;
use csp_loca2::landfall::StormType;
use csp_loca2::region::Region;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1800, 600);
const BAR_MARGIN: f64 = 0.05;

/// Render the annual summary as one stacked bar per retained water year,
/// over background bands marking each epoch's span, with a dashed line
/// at every epoch transition.
pub fn render_annual_bars(
    rows: &[AnnualStormRow],
    region: Region,
    path: &Path,
) -> anyhow::Result<()> {
    if rows.is_empty() {
        log::warn!("no retained water years for {}; drawing empty chart", region);
    }
    let y_max = rows
        .iter()
        .map(|r| r.totals.total())
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.05;
    let x_max = rows.len().max(1) as f64;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!("Annual Precipitation in {region} by Storm Type and Scenario"),
            ("sans-serif", 20),
        )
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    // Epoch background bands sit under the grid and the bars.
    let runs = epoch_runs(rows);
    for (start, end) in runs.iter().copied() {
        let shade = palette::epoch_shade(rows[start].group);
        chart.draw_series(std::iter::once(Rectangle::new(
            [(start as f64, 0.0), (end as f64, y_max)],
            shade.mix(0.3).filled(),
        )))?;
    }

    chart
        .configure_mesh()
        .x_labels(rows.len().clamp(1, 60))
        .x_label_formatter(&|x| {
            let idx = x.floor() as usize;
            rows.get(idx)
                .map(|r| r.water_year.to_string())
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 11)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc("Water Year")
        .y_desc("Ensemble Mean Total Precipitation (mm)")
        .draw()?;

    // Stacked bars, one segment series per storm type so the legend
    // carries one entry each.
    for storm_type in StormType::ALL {
        let color = palette::storm_color(storm_type);
        chart
            .draw_series(rows.iter().enumerate().map(|(idx, row)| {
                let base: f64 = StormType::ALL
                    .into_iter()
                    .take_while(|s| *s != storm_type)
                    .map(|s| row.totals.get(s))
                    .sum();
                Rectangle::new(
                    [
                        (idx as f64 + BAR_MARGIN, base),
                        (idx as f64 + 1.0 - BAR_MARGIN, base + row.totals.get(storm_type)),
                    ],
                    color.filled(),
                )
            }))?
            .label(storm_type.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
    }

    // Dashed transition lines between consecutive epochs.
    for (_, end) in runs.iter().copied() {
        if end < rows.len() {
            chart.draw_series(DashedLineSeries::new(
                [(end as f64, 0.0), (end as f64, y_max)],
                6,
                4,
                BLACK.stroke_width(2),
            ))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;
    log::info!("annual chart written to {}", path.display());
    Ok(())
}

/// Half-open index runs of consecutive rows sharing a dominant epoch.
fn epoch_runs(rows: &[AnnualStormRow]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = 0;
    for idx in 1..=rows.len() {
        if idx == rows.len() || rows[idx].group != rows[start].group {
            runs.push((start, idx));
            start = idx;
        }
    }
    runs
}
