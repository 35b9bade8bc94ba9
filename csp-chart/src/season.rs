//! Faceted seasonal cumulative chart: one stacked-area panel per epoch.

use crate::palette;
use csp_data::seasonal::SeasonalCurvePoint;
use csp_loca2::landfall::StormType;
use csp_loca2::region::Region;
use csp_loca2::scenario::ScenarioGroup;
use csp_loca2::water_year::SEASON_LENGTH_DAYS;
use plotters::prelude::*;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (1800, 500);

/// Render the seasonal summary as three stacked-area facets
/// (Historical, SSP585 Mid, SSP585 End) sharing one y-range, with a
/// black total line over each stack.
///
/// Epoch/day combinations absent from the summary are simply skipped;
/// an epoch with no points at all gets an empty facet with axes only.
pub fn render_seasonal_curves(
    points: &[SeasonalCurvePoint],
    region: Region,
    path: &Path,
) -> anyhow::Result<()> {
    let y_max = points
        .iter()
        .map(|p| p.total)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.05;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let facets = root.split_evenly((1, 3));

    for (facet, group) in facets.iter().zip(ScenarioGroup::ALL) {
        let mut sub: Vec<&SeasonalCurvePoint> =
            points.iter().filter(|p| p.group == group).collect();
        sub.sort_by_key(|p| p.day_of_season);
        if sub.is_empty() {
            log::warn!("no seasonal data for {}", group);
        }

        let mut chart = ChartBuilder::on(facet)
            .margin(20)
            .caption(format!("{region} - {group}"), ("sans-serif", 18))
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(1u32..SEASON_LENGTH_DAYS as u32, 0f64..y_max)?;
        chart
            .configure_mesh()
            .x_labels(10)
            .x_desc("Day in Water Year (Oct 1 = Day 1)")
            .y_desc("Cumulative Precipitation (mm)")
            .draw()?;

        // Stack by painting the tallest layer first: the total down to
        // the AR-ETC boundary, then AR-only + Non-AR, then Non-AR.
        let layers = [
            (StormType::ArEtc, sub.iter().map(|p| (p.day_of_season, p.total)).collect::<Vec<_>>()),
            (
                StormType::ArOnly,
                sub.iter()
                    .map(|p| (p.day_of_season, p.cumulative.non_ar + p.cumulative.ar_only))
                    .collect(),
            ),
            (
                StormType::NonAr,
                sub.iter().map(|p| (p.day_of_season, p.cumulative.non_ar)).collect(),
            ),
        ];
        for (storm_type, layer) in layers {
            let color = palette::storm_color(storm_type);
            chart
                .draw_series(AreaSeries::new(layer, 0.0, color.filled()))?
                .label(storm_type.label())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
                });
        }
        chart
            .draw_series(LineSeries::new(
                sub.iter().map(|p| (p.day_of_season, p.total)),
                BLACK.stroke_width(2),
            ))?
            .label("Total Precipitation")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], BLACK.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    root.present()?;
    log::info!("seasonal chart written to {}", path.display());
    Ok(())
}
