//! Pipeline A: within-water-year cumulative precipitation by storm type.
//!
//! For one focal region, daily precipitation is summed per
//! (epoch, water year, model, day-of-season) cell, ensemble-averaged
//! over the (model, water year) combinations that contributed to each
//! (epoch, day), and accumulated into running per-storm-type curves that
//! restart at each epoch.

use crate::StormTotals;
use csp_loca2::record::StormRecord;
use csp_loca2::region::Region;
use csp_loca2::scenario::ScenarioGroup;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the seasonal summary: ensemble-mean cumulative
/// precipitation by storm type at one day of the water year, within one
/// epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonalCurvePoint {
    pub group: ScenarioGroup,
    /// Day within the water year, Oct 1 = 1.
    pub day_of_season: u32,
    /// Running cumulative depth per storm type, from the epoch's day 1.
    pub cumulative: StormTotals,
    /// Sum of the three cumulative columns.
    pub total: f64,
}

/// Compute the seasonal cumulative summary for one focal region.
///
/// Days with no contributing records are absent from the output rather
/// than zero-filled; the cumulative curves simply skip them. Points are
/// ordered by (epoch, day) ascending.
pub fn seasonal_cumulative(
    records: &[StormRecord],
    region_focus: Region,
) -> Vec<SeasonalCurvePoint> {
    // Daily storm-type sums per (epoch, water year, model, day) cell.
    // Storm types a cell never saw stay at zero, mirroring the pivoted
    // per-model table this averages over.
    let mut cells: BTreeMap<(ScenarioGroup, i32, String, u32), StormTotals> = BTreeMap::new();
    for record in records.iter().filter(|r| r.region == region_focus) {
        cells
            .entry((
                record.group,
                record.water_year,
                record.model.clone(),
                record.day_of_season,
            ))
            .or_default()
            .add(record.storm_type, record.precipitation);
    }

    // Ensemble mean per (epoch, day): average over the (model, water
    // year) combinations that contributed at least one record that day.
    let mut sums: BTreeMap<(ScenarioGroup, u32), (StormTotals, u32)> = BTreeMap::new();
    for ((group, _water_year, _model, day), cell) in &cells {
        let (sum, combinations) = sums.entry((*group, *day)).or_default();
        sum.non_ar += cell.non_ar;
        sum.ar_only += cell.ar_only;
        sum.ar_etc += cell.ar_etc;
        *combinations += 1;
    }

    // Running cumulative per storm type, restarting at each epoch.
    let mut points = Vec::with_capacity(sums.len());
    let mut current_group: Option<ScenarioGroup> = None;
    let mut running = StormTotals::default();
    for ((group, day), (sum, combinations)) in sums {
        if current_group != Some(group) {
            current_group = Some(group);
            running = StormTotals::default();
        }
        let n = f64::from(combinations);
        running.non_ar += sum.non_ar / n;
        running.ar_only += sum.ar_only / n;
        running.ar_etc += sum.ar_etc / n;
        points.push(SeasonalCurvePoint {
            group,
            day_of_season: day,
            cumulative: running,
            total: running.total(),
        });
    }
    log::debug!(
        "seasonal summary for {}: {} points",
        region_focus,
        points.len()
    );
    points
}

#[cfg(test)]
mod tests {
    use super::{seasonal_cumulative, SeasonalCurvePoint};
    use csp_loca2::landfall::StormType;
    use csp_loca2::record::StormRecord;
    use csp_loca2::region::Region;
    use csp_loca2::scenario::ScenarioGroup;
    use csp_loca2::water_year::season_start;
    use chrono::Duration;

    /// A retained record `day - 1` days into the given water year.
    fn rec(
        group: ScenarioGroup,
        water_year: i32,
        day: u32,
        model: &str,
        storm_type: StormType,
        precipitation: f64,
    ) -> StormRecord {
        StormRecord {
            date: season_start(water_year) + Duration::days(i64::from(day) - 1),
            water_year,
            day_of_season: day,
            group,
            storm_type,
            model: model.to_string(),
            region: Region::NorthCoast,
            precipitation,
        }
    }

    fn point(
        points: &[SeasonalCurvePoint],
        group: ScenarioGroup,
        day: u32,
    ) -> &SeasonalCurvePoint {
        points
            .iter()
            .find(|p| p.group == group && p.day_of_season == day)
            .unwrap()
    }

    #[test]
    fn test_single_record_single_point() {
        let records = vec![rec(
            ScenarioGroup::Historical,
            1995,
            1,
            "ACCESS-CM2",
            StormType::ArOnly,
            4.0,
        )];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].day_of_season, 1);
        assert_eq!(points[0].cumulative.ar_only, 4.0);
        assert_eq!(points[0].cumulative.non_ar, 0.0);
        assert_eq!(points[0].total, 4.0);
    }

    #[test]
    fn test_ensemble_mean_across_models() {
        let g = ScenarioGroup::Historical;
        let records = vec![
            rec(g, 1995, 10, "ACCESS-CM2", StormType::NonAr, 2.0),
            rec(g, 1995, 10, "CanESM5", StormType::NonAr, 4.0),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].cumulative.non_ar, 3.0);
    }

    #[test]
    fn test_mean_counts_water_years_as_separate_members() {
        // The same model in two water years contributes two ensemble
        // members to the (epoch, day) mean.
        let g = ScenarioGroup::Historical;
        let records = vec![
            rec(g, 1995, 10, "ACCESS-CM2", StormType::NonAr, 2.0),
            rec(g, 1997, 10, "ACCESS-CM2", StormType::NonAr, 6.0),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].cumulative.non_ar, 4.0);
    }

    #[test]
    fn test_mean_ignores_absent_combinations() {
        // CanESM5 reports nothing on day 20, so the day 20 mean divides
        // by one contributing combination, not two.
        let g = ScenarioGroup::Historical;
        let records = vec![
            rec(g, 1995, 10, "ACCESS-CM2", StormType::NonAr, 2.0),
            rec(g, 1995, 10, "CanESM5", StormType::NonAr, 4.0),
            rec(g, 1995, 20, "ACCESS-CM2", StormType::NonAr, 5.0),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points.len(), 2);
        assert_eq!(point(&points, g, 10).cumulative.non_ar, 3.0);
        assert_eq!(point(&points, g, 20).cumulative.non_ar, 8.0);
    }

    #[test]
    fn test_same_cell_records_sum_before_averaging() {
        // Two same-day records from one (model, water year, storm type)
        // sum within the cell; the mean then divides by one combination.
        let g = ScenarioGroup::Historical;
        let records = vec![
            rec(g, 1995, 10, "ACCESS-CM2", StormType::ArEtc, 2.0),
            rec(g, 1995, 10, "ACCESS-CM2", StormType::ArEtc, 3.0),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points[0].cumulative.ar_etc, 5.0);
    }

    #[test]
    fn test_cumulative_is_monotone_and_total_matches() {
        let g = ScenarioGroup::Ssp585Mid;
        let records = vec![
            rec(g, 2055, 1, "ACCESS-CM2", StormType::NonAr, 1.0),
            rec(g, 2055, 2, "ACCESS-CM2", StormType::ArOnly, 2.0),
            rec(g, 2055, 3, "ACCESS-CM2", StormType::ArEtc, 3.0),
            rec(g, 2055, 4, "ACCESS-CM2", StormType::NonAr, 0.5),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points.len(), 4);
        for pair in points.windows(2) {
            assert!(pair[1].cumulative.non_ar >= pair[0].cumulative.non_ar);
            assert!(pair[1].cumulative.ar_only >= pair[0].cumulative.ar_only);
            assert!(pair[1].cumulative.ar_etc >= pair[0].cumulative.ar_etc);
        }
        for p in &points {
            assert_eq!(p.total, p.cumulative.total());
        }
        assert_eq!(points[3].cumulative.non_ar, 1.5);
        assert_eq!(points[3].total, 6.5);
    }

    #[test]
    fn test_cumulative_restarts_at_each_epoch() {
        let records = vec![
            rec(ScenarioGroup::Historical, 1995, 1, "ACCESS-CM2", StormType::NonAr, 7.0),
            rec(ScenarioGroup::Ssp585End, 2090, 1, "ACCESS-CM2", StormType::NonAr, 2.0),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(points.len(), 2);
        assert_eq!(
            point(&points, ScenarioGroup::Historical, 1).cumulative.non_ar,
            7.0
        );
        assert_eq!(
            point(&points, ScenarioGroup::Ssp585End, 1).cumulative.non_ar,
            2.0
        );
    }

    #[test]
    fn test_empty_days_are_absent_not_zero() {
        let g = ScenarioGroup::Historical;
        let records = vec![
            rec(g, 1995, 1, "ACCESS-CM2", StormType::NonAr, 1.0),
            rec(g, 1995, 3, "ACCESS-CM2", StormType::NonAr, 1.0),
        ];
        let points = seasonal_cumulative(&records, Region::NorthCoast);
        let days: Vec<u32> = points.iter().map(|p| p.day_of_season).collect();
        assert_eq!(days, vec![1, 3]);
    }

    #[test]
    fn test_other_regions_are_excluded() {
        let mut desert = rec(
            ScenarioGroup::Historical,
            1995,
            1,
            "ACCESS-CM2",
            StormType::NonAr,
            9.0,
        );
        desert.region = Region::Desert;
        let points = seasonal_cumulative(&[desert], Region::NorthCoast);
        assert!(points.is_empty());
    }

    #[test]
    fn test_rerun_is_identical() {
        let g = ScenarioGroup::Historical;
        let records = vec![
            rec(g, 1995, 1, "ACCESS-CM2", StormType::NonAr, 0.3),
            rec(g, 1995, 1, "CanESM5", StormType::ArOnly, 0.7),
            rec(g, 1996, 2, "ACCESS-CM2", StormType::ArEtc, 1.1),
        ];
        let first = seasonal_cumulative(&records, Region::NorthCoast);
        let second = seasonal_cumulative(&records, Region::NorthCoast);
        assert_eq!(first, second);
    }
}
