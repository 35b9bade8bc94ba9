//! Pipeline B: interannual precipitation totals by storm type.
//!
//! Across all regions, precipitation is summed per
//! (water year, region, storm type, model), ensemble-averaged over
//! models, and pivoted to one row per water year for the focal region.
//! Each water year is assigned its dominant epoch, and the first and
//! last water year of every epoch are dropped so partial seasons at the
//! epoch joins never contaminate the totals.

use crate::StormTotals;
use csp_loca2::landfall::StormType;
use csp_loca2::record::StormRecord;
use csp_loca2::region::Region;
use csp_loca2::scenario::ScenarioGroup;
use serde::Serialize;
use std::collections::BTreeMap;

/// One row of the annual summary: ensemble-mean storm-type totals for a
/// retained water year, with the year's dominant epoch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualStormRow {
    pub water_year: i32,
    /// Ensemble-mean total depth per storm type over the water year.
    pub totals: StormTotals,
    pub group: ScenarioGroup,
}

/// Compute the annual storm-type summary for one focal region.
///
/// Rows come back sorted by water year ascending, one per retained year.
pub fn annual_by_storm_type(
    records: &[StormRecord],
    region_focus: Region,
) -> Vec<AnnualStormRow> {
    // Annual totals per (water year, region, storm type, model).
    let mut cells: BTreeMap<(i32, Region, StormType, String), f64> = BTreeMap::new();
    for record in records {
        *cells
            .entry((
                record.water_year,
                record.region,
                record.storm_type,
                record.model.clone(),
            ))
            .or_default() += record.precipitation;
    }

    // Ensemble mean across the models that reported each
    // (water year, region, storm type).
    let mut means: BTreeMap<(i32, Region, StormType), (f64, u32)> = BTreeMap::new();
    for ((water_year, region, storm_type, _model), total) in &cells {
        let (sum, models) = means.entry((*water_year, *region, *storm_type)).or_default();
        *sum += *total;
        *models += 1;
    }

    // Focal-region pivot: one StormTotals per water year, absent storm
    // types left at zero.
    let mut pivot: BTreeMap<i32, StormTotals> = BTreeMap::new();
    for ((water_year, region, storm_type), (sum, models)) in means {
        if region != region_focus {
            continue;
        }
        pivot
            .entry(water_year)
            .or_default()
            .add(storm_type, sum / f64::from(models));
    }

    let year_groups = dominant_group_per_year(records);

    // First and last water year observed for each epoch; only years
    // strictly inside their own epoch's span are retained.
    let mut spans: BTreeMap<ScenarioGroup, (i32, i32)> = BTreeMap::new();
    for (water_year, group) in &year_groups {
        spans
            .entry(*group)
            .and_modify(|(min, max)| {
                *min = (*min).min(*water_year);
                *max = (*max).max(*water_year);
            })
            .or_insert((*water_year, *water_year));
    }

    let rows: Vec<AnnualStormRow> = year_groups
        .iter()
        .filter(|(water_year, group)| {
            let (min, max) = spans[*group];
            **water_year > min && **water_year < max
        })
        .map(|(water_year, group)| AnnualStormRow {
            water_year: *water_year,
            totals: pivot.get(water_year).copied().unwrap_or_default(),
            group: *group,
        })
        .collect();
    log::debug!(
        "annual summary for {}: {} of {} water years retained",
        region_focus,
        rows.len(),
        year_groups.len()
    );
    rows
}

/// The epoch most frequently seen among a water year's records; ties
/// break to the lexicographically first group label.
fn dominant_group_per_year(records: &[StormRecord]) -> BTreeMap<i32, ScenarioGroup> {
    let mut counts: BTreeMap<i32, BTreeMap<ScenarioGroup, u64>> = BTreeMap::new();
    for record in records {
        *counts
            .entry(record.water_year)
            .or_default()
            .entry(record.group)
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(water_year, by_group)| {
            let mut best: Option<(ScenarioGroup, u64)> = None;
            for (group, count) in by_group {
                best = match best {
                    Some((best_group, best_count))
                        if count < best_count
                            || (count == best_count && group.label() > best_group.label()) =>
                    {
                        Some((best_group, best_count))
                    }
                    _ => Some((group, count)),
                };
            }
            // counts never inserts an empty inner map
            (water_year, best.unwrap().0)
        })
        .collect()
}
