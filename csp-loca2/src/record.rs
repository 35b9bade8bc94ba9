//! CSV loading for the LOCA2 hybrid regional precipitation export.
//!
//! The export is wide-schema: one row per (date, model, scenario) with a
//! precipitation column per region. Loading explodes each row into one
//! long [`StormRecord`] per region and applies temporal annotation and
//! the epoch/storm-type retention filter in the same linear pass, so the
//! pipelines only ever see retained, fully annotated records.
//!
//! # CSV Format
//!
//! Headers (column order is free; lookup is by name):
//! `Date,Scenario,Year,Model,Landfall,<nine region columns>`
//!
//! The `Year` column is ignored: water years and epoch classification
//! derive from `Date` itself, which cannot drift from the calendar.

use crate::landfall::StormType;
use crate::region::Region;
use crate::scenario::{EpochDefinitions, ScenarioGroup};
use crate::water_year::{day_of_season, in_season, water_year_for_date};
use anyhow::Context;
use chrono::{Datelike, NaiveDate};
use csv::StringRecord;

/// One region-day of precipitation, annotated and retained.
///
/// This is the normalized long relation both pipelines consume: the wide
/// region columns are already exploded, the temporal fields derived, and
/// the epoch filter applied.
#[derive(Debug, Clone, PartialEq)]
pub struct StormRecord {
    pub date: NaiveDate,
    /// Water year containing `date`, labeled by ending calendar year.
    pub water_year: i32,
    /// Day offset within the water year, Oct 1 = 1, always in [1, 365].
    pub day_of_season: u32,
    pub group: ScenarioGroup,
    pub storm_type: StormType,
    pub model: String,
    pub region: Region,
    /// Daily precipitation depth in millimeters.
    pub precipitation: f64,
}

/// Column positions resolved from the CSV header row.
struct ColumnLayout {
    date: usize,
    scenario: usize,
    model: usize,
    landfall: usize,
    /// Parallel to [`Region::ALL`].
    regions: [usize; 9],
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> anyhow::Result<ColumnLayout> {
        let position = |name: &str| -> anyhow::Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .with_context(|| format!("missing column {name:?} in header row"))
        };
        let mut regions = [0usize; 9];
        for (slot, region) in regions.iter_mut().zip(Region::ALL) {
            *slot = position(region.name())?;
        }
        Ok(ColumnLayout {
            date: position("Date")?,
            scenario: position("Scenario")?,
            model: position("Model")?,
            landfall: position("Landfall")?,
            regions,
        })
    }
}

/// Parse the wide-schema CSV into retained long records.
///
/// Malformed dates or numeric fields abort the load. Rows whose
/// (scenario, year) matches no epoch window, whose landfall code is
/// unmapped, or whose date falls on a season's 366th day are silently
/// dropped (counted at debug level), per the analysis filters.
pub fn parse_storm_records(
    csv_data: &str,
    epochs: &EpochDefinitions,
) -> anyhow::Result<Vec<StormRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());
    let layout = ColumnLayout::from_headers(rdr.headers()?)?;

    let mut records: Vec<StormRecord> = Vec::new();
    let mut rows = 0u32;
    let mut dropped = 0u32;
    for (line, result) in rdr.records().enumerate() {
        let row = result?;
        rows += 1;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let date = csp_utils::dates::parse_date(field(layout.date))
            .with_context(|| format!("row {}: bad date {:?}", line + 2, field(layout.date)))?;
        let landfall: i64 = field(layout.landfall)
            .parse()
            .with_context(|| format!("row {}: bad landfall code", line + 2))?;

        let water_year = water_year_for_date(&date);
        let day = day_of_season(&date);
        let group = epochs.classify(field(layout.scenario), date.year());
        let storm_type = StormType::from_landfall_code(landfall);
        let (group, storm_type) = match (group, storm_type, in_season(day)) {
            (Some(group), Some(storm_type), true) => (group, storm_type),
            _ => {
                dropped += 1;
                continue;
            }
        };

        let model = field(layout.model).to_string();
        for (idx, region) in layout.regions.iter().zip(Region::ALL) {
            let precipitation: f64 = field(*idx)
                .parse()
                .with_context(|| format!("row {}: bad precipitation for {region}", line + 2))?;
            records.push(StormRecord {
                date,
                water_year,
                day_of_season: day as u32,
                group,
                storm_type,
                model: model.clone(),
                region,
                precipitation,
            });
        }
    }
    log::debug!(
        "parsed {} rows into {} records ({} rows dropped by filters)",
        rows,
        records.len(),
        dropped
    );
    Ok(records)
}
