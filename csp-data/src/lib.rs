//! Aggregation pipelines for storm-type precipitation summaries.
//!
//! This crate turns the retained long records from `csp-loca2` into the
//! two summary tables the chart apps render: the within-water-year
//! cumulative curves (one per epoch) and the interannual storm-type
//! totals. Both pipelines ensemble-average across climate models and use
//! ordered (BTree) grouping keys throughout, so float summation order is
//! fixed and reruns on identical input are bit-identical.

use csp_loca2::landfall::StormType;
use serde::Serialize;

pub mod annual;
pub mod seasonal;

/// Precipitation depth split by storm mechanism, in millimeters.
///
/// Serves both as a per-cell accumulator during grouping and as the
/// storm-type columns of the summary rows (a pivoted row with missing
/// storm types filled to zero).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StormTotals {
    pub non_ar: f64,
    pub ar_only: f64,
    pub ar_etc: f64,
}

impl StormTotals {
    /// Add precipitation to one storm-type column.
    pub fn add(&mut self, storm_type: StormType, amount: f64) {
        match storm_type {
            StormType::NonAr => self.non_ar += amount,
            StormType::ArOnly => self.ar_only += amount,
            StormType::ArEtc => self.ar_etc += amount,
        }
    }

    /// Read one storm-type column.
    pub fn get(&self, storm_type: StormType) -> f64 {
        match storm_type {
            StormType::NonAr => self.non_ar,
            StormType::ArOnly => self.ar_only,
            StormType::ArEtc => self.ar_etc,
        }
    }

    /// Sum across the three storm-type columns.
    pub fn total(&self) -> f64 {
        self.non_ar + self.ar_only + self.ar_etc
    }
}
