//! Shared plotters rendering for the CSP chart apps.
//!
//! Consumes the summary tables from `csp-data` and writes static chart
//! images: the three-facet seasonal cumulative curves and the
//! interannual stacked bars with epoch shading. Nothing here feeds back
//! into the pipelines.

pub mod annual;
pub mod palette;
pub mod season;
