//! Multi-model mean cumulative water year precipitation by storm type.
//!
//! Loads the LOCA2 hybrid wide-schema precipitation CSV, classifies and
//! annotates each region-day, runs the seasonal cumulative pipeline for
//! the focal region, and writes a three-facet stacked-area chart (one
//! facet per climate epoch).

use anyhow::Context;
use clap::Parser;
use csp_loca2::record::parse_storm_records;
use csp_loca2::region::Region;
use csp_loca2::scenario::EpochDefinitions;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chart-storm-season",
    version,
    about = "Cumulative water year precipitation by storm type, per climate epoch"
)]
struct Cli {
    /// Path to the LOCA2 hybrid region precipitation CSV
    #[arg(short, long)]
    input: PathBuf,

    /// Focal region (display name, e.g. "North Coast")
    #[arg(short, long, default_value = "North Coast")]
    region: String,

    /// Output chart image path
    #[arg(short, long, default_value = "storm_season.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let region = Region::from_name(&cli.region)
        .with_context(|| format!("unknown region {:?}", cli.region))?;

    let csv_data = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let records = parse_storm_records(&csv_data, &EpochDefinitions::default())?;
    info!(
        "loaded {} retained records from {}",
        records.len(),
        cli.input.display()
    );

    let points = csp_data::seasonal::seasonal_cumulative(&records, region);
    info!("seasonal summary: {} (epoch, day) points", points.len());

    csp_chart::season::render_seasonal_curves(&points, region, &cli.output)?;
    Ok(())
}
