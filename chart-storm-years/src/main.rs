//! Year-over-year precipitation totals by storm type.
//!
//! Loads the LOCA2 hybrid wide-schema precipitation CSV, runs the
//! interannual pipeline (ensemble-mean annual totals per storm type,
//! dominant epoch per water year, boundary years trimmed), and writes a
//! stacked-bar chart spanning the historical-to-future timeline with
//! epoch shading and dashed transition markers.

use anyhow::Context;
use clap::Parser;
use csp_loca2::record::parse_storm_records;
use csp_loca2::region::Region;
use csp_loca2::scenario::EpochDefinitions;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chart-storm-years",
    version,
    about = "Interannual precipitation by storm type across climate epochs"
)]
struct Cli {
    /// Path to the LOCA2 hybrid region precipitation CSV
    #[arg(short, long)]
    input: PathBuf,

    /// Focal region (display name, e.g. "San Francisco Bay Area")
    #[arg(short, long, default_value = "San Francisco Bay Area")]
    region: String,

    /// Output chart image path
    #[arg(short, long, default_value = "storm_years.png")]
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

    let rows = csp_data::annual::annual_by_storm_type(&records, region);
    info!("annual summary: {} retained water years", rows.len());

    csp_chart::annual::render_annual_bars(&rows, region, &cli.output)?;
    Ok(())
}
