use csp_loca2::landfall::StormType;
use csp_loca2::scenario::ScenarioGroup;
use plotters::style::RGBColor;

/// Series color for a storm type, shared by both charts so the stacks
/// read the same everywhere.
pub fn storm_color(storm_type: StormType) -> RGBColor {
    match storm_type {
        StormType::NonAr => RGBColor(0x1f, 0x77, 0xb4),
        StormType::ArOnly => RGBColor(0xff, 0x7f, 0x0e),
        StormType::ArEtc => RGBColor(0x2c, 0xa0, 0x2c),
    }
}

/// Background shade marking an epoch's span on the interannual chart.
pub fn epoch_shade(group: ScenarioGroup) -> RGBColor {
    match group {
        ScenarioGroup::Historical => RGBColor(0xf0, 0xf0, 0xf0),
        ScenarioGroup::Ssp585Mid => RGBColor(0xff, 0xe6, 0xe6),
        ScenarioGroup::Ssp585End => RGBColor(0xff, 0xcc, 0xcc),
    }
}
