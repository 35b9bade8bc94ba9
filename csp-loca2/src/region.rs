use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine California analysis regions in the LOCA2 hybrid export.
///
/// Each region is a precipitation column in the wide-schema CSV; the
/// column header is the region's display name exactly as written here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    InlandSouth,
    LosAngeles,
    SanDiego,
    SanFranciscoBayArea,
    SanJoaquinValley,
    NorthCoast,
    SacramentoValley,
    Desert,
    CentralCoast,
}

impl Region {
    /// All regions, in the column order of the LOCA2 export.
    pub const ALL: [Region; 9] = [
        Region::InlandSouth,
        Region::LosAngeles,
        Region::SanDiego,
        Region::SanFranciscoBayArea,
        Region::SanJoaquinValley,
        Region::NorthCoast,
        Region::SacramentoValley,
        Region::Desert,
        Region::CentralCoast,
    ];

    /// The region's display name, which is also its CSV column header.
    pub fn name(&self) -> &'static str {
        match self {
            Region::InlandSouth => "Inland South",
            Region::LosAngeles => "Los Angeles",
            Region::SanDiego => "San Diego",
            Region::SanFranciscoBayArea => "San Francisco Bay Area",
            Region::SanJoaquinValley => "San Joaquin Valley",
            Region::NorthCoast => "North Coast",
            Region::SacramentoValley => "Sacramento Valley",
            Region::Desert => "Desert",
            Region::CentralCoast => "Central Coast",
        }
    }

    /// Look up a region by its display name.
    pub fn from_name(name: &str) -> Option<Region> {
        Region::ALL.into_iter().find(|r| r.name() == name.trim())
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
