use serde::{Deserialize, Serialize};
use std::fmt;

/// Storm mechanism behind a day's precipitation, decoded from the
/// integer landfall code in the LOCA2 export.
///
/// - `0`: precipitation with no atmospheric river present
/// - `1`: atmospheric river landfall without an extratropical cyclone
/// - `2`: atmospheric river co-occurring with an extratropical cyclone
///
/// Codes outside {0, 1, 2} carry no storm-type meaning; they decode to
/// `None` and the row is dropped by the retention filter, not treated
/// as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StormType {
    NonAr,
    ArOnly,
    ArEtc,
}

impl StormType {
    /// All storm types, in stacking order (bottom to top in both charts).
    pub const ALL: [StormType; 3] = [StormType::NonAr, StormType::ArOnly, StormType::ArEtc];

    /// Decode an integer landfall code.
    pub fn from_landfall_code(code: i64) -> Option<StormType> {
        match code {
            0 => Some(StormType::NonAr),
            1 => Some(StormType::ArOnly),
            2 => Some(StormType::ArEtc),
            _ => None,
        }
    }

    /// Human-readable storm type label.
    pub fn label(&self) -> &'static str {
        match self {
            StormType::NonAr => "Non-AR",
            StormType::ArOnly => "AR-only",
            StormType::ArEtc => "AR-ETC",
        }
    }
}

impl fmt::Display for StormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
