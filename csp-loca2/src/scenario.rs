use serde::{Deserialize, Serialize};
use std::fmt;

/// A climate epoch: one of the three fixed (emissions scenario, year range)
/// windows the analysis compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScenarioGroup {
    Historical,
    Ssp585Mid,
    Ssp585End,
}

impl ScenarioGroup {
    /// All epochs in chronological order (chart facet order).
    pub const ALL: [ScenarioGroup; 3] = [
        ScenarioGroup::Historical,
        ScenarioGroup::Ssp585Mid,
        ScenarioGroup::Ssp585End,
    ];

    /// Display label, matching the LOCA2 analysis convention.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioGroup::Historical => "Historical (1980–2010)",
            ScenarioGroup::Ssp585Mid => "SSP585 Mid (2040–2070)",
            ScenarioGroup::Ssp585End => "SSP585 End (2070–2100)",
        }
    }
}

impl fmt::Display for ScenarioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One epoch classification rule: records whose scenario string matches
/// `scenario` and whose calendar year lies in `[first_year, last_year]`
/// (closed on both ends) belong to `group`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochRule {
    pub scenario: String,
    pub first_year: i32,
    pub last_year: i32,
    pub group: ScenarioGroup,
}

impl EpochRule {
    fn matches(&self, scenario: &str, year: i32) -> bool {
        scenario == self.scenario && (self.first_year..=self.last_year).contains(&year)
    }
}

/// The epoch window table used to classify records.
///
/// The Mid and End windows share the single year 2070, but their scenario
/// strings differ, so no (scenario, year) pair can match two rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochDefinitions {
    pub rules: Vec<EpochRule>,
}

impl Default for EpochDefinitions {
    fn default() -> Self {
        EpochDefinitions {
            rules: vec![
                EpochRule {
                    scenario: "historical".to_string(),
                    first_year: 1980,
                    last_year: 2010,
                    group: ScenarioGroup::Historical,
                },
                EpochRule {
                    scenario: "ssp585-mid".to_string(),
                    first_year: 2040,
                    last_year: 2070,
                    group: ScenarioGroup::Ssp585Mid,
                },
                EpochRule {
                    scenario: "ssp585-end".to_string(),
                    first_year: 2070,
                    last_year: 2100,
                    group: ScenarioGroup::Ssp585End,
                },
            ],
        }
    }
}

impl EpochDefinitions {
    /// Classify a (scenario, calendar year) pair against the rule table.
    /// Returns `None` when no rule matches; such records are excluded
    /// from both pipelines.
    pub fn classify(&self, scenario: &str, year: i32) -> Option<ScenarioGroup> {
        self.rules
            .iter()
            .find(|rule| rule.matches(scenario, year))
            .map(|rule| rule.group)
    }
}
