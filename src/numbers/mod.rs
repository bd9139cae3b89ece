// 🧮 Calculators
// Each calculator composes the reducer with either the birthdate or the name.
//
// - birth: Life Path, Attitude, Generation, Day of Birth
// - name: Expression, Soul Urge, Personality
// - composite: Maturity
// - forecast: Personal Day / Month / Year

pub mod birth;
pub mod composite;
pub mod forecast;
pub mod name;

pub use birth::{attitude, day_of_birth, generation, life_path};
pub use composite::maturity;
pub use forecast::{personal_day, personal_month, personal_year, ForecastCycles};
pub use name::{expression, personality, soul_urge};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// INSIGHT TYPE
// ============================================================================

/// Closed set of numbers this engine calculates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightType {
    LifePath,
    Attitude,
    Generation,
    DayOfBirth,
    Expression,
    SoulUrge,
    Personality,
    Maturity,
    PersonalDay,
    PersonalMonth,
    PersonalYear,
}

impl InsightType {
    pub const ALL: [InsightType; 11] = [
        InsightType::LifePath,
        InsightType::Attitude,
        InsightType::Generation,
        InsightType::DayOfBirth,
        InsightType::Expression,
        InsightType::SoulUrge,
        InsightType::Personality,
        InsightType::Maturity,
        InsightType::PersonalDay,
        InsightType::PersonalMonth,
        InsightType::PersonalYear,
    ];

    /// Wire name (camelCase)
    pub fn code(&self) -> &'static str {
        match self {
            InsightType::LifePath => "lifePath",
            InsightType::Attitude => "attitude",
            InsightType::Generation => "generation",
            InsightType::DayOfBirth => "dayOfBirth",
            InsightType::Expression => "expression",
            InsightType::SoulUrge => "soulUrge",
            InsightType::Personality => "personality",
            InsightType::Maturity => "maturity",
            InsightType::PersonalDay => "personalDay",
            InsightType::PersonalMonth => "personalMonth",
            InsightType::PersonalYear => "personalYear",
        }
    }

    /// Short human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            InsightType::LifePath => "Life Path",
            InsightType::Attitude => "Attitude",
            InsightType::Generation => "Generation",
            InsightType::DayOfBirth => "Day of Birth",
            InsightType::Expression => "Expression",
            InsightType::SoulUrge => "Soul Urge",
            InsightType::Personality => "Personality",
            InsightType::Maturity => "Maturity",
            InsightType::PersonalDay => "Personal Day",
            InsightType::PersonalMonth => "Personal Month",
            InsightType::PersonalYear => "Personal Year",
        }
    }

    /// Prefix used for default titles and placeholders
    pub fn label(&self) -> &'static str {
        match self {
            InsightType::Expression => "Expression Number",
            InsightType::SoulUrge => "Soul Urge Number",
            InsightType::Personality => "Personality Number",
            InsightType::Maturity => "Maturity Number",
            other => other.name(),
        }
    }

    /// Day of Birth is the only result that is never reduced
    pub fn is_reduced(&self) -> bool {
        !matches!(self, InsightType::DayOfBirth)
    }

    pub fn is_forecast(&self) -> bool {
        matches!(
            self,
            InsightType::PersonalDay | InsightType::PersonalMonth | InsightType::PersonalYear
        )
    }
}

impl fmt::Display for InsightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InsightType {
    type Err = String;

    /// Accepts the camelCase code, kebab-case or snake_case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        InsightType::ALL
            .iter()
            .find(|t| t.code().to_lowercase() == key)
            .copied()
            .ok_or_else(|| format!("Unknown number type: {}", s))
    }
}

// ============================================================================
// NUMBER RESULT
// ============================================================================

/// Engine output for one calculation: the type and the number, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberResult {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub number: u32,
}

impl NumberResult {
    pub fn new(kind: InsightType, number: u32) -> Self {
        NumberResult { kind, number }
    }
}
