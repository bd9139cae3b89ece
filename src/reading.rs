// 🔮 Reading - every applicable number for a birthdate and/or name
//
// Numbers first, meanings second: `Reading::calculate` is pure arithmetic and
// `Reading::insights` attaches language-resolved text afterwards.

use crate::birthdate::Birthdate;
use crate::error::{EngineError, Result};
use crate::formula;
use crate::language::LanguageCode;
use crate::meanings::{ColorRecommendation, CompatibilityData, MeaningResolver};
use crate::numbers::{self, ForecastCycles, InsightType, NumberResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// CALCULATION
// ============================================================================

/// One number together with how it was reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub result: NumberResult,
    pub formula: String,
}

// ============================================================================
// INSIGHT
// ============================================================================

/// Externally facing result: the number plus its resolved meaning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyInsight {
    #[serde(rename = "type")]
    pub kind: InsightType,
    pub number: u32,
    pub title: String,
    pub description: String,
    pub formula: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_lessons: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_recommendation: Option<ColorRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_recommendations: Option<Vec<ColorRecommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility: Option<CompatibilityData>,
    /// Target date, forecast insights only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

// ============================================================================
// READING
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub birthdate: Option<Birthdate>,
    pub name: Option<String>,
    pub target_date: NaiveDate,
    pub calculations: Vec<Calculation>,
}

impl Reading {
    /// Calculate every number the inputs allow.
    ///
    /// - birthdate: Life Path, Attitude, Generation, Day of Birth, forecast cycles
    /// - name: Expression, Soul Urge, Personality
    /// - both: Maturity
    ///
    /// `None` means "not provided"; `Some("")` is an invalid input. Neither
    /// input is `MissingInput`. Any failing calculator fails the whole reading.
    pub fn calculate(birthdate: Option<&str>, name: Option<&str>, target: NaiveDate) -> Result<Self> {
        if birthdate.is_none() && name.is_none() {
            return Err(EngineError::MissingInput);
        }

        let birthdate = birthdate.map(Birthdate::parse).transpose()?;
        let mut calculations = Vec::new();
        let mut push = |kind: InsightType, number: u32, formula: String| {
            calculations.push(Calculation {
                result: NumberResult::new(kind, number),
                formula,
            });
        };

        let mut life_path = None;
        if let Some(date) = &birthdate {
            let lp = numbers::life_path(date)?;
            life_path = Some(lp);
            push(InsightType::LifePath, lp, formula::life_path(date)?);
            push(InsightType::Attitude, numbers::attitude(date)?, formula::attitude(date)?);
            push(InsightType::Generation, numbers::generation(date)?, formula::generation(date));
            push(
                InsightType::DayOfBirth,
                numbers::day_of_birth(date),
                formula::day_of_birth(date),
            );
        }

        let mut expression = None;
        if let Some(name) = name {
            let ex = numbers::expression(name)?;
            expression = Some(ex);
            push(InsightType::Expression, ex, formula::expression(name)?);
            push(InsightType::SoulUrge, numbers::soul_urge(name)?, formula::soul_urge(name)?);
            push(
                InsightType::Personality,
                numbers::personality(name)?,
                formula::personality(name)?,
            );
        }

        if let (Some(lp), Some(ex)) = (life_path, expression) {
            push(InsightType::Maturity, numbers::maturity(Some(lp), Some(ex))?, formula::maturity(lp, ex)?);
        }

        if let Some(date) = &birthdate {
            let cycles = ForecastCycles::for_date(date, target)?;
            push(
                InsightType::PersonalDay,
                cycles.personal_day,
                formula::personal_day(date, target)?,
            );
            push(
                InsightType::PersonalMonth,
                cycles.personal_month,
                formula::personal_month(date, target)?,
            );
            push(
                InsightType::PersonalYear,
                cycles.personal_year,
                formula::personal_year(date, target)?,
            );
        }

        debug!(count = calculations.len(), target = %target, "calculated reading");

        Ok(Reading {
            birthdate,
            name: name.map(str::to_string),
            target_date: target,
            calculations,
        })
    }

    /// Same as [`Reading::calculate`] with today's local date as the target
    pub fn calculate_today(birthdate: Option<&str>, name: Option<&str>) -> Result<Self> {
        Self::calculate(birthdate, name, Local::now().date_naive())
    }

    /// Bare engine output, in display order
    pub fn numbers(&self) -> Vec<NumberResult> {
        self.calculations.iter().map(|c| c.result).collect()
    }

    pub fn get(&self, kind: InsightType) -> Option<u32> {
        self.calculations
            .iter()
            .find(|c| c.result.kind == kind)
            .map(|c| c.result.number)
    }

    /// Attach meanings. Never fails: missing text becomes a placeholder.
    pub fn insights(&self, resolver: &MeaningResolver, language: LanguageCode) -> Vec<NumerologyInsight> {
        self.calculations
            .iter()
            .map(|calc| {
                let kind = calc.result.kind;
                let number = calc.result.number;
                let meaning = resolver.resolve(kind, number, language);

                NumerologyInsight {
                    kind,
                    number,
                    title: meaning.title,
                    description: meaning.description,
                    formula: calc.formula.clone(),
                    strengths: meaning.strengths,
                    life_lessons: meaning.life_lessons,
                    color_recommendation: meaning.color_recommendation,
                    color_recommendations: meaning.color_recommendations,
                    compatibility: meaning.compatibility,
                    date: kind.is_forecast().then_some(self.target_date),
                }
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
