// Typed meaning tables

use crate::numbers::InsightType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// TABLE NAME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MeaningTable {
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
    Strengths,
    LifeLessons,
    ColorRecommendations,
    Compatibility,
}

impl MeaningTable {
    pub const ALL: [MeaningTable; 15] = [
        MeaningTable::LifePath,
        MeaningTable::Attitude,
        MeaningTable::Generation,
        MeaningTable::DayOfBirth,
        MeaningTable::Expression,
        MeaningTable::SoulUrge,
        MeaningTable::Personality,
        MeaningTable::Maturity,
        MeaningTable::PersonalDay,
        MeaningTable::PersonalMonth,
        MeaningTable::PersonalYear,
        MeaningTable::Strengths,
        MeaningTable::LifeLessons,
        MeaningTable::ColorRecommendations,
        MeaningTable::Compatibility,
    ];

    /// Base file name under `<translations>/<lang>/`
    pub fn file_name(&self) -> &'static str {
        match self {
            MeaningTable::LifePath => "lifePathMeanings.json",
            MeaningTable::Attitude => "attitudeMeanings.json",
            MeaningTable::Generation => "generationMeanings.json",
            MeaningTable::DayOfBirth => "dayOfBirthMeanings.json",
            MeaningTable::Expression => "expressionMeanings.json",
            MeaningTable::SoulUrge => "soulUrgeMeanings.json",
            MeaningTable::Personality => "personalityMeanings.json",
            MeaningTable::Maturity => "maturityMeanings.json",
            MeaningTable::PersonalDay => "personalDayMeanings.json",
            MeaningTable::PersonalMonth => "personalMonthMeanings.json",
            MeaningTable::PersonalYear => "personalYearMeanings.json",
            MeaningTable::Strengths => "strengths.json",
            MeaningTable::LifeLessons => "lifeLessons.json",
            MeaningTable::ColorRecommendations => "colorRecommendations.json",
            MeaningTable::Compatibility => "compatibility.json",
        }
    }

    /// The description table for an insight type
    pub fn for_insight(kind: InsightType) -> MeaningTable {
        match kind {
            InsightType::LifePath => MeaningTable::LifePath,
            InsightType::Attitude => MeaningTable::Attitude,
            InsightType::Generation => MeaningTable::Generation,
            InsightType::DayOfBirth => MeaningTable::DayOfBirth,
            InsightType::Expression => MeaningTable::Expression,
            InsightType::SoulUrge => MeaningTable::SoulUrge,
            InsightType::Personality => MeaningTable::Personality,
            InsightType::Maturity => MeaningTable::Maturity,
            InsightType::PersonalDay => MeaningTable::PersonalDay,
            InsightType::PersonalMonth => MeaningTable::PersonalMonth,
            InsightType::PersonalYear => MeaningTable::PersonalYear,
        }
    }
}

// ============================================================================
// ENTRY SHAPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRecommendation {
    pub color: String,
    pub hex: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityText {
    pub overview: String,
    #[serde(default)]
    pub best_matches_desc: String,
    #[serde(default)]
    pub good_matches_desc: String,
    #[serde(default)]
    pub challenging_matches_desc: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityData {
    pub best_matches: Vec<u32>,
    pub good_matches: Vec<u32>,
    pub challenging_matches: Vec<u32>,
    pub compatibility: CompatibilityText,
}

/// One value of a table. Shapes are tried in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableEntry {
    Titled { title: String, meaning: String },
    Compatibility(CompatibilityData),
    Colors(Vec<ColorRecommendation>),
    List(Vec<String>),
    Text(String),
}

impl TableEntry {
    /// Main text of the entry, if it has one
    pub fn text(&self) -> Option<&str> {
        match self {
            TableEntry::Titled { meaning, .. } => Some(meaning),
            TableEntry::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            TableEntry::Titled { title, .. } => Some(title),
            _ => None,
        }
    }

    /// Lists come back as-is; a single string becomes a one-item list
    pub fn list(&self) -> Option<Vec<String>> {
        match self {
            TableEntry::List(items) => Some(items.clone()),
            TableEntry::Text(text) => Some(vec![text.clone()]),
            _ => None,
        }
    }

    pub fn colors(&self) -> Option<&[ColorRecommendation]> {
        match self {
            TableEntry::Colors(colors) => Some(colors),
            _ => None,
        }
    }

    pub fn compatibility(&self) -> Option<&CompatibilityData> {
        match self {
            TableEntry::Compatibility(data) => Some(data),
            _ => None,
        }
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Number-keyed entries of one table in one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table {
    entries: BTreeMap<u32, TableEntry>,
}

impl Table {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse meaning table JSON")
    }

    pub fn get(&self, number: u32) -> Option<&TableEntry> {
        self.entries.get(&number)
    }

    pub fn insert(&mut self, number: u32, entry: TableEntry) {
        self.entries.insert(number, entry);
    }

    pub fn numbers(&self) -> Vec<u32> {
        self.entries.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
