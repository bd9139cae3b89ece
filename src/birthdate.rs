// 📅 Date Decomposer
// Splits a YYYY-MM-DD birthdate into integer fields

use crate::error::{EngineError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Parsed birthdate. Immutable once built.
///
/// Fields are range-checked (month 1-12, day 1-31) but not checked against
/// the calendar: `2023-02-31` parses. Use [`Birthdate::is_calendar_valid`]
/// when that matters.
/// Serialized as the `YYYY-MM-DD` string; deserializing goes through [`Birthdate::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthdate {
    year: u32,
    month: u32,
    day: u32,
}

impl Birthdate {
    /// Parse a `YYYY-MM-DD` string
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EngineError::MissingBirthdate);
        }

        let invalid = || EngineError::InvalidDateFormat(input.to_string());

        let parts: Vec<&str> = trimmed.split('-').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let mut fields = [0u32; 3];
        for (slot, part) in fields.iter_mut().zip(&parts) {
            let value: u32 = part.trim().parse().map_err(|_| invalid())?;
            // zero in any field is never a valid date
            if value == 0 {
                return Err(invalid());
            }
            *slot = value;
        }

        let [year, month, day] = fields;
        Self::new(year, month, day).map_err(|_| invalid())
    }

    /// Build from already-split fields
    pub fn new(year: u32, month: u32, day: u32) -> Result<Self> {
        if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EngineError::InvalidDateFormat(format!(
                "{:04}-{:02}-{:02}",
                year, month, day
            )));
        }
        Ok(Birthdate { year, month, day })
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether the date exists on the proleptic Gregorian calendar
    pub fn is_calendar_valid(&self) -> bool {
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .is_some()
    }
}

impl FromStr for Birthdate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Birthdate::parse(s)
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl TryFrom<String> for Birthdate {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self> {
        Birthdate::parse(&value)
    }
}

impl From<Birthdate> for String {
    fn from(date: Birthdate) -> String {
        date.to_string()
    }
}

impl TryFrom<NaiveDate> for Birthdate {
    type Error = EngineError;

    fn try_from(date: NaiveDate) -> Result<Self> {
        let year = u32::try_from(date.year())
            .map_err(|_| EngineError::InvalidDateFormat(date.to_string()))?;
        Birthdate::new(year, date.month(), date.day())
    }
}

// ============================================================================
// TESTS
// ============================================================================
