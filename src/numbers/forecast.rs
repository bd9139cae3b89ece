// Forecast cycles: Personal Day, Month and Year for a target date
//
// The three formulas are intentionally asymmetric:
//   day   = birth day + target day + target month + target year
//   month = birth month + target month + target year
//   year  = birth day + birth month + target year

use crate::birthdate::Birthdate;
use crate::error::{EngineError, Result};
use crate::reducer::reduce;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Target year as an unsigned field; years before 0 CE are outside the domain
pub(crate) fn target_year(target: NaiveDate) -> Result<u32> {
    u32::try_from(target.year()).map_err(|_| EngineError::InvalidDateFormat(target.to_string()))
}

/// birth day + target day + target month + target year, unreduced
pub(crate) fn personal_day_sum(birthdate: &Birthdate, target: NaiveDate) -> Result<u32> {
    Ok(birthdate.day() + target.day() + target.month() + target_year(target)?)
}

/// birth month + target month + target year, unreduced
pub(crate) fn personal_month_sum(birthdate: &Birthdate, target: NaiveDate) -> Result<u32> {
    Ok(birthdate.month() + target.month() + target_year(target)?)
}

/// birth day + birth month + target year, unreduced
pub(crate) fn personal_year_sum(birthdate: &Birthdate, target: NaiveDate) -> Result<u32> {
    Ok(birthdate.day() + birthdate.month() + target_year(target)?)
}

pub fn personal_day(birthdate: &Birthdate, target: NaiveDate) -> Result<u32> {
    reduce(personal_day_sum(birthdate, target)?)
}

pub fn personal_month(birthdate: &Birthdate, target: NaiveDate) -> Result<u32> {
    reduce(personal_month_sum(birthdate, target)?)
}

pub fn personal_year(birthdate: &Birthdate, target: NaiveDate) -> Result<u32> {
    reduce(personal_year_sum(birthdate, target)?)
}

// ============================================================================
// FORECAST CYCLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastCycles {
    pub personal_day: u32,
    pub personal_month: u32,
    pub personal_year: u32,
    pub date: NaiveDate,
}

impl ForecastCycles {
    /// Cycles for an explicit target date. The birth year is not used.
    pub fn for_date(birthdate: &Birthdate, target: NaiveDate) -> Result<Self> {
        let cycles = ForecastCycles {
            personal_day: personal_day(birthdate, target)?,
            personal_month: personal_month(birthdate, target)?,
            personal_year: personal_year(birthdate, target)?,
            date: target,
        };
        debug!(
            birthdate = %birthdate,
            target = %target,
            day = cycles.personal_day,
            month = cycles.personal_month,
            year = cycles.personal_year,
            "calculated forecast cycles"
        );
        Ok(cycles)
    }

    /// Cycles for the local calendar date
    pub fn today(birthdate: &Birthdate) -> Result<Self> {
        Self::for_date(birthdate, Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_forecast_worked_example() {
        let birth = Birthdate::parse("1990-10-15").unwrap();
        let target = ymd(2024, 3, 20);
        assert_eq!(personal_day(&birth, target).unwrap(), 1);
        assert_eq!(personal_month(&birth, target).unwrap(), 3);
        assert_eq!(personal_year(&birth, target).unwrap(), 6);
    }

    #[test]
    fn test_invalid_birth_fields_never_reach_the_sum() {
        // a zero day or month cannot be turned into a Birthdate
        assert!(Birthdate::new(1990, 10, 0).is_err());
        assert!(Birthdate::new(1990, 0, 15).is_err());
        assert!(Birthdate::new(1990, 10, u32::MAX).is_err());

        // largest fields with the largest target year stay in range
        let birth = Birthdate::parse("1990-12-31").unwrap();
        let target = NaiveDate::MAX;
        assert!(personal_day(&birth, target).is_ok());
        assert!(personal_month(&birth, target).is_ok());
        assert!(personal_year(&birth, target).is_ok());
    }

    #[test]
    fn test_negative_target_year_rejected() {
        let birth = Birthdate::parse("1990-10-15").unwrap();
        let target = ymd(-44, 3, 15);
        assert!(matches!(
            personal_day(&birth, target),
            Err(EngineError::InvalidDateFormat(_))
        ));
        assert!(ForecastCycles::for_date(&birth, target).is_err());
    }

    #[test]
    fn test_today_matches_for_date() {
        let birth = Birthdate::parse("1990-10-15").unwrap();
        let before = Local::now().date_naive();
        let today = ForecastCycles::today(&birth).unwrap();
        let after = Local::now().date_naive();

        // tolerate a midnight rollover between the two clock reads
        assert!(today.date == before || today.date == after);
        assert_eq!(today, ForecastCycles::for_date(&birth, today.date).unwrap());
    }

    #[test]
    fn test_cycles_for_date() {
        let birth = Birthdate::parse("1990-10-15").unwrap();
        let cycles = ForecastCycles::for_date(&birth, ymd(2024, 3, 20)).unwrap();
        assert_eq!(cycles.personal_day, 1);
        assert_eq!(cycles.personal_month, 3);
        assert_eq!(cycles.personal_year, 6);
        assert_eq!(cycles.date, ymd(2024, 3, 20));
    }

    #[test]
    fn test_birth_year_does_not_matter() {
        let target = ymd(2025, 7, 4);
        let a = ForecastCycles::for_date(&Birthdate::parse("1960-10-15").unwrap(), target).unwrap();
        let b = ForecastCycles::for_date(&Birthdate::parse("2001-10-15").unwrap(), target).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_personal_month_ignores_birth_day() {
        let target = ymd(2024, 3, 20);
        let a = ForecastCycles::for_date(&Birthdate::parse("1990-10-01").unwrap(), target).unwrap();
        let b = ForecastCycles::for_date(&Birthdate::parse("1990-10-28").unwrap(), target).unwrap();
        assert_eq!(a.personal_month, b.personal_month);
    }

    #[test]
    fn test_personal_year_ignores_target_day_and_month() {
        let birth = Birthdate::parse("1990-10-15").unwrap();
        let jan = ForecastCycles::for_date(&birth, ymd(2024, 1, 1)).unwrap();
        let dec = ForecastCycles::for_date(&birth, ymd(2024, 12, 31)).unwrap();
        assert_eq!(jan.personal_year, dec.personal_year);
    }

    #[test]
    fn test_cycles_serialize_camel_case() {
        let birth = Birthdate::parse("1990-10-15").unwrap();
        let cycles = ForecastCycles::for_date(&birth, ymd(2024, 3, 20)).unwrap();
        let json = serde_json::to_value(cycles).unwrap();
        assert_eq!(json["personalDay"], 1);
        assert_eq!(json["date"], "2024-03-20");
    }
}
