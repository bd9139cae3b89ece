// Birthdate-derived numbers

use crate::birthdate::Birthdate;
use crate::error::Result;
use crate::reducer::{digit_sum, reduce};
use tracing::debug;

/// Intermediate values of a Life Path calculation, kept for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifePathParts {
    pub reduced_month: u32,
    pub reduced_day: u32,
    /// Raw digit sum of the year, before reduction
    pub year_sum: u32,
    pub reduced_year: u32,
    /// reduced_month + reduced_day + reduced_year, before the final reduction
    pub total: u32,
    pub life_path: u32,
}

impl LifePathParts {
    pub fn calculate(date: &Birthdate) -> Result<Self> {
        let reduced_month = reduce(date.month())?;
        let reduced_day = reduce(date.day())?;
        let year_sum = digit_sum(date.year());
        let reduced_year = reduce(year_sum)?;
        let total = reduced_month + reduced_day + reduced_year;

        Ok(LifePathParts {
            reduced_month,
            reduced_day,
            year_sum,
            reduced_year,
            total,
            life_path: reduce(total)?,
        })
    }
}

/// reduce(month) + reduce(day) + reduce(digitSum(year)), reduced
pub fn life_path(date: &Birthdate) -> Result<u32> {
    let parts = LifePathParts::calculate(date)?;
    debug!(birthdate = %date, life_path = parts.life_path, "calculated life path");
    Ok(parts.life_path)
}

/// reduce(month) + reduce(day), reduced. The year is ignored.
pub fn attitude(date: &Birthdate) -> Result<u32> {
    reduce(reduce(date.month())? + reduce(date.day())?)
}

/// Digit sum of the year, reduced
pub fn generation(date: &Birthdate) -> Result<u32> {
    reduce(digit_sum(date.year()))
}

/// The raw day of the month, 1-31. Never reduced.
pub fn day_of_birth(date: &Birthdate) -> u32 {
    date.day()
}
