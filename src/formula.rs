// 🧾 Formula strings
// How each number was reached, for display next to the result

use crate::birthdate::Birthdate;
use crate::error::Result;
use crate::numbers::{self, forecast};
use crate::numbers::birth::LifePathParts;
use crate::numbers::name::{letter_sum, LetterFilter};
use crate::reducer::{digit_sum, reduce, show_reduction};
use chrono::{Datelike, NaiveDate};

/// "Month + Day + Year = Life Path", each part already reduced
pub fn life_path(date: &Birthdate) -> Result<String> {
    let parts = LifePathParts::calculate(date)?;
    Ok(format!(
        "{}/{}/{}: {} + {} + {} = {}",
        date.month(),
        date.day(),
        date.year(),
        parts.reduced_month,
        parts.reduced_day,
        parts.reduced_year,
        show_reduction(parts.total)
    ))
}

pub fn attitude(date: &Birthdate) -> Result<String> {
    let month = reduce(date.month())?;
    let day = reduce(date.day())?;
    Ok(format!(
        "{}/{}: {} + {} = {}",
        date.month(),
        date.day(),
        month,
        day,
        show_reduction(month + day)
    ))
}

pub fn generation(date: &Birthdate) -> String {
    format!("{} → {}", date.year(), show_reduction(digit_sum(date.year())))
}

pub fn day_of_birth(date: &Birthdate) -> String {
    format!("Day: {}", date.day())
}

pub fn expression(name: &str) -> Result<String> {
    let sum = letter_sum(name, LetterFilter::All)?;
    Ok(format!("Sum of all letters: {}", show_reduction(sum)))
}

pub fn soul_urge(name: &str) -> Result<String> {
    let sum = letter_sum(name, LetterFilter::Vowels)?;
    Ok(format!("Sum of vowels: {}", show_reduction(sum)))
}

pub fn personality(name: &str) -> Result<String> {
    let sum = letter_sum(name, LetterFilter::Consonants)?;
    Ok(format!("Sum of consonants: {}", show_reduction(sum)))
}

/// Inputs must already be reduced numbers, as for the Maturity calculator
pub fn maturity(life_path: u32, expression: u32) -> Result<String> {
    numbers::maturity(Some(life_path), Some(expression))?;
    let sum = life_path + expression;
    Ok(format!(
        "Life Path {} + Expression {} = {}",
        life_path,
        expression,
        show_reduction(sum)
    ))
}

pub fn personal_day(date: &Birthdate, target: NaiveDate) -> Result<String> {
    let sum = forecast::personal_day_sum(date, target)?;
    Ok(format!(
        "Birth Day {} + Current Day {} + Current Month {} + Current Year {} = {}",
        date.day(),
        target.day(),
        target.month(),
        target.year(),
        show_reduction(sum)
    ))
}

pub fn personal_month(date: &Birthdate, target: NaiveDate) -> Result<String> {
    let sum = forecast::personal_month_sum(date, target)?;
    Ok(format!(
        "Birth Month {} + Current Month {} + Current Year {} = {}",
        date.month(),
        target.month(),
        target.year(),
        show_reduction(sum)
    ))
}

pub fn personal_year(date: &Birthdate, target: NaiveDate) -> Result<String> {
    let sum = forecast::personal_year_sum(date, target)?;
    Ok(format!(
        "Birth Day {} + Birth Month {} + Current Year {} = {}",
        date.day(),
        date.month(),
        target.year(),
        show_reduction(sum)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    fn birth() -> Birthdate {
        Birthdate::parse("1990-10-15").unwrap()
    }

    #[test]
    fn test_birth_formulas() {
        assert_eq!(life_path(&birth()).unwrap(), "10/15/1990: 1 + 6 + 1 = 8");
        assert_eq!(attitude(&birth()).unwrap(), "10/15: 1 + 6 = 7");
        assert_eq!(generation(&birth()), "1990 → 19 → 1 + 9 = 10 → 1 + 0 = 1");
        assert_eq!(day_of_birth(&birth()), "Day: 15");
    }

    #[test]
    fn test_name_formulas() {
        assert_eq!(expression("John Smith").unwrap(), "Sum of all letters: 44 → 4 + 4 = 8");
        assert_eq!(soul_urge("John Smith").unwrap(), "Sum of vowels: 15 → 1 + 5 = 6");
        assert_eq!(personality("John Smith").unwrap(), "Sum of consonants: 29 → 2 + 9 = 11");
        assert!(soul_urge("xyz").is_err());
    }

    #[test]
    fn test_maturity_formula() {
        assert_eq!(maturity(8, 6).unwrap(), "Life Path 8 + Expression 6 = 14 → 1 + 4 = 5");
    }

    #[test]
    fn test_maturity_formula_rejects_unreduced_inputs() {
        assert_eq!(maturity(44, 6), Err(EngineError::InvalidNumber(44)));
        assert_eq!(maturity(8, 0), Err(EngineError::InvalidNumber(0)));
        assert!(maturity(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_forecast_formulas_reject_negative_years() {
        let target = NaiveDate::from_ymd_opt(-1, 6, 1).unwrap();
        for result in [
            personal_day(&birth(), target),
            personal_month(&birth(), target),
            personal_year(&birth(), target),
        ] {
            assert!(matches!(result, Err(EngineError::InvalidDateFormat(_))));
        }
    }

    #[test]
    fn test_forecast_formulas() {
        let target = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(
            personal_day(&birth(), target).unwrap(),
            "Birth Day 15 + Current Day 20 + Current Month 3 + Current Year 2024 = 2062 → 2 + 0 + 6 + 2 = 10 → 1 + 0 = 1"
        );
        assert_eq!(
            personal_month(&birth(), target).unwrap(),
            "Birth Month 10 + Current Month 3 + Current Year 2024 = 2037 → 2 + 0 + 3 + 7 = 12 → 1 + 2 = 3"
        );
        assert_eq!(
            personal_year(&birth(), target).unwrap(),
            "Birth Day 15 + Birth Month 10 + Current Year 2024 = 2049 → 2 + 0 + 4 + 9 = 15 → 1 + 5 = 6"
        );
    }
}
