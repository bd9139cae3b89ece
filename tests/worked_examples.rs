// Worked examples through the public API

use chrono::NaiveDate;
use numerology_engine::*;

fn birth() -> Birthdate {
    Birthdate::parse("1990-10-15").unwrap()
}

fn target() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
}

#[test]
fn test_reduce_properties() {
    for n in 1..=9 {
        assert_eq!(reduce(n).unwrap(), n);
    }
    for master in MASTER_NUMBERS {
        assert_eq!(reduce(master).unwrap(), master);
    }
    for n in 10..5000 {
        let r = reduce(n).unwrap();
        assert!(all_numbers().contains(&r), "reduce({}) = {}", n, r);
        assert_eq!(reduce(r).unwrap(), r);
    }
    assert_eq!(reduce(0), Err(EngineError::ZeroValue));
}

#[test]
fn test_birthdate_examples() {
    let date = birth();
    assert_eq!(life_path(&date).unwrap(), 8);
    assert_eq!(attitude(&date).unwrap(), 7);
    assert_eq!(generation(&date).unwrap(), 1);
    assert_eq!(day_of_birth(&date), 15);
}

#[test]
fn test_name_examples() {
    assert_eq!(expression("John Smith").unwrap(), 8);
    assert_eq!(soul_urge("John Smith").unwrap(), 6);
    assert_eq!(personality("John Smith").unwrap(), 11);
}

#[test]
fn test_maturity_example() {
    assert_eq!(maturity(Some(8), Some(6)).unwrap(), 5);

    let err = maturity(Some(8), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingDependency);
}

#[test]
fn test_forecast_example() {
    let date = birth();
    assert_eq!(personal_day(&date, target()).unwrap(), 1);
    assert_eq!(personal_month(&date, target()).unwrap(), 3);
    assert_eq!(personal_year(&date, target()).unwrap(), 6);
}

#[test]
fn test_reading_without_inputs_is_invalid_input() {
    let err = Reading::calculate(None, None, target()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.to_string(), "Birthdate or name is required");
}

#[test]
fn test_empty_name_fails_every_name_calculator() {
    for calc in [expression, soul_urge, personality] {
        let err = calc("").unwrap_err();
        assert_eq!(err, EngineError::EmptyName);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert_eq!(calc("  1234 !!").unwrap_err(), EngineError::EmptyName);
    }
}

#[test]
fn test_composition_failures_only_when_class_is_empty() {
    assert_eq!(soul_urge("xyz").unwrap_err(), EngineError::NoVowels);
    assert_eq!(personality("Aoi").unwrap_err(), EngineError::NoConsonants);

    // one letter of the class is enough
    assert!(soul_urge("xyza").is_ok());
    assert!(personality("Aoib").is_ok());
}

#[test]
fn test_full_reading_matches_individual_calculators() {
    let reading = Reading::calculate(Some("1990-10-15"), Some("John Smith"), target()).unwrap();
    let expected = [
        (InsightType::LifePath, 8),
        (InsightType::Attitude, 7),
        (InsightType::Generation, 1),
        (InsightType::DayOfBirth, 15),
        (InsightType::Expression, 8),
        (InsightType::SoulUrge, 6),
        (InsightType::Personality, 11),
        (InsightType::Maturity, 7),
        (InsightType::PersonalDay, 1),
        (InsightType::PersonalMonth, 3),
        (InsightType::PersonalYear, 6),
    ];
    let numbers: Vec<(InsightType, u32)> =
        reading.numbers().iter().map(|n| (n.kind, n.number)).collect();
    assert_eq!(numbers, expected);
}

#[test]
fn test_resolver_never_fails() {
    let resolver = MeaningResolver::embedded();

    let meaning = resolver.resolve(InsightType::LifePath, 8, LanguageCode::parse_or_default("xx"));
    assert_eq!(meaning.title, "The Achiever");

    let missing = resolver.resolve(InsightType::Expression, 42, LanguageCode::De);
    assert_eq!(missing.description, "No meaning available for Expression Number 42");
}
