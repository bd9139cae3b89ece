// ⚠️ Engine Errors
// Every calculation either produces a real number or fails loudly.

use crate::numbers::InsightType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Coarse classification callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed birthdate/name, or a value outside the domain
    InvalidInput,
    /// The name has no letters of the class a calculator needs
    InsufficientComposition,
    /// Calculators were invoked out of order
    MissingDependency,
}

// ============================================================================
// ENGINE ERROR
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Birthdate is required")]
    MissingBirthdate,

    /// A reading needs at least one of birthdate and name
    #[error("Birthdate or name is required")]
    MissingInput,

    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Name must contain at least one letter")]
    EmptyName,

    /// `reduce(0)` has no meaning in this system
    #[error("Cannot reduce zero")]
    ZeroValue,

    /// Value is neither 1-9 nor a master number
    #[error("{0} is not a reduced numerology number")]
    InvalidNumber(u32),

    #[error("Name must contain at least one vowel")]
    NoVowels,

    #[error("Name must contain at least one consonant")]
    NoConsonants,

    #[error("{} number is required to calculate {}", needed.name(), target.name())]
    MissingDependency {
        target: InsightType,
        needed: InsightType,
    },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::MissingBirthdate
            | EngineError::MissingInput
            | EngineError::InvalidDateFormat(_)
            | EngineError::EmptyName
            | EngineError::ZeroValue
            | EngineError::InvalidNumber(_) => ErrorKind::InvalidInput,
            EngineError::NoVowels | EngineError::NoConsonants => {
                ErrorKind::InsufficientComposition
            }
            EngineError::MissingDependency { .. } => ErrorKind::MissingDependency,
        }
    }
}
