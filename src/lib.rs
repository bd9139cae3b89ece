// Numerology Engine - Core Library
// Exposes all modules for use in CLI, API server, and tests

pub mod error;      // Engine errors + kinds
pub mod reducer;    // Digit reduction, master numbers
pub mod birthdate;  // YYYY-MM-DD parsing
pub mod letters;    // Pythagorean letter values
pub mod numbers;    // Core, name, composite and forecast numbers
pub mod formula;    // Human-readable derivations
pub mod language;   // Supported languages
pub mod meanings;   // Translation tables + resolver
pub mod reading;    // Combined reading
pub mod batch;      // CSV batch readings
pub mod config;     // Defaults / file / env

// Re-export commonly used types
pub use error::{EngineError, ErrorKind, Result};
pub use reducer::{all_numbers, is_master_number, reduce, show_reduction, MASTER_NUMBERS};
pub use birthdate::Birthdate;
pub use letters::{breakdown, letter_map_explanation, LetterValue};
pub use numbers::{
    attitude, day_of_birth, expression, generation, life_path, maturity, personal_day,
    personal_month, personal_year, personality, soul_urge,
    ForecastCycles, InsightType, NumberResult,
};
pub use language::LanguageCode;
pub use meanings::{
    ChainLoader, DirectoryLoader, EmbeddedLoader, Meaning, MeaningResolver, MeaningTable,
    TableLoader,
};
pub use reading::{Calculation, NumerologyInsight, Reading};
pub use batch::BatchSummary;
pub use config::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
