// Table loaders
//
// A loader answers "is there a <table> for <language>?" with Ok(Some), Ok(None)
// for a plain miss, or Err when the table exists but cannot be read.

use super::table::{MeaningTable, Table};
use crate::language::LanguageCode;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub trait TableLoader: Send + Sync {
    fn load(&self, language: LanguageCode, table: MeaningTable) -> Result<Option<Table>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

// ============================================================================
// EMBEDDED TABLES
// ============================================================================

macro_rules! translation {
    ($lang:literal, $file:literal) => {
        include_str!(concat!("../../data/translations/", $lang, "/", $file))
    };
}

/// Tables compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    pub fn new() -> Self {
        EmbeddedLoader
    }

    /// Raw JSON for a table, if shipped
    pub fn source(language: LanguageCode, table: MeaningTable) -> Option<&'static str> {
        use LanguageCode::*;
        use MeaningTable::*;

        let json = match (language, table) {
            (En, LifePath) => translation!("en", "lifePathMeanings.json"),
            (En, Attitude) => translation!("en", "attitudeMeanings.json"),
            (En, Generation) => translation!("en", "generationMeanings.json"),
            (En, DayOfBirth) => translation!("en", "dayOfBirthMeanings.json"),
            (En, Expression) => translation!("en", "expressionMeanings.json"),
            (En, SoulUrge) => translation!("en", "soulUrgeMeanings.json"),
            (En, Personality) => translation!("en", "personalityMeanings.json"),
            (En, Maturity) => translation!("en", "maturityMeanings.json"),
            (En, PersonalDay) => translation!("en", "personalDayMeanings.json"),
            (En, PersonalMonth) => translation!("en", "personalMonthMeanings.json"),
            (En, PersonalYear) => translation!("en", "personalYearMeanings.json"),
            (En, Strengths) => translation!("en", "strengths.json"),
            (En, LifeLessons) => translation!("en", "lifeLessons.json"),
            (En, ColorRecommendations) => translation!("en", "colorRecommendations.json"),
            (En, Compatibility) => translation!("en", "compatibility.json"),

            (Es, LifePath) => translation!("es", "lifePathMeanings.json"),
            (Es, Expression) => translation!("es", "expressionMeanings.json"),
            (Es, SoulUrge) => translation!("es", "soulUrgeMeanings.json"),
            (Es, Personality) => translation!("es", "personalityMeanings.json"),
            (Es, Strengths) => translation!("es", "strengths.json"),
            (Es, LifeLessons) => translation!("es", "lifeLessons.json"),

            (Fr, LifePath) => translation!("fr", "lifePathMeanings.json"),
            (Fr, Expression) => translation!("fr", "expressionMeanings.json"),

            (De, LifePath) => translation!("de", "lifePathMeanings.json"),
            (De, Expression) => translation!("de", "expressionMeanings.json"),

            _ => return None,
        };
        Some(json)
    }
}

impl TableLoader for EmbeddedLoader {
    fn load(&self, language: LanguageCode, table: MeaningTable) -> Result<Option<Table>> {
        match Self::source(language, table) {
            Some(json) => {
                let parsed = Table::from_json(json).with_context(|| {
                    format!("Embedded table {}/{} is invalid", language, table.file_name())
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

// ============================================================================
// DIRECTORY TABLES
// ============================================================================

/// Reads `<root>/<lang>/<table file>` from disk
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
}

impl DirectoryLoader {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        DirectoryLoader {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, language: LanguageCode, table: MeaningTable) -> PathBuf {
        self.root.join(language.code()).join(table.file_name())
    }
}

impl TableLoader for DirectoryLoader {
    fn load(&self, language: LanguageCode, table: MeaningTable) -> Result<Option<Table>> {
        let path = self.path_for(language, table);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no table file");
                return Ok(None);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read table file: {:?}", path));
            }
        };

        let parsed = Table::from_json(&content)
            .with_context(|| format!("Failed to parse table file: {:?}", path))?;
        Ok(Some(parsed))
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}

// ============================================================================
// CHAINED LOADERS
// ============================================================================

/// Tries each loader in order; the first hit wins.
///
/// A loader that errors is logged and skipped so a broken override file
/// does not hide the tables behind it.
pub struct ChainLoader {
    loaders: Vec<Box<dyn TableLoader>>,
}

impl ChainLoader {
    pub fn new(loaders: Vec<Box<dyn TableLoader>>) -> Self {
        ChainLoader { loaders }
    }
}

impl TableLoader for ChainLoader {
    fn load(&self, language: LanguageCode, table: MeaningTable) -> Result<Option<Table>> {
        for loader in &self.loaders {
            match loader.load(language, table) {
                Ok(Some(found)) => return Ok(Some(found)),
                Ok(None) => continue,
                Err(e) => {
                    warn!(loader = %loader.describe(), error = %e, "table loader failed, trying next");
                }
            }
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        let names: Vec<String> = self.loaders.iter().map(|l| l.describe()).collect();
        format!("chain [{}]", names.join(", "))
    }
}
