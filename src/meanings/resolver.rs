// Meaning resolver
//
// Two-step lookup: requested language, then the default language. When the
// default has nothing either, a visible placeholder is returned. Resolution
// never fails.

use super::cache::TableCache;
use super::loader::{EmbeddedLoader, TableLoader};
use super::table::{ColorRecommendation, CompatibilityData, MeaningTable, Table, TableEntry};
use crate::language::LanguageCode;
use crate::numbers::InsightType;
use crate::reducer::all_numbers;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

// ============================================================================
// MEANING
// ============================================================================

/// Language-resolved text attached to one calculated number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub title: String,
    pub description: String,
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
}

/// Shown when no language has an entry for the number
pub fn placeholder(kind: InsightType, number: u32) -> String {
    format!("No meaning available for {} {}", kind.label(), number)
}

// ============================================================================
// RESOLVER
// ============================================================================

pub struct MeaningResolver {
    loader: Box<dyn TableLoader>,
    cache: TableCache,
    default_language: LanguageCode,
}

impl MeaningResolver {
    pub fn new(loader: Box<dyn TableLoader>, default_language: LanguageCode) -> Self {
        MeaningResolver {
            loader,
            cache: TableCache::new(),
            default_language,
        }
    }

    /// Resolver over the built-in tables, English default
    pub fn embedded() -> Self {
        Self::new(Box::new(EmbeddedLoader::new()), LanguageCode::DEFAULT)
    }

    pub fn default_language(&self) -> LanguageCode {
        self.default_language
    }

    /// Exactly one language, through the cache. Load failures count as a miss.
    pub fn table(&self, language: LanguageCode, table: MeaningTable) -> Option<Arc<Table>> {
        if let Some(cached) = self.cache.get(language, table) {
            return cached;
        }

        let loaded = match self.loader.load(language, table) {
            Ok(found) => found,
            Err(e) => {
                warn!(
                    language = %language,
                    table = table.file_name(),
                    error = %e,
                    "failed to load meaning table"
                );
                None
            }
        };
        debug!(
            language = %language,
            table = table.file_name(),
            found = loaded.is_some(),
            "cached meaning table"
        );
        self.cache.insert(language, table, loaded)
    }

    /// Whole table with language fallback
    pub fn resolve_table(&self, language: LanguageCode, table: MeaningTable) -> Option<Arc<Table>> {
        if let Some(found) = self.table(language, table) {
            return Some(found);
        }
        if language == self.default_language {
            return None;
        }
        warn!(
            language = %language,
            table = table.file_name(),
            fallback = %self.default_language,
            "translation not found, falling back"
        );
        self.table(self.default_language, table)
    }

    /// One entry with language fallback
    pub fn entry(&self, language: LanguageCode, table: MeaningTable, number: u32) -> Option<TableEntry> {
        let requested = self
            .table(language, table)
            .and_then(|t| t.get(number).cloned());
        if requested.is_some() || language == self.default_language {
            return requested;
        }

        debug!(
            language = %language,
            table = table.file_name(),
            number,
            "entry missing, using default language"
        );
        self.table(self.default_language, table)
            .and_then(|t| t.get(number).cloned())
    }

    /// Title, description and extras for one calculated number
    pub fn resolve(&self, kind: InsightType, number: u32, language: LanguageCode) -> Meaning {
        let main = self.entry(language, MeaningTable::for_insight(kind), number);

        let title = main
            .as_ref()
            .and_then(|e| e.title().map(str::to_string))
            .unwrap_or_else(|| format!("{} {}", kind.label(), number));
        let description = main
            .as_ref()
            .and_then(|e| e.text().map(str::to_string))
            .unwrap_or_else(|| placeholder(kind, number));

        let mut meaning = Meaning {
            title,
            description,
            strengths: None,
            life_lessons: None,
            color_recommendation: None,
            color_recommendations: None,
            compatibility: None,
        };

        match kind {
            InsightType::LifePath => {
                meaning.strengths = self
                    .entry(language, MeaningTable::Strengths, number)
                    .and_then(|e| e.list());
                meaning.life_lessons = self
                    .entry(language, MeaningTable::LifeLessons, number)
                    .and_then(|e| e.list());
                meaning.color_recommendations = self
                    .entry(language, MeaningTable::ColorRecommendations, number)
                    .and_then(|e| e.colors().map(<[_]>::to_vec));
                meaning.compatibility = self
                    .entry(language, MeaningTable::Compatibility, number)
                    .and_then(|e| e.compatibility().cloned());
            }
            InsightType::PersonalDay => {
                meaning.color_recommendation = self
                    .entry(language, MeaningTable::ColorRecommendations, number)
                    .and_then(|e| e.colors().and_then(|c| c.first().cloned()));
            }
            _ => {}
        }

        meaning
    }

    /// Meanings for every interpretable number of a type
    pub fn all_meanings(&self, kind: InsightType, language: LanguageCode) -> Vec<(u32, Meaning)> {
        let numbers: Vec<u32> = if kind == InsightType::DayOfBirth {
            (1..=31).collect()
        } else {
            all_numbers()
        };
        numbers
            .into_iter()
            .map(|n| (n, self.resolve(kind, n, language)))
            .collect()
    }

    /// Forget cached tables for a language (e.g. after translations change on disk)
    pub fn invalidate(&self, language: LanguageCode) {
        self.cache.invalidate(language);
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cached_tables(&self) -> usize {
        self.cache.len()
    }
}

impl Default for MeaningResolver {
    fn default() -> Self {
        Self::embedded()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory loader that counts calls
    struct StubLoader {
        calls: Arc<AtomicUsize>,
    }

    impl TableLoader for StubLoader {
        fn load(&self, language: LanguageCode, table: MeaningTable) -> Result<Option<Table>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match (language, table) {
                (LanguageCode::En, MeaningTable::Attitude) => {
                    Table::from_json(r#"{"1": "en one", "2": "en two"}"#).map(Some)
                }
                (LanguageCode::Es, MeaningTable::Attitude) => {
                    Table::from_json(r#"{"1": "es uno"}"#).map(Some)
                }
                (LanguageCode::De, _) => Err(anyhow!("disk on fire")),
                _ => Ok(None),
            }
        }

        fn describe(&self) -> String {
            "stub".to_string()
        }
    }

    fn stub() -> (MeaningResolver, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = MeaningResolver::new(
            Box::new(StubLoader { calls: calls.clone() }),
            LanguageCode::En,
        );
        (resolver, calls)
    }

    #[test]
    fn test_requested_language_wins() {
        let (resolver, _) = stub();
        let meaning = resolver.resolve(InsightType::Attitude, 1, LanguageCode::Es);
        assert_eq!(meaning.description, "es uno");
        assert_eq!(meaning.title, "Attitude 1");
    }

    #[test]
    fn test_missing_entry_falls_back_to_default() {
        let (resolver, _) = stub();
        let meaning = resolver.resolve(InsightType::Attitude, 2, LanguageCode::Es);
        assert_eq!(meaning.description, "en two");
    }

    #[test]
    fn test_missing_table_falls_back_to_default() {
        let (resolver, _) = stub();
        let meaning = resolver.resolve(InsightType::Attitude, 1, LanguageCode::Fr);
        assert_eq!(meaning.description, "en one");
    }

    #[test]
    fn test_loader_error_falls_back_without_failing() {
        let (resolver, _) = stub();
        let meaning = resolver.resolve(InsightType::Attitude, 1, LanguageCode::De);
        assert_eq!(meaning.description, "en one");
    }

    #[test]
    fn test_placeholder_when_nothing_exists() {
        let (resolver, _) = stub();
        let meaning = resolver.resolve(InsightType::Maturity, 7, LanguageCode::Es);
        assert_eq!(meaning.title, "Maturity Number 7");
        assert_eq!(meaning.description, "No meaning available for Maturity Number 7");
        assert!(meaning.strengths.is_none());
    }

    #[test]
    fn test_tables_load_once() {
        let (resolver, calls) = stub();
        resolver.resolve(InsightType::Attitude, 1, LanguageCode::En);
        resolver.resolve(InsightType::Attitude, 2, LanguageCode::En);
        resolver.resolve(InsightType::Attitude, 3, LanguageCode::En);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // misses are cached too
        resolver.resolve(InsightType::Maturity, 1, LanguageCode::En);
        resolver.resolve(InsightType::Maturity, 2, LanguageCode::En);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_invalidate_reloads() {
        let (resolver, calls) = stub();
        resolver.resolve(InsightType::Attitude, 1, LanguageCode::En);
        resolver.invalidate(LanguageCode::En);
        resolver.resolve(InsightType::Attitude, 1, LanguageCode::En);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resolve_table_fallback() {
        let (resolver, _) = stub();
        let table = resolver.resolve_table(LanguageCode::Fr, MeaningTable::Attitude).unwrap();
        assert_eq!(table.len(), 2);
        assert!(resolver.resolve_table(LanguageCode::Fr, MeaningTable::Maturity).is_none());
    }

    #[test]
    fn test_embedded_life_path_is_enriched() {
        let resolver = MeaningResolver::embedded();
        let meaning = resolver.resolve(InsightType::LifePath, 8, LanguageCode::En);
        assert_eq!(meaning.title, "The Achiever");
        assert!(meaning.description.contains("ambitious"));
        assert!(meaning.strengths.is_some_and(|s| !s.is_empty()));
        assert!(meaning.life_lessons.is_some());
        assert!(meaning.color_recommendations.is_some_and(|c| !c.is_empty()));
        assert!(meaning.compatibility.is_some());
        assert!(meaning.color_recommendation.is_none());
    }

    #[test]
    fn test_embedded_personal_day_gets_one_color() {
        let resolver = MeaningResolver::embedded();
        let meaning = resolver.resolve(InsightType::PersonalDay, 1, LanguageCode::En);
        assert!(meaning.color_recommendation.is_some());
        assert!(meaning.color_recommendations.is_none());
    }

    #[test]
    fn test_embedded_spanish_with_english_fallback() {
        let resolver = MeaningResolver::embedded();
        let spanish = resolver.resolve(InsightType::LifePath, 1, LanguageCode::Es);
        let english = resolver.resolve(InsightType::LifePath, 1, LanguageCode::En);
        assert_ne!(spanish.description, english.description);

        // no Spanish maturity table shipped
        let maturity_es = resolver.resolve(InsightType::Maturity, 5, LanguageCode::Es);
        let maturity_en = resolver.resolve(InsightType::Maturity, 5, LanguageCode::En);
        assert_eq!(maturity_es.description, maturity_en.description);
    }

    #[test]
    fn test_all_meanings() {
        let resolver = MeaningResolver::embedded();
        let all = resolver.all_meanings(InsightType::LifePath, LanguageCode::En);
        assert_eq!(all.len(), 12);
        assert_eq!(all[11].0, 33);

        let days = resolver.all_meanings(InsightType::DayOfBirth, LanguageCode::En);
        assert_eq!(days.len(), 31);
        assert!(days.iter().all(|(_, m)| !m.description.starts_with("No meaning")));
    }

    #[test]
    fn test_meaning_serialization_omits_absent_fields() {
        let resolver = MeaningResolver::embedded();
        let json = serde_json::to_value(resolver.resolve(InsightType::Attitude, 7, LanguageCode::En))
            .unwrap();
        assert!(json.get("title").is_some());
        assert!(json.get("strengths").is_none());
        assert!(json.get("colorRecommendation").is_none());
    }
}
