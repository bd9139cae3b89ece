// ⚙️ Configuration
// Defaults < JSON file < environment variables

use crate::language::LanguageCode;
use crate::meanings::{ChainLoader, DirectoryLoader, EmbeddedLoader, MeaningResolver, TableLoader};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_LANG: &str = "NUMEROLOGY_LANG";
pub const ENV_TRANSLATIONS_DIR: &str = "NUMEROLOGY_TRANSLATIONS_DIR";
pub const ENV_ADDR: &str = "NUMEROLOGY_ADDR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language used when a requested translation is missing
    #[serde(deserialize_with = "lenient_language")]
    pub default_language: LanguageCode,

    /// Optional on-disk tables layered over the built-in ones
    pub translations_dir: Option<PathBuf>,

    /// Listen address for the HTTP server
    pub server_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_language: LanguageCode::DEFAULT,
            translations_dir: None,
            server_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Unsupported codes in a config file fall back instead of failing the load
fn lenient_language<'de, D>(deserializer: D) -> std::result::Result<LanguageCode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let code = String::deserialize(deserializer)?;
    Ok(LanguageCode::parse_or_default(&code))
}

impl Config {
    /// Load from a JSON file; absent fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config = serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Self {
        Config::default().with_env()
    }

    /// Apply `NUMEROLOGY_*` environment overrides
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup(ENV_LANG) {
            self.default_language = LanguageCode::parse_or_default(&code);
        }
        if let Some(dir) = lookup(ENV_TRANSLATIONS_DIR).filter(|d| !d.trim().is_empty()) {
            self.translations_dir = Some(PathBuf::from(dir));
        }
        if let Some(addr) = lookup(ENV_ADDR).filter(|a| !a.trim().is_empty()) {
            self.server_addr = addr;
        }
        self
    }

    /// Resolver over the embedded tables, with `translations_dir` taking priority
    pub fn build_resolver(&self) -> MeaningResolver {
        let loader: Box<dyn TableLoader> = match &self.translations_dir {
            Some(dir) => {
                debug!(dir = %dir.display(), "layering translations directory over embedded tables");
                Box::new(ChainLoader::new(vec![
                    Box::new(DirectoryLoader::new(dir)),
                    Box::new(EmbeddedLoader::new()),
                ]))
            }
            None => Box::new(EmbeddedLoader::new()),
        };
        MeaningResolver::new(loader, self.default_language)
    }
}
