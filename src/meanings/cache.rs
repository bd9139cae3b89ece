// Table cache
//
// Populate-once per (language, table). Misses are cached too so an absent
// translation is not re-read on every lookup.

use super::table::{MeaningTable, Table};
use crate::language::LanguageCode;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Key = (LanguageCode, MeaningTable);

#[derive(Debug, Default)]
pub struct TableCache {
    entries: RwLock<HashMap<Key, Option<Arc<Table>>>>,
}

impl TableCache {
    pub fn new() -> Self {
        TableCache::default()
    }

    // Entries are immutable snapshots, so a poisoned lock still holds valid data
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Key, Option<Arc<Table>>>> {
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Key, Option<Arc<Table>>>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }

    /// `None` = never looked up; `Some(None)` = looked up, not available
    pub fn get(&self, language: LanguageCode, table: MeaningTable) -> Option<Option<Arc<Table>>> {
        self.read().get(&(language, table)).cloned()
    }

    /// Store a lookup result. The first stored value wins.
    pub fn insert(
        &self,
        language: LanguageCode,
        table: MeaningTable,
        value: Option<Table>,
    ) -> Option<Arc<Table>> {
        self.write()
            .entry((language, table))
            .or_insert_with(|| value.map(Arc::new))
            .clone()
    }

    /// Drop every table cached for one language
    pub fn invalidate(&self, language: LanguageCode) {
        self.write().retain(|(lang, _), _| *lang != language);
    }

    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
