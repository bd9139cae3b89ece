// 📖 Meaning/Attribute Resolver
// Maps a calculated number to language-resolved text.
//
// The numeric engine never depends on anything here: tables, loaders and the
// cache only enrich results after the numbers exist.

pub mod cache;
pub mod loader;
pub mod resolver;
pub mod table;

pub use cache::TableCache;
pub use loader::{ChainLoader, DirectoryLoader, EmbeddedLoader, TableLoader};
pub use resolver::{placeholder, Meaning, MeaningResolver};
pub use table::{
    ColorRecommendation, CompatibilityData, CompatibilityText, MeaningTable, Table, TableEntry,
};
