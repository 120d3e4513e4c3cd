//! VocabImpostor — vocabulary categories and catalog.
//!
//! Categories are immutable once created. The built-in set is embedded
//! as YAML at compile time; custom categories arrive from the generator
//! and are appended to the catalog after validation.

mod catalog;
mod category;

pub use catalog::CategoryCatalog;
pub use category::Category;
