//! Chemistry reference core: periodic-table layout, catalog search and
//! filtering, facet accessors, and the built-in element, reaction, question
//! and learning-path catalogs.

pub mod accessors;
pub mod bundle;
pub mod catalog;
pub mod config;
mod data;
pub mod error;
pub mod filter;
pub mod layout;
pub mod progress;
pub mod quiz;
pub mod render;

pub use catalog::Catalog;
pub use layout::PeriodicGrid;
