pub mod catalog;
pub mod config;
pub mod document;
pub mod domain;
pub mod error;
pub mod extract;
pub mod filter;
pub mod table;

pub use config::ExtractOptions;
pub use document::{Document, open_ec};
pub use error::BrendaError;
pub use extract::{
    EntryData, Extractor, NestedMapping, Shape, extract, extract_columns, extract_entry,
    extract_table,
};
