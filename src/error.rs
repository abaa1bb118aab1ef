use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum BrendaError {
    #[error("EC page not found or unreadable: {0}")]
    NotFound(PathBuf),

    #[error("table not found on page: {0}")]
    TableNotFound(String),

    #[error("invalid UniProt accession: {0}")]
    InvalidUniprotId(String),

    #[error("invalid EC number: {0}")]
    InvalidEcNumber(String),

    #[error("failed to parse extraction options: {0}")]
    ConfigParse(String),
}
