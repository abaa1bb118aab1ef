use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::BrendaError;

/// Identifier sub-key for rows that carry no protein accession.
pub const UNKNOWN: &str = "unknown";

static UNIPROT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9](?:[A-Z][A-Z0-9]{2}[0-9]){1,2})$")
        .expect("valid UniProt accession pattern")
});

static EC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+\.[0-9a-zA-Z]+$").expect("valid EC number pattern")
});

const NUM: &str = r"[-+]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][-+]?[0-9]+)?";

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{NUM}$")).expect("valid number pattern"));

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^({NUM})(?:-|to)({NUM})$")).expect("valid range pattern")
});

static COMPOUND_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\+\s").expect("valid compound separator"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniprotId(String);

impl UniprotId {
    /// Exact, case-sensitive accession check.
    pub fn is_accession(text: &str) -> bool {
        UNIPROT_RE.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UniprotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UniprotId {
    type Err = BrendaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_uppercase();
        if !UNIPROT_RE.is_match(&normalized) {
            return Err(BrendaError::InvalidUniprotId(value.to_string()));
        }
        Ok(Self(normalized))
    }
}

/// Enzyme Commission number of one BRENDA entry, e.g. `1.1.1.1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcNumber(String);

impl EcNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EcNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EcNumber {
    type Err = BrendaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let trimmed = trimmed
            .strip_prefix("EC")
            .map(str::trim_start)
            .unwrap_or(trimmed);
        if !EC_RE.is_match(trimmed) {
            return Err(BrendaError::InvalidEcNumber(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// A single table value. Numeric columns fall back to `Text` when the cell
/// cannot be read as a number or a numeric range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn text(raw: &str) -> Self {
        Value::Text(raw.trim().to_string())
    }

    /// Reads `25`, `0.018`, `7.5-8.0`, `30 to 40` or `1e-3-2e-3`; ranges become their midpoint.
    pub fn numeric(raw: &str) -> Self {
        let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
        if NUMBER_RE.is_match(&compact) {
            if let Ok(number) = compact.parse::<f64>() {
                return Value::Number(number);
            }
        }
        if let Some(caps) = RANGE_RE.captures(&compact) {
            let low = caps[1].parse::<f64>();
            let high = caps[2].parse::<f64>();
            if let (Ok(low), Ok(high)) = (low, high) {
                return Value::Number((low + high) / 2.0);
            }
        }
        tracing::trace!(raw, "numeric cell kept as text");
        Value::text(raw)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Text(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

/// One substrate/product row of a five-level table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reaction {
    pub sub: Vec<String>,
    pub prod: Vec<String>,
}

impl Reaction {
    pub fn from_cells(substrates: &str, products: &str) -> Self {
        Self {
            sub: split_compounds(substrates),
            prod: split_compounds(products),
        }
    }
}

/// Splits `2 NAD+ + H2O` into `["2 NAD+", "H2O"]`.
pub fn split_compounds(text: &str) -> Vec<String> {
    COMPOUND_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reduces `escherichia_coli K-12` to `Escherichia coli`.
pub fn normalize_organism(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let binomial = spaced.split_whitespace().take(2).collect::<Vec<_>>().join(" ");
    let lower = binomial.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLevel {
    Two,
    Three,
    Four,
    Five,
}

impl TableLevel {
    pub fn columns(self) -> usize {
        match self {
            TableLevel::Two => 2,
            TableLevel::Three => 3,
            TableLevel::Four => 4,
            TableLevel::Five => 5,
        }
    }
}

impl fmt::Display for TableLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-level", self.columns())
    }
}

/// organism -> identifiers
pub type OrganismMap = BTreeMap<String, Vec<String>>;
/// organism -> identifier -> values
pub type ValueMap = BTreeMap<String, BTreeMap<String, Vec<Value>>>;
/// organism -> identifier -> compound/comment -> values
pub type KeyedValueMap = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<Value>>>>;
/// organism -> identifier -> reactions
pub type ReactionMap = BTreeMap<String, BTreeMap<String, Vec<Reaction>>>;
