use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::{
    self, ColumnLayout, FiveLevelTable, FourLevelTable, TableSpec, ThreeLevelTable,
};
use crate::config::ExtractOptions;
use crate::document::Document;
use crate::domain::{
    EcNumber, KeyedValueMap, OrganismMap, Reaction, ReactionMap, TableLevel, Value, ValueMap,
    normalize_organism,
};
use crate::filter;
use crate::table::{self, Cell, Row};

/// One row after the organism and identifier columns have been read.
#[derive(Debug)]
pub struct RowRecord<'r> {
    /// Leading value cells, as many as the shape reads.
    pub values: &'r [Cell],
    pub organism: String,
    /// Accessions found in the identifier column, possibly none.
    pub identifiers: Vec<String>,
}

/// Folding strategy for one table level.
pub trait Shape {
    type Output: Default + Serialize;

    fn level(&self) -> TableLevel;

    fn fold(&self, record: RowRecord<'_>, options: &ExtractOptions, out: &mut Self::Output);

    fn finish(&self, out: Self::Output, _options: &ExtractOptions) -> Self::Output {
        out
    }
}

/// organism, identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct OrganismShape;

impl Shape for OrganismShape {
    type Output = OrganismMap;

    fn level(&self) -> TableLevel {
        TableLevel::Two
    }

    fn fold(&self, record: RowRecord<'_>, _options: &ExtractOptions, out: &mut OrganismMap) {
        out.entry(record.organism)
            .or_default()
            .extend(record.identifiers);
    }

    fn finish(&self, mut out: OrganismMap, options: &ExtractOptions) -> OrganismMap {
        if options.filter_unidentified {
            filter::drop_unidentified(&mut out);
        }
        out
    }
}

/// value, organism, identifier
#[derive(Debug, Clone, Copy)]
pub struct ThreeLevel {
    pub numeric: bool,
}

impl Shape for ThreeLevel {
    type Output = ValueMap;

    fn level(&self) -> TableLevel {
        TableLevel::Three
    }

    fn fold(&self, record: RowRecord<'_>, options: &ExtractOptions, out: &mut ValueMap) {
        let keys = filter::identifier_keys(record.identifiers, options.filter_unidentified);
        if keys.is_empty() {
            return;
        }
        let raw = &record.values[0].text;
        let value = if self.numeric {
            Value::numeric(raw)
        } else {
            Value::text(raw)
        };
        let by_id = out.entry(record.organism).or_default();
        for key in keys {
            by_id.entry(key).or_default().push(value.clone());
        }
    }
}

/// value, compound, organism, identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct FourLevel;

impl Shape for FourLevel {
    type Output = KeyedValueMap;

    fn level(&self) -> TableLevel {
        TableLevel::Four
    }

    fn fold(&self, record: RowRecord<'_>, options: &ExtractOptions, out: &mut KeyedValueMap) {
        let keys = filter::identifier_keys(record.identifiers, options.filter_unidentified);
        if keys.is_empty() {
            return;
        }
        let value = Value::numeric(&record.values[0].text);
        let compound = &record.values[1].text;
        let by_id = out.entry(record.organism).or_default();
        for key in keys {
            by_id
                .entry(key)
                .or_default()
                .entry(compound.clone())
                .or_default()
                .push(value.clone());
        }
    }
}

/// substrates, products, reaction diagram, organism, identifier
#[derive(Debug, Clone, Copy, Default)]
pub struct FiveLevel;

impl Shape for FiveLevel {
    type Output = ReactionMap;

    fn level(&self) -> TableLevel {
        TableLevel::Five
    }

    fn fold(&self, record: RowRecord<'_>, options: &ExtractOptions, out: &mut ReactionMap) {
        let keys = filter::identifier_keys(record.identifiers, options.filter_unidentified);
        if keys.is_empty() {
            return;
        }
        let reaction = Reaction::from_cells(&record.values[0].text, &record.values[1].text);
        let by_id = out.entry(record.organism).or_default();
        for key in keys {
            by_id.entry(key).or_default().push(reaction.clone());
        }
    }
}

/// Folds rows into `shape`'s mapping, organism and identifier being the last
/// two of the shape's cells.
pub fn extract<S, I>(shape: &S, rows: I, options: &ExtractOptions) -> S::Output
where
    S: Shape,
    I: IntoIterator<Item = Row>,
{
    extract_columns(shape, ColumnLayout::trailing(shape.level()), rows, options)
}

/// Folds rows into `shape`'s mapping using the cell positions in `layout`.
/// Rows too narrow for `layout` are skipped.
pub fn extract_columns<S, I>(
    shape: &S,
    layout: ColumnLayout,
    rows: I,
    options: &ExtractOptions,
) -> S::Output
where
    S: Shape,
    I: IntoIterator<Item = Row>,
{
    let mut out = S::Output::default();
    let value_cells = shape.level().columns() - 2;
    if layout.organism < value_cells {
        tracing::warn!(
            level = %shape.level(),
            organism = layout.organism,
            "column layout leaves no room for values"
        );
        return out;
    }
    let width = layout.width();
    for row in rows {
        if row.cells.len() < width {
            tracing::trace!(cells = row.cells.len(), width, "skipping short row");
            continue;
        }
        let organism_text = &row.cells[layout.organism].text;
        let organism = if options.normalize_organisms {
            normalize_organism(organism_text)
        } else {
            organism_text.clone()
        };
        let record = RowRecord {
            values: &row.cells[..value_cells],
            organism,
            identifiers: filter::identifiers(&row.cells[layout.identifier]),
        };
        shape.fold(record, options, &mut out);
    }
    shape.finish(out, options)
}

/// A table of one page bound to its folding strategy.
pub struct Extractor<'d, S> {
    document: &'d Document,
    spec: &'static TableSpec,
    shape: S,
}

impl<'d> Extractor<'d, OrganismShape> {
    pub fn organism(document: &'d Document) -> Self {
        Self {
            document,
            spec: &catalog::ORGANISM,
            shape: OrganismShape,
        }
    }
}

impl<'d> Extractor<'d, ThreeLevel> {
    pub fn three_level(document: &'d Document, table: ThreeLevelTable) -> Self {
        Self::with_spec(document, table.spec())
    }

    fn with_spec(document: &'d Document, spec: &'static TableSpec) -> Self {
        Self {
            document,
            spec,
            shape: ThreeLevel {
                numeric: spec.numeric,
            },
        }
    }
}

impl<'d> Extractor<'d, FourLevel> {
    pub fn four_level(document: &'d Document, table: FourLevelTable) -> Self {
        Self::with_spec(document, table.spec())
    }

    fn with_spec(document: &'d Document, spec: &'static TableSpec) -> Self {
        Self {
            document,
            spec,
            shape: FourLevel,
        }
    }
}

impl<'d> Extractor<'d, FiveLevel> {
    pub fn five_level(document: &'d Document, table: FiveLevelTable) -> Self {
        Self::with_spec(document, table.spec())
    }

    fn with_spec(document: &'d Document, spec: &'static TableSpec) -> Self {
        Self {
            document,
            spec,
            shape: FiveLevel,
        }
    }
}

impl<'d, S: Shape> Extractor<'d, S> {
    pub fn spec(&self) -> &'static TableSpec {
        self.spec
    }

    pub fn get_data(&self, filter_unidentified: bool) -> S::Output {
        self.get_data_with(&ExtractOptions::filtered(filter_unidentified))
    }

    /// An absent table yields an empty mapping.
    pub fn get_data_with(&self, options: &ExtractOptions) -> S::Output {
        match table::locate(self.document, self.spec) {
            Ok(section) => extract_columns(&self.shape, self.spec.layout, section.rows(), options),
            Err(err) => {
                tracing::debug!(error = %err, "returning empty result");
                S::Output::default()
            }
        }
    }
}

/// Result of any table, tagged by its level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NestedMapping {
    Organisms(OrganismMap),
    Values(ValueMap),
    KeyedValues(KeyedValueMap),
    Reactions(ReactionMap),
}

impl NestedMapping {
    pub fn level(&self) -> TableLevel {
        match self {
            NestedMapping::Organisms(_) => TableLevel::Two,
            NestedMapping::Values(_) => TableLevel::Three,
            NestedMapping::KeyedValues(_) => TableLevel::Four,
            NestedMapping::Reactions(_) => TableLevel::Five,
        }
    }

    /// Number of organism keys.
    pub fn len(&self) -> usize {
        match self {
            NestedMapping::Organisms(map) => map.len(),
            NestedMapping::Values(map) => map.len(),
            NestedMapping::KeyedValues(map) => map.len(),
            NestedMapping::Reactions(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn organisms(&self) -> Vec<&str> {
        match self {
            NestedMapping::Organisms(map) => map.keys().map(String::as_str).collect(),
            NestedMapping::Values(map) => map.keys().map(String::as_str).collect(),
            NestedMapping::KeyedValues(map) => map.keys().map(String::as_str).collect(),
            NestedMapping::Reactions(map) => map.keys().map(String::as_str).collect(),
        }
    }
}

/// Extracts any catalog table, dispatching on its level.
pub fn extract_table(
    document: &Document,
    spec: &'static TableSpec,
    options: &ExtractOptions,
) -> NestedMapping {
    match spec.level {
        TableLevel::Two => NestedMapping::Organisms(
            Extractor {
                document,
                spec,
                shape: OrganismShape,
            }
            .get_data_with(options),
        ),
        TableLevel::Three => NestedMapping::Values(
            Extractor::<ThreeLevel>::with_spec(document, spec).get_data_with(options),
        ),
        TableLevel::Four => NestedMapping::KeyedValues(
            Extractor::<FourLevel>::with_spec(document, spec).get_data_with(options),
        ),
        TableLevel::Five => NestedMapping::Reactions(
            Extractor::<FiveLevel>::with_spec(document, spec).get_data_with(options),
        ),
    }
}

/// Every non-empty catalog table of one EC page, keyed by heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryData {
    pub ec_number: Option<EcNumber>,
    pub tables: BTreeMap<String, NestedMapping>,
}

pub fn extract_entry(document: &Document, options: &ExtractOptions) -> EntryData {
    let tables = catalog::ALL_TABLES
        .iter()
        .map(|spec| (spec.heading.to_string(), extract_table(document, spec, options)))
        .filter(|(_, data)| !data.is_empty())
        .collect::<BTreeMap<_, _>>();
    tracing::debug!(
        ec = ?document.ec_number().map(EcNumber::as_str),
        tables = tables.len(),
        "extracted EC entry"
    );
    EntryData {
        ec_number: document.ec_number().cloned(),
        tables,
    }
}
