use crate::domain::TableLevel;

/// Positions of the organism and identifier cells in a table row.
/// Value cells are the ones in front of the organism cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub organism: usize,
    pub identifier: usize,
}

impl ColumnLayout {
    /// Organism and identifier as the last two of `level` cells.
    pub const fn trailing(level: TableLevel) -> Self {
        let width = match level {
            TableLevel::Two => 2,
            TableLevel::Three => 3,
            TableLevel::Four => 4,
            TableLevel::Five => 5,
        };
        Self {
            organism: width - 2,
            identifier: width - 1,
        }
    }

    /// Fewest cells a row needs.
    pub fn width(&self) -> usize {
        self.organism.max(self.identifier) + 1
    }
}

/// Fixed description of one BRENDA property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Leading text of the table's heading on the page.
    pub heading: &'static str,
    /// Id of the page section that usually holds the table.
    pub section_id: &'static str,
    pub level: TableLevel,
    /// Whether the first column holds numbers.
    pub numeric: bool,
    pub layout: ColumnLayout,
}

const fn spec(
    heading: &'static str,
    section_id: &'static str,
    level: TableLevel,
    numeric: bool,
) -> TableSpec {
    TableSpec {
        heading,
        section_id,
        level,
        numeric,
        layout: ColumnLayout::trailing(level),
    }
}

/// ORGANISM | COMMENTARY | LITERATURE | UNIPROT
pub const ORGANISM: TableSpec = TableSpec {
    layout: ColumnLayout {
        organism: 0,
        identifier: 3,
    },
    ..spec("ORGANISM", "tab20", TableLevel::Two, false)
};

pub const TEMPERATURE_OPTIMUM: TableSpec =
    spec("TEMPERATURE OPTIMUM", "tab41", TableLevel::Three, true);
pub const TEMPERATURE_RANGE: TableSpec =
    spec("TEMPERATURE RANGE", "tab42", TableLevel::Three, true);
pub const TEMPERATURE_STABILITY: TableSpec =
    spec("TEMPERATURE STABILITY", "tab43", TableLevel::Three, true);
pub const PH_OPTIMUM: TableSpec = spec("pH OPTIMUM", "tab45", TableLevel::Three, true);
pub const PH_RANGE: TableSpec = spec("pH RANGE", "tab46", TableLevel::Three, true);
pub const PH_STABILITY: TableSpec = spec("pH STABILITY", "tab47", TableLevel::Three, true);
pub const SPECIFIC_ACTIVITY: TableSpec =
    spec("SPECIFIC ACTIVITY", "tab34", TableLevel::Three, true);
pub const COFACTOR: TableSpec = spec("COFACTOR", "tab48", TableLevel::Three, false);
pub const METALS_AND_IONS: TableSpec = spec("METALS and IONS", "tab15", TableLevel::Three, false);
pub const INHIBITORS: TableSpec = spec("INHIBITORS", "tab11", TableLevel::Three, false);
pub const ACTIVATING_COMPOUND: TableSpec =
    spec("ACTIVATING COMPOUND", "tab1", TableLevel::Three, false);

pub const KM_VALUE: TableSpec = spec("KM VALUE", "tab12", TableLevel::Four, true);
pub const TURNOVER_NUMBER: TableSpec = spec("TURNOVER NUMBER", "tab44", TableLevel::Four, true);
pub const KCAT_KM_VALUE: TableSpec = spec("kcat/KM VALUE", "tab305", TableLevel::Four, true);
pub const KI_VALUE: TableSpec = spec("Ki VALUE", "tab13", TableLevel::Four, true);

pub const SUBSTRATE: TableSpec = spec("SUBSTRATE", "tab39", TableLevel::Five, false);
pub const NATURAL_SUBSTRATE: TableSpec =
    spec("NATURAL SUBSTRATE", "tab37", TableLevel::Five, false);

pub const ALL_TABLES: &[TableSpec] = &[
    ORGANISM,
    TEMPERATURE_OPTIMUM,
    TEMPERATURE_RANGE,
    TEMPERATURE_STABILITY,
    PH_OPTIMUM,
    PH_RANGE,
    PH_STABILITY,
    SPECIFIC_ACTIVITY,
    COFACTOR,
    METALS_AND_IONS,
    INHIBITORS,
    ACTIVATING_COMPOUND,
    KM_VALUE,
    TURNOVER_NUMBER,
    KCAT_KM_VALUE,
    KI_VALUE,
    SUBSTRATE,
    NATURAL_SUBSTRATE,
];

/// value, organism, identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreeLevelTable {
    TemperatureOptimum,
    TemperatureRange,
    TemperatureStability,
    PhOptimum,
    PhRange,
    PhStability,
    SpecificActivity,
    Cofactor,
    MetalsAndIons,
    Inhibitors,
    ActivatingCompound,
}

impl ThreeLevelTable {
    pub fn spec(self) -> &'static TableSpec {
        match self {
            ThreeLevelTable::TemperatureOptimum => &TEMPERATURE_OPTIMUM,
            ThreeLevelTable::TemperatureRange => &TEMPERATURE_RANGE,
            ThreeLevelTable::TemperatureStability => &TEMPERATURE_STABILITY,
            ThreeLevelTable::PhOptimum => &PH_OPTIMUM,
            ThreeLevelTable::PhRange => &PH_RANGE,
            ThreeLevelTable::PhStability => &PH_STABILITY,
            ThreeLevelTable::SpecificActivity => &SPECIFIC_ACTIVITY,
            ThreeLevelTable::Cofactor => &COFACTOR,
            ThreeLevelTable::MetalsAndIons => &METALS_AND_IONS,
            ThreeLevelTable::Inhibitors => &INHIBITORS,
            ThreeLevelTable::ActivatingCompound => &ACTIVATING_COMPOUND,
        }
    }
}

/// value, compound, organism, identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FourLevelTable {
    KmValue,
    TurnoverNumber,
    KcatKmValue,
    KiValue,
}

impl FourLevelTable {
    pub fn spec(self) -> &'static TableSpec {
        match self {
            FourLevelTable::KmValue => &KM_VALUE,
            FourLevelTable::TurnoverNumber => &TURNOVER_NUMBER,
            FourLevelTable::KcatKmValue => &KCAT_KM_VALUE,
            FourLevelTable::KiValue => &KI_VALUE,
        }
    }
}

/// substrates, products, reaction diagram, organism, identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FiveLevelTable {
    Substrate,
    NaturalSubstrate,
}

impl FiveLevelTable {
    pub fn spec(self) -> &'static TableSpec {
        match self {
            FiveLevelTable::Substrate => &SUBSTRATE,
            FiveLevelTable::NaturalSubstrate => &NATURAL_SUBSTRATE,
        }
    }
}
