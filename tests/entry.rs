use std::collections::BTreeSet;

use kira_brenda::catalog::{self, ALL_TABLES};
use kira_brenda::domain::{TableLevel, UNKNOWN};
use kira_brenda::{ExtractOptions, NestedMapping, extract_entry, extract_table, open_ec};

fn organisms_with_real_ids(mapping: &NestedMapping) -> BTreeSet<String> {
    match mapping {
        NestedMapping::Organisms(map) => map
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(organism, _)| organism.clone())
            .collect(),
        NestedMapping::Values(map) => map
            .iter()
            .filter(|(_, by_id)| by_id.keys().any(|id| id != UNKNOWN))
            .map(|(organism, _)| organism.clone())
            .collect(),
        NestedMapping::KeyedValues(map) => map
            .iter()
            .filter(|(_, by_id)| by_id.keys().any(|id| id != UNKNOWN))
            .map(|(organism, _)| organism.clone())
            .collect(),
        NestedMapping::Reactions(map) => map
            .iter()
            .filter(|(_, by_id)| by_id.keys().any(|id| id != UNKNOWN))
            .map(|(organism, _)| organism.clone())
            .collect(),
    }
}

#[test]
fn filtered_organisms_are_identified_subset() {
    let document = open_ec("tests/fixtures/1.1.1.1.html").unwrap();
    for spec in ALL_TABLES {
        let filtered = extract_table(&document, spec, &ExtractOptions::filtered(true));
        let all = extract_table(&document, spec, &ExtractOptions::filtered(false));
        let filtered_keys: BTreeSet<String> =
            filtered.organisms().into_iter().map(str::to_string).collect();
        assert_eq!(filtered_keys, organisms_with_real_ids(&all), "{}", spec.heading);
        assert_eq!(filtered.level(), spec.level);
    }
}

#[test]
fn extraction_is_repeatable() {
    let document = open_ec("tests/fixtures/1.1.1.1.html").unwrap();
    for filter in [true, false] {
        let options = ExtractOptions::filtered(filter);
        assert_eq!(
            extract_entry(&document, &options),
            extract_entry(&document, &options)
        );
    }
}

#[test]
fn entry_lists_present_tables() {
    let document = open_ec("tests/fixtures/1.1.1.1.html").unwrap();
    let entry = extract_entry(&document, &ExtractOptions::default());
    assert_eq!(entry.ec_number.as_ref().map(|ec| ec.as_str()), Some("1.1.1.1"));
    let headings: Vec<&str> = entry.tables.keys().map(String::as_str).collect();
    assert_eq!(
        headings,
        vec![
            "COFACTOR",
            "KM VALUE",
            "NATURAL SUBSTRATE",
            "ORGANISM",
            "kcat/KM VALUE",
            "pH OPTIMUM"
        ]
    );
    assert_eq!(
        entry.tables[catalog::KM_VALUE.heading].level(),
        TableLevel::Four
    );

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["ec_number"], "1.1.1.1");
    assert_eq!(json["tables"]["ORGANISM"]["Saccharomyces cerevisiae"][0], "P00330");
}
