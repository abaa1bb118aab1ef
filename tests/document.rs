use std::fs;

use assert_matches::assert_matches;

use kira_brenda::{BrendaError, Extractor, open_ec};

#[test]
fn open_missing_page() {
    let err = open_ec("tests/fixtures/does-not-exist.html").err().unwrap();
    assert_matches!(err, BrendaError::NotFound(path) if path.ends_with("does-not-exist.html"));
}

#[test]
fn open_page_sets_ec_number() {
    let document = open_ec("tests/fixtures/1.1.1.1.html").unwrap();
    assert_eq!(document.ec_number().map(|ec| ec.as_str()), Some("1.1.1.1"));
    assert!(document.source().is_some());
}

#[test]
fn open_latin1_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("3.2.1.23.html");
    let mut page = Vec::new();
    page.extend_from_slice(b"<div id=\"tab34\"><div class=\"header\">SPECIFIC ACTIVITY [\xb5mol/min/mg]</div>");
    page.extend_from_slice(b"<div class=\"row rgrey1\"><div class=\"cell\">12.5</div>");
    page.extend_from_slice(b"<div class=\"cell\">Escherichia coli</div>");
    page.extend_from_slice(b"<div class=\"cell\"><a>P00722</a></div></div></div>");
    fs::write(&path, page).unwrap();

    let document = open_ec(&path).unwrap();
    assert_eq!(document.ec_number().unwrap().as_str(), "3.2.1.23");
    let data = Extractor::three_level(
        &document,
        kira_brenda::catalog::ThreeLevelTable::SpecificActivity,
    )
    .get_data(true);
    assert_eq!(data["Escherichia coli"]["P00722"][0].as_f64(), Some(12.5));
}

#[test]
fn page_without_ec_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("enzyme.html");
    fs::write(&path, "<html></html>").unwrap();
    let document = open_ec(&path).unwrap();
    assert!(document.ec_number().is_none());
    assert!(Extractor::organism(&document).get_data(false).is_empty());
}
