use std::sync::LazyLock;

use scraper::element_ref::Select;
use scraper::{ElementRef, Selector};

use crate::catalog::TableSpec;
use crate::document::Document;
use crate::error::BrendaError;

static HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.header").expect("valid header selector"));
static DATA_ROW: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div.rgrey1, div.rgrey2").expect("valid row selector")
});
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid link selector"));

/// One property table of an EC page.
#[derive(Debug, Clone, Copy)]
pub struct TableSection<'a> {
    element: ElementRef<'a>,
    heading: &'static str,
}

impl<'a> TableSection<'a> {
    pub fn heading(&self) -> &'static str {
        self.heading
    }

    pub fn id(&self) -> Option<&'a str> {
        self.element.value().id()
    }

    /// Data rows in page order. Each call starts a fresh walk over the section.
    pub fn rows(&self) -> Rows<'a> {
        Rows {
            inner: self.element.select(&DATA_ROW),
        }
    }
}

/// Finds the section whose heading starts with `spec.heading`.
///
/// Among matching sections the one with id `spec.section_id` wins; otherwise
/// the first match in page order.
pub fn locate<'a>(
    document: &'a Document,
    spec: &TableSpec,
) -> Result<TableSection<'a>, BrendaError> {
    let mut fallback = None;
    for header in document.html().select(&HEADER) {
        if !heading_matches(&cell_text(header), spec.heading) {
            continue;
        }
        let Some(section) = enclosing_section(header) else {
            continue;
        };
        if section.value().id() == Some(spec.section_id) {
            tracing::debug!(table = spec.heading, id = spec.section_id, "located table");
            return Ok(TableSection {
                element: section,
                heading: spec.heading,
            });
        }
        fallback.get_or_insert(section);
    }

    match fallback {
        Some(element) => {
            tracing::debug!(
                table = spec.heading,
                id = element.value().id().unwrap_or_default(),
                "located table outside its usual section id"
            );
            Ok(TableSection {
                element,
                heading: spec.heading,
            })
        }
        None => Err(BrendaError::TableNotFound(spec.heading.to_string())),
    }
}

/// Nearest ancestor with an id, provided `header` is its first header.
/// Column titles further down a section never name a table.
fn enclosing_section(header: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let section = header
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|element| element.value().id().is_some())?;
    let first = section.select(&HEADER).next()?;
    ((*first).id() == (*header).id()).then_some(section)
}

fn heading_matches(text: &str, heading: &str) -> bool {
    let text = text.to_ascii_lowercase();
    text.starts_with(&heading.to_ascii_lowercase())
}

pub struct Rows<'a> {
    inner: Select<'a, 'static>,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        for element in self.inner.by_ref() {
            let row = Row::from_element(element);
            if row.is_blank() {
                tracing::trace!("skipping decorative row");
                continue;
            }
            return Some(row);
        }
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Builds a row of link-free cells.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: texts.into_iter().map(Cell::text).collect(),
        }
    }

    fn from_element(element: ElementRef<'_>) -> Self {
        let children: Vec<ElementRef<'_>> =
            element.children().filter_map(ElementRef::wrap).collect();
        let is_cell = |child: &ElementRef<'_>| child.value().classes().any(|class| class == "cell");
        let has_cell_class = children.iter().any(is_cell);
        let cells = children
            .into_iter()
            .filter(|child| !has_cell_class || is_cell(child))
            .map(Cell::from_element)
            .collect();
        Self { cells }
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| cell.text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    /// Whitespace-collapsed cell text.
    pub text: String,
    /// Texts of the links inside the cell.
    pub links: Vec<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: collapse_whitespace(&text.into()),
            links: Vec::new(),
        }
    }

    pub fn with_links<I, S>(text: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: collapse_whitespace(&text.into()),
            links: links.into_iter().map(Into::into).collect(),
        }
    }

    fn from_element(element: ElementRef<'_>) -> Self {
        let links = element
            .select(&LINK)
            .map(cell_text)
            .filter(|text| !text.is_empty())
            .collect();
        Self {
            text: cell_text(element),
            links,
        }
    }
}

fn cell_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&raw)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::catalog::{KM_VALUE, ORGANISM};

    const PAGE: &str = r#"
        <html><body><div id="content">
          <div id="tab20">
            <div class="header"><a>ORGANISM</a></div>
            <div class="row rgrey1">
              <div class="cell">Homo   sapiens</div>
              <div class="cell"><a href="https://www.uniprot.org/Q9NYQ3">Q9NYQ3</a></div>
            </div>
            <div class="row rgrey2"><div class="cell"> </div><div class="cell"></div></div>
            <div class="hidden rgrey1">
              <div class="cell">Mammalia</div>
              <div class="cell">-</div>
            </div>
          </div>
          <div id="tab305">
            <div class="header">kcat/KM VALUE [1/mMs-1]</div>
          </div>
        </div></body></html>
    "#;

    #[test]
    fn locate_by_heading() {
        let document = Document::parse(PAGE);
        let section = locate(&document, &ORGANISM).unwrap();
        assert_eq!(section.id(), Some("tab20"));
        assert_eq!(section.heading(), "ORGANISM");
    }

    #[test]
    fn heading_prefix_does_not_match_inside_other_heading() {
        let document = Document::parse(PAGE);
        let err = locate(&document, &KM_VALUE).unwrap_err();
        assert_matches!(err, BrendaError::TableNotFound(name) if name == "KM VALUE");
    }

    #[test]
    fn rows_skip_blank_and_collapse_whitespace() {
        let document = Document::parse(PAGE);
        let section = locate(&document, &ORGANISM).unwrap();
        let rows: Vec<Row> = section.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells[0].text, "Homo sapiens");
        assert_eq!(rows[0].cells[1].links, vec!["Q9NYQ3"]);
        assert_eq!(rows[1].cells[0].text, "Mammalia");
        assert!(rows[1].cells[1].links.is_empty());
    }

    #[test]
    fn usual_section_id_wins_over_earlier_match() {
        let document = Document::parse(
            r#"<div id="summary"><div class="header">ORGANISM overview</div>
                 <div class="row rgrey1"><div class="cell">Bos taurus</div></div></div>
               <div id="tab20"><div class="header">ORGANISM</div>
                 <div class="row rgrey1"><div class="cell">Homo sapiens</div></div></div>"#,
        );
        let section = locate(&document, &ORGANISM).unwrap();
        assert_eq!(section.id(), Some("tab20"));
        let row = section.rows().next().unwrap();
        assert_eq!(row.cells[0].text, "Homo sapiens");
    }

    #[test]
    fn rows_restart() {
        let document = Document::parse(PAGE);
        let section = locate(&document, &ORGANISM).unwrap();
        assert_eq!(section.rows().count(), section.rows().count());
    }

    #[test]
    fn rows_without_cell_class_use_children() {
        let document = Document::parse(
            r#"<div id="tab20"><div class="header">ORGANISM</div>
               <div class="row rgrey1"><span>Bos taurus</span><span>P00330</span></div></div>"#,
        );
        let section = locate(&document, &ORGANISM).unwrap();
        let row = section.rows().next().unwrap();
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[1].text, "P00330");
    }
}
