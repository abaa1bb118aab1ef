use std::fs;
use std::path::{Path, PathBuf};

use scraper::Html;

use crate::domain::EcNumber;
use crate::error::BrendaError;

/// A parsed BRENDA enzyme page.
pub struct Document {
    html: Html,
    source: Option<PathBuf>,
    ec_number: Option<EcNumber>,
}

impl Document {
    pub fn parse(content: &str) -> Self {
        Self {
            html: Html::parse_document(content),
            source: None,
            ec_number: None,
        }
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// EC number taken from the page's file name, e.g. `1.1.1.1.html`.
    pub fn ec_number(&self) -> Option<&EcNumber> {
        self.ec_number.as_ref()
    }
}

/// Opens a previously downloaded EC page.
pub fn open_ec(path: impl AsRef<Path>) -> Result<Document, BrendaError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| {
        tracing::debug!(path = %path.display(), error = %err, "failed to read EC page");
        BrendaError::NotFound(path.to_path_buf())
    })?;
    let content = decode_page(bytes);

    let mut document = Document::parse(&content);
    document.ec_number = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .and_then(|stem| stem.parse().ok());
    document.source = Some(path.to_path_buf());
    tracing::debug!(
        path = %path.display(),
        ec = ?document.ec_number.as_ref().map(EcNumber::as_str),
        "loaded EC page"
    );
    Ok(document)
}

/// BRENDA serves ISO-8859-1; UTF-8 copies are accepted as-is.
fn decode_page(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().into_iter().map(char::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_latin1_fallback() {
        let bytes = b"SPECIFIC ACTIVITY [\xb5mol/min/mg]".to_vec();
        assert_eq!(decode_page(bytes), "SPECIFIC ACTIVITY [\u{b5}mol/min/mg]");
    }

    #[test]
    fn decode_utf8_passthrough() {
        let bytes = "Saccharomyces cerevisiae \u{b5}".as_bytes().to_vec();
        assert_eq!(decode_page(bytes), "Saccharomyces cerevisiae \u{b5}");
    }

    #[test]
    fn parsed_document_has_no_source() {
        let document = Document::parse("<html><body></body></html>");
        assert!(document.source().is_none());
        assert!(document.ec_number().is_none());
    }
}
