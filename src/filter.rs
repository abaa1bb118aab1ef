use crate::domain::{OrganismMap, UNKNOWN, UniprotId};
use crate::table::Cell;

/// Protein accessions listed in an identifier cell.
///
/// Only linked texts that are UniProt accessions count, so literature links
/// and comments appended to the cell fall away. A cell without links
/// contributes the tokens that are accessions exactly as written.
pub fn identifiers(cell: &Cell) -> Vec<String> {
    if !cell.links.is_empty() {
        return cell
            .links
            .iter()
            .map(|link| link.split_whitespace().collect::<String>())
            .filter(|link| !is_placeholder(link))
            .filter_map(|link| link.parse::<UniprotId>().ok())
            .map(UniprotId::into_string)
            .collect();
    }
    cell.text
        .split(|ch: char| ch == ',' || ch == ';' || ch.is_whitespace())
        .filter(|token| UniprotId::is_accession(token))
        .map(str::to_string)
        .collect()
}

fn is_placeholder(text: &str) -> bool {
    text.is_empty() || text == "-" || text.eq_ignore_ascii_case(UNKNOWN)
}

/// Identifier sub-keys a row is folded under: its own accessions, the
/// `unknown` bucket, or nothing when unidentified rows are filtered.
pub fn identifier_keys(ids: Vec<String>, filter_unidentified: bool) -> Vec<String> {
    if !ids.is_empty() {
        ids
    } else if filter_unidentified {
        Vec::new()
    } else {
        vec![UNKNOWN.to_string()]
    }
}

/// Removes organisms that ended up without any identifier.
pub fn drop_unidentified(organisms: &mut OrganismMap) {
    organisms.retain(|organism, ids| {
        if ids.is_empty() {
            tracing::trace!(organism = %organism, "dropping organism without identifiers");
        }
        !ids.is_empty()
    });
}
