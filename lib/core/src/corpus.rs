use crate::catalogue::Catalogue;

/// Build the document corpus for a catalogue, one canonical document per
/// record, preserving record order.
///
/// Pure and deterministic: no I/O, no service calls. Document `i` always
/// corresponds to record `i`.
///
/// # Panics
///
/// Panics on an empty catalogue; there is nothing to index and a caller
/// reaching this point has skipped validation.
#[must_use]
pub fn build_documents(catalogue: &Catalogue) -> Vec<String> {
    assert!(
        !catalogue.is_empty(),
        "cannot build a document corpus from an empty catalogue"
    );
    catalogue.iter().map(|record| record.document()).collect()
}
