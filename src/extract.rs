//! Per-word pipeline: locate -> select -> assemble -> remap.

use crate::columns::assemble_columns;
use crate::dom::DomNode;
use crate::error::ExtractionResult;
use crate::forms::OutputRecord;
use crate::html::HtmlDocument;
use crate::remap::remap_columns;
use crate::section::locate_section;
use crate::table::{select_table, TableSignatures};
use crate::word_class::WordClass;
use tracing::debug;

/// One word to look up, as read from the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub word: String,
    /// Raw class name; parsed when the word is processed
    pub word_class: String,
    pub language: String,
    /// Force the non-default table family (`other_`)
    pub use_other_table: bool,
    pub gloss: Option<String>,
}

impl LookupRequest {
    pub fn new(word: &str, word_class: &str, language: &str) -> Self {
        LookupRequest {
            word: word.to_string(),
            word_class: word_class.to_string(),
            language: language.to_string(),
            use_other_table: false,
            gloss: None,
        }
    }
}

/// Extract the canonical form sequence for `request` from a parsed document.
pub fn extract_inflections<N: DomNode>(
    root: &N,
    request: &LookupRequest,
    signatures: &TableSignatures,
) -> ExtractionResult<OutputRecord> {
    let word_class: WordClass = request.word_class.parse()?;
    let family = word_class.family(request.use_other_table);
    debug!(word = %request.word, %word_class, %family, "extracting");

    let section = locate_section(root, &request.language, word_class)?;
    let table = select_table(&section, family, signatures)?;
    let columns = assemble_columns(&table, family)?;
    remap_columns(columns, family.layout().permutation)
}

/// Parse `html` and extract from it.
pub fn extract_from_html(
    html: &str,
    request: &LookupRequest,
    signatures: &TableSignatures,
) -> ExtractionResult<OutputRecord> {
    let document = HtmlDocument::parse(html);
    extract_inflections(&document.root(), request, signatures)
}
