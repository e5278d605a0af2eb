//! Declension tables from Wiktionary pages.
//!
//! For each word the pipeline finds the language section and the word-class
//! subsection of the page, picks the inflection table printed for that word
//! class, reads its singular and plural columns and reorders them into a
//! fixed case order:
//!
//! ```text
//! locate_section -> select_table -> assemble_columns -> remap_columns
//! ```
//!
//! The extraction core works on any tree implementing [`dom::DomNode`];
//! [`html::HtmlDocument`] provides one on top of html5ever.

pub mod columns;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod forms;
pub mod html;
pub mod normalize;
pub mod output;
pub mod remap;
pub mod section;
pub mod source;
pub mod table;
pub mod word_class;
pub mod wordlist;

pub use error::{ExtractionError, ExtractionResult};
pub use extract::{extract_from_html, extract_inflections, LookupRequest};
pub use forms::{OutputRecord, WordFormSet};
pub use word_class::{TableFamily, WordClass};
