//! Table Selector: the inflection table of a word-class section.

use crate::dom::{find_first, heading_level, DomNode};
use crate::error::{ExtractionError, ExtractionResult};
use crate::section::Section;
use crate::word_class::TableFamily;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// CSS classes that identify each family's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSignatures {
    pub declension_class: String,
    pub pronominal_class: String,
}

impl Default for TableSignatures {
    fn default() -> Self {
        TableSignatures {
            declension_class: "inflection-table".to_string(),
            pronominal_class: "wikitable".to_string(),
        }
    }
}

impl TableSignatures {
    pub fn class_for(&self, family: TableFamily) -> &str {
        match family {
            TableFamily::Declension => &self.declension_class,
            TableFamily::Pronominal => &self.pronominal_class,
        }
    }
}

/// First table nested anywhere below `table` (not `table` itself).
fn inner_table<N: DomNode>(table: &N) -> Option<N> {
    let is_table = |node: &N| node.is_element("table");
    table
        .children()
        .iter()
        .find_map(|child| find_first(child, &is_table))
}

/// Find the first table of `family` after the section start, without
/// crossing into the next section.
pub fn select_table<N: DomNode>(
    section: &Section<N>,
    family: TableFamily,
    signatures: &TableSignatures,
) -> ExtractionResult<N> {
    let class = signatures.class_for(family);
    let matches_signature = |node: &N| node.is_element("table") && node.has_class(class);

    for node in section.start.following_element_siblings() {
        if heading_level(&node).is_some_and(|level| level <= section.level) {
            debug!(word_class = %section.word_class, "section ended before a table");
            break;
        }
        if let Some(table) = find_first(&node, &matches_signature) {
            if family == TableFamily::Pronominal {
                if let Some(inner) = inner_table(&table) {
                    debug!(%family, "descending into wrapped table");
                    return Ok(inner);
                }
            }
            debug!(%family, "table selected");
            return Ok(table);
        }
    }

    Err(ExtractionError::TableNotFound {
        word_class: section.word_class.heading().to_string(),
        family: family.to_string(),
    })
}
