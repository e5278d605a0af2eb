//! Section Locator: language heading, then the word-class heading under it.

use crate::dom::{find_first, heading_element_level, heading_level, is_heading_wrapper, DomNode};
use crate::error::{ExtractionError, ExtractionResult};
use crate::word_class::WordClass;
use tracing::debug;

/// Start of a word-class subsection.
#[derive(Debug, Clone)]
pub struct Section<N> {
    pub language: String,
    pub word_class: WordClass,
    /// Word-class heading (or its wrapper); the section's content follows it
    pub start: N,
    /// Heading level of `start`; a heading at this level or above ends the section
    pub level: usize,
}

fn names_language<N: DomNode>(heading: &N, language: &str) -> bool {
    find_first(heading, &|node: &N| node.text().trim() == language).is_some()
}

/// Find the language heading anywhere in the document.
fn find_language_heading<N: DomNode>(root: &N, language: &str) -> Option<N> {
    find_first(root, &|node: &N| {
        heading_element_level(node).is_some() && names_language(node, language)
    })
}

/// Locate the `word_class` subsection of the `language` section.
pub fn locate_section<N: DomNode>(
    root: &N,
    language: &str,
    word_class: WordClass,
) -> ExtractionResult<Section<N>> {
    let heading =
        find_language_heading(root, language).ok_or_else(|| ExtractionError::LanguageNotFound {
            language: language.to_string(),
        })?;
    let language_level = heading_element_level(&heading).unwrap_or(2);

    // Siblings live next to the wrapper when the heading has one
    let anchor = match heading.parent() {
        Some(parent) if is_heading_wrapper(&parent) => parent,
        _ => heading,
    };
    debug!(language, level = language_level, "language heading found");

    let not_found = || ExtractionError::WordClassNotFound {
        language: language.to_string(),
        word_class: word_class.heading().to_string(),
    };

    for node in anchor.following_element_siblings() {
        if let Some(level) = heading_level(&node) {
            if level <= language_level {
                debug!(language, "reached next language section");
                return Err(not_found());
            }
            if node.text().contains(word_class.heading()) {
                debug!(language, word_class = %word_class, level, "word class heading found");
                return Ok(Section {
                    language: language.to_string(),
                    word_class,
                    start: node,
                    level,
                });
            }
        }
    }

    Err(not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;

    fn locate(html: &str, language: &str, class: WordClass) -> ExtractionResult<(String, usize)> {
        let doc = HtmlDocument::parse(html);
        locate_section(&doc.root(), language, class)
            .map(|section| (section.start.text(), section.level))
    }

    const PAGE: &str = r#"
        <h2><span class="mw-headline">Estonian</span></h2>
        <h3>Noun</h3><p>est</p>
        <h2><span class="mw-headline">Finnish</span><span class="mw-editsection">[edit]</span></h2>
        <h3>Etymology</h3><p>...</p>
        <h4>Proper noun</h4><p>...</p>
        <h4>Noun</h4><p>...</p>
        <h2><span class="mw-headline">Ingrian</span></h2>
        <h3>Adjective</h3>
    "#;

    #[test]
    fn finds_word_class_under_language() {
        assert_eq!(locate(PAGE, "Finnish", WordClass::Noun), Ok(("Noun".to_string(), 4)));
    }

    #[test]
    fn word_class_match_is_case_sensitive_substring() {
        // "Proper noun" does not contain "Noun", so Noun skips it
        assert_eq!(
            locate(PAGE, "Finnish", WordClass::ProperNoun),
            Ok(("Proper noun".to_string(), 4))
        );
        let qualified = "<h2>Finnish</h2><h3>Numeral (cardinal)</h3>";
        assert_eq!(
            locate(qualified, "Finnish", WordClass::Numeral),
            Ok(("Numeral (cardinal)".to_string(), 3))
        );
    }

    #[test]
    fn missing_language() {
        assert_eq!(
            locate(PAGE, "Swedish", WordClass::Noun),
            Err(ExtractionError::LanguageNotFound {
                language: "Swedish".to_string()
            })
        );
    }

    #[test]
    fn language_match_is_exact() {
        let page = "<h2>Old Finnish</h2><h3>Noun</h3>";
        assert!(matches!(
            locate(page, "Finnish", WordClass::Noun),
            Err(ExtractionError::LanguageNotFound { .. })
        ));
    }

    #[test]
    fn stops_at_next_language_heading() {
        // Ingrian has an Adjective, Finnish does not
        assert_eq!(
            locate(PAGE, "Finnish", WordClass::Adjective),
            Err(ExtractionError::WordClassNotFound {
                language: "Finnish".to_string(),
                word_class: "Adjective".to_string(),
            })
        );
    }

    #[test]
    fn runs_out_of_siblings() {
        assert!(matches!(
            locate(PAGE, "Ingrian", WordClass::Pronoun),
            Err(ExtractionError::WordClassNotFound { .. })
        ));
    }

    #[test]
    fn handles_wrapped_headings() {
        let page = r#"
            <div class="mw-heading mw-heading2"><h2 id="Finnish">Finnish</h2><span>edit</span></div>
            <div class="mw-heading mw-heading3"><h3 id="Pronoun">Pronoun</h3></div>
            <p>minä</p>
        "#;
        let doc = HtmlDocument::parse(page);
        let section = locate_section(&doc.root(), "Finnish", WordClass::Pronoun).unwrap();
        assert!(section.start.is_element("div"));
        assert_eq!(section.level, 3);
    }
}
