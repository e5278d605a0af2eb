//! Per-word extraction failures.
//!
//! Every variant is recoverable: the driver reports it for the word at hand
//! and moves on to the next one.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Word class string is not one of the supported classes
    InvalidWordClass { value: String },
    /// No heading with the language name exists in the document
    LanguageNotFound { language: String },
    /// Language section exists but has no matching word-class heading
    WordClassNotFound { language: String, word_class: String },
    /// No table with the family's signature inside the word-class section
    TableNotFound { word_class: String, family: String },
    /// Rows or columns do not line up with the family layout
    MalformedTableStructure { message: String },
}

impl ExtractionError {
    /// Short stable label, used for the summary counters.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractionError::InvalidWordClass { .. } => "invalid_word_class",
            ExtractionError::LanguageNotFound { .. } => "language_not_found",
            ExtractionError::WordClassNotFound { .. } => "word_class_not_found",
            ExtractionError::TableNotFound { .. } => "table_not_found",
            ExtractionError::MalformedTableStructure { .. } => "malformed_table",
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        ExtractionError::MalformedTableStructure {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::InvalidWordClass { value } => {
                write!(f, "Invalid word class '{}'", value)
            }
            ExtractionError::LanguageNotFound { language } => {
                write!(f, "Language section '{}' not found", language)
            }
            ExtractionError::WordClassNotFound {
                language,
                word_class,
            } => {
                write!(f, "No '{}' section under '{}'", word_class, language)
            }
            ExtractionError::TableNotFound { word_class, family } => {
                write!(
                    f,
                    "No {} inflection table in the '{}' section",
                    family, word_class
                )
            }
            ExtractionError::MalformedTableStructure { message } => {
                write!(f, "Malformed inflection table: {}", message)
            }
        }
    }
}

impl std::error::Error for ExtractionError {}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_word_class_and_language() {
        let err = ExtractionError::WordClassNotFound {
            language: "Finnish".to_string(),
            word_class: "Adjective".to_string(),
        };
        assert_eq!(err.to_string(), "No 'Adjective' section under 'Finnish'");
        assert_eq!(err.kind(), "word_class_not_found");
    }

    #[test]
    fn malformed_helper_wraps_message() {
        let err = ExtractionError::malformed("row 3 has 1 cell");
        assert_eq!(
            err,
            ExtractionError::MalformedTableStructure {
                message: "row 3 has 1 cell".to_string()
            }
        );
    }
}
