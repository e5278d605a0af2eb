//! Word classes and the inflection-table family each one is printed with.

use crate::error::{ExtractionError, ExtractionResult};
use crate::remap::{DECLENSION_PERMUTATION, PRONOMINAL_PERMUTATION};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordClass {
    Noun,
    ProperNoun,
    Adjective,
    Numeral,
    Pronoun,
}

impl WordClass {
    pub const ALL: [WordClass; 5] = [
        WordClass::Noun,
        WordClass::ProperNoun,
        WordClass::Adjective,
        WordClass::Numeral,
        WordClass::Pronoun,
    ];

    /// Heading text the dictionary uses for this class.
    pub fn heading(self) -> &'static str {
        match self {
            WordClass::Noun => "Noun",
            WordClass::ProperNoun => "Proper noun",
            WordClass::Adjective => "Adjective",
            WordClass::Numeral => "Numeral",
            WordClass::Pronoun => "Pronoun",
        }
    }

    pub fn default_family(self) -> TableFamily {
        match self {
            WordClass::Noun | WordClass::ProperNoun | WordClass::Adjective => {
                TableFamily::Declension
            }
            WordClass::Numeral | WordClass::Pronoun => TableFamily::Pronominal,
        }
    }

    /// Family after applying the per-word `other_` override.
    pub fn family(self, use_other: bool) -> TableFamily {
        if use_other {
            self.default_family().other()
        } else {
            self.default_family()
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

impl FromStr for WordClass {
    type Err = ExtractionError;

    /// Case-insensitive; inner whitespace is collapsed so "proper  Noun" works.
    fn from_str(s: &str) -> ExtractionResult<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        WordClass::ALL
            .into_iter()
            .find(|class| class.heading().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| ExtractionError::InvalidWordClass {
                value: s.to_string(),
            })
    }
}

/// Structural layout of an inflection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFamily {
    /// Noun-style table: label, singular, plural; accusative split over two rows
    Declension,
    /// Pronoun/numeral table: two label columns before singular and plural
    Pronominal,
}

impl TableFamily {
    pub fn other(self) -> TableFamily {
        match self {
            TableFamily::Declension => TableFamily::Pronominal,
            TableFamily::Pronominal => TableFamily::Declension,
        }
    }

    pub fn layout(self) -> FamilyLayout {
        match self {
            TableFamily::Declension => FamilyLayout {
                singular_cell: 1,
                plural_cell: 2,
                merges_accusative: true,
                permutation: &DECLENSION_PERMUTATION,
            },
            TableFamily::Pronominal => FamilyLayout {
                singular_cell: 2,
                plural_cell: 3,
                merges_accusative: false,
                permutation: &PRONOMINAL_PERMUTATION,
            },
        }
    }
}

impl fmt::Display for TableFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableFamily::Declension => f.write_str("declension"),
            TableFamily::Pronominal => f.write_str("pronominal"),
        }
    }
}

/// Everything the assembler and remapper need to know about a family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyLayout {
    pub singular_cell: usize,
    pub plural_cell: usize,
    pub merges_accusative: bool,
    pub permutation: &'static [usize],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("noun".parse::<WordClass>(), Ok(WordClass::Noun));
        assert_eq!("PROPER NOUN".parse::<WordClass>(), Ok(WordClass::ProperNoun));
        assert_eq!(" Proper   noun ".parse::<WordClass>(), Ok(WordClass::ProperNoun));
        assert_eq!("pronoun".parse::<WordClass>(), Ok(WordClass::Pronoun));
    }

    #[test]
    fn rejects_unknown_class() {
        assert_eq!(
            "verb".parse::<WordClass>(),
            Err(ExtractionError::InvalidWordClass {
                value: "verb".to_string()
            })
        );
    }

    #[test]
    fn families_by_class() {
        assert_eq!(WordClass::Adjective.family(false), TableFamily::Declension);
        assert_eq!(WordClass::Numeral.family(false), TableFamily::Pronominal);
        assert_eq!(WordClass::Noun.family(true), TableFamily::Pronominal);
        assert_eq!(WordClass::Pronoun.family(true), TableFamily::Declension);
    }

    #[test]
    fn layouts_read_different_cells() {
        let decl = TableFamily::Declension.layout();
        assert_eq!((decl.singular_cell, decl.plural_cell), (1, 2));
        assert!(decl.merges_accusative);

        let pron = TableFamily::Pronominal.layout();
        assert_eq!((pron.singular_cell, pron.plural_cell), (2, 3));
        assert!(!pron.merges_accusative);
    }
}
