//! Cell Normalizer: raw text fragments of one table cell -> WordFormSet.

use crate::forms::WordFormSet;
use lazy_static::lazy_static;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Alternatives printed on one line: "talojen, taloin"
    static ref ALTERNATIVE_SEPARATOR: Regex = Regex::new(r",\s+").unwrap();
}

/// Glyphs the dictionary prints in place of a form that does not exist.
static DASH_GLYPHS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "-", "\u{2010}", "\u{2012}", "\u{2013}", "\u{2014}", "\u{2015}", "\u{2212}",
    ]
    .into_iter()
    .collect()
});

/// Usage notes that sit in the cell next to a form.
const DISCARD_MARKERS: [&str; 1] = ["rare"];

fn is_discardable(fragment: &str) -> bool {
    let trimmed = fragment.trim();
    trimmed.is_empty() || DISCARD_MARKERS.contains(&trimmed)
}

fn strip_decoration(fragment: &str) -> &str {
    fragment.trim_matches(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '*'))
}

/// Normalize the fragments of a single cell.
pub fn normalize_cell<S: AsRef<str>>(fragments: &[S]) -> WordFormSet {
    let mut candidates = Vec::new();

    let pieces = fragments
        .iter()
        .flat_map(|fragment| ALTERNATIVE_SEPARATOR.split(fragment.as_ref()));

    for piece in pieces {
        if is_discardable(piece) {
            continue;
        }
        if DASH_GLYPHS.contains(piece.trim()) {
            candidates.push(String::new());
            continue;
        }
        let stripped = strip_decoration(piece);
        if is_discardable(stripped) {
            continue;
        }
        candidates.push(stripped.nfc().collect());
    }

    WordFormSet::from_candidates(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn single(s: &str) -> WordFormSet {
        WordFormSet::Single(s.to_string())
    }

    fn alternatives(forms: &[&str]) -> WordFormSet {
        WordFormSet::Alternatives(forms.iter().map(|f| f.to_string()).collect())
    }

    // ─────────────────────────────────────────────────────────────
    // Dash placeholders
    // ─────────────────────────────────────────────────────────────

    #[rstest]
    #[case("-")]
    #[case("\u{2013}")]
    #[case("\u{2014}")]
    #[case(" \u{2014}\n")]
    #[case("\u{2212}")]
    fn dash_only_cell_is_empty(#[case] glyph: &str) {
        assert_eq!(normalize_cell(&[glyph]), WordFormSet::Empty);
    }

    #[test]
    fn dash_next_to_form_keeps_position() {
        assert_eq!(normalize_cell(&["\u{2014}", "kuin"]), alternatives(&["", "kuin"]));
    }

    // ─────────────────────────────────────────────────────────────
    // Discards and stripping
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn rare_marker_and_newlines_are_dropped() {
        assert_eq!(normalize_cell(&["rare", "\n", "jalka"]), single("jalka"));
    }

    #[rstest]
    #[case(&["(jalan)"], "jalan")]
    #[case(&["jalkoja*"], "jalkoja")]
    #[case(&["\n  jalat \n"], "jalat")]
    #[case(&["((*jalkain*))"], "jalkain")]
    fn decoration_is_stripped(#[case] fragments: &[&str], #[case] expected: &str) {
        assert_eq!(normalize_cell(fragments), single(expected));
    }

    #[test]
    fn only_decoration_is_empty() {
        assert_eq!(normalize_cell(&["()", "*", " "]), WordFormSet::Empty);
        assert_eq!(normalize_cell(&["(rare)"]), WordFormSet::Empty);
        assert_eq!(normalize_cell::<&str>(&[]), WordFormSet::Empty);
    }

    // ─────────────────────────────────────────────────────────────
    // Multiple forms
    // ─────────────────────────────────────────────────────────────

    #[test]
    fn comma_separated_forms_stay_separate() {
        assert_eq!(normalize_cell(&["a, b"]), alternatives(&["a", "b"]));
    }

    #[test]
    fn comma_without_space_is_not_a_separator() {
        assert_eq!(normalize_cell(&["a,b"]), single("a,b"));
    }

    #[test]
    fn fragments_keep_source_order_and_duplicates() {
        assert_eq!(
            normalize_cell(&["talojen", "taloin", "rare", "talojen"]),
            alternatives(&["talojen", "taloin", "talojen"])
        );
    }

    #[test]
    fn decomposed_diacritics_are_composed() {
        let decomposed = "ta\u{0308}ti";
        assert_eq!(normalize_cell(&[decomposed]), single("t\u{00e4}ti"));
    }
}
