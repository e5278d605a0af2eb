//! Word-list reader.
//!
//! One word per line: `word[, word-class][, language][, other_][, gloss]`.
//! Blank fields fall back to the configured defaults; the gloss is the rest
//! of the line and may contain commas.

use crate::extract::LookupRequest;
use crate::source::read_text_file;
use anyhow::Result;
use std::path::Path;
use tracing::trace;

const OTHER_TABLE_FLAG: &str = "other_";
const SAME_TABLE_FLAG: &str = "same_";

#[derive(Debug, Clone)]
pub struct WordListDefaults {
    pub word_class: String,
    pub language: String,
}

fn or_default(field: Option<&str>, default: &str) -> String {
    match field {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str, defaults: &WordListDefaults) -> Option<LookupRequest> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.splitn(4, ',').map(str::trim);
    let word = fields.next().filter(|w| !w.is_empty())?;
    let word_class = or_default(fields.next(), &defaults.word_class);
    let language = or_default(fields.next(), &defaults.language);

    // Anything in the flag position that is not a flag starts the gloss
    let rest = fields.next().unwrap_or_default();
    let (flag, tail) = rest.split_once(',').unwrap_or((rest, ""));
    let (use_other_table, gloss) = match flag.trim() {
        OTHER_TABLE_FLAG => (true, tail),
        SAME_TABLE_FLAG | "" => (false, tail),
        _ => (false, rest),
    };
    let gloss = Some(gloss.trim())
        .filter(|g| !g.is_empty())
        .map(str::to_string);

    trace!(word, use_other_table, "word list entry");
    Some(LookupRequest {
        word: word.to_string(),
        word_class,
        language,
        use_other_table,
        gloss,
    })
}

pub fn parse_word_list(text: &str, defaults: &WordListDefaults) -> Vec<LookupRequest> {
    text.lines()
        .filter_map(|line| parse_line(line, defaults))
        .collect()
}

/// Read a word list from disk (`.bz2` is decompressed).
pub fn read_word_list(path: &Path, defaults: &WordListDefaults) -> Result<Vec<LookupRequest>> {
    let text = read_text_file(path)?;
    Ok(parse_word_list(&text, defaults))
}
