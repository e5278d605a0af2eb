//! Result writer: JSON object keyed by word, in word-list order.

use crate::forms::OutputRecord;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Forms of one word followed by its gloss (`""` when there is none).
#[derive(Debug, Clone)]
pub struct WordEntry {
    pub record: OutputRecord,
    pub gloss: String,
}

impl Serialize for WordEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.record.len() + 1))?;
        for form in &self.record.forms {
            seq.serialize_element(form)?;
        }
        seq.serialize_element(&self.gloss)?;
        seq.end()
    }
}

#[derive(Debug, Default)]
pub struct Results {
    entries: IndexMap<String, WordEntry>,
}

impl Results {
    pub fn new() -> Self {
        Self::default()
    }

    /// A word listed twice keeps its first position and its last result.
    pub fn insert(&mut self, word: &str, record: OutputRecord, gloss: Option<&str>) {
        self.entries.insert(
            word.to_string(),
            WordEntry {
                record,
                gloss: gloss.unwrap_or_default().to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::with_capacity(256 * 1024, file);
        serde_json::to_writer_pretty(&mut writer, &self.entries)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
