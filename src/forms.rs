//! Word-form values produced by the pipeline.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Acceptable surface forms for one grammatical slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordFormSet {
    /// Slot is absent (defective paradigm or a dash in the table)
    Empty,
    Single(String),
    /// Free variants, in source order
    Alternatives(Vec<String>),
    /// Accusative singular: (nominative-looking, genitive-looking), never flattened
    Compound(Box<WordFormSet>, Box<WordFormSet>),
}

impl WordFormSet {
    /// Build from normalized candidates. A lone empty candidate is the empty form.
    pub fn from_candidates(mut candidates: Vec<String>) -> Self {
        match candidates.len() {
            0 => WordFormSet::Empty,
            1 => {
                let form = candidates.remove(0);
                if form.is_empty() {
                    WordFormSet::Empty
                } else {
                    WordFormSet::Single(form)
                }
            }
            _ => WordFormSet::Alternatives(candidates),
        }
    }

    pub fn compound(nominative: WordFormSet, genitive: WordFormSet) -> Self {
        WordFormSet::Compound(Box::new(nominative), Box::new(genitive))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, WordFormSet::Empty)
    }

    /// Number of distinct slots the consumer sees (compound counts as one pair).
    pub fn len(&self) -> usize {
        match self {
            WordFormSet::Empty => 0,
            WordFormSet::Single(_) => 1,
            WordFormSet::Alternatives(forms) => forms.len(),
            WordFormSet::Compound(..) => 2,
        }
    }
}

impl From<&str> for WordFormSet {
    fn from(s: &str) -> Self {
        WordFormSet::from_candidates(vec![s.to_string()])
    }
}

// Empty -> "", Single -> "x", Alternatives -> ["a", "b"], Compound -> [nom, gen]
impl Serialize for WordFormSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WordFormSet::Empty => serializer.serialize_str(""),
            WordFormSet::Single(form) => serializer.serialize_str(form),
            WordFormSet::Alternatives(forms) => {
                let mut seq = serializer.serialize_seq(Some(forms.len()))?;
                for form in forms {
                    seq.serialize_element(form)?;
                }
                seq.end()
            }
            WordFormSet::Compound(nominative, genitive) => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(nominative.as_ref())?;
                seq.serialize_element(genitive.as_ref())?;
                seq.end()
            }
        }
    }
}

/// One number category's forms, in table row order.
pub type ColumnSequence = Vec<WordFormSet>;

/// Final per-word result: singular slots followed by plural slots, canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub forms: Vec<WordFormSet>,
}

impl OutputRecord {
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}
