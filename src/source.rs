//! Where dictionary pages come from.
//!
//! Pages are read from a directory of saved HTML files named after the page
//! title (`talo.html`, or `talo.html.bz2` when compressed).

use anyhow::{bail, Context, Result};
use bzip2::read::BzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub trait PageSource {
    /// Raw HTML of the dictionary page for `word`.
    fn fetch(&self, word: &str) -> Result<String>;
}

/// Dictionary page title: spaces become underscores.
pub fn page_title(word: &str) -> String {
    word.trim().replace(' ', "_")
}

/// Read a UTF-8 text file, decompressing `.bz2` files on the fly.
pub fn read_text_file(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader: Box<dyn Read> = if path.to_string_lossy().ends_with(".bz2") {
        Box::new(BufReader::with_capacity(256 * 1024, BzDecoder::new(file)))
    } else {
        Box::new(BufReader::with_capacity(256 * 1024, file))
    };

    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(text)
}

pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectorySource { dir: dir.into() }
    }

    fn candidates(&self, word: &str) -> [PathBuf; 2] {
        let title = page_title(word);
        [
            self.dir.join(format!("{}.html", title)),
            self.dir.join(format!("{}.html.bz2", title)),
        ]
    }
}

impl PageSource for DirectorySource {
    fn fetch(&self, word: &str) -> Result<String> {
        match self.candidates(word).into_iter().find(|p| p.exists()) {
            Some(path) => read_text_file(&path),
            None => bail!("No saved page for '{}' in {}", word, self.dir.display()),
        }
    }
}
