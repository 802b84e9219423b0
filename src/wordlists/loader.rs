//! Word list loading utilities
//!
//! Provides functions to load dictionaries and word sets from files or use
//! the embedded default.

use super::DICTIONARY;
use crate::core::Dictionary;
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word list files
#[derive(Debug)]
pub enum DictionaryError {
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

fn read_file(path: &Path) -> Result<String, DictionaryError> {
    fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a dictionary from a newline-delimited file
///
/// Lines are trimmed and uppercased; blank lines are skipped.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let dict = load_from_file("data/dict.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let dictionary = Dictionary::from_text(&read_file(path)?);
    info!("Loaded {} words from {}", dictionary.len(), path.display());
    Ok(dictionary)
}

/// The dictionary compiled into the binary
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::{DICTIONARY_COUNT, loader::embedded};
///
/// assert_eq!(embedded().len(), DICTIONARY_COUNT);
/// ```
#[must_use]
pub fn embedded() -> Dictionary {
    let dictionary = Dictionary::new(DICTIONARY);
    debug!("Using embedded dictionary ({} words)", dictionary.len());
    dictionary
}

/// Load a set of words, such as an exclusion list
///
/// Entries are trimmed and uppercased. Blank lines and lines starting with
/// `#` are skipped.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read.
pub fn load_word_set<P: AsRef<Path>>(path: P) -> Result<FxHashSet<String>, DictionaryError> {
    let path = path.as_ref();
    let words = parse_word_set(&read_file(path)?);
    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse word-set text (see [`load_word_set`])
#[must_use]
pub fn parse_word_set(content: &str) -> FxHashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_uppercase)
        .collect()
}
