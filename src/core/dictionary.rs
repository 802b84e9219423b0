//! Immutable shared dictionary
//!
//! The dictionary is loaded once and only ever read afterwards, so it is
//! stored behind an `Arc` and cloned freely across threads.

use std::sync::Arc;

/// Ordered, read-only sequence of uppercase words
///
/// Duplicates are kept as given; they are harmless to every consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Arc<[String]>,
}

impl Dictionary {
    /// Build a dictionary from raw entries
    ///
    /// Each entry is trimmed and uppercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Dictionary;
    ///
    /// let dict = Dictionary::new([" taste", "", "Suite "]);
    /// assert_eq!(dict.words(), &["TASTE".to_string(), "SUITE".to_string()]);
    /// ```
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_uppercase())
                }
            })
            .collect();

        Self {
            words: words.into(),
        }
    }

    /// Build a dictionary from newline-delimited text
    #[must_use]
    pub fn from_text(content: &str) -> Self {
        Self::new(content.lines())
    }

    /// All words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over words as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
