//! Stopword lookup set

use std::collections::HashSet;

/// Case-insensitive stopword set
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Build from a word list; entries are stored lowercase
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether the lowercase form of `token` is a stopword
    pub fn contains(&self, token: &str) -> bool {
        if self.words.contains(token) {
            return true;
        }
        self.words.contains(token.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
