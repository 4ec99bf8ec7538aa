//! Emoji matcher backed by the shared reference table

use std::sync::Arc;

use super::{MatchKind, Matcher};
use crate::emoji::EmojiTable;

/// Matches emoji glyph sequences present in an [`EmojiTable`]
#[derive(Debug, Clone)]
pub struct EmojiMatcher {
    table: Arc<EmojiTable>,
}

impl EmojiMatcher {
    pub fn new(table: Arc<EmojiTable>) -> Self {
        Self { table }
    }

    /// The underlying reference table
    pub fn table(&self) -> &EmojiTable {
        &self.table
    }

    /// `text` with every emoji replaced by its `:name:` tag
    pub fn embed(&self, text: &str) -> String {
        self.table.embed(text)
    }
}

impl Matcher for EmojiMatcher {
    fn kind(&self) -> MatchKind {
        MatchKind::Emoji
    }

    fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.table.find_all(text)
    }

    fn strip(&self, text: &str) -> String {
        self.table.strip(text)
    }
}
