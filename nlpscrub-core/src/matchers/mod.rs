//! Extraction matchers
//!
//! Six recognizers classify substrings of tweet text without mutating
//! anything. Each one can also be applied destructively: `strip` removes every
//! match and leaves the surrounding text as it was, which may leave doubled
//! whitespace behind for a later whitespace pass to collapse.

mod emoji;
mod pattern;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use emoji::EmojiMatcher;
pub use pattern::PatternMatcher;

use crate::emoji::EmojiTable;

/// Category of a matched span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Url,
    Hashtag,
    Mention,
    ReservedWord,
    Emoji,
    Smiley,
}

impl MatchKind {
    /// All kinds, in the order `parse` reports them
    pub const ALL: [MatchKind; 6] = [
        MatchKind::Url,
        MatchKind::Hashtag,
        MatchKind::Mention,
        MatchKind::ReservedWord,
        MatchKind::Emoji,
        MatchKind::Smiley,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Url => "url",
            MatchKind::Hashtag => "hashtag",
            MatchKind::Mention => "mention",
            MatchKind::ReservedWord => "reserved_word",
            MatchKind::Emoji => "emoji",
            MatchKind::Smiley => "smiley",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognizer for one kind of tweet element
pub trait Matcher: Send + Sync {
    /// Kind of element this matcher recognizes
    fn kind(&self) -> MatchKind;

    /// Every match in `text`, left to right, duplicates included
    fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str>;

    /// `text` with every match removed
    fn strip(&self, text: &str) -> String;
}

/// One matcher per [`MatchKind`]
pub struct MatcherSet {
    urls: PatternMatcher,
    hashtags: PatternMatcher,
    mentions: PatternMatcher,
    reserved_words: PatternMatcher,
    emojis: EmojiMatcher,
    smileys: PatternMatcher,
}

impl MatcherSet {
    /// Build the standard matchers over a shared emoji table
    pub fn new(emoji_table: Arc<EmojiTable>) -> Self {
        Self {
            urls: PatternMatcher::url(),
            hashtags: PatternMatcher::hashtag(),
            mentions: PatternMatcher::mention(),
            reserved_words: PatternMatcher::reserved_word(),
            emojis: EmojiMatcher::new(emoji_table),
            smileys: PatternMatcher::smiley(),
        }
    }

    /// The matcher for `kind`
    pub fn get(&self, kind: MatchKind) -> &dyn Matcher {
        match kind {
            MatchKind::Url => &self.urls,
            MatchKind::Hashtag => &self.hashtags,
            MatchKind::Mention => &self.mentions,
            MatchKind::ReservedWord => &self.reserved_words,
            MatchKind::Emoji => &self.emojis,
            MatchKind::Smiley => &self.smileys,
        }
    }

    pub fn emojis(&self) -> &EmojiMatcher {
        &self.emojis
    }
}

impl fmt::Debug for MatcherSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherSet")
            .field("kinds", &MatchKind::ALL)
            .finish()
    }
}
