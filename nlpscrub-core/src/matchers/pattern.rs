//! Regex-backed matchers

use std::sync::LazyLock;

use regex::Regex;

use super::{MatchKind, Matcher};

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+|www\S+|https\S+").expect("valid URL pattern"));
static HASHTAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag pattern"));
static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention pattern"));
static RESERVED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:RT|FAV)\b").expect("valid reserved word pattern"));
static SMILEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:;]-[)D]").expect("valid smiley pattern"));

/// Matcher driven by a compiled regular expression
#[derive(Debug, Clone, Copy)]
pub struct PatternMatcher {
    kind: MatchKind,
    pattern: &'static LazyLock<Regex>,
}

impl PatternMatcher {
    /// Tokens starting with `http`, `https` or `www`, up to the next whitespace
    pub fn url() -> Self {
        Self {
            kind: MatchKind::Url,
            pattern: &URL,
        }
    }

    /// `#` followed by word characters
    pub fn hashtag() -> Self {
        Self {
            kind: MatchKind::Hashtag,
            pattern: &HASHTAG,
        }
    }

    /// `@` followed by word characters
    pub fn mention() -> Self {
        Self {
            kind: MatchKind::Mention,
            pattern: &MENTION,
        }
    }

    /// Whole-word `RT` or `FAV`, case-sensitive
    pub fn reserved_word() -> Self {
        Self {
            kind: MatchKind::ReservedWord,
            pattern: &RESERVED_WORD,
        }
    }

    /// `:-)`, `:-D`, `;-)` and `;-D`
    pub fn smiley() -> Self {
        Self {
            kind: MatchKind::Smiley,
            pattern: &SMILEY,
        }
    }

    fn regex(&self) -> &Regex {
        self.pattern
    }
}

impl Matcher for PatternMatcher {
    fn kind(&self) -> MatchKind {
        self.kind
    }

    fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex().find_iter(text).map(|m| m.as_str()).collect()
    }

    fn strip(&self, text: &str) -> String {
        self.regex().replace_all(text, "").into_owned()
    }
}
