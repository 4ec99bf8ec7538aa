//! Structured extraction of tweet elements

use serde::{Deserialize, Serialize};

use crate::matchers::{MatchKind, MatcherSet};

/// Every element found in a piece of text, grouped by kind
///
/// Each list keeps source order and retains duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// The input, unmodified
    pub text: String,
    pub urls: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub reserved_words: Vec<String>,
    pub emojis: Vec<String>,
    pub smileys: Vec<String>,
}

impl ParseResult {
    /// Run every matcher over `text`
    pub fn extract(text: &str, matchers: &MatcherSet) -> Self {
        let find = |kind: MatchKind| -> Vec<String> {
            matchers
                .get(kind)
                .find_all(text)
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        Self {
            text: text.to_string(),
            urls: find(MatchKind::Url),
            hashtags: find(MatchKind::Hashtag),
            mentions: find(MatchKind::Mention),
            reserved_words: find(MatchKind::ReservedWord),
            emojis: find(MatchKind::Emoji),
            smileys: find(MatchKind::Smiley),
        }
    }

    /// Matches of one kind
    pub fn get(&self, kind: MatchKind) -> &[String] {
        match kind {
            MatchKind::Url => &self.urls,
            MatchKind::Hashtag => &self.hashtags,
            MatchKind::Mention => &self.mentions,
            MatchKind::ReservedWord => &self.reserved_words,
            MatchKind::Emoji => &self.emojis,
            MatchKind::Smiley => &self.smileys,
        }
    }

    /// Total number of matches across all kinds
    pub fn total_matches(&self) -> usize {
        MatchKind::ALL.iter().map(|&kind| self.get(kind).len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::EmojiTable;
    use std::sync::Arc;

    fn matchers() -> MatcherSet {
        MatcherSet::new(Arc::new(EmojiTable::from_unicode_data()))
    }

    #[test]
    fn test_extract_sample_tweet() {
        let text = "RT @user: Preprocessor is #awesome 👍 https://github.com/s/preprocessor #NLP 123 !@#$";
        let result = ParseResult::extract(text, &matchers());

        assert_eq!(result.text, text);
        assert_eq!(result.urls, vec!["https://github.com/s/preprocessor"]);
        assert_eq!(result.hashtags, vec!["#awesome", "#NLP"]);
        assert_eq!(result.mentions, vec!["@user"]);
        assert_eq!(result.reserved_words, vec!["RT"]);
        assert_eq!(result.emojis, vec!["👍"]);
        assert!(result.smileys.is_empty());
        assert_eq!(result.total_matches(), 6);
    }

    #[test]
    fn test_duplicates_retained() {
        let result = ParseResult::extract("#a #a @b @b 🔥🔥 :-) :-)", &matchers());
        assert_eq!(result.get(MatchKind::Hashtag), ["#a", "#a"]);
        assert_eq!(result.get(MatchKind::Mention), ["@b", "@b"]);
        assert_eq!(result.get(MatchKind::Emoji), ["🔥", "🔥"]);
        assert_eq!(result.get(MatchKind::Smiley), [":-)", ":-)"]);
    }

    #[test]
    fn test_json_field_names() {
        let result = ParseResult::extract("RT hi", &matchers());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["reserved_words"][0], "RT");
        assert_eq!(json["text"], "RT hi");
    }
}
