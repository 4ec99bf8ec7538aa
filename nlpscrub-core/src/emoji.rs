//! Emoji reference table
//!
//! Maps every known emoji glyph sequence to its CLDR name. Many emoji span
//! several code points (ZWJ families, skin tones, flags, keycaps), so the
//! scanner always takes the longest sequence in the table at each position
//! and never splits a sequence into its parts.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

/// Variation selector 16 (emoji presentation)
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Read-only emoji glyph -> name table
#[derive(Debug, Clone)]
pub struct EmojiTable {
    names: HashMap<String, &'static str>,
    /// First char of every sequence, for a cheap reject before lookups
    starts: HashSet<char>,
    /// Length in chars of the longest sequence
    max_chars: usize,
}

impl EmojiTable {
    /// Build from the bundled Unicode emoji data
    ///
    /// Includes every emoji, all of its skin-tone variants, and the
    /// unqualified form (without U+FE0F) of sequences that carry one.
    pub fn from_unicode_data() -> Self {
        let mut table = Self {
            names: HashMap::new(),
            starts: HashSet::new(),
            max_chars: 0,
        };

        for emoji in emojis::iter() {
            table.insert_with_variants(emoji.as_str(), emoji.name());
            if let Some(tones) = emoji.skin_tones() {
                for toned in tones {
                    table.insert_with_variants(toned.as_str(), toned.name());
                }
            }
        }

        table
    }

    /// Build from explicit glyph/name pairs
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let mut table = Self {
            names: HashMap::new(),
            starts: HashSet::new(),
            max_chars: 0,
        };
        for (glyph, name) in entries {
            table.insert(glyph.to_string(), name, true);
        }
        table
    }

    fn insert_with_variants(&mut self, glyph: &str, name: &'static str) {
        self.insert(glyph.to_string(), name, true);
        if glyph.contains(VARIATION_SELECTOR) {
            let unqualified: String = glyph.chars().filter(|&c| c != VARIATION_SELECTOR).collect();
            if !unqualified.is_empty() {
                self.insert(unqualified, name, false);
            }
        }
    }

    fn insert(&mut self, glyph: String, name: &'static str, overwrite: bool) {
        let Some(first) = glyph.chars().next() else {
            return;
        };
        self.starts.insert(first);
        self.max_chars = self.max_chars.max(glyph.chars().count());
        if overwrite {
            self.names.insert(glyph, name);
        } else {
            self.names.entry(glyph).or_insert(name);
        }
    }

    /// Number of glyph sequences in the table
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Exact-sequence membership test
    pub fn contains(&self, glyph: &str) -> bool {
        self.names.contains_key(glyph)
    }

    /// CLDR name of an exact glyph sequence
    pub fn name_of(&self, glyph: &str) -> Option<&'static str> {
        self.names.get(glyph).copied()
    }

    /// Byte ranges of every emoji in `text`, left to right
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        if self.names.is_empty() {
            return spans;
        }

        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;

        let mut i = 0;
        while i < char_count {
            let start = bounds[i];
            let first = text[start..].chars().next();
            if !first.is_some_and(|c| self.starts.contains(&c)) {
                i += 1;
                continue;
            }

            let longest = self.max_chars.min(char_count - i);
            let matched = (1..=longest)
                .rev()
                .find(|&len| self.names.contains_key(&text[start..bounds[i + len]]));

            match matched {
                Some(len) => {
                    spans.push(start..bounds[i + len]);
                    i += len;
                }
                None => i += 1,
            }
        }

        spans
    }

    /// Every emoji in `text`, left to right, duplicates included
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.spans(text).into_iter().map(|r| &text[r]).collect()
    }

    /// `text` with every emoji removed
    pub fn strip(&self, text: &str) -> String {
        self.replace_with(text, |_| String::new())
    }

    /// `text` with every emoji replaced by its `:name:` tag
    pub fn embed(&self, text: &str) -> String {
        self.replace_with(text, |glyph| match self.name_of(glyph) {
            Some(name) => format!(":{}:", tag_name(name)),
            None => String::new(),
        })
    }

    fn replace_with<F>(&self, text: &str, mut replacement: F) -> String
    where
        F: FnMut(&str) -> String,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for span in self.spans(text) {
            out.push_str(&text[last..span.start]);
            out.push_str(&replacement(&text[span.clone()]));
            last = span.end;
        }
        out.push_str(&text[last..]);
        out
    }
}

/// Tag form of a CLDR name: `thumbs up` -> `thumbs_up`, `flag: Japan` -> `flag_Japan`
pub fn tag_name(name: &str) -> String {
    let mut tag = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            ' ' | ':' | '-' => {
                if !tag.ends_with('_') {
                    tag.push('_');
                }
            }
            ',' => {}
            _ => tag.push(ch),
        }
    }
    tag.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_populated() {
        let table = EmojiTable::from_unicode_data();
        assert!(table.len() > 3000);
        assert!(table.contains("👍"));
        assert_eq!(table.name_of("👍"), Some("thumbs up"));
    }

    #[test]
    fn test_skin_tone_and_unqualified_variants() {
        let table = EmojiTable::from_unicode_data();
        assert!(table.contains("👍🏽"));
        // U+263A with and without the variation selector
        assert!(table.contains("\u{263A}\u{FE0F}"));
        assert!(table.contains("\u{263A}"));
    }

    #[test]
    fn test_multi_codepoint_sequences_match_whole() {
        let table = EmojiTable::from_unicode_data();
        let family = "👨\u{200D}👩\u{200D}👧";
        let text = format!("a {family} b 🇯🇵 c 👍🏽");
        let found = table.find_all(&text);
        assert_eq!(found, vec![family, "🇯🇵", "👍🏽"]);
    }

    #[test]
    fn test_duplicates_and_order() {
        let table = EmojiTable::from_unicode_data();
        assert_eq!(table.find_all("🔥x😀🔥"), vec!["🔥", "😀", "🔥"]);
    }

    #[test]
    fn test_plain_text_has_no_emoji() {
        let table = EmojiTable::from_unicode_data();
        assert!(table.find_all("Hello, world! 123 #tag @user :-)").is_empty());
    }

    #[test]
    fn test_strip_leaves_surrounding_text() {
        let table = EmojiTable::from_unicode_data();
        assert_eq!(table.strip("great 👍 job"), "great  job");
        assert_eq!(table.strip("no emoji"), "no emoji");
    }

    #[test]
    fn test_embed_uses_name_tags() {
        let table = EmojiTable::from_unicode_data();
        assert_eq!(table.embed("great 👍"), "great :thumbs_up:");
        assert_eq!(table.embed("🇯🇵"), ":flag_Japan:");
    }

    #[test]
    fn test_from_entries() {
        let table = EmojiTable::from_entries([("😀", "grinning face")]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.find_all("a😀b😀"), vec!["😀", "😀"]);
        assert!(table.find_all("👍").is_empty());
    }

    #[test]
    fn test_tag_name() {
        assert_eq!(tag_name("thumbs up"), "thumbs_up");
        assert_eq!(tag_name("flag: Japan"), "flag_Japan");
        assert_eq!(tag_name("family: man, woman, girl"), "family_man_woman_girl");
        assert_eq!(tag_name("T-Rex"), "T_Rex");
    }
}
