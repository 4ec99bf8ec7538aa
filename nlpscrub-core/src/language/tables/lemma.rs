//! Rule-based noun lemmatizer
//!
//! Reduces plural noun forms to their singular base form using an
//! irregular-form table followed by suffix detachment rules. Only tokens made
//! entirely of lowercase ASCII letters are rewritten; anything else (names,
//! acronyms, numbers, punctuation) passes through unchanged.

use std::collections::HashMap;

use crate::language::config::LemmatizerRules;

#[derive(Debug, Clone)]
struct Rule {
    suffix: String,
    replacement: String,
    min_stem: usize,
}

/// Noun lemmatizer built from language configuration
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    exceptions: HashMap<String, String>,
    /// Sorted longest suffix first
    rules: Vec<Rule>,
    protected_endings: Vec<String>,
    min_length: usize,
}

impl Lemmatizer {
    /// Build from configuration rules
    pub fn from_rules(config: &LemmatizerRules) -> Self {
        let mut rules: Vec<Rule> = config
            .rules
            .iter()
            .map(|r| Rule {
                suffix: r.suffix.to_lowercase(),
                replacement: r.replacement.to_lowercase(),
                min_stem: r.min_stem,
            })
            .collect();
        // Stable sort keeps config order among equal-length suffixes
        rules.sort_by(|a, b| b.suffix.len().cmp(&a.suffix.len()));

        Self {
            exceptions: config
                .exceptions
                .iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect(),
            rules,
            protected_endings: config
                .protected_endings
                .iter()
                .map(|e| e.to_lowercase())
                .collect(),
            min_length: config.min_length,
        }
    }

    /// Base form of a single token
    pub fn lemma(&self, token: &str) -> String {
        if let Some(base) = self.exceptions.get(token) {
            return base.clone();
        }

        if !token.bytes().all(|b| b.is_ascii_lowercase()) || token.len() < self.min_length {
            return token.to_string();
        }

        if self
            .protected_endings
            .iter()
            .any(|ending| token.ends_with(ending.as_str()))
        {
            return token.to_string();
        }

        for rule in &self.rules {
            if let Some(stem) = token.strip_suffix(rule.suffix.as_str()) {
                // ASCII-only at this point, so byte length is char length
                if stem.len() >= rule.min_stem {
                    return format!("{stem}{}", rule.replacement);
                }
            }
        }

        token.to_string()
    }
}
