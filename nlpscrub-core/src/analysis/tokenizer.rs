//! Treebank-style word tokenizer
//!
//! Tokenization is a fixed sequence of regex rewrites that pad punctuation,
//! brackets, quotes and clitics with spaces, followed by a whitespace split.
//! A last pass splits the period off a word that ends a sentence inside the
//! text (next token capitalized) unless the word is a known abbreviation.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// A single rewrite: every match of `pattern` becomes `replacement`
struct Rewrite {
    pattern: Regex,
    replacement: &'static str,
}

impl Rewrite {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("valid tokenizer pattern"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

static STARTING_QUOTES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::new(r#"^""#, "``"),
        Rewrite::new(r"(``)", " ${1} "),
        Rewrite::new(r#"([ (\[{<])("|'{2})"#, "${1} `` "),
    ]
});

static PUNCTUATION: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        // Sentence-final period, possibly followed by closing brackets/quotes
        Rewrite::new(r#"([^.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
        // Colons and commas, except inside numbers
        Rewrite::new(r"([:,])([^\d])", " ${1} ${2}"),
        Rewrite::new(r"([:,])$", " ${1} "),
        // Ellipses stay together
        Rewrite::new(r"\.{2,}", " ${0} "),
        Rewrite::new(r"[;@#$%&]", " ${0} "),
        Rewrite::new(r"[?!]", " ${0} "),
        Rewrite::new(r"([^'])' ", "${1} ' "),
        // Brackets
        Rewrite::new(r"[\]\[(){}<>]", " ${0} "),
        Rewrite::new(r"--", " -- "),
    ]
});

static ENDING_QUOTES: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::new(r"''", " '' "),
        Rewrite::new(r#"""#, " '' "),
        Rewrite::new(r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        Rewrite::new(
            r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ",
            "${1} ${2} ",
        ),
    ]
});

static CONTRACTIONS: LazyLock<Vec<Rewrite>> = LazyLock::new(|| {
    vec![
        Rewrite::new(r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        Rewrite::new(r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        Rewrite::new(r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        Rewrite::new(r"(?i)\b(wan)(na)\b", " ${1} ${2} "),
    ]
});

/// Language-aware word tokenizer
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    /// Lowercase, without trailing period
    abbreviations: HashSet<String>,
}

impl WordTokenizer {
    /// Create a tokenizer that knows the given abbreviations
    pub fn new<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            abbreviations: abbreviations
                .into_iter()
                .map(|a| a.as_ref().trim_end_matches('.').to_lowercase())
                .collect(),
        }
    }

    /// Split `text` into word and punctuation tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut padded = text.to_string();
        for rule in STARTING_QUOTES.iter().chain(PUNCTUATION.iter()) {
            padded = rule.apply(&padded);
        }

        padded = format!(" {padded} ");
        for rule in ENDING_QUOTES.iter().chain(CONTRACTIONS.iter()) {
            padded = rule.apply(&padded);
        }

        let raw: Vec<&str> = padded.split_whitespace().collect();
        self.split_inner_periods(&raw)
    }

    fn split_inner_periods(&self, raw: &[&str]) -> Vec<String> {
        let mut tokens = Vec::with_capacity(raw.len());
        for (i, token) in raw.iter().enumerate() {
            let next_is_capitalized = raw
                .get(i + 1)
                .and_then(|next| next.chars().next())
                .is_some_and(char::is_uppercase);

            match token.strip_suffix('.') {
                Some(word) if next_is_capitalized && self.ends_sentence(word) => {
                    tokens.push(word.to_string());
                    tokens.push(".".to_string());
                }
                _ => tokens.push(token.to_string()),
            }
        }
        tokens
    }

    /// Whether a period after `word` is a sentence end rather than part of it
    fn ends_sentence(&self, word: &str) -> bool {
        if word.is_empty() || word.contains('.') {
            // Ellipses and initialisms such as "U.S"
            return false;
        }
        if !word.chars().any(char::is_alphanumeric) {
            return false;
        }
        !self.abbreviations.contains(&word.to_lowercase())
    }
}
