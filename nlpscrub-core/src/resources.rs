//! Loaded linguistic resources
//!
//! A [`Resources`] value is built once and never mutated afterwards, so a
//! single instance can back any number of processors across threads.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::analysis::WordTokenizer;
use crate::emoji::EmojiTable;
use crate::error::{ProcessingError, Result};
use crate::language::{get_language_config, LanguageConfig, Lemmatizer, StopwordSet};
use crate::matchers::MatcherSet;

static SHARED: OnceLock<std::result::Result<Arc<Resources>, String>> = OnceLock::new();

/// Default language for [`Resources::shared`]
pub const DEFAULT_LANGUAGE: &str = "en";

/// Emoji table, matchers, tokenizer, stopwords and lemmatizer for one language
#[derive(Debug)]
pub struct Resources {
    language_code: String,
    language_name: String,
    emoji_table: Arc<EmojiTable>,
    matchers: MatcherSet,
    tokenizer: WordTokenizer,
    stopwords: StopwordSet,
    lemmatizer: Lemmatizer,
}

impl Resources {
    /// Process-wide English resources, loaded on first use
    pub fn shared() -> Result<Arc<Resources>> {
        SHARED
            .get_or_init(|| {
                Self::load(DEFAULT_LANGUAGE)
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map_err(ProcessingError::ResourceInit)
    }

    /// Load resources for an embedded language, by code or name
    pub fn load(language: &str) -> Result<Self> {
        let config = get_language_config(language)?;
        Self::from_config(config)
    }

    /// Build resources from an external language configuration file
    pub fn from_config_file(path: &Path) -> Result<Self> {
        let config = LanguageConfig::from_file(path)?;
        Self::from_config(&config)
    }

    /// Build resources from a parsed configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let emoji_table = EmojiTable::from_unicode_data();
        if emoji_table.is_empty() {
            return Err(ProcessingError::EmojiData(
                "Unicode emoji data contains no entries".to_string(),
            ));
        }
        let emoji_table = Arc::new(emoji_table);

        let resources = Self {
            language_code: config.metadata.code.clone(),
            language_name: config.metadata.name.clone(),
            matchers: MatcherSet::new(Arc::clone(&emoji_table)),
            emoji_table,
            tokenizer: WordTokenizer::new(&config.tokenizer.abbreviations),
            stopwords: StopwordSet::new(&config.stopwords.words),
            lemmatizer: Lemmatizer::from_rules(&config.lemmatizer),
        };

        tracing::debug!(
            language = %resources.language_code,
            emojis = resources.emoji_table.len(),
            stopwords = resources.stopwords.len(),
            "Resources loaded"
        );

        Ok(resources)
    }

    pub fn language_code(&self) -> &str {
        &self.language_code
    }

    pub fn language_name(&self) -> &str {
        &self.language_name
    }

    pub fn emoji_table(&self) -> &EmojiTable {
        &self.emoji_table
    }

    pub fn matchers(&self) -> &MatcherSet {
        &self.matchers
    }

    pub fn tokenizer(&self) -> &WordTokenizer {
        &self.tokenizer
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }
}
