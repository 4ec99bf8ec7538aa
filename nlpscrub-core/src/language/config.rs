//! Configuration structures and validation
//!
//! This module defines the TOML schema for language resources.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ProcessingError, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: Metadata,
    pub stopwords: Stopwords,
    #[serde(default)]
    pub tokenizer: TokenizerRules,
    pub lemmatizer: LemmatizerRules,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Stopword list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stopwords {
    pub words: Vec<String>,
}

/// Tokenizer configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizerRules {
    /// Words whose trailing period never ends a sentence
    #[serde(default)]
    pub abbreviations: Vec<String>,
}

/// Noun lemmatizer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LemmatizerRules {
    /// Shorter tokens are returned unchanged
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Tokens with one of these endings are already base forms
    #[serde(default)]
    pub protected_endings: Vec<String>,
    pub rules: Vec<SuffixRule>,
    /// Irregular forms, checked before any rule
    #[serde(default)]
    pub exceptions: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixRule {
    pub suffix: String,
    pub replacement: String,
    /// Minimum number of chars left once the suffix is detached
    #[serde(default = "default_min_stem")]
    pub min_stem: usize,
}

fn default_min_length() -> usize {
    4
}

fn default_min_stem() -> usize {
    1
}

impl LanguageConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: LanguageConfig = toml::from_str(toml_str)
            .map_err(|e| ProcessingError::ResourceInit(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProcessingError::ResourceInit(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(ProcessingError::ResourceInit(
                "Language code must not be empty".to_string(),
            ));
        }

        if self.stopwords.words.iter().any(|w| w.trim().is_empty()) {
            return Err(ProcessingError::ResourceInit(
                "Stopword list contains an empty entry".to_string(),
            ));
        }

        if self.lemmatizer.rules.is_empty() {
            return Err(ProcessingError::ResourceInit(
                "No lemmatizer rules defined".to_string(),
            ));
        }

        if let Some(rule) = self.lemmatizer.rules.iter().find(|r| r.suffix.is_empty()) {
            return Err(ProcessingError::ResourceInit(format!(
                "Lemmatizer rule with replacement '{}' has an empty suffix",
                rule.replacement
            )));
        }

        Ok(())
    }
}
