//! Language resources: stopwords, tokenizer abbreviations and lemma rules
//!
//! Resources are data-driven: each language is a TOML file embedded in the
//! binary, and external files with the same schema can be loaded at runtime.

pub mod config;
pub mod loader;
pub mod tables;

pub use config::LanguageConfig;
pub use loader::{get_language_config, list_available_languages};
pub use tables::{Lemmatizer, StopwordSet};
