//! Configurable normalization pipeline for tweets and other short social text
//!
//! The crate strips or extracts the structured parts of a tweet (URLs,
//! hashtags, mentions, the reserved words `RT`/`FAV`, emojis and smileys),
//! normalizes what is left (punctuation, numbers, special characters, case,
//! whitespace), and offers auxiliary analyses: tokenization, stopword
//! removal, lemmatization, word and emoji frequencies, and emoji embedding.
//!
//! # Architecture
//!
//! - **Matchers**: one recognizer per tweet element, behind the [`Matcher`] trait
//! - **Pipeline**: fourteen fixed-order steps, each gated by a [`CleanOptions`] flag
//! - **Analysis**: tokenizer, frequency tables and the structured [`ParseResult`]
//! - **Resources**: immutable emoji table and language data shared via `Arc`
//!
//! # Example
//!
//! ```rust
//! use nlpscrub_core::{CleanOption, OptionsPatch, TextProcessor};
//!
//! let mut processor = TextProcessor::english().unwrap();
//! let tweet = "RT @user: Preprocessor is #awesome 👍 https://github.com/s/preprocessor #NLP 123 !@#$";
//!
//! assert_eq!(processor.clean(tweet).unwrap(), "preprocessor is");
//!
//! processor.configure(
//!     OptionsPatch::default()
//!         .with(CleanOption::RemovePunctuation, false)
//!         .with(CleanOption::RemoveNumbers, false),
//! );
//! assert_eq!(processor.clean(tweet).unwrap(), "preprocessor is 123");
//!
//! let parsed = processor.parse(tweet).unwrap();
//! assert_eq!(parsed.hashtags, vec!["#awesome", "#NLP"]);
//! ```

pub mod analysis;
pub mod config;
pub mod emoji;
pub mod error;
pub mod language;
pub mod matchers;
pub mod pipeline;
pub mod processor;
pub mod resources;

pub use analysis::{FrequencyTable, ParseResult, WordTokenizer};
pub use config::{ProcessorConfig, ProcessorConfigBuilder};
pub use emoji::EmojiTable;
pub use error::{ProcessingError, Result};
pub use language::{list_available_languages, LanguageConfig};
pub use matchers::{MatchKind, Matcher, MatcherSet};
pub use pipeline::{CleanOption, CleanOptions, CleanOutcome, OptionsPatch, Step};
pub use processor::TextProcessor;
pub use resources::Resources;
