//! Runtime tables for language resources
//!
//! Tables are built once from configuration and only read afterwards.

pub mod lemma;
pub mod stopwords;

pub use lemma::Lemmatizer;
pub use stopwords::StopwordSet;
