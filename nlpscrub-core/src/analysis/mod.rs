//! Stateless analysis operations
//!
//! - **Tokenizer**: Treebank-style word splitting
//! - **Frequency**: per-token occurrence counts
//! - **Parse**: structured extraction of every tweet element

pub mod frequency;
pub mod parse;
pub mod tokenizer;

pub use frequency::FrequencyTable;
pub use parse::ParseResult;
pub use tokenizer::WordTokenizer;
