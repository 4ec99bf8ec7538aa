//! Analyze command implementation

use std::io;

use anyhow::Result;
use clap::{Args, ValueEnum};
use nlpscrub_core::TextProcessor;

use super::{ResourceArgs, TextSource};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Analysis to run
    #[arg(value_enum)]
    pub kind: AnalysisKind,

    #[command(flatten)]
    pub source: TextSource,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub resources: ResourceArgs,
}

/// Standalone analyses
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnalysisKind {
    /// Word and punctuation tokens
    Tokens,
    /// Token frequency table
    Words,
    /// Text without stopwords
    Stopwords,
    /// Tokens reduced to their noun lemma
    Lemmatize,
    /// Emojis replaced by `:name:` tags
    Embed,
    /// Every emoji, in order
    Emojis,
    /// Emoji frequency table
    EmojiFrequency,
    /// Text without emojis
    RemoveEmojis,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        let config = self.resources.load_config()?;
        let processor = self.resources.processor(&config)?;
        let text = self.source.read()?;

        let format = self.format.unwrap_or(config.output.default_format);
        let mut formatter = create_formatter(format, config.output.pretty_json, io::stdout());
        run_analysis(self.kind, &processor, &text, formatter.as_mut())?;
        formatter.finish()
    }
}

/// Run `kind` over `text` and hand the result to `formatter`
pub fn run_analysis(
    kind: AnalysisKind,
    processor: &TextProcessor,
    text: &str,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    log::debug!("Running {:?} over {} bytes", kind, text.len());

    match kind {
        AnalysisKind::Tokens => formatter.list(&processor.tokenize(text)?),
        AnalysisKind::Words => formatter.frequency(&processor.count_word_frequency(text)?),
        AnalysisKind::Stopwords => formatter.text(&processor.remove_stopwords(text)?),
        AnalysisKind::Lemmatize => formatter.text(&processor.lemmatize(text)?),
        AnalysisKind::Embed => formatter.text(&processor.embed_emojis(text)?),
        AnalysisKind::Emojis => formatter.list(&processor.extract_emojis(text)?),
        AnalysisKind::EmojiFrequency => {
            formatter.frequency(&processor.count_emoji_frequency(text)?)
        }
        AnalysisKind::RemoveEmojis => formatter.text(&processor.remove_emojis(text)?),
    }
}
