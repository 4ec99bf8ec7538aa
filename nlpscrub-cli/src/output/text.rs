//! Plain text output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use nlpscrub_core::{CleanOutcome, FrequencyTable, MatchKind, ParseResult};

use super::OutputFormatter;

/// Plain text formatter - one item per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frequency(&mut self, table: &FrequencyTable) -> Result<()> {
        for (token, count) in table.most_common(table.len()) {
            writeln!(self.writer, "{token}\t{count}")?;
        }
        Ok(())
    }
}


impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn text(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    fn list(&mut self, items: &[String]) -> Result<()> {
        for item in items {
            writeln!(self.writer, "{item}")?;
        }
        Ok(())
    }

    fn frequency(&mut self, table: &FrequencyTable) -> Result<()> {
        self.write_frequency(table)
    }

    fn parse_result(&mut self, result: &ParseResult) -> Result<()> {
        for kind in MatchKind::ALL {
            writeln!(self.writer, "{kind}: {}", result.get(kind).join(" "))?;
        }
        Ok(())
    }

    fn cleaned(&mut self, outcome: &CleanOutcome, written_to: Option<&Path>) -> Result<()> {
        match written_to {
            Some(path) => writeln!(self.writer, "{}", path.display())?,
            None => writeln!(self.writer, "{}", outcome.text)?,
        }

        if let Some(emojis) = &outcome.emojis {
            writeln!(self.writer, "emojis: {}", emojis.join(" "))?;
        }
        if let Some(table) = &outcome.emoji_frequency {
            writeln!(self.writer, "emoji frequency:")?;
            self.write_frequency(table)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
