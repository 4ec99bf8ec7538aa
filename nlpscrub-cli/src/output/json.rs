//! JSON output formatter

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use nlpscrub_core::{CleanOutcome, FrequencyTable, ParseResult};
use serde::Serialize;
use serde_json::{json, Value};

use super::OutputFormatter;

/// JSON formatter - collects records and writes them on `finish`
///
/// A single record is written as-is; several are wrapped in an array.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<Value>,
}

/// Token with its count, for ordered frequency output
#[derive(Debug, Serialize)]
pub struct FrequencyEntry<'a> {
    pub token: &'a str,
    pub count: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }

    /// Consume the formatter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn push<T: Serialize>(&mut self, record: &T) -> Result<()> {
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }
}

fn frequency_entries(table: &FrequencyTable) -> Vec<FrequencyEntry<'_>> {
    table
        .most_common(table.len())
        .into_iter()
        .map(|(token, count)| FrequencyEntry { token, count })
        .collect()
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn text(&mut self, text: &str) -> Result<()> {
        self.push(&json!({ "text": text }))
    }

    fn list(&mut self, items: &[String]) -> Result<()> {
        self.push(&items)
    }

    fn frequency(&mut self, table: &FrequencyTable) -> Result<()> {
        self.push(&frequency_entries(table))
    }

    fn parse_result(&mut self, result: &ParseResult) -> Result<()> {
        self.push(result)
    }

    fn cleaned(&mut self, outcome: &CleanOutcome, written_to: Option<&Path>) -> Result<()> {
        let mut record = json!({ "text": outcome.text });
        if let Some(path) = written_to {
            record["output"] = json!(path.display().to_string());
        }
        if let Some(emojis) = &outcome.emojis {
            record["emojis"] = json!(emojis);
        }
        if let Some(table) = &outcome.emoji_frequency {
            record["emoji_frequency"] = serde_json::to_value(frequency_entries(table))?;
        }
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let records = std::mem::take(&mut self.records);
        let document = match records.len() {
            1 => records.into_iter().next().unwrap_or(Value::Null),
            _ => Value::Array(records),
        };

        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
