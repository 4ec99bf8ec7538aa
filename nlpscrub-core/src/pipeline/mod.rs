//! Cleaning pipeline
//!
//! Runs [`Step::ORDER`] over the input, skipping every step whose option is
//! disabled. Report steps observe the text at their position in the order
//! and leave it unchanged.

pub mod options;
pub mod steps;

pub use options::{CleanOption, CleanOptions, OptionsPatch};
pub use steps::{Normalization, Step, StepAction};

use serde::{Deserialize, Serialize};

use crate::analysis::FrequencyTable;
use crate::matchers::{MatchKind, MatcherSet};

/// Cleaned text plus the outputs of enabled report steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanOutcome {
    pub text: String,
    /// Set when `count_emoji_frequency` ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_frequency: Option<FrequencyTable>,
    /// Set when `extract_emojis` ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<String>>,
}

/// Run the enabled steps over `text`
pub fn run(options: &CleanOptions, matchers: &MatcherSet, text: &str) -> CleanOutcome {
    let mut outcome = CleanOutcome {
        text: text.to_string(),
        ..Default::default()
    };

    for step in Step::ORDER {
        if !options.is_enabled(step.option()) {
            continue;
        }

        match step.action() {
            StepAction::Strip(kind) => {
                outcome.text = matchers.get(kind).strip(&outcome.text);
            }
            StepAction::Normalize(normalization) => {
                outcome.text = normalization.apply(&outcome.text);
            }
            StepAction::ReportEmojiFrequency => {
                let table: FrequencyTable = matchers
                    .get(MatchKind::Emoji)
                    .find_all(&outcome.text)
                    .into_iter()
                    .collect();
                tracing::info!(
                    distinct = table.len(),
                    total = table.total(),
                    "Emoji frequency: {:?}",
                    table.most_common(table.len())
                );
                outcome.emoji_frequency = Some(table);
            }
            StepAction::ReportEmojis => {
                let found: Vec<String> = matchers
                    .get(MatchKind::Emoji)
                    .find_all(&outcome.text)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                tracing::info!(count = found.len(), "Extracted emojis: {:?}", found);
                outcome.emojis = Some(found);
            }
        }

        tracing::debug!(step = step.name(), len = outcome.text.len(), "Step applied");
    }

    outcome
}
