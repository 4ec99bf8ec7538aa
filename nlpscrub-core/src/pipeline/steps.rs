//! Pipeline steps and the normalization transforms they run

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::options::CleanOption;
use crate::matchers::MatchKind;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));
static NUMBERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number pattern"));
static SPECIAL_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("valid special character pattern"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// What a step does to the text it receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// Remove every match of one matcher kind
    Strip(MatchKind),
    /// Apply a fixed normalization
    Normalize(Normalization),
    /// Record emoji frequencies; text passes through
    ReportEmojiFrequency,
    /// Record the emoji list; text passes through
    ReportEmojis,
}

/// Text-level transforms that need no matcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    Punctuation,
    Numbers,
    SpecialCharacters,
    Lowercase,
    Whitespace,
}

impl Normalization {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Normalization::Punctuation => remove_punctuation(text),
            Normalization::Numbers => remove_numbers(text),
            Normalization::SpecialCharacters => remove_special_characters(text),
            Normalization::Lowercase => to_lowercase(text),
            Normalization::Whitespace => collapse_whitespace(text),
        }
    }
}

/// One stage of the cleaning pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CleanReservedWords,
    CleanUrls,
    CleanHashtags,
    CleanMentions,
    CleanEmojis,
    CleanSmileys,
    RemovePunctuation,
    RemoveNumbers,
    RemoveSpecialCharacters,
    ConvertToLowercase,
    RemoveExtraWhitespace,
    CountEmojiFrequency,
    ExtractEmojis,
    RemoveEmojis,
}

impl Step {
    /// Execution order
    pub const ORDER: [Step; 14] = [
        Step::CleanReservedWords,
        Step::CleanUrls,
        Step::CleanHashtags,
        Step::CleanMentions,
        Step::CleanEmojis,
        Step::CleanSmileys,
        Step::RemovePunctuation,
        Step::RemoveNumbers,
        Step::RemoveSpecialCharacters,
        Step::ConvertToLowercase,
        Step::RemoveExtraWhitespace,
        Step::CountEmojiFrequency,
        Step::ExtractEmojis,
        Step::RemoveEmojis,
    ];

    /// The option that gates this step
    pub fn option(&self) -> CleanOption {
        match self {
            Step::CleanReservedWords => CleanOption::CleanReservedWords,
            Step::CleanUrls => CleanOption::CleanUrls,
            Step::CleanHashtags => CleanOption::CleanHashtags,
            Step::CleanMentions => CleanOption::CleanMentions,
            Step::CleanEmojis => CleanOption::CleanEmojis,
            Step::CleanSmileys => CleanOption::CleanSmileys,
            Step::RemovePunctuation => CleanOption::RemovePunctuation,
            Step::RemoveNumbers => CleanOption::RemoveNumbers,
            Step::RemoveSpecialCharacters => CleanOption::RemoveSpecialCharacters,
            Step::ConvertToLowercase => CleanOption::ConvertToLowercase,
            Step::RemoveExtraWhitespace => CleanOption::RemoveExtraWhitespace,
            Step::CountEmojiFrequency => CleanOption::CountEmojiFrequency,
            Step::ExtractEmojis => CleanOption::ExtractEmojis,
            Step::RemoveEmojis => CleanOption::RemoveEmojis,
        }
    }

    pub fn action(&self) -> StepAction {
        match self {
            Step::CleanReservedWords => StepAction::Strip(MatchKind::ReservedWord),
            Step::CleanUrls => StepAction::Strip(MatchKind::Url),
            Step::CleanHashtags => StepAction::Strip(MatchKind::Hashtag),
            Step::CleanMentions => StepAction::Strip(MatchKind::Mention),
            Step::CleanEmojis | Step::RemoveEmojis => StepAction::Strip(MatchKind::Emoji),
            Step::CleanSmileys => StepAction::Strip(MatchKind::Smiley),
            Step::RemovePunctuation => StepAction::Normalize(Normalization::Punctuation),
            Step::RemoveNumbers => StepAction::Normalize(Normalization::Numbers),
            Step::RemoveSpecialCharacters => {
                StepAction::Normalize(Normalization::SpecialCharacters)
            }
            Step::ConvertToLowercase => StepAction::Normalize(Normalization::Lowercase),
            Step::RemoveExtraWhitespace => StepAction::Normalize(Normalization::Whitespace),
            Step::CountEmojiFrequency => StepAction::ReportEmojiFrequency,
            Step::ExtractEmojis => StepAction::ReportEmojis,
        }
    }

    /// Whether the step only observes the text
    pub fn is_report(&self) -> bool {
        matches!(
            self.action(),
            StepAction::ReportEmojiFrequency | StepAction::ReportEmojis
        )
    }

    pub fn name(&self) -> &'static str {
        self.option().key()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Delete everything that is neither a word character nor whitespace
pub fn remove_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

/// Delete every run of decimal digits
pub fn remove_numbers(text: &str) -> String {
    NUMBERS.replace_all(text, "").into_owned()
}

/// Keep only ASCII letters, ASCII digits and whitespace
pub fn remove_special_characters(text: &str) -> String {
    SPECIAL_CHARACTERS.replace_all(text, "").into_owned()
}

pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Collapse whitespace runs to one space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}
