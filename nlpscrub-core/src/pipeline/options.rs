//! Pipeline options
//!
//! One boolean per cleaning step, all enabled by default. Options change only
//! through a merge: a patch overlays the keys it sets and leaves the others
//! as they were.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProcessingError;

macro_rules! clean_options {
    ($( $(#[$doc:meta])* $field:ident => $variant:ident ),+ $(,)?) => {
        /// Enabled/disabled state of every pipeline step
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct CleanOptions {
            $( $(#[$doc])* pub $field: bool, )+
        }

        impl Default for CleanOptions {
            fn default() -> Self {
                Self { $( $field: true, )+ }
            }
        }

        impl CleanOptions {
            /// Every step disabled
            pub fn none() -> Self {
                Self { $( $field: false, )+ }
            }

            /// Whether the step behind `option` runs
            pub fn is_enabled(&self, option: CleanOption) -> bool {
                match option {
                    $( CleanOption::$variant => self.$field, )+
                }
            }

            /// Enable or disable one step
            pub fn set(&mut self, option: CleanOption, enabled: bool) {
                match option {
                    $( CleanOption::$variant => self.$field = enabled, )+
                }
            }

            /// Overlay the keys set in `patch`
            pub fn merge(&mut self, patch: &OptionsPatch) {
                $(
                    if let Some(enabled) = patch.$field {
                        self.$field = enabled;
                    }
                )+
            }
        }

        /// Partial update of [`CleanOptions`]; `None` keeps the current value
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct OptionsPatch {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<bool>,
            )+
        }

        impl OptionsPatch {
            /// Set one key
            pub fn with(mut self, option: CleanOption, enabled: bool) -> Self {
                match option {
                    $( CleanOption::$variant => self.$field = Some(enabled), )+
                }
                self
            }

            /// Overlay the keys set in `later`; keys it leaves unset keep their value
            pub fn overlay(&mut self, later: &OptionsPatch) {
                $(
                    if later.$field.is_some() {
                        self.$field = later.$field;
                    }
                )+
            }

            /// Whether no key is set
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }

        /// Name of one pipeline option
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CleanOption {
            $( $variant, )+
        }

        impl CleanOption {
            /// All options, in pipeline execution order
            pub const ALL: [CleanOption; 14] = [ $( CleanOption::$variant, )+ ];

            /// Configuration key of this option
            pub fn key(&self) -> &'static str {
                match self {
                    $( CleanOption::$variant => stringify!($field), )+
                }
            }
        }
    };
}

clean_options! {
    /// Strip `RT` / `FAV`
    clean_reserved_words => CleanReservedWords,
    /// Strip URLs
    clean_urls => CleanUrls,
    /// Strip hashtags
    clean_hashtags => CleanHashtags,
    /// Strip mentions
    clean_mentions => CleanMentions,
    /// Strip emojis before punctuation removal
    clean_emojis => CleanEmojis,
    /// Strip smileys
    clean_smileys => CleanSmileys,
    /// Delete everything that is neither a word character nor whitespace
    remove_punctuation => RemovePunctuation,
    /// Delete digit runs
    remove_numbers => RemoveNumbers,
    /// Delete everything except ASCII letters, digits and whitespace
    remove_special_characters => RemoveSpecialCharacters,
    /// Lowercase the text
    convert_to_lowercase => ConvertToLowercase,
    /// Collapse whitespace runs and trim
    remove_extra_whitespace => RemoveExtraWhitespace,
    /// Report an emoji frequency table over the cleaned text
    count_emoji_frequency => CountEmojiFrequency,
    /// Report the emojis left in the cleaned text
    extract_emojis => ExtractEmojis,
    /// Final emoji removal pass
    remove_emojis => RemoveEmojis,
}

impl fmt::Display for CleanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CleanOption {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CleanOption::ALL
            .into_iter()
            .find(|option| option.key() == s)
            .ok_or_else(|| ProcessingError::UnknownOption(s.to_string()))
    }
}

impl OptionsPatch {
    /// Build a patch from string keys, rejecting any key outside the fixed set
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, ProcessingError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        pairs
            .into_iter()
            .try_fold(Self::default(), |patch, (key, enabled)| {
                let option: CleanOption = key.as_ref().parse()?;
                Ok(patch.with(option, enabled))
            })
    }
}
