//! Text processor: configurable cleaning plus standalone analyses

use std::sync::Arc;

use crate::analysis::{FrequencyTable, ParseResult};
use crate::config::{defaults, ProcessorConfig};
use crate::error::{ProcessingError, Result};
use crate::language::get_language_config;
use crate::matchers::MatchKind;
use crate::pipeline::{self, CleanOptions, CleanOutcome, OptionsPatch};
use crate::resources::{Resources, DEFAULT_LANGUAGE};

/// Cleans and analyzes short social-media text
///
/// The processor holds shared, read-only [`Resources`] and its own
/// [`CleanOptions`]. Only [`configure`](Self::configure) and
/// [`configure_pairs`](Self::configure_pairs) change state; every other
/// operation is a pure function of its input and the current options.
///
/// # Examples
///
/// ```
/// use nlpscrub_core::TextProcessor;
///
/// let processor = TextProcessor::english().unwrap();
/// let cleaned = processor.clean("RT @user: Hello #NLP World!").unwrap();
/// assert_eq!(cleaned, "hello world");
/// ```
#[derive(Debug, Clone)]
pub struct TextProcessor {
    resources: Arc<Resources>,
    options: CleanOptions,
    max_text_size: usize,
}

impl TextProcessor {
    /// Processor over the given resources with every step enabled
    pub fn new(resources: Arc<Resources>) -> Self {
        Self {
            resources,
            options: CleanOptions::default(),
            max_text_size: defaults::MAX_TEXT_SIZE,
        }
    }

    /// Processor over the process-wide English resources
    pub fn english() -> Result<Self> {
        Ok(Self::new(Resources::shared()?))
    }

    /// Processor for a validated configuration
    pub fn with_config(config: ProcessorConfig) -> Result<Self> {
        config.validate()?;

        let code = &get_language_config(&config.language)?.metadata.code;
        let resources = if code == DEFAULT_LANGUAGE {
            Resources::shared()?
        } else {
            Arc::new(Resources::load(code)?)
        };

        Ok(Self::with_resources(resources, config))
    }

    /// Processor over explicit resources, taking options and limits from `config`
    ///
    /// The language of `config` is ignored; the resources decide it.
    pub fn with_resources(resources: Arc<Resources>, config: ProcessorConfig) -> Self {
        Self {
            resources,
            options: config.options,
            max_text_size: config.max_text_size,
        }
    }

    /// Merge `patch` into the current options
    pub fn configure(&mut self, patch: OptionsPatch) {
        self.options.merge(&patch);
        tracing::debug!(options = ?self.options, "Options updated");
    }

    /// Merge string-keyed options
    ///
    /// Every key is checked before anything is applied, so an unknown key
    /// leaves the options untouched.
    pub fn configure_pairs<I, K>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let patch = OptionsPatch::from_pairs(pairs)?;
        self.configure(patch);
        Ok(())
    }

    pub fn options(&self) -> &CleanOptions {
        &self.options
    }

    pub fn resources(&self) -> &Arc<Resources> {
        &self.resources
    }

    pub fn max_text_size(&self) -> usize {
        self.max_text_size
    }

    /// Run the enabled pipeline steps over `text`
    pub fn clean(&self, text: &str) -> Result<String> {
        Ok(self.clean_with_report(text)?.text)
    }

    /// Run the pipeline and keep the emoji reports of enabled report steps
    pub fn clean_with_report(&self, text: &str) -> Result<CleanOutcome> {
        self.check_size(text)?;
        Ok(pipeline::run(&self.options, self.resources.matchers(), text))
    }

    /// Split `text` into word and punctuation tokens
    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.check_size(text)?;
        Ok(self.resources.tokenizer().tokenize(text))
    }

    /// Count every token of `text` (case-sensitive)
    pub fn count_word_frequency(&self, text: &str) -> Result<FrequencyTable> {
        Ok(self.tokenize(text)?.into_iter().collect())
    }

    /// Tokens of `text` that are not stopwords, joined with single spaces
    pub fn remove_stopwords(&self, text: &str) -> Result<String> {
        let stopwords = self.resources.stopwords();
        let kept: Vec<String> = self
            .tokenize(text)?
            .into_iter()
            .filter(|token| !stopwords.contains(token))
            .collect();
        Ok(kept.join(" "))
    }

    /// Noun lemma of every token, joined with single spaces
    pub fn lemmatize(&self, text: &str) -> Result<String> {
        let lemmatizer = self.resources.lemmatizer();
        let lemmas: Vec<String> = self
            .tokenize(text)?
            .iter()
            .map(|token| lemmatizer.lemma(token))
            .collect();
        Ok(lemmas.join(" "))
    }

    /// Replace every emoji with its `:name:` tag
    pub fn embed_emojis(&self, text: &str) -> Result<String> {
        self.check_size(text)?;
        Ok(self.resources.matchers().emojis().embed(text))
    }

    /// Every emoji in `text`, in order, duplicates included
    pub fn extract_emojis(&self, text: &str) -> Result<Vec<String>> {
        self.check_size(text)?;
        Ok(self
            .resources
            .matchers()
            .get(MatchKind::Emoji)
            .find_all(text)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Occurrences of each distinct emoji in `text`
    pub fn count_emoji_frequency(&self, text: &str) -> Result<FrequencyTable> {
        Ok(self.extract_emojis(text)?.into_iter().collect())
    }

    /// `text` with every emoji removed
    pub fn remove_emojis(&self, text: &str) -> Result<String> {
        self.check_size(text)?;
        Ok(self.resources.matchers().get(MatchKind::Emoji).strip(text))
    }

    /// Every tweet element in the unmodified `text`
    pub fn parse(&self, text: &str) -> Result<ParseResult> {
        self.check_size(text)?;
        Ok(ParseResult::extract(text, self.resources.matchers()))
    }

    fn check_size(&self, text: &str) -> Result<()> {
        if text.len() > self.max_text_size {
            return Err(ProcessingError::InputTooLarge {
                size: text.len(),
                limit: self.max_text_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::CleanOption;

    fn processor() -> TextProcessor {
        TextProcessor::english().unwrap()
    }

    #[test]
    fn test_configure_toggles_named_steps_only() {
        let mut processor = processor();
        processor.configure(OptionsPatch::default().with(CleanOption::ConvertToLowercase, false));
        assert!(!processor.options().convert_to_lowercase);
        assert!(processor.options().remove_extra_whitespace);
        assert_eq!(processor.clean("Hello   World").unwrap(), "Hello World");
    }

    #[test]
    fn test_configure_pairs_unknown_key_applies_nothing() {
        let mut processor = processor();
        let err = processor
            .configure_pairs([("clean_urls", false), ("bogus", false)])
            .unwrap_err();
        assert!(matches!(err, ProcessingError::UnknownOption(ref k) if k == "bogus"));
        assert!(processor.options().clean_urls);
    }

    #[test]
    fn test_input_too_large() {
        let config = ProcessorConfig::builder().max_text_size(8).build().unwrap();
        let processor = TextProcessor::with_config(config).unwrap();

        assert_eq!(processor.clean("short").unwrap(), "short");
        let err = processor.clean("far too long").unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::InputTooLarge { size: 12, limit: 8 }
        ));
        assert!(processor.parse("far too long").is_err());
        assert!(processor.tokenize("far too long").is_err());
    }

    #[test]
    fn test_remove_stopwords() {
        let processor = processor();
        assert_eq!(
            processor.remove_stopwords("This is a simple sentence").unwrap(),
            "simple sentence"
        );
    }

    #[test]
    fn test_lemmatize() {
        let processor = processor();
        assert_eq!(
            processor.lemmatize("the cats chased mice").unwrap(),
            "the cat chased mouse"
        );
    }

    #[test]
    fn test_word_frequency() {
        let table = processor().count_word_frequency("the cat and the hat").unwrap();
        assert_eq!(table.get("the"), 2);
        assert_eq!(table.get("cat"), 1);
        assert_eq!(table.total(), 5);
    }

    #[test]
    fn test_emoji_operations() {
        let processor = processor();
        let text = "Great job 👍👍 🔥";
        assert_eq!(processor.extract_emojis(text).unwrap(), vec!["👍", "👍", "🔥"]);
        assert_eq!(processor.count_emoji_frequency(text).unwrap().get("👍"), 2);
        assert_eq!(processor.remove_emojis(text).unwrap(), "Great job  ");
        assert_eq!(
            processor.embed_emojis("Nice 👍").unwrap(),
            "Nice :thumbs_up:"
        );
    }

    #[test]
    fn test_empty_input() {
        let processor = processor();
        assert_eq!(processor.clean("").unwrap(), "");
        assert!(processor.tokenize("").unwrap().is_empty());
        assert!(processor.count_word_frequency("").unwrap().is_empty());
        assert_eq!(processor.parse("").unwrap().total_matches(), 0);
    }
}
