//! Property-based tests for the cleaning pipeline and emoji analyses

use nlpscrub_core::{CleanOptions, ProcessorConfig, TextProcessor};
use proptest::prelude::*;

fn processor() -> TextProcessor {
    TextProcessor::english().unwrap()
}

fn passthrough() -> TextProcessor {
    let config = ProcessorConfig::builder()
        .options(CleanOptions::none())
        .build()
        .unwrap();
    TextProcessor::with_config(config).unwrap()
}

/// Text built from words, whitespace, tweet elements and emoji sequences
fn tweet_like() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z]{1,8}",
        Just(" ".to_string()),
        Just("  \t".to_string()),
        Just("#tag".to_string()),
        Just("@someone".to_string()),
        Just("RT".to_string()),
        Just("https://t.co/x1".to_string()),
        Just(":-)".to_string()),
        Just("👍".to_string()),
        Just("🔥".to_string()),
        Just("❤️".to_string()),
        Just("👨‍👩‍👧".to_string()),
        Just("🇯🇵".to_string()),
        Just("👋🏽".to_string()),
        Just("42".to_string()),
        Just("!?".to_string()),
    ];
    prop::collection::vec(piece, 0..24).prop_map(|pieces| pieces.concat())
}

proptest! {
    #[test]
    fn prop_all_disabled_is_identity(text in "\\PC{0,80}") {
        prop_assert_eq!(passthrough().clean(&text).unwrap(), text);
    }

    #[test]
    fn prop_plain_text_cleaning_is_idempotent(text in "[a-zA-Z0-9 ,.!?\t\n]{0,80}") {
        let processor = processor();
        let once = processor.clean(&text).unwrap();
        // Lowercased output can spell out a URL prefix
        prop_assume!(!once.contains("http") && !once.contains("www"));

        prop_assert_eq!(processor.clean(&once).unwrap(), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
        prop_assert!(!once.contains("  "));
        prop_assert!(once.chars().all(|c| c == ' ' || c.is_ascii_lowercase()));
    }

    #[test]
    fn prop_parse_keeps_original_text(text in tweet_like()) {
        prop_assert_eq!(processor().parse(&text).unwrap().text, text);
    }

    #[test]
    fn prop_parse_emojis_match_extract(text in tweet_like()) {
        let processor = processor();
        let parsed = processor.parse(&text).unwrap();
        prop_assert_eq!(parsed.emojis, processor.extract_emojis(&text).unwrap());
    }

    #[test]
    fn prop_emoji_frequency_total_matches_extract(text in tweet_like()) {
        let processor = processor();
        let total = processor.count_emoji_frequency(&text).unwrap().total();
        prop_assert_eq!(total, processor.extract_emojis(&text).unwrap().len());
    }

    #[test]
    fn prop_embedded_text_contains_no_emojis(text in tweet_like()) {
        let processor = processor();
        let embedded = processor.embed_emojis(&text).unwrap();
        prop_assert!(processor.parse(&embedded).unwrap().emojis.is_empty());
    }

    #[test]
    fn prop_removed_emojis_leave_no_emojis(text in tweet_like()) {
        let processor = processor();
        let stripped = processor.remove_emojis(&text).unwrap();
        prop_assert!(processor.extract_emojis(&stripped).unwrap().is_empty());
    }
}
