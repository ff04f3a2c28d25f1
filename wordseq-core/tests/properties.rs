//! Property-based tests for the counting pipeline.
//!
//! Properties covered:
//! 1. Segmentation loses nothing: tokens concatenate back to the input
//! 2. Push and pull segmentation agree
//! 3. Lossy UTF-8 decoding matches the standard library
//! 4. Sequence counts sum to the number of windows
//! 5. Results are in strict rank order and bounded by top N
//! 6. Normalization is idempotent
//! 7. Regional indicators pair up left to right

use proptest::prelude::*;
use std::io::Cursor;

use wordseq_core::analyzer::{segment, Segmenter, WordNormalizer};
use wordseq_core::pipeline::process_str;
use wordseq_core::source::{CharSource, CodepointSource, Utf8Source};
use wordseq_types::SequenceConfig;

/// Text mixing scripts, digits, punctuation, line breaks, joiners and flags.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-zA-Z]{1,6}",
            "[0-9]{1,3}",
            Just(" ".to_string()),
            Just("\r\n".to_string()),
            Just("\n".to_string()),
            "[.,:;'\"!?()\\-_]",
            "[א-ת]{1,3}",
            "[ア-ン]{1,3}",
            "[ก-ฮ]{1,2}",
            Just("\u{301}".to_string()),
            Just("\u{ad}".to_string()),
            Just("\u{200d}".to_string()),
            Just("👍🏽".to_string()),
            Just("\u{1F1FA}".to_string()),
            Just("\u{202f}".to_string()),
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

/// Words separated so that every word is its own token.
fn separated_words() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec(
        (
            "[a-z0-9]{1,4}",
            prop_oneof![
                Just(" "),
                Just(", "),
                Just(". "),
                Just("\n"),
                Just(" ("),
                Just(") "),
                Just(" - "),
            ],
        ),
        0..30,
    )
    .prop_map(|pairs| {
        let words: Vec<String> = pairs.iter().map(|(w, _)| w.clone()).collect();
        let text: String = pairs.iter().map(|(w, sep)| format!("{w}{sep}")).collect();
        (words, text)
    })
}

fn pull_tokens(text: &str) -> Vec<String> {
    Segmenter::new(CharSource::new(text.chars()))
        .collect::<Result<_, _>>()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tokens_reconstruct_input(text in mixed_text()) {
        let tokens: Vec<String> = segment(&text).collect();
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
        prop_assert_eq!(tokens.concat(), text);
    }

    #[test]
    fn prop_arbitrary_text_reconstructs(text in "\\PC{0,64}") {
        prop_assert_eq!(segment(&text).collect::<String>(), text);
    }

    #[test]
    fn prop_push_and_pull_agree(text in mixed_text()) {
        let pushed: Vec<String> = segment(&text).collect();
        prop_assert_eq!(pull_tokens(&text), pushed);
    }

    #[test]
    fn prop_utf8_source_matches_std(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut source = Utf8Source::new(Cursor::new(bytes.clone()));
        let mut decoded = String::new();
        while let Some(c) = source.read().unwrap() {
            decoded.push(c);
        }
        prop_assert_eq!(decoded, String::from_utf8_lossy(&bytes));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_counts_sum_to_windows((words, text) in separated_words(), k in 1usize..5) {
        let result = process_str(&text, &SequenceConfig::new(k, usize::MAX)).unwrap();
        let total: u64 = result.iter().map(|r| r.count).sum();
        let expected = (words.len() + 1).saturating_sub(k) as u64;
        prop_assert_eq!(total, expected);
        prop_assert!(result.iter().all(|r| r.words.len() == k));
    }

    #[test]
    fn prop_results_in_strict_rank_order(text in mixed_text(), k in 1usize..4, n in 1usize..20) {
        let result = process_str(&text, &SequenceConfig::new(k, n)).unwrap();
        prop_assert!(result.len() <= n);
        for pair in result.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.count > b.count || (a.count == b.count && a.words < b.words),
                "{} before {}", a, b
            );
        }
    }

    #[test]
    fn prop_processing_is_deterministic(text in mixed_text()) {
        let config = SequenceConfig::new(2, 10);
        prop_assert_eq!(process_str(&text, &config).unwrap(), process_str(&text, &config).unwrap());
    }

    #[test]
    fn prop_normalization_idempotent(text in mixed_text()) {
        let normalizer = WordNormalizer::default();
        for token in segment(&text) {
            if let Some(word) = normalizer.normalize(&token) {
                prop_assert_eq!(normalizer.normalize(&word), Some(word.clone()));
            }
        }
    }

    #[test]
    fn prop_regional_indicators_pair(
        flags in prop::collection::vec(0x1F1E6u32..=0x1F1FF, 0..9),
        lead in "[a-z]{0,2}",
    ) {
        let ri: String = flags.iter().filter_map(|&cp| char::from_u32(cp)).collect();
        let text = format!("{lead}{ri} ");
        let sizes: Vec<usize> = segment(&text)
            .filter(|t| t.chars().all(|c| ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)))
            .map(|t| t.chars().count())
            .collect();

        let mut expected = vec![2; flags.len() / 2];
        if flags.len() % 2 == 1 {
            expected.push(1);
        }
        prop_assert_eq!(sizes, expected);
    }
}
