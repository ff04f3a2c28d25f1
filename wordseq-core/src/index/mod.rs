//! Frequency index for word sequences.
//!
//! Deduplicates sequences by content and keeps them ranked while counting, so
//! extracting the top N at the end costs O(N log n).
//!
//! Memory Layout:
//! - Sequences live in one slab (`Vec<Sequence>`) owned by the index
//! - A fingerprint map resolves a word list to its slab slot
//! - A max-heap of slab slots orders sequences by (count desc, words asc)
//! - Each sequence stores its own heap slot, so an increment is re-ranked
//!   without searching the heap
//!
//! Threading:
//! - [`FrequencyIndex`] is single-threaded and needs no locking. A pass owns
//!   its index exclusively.

mod api;
mod heap;
mod stats;
mod types;

pub use stats::IndexStats;
pub use types::{Fingerprint, FrequencyIndex};

#[cfg(test)]
mod tests {
    use super::*;
    use wordseq_types::RankedSequence;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    fn ranked(s: &str, count: u64) -> RankedSequence {
        RankedSequence::new(words(s), count)
    }

    #[test]
    fn register_and_count() {
        let mut index = FrequencyIndex::new();
        assert!(index.is_empty());

        index.register(&words("a b c"));
        index.register(&words("b c a"));
        index.register(&words("a b c"));

        assert_eq!(index.len(), 2);
        assert_eq!(index.count(&words("a b c")), Some(2));
        assert_eq!(index.count(&words("b c a")), Some(1));
        assert_eq!(index.count(&words("c a b")), None);
        index.heap.assert_consistent(&index.sequences);
    }

    #[test]
    fn extract_in_rank_order() {
        let mut index = FrequencyIndex::new();
        for s in ["c a b", "a b c", "b c a", "a b c"] {
            index.register(&words(s));
        }
        assert_eq!(
            index.extract_top(10),
            vec![ranked("a b c", 2), ranked("b c a", 1), ranked("c a b", 1)]
        );
    }

    #[test]
    fn extract_truncates() {
        let mut index = FrequencyIndex::new();
        for s in ["x", "y", "y", "z", "z", "z"] {
            index.register(&words(s));
        }
        assert_eq!(
            index.extract_top(2),
            vec![ranked("z", 3), ranked("y", 2)]
        );
    }

    #[test]
    fn extract_from_empty() {
        assert!(FrequencyIndex::new().extract_top(5).is_empty());
    }

    #[test]
    fn increments_reorder_heap() {
        let mut index = FrequencyIndex::new();
        for s in ["a", "b", "c", "d", "e"] {
            index.register(&words(s));
        }
        for _ in 0..3 {
            index.register(&words("e"));
            index.heap.assert_consistent(&index.sequences);
        }
        index.register(&words("c"));
        index.heap.assert_consistent(&index.sequences);

        assert_eq!(
            index.extract_top(3),
            vec![ranked("e", 4), ranked("c", 2), ranked("a", 1)]
        );
    }

    #[test]
    fn separator_keeps_lists_apart() {
        let mut index = FrequencyIndex::new();
        index.register(&words("ab c"));
        index.register(&words("a bc"));
        assert_eq!(index.len(), 2);
        assert_ne!(
            Fingerprint::of(&words("ab c")),
            Fingerprint::of(&words("a bc"))
        );
        assert_ne!(
            Fingerprint::of(&["ab".to_string()]),
            Fingerprint::of(&words("a b"))
        );
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let a = Fingerprint::of(&words("the quick fox"));
        let b = Fingerprint::of(&words("the quick fox"));
        assert_eq!(a, b);
        assert_eq!(a.as_bytes().len(), 32);
        assert!(format!("{a:?}").starts_with("Fingerprint("));
    }

    #[test]
    fn stats_track_registrations() {
        let mut index = FrequencyIndex::new();
        assert_eq!(index.stats(), IndexStats::default());

        index.register(&words("a b"));
        index.register(&words("b c"));
        index.register(&words("a b"));

        let stats = index.stats();
        assert_eq!(stats.distinct_sequences, 2);
        assert_eq!(stats.total_registrations, 3);
        assert_eq!(stats.max_count, 2);
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.word_bytes, 4);
        assert!(stats.memory_usage_bytes() > stats.word_bytes);
        assert!((stats.repeat_ratio() - 1.0 / 3.0).abs() < 1e-9);

        let shown = stats.to_string();
        assert!(shown.starts_with("2 distinct sequences, 3 registrations, max count 2"));
    }

    #[test]
    fn clear_resets() {
        let mut index = FrequencyIndex::new();
        index.register(&words("a b"));
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.count(&words("a b")), None);
        assert_eq!(index.stats().total_registrations, 0);
    }

    #[test]
    fn large_scale() {
        let mut index = FrequencyIndex::new();
        for i in 0..2000u32 {
            index.register(&[format!("w{}", i % 97), format!("w{}", i % 13)]);
        }
        index.heap.assert_consistent(&index.sequences);
        let top = index.extract_top(50);
        assert_eq!(top.len(), 50);
        assert!(top.windows(2).all(|w| w[0] < w[1]));
    }
}
