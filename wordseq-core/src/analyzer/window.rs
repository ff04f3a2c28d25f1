//! Sliding window over normalized words.
//!
//! Every run of `size` consecutive words is one sequence. For `size = 3`,
//! the words `a b c d` produce `[a b c]` then `[b c d]`. A stream of `V`
//! words yields `max(V - size + 1, 0)` sequences.

use smallvec::SmallVec;
use wordseq_types::{Result, SequenceConfig, WordSeqError};

/// Inline capacity before the window spills to the heap.
const INLINE_WORDS: usize = 8;

/// Fixed-size window of the most recent words.
///
/// # Example
///
/// ```
/// use wordseq_core::analyzer::SequenceWindow;
///
/// let mut window = SequenceWindow::new(2).unwrap();
/// assert!(window.push("a".into()).is_none());
/// assert_eq!(window.push("b".into()).unwrap(), ["a", "b"]);
/// assert_eq!(window.push("c".into()).unwrap(), ["b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceWindow {
    size: usize,
    words: SmallVec<[String; INLINE_WORDS]>,
}

impl SequenceWindow {
    /// Creates an empty window holding `size` words.
    ///
    /// # Errors
    /// Returns `WordSeqError::InvalidConfiguration` if `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(WordSeqError::InvalidConfiguration {
                field: "sequence_size",
                value: size,
            });
        }
        Ok(Self {
            size,
            words: SmallVec::with_capacity(size),
        })
    }

    pub fn from_config(config: &SequenceConfig) -> Result<Self> {
        Self::new(config.sequence_size)
    }

    /// Appends `word`, returning the completed sequence once the window is full.
    ///
    /// The oldest word is evicted on the following push, so the returned
    /// slice always holds the `size` most recent words in input order.
    #[inline]
    pub fn push(&mut self, word: String) -> Option<&[String]> {
        if self.words.len() == self.size {
            self.words.remove(0);
        }
        self.words.push(word);
        (self.words.len() == self.size).then_some(self.words.as_slice())
    }

    /// Words currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Configured sequence length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Drops any buffered words.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

/// Number of sequences a stream of `words` words yields.
#[inline(always)]
pub fn count_sequences(words: usize, size: usize) -> usize {
    if size == 0 || words < size {
        0
    } else {
        words - size + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitted(words: &[&str], size: usize) -> Vec<Vec<String>> {
        let mut window = SequenceWindow::new(size).unwrap();
        let mut out = Vec::new();
        for w in words {
            if let Some(seq) = window.push(w.to_string()) {
                out.push(seq.to_vec());
            }
        }
        out
    }

    #[test]
    fn zero_size_rejected() {
        let err = SequenceWindow::new(0).unwrap_err();
        assert!(matches!(
            err,
            WordSeqError::InvalidConfiguration {
                field: "sequence_size",
                value: 0
            }
        ));
    }

    #[test]
    fn slides_by_one() {
        let seqs = emitted(&["a", "b", "c", "d"], 3);
        assert_eq!(seqs, vec![vec!["a", "b", "c"], vec!["b", "c", "d"]]);
    }

    #[test]
    fn short_input_emits_nothing() {
        assert!(emitted(&["a", "b"], 3).is_empty());
        assert!(emitted(&[], 1).is_empty());
    }

    #[test]
    fn size_one_emits_every_word() {
        let seqs = emitted(&["x", "y", "x"], 1);
        assert_eq!(seqs, vec![vec!["x"], vec!["y"], vec!["x"]]);
    }

    #[test]
    fn spills_past_inline_capacity() {
        let words: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let seqs = emitted(&refs, 12);
        assert_eq!(seqs.len(), 9);
        assert_eq!(seqs[8].first().map(String::as_str), Some("8"));
        assert_eq!(seqs[8].last().map(String::as_str), Some("19"));
    }

    #[test]
    fn len_tracks_fill() {
        let mut window = SequenceWindow::new(2).unwrap();
        assert!(window.is_empty());
        window.push("a".into());
        assert_eq!(window.len(), 1);
        window.push("b".into());
        window.push("c".into());
        assert_eq!(window.len(), 2);
        assert_eq!(window.size(), 2);
        window.clear();
        assert!(window.is_empty());
    }

    #[test]
    fn count_matches_emitted() {
        for size in 1..5 {
            for n in 0..10 {
                let words = vec!["w"; n];
                assert_eq!(emitted(&words, size).len(), count_sequences(n, size));
            }
        }
        assert_eq!(count_sequences(5, 0), 0);
    }
}
