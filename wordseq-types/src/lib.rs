//! Core types and errors for the wordseq sequence counter.
//!
//! This crate provides the types shared between the counting core and
//! its front ends. Keeping them separate ensures:
//!
//! - **Cross-crate compatibility**: Core and CLI share the same result and config types
//! - **Clean boundaries**: No circular dependencies between crates
//! - **Stable output contract**: Ranking rules live next to the result type

#![warn(missing_docs)]

use core::cmp::Ordering;
use core::fmt;

/// Occurrence count of a word sequence.
///
/// A 64-bit counter never overflows for any input a single pass can read.
pub type Count = u64;

/// A word sequence together with how often it occurred.
///
/// Results are ranked by count (descending), then by the word list
/// (ascending, element-wise). The ranking is a strict total order over
/// distinct word lists, so two passes over the same input always report
/// the same sequences in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedSequence {
    /// The normalized words, exactly `sequence_size` of them.
    pub words: Vec<String>,
    /// Number of times the sequence occurred in the input.
    pub count: Count,
}

impl RankedSequence {
    /// Creates a new ranked sequence.
    #[inline]
    pub fn new(words: Vec<String>, count: Count) -> Self {
        Self { words, count }
    }

    /// Compares two entries by rank.
    ///
    /// `Ordering::Less` means `self` ranks *before* `other`: it has the
    /// higher count, or the same count and the lexicographically smaller
    /// word list.
    #[inline]
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        rank_cmp(self.count, &self.words, other.count, &other.words)
    }
}

/// Ranks `(count, words)` pairs: higher count first, then ascending words.
///
/// Slices compare element-wise, and a shorter list ranks before a longer
/// one sharing its prefix.
#[inline]
pub fn rank_cmp(a_count: Count, a_words: &[String], b_count: Count, b_words: &[String]) -> Ordering {
    match b_count.cmp(&a_count) {
        Ordering::Equal => a_words.cmp(b_words),
        ord => ord,
    }
}

impl PartialOrd for RankedSequence {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedSequence {
    /// Sorting a `Vec<RankedSequence>` ascending yields rank order.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_cmp(other)
    }
}

impl fmt::Display for RankedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.count, self.words.join(" "))
    }
}

/// Errors that abort a counting pass.
#[derive(Debug, thiserror::Error)]
pub enum WordSeqError {
    /// A configuration value is outside its domain.
    ///
    /// Raised before any input is consumed.
    #[error("invalid configuration: {field} must be >= 1 (got {value})")]
    InvalidConfiguration {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// The code-point source failed for a reason other than end of input.
    #[error("failed to read input: {0}")]
    Input(#[from] std::io::Error),
}

impl WordSeqError {
    /// Returns `true` if this error came from the input source.
    #[inline]
    pub fn is_input_error(&self) -> bool {
        matches!(self, WordSeqError::Input(_))
    }
}

/// Result alias used throughout the workspace.
pub type Result<T, E = WordSeqError> = core::result::Result<T, E>;

/// Counting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of words per sequence (K). Must be at least 1.
    /// Default: 3
    pub sequence_size: usize,
    /// Maximum number of sequences to report. Must be at least 1.
    /// Default: 100
    pub top_n: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            sequence_size: 3,
            top_n: 100,
        }
    }
}

impl SequenceConfig {
    /// Creates a configuration without validating it.
    pub const fn new(sequence_size: usize, top_n: usize) -> Self {
        Self {
            sequence_size,
            top_n,
        }
    }

    /// Checks that both values are in their domain.
    ///
    /// # Errors
    /// Returns `WordSeqError::InvalidConfiguration` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        if self.sequence_size < 1 {
            return Err(WordSeqError::InvalidConfiguration {
                field: "sequence_size",
                value: self.sequence_size,
            });
        }
        if self.top_n < 1 {
            return Err(WordSeqError::InvalidConfiguration {
                field: "top_n",
                value: self.top_n,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(words: &[&str], count: Count) -> RankedSequence {
        RankedSequence::new(words.iter().map(|w| w.to_string()).collect(), count)
    }

    #[test]
    fn higher_count_ranks_first() {
        let a = seq(&["z", "z"], 5);
        let b = seq(&["a", "a"], 2);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert!(a < b);
    }

    #[test]
    fn equal_counts_break_ties_lexicographically() {
        let a = seq(&["b", "c", "a"], 1);
        let b = seq(&["c", "a", "b"], 1);
        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
    }

    #[test]
    fn comparison_is_element_wise() {
        let a = seq(&["a", "zz"], 1);
        let b = seq(&["ab", "a"], 1);
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_ranks_first() {
        let short = vec!["a".to_string()];
        let long = vec!["a".to_string(), "b".to_string()];
        assert_eq!(rank_cmp(1, &short, 1, &long), Ordering::Less);
    }

    #[test]
    fn identical_entries_are_equal() {
        let a = seq(&["x", "y"], 3);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn sort_yields_rank_order() {
        let mut v = vec![
            seq(&["c", "a", "b"], 1),
            seq(&["a", "b", "c"], 2),
            seq(&["b", "c", "a"], 1),
        ];
        v.sort();
        assert_eq!(v[0], seq(&["a", "b", "c"], 2));
        assert_eq!(v[1], seq(&["b", "c", "a"], 1));
        assert_eq!(v[2], seq(&["c", "a", "b"], 1));
    }

    #[test]
    fn display_format() {
        assert_eq!(seq(&["a", "b", "c"], 2).to_string(), "2 [a b c]");
    }

    #[test]
    fn default_config_is_valid() {
        let config = SequenceConfig::default();
        assert_eq!(config.sequence_size, 3);
        assert_eq!(config.top_n, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_sequence_size_rejected() {
        let err = SequenceConfig::new(0, 10).validate().unwrap_err();
        assert!(matches!(
            err,
            WordSeqError::InvalidConfiguration {
                field: "sequence_size",
                value: 0
            }
        ));
        assert!(!err.is_input_error());
    }

    #[test]
    fn zero_top_n_rejected() {
        let err = SequenceConfig::new(3, 0).validate().unwrap_err();
        assert!(matches!(
            err,
            WordSeqError::InvalidConfiguration { field: "top_n", .. }
        ));
        assert_eq!(
            err.to_string(),
            "invalid configuration: top_n must be >= 1 (got 0)"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: WordSeqError = io.into();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("gone"));
    }
}
