//! Word-sequence frequency counting.
//!
//! Reads Unicode text, splits it at word boundaries, normalizes the words
//! and counts every run of K consecutive words. The result is the top N
//! sequences, ranked by count and then by the words themselves.
//!
//! ```
//! use wordseq_core::pipeline::process_str;
//! use wordseq_types::SequenceConfig;
//!
//! let top = process_str("a b c a b c", &SequenceConfig::new(3, 100)).unwrap();
//! let lines: Vec<String> = top.iter().map(ToString::to_string).collect();
//! assert_eq!(lines, ["2 [a b c]", "1 [b c a]", "1 [c a b]"]);
//! ```

pub mod analyzer;
pub mod index;
pub mod pipeline;
pub mod source;

pub use index::{FrequencyIndex, IndexStats};
pub use pipeline::{process, process_reader, process_str, PassMetrics, SequenceCounter};
pub use wordseq_types::{Count, RankedSequence, Result, SequenceConfig, WordSeqError};
