//! Statistics and IndexStats.

use core::fmt;
use core::mem::size_of;

use wordseq_types::Count;

use crate::index::types::{Fingerprint, FrequencyIndex, SeqId, Sequence};

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of distinct sequences.
    pub distinct_sequences: usize,
    /// Number of `register` calls, repeats included.
    pub total_registrations: u64,
    /// Highest count of any sequence, 0 when empty.
    pub max_count: Count,
    /// Bytes of word text held by the index.
    pub word_bytes: usize,
    /// Words held across all sequences.
    pub word_count: usize,
}

impl FrequencyIndex {
    /// Returns index statistics.
    ///
    /// Walks every sequence to total the word text.
    pub fn stats(&self) -> IndexStats {
        let (word_count, word_bytes) = self
            .sequences
            .iter()
            .flat_map(|s| s.words.iter())
            .fold((0, 0), |(n, bytes), w| (n + 1, bytes + w.len()));

        IndexStats {
            distinct_sequences: self.sequences.len(),
            total_registrations: self.registrations,
            max_count: self
                .heap
                .peek()
                .map_or(0, |id| self.sequences[id].count),
            word_bytes,
            word_count,
        }
    }
}

impl IndexStats {
    /// Returns approximate memory usage in bytes.
    ///
    /// Counts the slab, the lookup map entries, the heap slots and the word
    /// strings. Allocator slack and hash-table load factor are ignored.
    pub fn memory_usage_bytes(&self) -> usize {
        let per_sequence =
            size_of::<Sequence>() + size_of::<(Fingerprint, SeqId)>() + size_of::<SeqId>();
        self.distinct_sequences * per_sequence
            + self.word_count * size_of::<String>()
            + self.word_bytes
    }

    /// Fraction of registrations that hit an existing sequence.
    pub fn repeat_ratio(&self) -> f64 {
        if self.total_registrations == 0 {
            return 0.0;
        }
        let repeats = self.total_registrations - self.distinct_sequences as u64;
        repeats as f64 / self.total_registrations as f64
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} distinct sequences, {} registrations, max count {}",
            self.distinct_sequences, self.total_registrations, self.max_count
        )?;

        if self.total_registrations > 0 {
            write!(
                f,
                ", {:.1}% repeats, ~{} bytes",
                self.repeat_ratio() * 100.0,
                self.memory_usage_bytes()
            )?;
        }

        Ok(())
    }
}
