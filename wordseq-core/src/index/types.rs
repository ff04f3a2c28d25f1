//! Index types.

use core::cmp::Ordering;
use core::fmt;

use rustc_hash::FxHashMap;
use sha2::{Digest, Sha256};
use wordseq_types::{rank_cmp, Count};

use super::heap::RankedHeap;

/// Slot of a [`Sequence`] in the index's slab.
pub(crate) type SeqId = usize;

/// Joins words inside a fingerprint. `0xFF` never occurs in UTF-8.
const WORD_SEPARATOR: [u8; 1] = [0xFF];

/// Fixed-width content key of a word list.
///
/// SHA-256 over the UTF-8 words joined by a `0xFF` byte. Since the separator
/// cannot appear inside a word, distinct lists never share a preimage.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    pub fn of(words: &[String]) -> Self {
        let mut hasher = Sha256::new();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                hasher.update(WORD_SEPARATOR);
            }
            hasher.update(word.as_bytes());
        }
        Self(hasher.finalize().into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fingerprint(")?;
        for b in &self.0[..8] {
            write!(f, "{b:02x}")?;
        }
        f.write_str("..)")
    }
}

/// A distinct word list and its running count.
#[derive(Debug, Clone)]
pub(crate) struct Sequence {
    pub(crate) words: Box<[String]>,
    pub(crate) count: Count,
    /// Current slot in the heap. Only [`RankedHeap`] writes this.
    pub(crate) heap_pos: usize,
}

impl Sequence {
    #[inline(always)]
    pub(crate) fn rank_cmp(&self, other: &Self) -> Ordering {
        rank_cmp(self.count, &self.words, other.count, &other.words)
    }
}

/// Counts distinct word sequences and keeps them ranked.
///
/// Sequences live in a slab owned by the index. The fingerprint map and the
/// heap both refer to them by slot, and each sequence records its own heap
/// slot so an increment can be re-ranked without searching.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    pub(crate) sequences: Vec<Sequence>,
    pub(crate) lookup: FxHashMap<Fingerprint, SeqId>,
    pub(crate) heap: RankedHeap,
    /// Total `register` calls, including repeats.
    pub(crate) registrations: u64,
}

impl FrequencyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct sequences.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Removes all sequences.
    pub fn clear(&mut self) {
        self.sequences.clear();
        self.lookup.clear();
        self.heap.clear();
        self.registrations = 0;
    }
}
