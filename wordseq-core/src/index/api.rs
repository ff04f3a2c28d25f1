//! Public API for registering and extracting sequences.

use core::mem;

use tracing::trace;
use wordseq_types::{Count, RankedSequence};

use crate::index::types::{Fingerprint, FrequencyIndex, Sequence};

impl FrequencyIndex {
    /// Records one occurrence of `words`.
    ///
    /// A new word list starts at count 1. A known one has its count
    /// incremented and its heap slot re-fixed in O(log n).
    pub fn register(&mut self, words: &[String]) {
        self.registrations += 1;
        let fingerprint = Fingerprint::of(words);

        if let Some(&id) = self.lookup.get(&fingerprint) {
            let seq = &mut self.sequences[id];
            debug_assert_eq!(&*seq.words, words);
            seq.count += 1;
            trace!(count = seq.count, ?words, "sequence repeated");
            let pos = seq.heap_pos;
            self.heap.fix(&mut self.sequences, pos);
            return;
        }

        let id = self.sequences.len();
        self.sequences.push(Sequence {
            words: words.into(),
            count: 1,
            heap_pos: 0,
        });
        self.lookup.insert(fingerprint, id);
        self.heap.push(&mut self.sequences, id);
        trace!(distinct = self.sequences.len(), ?words, "new sequence");
    }

    /// Current count of `words`, `None` if never registered.
    pub fn count(&self, words: &[String]) -> Option<Count> {
        self.lookup
            .get(&Fingerprint::of(words))
            .map(|&id| self.sequences[id].count)
    }

    /// Pops up to `top_n` sequences in rank order.
    ///
    /// Consumes the index: extraction is the end of a pass.
    pub fn extract_top(mut self, top_n: usize) -> Vec<RankedSequence> {
        let mut top = Vec::with_capacity(top_n.min(self.sequences.len()));
        while top.len() < top_n {
            let Some(id) = self.heap.pop(&mut self.sequences) else {
                break;
            };
            let seq = &mut self.sequences[id];
            top.push(RankedSequence::new(mem::take(&mut seq.words).into_vec(), seq.count));
        }
        top
    }
}
