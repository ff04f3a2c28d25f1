//! Array-backed max-heap over slab slots.
//!
//! The heap stores slot ids only. Comparisons read the sequences from the
//! slab passed in by the caller, and every swap writes the new positions
//! back into the sequences' `heap_pos`.

use core::cmp::Ordering;

use super::types::{SeqId, Sequence};

#[derive(Debug, Default, Clone)]
pub(crate) struct RankedHeap {
    slots: Vec<SeqId>,
}

impl RankedHeap {
    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<SeqId> {
        self.slots.first().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Inserts `id`, which must not already be in the heap.
    pub(crate) fn push(&mut self, seqs: &mut [Sequence], id: SeqId) {
        let pos = self.slots.len();
        self.slots.push(id);
        seqs[id].heap_pos = pos;
        self.sift_up(seqs, pos);
    }

    /// Restores heap order after the sequence at `pos` changed rank.
    pub(crate) fn fix(&mut self, seqs: &mut [Sequence], pos: usize) {
        if !self.sift_down(seqs, pos) {
            self.sift_up(seqs, pos);
        }
    }

    /// Removes and returns the highest-ranked slot.
    pub(crate) fn pop(&mut self, seqs: &mut [Sequence]) -> Option<SeqId> {
        let last = self.slots.len().checked_sub(1)?;
        self.swap(seqs, 0, last);
        let top = self.slots.pop()?;
        if !self.slots.is_empty() {
            self.sift_down(seqs, 0);
        }
        Some(top)
    }

    #[inline(always)]
    fn ranks_before(&self, seqs: &[Sequence], i: usize, j: usize) -> bool {
        seqs[self.slots[i]].rank_cmp(&seqs[self.slots[j]]) == Ordering::Less
    }

    #[inline(always)]
    fn swap(&mut self, seqs: &mut [Sequence], i: usize, j: usize) {
        self.slots.swap(i, j);
        seqs[self.slots[i]].heap_pos = i;
        seqs[self.slots[j]].heap_pos = j;
    }

    fn sift_up(&mut self, seqs: &mut [Sequence], mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.ranks_before(seqs, pos, parent) {
                break;
            }
            self.swap(seqs, pos, parent);
            pos = parent;
        }
    }

    /// Returns `true` if the element moved.
    fn sift_down(&mut self, seqs: &mut [Sequence], start: usize) -> bool {
        let n = self.slots.len();
        let mut pos = start;
        loop {
            let left = 2 * pos + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let best = if right < n && self.ranks_before(seqs, right, left) {
                right
            } else {
                left
            };
            if !self.ranks_before(seqs, best, pos) {
                break;
            }
            self.swap(seqs, pos, best);
            pos = best;
        }
        pos > start
    }

    /// Panics if heap order or any `heap_pos` back-reference is broken.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self, seqs: &[Sequence]) {
        for (pos, &id) in self.slots.iter().enumerate() {
            assert_eq!(seqs[id].heap_pos, pos, "stale heap_pos for slot {id}");
            if pos > 0 {
                let parent = (pos - 1) / 2;
                assert!(
                    !self.ranks_before(seqs, pos, parent),
                    "heap order broken at {pos}"
                );
            }
        }
    }
}
