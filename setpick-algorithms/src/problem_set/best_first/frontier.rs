use super::SearchState;
use setpick_challenges::problem_set::CostKey;
use std::{cmp::Ordering, collections::BinaryHeap};

struct Entry<V> {
    key: CostKey,
    seq: u64,
    state: SearchState<V>,
}

// Reversed so that `BinaryHeap` pops the smallest key, oldest first.
impl<V> Ord for Entry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<V> PartialOrd for Entry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> PartialEq for Entry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl<V> Eq for Entry<V> {}

/// Min-priority queue of states keyed by their cost key. Equal keys come out
/// in insertion order.
pub struct Frontier<V> {
    heap: BinaryHeap<Entry<V>>,
    next_seq: u64,
    peak_len: usize,
}

impl<V: Copy> Frontier<V> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
            peak_len: 0,
        }
    }

    pub fn push(&mut self, state: SearchState<V>) {
        self.heap.push(Entry {
            key: state.key,
            seq: self.next_seq,
            state,
        });
        self.next_seq += 1;
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    pub fn pop(&mut self) -> Option<SearchState<V>> {
        self.heap.pop().map(|entry| entry.state)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}
