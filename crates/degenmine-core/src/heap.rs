//! Linear-bucket min-priority structure keyed by small non-negative integers.
//!
//! Ported from `gm::LinearHeap` in the C++ reference implementation
//! (`heap.hpp`). Values are bounded by `v_max` (an upper bound on any degree
//! in the graph the heap indexes), so a bucket array plus doubly-linked lists
//! gives O(1)-amortised `pop_min`/`decrement` — the whole point of using this
//! over a binary heap for degeneracy peeling.

const ABSENT: i32 = -1;

/// Min-priority queue over keys `0..n`, with values bounded by `v_max`.
///
/// Keys are `i32` vertex ids; values are `i32` degrees (or similar small
/// non-negative counters). Once a key is popped it can never re-enter —
/// `decrement` on a popped key is a tolerated no-op that returns `false`.
#[derive(Debug)]
pub struct LinearBucketHeap {
    v_max: i32,
    min_: i32,
    remaining: usize,
    heads: Vec<i32>,
    prev: Vec<i32>,
    next: Vec<i32>,
    values: Vec<i32>,
    popped: Vec<bool>,
}

impl LinearBucketHeap {
    /// Builds a heap over `initial_values.len()` keys, with bucket values in
    /// `0..=v_max`. `O(n + v_max)`.
    pub fn new(v_max: i32, initial_values: &[i32]) -> Self {
        let n = initial_values.len();
        let mut heap = LinearBucketHeap {
            v_max,
            min_: v_max,
            remaining: n,
            heads: vec![ABSENT; (v_max as usize) + 1],
            prev: vec![ABSENT; n],
            next: vec![ABSENT; n],
            values: initial_values.to_vec(),
            popped: vec![false; n],
        };
        for key in 0..n {
            let v = heap.values[key] as usize;
            let key = key as i32;
            heap.next[key as usize] = heap.heads[v];
            if heap.heads[v] != ABSENT {
                heap.prev[heap.heads[v] as usize] = key;
            }
            heap.heads[v] = key;
            if heap.values[key as usize] < heap.min_ {
                heap.min_ = heap.values[key as usize];
            }
        }
        heap
    }

    /// Number of keys not yet popped.
    pub fn len(&self) -> usize {
        self.remaining
    }

    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Current value of `key`. Panics if `key` was already popped, same as
    /// the reference implementation's `getById` assertion.
    pub fn value_of(&self, key: i32) -> i32 {
        debug_assert!(!self.popped[key as usize], "value_of on popped key");
        self.values[key as usize]
    }

    /// Removes and returns the `(key, value)` pair with the smallest value.
    ///
    /// Panics if the heap is empty — this is a programmer invariant per
    /// spec: callers never pop more than `n` times.
    pub fn pop_min(&mut self) -> (i32, i32) {
        debug_assert!(!self.is_empty(), "pop_min on empty heap");
        let key = self.heads[self.min_ as usize];
        let value = self.min_;
        self.popped[key as usize] = true;
        self.remaining -= 1;
        self.heads[self.min_ as usize] = self.next[key as usize];
        if self.heads[self.min_ as usize] != ABSENT {
            self.prev[self.heads[self.min_ as usize] as usize] = ABSENT;
        }
        while self.min_ < self.v_max && self.heads[self.min_ as usize] == ABSENT {
            self.min_ += 1;
        }
        (key, value)
    }

    /// Lowers `key`'s value by `amount`, relinking its bucket membership.
    ///
    /// Returns `false` (and does nothing else) if `key` was already popped.
    /// `amount` must not drive the value negative — guaranteed structurally
    /// by every caller in this crate (a vertex's remaining degree never goes
    /// below zero).
    pub fn decrement(&mut self, key: i32, amount: i32) -> bool {
        let k = key as usize;
        if self.popped[k] {
            return false;
        }
        let old_value = self.values[k] as usize;
        if self.next[k] != ABSENT {
            self.prev[self.next[k] as usize] = self.prev[k];
        }
        if self.prev[k] != ABSENT {
            self.next[self.prev[k] as usize] = self.next[k];
        }
        if key == self.heads[old_value] {
            self.heads[old_value] = self.next[k];
        }

        let new_value = self.values[k] - amount;
        debug_assert!(new_value >= 0, "decrement drove value negative");
        self.values[k] = new_value;
        let nv = new_value as usize;
        self.next[k] = self.heads[nv];
        self.prev[k] = ABSENT;
        if self.heads[nv] != ABSENT {
            self.prev[self.heads[nv] as usize] = key;
        }
        self.heads[nv] = key;
        if new_value < self.min_ {
            self.min_ = new_value;
        }
        true
    }
}
