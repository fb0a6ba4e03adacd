//! Min-priority queue with replaceable priorities
//!
//! Entries are ordered by `(priority, sequence)`, so equal priorities leave in
//! insertion order. Re-pushing an item supersedes its old entry without
//! touching the heap: the old entry stays behind and is skipped when it
//! surfaces.

use super::QueueError;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::hash::Hash;

#[derive(Debug)]
struct HeapEntry<T> {
    priority: f64,
    seq: u64,
    token: u64,
    item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the comparison is reversed
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
            .then_with(|| other.token.cmp(&self.token))
    }
}

#[derive(Debug, Clone, Copy)]
struct LiveEntry {
    priority: f64,
    seq: u64,
    token: u64,
}

/// Priority queue keyed by `f64` priorities, smallest first
#[derive(Debug)]
pub struct PriorityEventQueue<T> {
    heap: BinaryHeap<HeapEntry<T>>,
    live: HashMap<T, LiveEntry>,
    next_seq: u64,
    next_token: u64,
}

impl<T> Default for PriorityEventQueue<T> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            next_seq: 0,
            next_token: 0,
        }
    }
}

impl<T> PriorityEventQueue<T>
where
    T: Hash + Eq + Clone + fmt::Debug,
{
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an item, or replace the priority of an item already queued.
    ///
    /// A replaced item keeps its original sequence number.
    pub fn push(&mut self, item: T, priority: f64) {
        let seq = match self.live.get(&item) {
            Some(existing) => existing.seq,
            None => {
                let seq = self.next_seq;
                self.next_seq += 1;
                seq
            }
        };
        let token = self.next_token;
        self.next_token += 1;

        self.live.insert(item.clone(), LiveEntry {
            priority,
            seq,
            token,
        });
        self.heap.push(HeapEntry {
            priority,
            seq,
            token,
            item,
        });
    }

    /// Remove and return the item with the smallest priority
    pub fn pop(&mut self) -> Result<(T, f64), QueueError> {
        while let Some(entry) = self.heap.pop() {
            let is_live = self
                .live
                .get(&entry.item)
                .map_or(false, |live| live.token == entry.token);
            if is_live {
                self.live.remove(&entry.item);
                return Ok((entry.item, entry.priority));
            }
        }
        Err(QueueError::Empty)
    }

    /// Smallest live priority without removing it
    pub fn peek_priority(&self) -> Option<f64> {
        self.live
            .values()
            .map(|live| live.priority)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Lower the priority of a queued item.
    ///
    /// Returns `Ok(false)` and leaves the queue unchanged unless `priority` is
    /// strictly smaller than the current one.
    pub fn decrease_priority(&mut self, item: T, priority: f64) -> Result<bool, QueueError> {
        let current = self
            .live
            .get(&item)
            .ok_or_else(|| QueueError::UnknownItem(format!("{:?}", item)))?;
        if priority.total_cmp(&current.priority) != Ordering::Less {
            return Ok(false);
        }
        self.push(item, priority);
        Ok(true)
    }

    /// Current priority of a queued item
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.live.get(item).map(|live| live.priority)
    }

    /// Whether an item is queued
    pub fn contains(&self, item: &T) -> bool {
        self.live.contains_key(item)
    }

    /// Number of live items
    pub fn count(&self) -> usize {
        self.live.len()
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Whether no live item remains
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

/// Draining iteration in non-decreasing priority order
impl<T> Iterator for PriorityEventQueue<T>
where
    T: Hash + Eq + Clone + fmt::Debug,
{
    type Item = (T, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.pop().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count(), Some(self.count()))
    }
}
