use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::operation::{OperationKey, Operator, evaluate};

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    outcome: Option<u64>,
    requests: u64,
    order: usize,
}

/// Memoized operation results for one solve call.
///
/// Append-only and unbounded: it holds at most one entry per distinct
/// ordered value pair generated during the search, times the four
/// operators. Rejected operations are cached as `None` too.
#[derive(Debug)]
pub struct OperationCache {
    entries: HashMap<OperationKey, CacheEntry>,
    hits: u64,
    evaluator: fn(u64, u64, Operator) -> Option<u64>,
}

impl Default for OperationCache {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            evaluator: evaluate,
        }
    }
}

impl OperationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache backed by a custom evaluator, so tests can count misses.
    #[cfg(test)]
    pub(crate) fn with_evaluator(evaluator: fn(u64, u64, Operator) -> Option<u64>) -> Self {
        Self {
            evaluator,
            ..Self::default()
        }
    }

    /// Look up `left operator right`, evaluating it on first request.
    pub fn get_or_compute(&mut self, left: u64, right: u64, operator: Operator) -> Option<u64> {
        let order = self.entries.len();
        match self.entries.entry(OperationKey::new(left, right, operator)) {
            Entry::Occupied(mut occupied) => {
                self.hits += 1;
                let entry = occupied.get_mut();
                entry.requests += 1;
                entry.outcome
            }
            Entry::Vacant(vacant) => {
                let outcome = (self.evaluator)(left, right, operator);
                vacant.insert(CacheEntry {
                    outcome,
                    requests: 1,
                    order,
                });
                outcome
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// The most frequently requested operation and its request count.
    /// Ties go to the operation that was cached first.
    pub fn most_common(&self) -> Option<(OperationKey, u64)> {
        self.entries
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.requests
                    .cmp(&b.requests)
                    .then_with(|| b.order.cmp(&a.order))
            })
            .map(|(key, entry)| (*key, entry.requests))
    }

    /// Merge another cache into this one. Entries of `other` keep their
    /// relative order and land after the entries already present.
    pub fn absorb(&mut self, other: OperationCache) {
        self.hits += other.hits;

        let mut incoming: Vec<_> = other.entries.into_iter().collect();
        incoming.sort_by_key(|(_, entry)| entry.order);

        for (key, entry) in incoming {
            let order = self.entries.len();
            self.entries
                .entry(key)
                .and_modify(|existing| existing.requests += entry.requests)
                .or_insert(CacheEntry { order, ..entry });
        }
    }
}
