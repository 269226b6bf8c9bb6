//! Insertion-ordered counter.
use std::collections::HashMap;

/// Counts keys, remembering the order in which they were first seen.
///
/// Ranking is a stable sort on counts, so ties keep first-seen order.
#[derive(Debug, Default, Clone)]
pub struct OrderedCounter {
    positions: HashMap<String, usize>,
    counts: Vec<(String, u64)>,
}

impl OrderedCounter {
    /// Adds 1 to `key`, creating it if needed.
    pub fn add(&mut self, key: &str) {
        match self.positions.get(key) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.positions.insert(key.to_string(), self.counts.len());
                self.counts.push((key.to_string(), 1));
            }
        }
    }

    /// Registers `key` without counting it.
    pub fn touch(&mut self, key: &str) {
        if !self.positions.contains_key(key) {
            self.positions.insert(key.to_string(), self.counts.len());
            self.counts.push((key.to_string(), 0));
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.positions
            .get(key)
            .map(|&pos| self.counts[pos].1)
            .unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.iter().map(|(k, _)| k.as_str())
    }

    /// `k` most common keys, descending.
    pub fn most_common(&self, k: usize) -> Vec<(String, u64)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }
}
