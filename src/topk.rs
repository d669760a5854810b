//! Bounded top-k accumulator for streaming (item, score) pairs

use serde::Serialize;

/// An item paired with its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored<T> {
    pub item: T,
    pub score: f64,
}

impl<T> Scored<T> {
    pub fn new(item: T, score: f64) -> Self {
        Self { item, score }
    }
}

/// Retains the `capacity` highest-scoring entries seen so far without
/// sorting the whole stream.
///
/// The minimum-scoring entry is cached so the common case of `offer`
/// (rejecting a score at or below the current minimum when full) is O(1);
/// an eviction recomputes the minimum with an O(capacity) scan, which is
/// fine for the small capacities this is built for. Create one per scan;
/// `offer` is not safe for concurrent callers.
#[derive(Debug)]
pub struct TopK<T> {
    capacity: usize,
    entries: Vec<Scored<T>>,
    /// Index and score of the minimum entry; meaningless while empty.
    min_idx: usize,
    min_score: f64,
}

impl<T> TopK<T> {
    /// Create an empty accumulator holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
            min_idx: 0,
            min_score: f64::INFINITY,
        }
    }

    /// Offer an entry. Below capacity it is always kept; at capacity it
    /// replaces the current minimum only when `score` is strictly greater.
    /// A score exactly equal to the minimum never evicts.
    pub fn offer(&mut self, item: T, score: f64) {
        if self.entries.len() < self.capacity {
            if self.entries.is_empty() || score < self.min_score {
                self.min_idx = self.entries.len();
                self.min_score = score;
            }
            self.entries.push(Scored::new(item, score));
        } else if self.capacity > 0 && score > self.min_score {
            self.entries[self.min_idx] = Scored::new(item, score);
            self.recompute_min();
        }
    }

    fn recompute_min(&mut self) {
        self.min_idx = 0;
        self.min_score = f64::INFINITY;
        for (i, entry) in self.entries.iter().enumerate() {
            if entry.score < self.min_score {
                self.min_idx = i;
                self.min_score = entry.score;
            }
        }
    }

    /// Consume the accumulator, returning entries sorted by descending
    /// score. Ties between equal scores may appear in either order.
    pub fn drain(self) -> Vec<Scored<T>> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }

    /// The score of the lowest-ranked held entry, if any.
    pub fn min_score(&self) -> Option<f64> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.min_score)
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores<T>(results: &[Scored<T>]) -> Vec<f64> {
        results.iter().map(|r| r.score).collect()
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let mut acc = TopK::new(5);
        acc.offer("a", 0.1);
        acc.offer("b", 0.9);
        acc.offer("c", 0.5);

        assert_eq!(acc.len(), 3);
        assert_eq!(acc.min_score(), Some(0.1));
    }

    #[test]
    fn test_eviction_replaces_minimum() {
        let mut acc = TopK::new(2);
        acc.offer("a", 0.3);
        acc.offer("b", 0.7);
        acc.offer("c", 0.5);

        let results = acc.drain();
        assert_eq!(scores(&results), vec![0.7, 0.5]);
        assert_eq!(results[1].item, "c");
    }

    #[test]
    fn test_low_score_rejected_when_full() {
        let mut acc = TopK::new(2);
        acc.offer("a", 0.3);
        acc.offer("b", 0.7);
        acc.offer("c", 0.1);

        assert_eq!(acc.min_score(), Some(0.3));
        assert_eq!(scores(&acc.drain()), vec![0.7, 0.3]);
    }

    #[test]
    fn test_tie_with_minimum_does_not_evict() {
        let mut acc = TopK::new(2);
        acc.offer("a", 0.3);
        acc.offer("b", 0.7);
        acc.offer("c", 0.3);

        let results = acc.drain();
        assert_eq!(scores(&results), vec![0.7, 0.3]);
        // The original minimum holder survives the tie.
        assert_eq!(results[1].item, "a");
    }

    #[test]
    fn test_minimum_recomputed_after_eviction() {
        let mut acc = TopK::new(3);
        acc.offer("a", 0.2);
        acc.offer("b", 0.8);
        acc.offer("c", 0.4);
        assert_eq!(acc.min_score(), Some(0.2));

        acc.offer("d", 0.6);
        assert_eq!(acc.min_score(), Some(0.4));
    }

    #[test]
    fn test_drain_sorted_descending() {
        let mut acc = TopK::new(10);
        for (i, s) in [0.5, 0.1, 0.9, 0.3, 0.7].iter().enumerate() {
            acc.offer(i, *s);
        }

        let results = acc.drain();
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_capacity_one() {
        let mut acc = TopK::new(1);
        acc.offer("a", 0.2);
        acc.offer("b", 0.9);
        acc.offer("c", 0.5);

        let results = acc.drain();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item, "b");
    }

    #[test]
    fn test_structurally_equal_entries_coexist() {
        let mut acc = TopK::new(3);
        acc.offer("same", 0.5);
        acc.offer("same", 0.5);

        assert_eq!(acc.len(), 2);
    }

    #[test]
    fn test_negative_scores() {
        let mut acc = TopK::new(2);
        acc.offer("a", -0.9);
        acc.offer("b", -0.1);
        acc.offer("c", -0.5);

        assert_eq!(scores(&acc.drain()), vec![-0.1, -0.5]);
    }

    #[test]
    fn test_empty_drain() {
        let acc: TopK<&str> = TopK::new(3);
        assert!(acc.is_empty());
        assert!(acc.drain().is_empty());
    }
}
