//! Merging per-partition matchings into the final pairing.

use std::collections::HashSet;

use crate::graph::{EligibilityGraph, Matching};
use crate::types::{MatchedPair, RequestId};

/// Collects canonical pairs from every matched group pair.
///
/// Each request belongs to exactly one group pair, so no id can be emitted
/// twice; the set of matched ids is kept to report who was left over.
#[derive(Debug, Default)]
pub struct PairingAggregator {
    pairs: Vec<MatchedPair>,
    matched: HashSet<RequestId>,
}

impl PairingAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit one pair per matched edge, in left position order
    pub fn absorb(&mut self, graph: &EligibilityGraph, matching: &Matching) {
        for (u, v) in matching.edges() {
            self.push(MatchedPair::new(graph.left_id(u), graph.right_id(v)));
        }
    }

    /// Add a single pair
    pub fn push(&mut self, pair: MatchedPair) {
        let fresh_first = self.matched.insert(pair.first);
        let fresh_second = self.matched.insert(pair.second);
        debug_assert!(fresh_first && fresh_second, "request matched twice: {pair}");
        self.pairs.push(pair);
    }

    /// Check whether `id` has been paired
    #[inline]
    pub fn is_matched(&self, id: RequestId) -> bool {
        self.matched.contains(&id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All pairs in emission order
    pub fn finish(self) -> Vec<MatchedPair> {
        self.pairs
    }
}
