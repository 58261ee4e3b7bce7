//! Eligibility graph between the two sides of a group pair.
//!
//! Left nodes are the requests moving A -> B, right nodes the requests moving
//! B -> A. An edge joins two requests that consent to each other. Group
//! compatibility holds by construction and is not rechecked.
//!
//! ## Adjacency Order
//!
//! Nodes are numbered by their position in the partition, and every
//! adjacency list is ordered by right position. The matcher breaks ties by
//! this order, so it must follow the input exactly.

use std::collections::HashMap;

use crate::types::{RequestId, SwapRequest};

/// Bipartite consent graph for one group pair.
#[derive(Debug, Clone, Default)]
pub struct EligibilityGraph {
    /// Left request ids by position
    left: Vec<RequestId>,

    /// Right request ids by position
    right: Vec<RequestId>,

    /// Left position to right positions, ascending
    adjacency: Vec<Vec<usize>>,
}

impl EligibilityGraph {
    /// Build the graph for one group pair.
    ///
    /// A restrictive left request can only ever be joined to its named
    /// partner, so that candidate is looked up directly instead of scanning
    /// the whole right side.
    ///
    /// # Example
    ///
    /// ```
    /// use swap_pairing::graph::EligibilityGraph;
    /// use swap_pairing::types::SwapRequest;
    ///
    /// let a = SwapRequest::flexible(1, "G1", "G2");
    /// let b = SwapRequest::restricted(2, "G2", "G1", 9);
    /// let c = SwapRequest::flexible(3, "G2", "G1");
    ///
    /// let graph = EligibilityGraph::build(&[&a], &[&b, &c]);
    /// assert_eq!(graph.neighbors(0), &[1]);
    /// ```
    pub fn build(left: &[&SwapRequest], right: &[&SwapRequest]) -> Self {
        let right_index: HashMap<RequestId, usize> = right
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id, pos))
            .collect();

        let adjacency: Vec<Vec<usize>> = left
            .iter()
            .map(|u| -> Vec<usize> {
                if u.flexible {
                    right
                        .iter()
                        .enumerate()
                        .filter(|(_, v)| v.accepts(u.id))
                        .map(|(pos, _)| pos)
                        .collect()
                } else {
                    u.preferred_partner
                        .and_then(|partner| right_index.get(&partner).copied())
                        .filter(|&pos| right[pos].accepts(u.id))
                        .into_iter()
                        .collect()
                }
            })
            .collect();

        Self {
            left: left.iter().map(|r| r.id).collect(),
            right: right.iter().map(|r| r.id).collect(),
            adjacency,
        }
    }

    /// Build directly from ids and adjacency lists.
    ///
    /// Every right position in `adjacency` must be below `right.len()`.
    pub fn from_parts(
        left: Vec<RequestId>,
        right: Vec<RequestId>,
        adjacency: Vec<Vec<usize>>,
    ) -> Self {
        debug_assert_eq!(left.len(), adjacency.len());
        debug_assert!(adjacency.iter().flatten().all(|&v| v < right.len()));
        Self {
            left,
            right,
            adjacency,
        }
    }

    #[inline]
    pub fn left_len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn right_len(&self) -> usize {
        self.right.len()
    }

    /// Total number of edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn left_id(&self, pos: usize) -> RequestId {
        self.left[pos]
    }

    #[inline]
    pub fn right_id(&self, pos: usize) -> RequestId {
        self.right[pos]
    }

    /// Right positions adjacent to left position `pos`
    #[inline]
    pub fn neighbors(&self, pos: usize) -> &[usize] {
        &self.adjacency[pos]
    }

    /// All adjacency lists, indexed by left position
    #[inline]
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Check whether the two requests are joined
    #[cfg(test)]
    pub fn has_edge(&self, left_id: RequestId, right_id: RequestId) -> bool {
        let Some(u) = self.left.iter().position(|&id| id == left_id) else {
            return false;
        };
        self.adjacency[u].iter().any(|&v| self.right[v] == right_id)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
