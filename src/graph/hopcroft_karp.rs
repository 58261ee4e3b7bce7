//! Hopcroft–Karp maximum bipartite matching.
//!
//! ## Phases
//!
//! Each round runs:
//!
//! 1. **BFS**: layer the left nodes by alternating-path distance from the
//!    free left nodes. A sentinel stands for "reached a free right node";
//!    its distance stays infinite until the first such layer is found.
//! 2. **DFS**: from every free left node, in order, look for an augmenting
//!    path that advances exactly one layer per step, trying neighbors in
//!    adjacency order. A node that leads nowhere gets infinite distance and
//!    is not retried this round.
//!
//! Rounds repeat until the BFS cannot reach the sentinel. Total cost is
//! O(E·√V).
//!
//! ## Determinism
//!
//! Free left nodes are tried in position order and neighbors in adjacency
//! order. For a fixed graph the same maximum matching is produced on every
//! run; that order is the only tie-break between equally large matchings.
//!
//! The DFS keeps an explicit frame stack, so deep augmenting paths in large
//! partitions cannot overflow the call stack.

use std::collections::VecDeque;

use tracing::trace;

use crate::graph::EligibilityGraph;

/// Distance of a node not reachable in the current layering
const INF: usize = usize::MAX;

/// Result of a matching run, indexed by graph position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Matching {
    /// Left position to matched right position
    left_to_right: Vec<Option<usize>>,

    /// Number of matched edges
    size: usize,

    /// BFS phases executed, including the final one that found nothing
    rounds: usize,
}

impl Matching {
    /// Number of matched edges
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of BFS phases the run took
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Right position matched to left position `u`
    #[inline]
    pub fn partner_of_left(&self, u: usize) -> Option<usize> {
        self.left_to_right.get(u).copied().flatten()
    }

    /// Matched (left, right) positions in left position order
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.left_to_right
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.map(|v| (u, v)))
    }
}

/// Compute a maximum matching of an eligibility graph
pub fn maximum_matching(graph: &EligibilityGraph) -> Matching {
    hopcroft_karp(graph.adjacency(), graph.right_len())
}

/// Compute a maximum matching from raw adjacency lists.
///
/// `adjacency[u]` lists the right positions joined to left position `u`;
/// every entry must be below `right_len`.
///
/// # Example
///
/// ```
/// use swap_pairing::graph::hopcroft_karp;
///
/// // 0-0, 0-1, 1-0: the greedy choice 0-0 must be undone to match both
/// let adjacency = vec![vec![0, 1], vec![0]];
/// let matching = hopcroft_karp(&adjacency, 2);
///
/// assert_eq!(matching.len(), 2);
/// assert_eq!(matching.partner_of_left(0), Some(1));
/// assert_eq!(matching.partner_of_left(1), Some(0));
/// ```
pub fn hopcroft_karp(adjacency: &[Vec<usize>], right_len: usize) -> Matching {
    let mut run = MatchRun::new(adjacency, right_len);

    while run.layer() {
        for u in 0..adjacency.len() {
            if run.match_left[u].is_none() && run.augment(u) {
                run.size += 1;
            }
        }
        trace!(round = run.rounds, size = run.size, "hopcroft-karp phase");
    }

    Matching {
        left_to_right: run.match_left,
        size: run.size,
        rounds: run.rounds,
    }
}

/// One DFS stack frame: a left node and the adjacency slot being tried
#[derive(Debug, Clone, Copy)]
struct Frame {
    left: usize,
    cursor: usize,
}

/// Working state of a single matching run
struct MatchRun<'g> {
    adjacency: &'g [Vec<usize>],
    match_left: Vec<Option<usize>>,
    match_right: Vec<Option<usize>>,
    dist: Vec<usize>,
    /// Distance of the free-right sentinel
    free_dist: usize,
    queue: VecDeque<usize>,
    stack: Vec<Frame>,
    size: usize,
    rounds: usize,
}

impl<'g> MatchRun<'g> {
    fn new(adjacency: &'g [Vec<usize>], right_len: usize) -> Self {
        let left_len = adjacency.len();
        Self {
            adjacency,
            match_left: vec![None; left_len],
            match_right: vec![None; right_len],
            dist: vec![INF; left_len],
            free_dist: INF,
            queue: VecDeque::with_capacity(left_len),
            stack: Vec::new(),
            size: 0,
            rounds: 0,
        }
    }

    /// BFS phase. Returns true if some augmenting path exists.
    fn layer(&mut self) -> bool {
        self.rounds += 1;
        self.queue.clear();

        for (u, matched) in self.match_left.iter().enumerate() {
            if matched.is_none() {
                self.dist[u] = 0;
                self.queue.push_back(u);
            } else {
                self.dist[u] = INF;
            }
        }
        self.free_dist = INF;

        while let Some(u) = self.queue.pop_front() {
            if self.dist[u] >= self.free_dist {
                continue;
            }
            let next = self.dist[u] + 1;
            for &v in &self.adjacency[u] {
                match self.match_right[v] {
                    None => {
                        if self.free_dist == INF {
                            self.free_dist = next;
                        }
                    }
                    Some(w) => {
                        if self.dist[w] == INF {
                            self.dist[w] = next;
                            self.queue.push_back(w);
                        }
                    }
                }
            }
        }

        self.free_dist != INF
    }

    /// DFS phase from free left node `root`.
    ///
    /// On success the path held in the stack is flipped.
    fn augment(&mut self, root: usize) -> bool {
        let adjacency = self.adjacency;
        self.stack.clear();
        self.stack.push(Frame {
            left: root,
            cursor: 0,
        });

        while let Some(frame) = self.stack.last_mut() {
            let u = frame.left;
            let Some(&v) = adjacency[u].get(frame.cursor) else {
                // Dead end: drop u from this round and resume the parent
                self.dist[u] = INF;
                self.stack.pop();
                if let Some(parent) = self.stack.last_mut() {
                    parent.cursor += 1;
                }
                continue;
            };

            let next = self.dist[u] + 1;
            let owner = self.match_right[v];
            match owner {
                None if self.free_dist == next => {
                    self.flip_path();
                    return true;
                }
                Some(w) if self.dist[w] == next => {
                    self.stack.push(Frame { left: w, cursor: 0 });
                }
                _ => frame.cursor += 1,
            }
        }

        false
    }

    /// Flip matched and unmatched edges along the stack
    fn flip_path(&mut self) {
        let adjacency = self.adjacency;
        for frame in self.stack.drain(..) {
            let v = adjacency[frame.left][frame.cursor];
            self.match_left[frame.left] = Some(v);
            self.match_right[v] = Some(frame.left);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
