//! The swap matcher: runs the full pipeline over one request set.

use rayon::prelude::*;
use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::aggregator::PairingAggregator;
use crate::engine::partition::{GroupPair, Partitions};
use crate::error::MatchError;
use crate::graph::{maximum_matching, EligibilityGraph, Matching};
use crate::types::{MatchedPair, PairingReceipt, RequestId, SwapRequest};
use crate::validate::validate_requests;

/// Outcome of a pairing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Matched pairs, grouped by the order group pairs were first seen
    pub pairs: Vec<MatchedPair>,

    /// Active requests left without a partner, in input order
    pub unmatched: Vec<RequestId>,

    /// Run summary
    pub receipt: PairingReceipt,
}

impl Pairing {
    /// Number of pairs formed
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Partner assigned to `id`, if any
    pub fn partner_of(&self, id: RequestId) -> Option<RequestId> {
        self.pairs.iter().find_map(|pair| pair.partner_of(id))
    }
}

/// Stateless pairing engine.
///
/// Holds only its configuration; every call to [`run`](Self::run) is
/// independent.
#[derive(Debug, Clone, Default)]
pub struct SwapMatcher {
    config: EngineConfig,
}

impl SwapMatcher {
    /// Create a matcher with the default (sequential) configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pair up as many requests as possible.
    ///
    /// # Errors
    ///
    /// Fails with [`MatchError::Validation`] before any matching if the input
    /// has duplicate ids, a malformed restrictive request, or a partner id
    /// that names no request.
    pub fn run(&self, requests: &[SwapRequest]) -> Result<Pairing, MatchError> {
        validate_requests(requests)?;

        let partitions = Partitions::build(requests);
        let active = partitions.active_count();
        let satisfied = partitions.satisfied_count();
        let directions = partitions.len();
        let group_pairs = partitions.into_group_pairs();

        let parallel = self.config.runs_parallel(group_pairs.len());
        debug!(
            requests = requests.len(),
            active,
            satisfied,
            directions,
            group_pairs = group_pairs.len(),
            parallel,
            "partitioned swap requests"
        );

        let solved: Vec<(EligibilityGraph, Matching)> = if parallel {
            group_pairs.par_iter().map(solve_group_pair).collect()
        } else {
            group_pairs.iter().map(solve_group_pair).collect()
        };

        let mut aggregator = PairingAggregator::new();
        for (graph, matching) in &solved {
            aggregator.absorb(graph, matching);
        }

        let unmatched: Vec<RequestId> = requests
            .iter()
            .filter(|r| !r.is_satisfied() && !aggregator.is_matched(r.id))
            .map(|r| r.id)
            .collect();
        let pairs = aggregator.finish();

        let receipt = PairingReceipt::new(
            requests.len() as u64,
            active as u64,
            solved.len() as u64,
            pairs.len() as u64,
            PairingReceipt::compute_root(&pairs)?,
        );
        debug!(
            pairs = pairs.len(),
            unmatched = unmatched.len(),
            root = %receipt.pairing_root_hex(),
            "pairing complete"
        );

        Ok(Pairing {
            pairs,
            unmatched,
            receipt,
        })
    }
}

/// Build and match one group pair
fn solve_group_pair(pair: &GroupPair<'_>) -> (EligibilityGraph, Matching) {
    let graph = EligibilityGraph::build(&pair.left, &pair.right);
    let matching = maximum_matching(&graph);

    debug!(
        from = %pair.direction.from,
        to = %pair.direction.to,
        left = graph.left_len(),
        right = graph.right_len(),
        edges = graph.edge_count(),
        matched = matching.len(),
        rounds = matching.rounds(),
        "matched group pair"
    );

    (graph, matching)
}

/// Pair requests with the default configuration and return only the pairs.
///
/// # Example
///
/// ```
/// use swap_pairing::match_requests;
/// use swap_pairing::types::{MatchedPair, SwapRequest};
///
/// let requests = vec![
///     SwapRequest::restricted(3, "G1", "G2", 4),
///     SwapRequest::restricted(4, "G2", "G1", 3),
/// ];
/// assert_eq!(match_requests(&requests).unwrap(), vec![MatchedPair::new(3, 4)]);
/// ```
pub fn match_requests(requests: &[SwapRequest]) -> Result<Vec<MatchedPair>, MatchError> {
    SwapMatcher::new()
        .run(requests)
        .map(|pairing| pairing.pairs)
}

// ============================================================================
// Unit Tests
// ============================================================================
