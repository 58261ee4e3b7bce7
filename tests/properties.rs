//! Randomized property tests for the pairing engine.
//!
//! These tests verify, over seeded random inputs:
//! 1. Every pair is a valid two-way swap that both sides consent to
//! 2. No request appears in more than one pair
//! 3. Each group pair gets a maximum matching (cross-checked by brute force)
//! 4. Satisfied requests never appear and never cause errors
//! 5. Output is deterministic, with or without parallel matching
//!
//! ## Running
//!
//! ```bash
//! cargo test --test properties -- --nocapture
//! ```

use std::collections::{HashMap, HashSet};

use swap_pairing::engine::Partitions;
use swap_pairing::graph::{hopcroft_karp, maximum_matching, EligibilityGraph};
use swap_pairing::{EngineConfig, SwapMatcher, SwapRequest};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of random request sets per property
const CASES: u64 = 200;

/// Largest side the brute-force cross-check handles
const MAX_SIDE: usize = 12;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Generate a valid request set with a seeded RNG.
///
/// Ids are shuffled so input order differs from id order. Restrictive
/// requests name a random other request, usually a complementary one.
fn generate_requests(rng: &mut ChaCha8Rng, count: usize, groups: usize) -> Vec<SwapRequest> {
    let mut ids: Vec<u64> = (1..=count as u64).collect();
    ids.shuffle(rng);

    let mut requests: Vec<SwapRequest> = ids
        .iter()
        .map(|&id| {
            let current = format!("G{}", rng.gen_range(0..groups));
            let desired = if rng.gen_bool(0.1) {
                current.clone()
            } else {
                format!("G{}", rng.gen_range(0..groups))
            };
            SwapRequest::flexible(id, current, desired)
        })
        .collect();

    for i in 0..requests.len() {
        if requests.len() < 2 || !rng.gen_bool(0.35) {
            continue;
        }
        let complementary: Vec<u64> = requests
            .iter()
            .filter(|r| {
                r.current == requests[i].desired && r.desired == requests[i].current
            })
            .map(|r| r.id)
            .filter(|&id| id != requests[i].id)
            .collect();
        let partner = match complementary.choose(rng) {
            Some(&id) if rng.gen_bool(0.8) => id,
            _ => loop {
                let id = ids[rng.gen_range(0..ids.len())];
                if id != requests[i].id {
                    break id;
                }
            },
        };
        requests[i].flexible = false;
        requests[i].preferred_partner = Some(partner);
    }

    requests
}

/// Maximum matching size by exhaustive search over used right nodes
fn brute_force_max(adjacency: &[Vec<usize>], right_len: usize) -> usize {
    assert!(right_len <= MAX_SIDE && adjacency.len() <= MAX_SIDE);

    fn best(
        u: usize,
        used: u32,
        adjacency: &[Vec<usize>],
        memo: &mut HashMap<(usize, u32), usize>,
    ) -> usize {
        if u == adjacency.len() {
            return 0;
        }
        if let Some(&known) = memo.get(&(u, used)) {
            return known;
        }
        let mut result = best(u + 1, used, adjacency, memo);
        for &v in &adjacency[u] {
            if used & (1 << v) == 0 {
                result = result.max(1 + best(u + 1, used | (1 << v), adjacency, memo));
            }
        }
        memo.insert((u, used), result);
        result
    }

    best(0, 0, adjacency, &mut HashMap::new())
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

/// Every pair swaps complementary groups, respects restrictions, and no id repeats.
#[test]
fn pairs_are_valid_consenting_and_unique() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..CASES {
        let count = rng.gen_range(0..40);
        let groups = rng.gen_range(2..5);
        let requests = generate_requests(&mut rng, count, groups);
        let pairing = SwapMatcher::new()
            .run(&requests)
            .expect("generated input must validate");
        let by_id: HashMap<u64, &SwapRequest> = requests.iter().map(|r| (r.id, r)).collect();

        let mut seen = HashSet::new();
        for pair in &pairing.pairs {
            let (a, b) = (by_id[&pair.first], by_id[&pair.second]);

            assert_eq!(a.current, b.desired, "{pair}: groups do not complement");
            assert_eq!(b.current, a.desired, "{pair}: groups do not complement");
            assert!(a.accepts(b.id), "{pair}: {} did not consent", a.id);
            assert!(b.accepts(a.id), "{pair}: {} did not consent", b.id);
            assert!(pair.first < pair.second, "{pair}: not canonical");
            assert!(seen.insert(pair.first), "{} paired twice", pair.first);
            assert!(seen.insert(pair.second), "{} paired twice", pair.second);
        }

        for id in &pairing.unmatched {
            assert!(!seen.contains(id));
        }
        let active = requests.iter().filter(|r| !r.is_satisfied()).count();
        assert_eq!(seen.len() + pairing.unmatched.len(), active);
    }
}

/// Satisfied requests never show up in any pair.
#[test]
fn satisfied_requests_are_excluded() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..CASES {
        let mut requests = generate_requests(&mut rng, 20, 3);
        // Make some satisfied requests malformed; they must still not error
        for request in requests.iter_mut().filter(|r| r.is_satisfied()) {
            request.flexible = false;
            request.preferred_partner = None;
        }
        let pairing = SwapMatcher::new()
            .run(&requests)
            .expect("satisfied requests must not fail");

        for request in requests.iter().filter(|r| r.is_satisfied()) {
            assert!(pairing.pairs.iter().all(|p| !p.contains(request.id)));
            assert!(!pairing.unmatched.contains(&request.id));
        }
    }
}

/// Each group pair's matching is as large as the brute-force optimum.
#[test]
fn group_pair_matchings_are_maximum() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let mut checked = 0;

    for _ in 0..CASES {
        let count = rng.gen_range(2..24);
        let requests = generate_requests(&mut rng, count, 2);

        for pair in Partitions::build(&requests).into_group_pairs() {
            if pair.left.len() > MAX_SIDE || pair.right.len() > MAX_SIDE {
                continue;
            }
            let graph = EligibilityGraph::build(&pair.left, &pair.right);
            let matching = maximum_matching(&graph);

            assert_eq!(
                matching.len(),
                brute_force_max(graph.adjacency(), graph.right_len()),
                "not maximum for {:?}",
                graph.adjacency()
            );
            checked += 1;
        }
    }

    assert!(checked > 0, "no group pair was cross-checked");
}

/// Hopcroft–Karp on arbitrary small bipartite graphs matches brute force.
#[test]
fn hopcroft_karp_matches_brute_force() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..CASES * 5 {
        let left_len = rng.gen_range(0..=MAX_SIDE);
        let right_len = rng.gen_range(0..=MAX_SIDE);
        let density = rng.gen_range(0.05..0.6);
        let adjacency: Vec<Vec<usize>> = (0..left_len)
            .map(|_| {
                (0..right_len)
                    .filter(|_| rng.gen_bool(density))
                    .collect::<Vec<usize>>()
            })
            .collect();

        let matching = hopcroft_karp(&adjacency, right_len);
        assert_eq!(
            matching.len(),
            brute_force_max(&adjacency, right_len),
            "{adjacency:?}"
        );

        let mut used = HashSet::new();
        for (u, v) in matching.edges() {
            assert!(adjacency[u].contains(&v));
            assert!(used.insert(v));
        }
        assert_eq!(used.len(), matching.len());
    }
}

/// Same input, same order: same pairs and same pairing root, sequential or parallel.
#[test]
fn output_is_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let parallel = SwapMatcher::with_config(
        EngineConfig::default()
            .with_parallel(true)
            .with_min_parallel_partitions(2),
    );

    for _ in 0..CASES / 4 {
        let requests = generate_requests(&mut rng, 300, 6);

        let first = SwapMatcher::new().run(&requests).expect("run failed");
        let second = SwapMatcher::new().run(&requests).expect("run failed");
        let threaded = parallel.run(&requests).expect("run failed");

        assert_eq!(first, second);
        assert_eq!(first, threaded);
        assert_eq!(first.receipt.pairing_root, threaded.receipt.pairing_root);
    }
}

/// A large single group pair completes and pairs everyone when all are flexible.
#[test]
fn large_flexible_partition() {
    let mut requests = Vec::new();
    for id in 1..=2_000u64 {
        let (from, to) = if id % 2 == 0 { ("A", "B") } else { ("B", "A") };
        requests.push(SwapRequest::flexible(id, from, to));
    }

    let pairing = SwapMatcher::new().run(&requests).expect("run failed");
    assert_eq!(pairing.len(), 1_000);
    assert!(pairing.unmatched.is_empty());
}
