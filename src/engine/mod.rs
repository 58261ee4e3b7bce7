//! Pairing engine: validation, partitioning, matching and aggregation.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Same input order always produces the same pairs
//! 2. **Pure**: No I/O and no state kept between runs
//! 3. **Independent partitions**: Each group pair is matched on its own,
//!    optionally in parallel, and results are merged in partition order
//!
//! ## Pipeline
//!
//! ```text
//! validate -> partition by direction -> eligibility graph per group pair
//!          -> Hopcroft-Karp -> canonical pairs + receipt
//! ```
//!
//! ## Example
//!
//! ```
//! use swap_pairing::engine::SwapMatcher;
//! use swap_pairing::types::{MatchedPair, SwapRequest};
//!
//! let requests = vec![
//!     SwapRequest::flexible(1, "G1", "G2"),
//!     SwapRequest::flexible(2, "G2", "G1"),
//!     SwapRequest::flexible(7, "G1", "G1"),
//! ];
//!
//! let pairing = SwapMatcher::new().run(&requests).unwrap();
//!
//! assert_eq!(pairing.pairs, vec![MatchedPair::new(1, 2)]);
//! assert!(pairing.unmatched.is_empty());
//! ```

pub mod aggregator;
pub mod matcher;
pub mod partition;

pub use aggregator::PairingAggregator;
pub use matcher::{match_requests, Pairing, SwapMatcher};
pub use partition::{Direction, GroupPair, Partitions};
