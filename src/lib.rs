//! # Swap Pairing
//!
//! Deterministic pairing of two-way group swap requests.
//!
//! ## Architecture
//!
//! - **Types**: Core data structures (SwapRequest, MatchedPair, PairingReceipt)
//! - **Validate**: Up-front checks over the whole request set
//! - **Engine**: Partitioning by direction, aggregation, the `SwapMatcher`
//! - **Graph**: Eligibility graphs and Hopcroft–Karp maximum matching
//! - **Roster**: Reading requests from a delimited export
//!
//! ## Design Principles
//!
//! 1. **Determinism**: The same input in the same order always yields the same pairs
//! 2. **Maximum**: Each group pair gets a maximum-cardinality matching
//! 3. **Consent**: A restrictive request is only ever paired with its named partner
//! 4. **Pure**: The engine does no I/O and keeps no state between runs

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: SwapRequest, MatchedPair, PairingReceipt
pub mod types;

/// Error types
pub mod error;

/// Engine configuration
pub mod config;

/// Input validation
pub mod validate;

/// Eligibility graphs and maximum matching
pub mod graph;

/// Pairing engine
pub mod engine;

/// Roster file reader
pub mod roster;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::EngineConfig;
pub use engine::{match_requests, Pairing, SwapMatcher};
pub use error::{InvalidReason, MatchError, ValidationError};
pub use types::{GroupId, MatchedPair, PairingReceipt, RequestId, SwapRequest};
