//! Pairing receipt summarizing one engine run.
//!
//! The receipt carries a pairing root so two runs can be compared without
//! comparing their full outputs.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::types::MatchedPair;

/// Summary of a pairing run.
///
/// ## Pairing Root
///
/// The 32-byte pairing root is a SHA-256 hash over the SSZ encoding of every
/// emitted pair, in emission order. Identical inputs always give identical
/// roots.
///
/// ## Example
///
/// ```
/// use swap_pairing::types::{MatchedPair, PairingReceipt};
///
/// let pairs = [MatchedPair::new(1, 2)];
/// let root = PairingReceipt::compute_root(&pairs).unwrap();
/// let receipt = PairingReceipt::new(3, 2, 1, 1, root);
///
/// assert_eq!(receipt.matched_requests(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct PairingReceipt {
    /// Number of requests handed to the engine
    pub requests_received: u64,

    /// Requests that actually want to move (current != desired)
    pub requests_active: u64,

    /// Group pairs for which a matching was computed
    pub partitions_matched: u64,

    /// Number of pairs emitted
    pub pairs_formed: u64,

    /// SHA-256 over the SSZ bytes of the emitted pairs
    pub pairing_root: [u8; 32],
}

impl PairingReceipt {
    pub fn new(
        requests_received: u64,
        requests_active: u64,
        partitions_matched: u64,
        pairs_formed: u64,
        pairing_root: [u8; 32],
    ) -> Self {
        Self {
            requests_received,
            requests_active,
            partitions_matched,
            pairs_formed,
            pairing_root,
        }
    }

    /// Hash a pair sequence into a pairing root
    pub fn compute_root(pairs: &[MatchedPair]) -> Result<[u8; 32], ssz_rs::SerializeError> {
        let mut hasher = Sha256::new();
        for pair in pairs {
            hasher.update(ssz_rs::serialize(pair)?);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        Ok(root)
    }

    /// Get the pairing root as a hex string
    pub fn pairing_root_hex(&self) -> String {
        hex::encode(self.pairing_root)
    }

    /// Number of requests that ended up in a pair
    pub fn matched_requests(&self) -> u64 {
        self.pairs_formed * 2
    }

    /// Active requests left without a partner
    pub fn unmatched_requests(&self) -> u64 {
        self.requests_active.saturating_sub(self.matched_requests())
    }

    /// Share of active requests that were matched, to 4 decimal places.
    ///
    /// Returns None if no request wanted to move.
    pub fn match_rate(&self) -> Option<Decimal> {
        if self.requests_active == 0 {
            return None;
        }
        let rate = Decimal::from(self.matched_requests()) / Decimal::from(self.requests_active);
        Some(rate.round_dp(4))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
