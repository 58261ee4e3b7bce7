//! Matched pair type representing one agreed two-way swap.
//!
//! ## SSZ Serialization
//!
//! Pairs are serialized using SSZ so the sequence emitted by a run can be
//! hashed into a reproducible pairing root.

use std::fmt;

use ssz_rs::prelude::*;

use crate::types::RequestId;

/// Two request ids that trade groups with each other.
///
/// The pair is unordered; it is always stored with `first < second` so the
/// same swap is reported identically whichever side it was found from.
///
/// ## Example
///
/// ```
/// use swap_pairing::types::MatchedPair;
///
/// let pair = MatchedPair::new(9, 4);
/// assert_eq!((pair.first, pair.second), (4, 9));
/// assert_eq!(pair, MatchedPair::new(4, 9));
/// assert_eq!(pair.partner_of(9), Some(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, SimpleSerialize)]
pub struct MatchedPair {
    /// Smaller of the two ids
    pub first: u64,

    /// Larger of the two ids
    pub second: u64,
}

impl MatchedPair {
    /// Create a pair in canonical order
    pub fn new(a: RequestId, b: RequestId) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Check whether `id` is one side of this pair
    #[inline]
    pub fn contains(&self, id: RequestId) -> bool {
        self.first == id || self.second == id
    }

    /// The other side of the pair, if `id` belongs to it
    pub fn partner_of(&self, id: RequestId) -> Option<RequestId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }

    /// Both ids as a tuple in canonical order
    #[inline]
    pub fn ids(&self) -> (RequestId, RequestId) {
        (self.first, self.second)
    }
}

impl fmt::Display for MatchedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
