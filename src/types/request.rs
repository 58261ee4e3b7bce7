//! Swap request types.
//!
//! A request moves one person from `current` to `desired`. A request whose
//! two groups are equal is already satisfied and never takes part in matching.

use std::fmt;

/// Unique request identifier (typically a student or member number)
pub type RequestId = u64;

// ============================================================================
// GroupId
// ============================================================================

/// Opaque group identifier.
///
/// Only equality, ordering and hashing are ever used; the text is never
/// interpreted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GroupId(String);

impl GroupId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for GroupId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// SwapRequest
// ============================================================================

/// One person's request to trade their current group for another.
///
/// ## Consent
///
/// A flexible request accepts any counterpart whose groups complement its
/// own. A restrictive request (`flexible == false`) accepts only the request
/// named in `preferred_partner`.
///
/// ## Example
///
/// ```
/// use swap_pairing::types::SwapRequest;
///
/// let a = SwapRequest::flexible(1, "G1", "G2");
/// let b = SwapRequest::restricted(2, "G2", "G1", 1);
///
/// assert!(a.accepts(2));
/// assert!(b.accepts(1));
/// assert!(!b.accepts(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
    /// Unique request identifier
    pub id: RequestId,

    /// Group the requester is in now
    pub current: GroupId,

    /// Group the requester wants to move to
    pub desired: GroupId,

    /// Whether any complementary counterpart is acceptable
    pub flexible: bool,

    /// The only acceptable counterpart when not flexible
    pub preferred_partner: Option<RequestId>,
}

impl SwapRequest {
    /// Create a request from its raw fields
    pub fn new(
        id: RequestId,
        current: impl Into<GroupId>,
        desired: impl Into<GroupId>,
        flexible: bool,
        preferred_partner: Option<RequestId>,
    ) -> Self {
        Self {
            id,
            current: current.into(),
            desired: desired.into(),
            flexible,
            preferred_partner,
        }
    }

    /// Create a request that accepts any complementary counterpart
    pub fn flexible(
        id: RequestId,
        current: impl Into<GroupId>,
        desired: impl Into<GroupId>,
    ) -> Self {
        Self::new(id, current, desired, true, None)
    }

    /// Create a request that only accepts `partner`
    pub fn restricted(
        id: RequestId,
        current: impl Into<GroupId>,
        desired: impl Into<GroupId>,
        partner: RequestId,
    ) -> Self {
        Self::new(id, current, desired, false, Some(partner))
    }

    /// True when the requester is already in the group they want
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        self.current == self.desired
    }

    /// Whether this request consents to being paired with `other`.
    ///
    /// Group compatibility is not checked here.
    #[inline]
    pub fn accepts(&self, other: RequestId) -> bool {
        self.flexible || self.preferred_partner == Some(other)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_id_conversions() {
        let a = GroupId::from("G1");
        let b = GroupId::from(String::from("G1"));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "G1");
        assert_eq!(a.to_string(), "G1");
        assert!(GroupId::from("G1") < GroupId::from("G2"));
    }

    #[test]
    fn test_flexible_request() {
        let req = SwapRequest::flexible(1, "G1", "G2");

        assert_eq!(req.id, 1);
        assert!(req.flexible);
        assert_eq!(req.preferred_partner, None);
        assert!(!req.is_satisfied());
        assert!(req.accepts(2));
        assert!(req.accepts(99));
    }

    #[test]
    fn test_restricted_request() {
        let req = SwapRequest::restricted(3, "G1", "G2", 4);

        assert!(!req.flexible);
        assert_eq!(req.preferred_partner, Some(4));
        assert!(req.accepts(4));
        assert!(!req.accepts(5));
    }

    #[test]
    fn test_flexible_ignores_preference() {
        // A stale preference on a flexible request does not narrow it
        let req = SwapRequest::new(1, "G1", "G2", true, Some(9));
        assert!(req.accepts(2));
        assert!(req.accepts(9));
    }

    #[test]
    fn test_satisfied_request() {
        let req = SwapRequest::flexible(7, "G1", "G1");
        assert!(req.is_satisfied());
    }
}
