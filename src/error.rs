//! Error types for the pairing engine.
//!
//! Validation problems are reported before any matching begins: a malformed
//! request anywhere in the input invalidates the whole run.

use thiserror::Error;

use crate::types::RequestId;

/// Why a restrictive request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// The request is not flexible but names no preferred partner
    MissingPartner,
    /// The request names itself as its preferred partner
    SelfPartner,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::MissingPartner => f.write_str("restrictive request names no partner"),
            InvalidReason::SelfPartner => f.write_str("request names itself as partner"),
        }
    }
}

/// A problem found in the input before matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two requests share the same id
    #[error("duplicate request id {id}")]
    DuplicateId { id: RequestId },

    /// A restrictive request is malformed
    #[error("invalid request {id}: {reason}")]
    InvalidRequest {
        id: RequestId,
        reason: InvalidReason,
    },

    /// A preferred partner id does not belong to any request
    #[error("request {id} prefers partner {partner}, which is not in the input")]
    DanglingReference { id: RequestId, partner: RequestId },
}

/// Errors returned by a pairing run.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Canonical encoding of the emitted pairs failed
    #[error("failed to encode pairing: {0}")]
    Encoding(#[from] ssz_rs::SerializeError),
}

impl MatchError {
    /// The validation failure behind this error, if any
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            MatchError::Validation(err) => Some(err),
            MatchError::Encoding(_) => None,
        }
    }
}
