//! Up-front validation of a request set.
//!
//! Runs once over the whole input before any partitioning. The first problem
//! found, in input order, fails the run.
//!
//! Satisfied requests (current == desired) still reserve their id, so a
//! duplicate involving one is reported, and they may be named as a partner.
//! Their own partner fields are never checked because they never match.

use std::collections::HashSet;

use crate::error::{InvalidReason, ValidationError};
use crate::types::{RequestId, SwapRequest};

/// Check ids, partner fields and partner references across `requests`.
///
/// # Example
///
/// ```
/// use swap_pairing::types::SwapRequest;
/// use swap_pairing::validate::validate_requests;
///
/// let requests = vec![
///     SwapRequest::restricted(3, "G1", "G2", 4),
///     SwapRequest::restricted(4, "G2", "G1", 3),
/// ];
/// assert!(validate_requests(&requests).is_ok());
/// ```
pub fn validate_requests(requests: &[SwapRequest]) -> Result<(), ValidationError> {
    let mut ids: HashSet<RequestId> = HashSet::with_capacity(requests.len());
    for request in requests {
        if !ids.insert(request.id) {
            return Err(ValidationError::DuplicateId { id: request.id });
        }
    }

    for request in requests.iter().filter(|r| !r.is_satisfied() && !r.flexible) {
        let partner = check_partner(request)?;
        if !ids.contains(&partner) {
            return Err(ValidationError::DanglingReference {
                id: request.id,
                partner,
            });
        }
    }

    Ok(())
}

/// Partner of a restrictive request, if well formed
fn check_partner(request: &SwapRequest) -> Result<RequestId, ValidationError> {
    match request.preferred_partner {
        None => Err(ValidationError::InvalidRequest {
            id: request.id,
            reason: InvalidReason::MissingPartner,
        }),
        Some(partner) if partner == request.id => Err(ValidationError::InvalidRequest {
            id: request.id,
            reason: InvalidReason::SelfPartner,
        }),
        Some(partner) => Ok(partner),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
