//! Request partitioning by swap direction.
//!
//! ## Design
//!
//! Every active request travels in one direction `current -> desired`.
//! Requests are bucketed by direction in input order. Two buckets that are
//! each other's reverse form one [`GroupPair`], the unit the matcher works on.
//!
//! ```text
//! G1->G2: [1, 5, 9]      left
//! G2->G1: [2, 7]         right
//! G2->G3: [4]            no reverse bucket, never matched
//! ```

use std::collections::HashMap;

use crate::types::{GroupId, SwapRequest};

/// Ordered (from, to) pair of groups
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Direction {
    pub from: GroupId,
    pub to: GroupId,
}

impl Direction {
    pub fn new(from: impl Into<GroupId>, to: impl Into<GroupId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Direction of a request
    pub fn of(request: &SwapRequest) -> Self {
        Self {
            from: request.current.clone(),
            to: request.desired.clone(),
        }
    }

    /// The opposite direction
    pub fn reverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Requests flowing both ways between two groups.
///
/// `left` holds the direction that was seen first in the input.
#[derive(Debug, Clone)]
pub struct GroupPair<'a> {
    /// Direction of the left side
    pub direction: Direction,

    /// Requests moving along `direction`, in input order
    pub left: Vec<&'a SwapRequest>,

    /// Requests moving the opposite way, in input order
    pub right: Vec<&'a SwapRequest>,
}

/// Active requests bucketed by direction.
#[derive(Debug, Default)]
pub struct Partitions<'a> {
    /// Directions in first-seen order
    order: Vec<Direction>,

    /// Direction to its requests
    buckets: HashMap<Direction, Vec<&'a SwapRequest>>,

    /// Requests dropped because they are already satisfied
    satisfied: usize,
}

impl<'a> Partitions<'a> {
    /// Bucket `requests` by direction, dropping satisfied ones
    pub fn build(requests: &'a [SwapRequest]) -> Self {
        let mut partitions = Self::default();

        for request in requests {
            if request.is_satisfied() {
                partitions.satisfied += 1;
                continue;
            }
            let direction = Direction::of(request);
            match partitions.buckets.get_mut(&direction) {
                Some(bucket) => bucket.push(request),
                None => {
                    partitions.order.push(direction.clone());
                    partitions.buckets.insert(direction, vec![request]);
                }
            }
        }

        partitions
    }

    /// Requests moving along `direction`
    #[cfg(test)]
    pub fn get(&self, direction: &Direction) -> &[&'a SwapRequest] {
        self.buckets
            .get(direction)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Directions in first-seen order
    #[cfg(test)]
    pub fn directions(&self) -> impl Iterator<Item = &Direction> {
        self.order.iter()
    }

    /// Number of distinct directions
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Number of requests kept for matching
    pub fn active_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Number of requests dropped as already satisfied
    #[inline]
    pub fn satisfied_count(&self) -> usize {
        self.satisfied
    }

    /// Split into group pairs that have requests in both directions.
    ///
    /// Pairs come out in the order their first direction was seen. Directions
    /// with no reverse bucket are dropped.
    pub fn into_group_pairs(mut self) -> Vec<GroupPair<'a>> {
        let mut pairs = Vec::new();

        for direction in self.order {
            let reverse = direction.reverse();
            if !self.buckets.contains_key(&direction) || !self.buckets.contains_key(&reverse) {
                // Already consumed as a reverse side, or one-way only
                continue;
            }
            let left = self.buckets.remove(&direction).unwrap_or_default();
            let right = self.buckets.remove(&reverse).unwrap_or_default();
            pairs.push(GroupPair {
                direction,
                left,
                right,
            });
        }

        pairs
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
