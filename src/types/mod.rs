//! Core data types for the pairing engine
//!
//! ## Types
//!
//! - [`SwapRequest`]: One person's request to trade groups
//! - [`GroupId`]: Opaque group identifier
//! - [`MatchedPair`]: Two mutually matched request ids
//! - [`PairingReceipt`]: Deterministic summary of a pairing run
//!
//! `MatchedPair` and `PairingReceipt` implement SSZ serialization so a run
//! can be reduced to a reproducible 32-byte pairing root.

mod request;
mod pair;
mod receipt;

pub use request::{GroupId, RequestId, SwapRequest};
pub use pair::MatchedPair;
pub use receipt::PairingReceipt;
