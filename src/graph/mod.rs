//! Bipartite graph layer of the pairing engine.
//!
//! ## Components
//!
//! - [`EligibilityGraph`]: consent edges between the two sides of a group pair
//! - [`hopcroft_karp`]: maximum matching over adjacency lists
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Build graph | O(\|L\|·\|R\|), O(1) per restrictive left node |
//! | Maximum matching | O(E·√V) |

pub mod eligibility;
pub mod hopcroft_karp;

pub use eligibility::EligibilityGraph;
pub use hopcroft_karp::{hopcroft_karp, maximum_matching, Matching};
